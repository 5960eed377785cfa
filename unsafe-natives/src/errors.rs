use jni_jvmpi_bindings::jint;
use thiserror::Error;

use crate::process::ProcessOp;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeError {
    #[error("failed to get JavaVM from env (status {status})")]
    NoRuntime { status: jint },
    #[error("failed to get interface {version:#x} from JavaVM (status {status})")]
    InterfaceUnavailable { version: jint, status: jint },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GcError {
    #[error("gc control used before a successful init")]
    Uninitialized,
    #[error(transparent)]
    Handshake(#[from] HandshakeError),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError {
    #[error("{0} is not supported")]
    Unsupported(ProcessOp),
    #[error("{op} called with invalid id {id}")]
    InvalidId { op: ProcessOp, id: jint },
    #[error("cannot sleep for {0}ms")]
    InvalidDuration(jint),
    #[error("{op} failed with errno {errno}")]
    Os { op: ProcessOp, errno: i32 },
}
