use jni_jvmpi_bindings::jint;
use tracing::debug;

use crate::errors::ProcessError;
use crate::process::{ProcessControl, ProcessOp};

/// Every call is refused and nothing about the process changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl Unsupported {
    fn refuse(op: ProcessOp, arg: jint) -> Result<(), ProcessError> {
        debug!("{}({}) not supported", op, arg);
        Err(ProcessError::Unsupported(op))
    }
}

impl ProcessControl for Unsupported {
    fn sleep(&self, millis: jint) -> Result<(), ProcessError> {
        Self::refuse(ProcessOp::Sleep, millis)
    }

    fn set_uid(&self, uid: jint) -> Result<(), ProcessError> {
        Self::refuse(ProcessOp::SetUid, uid)
    }

    fn set_gid(&self, gid: jint) -> Result<(), ProcessError> {
        Self::refuse(ProcessOp::SetGid, gid)
    }

    fn set_effective_uid(&self, uid: jint) -> Result<(), ProcessError> {
        Self::refuse(ProcessOp::SetEffectiveUid, uid)
    }

    fn set_effective_gid(&self, gid: jint) -> Result<(), ProcessError> {
        Self::refuse(ProcessOp::SetEffectiveGid, gid)
    }
}
