use jni_jvmpi_bindings::jint;
use strum_macros::{Display, EnumIter};

use crate::errors::ProcessError;

#[cfg(all(unix, feature = "posix"))]
pub mod posix;
pub mod unsupported;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ProcessOp {
    #[strum(serialize = "sleep")]
    Sleep,
    #[strum(serialize = "setuid")]
    SetUid,
    #[strum(serialize = "setgid")]
    SetGid,
    #[strum(serialize = "seteuid")]
    SetEffectiveUid,
    #[strum(serialize = "setegid")]
    SetEffectiveGid,
}

/// Sleep and identity changes for the current process.
pub trait ProcessControl: Send + Sync {
    fn sleep(&self, millis: jint) -> Result<(), ProcessError>;

    fn set_uid(&self, uid: jint) -> Result<(), ProcessError>;

    fn set_gid(&self, gid: jint) -> Result<(), ProcessError>;

    fn set_effective_uid(&self, uid: jint) -> Result<(), ProcessError>;

    fn set_effective_gid(&self, gid: jint) -> Result<(), ProcessError>;

    /// Calls the operation named by `op` with `arg`.
    fn dispatch(&self, op: ProcessOp, arg: jint) -> Result<(), ProcessError> {
        match op {
            ProcessOp::Sleep => self.sleep(arg),
            ProcessOp::SetUid => self.set_uid(arg),
            ProcessOp::SetGid => self.set_gid(arg),
            ProcessOp::SetEffectiveUid => self.set_effective_uid(arg),
            ProcessOp::SetEffectiveGid => self.set_effective_gid(arg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessBackend {
    Unsupported,
    #[cfg(all(unix, feature = "posix"))]
    Posix,
}

static UNSUPPORTED: unsupported::Unsupported = unsupported::Unsupported;
#[cfg(all(unix, feature = "posix"))]
static POSIX: posix::Posix = posix::Posix;

impl ProcessBackend {
    /// The backend picked at build time by the `posix` feature.
    #[cfg(all(unix, feature = "posix"))]
    pub const fn configured() -> Self {
        ProcessBackend::Posix
    }

    #[cfg(not(all(unix, feature = "posix")))]
    pub const fn configured() -> Self {
        ProcessBackend::Unsupported
    }

    pub fn control(self) -> &'static dyn ProcessControl {
        match self {
            ProcessBackend::Unsupported => &UNSUPPORTED,
            #[cfg(all(unix, feature = "posix"))]
            ProcessBackend::Posix => &POSIX,
        }
    }
}

impl Default for ProcessBackend {
    fn default() -> Self {
        Self::configured()
    }
}
