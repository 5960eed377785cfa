use std::thread;
use std::time::Duration;

use jni_jvmpi_bindings::jint;
use nix::unistd::{setegid, seteuid, setgid, setuid, Gid, Uid};
use tracing::debug;

use crate::errors::ProcessError;
use crate::process::{ProcessControl, ProcessOp};

/// Straight calls into libc via nix.
#[derive(Debug, Default, Clone, Copy)]
pub struct Posix;

fn raw_id(op: ProcessOp, id: jint) -> Result<u32, ProcessError> {
    u32::try_from(id).map_err(|_| ProcessError::InvalidId { op, id })
}

fn os_result(op: ProcessOp, res: nix::Result<()>) -> Result<(), ProcessError> {
    res.map_err(|errno| ProcessError::Os { op, errno: errno as i32 })
}

impl ProcessControl for Posix {
    fn sleep(&self, millis: jint) -> Result<(), ProcessError> {
        let millis = u64::try_from(millis).map_err(|_| ProcessError::InvalidDuration(millis))?;
        thread::sleep(Duration::from_millis(millis));
        Ok(())
    }

    fn set_uid(&self, uid: jint) -> Result<(), ProcessError> {
        let op = ProcessOp::SetUid;
        let uid = Uid::from_raw(raw_id(op, uid)?);
        debug!("setuid({})", uid);
        os_result(op, setuid(uid))
    }

    fn set_gid(&self, gid: jint) -> Result<(), ProcessError> {
        let op = ProcessOp::SetGid;
        let gid = Gid::from_raw(raw_id(op, gid)?);
        debug!("setgid({})", gid);
        os_result(op, setgid(gid))
    }

    fn set_effective_uid(&self, uid: jint) -> Result<(), ProcessError> {
        let op = ProcessOp::SetEffectiveUid;
        let uid = Uid::from_raw(raw_id(op, uid)?);
        debug!("seteuid({})", uid);
        os_result(op, seteuid(uid))
    }

    fn set_effective_gid(&self, gid: jint) -> Result<(), ProcessError> {
        let op = ProcessOp::SetEffectiveGid;
        let gid = Gid::from_raw(raw_id(op, gid)?);
        debug!("setegid({})", gid);
        os_result(op, setegid(gid))
    }
}
