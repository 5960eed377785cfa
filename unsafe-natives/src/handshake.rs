use jni_jvmpi_bindings::{jint, JVMPI_VERSION_1};
use tracing::{debug, error};

use crate::errors::HandshakeError;
use crate::gc::GcControl;
use crate::host::{HostEnv, HostVm};

pub fn initialize<E: HostEnv>(env: &E) -> Result<GcControl<<E::Vm as HostVm>::Table>, HandshakeError> {
    initialize_version(env, JVMPI_VERSION_1)
}

pub fn initialize_version<E: HostEnv>(env: &E, version: jint) -> Result<GcControl<<E::Vm as HostVm>::Table>, HandshakeError> {
    let vm = env.java_vm().map_err(|status| {
        let err = HandshakeError::NoRuntime { status };
        error!("{}", err);
        err
    })?;
    debug!("got JavaVM from env, requesting interface {:#x}", version);
    let table = vm.get_interface(version).map_err(|status| {
        let err = HandshakeError::InterfaceUnavailable { version, status };
        error!("{}", err);
        err
    })?;
    Ok(GcControl::new(table))
}
