//! [`HostEnv`] over the raw pointers a JVM hands to native methods.

use std::ffi::c_void;
use std::ptr::{null_mut, NonNull};

use jni_jvmpi_bindings::{jint, JavaVM, JNIEnv, JNI_ERR, JNI_OK, JVMPI_Interface};
use tracing::warn;

use crate::host::{CapabilityTable, HostEnv, HostVm};

pub struct RawJniEnv {
    env: *mut JNIEnv,
}

impl RawJniEnv {
    /// # Safety
    /// `env` must be null or the `JNIEnv` of the current thread, as passed to a native method.
    pub unsafe fn from_raw(env: *mut JNIEnv) -> Self {
        Self { env }
    }
}

impl HostEnv for RawJniEnv {
    type Vm = RawJavaVm;

    fn java_vm(&self) -> Result<RawJavaVm, jint> {
        if self.env.is_null() {
            return Err(JNI_ERR);
        }
        let interface = unsafe { *self.env };
        if interface.is_null() {
            return Err(JNI_ERR);
        }
        let get_java_vm = unsafe { (*interface).GetJavaVM }.ok_or(JNI_ERR)?;
        let mut vm: *mut JavaVM = null_mut();
        let status = unsafe { get_java_vm(self.env, &mut vm) };
        if status != JNI_OK {
            return Err(status);
        }
        NonNull::new(vm).map(|vm| RawJavaVm { vm }).ok_or(JNI_ERR)
    }
}

pub struct RawJavaVm {
    vm: NonNull<JavaVM>,
}

impl HostVm for RawJavaVm {
    type Table = JvmpiTable;

    fn get_interface(&self, version: jint) -> Result<JvmpiTable, jint> {
        let vm = self.vm.as_ptr();
        let interface = unsafe { *vm };
        if interface.is_null() {
            return Err(JNI_ERR);
        }
        let get_env = unsafe { (*interface).GetEnv }.ok_or(JNI_ERR)?;
        let mut table: *mut c_void = null_mut();
        let status = unsafe { get_env(vm, &mut table, version) };
        if status < 0 {
            return Err(status);
        }
        NonNull::new(table as *mut JVMPI_Interface).map(|table| JvmpiTable { table }).ok_or(JNI_ERR)
    }
}

/// The host's `JVMPI_Interface`. The JVM keeps it alive until shutdown.
pub struct JvmpiTable {
    table: NonNull<JVMPI_Interface>,
}

unsafe impl Send for JvmpiTable {}

unsafe impl Sync for JvmpiTable {}

impl JvmpiTable {
    fn interface(&self) -> &JVMPI_Interface {
        unsafe { self.table.as_ref() }
    }
}

impl CapabilityTable for JvmpiTable {
    fn enable_gc(&self) {
        match self.interface().EnableGC {
            Some(enable_gc) => unsafe { enable_gc() },
            None => warn!("JVMPI table has no EnableGC"),
        }
    }

    fn disable_gc(&self) {
        match self.interface().DisableGC {
            Some(disable_gc) => unsafe { disable_gc() },
            None => warn!("JVMPI table has no DisableGC"),
        }
    }
}
