use jni_jvmpi_bindings::jint;

/// Entry points of a negotiated profiler interface. Owned by the host, only borrowed here.
pub trait CapabilityTable {
    fn enable_gc(&self);
    fn disable_gc(&self);
}

/// The calling thread's view of the host, i.e. a `JNIEnv`.
pub trait HostEnv {
    type Vm: HostVm;

    /// `GetJavaVM`. Errors carry the raw JNI status.
    fn java_vm(&self) -> Result<Self::Vm, jint>;
}

/// A handle to the running host, i.e. a `JavaVM`.
pub trait HostVm {
    type Table: CapabilityTable;

    /// `GetEnv` for a versioned interface. Errors carry the raw JNI status.
    fn get_interface(&self, version: jint) -> Result<Self::Table, jint>;
}
