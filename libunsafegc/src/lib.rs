#![allow(non_snake_case)]

use jni_jvmpi_bindings::{jboolean, jint, AsJBoolean, JNIEnv, JNI_FALSE};
use lazy_static::lazy_static;
use tracing::warn;

use unsafe_natives::jvm_host::{JvmpiTable, RawJniEnv};
use unsafe_natives::{initialize, GcError, GcSlot, ProcessBackend, ProcessControl, ProcessError, ProcessOp};

pub mod logging;
pub mod unsafe_class;
pub mod unsafe_gc_class;

lazy_static! {
    /// Shared by `Unsafe` and `UnsafeGC`; both talk to the same collector.
    pub static ref GC: GcSlot<JvmpiTable> = GcSlot::new();
}

pub fn process_control() -> &'static dyn ProcessControl {
    ProcessBackend::configured().control()
}

unsafe fn init(env: *mut JNIEnv) -> jboolean {
    logging::init();
    let env = RawJniEnv::from_raw(env);
    GC.initialize_with(|| initialize(&env)).is_ok().as_jboolean()
}

fn set_gc(enabled: bool) {
    logging::init();
    let res: Result<(), GcError> = if enabled { GC.enable_gc() } else { GC.disable_gc() };
    if let Err(err) = res {
        warn!("{} gc: {}", if enabled { "enable" } else { "disable" }, err);
    }
}

fn process_call(op: ProcessOp, arg: jint) -> jboolean {
    logging::init();
    match process_control().dispatch(op, arg) {
        Ok(()) => true.as_jboolean(),
        Err(ProcessError::Unsupported(_)) => JNI_FALSE,
        Err(err) => {
            warn!("{}", err);
            JNI_FALSE
        }
    }
}
