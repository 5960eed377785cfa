//! A fake JVM assembled from the binding types, for driving the raw entry points without a real
//! VM. The gc counters are process wide, so keep assertions on them to one test per binary.

use std::ffi::c_void;
use std::ptr::null_mut;
use std::sync::atomic::{AtomicUsize, Ordering};

use jni_jvmpi_bindings::{jint, JavaVM, JNIEnv, JNIInvokeInterface_, JNINativeInterface_, JNI_EDETACHED, JNI_EVERSION, JNI_OK, JVMPI_Interface, JVMPI_VERSION_1};

static ENABLES: AtomicUsize = AtomicUsize::new(0);
static DISABLES: AtomicUsize = AtomicUsize::new(0);

unsafe extern "C" fn count_enable() {
    ENABLES.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "C" fn count_disable() {
    DISABLES.fetch_add(1, Ordering::SeqCst);
}

/// `(EnableGC calls, DisableGC calls)` so far.
pub fn gc_counts() -> (usize, usize) {
    (ENABLES.load(Ordering::SeqCst), DISABLES.load(Ordering::SeqCst))
}

static JVMPI: JVMPI_Interface = JVMPI_Interface::gc_only(count_disable, count_enable, JVMPI_VERSION_1);

unsafe extern "system" fn get_env_jvmpi(_vm: *mut JavaVM, penv: *mut *mut c_void, version: jint) -> jint {
    if version != JVMPI_VERSION_1 {
        return JNI_EVERSION;
    }
    *penv = &JVMPI as *const JVMPI_Interface as *mut c_void;
    JNI_OK
}

unsafe extern "system" fn get_env_modern(_vm: *mut JavaVM, penv: *mut *mut c_void, _version: jint) -> jint {
    *penv = null_mut();
    JNI_EVERSION
}

const fn invoke_interface(get_env: unsafe extern "system" fn(*mut JavaVM, *mut *mut c_void, jint) -> jint) -> JNIInvokeInterface_ {
    JNIInvokeInterface_ {
        reserved0: null_mut(),
        reserved1: null_mut(),
        reserved2: null_mut(),
        DestroyJavaVM: None,
        AttachCurrentThread: None,
        DetachCurrentThread: None,
        GetEnv: Some(get_env),
        AttachCurrentThreadAsDaemon: None,
    }
}

static INVOKE_JVMPI: JNIInvokeInterface_ = invoke_interface(get_env_jvmpi);
static INVOKE_MODERN: JNIInvokeInterface_ = invoke_interface(get_env_modern);

struct VmCell(JavaVM);

unsafe impl Sync for VmCell {}

static VM_JVMPI: VmCell = VmCell(&INVOKE_JVMPI);
static VM_MODERN: VmCell = VmCell(&INVOKE_MODERN);

unsafe extern "system" fn get_java_vm_jvmpi(_env: *mut JNIEnv, vm: *mut *mut JavaVM) -> jint {
    *vm = &VM_JVMPI.0 as *const JavaVM as *mut JavaVM;
    JNI_OK
}

unsafe extern "system" fn get_java_vm_modern(_env: *mut JNIEnv, vm: *mut *mut JavaVM) -> jint {
    *vm = &VM_MODERN.0 as *const JavaVM as *mut JavaVM;
    JNI_OK
}

unsafe extern "system" fn get_java_vm_detached(_env: *mut JNIEnv, vm: *mut *mut JavaVM) -> jint {
    *vm = null_mut();
    JNI_EDETACHED
}

static NATIVE_JVMPI: JNINativeInterface_ = JNINativeInterface_::with_get_java_vm(get_java_vm_jvmpi);
static NATIVE_MODERN: JNINativeInterface_ = JNINativeInterface_::with_get_java_vm(get_java_vm_modern);
static NATIVE_DETACHED: JNINativeInterface_ = JNINativeInterface_::with_get_java_vm(get_java_vm_detached);

struct EnvCell(JNIEnv);

unsafe impl Sync for EnvCell {}

static ENV_JVMPI: EnvCell = EnvCell(&NATIVE_JVMPI);
static ENV_MODERN: EnvCell = EnvCell(&NATIVE_MODERN);
static ENV_DETACHED: EnvCell = EnvCell(&NATIVE_DETACHED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeJvm {
    /// Hands out a JVMPI table whose gc entry points bump [`gc_counts`].
    Jvmpi,
    /// Has a `JavaVM` but refuses every `GetEnv`, like any JDK from 6 on.
    Modern,
    /// `GetJavaVM` fails.
    Detached,
}

impl FakeJvm {
    /// Only ever read through, never written.
    pub fn env(self) -> *mut JNIEnv {
        let cell = match self {
            FakeJvm::Jvmpi => &ENV_JVMPI,
            FakeJvm::Modern => &ENV_MODERN,
            FakeJvm::Detached => &ENV_DETACHED,
        };
        &cell.0 as *const JNIEnv as *mut JNIEnv
    }
}
