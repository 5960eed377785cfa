use std::ffi::c_void;

use crate::{jint, ReservedSlot};

/// `typedef const struct JNIInvokeInterface_ *JavaVM;`
pub type JavaVM = *const JNIInvokeInterface_;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct JNIInvokeInterface_ {
    pub reserved0: ReservedSlot,
    pub reserved1: ReservedSlot,
    pub reserved2: ReservedSlot,
    pub DestroyJavaVM: Option<unsafe extern "system" fn(vm: *mut JavaVM) -> jint>,
    pub AttachCurrentThread: Option<unsafe extern "system" fn(vm: *mut JavaVM, penv: *mut *mut c_void, args: *mut c_void) -> jint>,
    pub DetachCurrentThread: Option<unsafe extern "system" fn(vm: *mut JavaVM) -> jint>,
    pub GetEnv: Option<unsafe extern "system" fn(vm: *mut JavaVM, penv: *mut *mut c_void, version: jint) -> jint>,
    pub AttachCurrentThreadAsDaemon: Option<unsafe extern "system" fn(vm: *mut JavaVM, penv: *mut *mut c_void, args: *mut c_void) -> jint>,
}

unsafe impl Send for JNIInvokeInterface_ {}

unsafe impl Sync for JNIInvokeInterface_ {}
