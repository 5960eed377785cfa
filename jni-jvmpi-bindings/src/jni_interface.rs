use std::ptr::null_mut;

use crate::{jint, JavaVM, ReservedSlot};

/// `typedef const struct JNINativeInterface_ *JNIEnv;`
pub type JNIEnv = *const JNINativeInterface_;

/// Index of `GetJavaVM` in the JNI function table.
pub const GET_JAVA_VM_INDEX: usize = 219;

/// Leading part of the JNI function table, up to and including `GetJavaVM`. The host's table is
/// longer; this is only ever read through a pointer handed to us by the JVM.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct JNINativeInterface_ {
    pub preceding: [ReservedSlot; GET_JAVA_VM_INDEX],
    pub GetJavaVM: Option<unsafe extern "system" fn(env: *mut JNIEnv, vm: *mut *mut JavaVM) -> jint>,
}

impl JNINativeInterface_ {
    pub const fn with_get_java_vm(get_java_vm: unsafe extern "system" fn(env: *mut JNIEnv, vm: *mut *mut JavaVM) -> jint) -> Self {
        Self {
            preceding: [null_mut(); GET_JAVA_VM_INDEX],
            GetJavaVM: Some(get_java_vm),
        }
    }
}

unsafe impl Send for JNINativeInterface_ {}

unsafe impl Sync for JNINativeInterface_ {}
