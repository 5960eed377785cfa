#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

//! Hand written subset of `jni.h` and `jvmpi.h`. Only the parts the unsafe natives touch are
//! laid out; everything else in the function tables is kept as opaque slots so offsets line up.

use std::ffi::c_void;

pub mod invoke_interface;
pub mod jni_interface;
pub mod jvmpi_interface;

pub use invoke_interface::{JavaVM, JNIInvokeInterface_};
pub use jni_interface::{JNIEnv, JNINativeInterface_};
pub use jvmpi_interface::{JVMPI_Interface, JVMPI_VERSION_1};

pub type jint = i32;
pub type jboolean = u8;

pub type jclass = *mut c_void;

pub const JNI_OK: jint = 0;
pub const JNI_ERR: jint = -1;
pub const JNI_EDETACHED: jint = -2;
pub const JNI_EVERSION: jint = -3;

pub const JNI_TRUE: jboolean = 1;
pub const JNI_FALSE: jboolean = 0;

/// A table slot this crate never calls through.
pub type ReservedSlot = *mut c_void;

pub trait AsJBoolean {
    fn as_jboolean(&self) -> jboolean;
}

impl AsJBoolean for bool {
    fn as_jboolean(&self) -> jboolean {
        if *self {
            JNI_TRUE
        } else {
            JNI_FALSE
        }
    }
}
