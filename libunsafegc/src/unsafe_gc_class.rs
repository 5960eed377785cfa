//! Natives of `com.threerings.util.unsafe.UnsafeGC`, the gc only sibling of `Unsafe`.

use jni_jvmpi_bindings::{jboolean, jclass, JNIEnv};

use crate::{init, set_gc};

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_UnsafeGC_init(env: *mut JNIEnv, _clazz: jclass) -> jboolean {
    init(env)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_UnsafeGC_enableGC(_env: *mut JNIEnv, _clazz: jclass) {
    set_gc(true)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_UnsafeGC_disableGC(_env: *mut JNIEnv, _clazz: jclass) {
    set_gc(false)
}
