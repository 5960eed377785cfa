//! Natives of `com.threerings.util.unsafe.Unsafe`.

use jni_jvmpi_bindings::{jboolean, jclass, jint, JNIEnv};
use unsafe_natives::ProcessOp;

use crate::{init, process_call, set_gc};

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_init(env: *mut JNIEnv, _clazz: jclass) -> jboolean {
    init(env)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_enableGC(_env: *mut JNIEnv, _clazz: jclass) {
    set_gc(true)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_disableGC(_env: *mut JNIEnv, _clazz: jclass) {
    set_gc(false)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_nativeSleep(_env: *mut JNIEnv, _clazz: jclass, millis: jint) {
    process_call(ProcessOp::Sleep, millis);
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_nativeSetuid(_env: *mut JNIEnv, _clazz: jclass, uid: jint) -> jboolean {
    process_call(ProcessOp::SetUid, uid)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_nativeSetgid(_env: *mut JNIEnv, _clazz: jclass, gid: jint) -> jboolean {
    process_call(ProcessOp::SetGid, gid)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_nativeSeteuid(_env: *mut JNIEnv, _clazz: jclass, uid: jint) -> jboolean {
    process_call(ProcessOp::SetEffectiveUid, uid)
}

#[no_mangle]
pub unsafe extern "system" fn Java_com_threerings_util_unsafe_Unsafe_nativeSetegid(_env: *mut JNIEnv, _clazz: jclass, gid: jint) -> jboolean {
    process_call(ProcessOp::SetEffectiveGid, gid)
}
