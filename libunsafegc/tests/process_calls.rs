#![cfg(not(feature = "posix"))]

use std::ptr::null_mut;
use std::time::{Duration, Instant};

use jni_jvmpi_bindings::JNI_FALSE;
use unsafegc::unsafe_class::{Java_com_threerings_util_unsafe_Unsafe_nativeSetegid, Java_com_threerings_util_unsafe_Unsafe_nativeSeteuid, Java_com_threerings_util_unsafe_Unsafe_nativeSetgid, Java_com_threerings_util_unsafe_Unsafe_nativeSetuid, Java_com_threerings_util_unsafe_Unsafe_nativeSleep};

const IDS: [i32; 6] = [0, 1, 65534, -1, i32::MIN, i32::MAX];

#[cfg(unix)]
fn ids() -> (u32, u32, u32, u32) {
    use nix::unistd::{getegid, geteuid, getgid, getuid};
    (getuid().as_raw(), getgid().as_raw(), geteuid().as_raw(), getegid().as_raw())
}

#[test]
pub fn setters_always_fail() {
    #[cfg(unix)]
    let before = ids();
    for id in IDS {
        unsafe {
            assert_eq!(Java_com_threerings_util_unsafe_Unsafe_nativeSetuid(null_mut(), null_mut(), id), JNI_FALSE);
            assert_eq!(Java_com_threerings_util_unsafe_Unsafe_nativeSetgid(null_mut(), null_mut(), id), JNI_FALSE);
            assert_eq!(Java_com_threerings_util_unsafe_Unsafe_nativeSeteuid(null_mut(), null_mut(), id), JNI_FALSE);
            assert_eq!(Java_com_threerings_util_unsafe_Unsafe_nativeSetegid(null_mut(), null_mut(), id), JNI_FALSE);
        }
    }
    #[cfg(unix)]
    assert_eq!(ids(), before);
}

#[test]
pub fn sleep_does_nothing() {
    let start = Instant::now();
    for millis in IDS {
        unsafe { Java_com_threerings_util_unsafe_Unsafe_nativeSleep(null_mut(), null_mut(), millis) };
    }
    assert!(start.elapsed() < Duration::from_secs(60));
}
