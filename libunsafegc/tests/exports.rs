use std::ptr::null_mut;

use jni_jvmpi_bindings::{JNI_FALSE, JNI_TRUE};
use unsafe_natives::fake_host::{gc_counts, FakeJvm};
use unsafegc::unsafe_class::{Java_com_threerings_util_unsafe_Unsafe_disableGC, Java_com_threerings_util_unsafe_Unsafe_enableGC, Java_com_threerings_util_unsafe_Unsafe_init};
use unsafegc::unsafe_gc_class::{Java_com_threerings_util_unsafe_UnsafeGC_disableGC, Java_com_threerings_util_unsafe_UnsafeGC_enableGC, Java_com_threerings_util_unsafe_UnsafeGC_init};
use unsafegc::GC;

// one test, the slot behind the exports is process wide
#[test]
pub fn init_then_toggle() {
    unsafe {
        Java_com_threerings_util_unsafe_Unsafe_enableGC(null_mut(), null_mut());
        Java_com_threerings_util_unsafe_UnsafeGC_disableGC(null_mut(), null_mut());
        assert_eq!(gc_counts(), (0, 0));
        assert!(!GC.is_initialized());

        assert_eq!(Java_com_threerings_util_unsafe_Unsafe_init(null_mut(), null_mut()), JNI_FALSE);
        assert_eq!(Java_com_threerings_util_unsafe_Unsafe_init(FakeJvm::Detached.env(), null_mut()), JNI_FALSE);
        assert_eq!(Java_com_threerings_util_unsafe_UnsafeGC_init(FakeJvm::Modern.env(), null_mut()), JNI_FALSE);
        assert!(!GC.is_initialized());

        assert_eq!(Java_com_threerings_util_unsafe_Unsafe_init(FakeJvm::Jvmpi.env(), null_mut()), JNI_TRUE);
        assert_eq!(gc_counts(), (0, 0));
        Java_com_threerings_util_unsafe_Unsafe_enableGC(null_mut(), null_mut());
        assert_eq!(gc_counts(), (1, 0));
        Java_com_threerings_util_unsafe_Unsafe_disableGC(null_mut(), null_mut());
        assert_eq!(gc_counts(), (1, 1));

        // already initialized, the second class shares the table
        assert_eq!(Java_com_threerings_util_unsafe_UnsafeGC_init(FakeJvm::Modern.env(), null_mut()), JNI_TRUE);
        Java_com_threerings_util_unsafe_UnsafeGC_disableGC(null_mut(), null_mut());
        Java_com_threerings_util_unsafe_UnsafeGC_enableGC(null_mut(), null_mut());
        assert_eq!(gc_counts(), (2, 2));
        assert_eq!(GC.gc_enabled(), Some(true));
    }
}
