use std::ptr::null_mut;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use jni_jvmpi_bindings::{jint, JNI_EDETACHED, JNI_ERR, JNI_EVERSION, JVMPI_VERSION_1};
use unsafe_natives::fake_host::{gc_counts, FakeJvm};
use unsafe_natives::jvm_host::RawJniEnv;
use unsafe_natives::{initialize, initialize_version, GcError, GcSlot, HandshakeError};

#[test]
pub fn null_env() {
    let env = unsafe { RawJniEnv::from_raw(null_mut()) };
    assert_eq!(initialize(&env).err(), Some(HandshakeError::NoRuntime { status: JNI_ERR }));
}

#[test]
pub fn detached_env() {
    let env = unsafe { RawJniEnv::from_raw(FakeJvm::Detached.env()) };
    assert_eq!(initialize(&env).err(), Some(HandshakeError::NoRuntime { status: JNI_EDETACHED }));
}

#[test]
pub fn vm_without_jvmpi() {
    let env = unsafe { RawJniEnv::from_raw(FakeJvm::Modern.env()) };
    assert_eq!(initialize(&env).err(), Some(HandshakeError::InterfaceUnavailable { version: JVMPI_VERSION_1, status: JNI_EVERSION }));
}

#[test]
pub fn unknown_jvmpi_version() {
    let env = unsafe { RawJniEnv::from_raw(FakeJvm::Jvmpi.env()) };
    let version_1_2: jint = 0x10000003;
    assert_eq!(initialize_version(&env, version_1_2).err(), Some(HandshakeError::InterfaceUnavailable { version: version_1_2, status: JNI_EVERSION }));
}

#[test]
pub fn gc_through_jvmpi_table() {
    let slot = GcSlot::new();
    assert_eq!(slot.enable_gc(), Err(GcError::Uninitialized));

    let modern = unsafe { RawJniEnv::from_raw(FakeJvm::Modern.env()) };
    assert!(slot.initialize_with(|| initialize(&modern)).is_err());
    assert!(!slot.is_initialized());

    let env = unsafe { RawJniEnv::from_raw(FakeJvm::Jvmpi.env()) };
    slot.initialize_with(|| initialize(&env)).unwrap();
    assert_eq!(gc_counts(), (0, 0));
    slot.enable_gc().unwrap();
    assert_eq!(gc_counts(), (1, 0));
    slot.disable_gc().unwrap();
    assert_eq!(gc_counts(), (1, 1));
}

#[test]
pub fn concurrent_init_runs_one_handshake() {
    let slot = Arc::new(GcSlot::new());
    let handshakes = Arc::new(AtomicUsize::new(0));
    let threads = (0..16)
        .map(|_| {
            let slot = slot.clone();
            let handshakes = handshakes.clone();
            thread::spawn(move || {
                slot.initialize_with(|| {
                    handshakes.fetch_add(1, Ordering::SeqCst);
                    let env = unsafe { RawJniEnv::from_raw(FakeJvm::Jvmpi.env()) };
                    initialize(&env)
                })
            })
        })
        .collect::<Vec<_>>();
    for thread in threads {
        assert_eq!(thread.join().unwrap(), Ok(()));
    }
    assert_eq!(handshakes.load(Ordering::SeqCst), 1);
    assert!(slot.is_initialized());
}
