//! Rust side of the `com.threerings.util.unsafe` natives: a capability handshake with the host
//! JVM that yields a [`GcControl`] handle, a process wide [`GcSlot`] for the static JNI entry
//! points, and the [`ProcessControl`] backends behind sleep and the uid/gid setters.

pub mod errors;
#[cfg(any(test, feature = "test-utils"))]
pub mod fake_host;
pub mod gc;
pub mod handshake;
pub mod host;
pub mod jvm_host;
pub mod process;

pub use errors::{GcError, HandshakeError, ProcessError};
pub use gc::{GcControl, GcSlot, GcSwitch};
pub use handshake::{initialize, initialize_version};
pub use host::{CapabilityTable, HostEnv, HostVm};
pub use process::{ProcessBackend, ProcessControl, ProcessOp};
