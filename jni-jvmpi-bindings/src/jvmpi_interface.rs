use std::ptr::null_mut;

use crate::{jint, ReservedSlot};

pub const JVMPI_VERSION_1: jint = 0x10000001;

/// `JVMPI_Interface` from `jvmpi.h`. The profiler interface was removed from JDK 6 onwards, so on
/// a modern VM the `GetEnv` request for it fails and the handshake reports that.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct JVMPI_Interface {
    pub version: jint,
    pub NotifyEvent: ReservedSlot,
    pub EnableEvent: ReservedSlot,
    pub DisableEvent: ReservedSlot,
    pub RequestEvent: ReservedSlot,
    pub GetCallTrace: ReservedSlot,
    pub ProfilerExit: ReservedSlot,
    pub RawMonitorCreate: ReservedSlot,
    pub RawMonitorEnter: ReservedSlot,
    pub RawMonitorExit: ReservedSlot,
    pub RawMonitorWait: ReservedSlot,
    pub RawMonitorNotifyAll: ReservedSlot,
    pub RawMonitorDestroy: ReservedSlot,
    pub GetCurrentThreadCpuTime: ReservedSlot,
    pub SuspendThread: ReservedSlot,
    pub ResumeThread: ReservedSlot,
    pub GetThreadStatus: ReservedSlot,
    pub ThreadHasRun: ReservedSlot,
    pub CreateSystemThread: ReservedSlot,
    pub SetThreadLocalStorage: ReservedSlot,
    pub GetThreadLocalStorage: ReservedSlot,
    pub DisableGC: Option<unsafe extern "C" fn()>,
    pub EnableGC: Option<unsafe extern "C" fn()>,
    pub RunGC: Option<unsafe extern "C" fn()>,
    pub GetThreadObject: ReservedSlot,
    pub GetMethodClass: ReservedSlot,
    pub jobjectID2jobject: ReservedSlot,
    pub jobject2jobjectID: ReservedSlot,
    pub SuspendThreadList: ReservedSlot,
    pub ResumeThreadList: ReservedSlot,
}

unsafe impl Send for JVMPI_Interface {}

unsafe impl Sync for JVMPI_Interface {}

impl JVMPI_Interface {
    /// A table with only the gc entry points filled in.
    pub const fn gc_only(disable_gc: unsafe extern "C" fn(), enable_gc: unsafe extern "C" fn(), version: jint) -> Self {
        Self {
            version,
            NotifyEvent: null_mut(),
            EnableEvent: null_mut(),
            DisableEvent: null_mut(),
            RequestEvent: null_mut(),
            GetCallTrace: null_mut(),
            ProfilerExit: null_mut(),
            RawMonitorCreate: null_mut(),
            RawMonitorEnter: null_mut(),
            RawMonitorExit: null_mut(),
            RawMonitorWait: null_mut(),
            RawMonitorNotifyAll: null_mut(),
            RawMonitorDestroy: null_mut(),
            GetCurrentThreadCpuTime: null_mut(),
            SuspendThread: null_mut(),
            ResumeThread: null_mut(),
            GetThreadStatus: null_mut(),
            ThreadHasRun: null_mut(),
            CreateSystemThread: null_mut(),
            SetThreadLocalStorage: null_mut(),
            GetThreadLocalStorage: null_mut(),
            DisableGC: Some(disable_gc),
            EnableGC: Some(enable_gc),
            RunGC: None,
            GetThreadObject: null_mut(),
            GetMethodClass: null_mut(),
            jobjectID2jobject: null_mut(),
            jobject2jobjectID: null_mut(),
            SuspendThreadList: null_mut(),
            ResumeThreadList: null_mut(),
        }
    }
}
