use parking_lot::Mutex;
use tracing::debug;

use crate::errors::{GcError, HandshakeError};
use crate::host::CapabilityTable;

/// Proof of a successful handshake. Each call goes straight to the host's table.
pub struct GcControl<T> {
    table: T,
}

impl<T: CapabilityTable> GcControl<T> {
    pub(crate) fn new(table: T) -> Self {
        Self { table }
    }

    pub fn enable_gc(&self) {
        debug!("enabling gc");
        self.table.enable_gc()
    }

    pub fn disable_gc(&self) {
        debug!("disabling gc");
        self.table.disable_gc()
    }
}

/// Non nesting gc switch. Gc starts out enabled, and however many times it is disabled a single
/// enable turns it back on.
pub struct GcSwitch<T> {
    control: GcControl<T>,
    enabled: bool,
}

impl<T: CapabilityTable> GcSwitch<T> {
    pub fn new(control: GcControl<T>) -> Self {
        Self { control, enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns whether the host was called, which only happens when the state changes.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if enabled == self.enabled {
            return false;
        }
        self.force(enabled);
        true
    }

    /// Calls through to the host regardless of the recorded state.
    pub fn force(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.control.enable_gc()
        } else {
            self.control.disable_gc()
        }
    }

    pub fn control(&self) -> &GcControl<T> {
        &self.control
    }
}

/// Process wide home for a [`GcControl`], for entry points that cannot carry one around.
/// Starts uninitialized and only ever moves to initialized.
pub struct GcSlot<T> {
    switch: Mutex<Option<GcSwitch<T>>>,
}

impl<T: CapabilityTable> Default for GcSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CapabilityTable> GcSlot<T> {
    pub fn new() -> Self {
        Self { switch: Mutex::new(None) }
    }

    pub fn is_initialized(&self) -> bool {
        self.switch.lock().is_some()
    }

    /// Runs `handshake` unless a previous one already succeeded. The lock is held throughout, so
    /// concurrent callers see at most one handshake succeed.
    pub fn initialize_with(&self, handshake: impl FnOnce() -> Result<GcControl<T>, HandshakeError>) -> Result<(), HandshakeError> {
        let mut guard = self.switch.lock();
        filled(&mut guard, handshake)?;
        Ok(())
    }

    pub fn enable_gc(&self) -> Result<(), GcError> {
        self.force(true)
    }

    pub fn disable_gc(&self) -> Result<(), GcError> {
        self.force(false)
    }

    fn force(&self, enabled: bool) -> Result<(), GcError> {
        let mut guard = self.switch.lock();
        let switch = guard.as_mut().ok_or(GcError::Uninitialized)?;
        switch.force(enabled);
        Ok(())
    }

    /// Non nesting toggle that initializes on first use. Returns whether the host was called.
    pub fn set_gc_enabled_with(&self, enabled: bool, handshake: impl FnOnce() -> Result<GcControl<T>, HandshakeError>) -> Result<bool, GcError> {
        let mut guard = self.switch.lock();
        Ok(filled(&mut guard, handshake)?.set_enabled(enabled))
    }

    /// `None` before a successful init.
    pub fn gc_enabled(&self) -> Option<bool> {
        self.switch.lock().as_ref().map(|switch| switch.is_enabled())
    }
}

/// The switch in `slot`, running `handshake` first if there is none yet.
fn filled<T: CapabilityTable>(slot: &mut Option<GcSwitch<T>>, handshake: impl FnOnce() -> Result<GcControl<T>, HandshakeError>) -> Result<&mut GcSwitch<T>, HandshakeError> {
    let switch = match slot.take() {
        Some(switch) => switch,
        None => GcSwitch::new(handshake()?),
    };
    Ok(slot.insert(switch))
}
