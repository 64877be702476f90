use crate::vcs::bus::page_access::System;
use crate::vcs::state::{StateReader, StateWriter};

pub mod cart_e0;

pub trait Cartridge {
    /// Type tag written into save states.
    fn name(&self) -> &'static str;

    /// Restore the power-on bank assignment. Goes through the bank switcher,
    /// so a locked cartridge keeps its current banks (the dirty flag is set
    /// either way).
    fn reset(&mut self, sys: &mut dyn System);

    /// Bind to the owning system: install the fixed mappings once, then
    /// populate the switchable segments with their default banks.
    fn install(&mut self, sys: &mut dyn System);

    /// CPU read in the cartridge window ($1000-$1FFF).
    ///
    /// NOT idempotent: reading a hotspot address switches banks before the
    /// byte is returned, exactly like a write would. Callers must not cache
    /// or speculate reads in the hotspot range.
    fn cpu_read(&mut self, sys: &mut dyn System, addr: u16) -> u8;

    /// CPU write in the cartridge window. Hotspot side effects still fire,
    /// but ROM is never writable, so this always returns false (unhandled).
    fn cpu_write(&mut self, sys: &mut dyn System, addr: u16, value: u8) -> bool;

    /// Debugger poke straight into the currently mapped ROM byte. Never
    /// triggers hotspot side effects, even inside the hotspot range.
    fn patch(&mut self, addr: u16, value: u8) -> bool;

    /// The full ROM image.
    fn image(&self) -> &[u8];

    /// Write the bank state, preceded by the type tag from `name()`.
    fn save(&self, out: &mut StateWriter) -> bool;

    /// Restore the bank state from a stream. Fails (returning false, with no
    /// state mutated) on a foreign type tag, a malformed stream, or bank
    /// values outside the hardware's range. Page descriptors are not
    /// re-installed; fast-path users should re-run `install` afterwards.
    fn load(&mut self, input: &mut StateReader) -> bool;

    /// While locked, every bank-switch request is ignored, letting a
    /// debugger walk the address space without perturbing hardware state.
    fn set_bank_lock(&mut self, locked: bool);

    fn bank_locked(&self) -> bool;

    /// True if the bank state changed since the last call. Clears on read.
    fn bank_changed(&mut self) -> bool;
}
