use log::{error, trace, warn};

use super::Cartridge;
use crate::vcs::bus::consts::*;
use crate::vcs::bus::page_access::{PageAccess, System};
use crate::vcs::state::{StateError, StateReader, StateWriter};

pub const IMAGE_SIZE: usize = 8192;

const BANK_SIZE: usize = 1024;
const NUM_BANKS: u16 = 8;
const SEGMENT_SIZE: u16 = 0x400;

// Power-on banks for the three switchable segments
const DEFAULT_BANKS: [u16; 3] = [4, 5, 6];

/// Parker Brothers E0: 8K of ROM split into eight 1K banks, viewed through
/// a 4K window of four 1K segments. Segments 0-2 can each be pointed at any
/// bank; segment 3 is hardwired to bank 7, which holds the hotspots:
///
///   $FE0-$FE7  select segment 0 bank = addr & 7
///   $FE8-$FEF  select segment 1 bank = addr & 7
///   $FF0-$FF7  select segment 2 bank = addr & 7
///   $FF8-$FFF  reserved, no effect
///
/// The hardware decodes the address lines alone, so *any* access to a
/// hotspot switches banks - reads included.
pub struct CartE0 {
    image: [u8; IMAGE_SIZE],
    code_access: [u8; IMAGE_SIZE],
    current_bank: [u16; 4],
    bank_changed: bool,
    bank_locked: bool,
}

impl CartE0 {
    /// Copies at most `IMAGE_SIZE` bytes of `rom`. A shorter source leaves
    /// the tail of the image unspecified; supply the full 8K.
    pub fn new(rom: &[u8]) -> CartE0 {
        let mut image = [0u8; IMAGE_SIZE];
        let len = rom.len().min(IMAGE_SIZE);
        image[..len].copy_from_slice(&rom[..len]);
        CartE0 {
            image,
            code_access: [0; IMAGE_SIZE],
            current_bank: [4, 5, 6, 7],
            bank_changed: false,
            bank_locked: false,
        }
    }

    /// Current bank of each segment, for debugger display.
    pub fn segment_banks(&self) -> [u16; 4] {
        self.current_bank
    }

    /// Code-access metadata, parallel to the image. The cartridge only
    /// points page descriptors at it; disassembly tooling owns the contents.
    pub fn code_access(&self) -> &[u8] {
        &self.code_access
    }

    pub fn code_access_mut(&mut self) -> &mut [u8] {
        &mut self.code_access
    }

    /// Point `segment` at `bank` and re-install its fast-path pages.
    /// Ignored while the bank lock is held. Only segments 0-2 switch.
    fn select_segment(&mut self, sys: &mut dyn System, segment: usize, bank: u16) {
        debug_assert!(segment < 3);
        if self.bank_locked {
            return;
        }

        self.current_bank[segment] = bank;
        let offset = (bank as usize) * BANK_SIZE;

        let start = CART_START + (segment as u16) * SEGMENT_SIZE;
        for addr in (start..start + SEGMENT_SIZE).step_by(PAGE_SIZE as usize) {
            let page_offset = offset + (addr & 0x03FF) as usize;
            sys.set_page_access(
                (addr >> PAGE_SHIFT) as usize,
                PageAccess::direct(page_offset, page_offset),
            );
        }

        trace!("segment {} -> bank {}", segment, bank);
        self.bank_changed = true;
    }

    /// Image offset `addr` currently resolves to.
    fn mapped_offset(&self, addr: u16) -> usize {
        let segment = (addr >> 10) as usize;
        (self.current_bank[segment] as usize) * BANK_SIZE + (addr & 0x03FF) as usize
    }

    /// Decode a window address and fire the bank switch it requests, if any.
    fn decode_hotspot(&mut self, sys: &mut dyn System, addr: u16) {
        match addr {
            0x0FE0..=0x0FE7 => self.select_segment(sys, 0, addr & 0x0007),
            0x0FE8..=0x0FEF => self.select_segment(sys, 1, addr & 0x0007),
            0x0FF0..=0x0FF7 => self.select_segment(sys, 2, addr & 0x0007),
            _ => {}
        }
    }

    fn load_state(&mut self, input: &mut StateReader) -> Result<bool, StateError> {
        if input.get_string()? != self.name() {
            // Save state for some other cartridge type
            return Ok(false);
        }

        let banks: [u16; 4] = input.get_u16_array()?;
        // Reject corrupt bank numbers instead of indexing past the image
        // later; the fixed segment must still point at the hotspot bank.
        if banks.iter().any(|&b| b >= NUM_BANKS) || banks[3] != 7 {
            warn!("CartE0::load: bank state out of range: {:?}", banks);
            return Ok(false);
        }

        self.current_bank = banks;
        Ok(true)
    }
}

impl Cartridge for CartE0 {
    fn name(&self) -> &'static str {
        "CartE0"
    }

    fn reset(&mut self, sys: &mut dyn System) {
        for (segment, &bank) in DEFAULT_BANKS.iter().enumerate() {
            self.select_segment(sys, segment, bank);
        }
        self.bank_changed = true;
    }

    fn install(&mut self, sys: &mut dyn System) {
        // Fixed prefix of segment 3: bank 7, installed once. The last page
        // holds the hotspots, so it gets no direct pointer below.
        let hotspot_page_start = 0x1FE0 & !PAGE_MASK;
        for addr in (CART_START + 0x0C00..hotspot_page_start).step_by(PAGE_SIZE as usize) {
            let offset = 7 * BANK_SIZE + (addr & 0x03FF) as usize;
            sys.set_page_access(
                (addr >> PAGE_SHIFT) as usize,
                PageAccess::direct(offset, offset),
            );
        }
        self.current_bank[3] = 7;

        // Hotspot pages always route through the decoder so the switch side
        // effect fires on every access.
        for addr in (hotspot_page_start..CART_END + 1).step_by(PAGE_SIZE as usize) {
            let offset = 7 * BANK_SIZE + (addr & 0x03FF) as usize;
            sys.set_page_access((addr >> PAGE_SHIFT) as usize, PageAccess::decode(offset));
        }

        // Default banks for the switchable segments
        for (segment, &bank) in DEFAULT_BANKS.iter().enumerate() {
            self.select_segment(sys, segment, bank);
        }
    }

    fn cpu_read(&mut self, sys: &mut dyn System, addr: u16) -> u8 {
        let addr = addr & 0x0FFF;
        self.decode_hotspot(sys, addr);
        self.image[self.mapped_offset(addr)]
    }

    fn cpu_write(&mut self, sys: &mut dyn System, addr: u16, _value: u8) -> bool {
        let addr = addr & 0x0FFF;
        self.decode_hotspot(sys, addr);
        false
    }

    fn patch(&mut self, addr: u16, value: u8) -> bool {
        let addr = addr & 0x0FFF;
        self.image[self.mapped_offset(addr)] = value;
        true
    }

    fn image(&self) -> &[u8] {
        &self.image
    }

    fn save(&self, out: &mut StateWriter) -> bool {
        out.put_string(self.name());
        out.put_u16_array(&self.current_bank);
        true
    }

    fn load(&mut self, input: &mut StateReader) -> bool {
        match self.load_state(input) {
            Ok(loaded) => loaded,
            Err(err) => {
                error!("CartE0::load: {}", err);
                false
            }
        }
    }

    fn set_bank_lock(&mut self, locked: bool) {
        self.bank_locked = locked;
    }

    fn bank_locked(&self) -> bool {
        self.bank_locked
    }

    fn bank_changed(&mut self) -> bool {
        let changed = self.bank_changed;
        self.bank_changed = false;
        changed
    }
}
