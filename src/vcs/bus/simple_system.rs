use crate::vcs::bus::consts::*;
use crate::vcs::bus::page_access::{PageAccess, System};

/// Minimal owning-system stand-in: just the page descriptor table.
///
/// Useful for exercising a cartridge without a full console, and as the
/// reference for how a real system resolves the fast path.
pub struct SimpleSystem {
    pub pages: [PageAccess; NUM_PAGES],
}

impl SimpleSystem {
    pub fn new() -> SimpleSystem {
        SimpleSystem {
            pages: [PageAccess::default(); NUM_PAGES],
        }
    }

    pub fn page(&self, addr: u16) -> &PageAccess {
        &self.pages[((addr & 0x1FFF) >> PAGE_SHIFT) as usize]
    }

    /// Image offset for a direct-peek read of `addr`, if its page has one.
    pub fn direct_peek(&self, addr: u16) -> Option<usize> {
        self.page(addr)
            .direct_peek
            .map(|base| base + (addr & PAGE_MASK) as usize)
    }
}

impl Default for SimpleSystem {
    fn default() -> SimpleSystem {
        SimpleSystem::new()
    }
}

impl System for SimpleSystem {
    fn set_page_access(&mut self, page: usize, access: PageAccess) {
        self.pages[page] = access;
    }
}
