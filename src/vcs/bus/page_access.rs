use bitflags::bitflags;

bitflags! {
    /// Access kind tag for a page descriptor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AccessFlags: u8 {
        const READ =  0b0000_0001;
        const WRITE = 0b0000_0010;
    }
}

/// One entry in the owning system's page table.
///
/// `direct_peek` is a byte offset into the cartridge image for the start of
/// the page. When present, the system may read the page straight out of
/// `Cartridge::image()` without calling back into the cartridge. Pages whose
/// access has side effects (bank-switch hotspots) leave it `None` so that
/// every access goes through `Cartridge::cpu_read`.
///
/// `code_access` is the matching offset into the cartridge's code-access
/// metadata buffer, for disassembly tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageAccess {
    pub direct_peek: Option<usize>,
    pub code_access: usize,
    pub flags: AccessFlags,
}

impl PageAccess {
    /// Read-only page served straight from the image.
    pub fn direct(image_offset: usize, code_offset: usize) -> PageAccess {
        PageAccess {
            direct_peek: Some(image_offset),
            code_access: code_offset,
            flags: AccessFlags::READ,
        }
    }

    /// Read-only page that must be routed through the cartridge.
    pub fn decode(code_offset: usize) -> PageAccess {
        PageAccess {
            direct_peek: None,
            code_access: code_offset,
            flags: AccessFlags::READ,
        }
    }
}

impl Default for PageAccess {
    fn default() -> PageAccess {
        PageAccess {
            direct_peek: None,
            code_access: 0,
            flags: AccessFlags::empty(),
        }
    }
}

/// Owning-system seam. The cartridge pushes page descriptors here when it
/// installs or re-installs a segment's fast path; it never reads them back.
pub trait System {
    fn set_page_access(&mut self, page: usize, access: PageAccess);
}
