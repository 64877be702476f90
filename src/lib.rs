// VCS cartridge core modules
pub mod prelude;
pub mod vcs;

// Re-exports
pub use vcs::bus::page_access::{AccessFlags, PageAccess, System};
pub use vcs::cartridge::Cartridge;
pub use vcs::cartridge::cart_e0::CartE0;
pub use vcs::state::{StateError, StateReader, StateWriter};
