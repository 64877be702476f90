//! Convenient imports for consumers of vcs-cart
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use vcs_cart::prelude::*;
//! ```

// Cartridge API
pub use crate::vcs::cartridge::Cartridge;
pub use crate::vcs::cartridge::cart_e0::CartE0;

// Owning-system seam
pub use crate::vcs::bus::page_access::{AccessFlags, PageAccess, System};
pub use crate::vcs::bus::simple_system::SimpleSystem;

// Save states
pub use crate::vcs::state::{StateError, StateReader, StateWriter};

// Constants
pub use crate::vcs::bus::consts::*;
