//! TabMaster Tab Management
//!
//! Tabs are identified by sequential integer ids starting at 1. Ids are
//! allocated by the owning `TabManager` and never reused within it.

mod error;
mod manager;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use tab::{Tab, TabId, BLANK_LOCATION};

pub type Result<T> = std::result::Result<T, TabError>;
