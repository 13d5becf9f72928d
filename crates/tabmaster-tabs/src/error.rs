//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),
}
