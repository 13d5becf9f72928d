//! Session error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Tab error: {0}")]
    Tab(#[from] tabmaster_tabs::TabError),

    #[error("No active tab")]
    NoActiveTab,
}
