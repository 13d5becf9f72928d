//! TabMaster Session Management
//!
//! A session owns the live tabs, the active tab pointer, the recency order of
//! tabs and the download queue. Each session is independent; nothing is
//! shared between instances.

mod error;
mod recents;
mod session;

pub use error::SessionError;
pub use recents::RecentTabs;
pub use session::{ActiveTabStatus, Session, SessionSnapshot, TabSnapshot};

pub type Result<T> = std::result::Result<T, SessionError>;
