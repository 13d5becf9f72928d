//! TabMaster Navigation
//!
//! - Per-tab back/forward history (`NavigationHistory`)
//! - Command vocabulary and line parsing (`Command`)
//!
//! Both are infallible: history moves stop at the end of the available
//! stack, and unparseable lines simply yield no command.

mod command;
mod history;

pub use command::{Command, CommandType};
pub use history::NavigationHistory;
