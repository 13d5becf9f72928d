//! TabMaster Core
//!
//! Interprets batches of browser-session commands. A batch is processed
//! strictly in order against a fresh session and yields the output lines of
//! the commands that report something.
//!
//! ```
//! let output = tabmaster_core::run(&["create-tab A", "create-tab B", "recents 5"]);
//! assert_eq!(output, vec!["2 1"]);
//! ```

mod config;
mod error;
mod interpreter;
mod payload;
mod report;

pub use config::Config;
pub use error::CoreError;
pub use interpreter::{run, Interpreter};
pub use payload::{decode_lines, decode_payload};
pub use report::{ExecutionReport, ExecutionStats, Executor};

// Re-export core components
pub use tabmaster_download::DownloadQueue;
pub use tabmaster_navigation::{Command, CommandType, NavigationHistory};
pub use tabmaster_session::{
    ActiveTabStatus, RecentTabs, Session, SessionError, SessionSnapshot, TabSnapshot,
};
pub use tabmaster_tabs::{Tab, TabError, TabId, TabManager};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Diagnostics go to stderr so stdout only carries command output.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
