//! Command interpreter
//!
//! Parses each line, dispatches it to the session and collects output lines.
//! Lines that cannot be parsed, or that target a missing tab or an absent
//! active tab, are skipped without output and never abort the batch.
//!
//! `run` consumes the interpreter, so a batch always starts from an empty
//! session. `execute_line` feeds one line at a time into the same session.

use tabmaster_navigation::Command;
use tabmaster_session::{Session, SessionError};
use tabmaster_tabs::TabId;

use crate::config::Config;

/// Run one batch against a fresh session with the default configuration
pub fn run<S: AsRef<str>>(commands: &[S]) -> Vec<String> {
    Interpreter::new(Config::default()).run(commands)
}

#[derive(Debug)]
pub struct Interpreter {
    config: Config,
    session: Session,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: Session::new(),
        }
    }

    /// Process `commands` in order, returning the produced output lines
    pub fn run<S: AsRef<str>>(self, commands: &[S]) -> Vec<String> {
        self.run_with_session(commands).0
    }

    /// Like `run`, also handing back the final session
    pub fn run_with_session<S: AsRef<str>>(mut self, commands: &[S]) -> (Vec<String>, Session) {
        let output: Vec<String> = commands
            .iter()
            .filter_map(|line| self.execute_line(line.as_ref()))
            .collect();

        tracing::info!(
            command_count = commands.len(),
            output_count = output.len(),
            "Processed command batch"
        );

        (output, self.session)
    }

    /// Process a single command line
    pub fn execute_line(&mut self, line: &str) -> Option<String> {
        let Some(command) = Command::parse_with(line, self.config.legacy_keywords) else {
            if !line.trim().is_empty() {
                tracing::debug!(line = %line, "Skipping unrecognized command");
            }
            return None;
        };

        let command_type = command.command_type();
        match self.dispatch(command) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(command = %command_type, error = %e, "Skipping command");
                None
            }
        }
    }

    /// Apply a parsed command to the session
    pub fn dispatch(&mut self, command: Command) -> Result<Option<String>, SessionError> {
        let output = match command {
            Command::CreateTab { location } => {
                self.session.create_tab(location);
                None
            }
            Command::Open { location } => {
                self.session.open(location)?;
                None
            }
            Command::Back { steps } => Some(self.session.back(steps)?),
            Command::Forward { steps } => Some(self.session.forward(steps)?),
            Command::Switch { tab_id } => {
                self.session.switch_tab(TabId(tab_id))?;
                None
            }
            Command::Close { tab_id } => {
                self.session.close_tab(TabId(tab_id))?;
                None
            }
            Command::QueueDownload { token } => {
                self.session.queue_download(token);
                None
            }
            Command::AdvanceDownloads { count } => {
                self.session.advance_downloads(count);
                None
            }
            Command::DescribeActive => Some(self.session.describe_active()?.to_string()),
            Command::Recents { limit } => Some(self.format_recents(limit)),
        };

        Ok(output)
    }

    fn format_recents(&self, limit: usize) -> String {
        let recents = self.session.recents(limit);
        if recents.is_empty() {
            return self.config.empty_sentinel.clone();
        }

        recents
            .iter()
            .map(TabId::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
