//! Command vocabulary
//!
//! One command per line: a case-sensitive keyword followed by
//! whitespace-separated arguments. Only the first argument is used.
//!
//! | Keyword             | Legacy alias | Argument  |
//! |---------------------|--------------|-----------|
//! | `create-tab`        | `NEWTAB`     | location? |
//! | `open`              | `OPEN`       | location  |
//! | `back`              | `BACK`       | steps     |
//! | `forward`           | `FORWARD`    | steps     |
//! | `switch`            | `SWITCH`     | tab id    |
//! | `close`             | `CLOSE`      | tab id    |
//! | `queue-download`    | `QUEUE`      | token     |
//! | `advance-downloads` | `TICK`       | count     |
//! | `describe-active`   | `LIST`       | -         |
//! | `recents`           | `RECENTS`    | limit     |

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandType {
    CreateTab,
    Open,
    Back,
    Forward,
    Switch,
    Close,
    QueueDownload,
    AdvanceDownloads,
    DescribeActive,
    Recents,
}

impl CommandType {
    pub const ALL: [CommandType; 10] = [
        CommandType::CreateTab,
        CommandType::Open,
        CommandType::Back,
        CommandType::Forward,
        CommandType::Switch,
        CommandType::Close,
        CommandType::QueueDownload,
        CommandType::AdvanceDownloads,
        CommandType::DescribeActive,
        CommandType::Recents,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            CommandType::CreateTab => "create-tab",
            CommandType::Open => "open",
            CommandType::Back => "back",
            CommandType::Forward => "forward",
            CommandType::Switch => "switch",
            CommandType::Close => "close",
            CommandType::QueueDownload => "queue-download",
            CommandType::AdvanceDownloads => "advance-downloads",
            CommandType::DescribeActive => "describe-active",
            CommandType::Recents => "recents",
        }
    }

    /// Upper-case keyword accepted for replaying older command transcripts
    pub fn legacy_keyword(&self) -> &'static str {
        match self {
            CommandType::CreateTab => "NEWTAB",
            CommandType::Open => "OPEN",
            CommandType::Back => "BACK",
            CommandType::Forward => "FORWARD",
            CommandType::Switch => "SWITCH",
            CommandType::Close => "CLOSE",
            CommandType::QueueDownload => "QUEUE",
            CommandType::AdvanceDownloads => "TICK",
            CommandType::DescribeActive => "LIST",
            CommandType::Recents => "RECENTS",
        }
    }

    pub fn from_keyword(word: &str, legacy_keywords: bool) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| {
            ty.keyword() == word || (legacy_keywords && ty.legacy_keyword() == word)
        })
    }
}

impl std::fmt::Display for CommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A parsed command with its argument.
///
/// Numeric arguments that are missing or malformed parse as `0`. Counts
/// saturate: negative values become `0` and values too large for the target
/// type become its maximum. Tab id `0` is never allocated, so `switch` and
/// `close` with a malformed id target no tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    CreateTab {
        /// Blank tab when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<String>,
    },
    Open { location: String },
    Back { steps: usize },
    Forward { steps: usize },
    Switch { tab_id: u64 },
    Close { tab_id: u64 },
    QueueDownload { token: String },
    AdvanceDownloads { count: usize },
    DescribeActive,
    Recents { limit: usize },
}

impl Command {
    /// Parse a command line, accepting legacy keywords
    pub fn parse(input: &str) -> Option<Self> {
        Self::parse_with(input, true)
    }

    /// Parse a command line. Returns `None` for blank lines, unknown keywords
    /// and `open`/`queue-download` without their argument.
    pub fn parse_with(input: &str, legacy_keywords: bool) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let keyword = parts.next()?;
        let Some(command_type) = CommandType::from_keyword(keyword, legacy_keywords) else {
            tracing::debug!(keyword = %keyword, "Unknown command keyword");
            return None;
        };
        let arg = parts.next();

        let command = match command_type {
            CommandType::CreateTab => Command::CreateTab {
                location: arg.map(str::to_string),
            },
            CommandType::Open => Command::Open {
                location: text_arg(command_type, arg)?,
            },
            CommandType::Back => Command::Back {
                steps: count_arg(command_type, arg),
            },
            CommandType::Forward => Command::Forward {
                steps: count_arg(command_type, arg),
            },
            CommandType::Switch => Command::Switch {
                tab_id: id_arg(command_type, arg),
            },
            CommandType::Close => Command::Close {
                tab_id: id_arg(command_type, arg),
            },
            CommandType::QueueDownload => Command::QueueDownload {
                token: text_arg(command_type, arg)?,
            },
            CommandType::AdvanceDownloads => Command::AdvanceDownloads {
                count: count_arg(command_type, arg),
            },
            CommandType::DescribeActive => Command::DescribeActive,
            CommandType::Recents => Command::Recents {
                limit: count_arg(command_type, arg),
            },
        };

        Some(command)
    }

    pub fn command_type(&self) -> CommandType {
        match self {
            Command::CreateTab { .. } => CommandType::CreateTab,
            Command::Open { .. } => CommandType::Open,
            Command::Back { .. } => CommandType::Back,
            Command::Forward { .. } => CommandType::Forward,
            Command::Switch { .. } => CommandType::Switch,
            Command::Close { .. } => CommandType::Close,
            Command::QueueDownload { .. } => CommandType::QueueDownload,
            Command::AdvanceDownloads { .. } => CommandType::AdvanceDownloads,
            Command::DescribeActive => CommandType::DescribeActive,
            Command::Recents { .. } => CommandType::Recents,
        }
    }
}

fn text_arg(command_type: CommandType, arg: Option<&str>) -> Option<String> {
    if arg.is_none() {
        tracing::debug!(command = %command_type, "Missing argument");
    }
    arg.map(str::to_string)
}

fn count_arg(command_type: CommandType, arg: Option<&str>) -> usize {
    match arg.map(str::parse::<i64>) {
        Some(Ok(n)) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        Some(Ok(_)) => 0,
        Some(Err(e)) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Some(Err(e)) if *e.kind() == IntErrorKind::NegOverflow => 0,
        Some(Err(_)) | None => {
            tracing::debug!(command = %command_type, arg = ?arg, "Malformed count, using 0");
            0
        }
    }
}

fn id_arg(command_type: CommandType, arg: Option<&str>) -> u64 {
    match arg.map(str::parse::<u64>) {
        Some(Ok(id)) => id,
        Some(Err(_)) | None => {
            tracing::debug!(command = %command_type, arg = ?arg, "Malformed tab id, using 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!(
            Command::parse("create-tab example.com"),
            Some(Command::CreateTab {
                location: Some("example.com".to_string())
            })
        );
        assert_eq!(Command::parse("back 3"), Some(Command::Back { steps: 3 }));
        assert_eq!(Command::parse("forward 1"), Some(Command::Forward { steps: 1 }));
        assert_eq!(Command::parse("switch 2"), Some(Command::Switch { tab_id: 2 }));
        assert_eq!(Command::parse("close 7"), Some(Command::Close { tab_id: 7 }));
        assert_eq!(
            Command::parse("queue-download f1"),
            Some(Command::QueueDownload {
                token: "f1".to_string()
            })
        );
        assert_eq!(
            Command::parse("advance-downloads 4"),
            Some(Command::AdvanceDownloads { count: 4 })
        );
        assert_eq!(Command::parse("describe-active"), Some(Command::DescribeActive));
        assert_eq!(Command::parse("recents 5"), Some(Command::Recents { limit: 5 }));
    }

    #[test]
    fn test_legacy_keywords() {
        assert_eq!(
            Command::parse("NEWTAB a"),
            Some(Command::CreateTab {
                location: Some("a".to_string())
            })
        );
        assert_eq!(
            Command::parse("TICK 2"),
            Some(Command::AdvanceDownloads { count: 2 })
        );
        assert_eq!(Command::parse("LIST"), Some(Command::DescribeActive));

        assert!(Command::parse_with("NEWTAB a", false).is_none());
        assert!(Command::parse_with("create-tab a", false).is_some());
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(Command::parse("Create-Tab a").is_none());
        assert!(Command::parse("Back 1").is_none());
        assert!(Command::parse("newtab a").is_none());
    }

    #[test]
    fn test_whitespace_and_extra_tokens() {
        assert_eq!(
            Command::parse("   open   b   ignored  "),
            Some(Command::Open {
                location: "b".to_string()
            })
        );
        assert_eq!(Command::parse("back\t2 9"), Some(Command::Back { steps: 2 }));
    }

    #[test]
    fn test_malformed_numbers_parse_as_zero() {
        assert_eq!(Command::parse("back"), Some(Command::Back { steps: 0 }));
        assert_eq!(Command::parse("back two"), Some(Command::Back { steps: 0 }));
        assert_eq!(Command::parse("forward -3"), Some(Command::Forward { steps: 0 }));
        assert_eq!(Command::parse("recents x"), Some(Command::Recents { limit: 0 }));
        assert_eq!(Command::parse("switch -1"), Some(Command::Switch { tab_id: 0 }));
        assert_eq!(Command::parse("close abc"), Some(Command::Close { tab_id: 0 }));
    }

    #[test]
    fn test_overflowing_count_saturates() {
        let huge = "99999999999999999999";
        assert_eq!(
            Command::parse(&format!("back {}", huge)),
            Some(Command::Back { steps: usize::MAX })
        );
        assert_eq!(
            Command::parse(&format!("recents {}", huge)),
            Some(Command::Recents { limit: usize::MAX })
        );
        assert_eq!(
            Command::parse(&format!("TICK {}", huge)),
            Some(Command::AdvanceDownloads { count: usize::MAX })
        );
        assert_eq!(
            Command::parse(&format!("forward -{}", huge)),
            Some(Command::Forward { steps: 0 })
        );

        // Overflow is not the same as garbage
        assert_eq!(
            Command::parse(&format!("back {}x", huge)),
            Some(Command::Back { steps: 0 })
        );
    }

    #[test]
    fn test_missing_text_argument() {
        assert!(Command::parse("open").is_none());
        assert!(Command::parse("queue-download").is_none());
    }

    #[test]
    fn test_create_tab_without_location() {
        assert_eq!(
            Command::parse("create-tab"),
            Some(Command::CreateTab { location: None })
        );
        assert_eq!(
            Command::parse("NEWTAB   "),
            Some(Command::CreateTab { location: None })
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::parse("").is_none());
        assert!(Command::parse("   ").is_none());
        assert!(Command::parse("reload").is_none());
    }

    #[test]
    fn test_keyword_round_trip() {
        for ty in CommandType::ALL {
            assert_eq!(CommandType::from_keyword(ty.keyword(), false), Some(ty));
            assert_eq!(CommandType::from_keyword(ty.legacy_keyword(), true), Some(ty));
        }
    }
}
