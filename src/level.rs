//! Severity levels as encoded in the log markup (`level-1` .. `level-4`).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal = 1,
    Warning = 2,
    Step = 3,
    Info = 4,
}

impl Level {
    /// Positional order, matching the filter panel buttons.
    pub const ALL: [Level; 4] = [Level::Fatal, Level::Warning, Level::Step, Level::Info];

    pub fn from_number(n: u8) -> Option<Level> {
        match n {
            1 => Some(Level::Fatal),
            2 => Some(Level::Warning),
            3 => Some(Level::Step),
            4 => Some(Level::Info),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Button label in the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            Level::Fatal => "FATAL",
            Level::Warning => "WARNING",
            Level::Step => "STEP",
            Level::Info => "INFO",
        }
    }

    /// Pull the level out of an entry's full `class` attribute.
    pub fn from_class_name(class_name: &str) -> Result<Level, ViewerError> {
        static LEVEL_RE: OnceLock<Regex> = OnceLock::new();
        let re = LEVEL_RE.get_or_init(|| {
            Regex::new(r"(?:^|\s)level-(\d+)(?:\s|$)").expect("static level pattern")
        });

        re.captures(class_name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u8>().ok())
            .and_then(Level::from_number)
            .ok_or_else(|| ViewerError::MalformedLevel {
                class_name: class_name.to_string(),
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
