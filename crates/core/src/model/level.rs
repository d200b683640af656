use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level requested from the lesson generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in ascending difficulty order, for selection UIs.
    #[must_use]
    pub fn all() -> [Level; 3] {
        [Level::Beginner, Level::Intermediate, Level::Advanced]
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
