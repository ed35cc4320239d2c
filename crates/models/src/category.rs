use std::fmt;

/// One of the fixed cleanup targets.
///
/// The declaration order is significant: it is the column order of every
/// report and the slot order of the persisted state record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    UserCache,
    SystemCache,
    SystemLog,
    ShortTermTemp,
    LongTermTemp,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [
        Self::UserCache,
        Self::SystemCache,
        Self::SystemLog,
        Self::ShortTermTemp,
        Self::LongTermTemp,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps a command letter to the category it cleans.
    #[must_use]
    pub const fn from_command(c: char) -> Option<Self> {
        match c {
            'u' => Some(Self::UserCache),
            's' => Some(Self::SystemCache),
            'l' => Some(Self::SystemLog),
            't' => Some(Self::ShortTermTemp),
            'g' => Some(Self::LongTermTemp),
            _ => None,
        }
    }

    /// Short column label used in report tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UserCache => "User Cache",
            Self::SystemCache => "System Cache",
            Self::SystemLog => "System Logs",
            Self::ShortTermTemp => "S-term tmpfiles",
            Self::LongTermTemp => "L-term tmpfiles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserCache => write!(f, "user cache"),
            Self::SystemCache => write!(f, "system cache"),
            Self::SystemLog => write!(f, "system logs"),
            Self::ShortTermTemp => write!(f, "short-term temporary files"),
            Self::LongTermTemp => write!(f, "long-term temporary files"),
        }
    }
}
