// Cleaning policies

use std::fmt;

/// Rule set used to resolve opposing inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CleaningPolicy {
    /// Opposing inputs cancel out on both axes
    #[default]
    Neutral,
    /// The side matching the last observed input wins, Left/Up otherwise
    LastInputPriority,
    /// Left beats Right, Up beats Down
    PriorityDirection,
    /// Winner alternates on each conflict, one toggle shared by both axes
    Alternating,
}

impl CleaningPolicy {
    /// All policies in switch-key check order
    pub const ALL: [CleaningPolicy; 4] = [
        CleaningPolicy::Neutral,
        CleaningPolicy::LastInputPriority,
        CleaningPolicy::PriorityDirection,
        CleaningPolicy::Alternating,
    ];

    /// Name shown on the status line
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::LastInputPriority => "Last Input Priority",
            Self::PriorityDirection => "Priority Direction",
            Self::Alternating => "Alternating",
        }
    }
}

impl fmt::Display for CleaningPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
