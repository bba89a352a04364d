// SOCD conflict resolution
//
// `resolve` is total: every raw state maps to a cleaned state and nothing can
// fail. The only side effect is on the `ResolverHistory` passed in.

use super::direction::{Direction, DirectionState};
use super::policy::CleaningPolicy;

/// State carried between ticks for the history-dependent policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverHistory {
    /// Most recently observed held direction.
    ///
    /// Not cleared when every key is released, so it can be stale.
    pub last_input: Option<Direction>,

    /// Alternation toggle, shared by the horizontal and vertical axes
    pub alternate: bool,
}

impl ResolverHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the held directions of a freshly sampled state.
    ///
    /// Directions are visited in declaration order and each held one
    /// overwrites `last_input`, so the last held in that order wins.
    pub fn observe(&mut self, raw: &DirectionState) {
        for direction in raw.held() {
            self.last_input = Some(direction);
        }
    }

    /// Flip the alternation toggle and return its new value
    fn flip(&mut self) -> bool {
        self.alternate = !self.alternate;
        self.alternate
    }
}

/// Resolve opposing inputs in `raw` according to `policy`.
///
/// An axis without a conflict passes through untouched. The horizontal axis is
/// always resolved before the vertical one.
pub fn resolve(
    raw: DirectionState,
    policy: CleaningPolicy,
    history: &mut ResolverHistory,
) -> DirectionState {
    let mut cleaned = raw;

    if raw.horizontal_conflict() {
        // None neutralizes the axis
        let keep_left = first_side_wins(policy, history, Direction::Right);
        cleaned.left = keep_left == Some(true);
        cleaned.right = keep_left == Some(false);
    }

    if raw.vertical_conflict() {
        let keep_up = first_side_wins(policy, history, Direction::Down);
        cleaned.up = keep_up == Some(true);
        cleaned.down = keep_up == Some(false);
    }

    cleaned
}

/// Decide one conflicting axis: `Some(true)` keeps Left/Up, `Some(false)`
/// keeps Right/Down, `None` clears both. `second` is Right or Down.
fn first_side_wins(
    policy: CleaningPolicy,
    history: &mut ResolverHistory,
    second: Direction,
) -> Option<bool> {
    match policy {
        CleaningPolicy::Neutral => None,
        // Anything but an explicit second-side signal favors the first side
        CleaningPolicy::LastInputPriority => Some(history.last_input != Some(second)),
        CleaningPolicy::PriorityDirection => Some(true),
        CleaningPolicy::Alternating => Some(history.flip()),
    }
}
