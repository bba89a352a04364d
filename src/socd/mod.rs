// SOCD (Simultaneous Opposing Cardinal Direction) resolution
//
// Pure data and logic with no platform access:
//
// - `direction`: the four cardinal directions and a per-tick held state
// - `policy`: the selectable cleaning policies
// - `resolver`: the conflict-resolution function and its history

pub mod direction;
pub mod policy;
pub mod resolver;

pub use direction::{Direction, DirectionState};
pub use policy::CleaningPolicy;
pub use resolver::{resolve, ResolverHistory};
