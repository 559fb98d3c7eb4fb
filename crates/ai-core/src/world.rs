use core::fmt::Debug;

/// Stable identifier for an agent (one controlled unit).
///
/// Deterministic iteration requires stable ordering (`Ord`) and a stable numeric
/// ID (`stable_id`) for logs and trace events.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

/// Read-only world access.
///
/// The core crate does not prescribe which queries a world must expose;
/// subsystems (nav, strategy, game integration) define extension traits.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink. Only an action's perform step mutates the world.
pub trait WorldMut: WorldView {}
