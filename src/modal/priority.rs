//! Priority tiers for modal requests
//!
//! The stack accepts any `i32` priority. These four tiers are the values
//! producers are expected to use so that requests from unrelated systems
//! order sensibly against each other.

use serde::{Deserialize, Serialize};

/// Character building, quest windows, anything cosmetic
pub const LOW: i32 = 10;

/// Pauses, disconnect/rejoin notices, waiting for the game to start
pub const MEDIUM: i32 = 50;

/// Kick and death notices
pub const HIGH: i32 = 90;

/// Server shutdown and reboot warnings
pub const CRITICAL: i32 = 100;

/// Named priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityTier {
    /// Integer priority used when this tier is pushed onto the stack
    pub fn value(self) -> i32 {
        match self {
            PriorityTier::Low => LOW,
            PriorityTier::Medium => MEDIUM,
            PriorityTier::High => HIGH,
            PriorityTier::Critical => CRITICAL,
        }
    }
}

impl From<PriorityTier> for i32 {
    fn from(tier: PriorityTier) -> Self {
        tier.value()
    }
}
