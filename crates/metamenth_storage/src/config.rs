//! Building model configuration.

use metamenth_network::RoleConflictPolicy;

/// Configuration for a [`Building`](crate::Building).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelConfig {
    /// Seed for deterministic uid generation.
    pub seed: u64,
    /// How duct connections treat an entity offered for the role opposite to one it holds.
    pub role_conflicts: RoleConflictPolicy,
}

impl ModelConfig {
    /// Creates a configuration with the given seed and silent role-conflict rejection.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Creates a configuration that reports role conflicts as errors.
    #[must_use]
    pub fn strict(seed: u64) -> Self {
        Self::new(seed).with_role_conflicts(RoleConflictPolicy::Error)
    }

    /// Sets the uid seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the role-conflict policy.
    #[must_use]
    pub fn with_role_conflicts(mut self, policy: RoleConflictPolicy) -> Self {
        self.role_conflicts = policy;
        self
    }
}
