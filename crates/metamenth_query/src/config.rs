//! Search configuration.

/// Where a traversal starts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SearchScope {
    /// Walk every floor in stored order, then its rooms and open spaces.
    #[default]
    Floors,
    /// Walk the building's zone registry and the spaces of each matching zone.
    Zones,
}

/// Traversal options shared by every search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Traversal entry point.
    pub scope: SearchScope,
    /// Record matching floors in space searches.
    pub include_floors: bool,
    /// Skip the rooms and open spaces of a floor that fails its filter.
    pub prune_unmatched_floors: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scope: SearchScope::Floors,
            include_floors: true,
            prune_unmatched_floors: false,
        }
    }
}

impl SearchConfig {
    /// Floor-scoped traversal that records floors and never prunes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone-scoped traversal.
    #[must_use]
    pub fn zones() -> Self {
        Self::default().with_scope(SearchScope::Zones)
    }

    /// Sets the traversal entry point.
    #[must_use]
    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets whether space searches record floors.
    #[must_use]
    pub fn with_include_floors(mut self, include: bool) -> Self {
        self.include_floors = include;
        self
    }

    /// Sets whether a non-matching floor hides its children.
    #[must_use]
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune_unmatched_floors = prune;
        self
    }
}
