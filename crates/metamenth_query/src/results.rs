//! Search results.

use metamenth_foundation::{ApplianceId, ComponentId, EntityRef, MeterId, SensorId, SpaceId};

/// One match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Found {
    /// A floor, room or open space.
    Space(SpaceId),
    /// A sensor.
    Sensor(SensorId),
    /// A meter.
    Meter(MeterId),
    /// An HVAC component.
    Component(ComponentId),
    /// An appliance.
    Appliance(ApplianceId),
}

impl From<Found> for EntityRef {
    fn from(found: Found) -> Self {
        match found {
            Found::Space(id) => id.into(),
            Found::Sensor(id) => id.into(),
            Found::Meter(id) => id.into(),
            Found::Component(id) => id.into(),
            Found::Appliance(id) => id.into(),
        }
    }
}

/// Matches in traversal order.
///
/// Duplicates are kept: an entity reachable through two containers appears
/// once per path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    items: Vec<Found>,
}

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a match.
    pub fn push(&mut self, found: Found) {
        self.items.push(found);
    }

    /// Number of matches, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All matches in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Found] {
        &self.items
    }

    /// Iterates all matches in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Found> {
        self.items.iter()
    }

    /// Matched spaces in order.
    #[must_use]
    pub fn spaces(&self) -> Vec<SpaceId> {
        self.collect(|f| match f {
            Found::Space(id) => Some(id),
            _ => None,
        })
    }

    /// Matched sensors in order.
    #[must_use]
    pub fn sensors(&self) -> Vec<SensorId> {
        self.collect(|f| match f {
            Found::Sensor(id) => Some(id),
            _ => None,
        })
    }

    /// Matched meters in order.
    #[must_use]
    pub fn meters(&self) -> Vec<MeterId> {
        self.collect(|f| match f {
            Found::Meter(id) => Some(id),
            _ => None,
        })
    }

    /// Matched components in order.
    #[must_use]
    pub fn components(&self) -> Vec<ComponentId> {
        self.collect(|f| match f {
            Found::Component(id) => Some(id),
            _ => None,
        })
    }

    /// Matched appliances in order.
    #[must_use]
    pub fn appliances(&self) -> Vec<ApplianceId> {
        self.collect(|f| match f {
            Found::Appliance(id) => Some(id),
            _ => None,
        })
    }

    fn collect<T>(&self, pick: impl Fn(Found) -> Option<T>) -> Vec<T> {
        self.items.iter().copied().filter_map(pick).collect()
    }
}

impl IntoIterator for ResultSet {
    type Item = Found;
    type IntoIter = std::vec::IntoIter<Found>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Found;
    type IntoIter = std::slice::Iter<'a, Found>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Found> for ResultSet {
    fn from_iter<I: IntoIterator<Item = Found>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
