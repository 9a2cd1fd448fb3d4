//! Zones: named groupings of spaces that cut across floors.

use metamenth_foundation::{HvacType, Keyed, SpaceId, Uid, ZoneId, ZoneType};

/// A zone in the building's zone registry.
///
/// Zone names are unique within a building; the registry resolves a second
/// zone with an existing name to the zone already registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    /// Assigned by the building on registration.
    pub uid: Uid,
    /// Registry key.
    pub name: String,
    /// Zone type.
    pub zone_type: ZoneType,
    /// HVAC subtype.
    pub hvac_type: HvacType,
    /// Optional description.
    pub description: Option<String>,
    pub(crate) spaces: Vec<SpaceId>,
    pub(crate) adjacent_zones: Vec<ZoneId>,
    pub(crate) overlapping_zones: Vec<ZoneId>,
}

impl Zone {
    /// Creates an unregistered zone.
    #[must_use]
    pub fn new(name: impl Into<String>, zone_type: ZoneType, hvac_type: HvacType) -> Self {
        Self {
            uid: Uid::NIL,
            name: name.into(),
            zone_type,
            hvac_type,
            description: None,
            spaces: Vec::new(),
            adjacent_zones: Vec::new(),
            overlapping_zones: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Member spaces, in insertion order.
    #[must_use]
    pub fn spaces(&self) -> &[SpaceId] {
        &self.spaces
    }

    /// Zones recorded as adjacent to this one.
    #[must_use]
    pub fn adjacent_zones(&self) -> &[ZoneId] {
        &self.adjacent_zones
    }

    /// Zones recorded as overlapping this one.
    #[must_use]
    pub fn overlapping_zones(&self) -> &[ZoneId] {
        &self.overlapping_zones
    }
}

impl Keyed for Zone {
    fn key_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}
