//! Entity identifiers with generational indices.
//!
//! Every record in a building model lives in an arena slot addressed by an
//! [`EntityId`]. Typed wrappers ([`SpaceId`], [`ZoneId`], ...) keep ids of
//! different arenas from being mixed up, and [`EntityRef`] names any of them.

use std::fmt;

/// Entity identifier with generational index for stale reference detection.
///
/// The generation counter increments when a slot is reused after destruction,
/// allowing detection of stale references to destroyed entities.
///
/// # Layout
/// - `index`: 64-bit index into arena storage
/// - `generation`: 32-bit generation counter
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    /// Index into arena storage.
    pub index: u64,
    /// Generation counter for stale reference detection.
    pub generation: u32,
}

impl EntityId {
    /// Creates a new entity ID with the given index and generation.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns a sentinel value representing "no entity".
    ///
    /// This uses `u64::MAX` as the index, which should never be allocated.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            index: u64::MAX,
            generation: 0,
        }
    }

    /// Returns true if this is the null sentinel value.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.index == u64::MAX
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "EntityId(null)")
        } else {
            write!(f, "EntityId({}v{})", self.index, self.generation)
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Entity(null)")
        } else {
            write!(f, "Entity({})", self.index)
        }
    }
}

/// A strongly typed wrapper around an [`EntityId`].
///
/// Arenas are generic over this trait so each record kind gets its own id type.
pub trait TypedId: Copy + Eq + std::hash::Hash + fmt::Debug {
    /// Wraps a raw entity id.
    fn from_raw(raw: EntityId) -> Self;

    /// Returns the raw entity id.
    fn raw(self) -> EntityId;

    /// Returns this id as an [`EntityRef`].
    fn to_ref(self) -> EntityRef;
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(pub EntityId);

        impl TypedId for $name {
            fn from_raw(raw: EntityId) -> Self {
                Self(raw)
            }

            fn raw(self) -> EntityId {
                self.0
            }

            fn to_ref(self) -> EntityRef {
                EntityRef::$variant(self)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}v{})", stringify!($name), self.0.index, self.0.generation)
            }
        }

        impl From<$name> for EntityRef {
            fn from(id: $name) -> Self {
                EntityRef::$variant(id)
            }
        }
    };
}

typed_id!(
    /// Identifies a floor, room, or open space.
    SpaceId => Space
);
typed_id!(
    /// Identifies a zone in the building's zone registry.
    ZoneId => Zone
);
typed_id!(
    /// Identifies an HVAC component, ducts included.
    ComponentId => Component
);
typed_id!(
    /// Identifies a sensor.
    SensorId => Sensor
);
typed_id!(
    /// Identifies a meter.
    MeterId => Meter
);
typed_id!(
    /// Identifies an appliance.
    ApplianceId => Appliance
);
typed_id!(
    /// Identifies an operational schedule.
    ScheduleId => Schedule
);

/// A reference to any entity held by a building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum EntityRef {
    /// A floor, room, or open space.
    Space(SpaceId),
    /// A zone.
    Zone(ZoneId),
    /// An HVAC component or duct.
    Component(ComponentId),
    /// A sensor.
    Sensor(SensorId),
    /// A meter.
    Meter(MeterId),
    /// An appliance.
    Appliance(ApplianceId),
    /// An operational schedule.
    Schedule(ScheduleId),
}

impl EntityRef {
    /// Returns the raw entity id regardless of arena.
    #[must_use]
    pub fn raw(self) -> EntityId {
        match self {
            Self::Space(id) => id.0,
            Self::Zone(id) => id.0,
            Self::Component(id) => id.0,
            Self::Sensor(id) => id.0,
            Self::Meter(id) => id.0,
            Self::Appliance(id) => id.0,
            Self::Schedule(id) => id.0,
        }
    }

    /// Returns the arena name for display.
    #[must_use]
    pub fn arena(self) -> &'static str {
        match self {
            Self::Space(_) => "space",
            Self::Zone(_) => "zone",
            Self::Component(_) => "component",
            Self::Sensor(_) => "sensor",
            Self::Meter(_) => "meter",
            Self::Appliance(_) => "appliance",
            Self::Schedule(_) => "schedule",
        }
    }

    /// Returns the component id if this is a component reference.
    #[must_use]
    pub fn as_component(self) -> Option<ComponentId> {
        match self {
            Self::Component(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the space id if this is a space reference.
    #[must_use]
    pub fn as_space(self) -> Option<SpaceId> {
        match self {
            Self::Space(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.arena(), self.raw().index)
    }
}
