//! Kind classification for building entities.
//!
//! Admission rules (which entity may sit in which collection or duct role)
//! are decided on kinds, not on concrete records, so the rules can be checked
//! by layers that never see storage.

use std::fmt;

/// Structural space kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpaceKind {
    /// A building floor.
    Floor,
    /// An enclosed room on a floor.
    Room,
    /// An open space on a floor.
    OpenSpace,
}

impl SpaceKind {
    /// True for rooms and open spaces, the spaces that sit on a floor.
    #[must_use]
    pub fn is_floor_space(self) -> bool {
        matches!(self, Self::Room | Self::OpenSpace)
    }
}

/// HVAC component kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ComponentKind {
    /// Air mover.
    Fan,
    /// Airflow regulator.
    Damper,
    /// Heat exchanger (fin-tube, plate, ...).
    HeatExchanger,
    /// Air filter.
    Filter,
    /// Variable or constant air-volume box.
    AirVolumeBox,
    /// Boiler.
    Boiler,
    /// Chiller.
    Chiller,
    /// Cooling tower.
    CoolingTower,
    /// Pump.
    Pump,
    /// Duct.
    Duct,
}

impl ComponentKind {
    /// Kinds that terminate a duct connection and may never merely pass through it.
    pub const FLOW_BLOCKING: [ComponentKind; 3] = [Self::Fan, Self::Damper, Self::HeatExchanger];

    /// Kinds that may be attached to a duct as parts.
    pub const DUCT_PARTS: [ComponentKind; 5] = [
        Self::Fan,
        Self::Damper,
        Self::HeatExchanger,
        Self::Filter,
        Self::AirVolumeBox,
    ];

    /// Returns true if this kind blocks flow.
    #[must_use]
    pub fn is_flow_blocking(self) -> bool {
        Self::FLOW_BLOCKING.contains(&self)
    }

    /// Returns true if this kind can be attached to a duct as a part.
    #[must_use]
    pub fn is_duct_part(self) -> bool {
        Self::DUCT_PARTS.contains(&self)
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fan => "Fan",
            Self::Damper => "Damper",
            Self::HeatExchanger => "HeatExchanger",
            Self::Filter => "Filter",
            Self::AirVolumeBox => "AirVolumeBox",
            Self::Boiler => "Boiler",
            Self::Chiller => "Chiller",
            Self::CoolingTower => "CoolingTower",
            Self::Pump => "Pump",
            Self::Duct => "Duct",
        }
    }
}

/// The kind of any entity held by a building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EntityKind {
    /// A structural space.
    Space(SpaceKind),
    /// A zone.
    Zone,
    /// An HVAC component.
    Component(ComponentKind),
    /// A sensor.
    Sensor,
    /// A meter.
    Meter,
    /// An appliance.
    Appliance,
    /// An operational schedule.
    Schedule,
}

impl EntityKind {
    /// Returns the component kind, if any.
    #[must_use]
    pub fn component(self) -> Option<ComponentKind> {
        match self {
            Self::Component(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns true for ducts.
    #[must_use]
    pub fn is_duct(self) -> bool {
        self == Self::Component(ComponentKind::Duct)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(kind) => write!(f, "{kind:?}"),
            Self::Component(kind) => f.write_str(kind.name()),
            Self::Zone => f.write_str("Zone"),
            Self::Sensor => f.write_str("Sensor"),
            Self::Meter => f.write_str("Meter"),
            Self::Appliance => f.write_str("Appliance"),
            Self::Schedule => f.write_str("Schedule"),
        }
    }
}

/// The role an entity plays in a duct connection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConnectionRole {
    /// Upstream of the duct.
    Source,
    /// Downstream of the duct.
    Destination,
    /// Passed through by the duct.
    Inside,
}

impl ConnectionRole {
    /// The role that may not hold the same entity as this one.
    #[must_use]
    pub fn opposite(self) -> Option<ConnectionRole> {
        match self {
            Self::Source => Some(Self::Destination),
            Self::Destination => Some(Self::Source),
            Self::Inside => None,
        }
    }
}

impl fmt::Display for ConnectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
            Self::Inside => f.write_str("inside"),
        }
    }
}
