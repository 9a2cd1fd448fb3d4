//! HVAC components, ducts included.

use metamenth_foundation::{
    AirVolumeType, BoilerCategory, ComponentId, ComponentKind, DamperType, DuctSubType, DuctType,
    FilterType, HeatExchangerFlowType, HeatExchangerType, Keyed, Measure, PowerState, Uid,
};
use metamenth_network::DuctConnection;

use crate::contents::SubEntities;

/// A piece of HVAC equipment.
#[derive(Clone, Debug, PartialEq)]
pub struct HvacComponent {
    /// Assigned by the building on insertion.
    pub uid: Uid,
    /// Unique name within its container.
    pub name: String,
    /// Manufacturer.
    pub manufacturer: Option<String>,
    /// Model designation.
    pub model: Option<String>,
    /// Current power state.
    pub power_state: Option<PowerState>,
    /// Kind-specific attributes.
    pub details: ComponentDetails,
    pub(crate) contents: SubEntities,
}

impl HvacComponent {
    /// Creates a component.
    #[must_use]
    pub fn new(name: impl Into<String>, details: ComponentDetails) -> Self {
        Self {
            uid: Uid::NIL,
            name: name.into(),
            manufacturer: None,
            model: None,
            power_state: None,
            details,
            contents: SubEntities::default(),
        }
    }

    /// Creates a duct with no connection and no parts.
    #[must_use]
    pub fn duct(name: impl Into<String>, duct_type: DuctType) -> Self {
        Self::new(name, ComponentDetails::Duct(Duct::new(duct_type)))
    }

    /// Sets the manufacturer.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Sets the power state.
    #[must_use]
    pub fn with_power_state(mut self, state: PowerState) -> Self {
        self.power_state = Some(state);
        self
    }

    /// The component kind.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.details.kind()
    }

    /// Duct attributes, if this is a duct.
    #[must_use]
    pub fn as_duct(&self) -> Option<&Duct> {
        match &self.details {
            ComponentDetails::Duct(duct) => Some(duct),
            _ => None,
        }
    }

    pub(crate) fn as_duct_mut(&mut self) -> Option<&mut Duct> {
        match &mut self.details {
            ComponentDetails::Duct(duct) => Some(duct),
            _ => None,
        }
    }

    /// Attached sub-entities.
    #[must_use]
    pub fn contents(&self) -> &SubEntities {
        &self.contents
    }

    pub(crate) fn clear_links(&mut self) {
        self.contents = SubEntities::default();
        if let Some(duct) = self.as_duct_mut() {
            duct.connection = None;
            duct.parts.clear();
        }
    }
}

impl Keyed for HvacComponent {
    fn key_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

/// Kind-specific component attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentDetails {
    /// Air mover.
    Fan {
        /// True if driven by a variable frequency drive.
        variable_speed: bool,
    },
    /// Airflow regulator.
    Damper {
        /// Damper type.
        damper_type: DamperType,
        /// Opening, 0 to 100.
        percentage_opened: f64,
    },
    /// Heat exchanger.
    HeatExchanger {
        /// Construction.
        heat_exchanger_type: HeatExchangerType,
        /// Flow arrangement.
        flow_type: HeatExchangerFlowType,
    },
    /// Air filter.
    Filter {
        /// Filter grade.
        filter_type: FilterType,
    },
    /// Air volume box.
    AirVolumeBox {
        /// Regulation type.
        air_volume_type: AirVolumeType,
        /// True if the box can heat.
        has_heating_capability: bool,
        /// True if the box can cool.
        has_cooling_capability: bool,
    },
    /// Boiler.
    Boiler {
        /// Fuel category.
        category: BoilerCategory,
    },
    /// Chiller.
    Chiller {
        /// Rated capacity.
        capacity: Option<Measure>,
    },
    /// Cooling tower.
    CoolingTower,
    /// Pump.
    Pump,
    /// Duct.
    Duct(Duct),
}

impl ComponentDetails {
    /// The component kind of these details.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Fan { .. } => ComponentKind::Fan,
            Self::Damper { .. } => ComponentKind::Damper,
            Self::HeatExchanger { .. } => ComponentKind::HeatExchanger,
            Self::Filter { .. } => ComponentKind::Filter,
            Self::AirVolumeBox { .. } => ComponentKind::AirVolumeBox,
            Self::Boiler { .. } => ComponentKind::Boiler,
            Self::Chiller { .. } => ComponentKind::Chiller,
            Self::CoolingTower => ComponentKind::CoolingTower,
            Self::Pump => ComponentKind::Pump,
            Self::Duct(_) => ComponentKind::Duct,
        }
    }
}

/// Duct attributes: its connection and its parts.
#[derive(Clone, Debug, PartialEq)]
pub struct Duct {
    /// Duct type.
    pub duct_type: DuctType,
    /// Duct subtype.
    pub sub_type: Option<DuctSubType>,
    pub(crate) connection: Option<DuctConnection>,
    pub(crate) parts: Vec<ComponentId>,
}

impl Duct {
    /// Creates a duct with no connection and no parts.
    #[must_use]
    pub fn new(duct_type: DuctType) -> Self {
        Self {
            duct_type,
            sub_type: None,
            connection: None,
            parts: Vec::new(),
        }
    }

    /// Sets the subtype.
    #[must_use]
    pub fn with_sub_type(mut self, sub_type: DuctSubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }

    /// The duct's connection, if one has been made.
    #[must_use]
    pub fn connection(&self) -> Option<&DuctConnection> {
        self.connection.as_ref()
    }

    /// Attached fans, dampers, heat exchangers, filters and air volume boxes.
    #[must_use]
    pub fn parts(&self) -> &[ComponentId] {
        &self.parts
    }
}
