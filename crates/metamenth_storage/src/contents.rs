//! Sub-entity collections and the containers that hold them.
//!
//! Each container kind holds a fixed subset of sub-entity kinds:
//!
//! | container          | transducers | HVAC components | appliances | meters | schedules |
//! |--------------------|:-----------:|:---------------:|:----------:|:------:|:---------:|
//! | building           |             |                 |            |   x    |     x     |
//! | floor              |             |                 |            |   x    |     x     |
//! | room / open space  |      x      |        x        |     x      |   x    |     x     |
//! | HVAC component     |      x      |                 |            |   x    |     x     |
//! | appliance          |      x      |                 |            |   x    |     x     |

use metamenth_foundation::{
    ApplianceId, ComponentId, EntityKind, EntityRef, Keyed, MeterId, ScheduleId, SensorId,
    SpaceId, SpaceKind, TypedId, Uid,
};

use crate::arena::Arena;
use crate::building::Building;
use crate::component::HvacComponent;
use crate::equipment::{Appliance, Meter, Schedule, Sensor};

/// Sub-entities attached to one container, each list in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubEntities {
    pub(crate) transducers: Vec<SensorId>,
    pub(crate) hvac_components: Vec<ComponentId>,
    pub(crate) appliances: Vec<ApplianceId>,
    pub(crate) meters: Vec<MeterId>,
    pub(crate) schedules: Vec<ScheduleId>,
}

impl SubEntities {
    /// Attached sensors.
    #[must_use]
    pub fn transducers(&self) -> &[SensorId] {
        &self.transducers
    }

    /// Attached HVAC components.
    #[must_use]
    pub fn hvac_components(&self) -> &[ComponentId] {
        &self.hvac_components
    }

    /// Attached appliances.
    #[must_use]
    pub fn appliances(&self) -> &[ApplianceId] {
        &self.appliances
    }

    /// Attached meters.
    #[must_use]
    pub fn meters(&self) -> &[MeterId] {
        &self.meters
    }

    /// Attached schedules.
    #[must_use]
    pub fn schedules(&self) -> &[ScheduleId] {
        &self.schedules
    }

    /// True if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transducers.is_empty()
            && self.hvac_components.is_empty()
            && self.appliances.is_empty()
            && self.meters.is_empty()
            && self.schedules.is_empty()
    }

    /// True if `entity` is attached.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        match entity {
            EntityRef::Sensor(id) => self.transducers.contains(&id),
            EntityRef::Component(id) => self.hvac_components.contains(&id),
            EntityRef::Appliance(id) => self.appliances.contains(&id),
            EntityRef::Meter(id) => self.meters.contains(&id),
            EntityRef::Schedule(id) => self.schedules.contains(&id),
            EntityRef::Space(_) | EntityRef::Zone(_) => false,
        }
    }

    /// All attached entities, grouped by kind.
    pub fn refs(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.transducers
            .iter()
            .map(|&id| EntityRef::from(id))
            .chain(self.hvac_components.iter().map(|&id| id.into()))
            .chain(self.appliances.iter().map(|&id| id.into()))
            .chain(self.meters.iter().map(|&id| id.into()))
            .chain(self.schedules.iter().map(|&id| id.into()))
    }

    /// Detaches `entity`. Returns true if it was attached.
    pub(crate) fn detach(&mut self, entity: EntityRef) -> bool {
        fn drop_id<I: PartialEq>(ids: &mut Vec<I>, id: &I) -> bool {
            let before = ids.len();
            ids.retain(|x| x != id);
            ids.len() != before
        }
        match entity {
            EntityRef::Sensor(id) => drop_id(&mut self.transducers, &id),
            EntityRef::Component(id) => drop_id(&mut self.hvac_components, &id),
            EntityRef::Appliance(id) => drop_id(&mut self.appliances, &id),
            EntityRef::Meter(id) => drop_id(&mut self.meters, &id),
            EntityRef::Schedule(id) => drop_id(&mut self.schedules, &id),
            EntityRef::Space(_) | EntityRef::Zone(_) => false,
        }
    }
}

/// Anything that holds sub-entities.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Container {
    /// The building itself.
    Building,
    /// A floor, room or open space.
    Space(SpaceId),
    /// An HVAC component.
    Component(ComponentId),
    /// An appliance.
    Appliance(ApplianceId),
}

impl From<SpaceId> for Container {
    fn from(id: SpaceId) -> Self {
        Self::Space(id)
    }
}

impl From<ComponentId> for Container {
    fn from(id: ComponentId) -> Self {
        Self::Component(id)
    }
}

impl From<ApplianceId> for Container {
    fn from(id: ApplianceId) -> Self {
        Self::Appliance(id)
    }
}

/// Sub-entity collections.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SubEntityKind {
    /// Sensors.
    Transducer,
    /// HVAC components.
    HvacComponent,
    /// Appliances.
    Appliance,
    /// Meters.
    Meter,
    /// Operational schedules.
    Schedule,
}

/// Container classification for admission checks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ContainerKind {
    /// The building.
    Building,
    /// A floor.
    Floor,
    /// A room or open space.
    FloorSpace,
    /// An HVAC component.
    Component,
    /// An appliance.
    Appliance,
}

impl ContainerKind {
    /// Classifies a space container.
    #[must_use]
    pub fn of_space(kind: SpaceKind) -> Self {
        if kind.is_floor_space() {
            Self::FloorSpace
        } else {
            Self::Floor
        }
    }

    /// True if this container holds `kind`.
    #[must_use]
    pub fn accepts(self, kind: SubEntityKind) -> bool {
        use SubEntityKind as S;
        match self {
            Self::Building | Self::Floor => matches!(kind, S::Meter | S::Schedule),
            Self::FloorSpace => true,
            Self::Component | Self::Appliance => {
                matches!(kind, S::Transducer | S::Meter | S::Schedule)
            }
        }
    }

    /// Description used in admission errors.
    #[must_use]
    pub fn admits(self) -> &'static str {
        match self {
            Self::Building | Self::Floor => "a meter or schedule",
            Self::FloorSpace => "a sub-entity",
            Self::Component | Self::Appliance => "a transducer, meter or schedule",
        }
    }
}

/// A record that can be attached to a [`Container`].
///
/// Ties each record type to its arena in the building and its list in
/// [`SubEntities`], so attachment and removal are written once.
pub trait SubEntity: Keyed + Clone {
    /// Id type of this record's arena.
    type Id: TypedId;

    /// Which collection this record goes in.
    const SLOT: SubEntityKind;

    /// The entity kind, used in admission errors.
    fn entity_kind(&self) -> EntityKind;

    /// Stamps the uid assigned on insertion and drops any links the record
    /// carries from an earlier insertion.
    fn prepare_insert(&mut self, uid: Uid);

    /// The building arena holding records of this type.
    fn arena(building: &Building) -> &Arena<Self::Id, Self>;

    /// The building arena holding records of this type, mutably.
    fn arena_mut(building: &mut Building) -> &mut Arena<Self::Id, Self>;

    /// This record's list within a container.
    fn slot(contents: &SubEntities) -> &[Self::Id];

    /// This record's list within a container, mutably.
    fn slot_mut(contents: &mut SubEntities) -> &mut Vec<Self::Id>;
}

macro_rules! sub_entity {
    (
        $record:ty, $id:ty, $slot:ident, $field:ident, $arena:ident, |$this:ident| $kind:expr
        $(; $clear:ident)?
    ) => {
        impl SubEntity for $record {
            type Id = $id;

            const SLOT: SubEntityKind = SubEntityKind::$slot;

            fn entity_kind(&self) -> EntityKind {
                let $this = self;
                $kind
            }

            fn prepare_insert(&mut self, uid: Uid) {
                self.uid = uid;
                $( self.$clear(); )?
            }

            fn arena(building: &Building) -> &Arena<Self::Id, Self> {
                &building.$arena
            }

            fn arena_mut(building: &mut Building) -> &mut Arena<Self::Id, Self> {
                &mut building.$arena
            }

            fn slot(contents: &SubEntities) -> &[Self::Id] {
                &contents.$field
            }

            fn slot_mut(contents: &mut SubEntities) -> &mut Vec<Self::Id> {
                &mut contents.$field
            }
        }
    };
}

sub_entity!(Sensor, SensorId, Transducer, transducers, sensors, |_this| EntityKind::Sensor);
sub_entity!(HvacComponent, ComponentId, HvacComponent, hvac_components, components, |this| {
    EntityKind::Component(this.kind())
}; clear_links);
sub_entity!(Appliance, ApplianceId, Appliance, appliances, appliances, |_this| {
    EntityKind::Appliance
}; clear_links);
sub_entity!(Meter, MeterId, Meter, meters, meters, |_this| EntityKind::Meter);
sub_entity!(Schedule, ScheduleId, Schedule, schedules, schedules, |_this| {
    EntityKind::Schedule
});
