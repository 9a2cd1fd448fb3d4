//! Structural spaces: floors, rooms and open spaces.
//!
//! All three live in one arena and share a [`SpaceId`] namespace, so zones,
//! adjacency and duct connections can refer to any of them uniformly.
//! [`FloorPlan`], [`Room`] and [`OpenSpace`] are the inputs handed to the
//! building; [`Space`] is what it stores.

use metamenth_foundation::{
    FloorType, Keyed, Measure, OpenSpaceType, RoomType, SpaceId, SpaceKind, Uid, ZoneId,
};

use crate::contents::SubEntities;

/// A stored floor, room or open space.
#[derive(Clone, Debug, PartialEq)]
pub struct Space {
    /// Assigned by the building on insertion.
    pub uid: Uid,
    /// Unique among the rooms and open spaces of one floor.
    pub name: String,
    /// Floor area.
    pub area: Measure,
    /// Free-form location, e.g. a what3words address.
    pub location: Option<String>,
    /// Kind-specific attributes.
    pub details: SpaceDetails,
    pub(crate) zones: Vec<ZoneId>,
    pub(crate) adjacent_spaces: Vec<SpaceId>,
    pub(crate) contents: SubEntities,
}

impl Space {
    fn new(name: String, area: Measure, location: Option<String>, details: SpaceDetails) -> Self {
        Self {
            uid: Uid::NIL,
            name,
            area,
            location,
            details,
            zones: Vec::new(),
            adjacent_spaces: Vec::new(),
            contents: SubEntities::default(),
        }
    }

    /// The structural kind of this space.
    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        match self.details {
            SpaceDetails::Floor(_) => SpaceKind::Floor,
            SpaceDetails::Room(_) => SpaceKind::Room,
            SpaceDetails::OpenSpace(_) => SpaceKind::OpenSpace,
        }
    }

    /// Zones this space belongs to, in insertion order.
    #[must_use]
    pub fn zones(&self) -> &[ZoneId] {
        &self.zones
    }

    /// Spaces recorded as adjacent to this one.
    #[must_use]
    pub fn adjacent_spaces(&self) -> &[SpaceId] {
        &self.adjacent_spaces
    }

    /// Attached sub-entities.
    #[must_use]
    pub fn contents(&self) -> &SubEntities {
        &self.contents
    }

    /// Floor attributes, if this is a floor.
    #[must_use]
    pub fn as_floor(&self) -> Option<&FloorDetails> {
        match &self.details {
            SpaceDetails::Floor(floor) => Some(floor),
            _ => None,
        }
    }

    /// Room attributes, if this is a room.
    #[must_use]
    pub fn as_room(&self) -> Option<&RoomDetails> {
        match &self.details {
            SpaceDetails::Room(room) => Some(room),
            _ => None,
        }
    }

    /// Open space attributes, if this is an open space.
    #[must_use]
    pub fn as_open_space(&self) -> Option<&OpenSpaceDetails> {
        match &self.details {
            SpaceDetails::OpenSpace(open) => Some(open),
            _ => None,
        }
    }

    /// The floor holding this room or open space.
    #[must_use]
    pub fn parent_floor(&self) -> Option<SpaceId> {
        match &self.details {
            SpaceDetails::Floor(_) => None,
            SpaceDetails::Room(room) => Some(room.floor),
            SpaceDetails::OpenSpace(open) => Some(open.floor),
        }
    }
}

impl Keyed for Space {
    fn key_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

/// Kind-specific space attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum SpaceDetails {
    /// A floor.
    Floor(FloorDetails),
    /// A room.
    Room(RoomDetails),
    /// An open space.
    OpenSpace(OpenSpaceDetails),
}

/// Floor attributes and children.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorDetails {
    /// Floor number, unique within the building.
    pub number: i32,
    /// Floor type.
    pub floor_type: FloorType,
    /// Optional description.
    pub description: Option<String>,
    pub(crate) rooms: Vec<SpaceId>,
    pub(crate) open_spaces: Vec<SpaceId>,
}

impl FloorDetails {
    /// Rooms on this floor, in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[SpaceId] {
        &self.rooms
    }

    /// Open spaces on this floor, in insertion order.
    #[must_use]
    pub fn open_spaces(&self) -> &[SpaceId] {
        &self.open_spaces
    }
}

/// Room attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomDetails {
    /// Room type.
    pub room_type: RoomType,
    /// Owning floor.
    pub floor: SpaceId,
}

/// Open space attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenSpaceDetails {
    /// Open space type.
    pub space_type: OpenSpaceType,
    /// Owning floor.
    pub floor: SpaceId,
}

/// A room to be placed on a floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    /// Name, unique within the floor.
    pub name: String,
    /// Floor area.
    pub area: Measure,
    /// Room type.
    pub room_type: RoomType,
    /// Optional location.
    pub location: Option<String>,
}

impl Room {
    /// Creates a room.
    #[must_use]
    pub fn new(name: impl Into<String>, area: Measure, room_type: RoomType) -> Self {
        Self {
            name: name.into(),
            area,
            room_type,
            location: None,
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub(crate) fn into_space(self, floor: SpaceId) -> Space {
        Space::new(
            self.name,
            self.area,
            self.location,
            SpaceDetails::Room(RoomDetails {
                room_type: self.room_type,
                floor,
            }),
        )
    }
}

/// An open space to be placed on a floor.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenSpace {
    /// Name, unique within the floor.
    pub name: String,
    /// Floor area.
    pub area: Measure,
    /// Open space type.
    pub space_type: OpenSpaceType,
    /// Optional location.
    pub location: Option<String>,
}

impl OpenSpace {
    /// Creates an open space.
    #[must_use]
    pub fn new(name: impl Into<String>, area: Measure, space_type: OpenSpaceType) -> Self {
        Self {
            name: name.into(),
            area,
            space_type,
            location: None,
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub(crate) fn into_space(self, floor: SpaceId) -> Space {
        Space::new(
            self.name,
            self.area,
            self.location,
            SpaceDetails::OpenSpace(OpenSpaceDetails {
                space_type: self.space_type,
                floor,
            }),
        )
    }
}

/// A floor with its initial rooms and open spaces.
///
/// A floor must hold at least one room or open space when it is added.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorPlan {
    /// Floor number.
    pub number: i32,
    /// Display name; defaults to `Floor {number}`.
    pub name: String,
    /// Floor area.
    pub area: Measure,
    /// Floor type.
    pub floor_type: FloorType,
    /// Optional description.
    pub description: Option<String>,
    /// Optional location.
    pub location: Option<String>,
    /// Initial rooms.
    pub rooms: Vec<Room>,
    /// Initial open spaces.
    pub open_spaces: Vec<OpenSpace>,
}

impl FloorPlan {
    /// Creates an empty floor plan.
    #[must_use]
    pub fn new(number: i32, area: Measure, floor_type: FloorType) -> Self {
        Self {
            number,
            name: format!("Floor {number}"),
            area,
            floor_type,
            description: None,
            location: None,
            rooms: Vec::new(),
            open_spaces: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a room.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds an open space.
    #[must_use]
    pub fn with_open_space(mut self, open_space: OpenSpace) -> Self {
        self.open_spaces.push(open_space);
        self
    }

    /// True if the plan holds at least one room or open space.
    #[must_use]
    pub fn has_spaces(&self) -> bool {
        !self.rooms.is_empty() || !self.open_spaces.is_empty()
    }

    /// Splits the plan into the floor record and its children.
    pub(crate) fn into_parts(self) -> (Space, Vec<Room>, Vec<OpenSpace>) {
        let floor = Space::new(
            self.name,
            self.area,
            self.location,
            SpaceDetails::Floor(FloorDetails {
                number: self.number,
                floor_type: self.floor_type,
                description: self.description,
                rooms: Vec::new(),
                open_spaces: Vec::new(),
            }),
        );
        (floor, self.rooms, self.open_spaces)
    }
}
