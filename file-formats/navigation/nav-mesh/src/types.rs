//! Plain data types of a navigation mesh
//!
//! Entities refer to each other by numeric ID only. An area and a ladder can
//! point at each other, and keeping those links as IDs means no entity owns
//! another.

use std::fmt;

use crate::list::OrderedList;

/// Cardinal direction of an area connection or a ladder's facing
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavDirType {
    /// North (wire value 0)
    North = 0,
    /// East (wire value 1)
    East = 1,
    /// South (wire value 2)
    South = 2,
    /// West (wire value 3)
    West = 3,
}

impl NavDirType {
    /// Number of cardinal directions
    pub const COUNT: usize = 4;

    /// All directions in the order their lists appear on disk
    pub const ALL: [NavDirType; 4] = [
        NavDirType::North,
        NavDirType::East,
        NavDirType::South,
        NavDirType::West,
    ];

    /// Create from the raw wire value
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(NavDirType::North),
            1 => Some(NavDirType::East),
            2 => Some(NavDirType::South),
            3 => Some(NavDirType::West),
            _ => None,
        }
    }

    /// Position of this direction's list inside an area
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            NavDirType::North => NavDirType::South,
            NavDirType::East => NavDirType::West,
            NavDirType::South => NavDirType::North,
            NavDirType::West => NavDirType::East,
        }
    }
}

impl fmt::Display for NavDirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavDirType::North => write!(f, "North"),
            NavDirType::East => write!(f, "East"),
            NavDirType::South => write!(f, "South"),
            NavDirType::West => write!(f, "West"),
        }
    }
}

/// End of a ladder a ladder-to-ladder connection attaches to
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavLadderDirType {
    /// Top end (wire value 0)
    Top = 0,
    /// Bottom end (wire value 1)
    Bottom = 1,
}

impl NavLadderDirType {
    /// Number of ladder ends
    pub const COUNT: usize = 2;

    /// Both ends in the order their lists appear on disk
    pub const ALL: [NavLadderDirType; 2] = [NavLadderDirType::Top, NavLadderDirType::Bottom];

    /// Create from the raw wire value
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(NavLadderDirType::Top),
            1 => Some(NavLadderDirType::Bottom),
            _ => None,
        }
    }

    /// Position of this end's list inside a ladder
    pub fn index(self) -> usize {
        self as usize
    }

    /// The other end
    pub fn opposite(self) -> Self {
        match self {
            NavLadderDirType::Top => NavLadderDirType::Bottom,
            NavLadderDirType::Bottom => NavLadderDirType::Top,
        }
    }
}

impl fmt::Display for NavLadderDirType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavLadderDirType::Top => write!(f, "Top"),
            NavLadderDirType::Bottom => write!(f, "Bottom"),
        }
    }
}

/// A point in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vec3 {
    /// Create a new point
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Directed edge from the owning area to another area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConnection {
    connecting_area_id: u32,
    direction: NavDirType,
}

impl NavConnection {
    /// Create a connection towards `connecting_area_id`
    pub fn new(connecting_area_id: u32, direction: NavDirType) -> Self {
        Self {
            connecting_area_id,
            direction,
        }
    }

    /// ID of the area this edge leads to
    pub fn connecting_area_id(&self) -> u32 {
        self.connecting_area_id
    }

    /// Direction of travel out of the owning area
    pub fn direction(&self) -> NavDirType {
        self.direction
    }
}

/// Directed edge from the owning ladder to another ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLadderConnection {
    connecting_ladder_id: u32,
    direction: NavLadderDirType,
}

impl NavLadderConnection {
    /// Create a connection towards `connecting_ladder_id`
    pub fn new(connecting_ladder_id: u32, direction: NavLadderDirType) -> Self {
        Self {
            connecting_ladder_id,
            direction,
        }
    }

    /// ID of the ladder this edge leads to
    pub fn connecting_ladder_id(&self) -> u32 {
        self.connecting_ladder_id
    }

    /// End of the owning ladder the edge leaves from
    pub fn direction(&self) -> NavLadderDirType {
        self.direction
    }
}

/// A convex walkable region
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavArea {
    id: u32,
    connections: [OrderedList<NavConnection>; NavDirType::COUNT],
}

impl NavArea {
    /// Create an area with no connections
    pub fn new(id: u32) -> Self {
        Self {
            id,
            connections: Default::default(),
        }
    }

    pub(crate) fn connections_mut(
        &mut self,
        direction: NavDirType,
    ) -> &mut OrderedList<NavConnection> {
        &mut self.connections[direction.index()]
    }

    /// Area ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Outgoing connections in `direction`, in file order
    pub fn connections(&self, direction: NavDirType) -> &OrderedList<NavConnection> {
        &self.connections[direction.index()]
    }

    /// Total number of outgoing connections
    pub fn connection_count(&self) -> usize {
        self.connections.iter().map(OrderedList::size).sum()
    }

    /// Every outgoing connection, North list first
    pub fn all_connections(&self) -> impl Iterator<Item = &NavConnection> {
        self.connections.iter().flat_map(OrderedList::iter)
    }

    /// Check if any direction leads to `area_id`
    pub fn is_connected_to(&self, area_id: u32) -> bool {
        self.all_connections().any(|c| c.connecting_area_id() == area_id)
    }
}

/// A climbable connector between two elevation levels
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLadder {
    pub(crate) id: u32,
    pub(crate) width: f32,
    pub(crate) length: f32,
    pub(crate) top: Vec3,
    pub(crate) bottom: Vec3,
    pub(crate) direction: NavDirType,
    pub(crate) top_forward_area_id: u32,
    pub(crate) top_left_area_id: u32,
    pub(crate) top_right_area_id: u32,
    pub(crate) top_behind_area_id: u32,
    pub(crate) bottom_area_id: u32,
    pub(crate) connections: [OrderedList<NavLadderConnection>; NavLadderDirType::COUNT],
}

impl NavLadder {
    /// Ladder ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Ladder width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Ladder length
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Top end position
    pub fn top(&self) -> Vec3 {
        self.top
    }

    /// Bottom end position
    pub fn bottom(&self) -> Vec3 {
        self.bottom
    }

    /// Top end X coordinate
    pub fn top_x(&self) -> f32 {
        self.top.x
    }

    /// Top end Y coordinate
    pub fn top_y(&self) -> f32 {
        self.top.y
    }

    /// Top end Z coordinate
    pub fn top_z(&self) -> f32 {
        self.top.z
    }

    /// Bottom end X coordinate
    pub fn bottom_x(&self) -> f32 {
        self.bottom.x
    }

    /// Bottom end Y coordinate
    pub fn bottom_y(&self) -> f32 {
        self.bottom.y
    }

    /// Bottom end Z coordinate
    pub fn bottom_z(&self) -> f32 {
        self.bottom.z
    }

    /// Direction the climbable face points towards
    pub fn direction(&self) -> NavDirType {
        self.direction
    }

    /// Area reached by stepping forward off the top
    pub fn top_forward_area_id(&self) -> u32 {
        self.top_forward_area_id
    }

    /// Area reached by stepping left off the top
    pub fn top_left_area_id(&self) -> u32 {
        self.top_left_area_id
    }

    /// Area reached by stepping right off the top
    pub fn top_right_area_id(&self) -> u32 {
        self.top_right_area_id
    }

    /// Area reached by stepping backwards off the top
    pub fn top_behind_area_id(&self) -> u32 {
        self.top_behind_area_id
    }

    /// Area at the foot of the ladder
    pub fn bottom_area_id(&self) -> u32 {
        self.bottom_area_id
    }

    /// Ladder connections leaving from `end`
    pub fn connections(&self, end: NavLadderDirType) -> &OrderedList<NavLadderConnection> {
        &self.connections[end.index()]
    }

    /// The five area reference fields, labelled, in file order
    pub fn area_references(&self) -> [(&'static str, u32); 5] {
        [
            ("top forward", self.top_forward_area_id),
            ("top left", self.top_left_area_id),
            ("top right", self.top_right_area_id),
            ("top behind", self.top_behind_area_id),
            ("bottom", self.bottom_area_id),
        ]
    }

    /// Check if any area reference field equals `area_id`
    pub fn references_area(&self, area_id: u32) -> bool {
        self.area_references().iter().any(|&(_, id)| id == area_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_from_raw() {
        for dir in NavDirType::ALL {
            assert_eq!(NavDirType::from_raw(dir as u32), Some(dir));
        }
        assert_eq!(NavDirType::from_raw(4), None);
        assert_eq!(NavLadderDirType::from_raw(1), Some(NavLadderDirType::Bottom));
        assert_eq!(NavLadderDirType::from_raw(2), None);
    }

    #[test]
    fn test_opposites() {
        for dir in NavDirType::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(NavLadderDirType::Top.opposite(), NavLadderDirType::Bottom);
    }

    #[test]
    fn test_area_connections() {
        let mut area = NavArea::new(1);
        area.connections_mut(NavDirType::East)
            .append(NavConnection::new(4, NavDirType::East));
        area.connections_mut(NavDirType::North)
            .append(NavConnection::new(2, NavDirType::North));

        assert_eq!(area.connection_count(), 2);
        assert!(area.is_connected_to(4));
        assert!(!area.is_connected_to(3));

        let order: Vec<u32> = area
            .all_connections()
            .map(NavConnection::connecting_area_id)
            .collect();
        assert_eq!(order, vec![2, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(NavDirType::West.to_string(), "West");
        assert_eq!(NavLadderDirType::Top.to_string(), "Top");
    }
}
