//! Loader for binary navigation mesh assets.
//!
//! A navigation mesh is a graph of convex walkable areas. Each area keeps
//! four lists of directed connections (North, East, South, West) to other
//! areas, and ladders link areas on different elevation levels. This crate
//! turns the binary asset into an immutable [`NavMesh`] where every
//! reference has been checked.
//!
//! # Examples
//!
//! ```
//! use nav_mesh::{NavDirType, load};
//!
//! let mut data = Vec::new();
//! for word in [
//!     0xFEED_FACE, 1, // header: magic, version
//!     2,              // area count
//!     1, 1, 2, 0, 0, 0, // area 1: North -> 2
//!     2, 0, 0, 1, 1, 0, // area 2: South -> 1
//!     0,              // ladder count
//! ] {
//!     data.extend(&u32::to_le_bytes(word));
//! }
//!
//! let mesh = load(&data).unwrap();
//! assert_eq!(mesh.area_count(), 2);
//!
//! let north = mesh.get_area(1).unwrap().connections(NavDirType::North);
//! assert_eq!(north.at(0).unwrap().connecting_area_id(), 2);
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod cursor;
pub mod error;
pub mod format;
pub mod list;
pub mod mesh;
pub mod parser;
pub mod types;

pub use builder::GraphBuilder;
pub use cursor::ByteCursor;
pub use error::{EntityKind, Error, Result};
pub use format::{LoadLimits, LoadOptions, NavFormat};
pub use list::OrderedList;
pub use mesh::NavMesh;
pub use types::{
    NavArea, NavConnection, NavDirType, NavLadder, NavLadderConnection, NavLadderDirType, Vec3,
};

/// Load a navigation mesh using the default format and limits
pub fn load(data: &[u8]) -> Result<NavMesh> {
    load_with(data, &LoadOptions::default())
}

/// Load a navigation mesh using `options`
pub fn load_with(data: &[u8], options: &LoadOptions) -> Result<NavMesh> {
    NavMesh::from_bytes(data, options)
}
