//! The loaded, immutable navigation graph

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::builder::GraphBuilder;
use crate::error::{EntityKind, Error, Result};
use crate::format::LoadOptions;
use crate::types::{NavArea, NavConnection, NavLadder};

/// A validated navigation mesh
///
/// Every connection and cross-reference in a `NavMesh` points at an entity
/// that exists in the same mesh (or at the configured "no connection" ID).
/// Nothing can be modified after loading, so a mesh can be shared between
/// threads behind a plain reference or an `Arc`.
#[derive(Debug, Clone)]
pub struct NavMesh {
    version: u32,
    areas: Vec<NavArea>,
    area_index: HashMap<u32, usize>,
    ladders: Vec<NavLadder>,
    ladder_index: HashMap<u32, usize>,
}

impl NavMesh {
    pub(crate) fn from_parts(
        version: u32,
        areas: Vec<NavArea>,
        area_index: HashMap<u32, usize>,
        ladders: Vec<NavLadder>,
        ladder_index: HashMap<u32, usize>,
    ) -> Self {
        Self {
            version,
            areas,
            area_index,
            ladders,
            ladder_index,
        }
    }

    /// Load a mesh from a buffer using `options`
    pub fn from_bytes(data: &[u8], options: &LoadOptions) -> Result<Self> {
        GraphBuilder::new(options.clone()).build(data)
    }

    /// Read `reader` to the end and load the result
    pub fn from_reader<R: Read>(reader: &mut R, options: &LoadOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, options)
    }

    /// Load a mesh from a file on disk
    pub fn open<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening navigation mesh {}", path.display());
        let mut reader = BufReader::new(File::open(path)?);
        Self::from_reader(&mut reader, options)
    }

    /// Format version from the file header
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Look up an area by ID
    pub fn get_area(&self, id: u32) -> Result<&NavArea> {
        self.area_index
            .get(&id)
            .map(|&index| &self.areas[index])
            .ok_or(Error::NotFound {
                kind: EntityKind::Area,
                id,
            })
    }

    /// Look up a ladder by ID
    pub fn get_ladder(&self, id: u32) -> Result<&NavLadder> {
        self.ladder_index
            .get(&id)
            .map(|&index| &self.ladders[index])
            .ok_or(Error::NotFound {
                kind: EntityKind::Ladder,
                id,
            })
    }

    /// Number of areas
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Number of ladders
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// Check if an area with `id` exists
    pub fn contains_area(&self, id: u32) -> bool {
        self.area_index.contains_key(&id)
    }

    /// Check if a ladder with `id` exists
    pub fn contains_ladder(&self, id: u32) -> bool {
        self.ladder_index.contains_key(&id)
    }

    /// All areas in file order
    pub fn areas(&self) -> impl ExactSizeIterator<Item = &NavArea> {
        self.areas.iter()
    }

    /// All ladders in file order
    pub fn ladders(&self) -> impl ExactSizeIterator<Item = &NavLadder> {
        self.ladders.iter()
    }

    /// Outgoing connections of area `id`, North list first
    pub fn neighbors(&self, id: u32) -> Result<impl Iterator<Item = &NavConnection>> {
        Ok(self.get_area(id)?.all_connections())
    }

    /// Ladders with any top or bottom area field equal to `area_id`
    pub fn ladders_touching(&self, area_id: u32) -> impl Iterator<Item = &NavLadder> {
        self.ladders
            .iter()
            .filter(move |ladder| ladder.references_area(area_id))
    }

    /// Total number of area-to-area connections
    pub fn connection_count(&self) -> usize {
        self.areas.iter().map(NavArea::connection_count).sum()
    }
}

impl fmt::Display for NavMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Navigation mesh v{} ({} areas, {} connections, {} ladders)",
            self.version,
            self.area_count(),
            self.connection_count(),
            self.ladder_count()
        )
    }
}
