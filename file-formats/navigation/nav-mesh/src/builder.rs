//! Graph construction from decoded records
//!
//! [`GraphBuilder`] runs the whole load pipeline: header, area section,
//! ladder section, then a resolution pass over every cross-reference. All
//! intermediate state lives in the builder, which is consumed by
//! [`GraphBuilder::build`]; on error nothing of it escapes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::cursor::ByteCursor;
use crate::error::{EntityKind, Error, Result};
use crate::format::LoadOptions;
use crate::mesh::NavMesh;
use crate::parser::{
    MIN_AREA_SIZE, MIN_LADDER_SIZE, parse_area, parse_header, parse_ladder, read_count,
};
use crate::types::{NavArea, NavLadder, NavLadderDirType};

/// Records of one kind in file order plus an ID lookup table
#[derive(Debug)]
struct RecordTable<T> {
    kind: EntityKind,
    records: Vec<T>,
    index: HashMap<u32, usize>,
}

impl<T> RecordTable<T> {
    fn with_capacity(kind: EntityKind, capacity: usize) -> Self {
        Self {
            kind,
            records: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, id: u32, record: T, offset: usize) -> Result<()> {
        match self.index.entry(id) {
            Entry::Occupied(_) => Err(Error::DuplicateId {
                kind: self.kind,
                id,
                offset,
            }),
            Entry::Vacant(slot) => {
                slot.insert(self.records.len());
                self.records.push(record);
                Ok(())
            }
        }
    }

    fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }
}

/// Single-use builder turning an asset buffer into a [`NavMesh`]
///
/// # Examples
///
/// ```
/// use nav_mesh::{GraphBuilder, LoadOptions};
///
/// let mut data = Vec::new();
/// data.extend(&0xFEED_FACEu32.to_le_bytes()); // magic
/// data.extend(&1u32.to_le_bytes()); // version
/// data.extend(&0u32.to_le_bytes()); // area count
/// data.extend(&0u32.to_le_bytes()); // ladder count
///
/// let mesh = GraphBuilder::new(LoadOptions::default()).build(&data).unwrap();
/// assert_eq!(mesh.area_count(), 0);
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    options: LoadOptions,
    areas: RecordTable<NavArea>,
    ladders: RecordTable<NavLadder>,
}

impl GraphBuilder {
    /// Create a builder for assets described by `options`
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            areas: RecordTable::with_capacity(EntityKind::Area, 0),
            ladders: RecordTable::with_capacity(EntityKind::Ladder, 0),
        }
    }

    /// Parse, validate and freeze `data`
    pub fn build(mut self, data: &[u8]) -> Result<NavMesh> {
        let mut cursor = ByteCursor::new(data);

        let header = parse_header(&mut cursor, &self.options.format)?;
        log::debug!(
            "Navigation mesh header: magic=0x{:08X}, version={}",
            header.magic,
            header.version
        );

        self.read_areas(&mut cursor)?;
        self.read_ladders(&mut cursor)?;
        self.check_trailing(&cursor)?;

        self.resolve_area_connections()?;
        self.resolve_ladder_references()?;

        log::debug!(
            "Loaded navigation mesh: {} areas, {} ladders",
            self.areas.records.len(),
            self.ladders.records.len()
        );

        Ok(NavMesh::from_parts(
            header.version,
            self.areas.records,
            self.areas.index,
            self.ladders.records,
            self.ladders.index,
        ))
    }

    fn read_areas(&mut self, cursor: &mut ByteCursor<'_>) -> Result<()> {
        let (count, capacity) =
            read_count(cursor, "area", self.options.limits.max_areas, MIN_AREA_SIZE)?;
        log::debug!("Area section: {} areas", count);

        self.areas = RecordTable::with_capacity(EntityKind::Area, capacity);
        for _ in 0..count {
            let offset = cursor.position();
            let area = parse_area(cursor, &self.options.limits)?;
            log::trace!(
                "Area {} at offset {} ({} connections)",
                area.id(),
                offset,
                area.connection_count()
            );
            self.areas.insert(area.id(), area, offset)?;
        }
        Ok(())
    }

    fn read_ladders(&mut self, cursor: &mut ByteCursor<'_>) -> Result<()> {
        let (count, capacity) = read_count(
            cursor,
            "ladder",
            self.options.limits.max_ladders,
            MIN_LADDER_SIZE,
        )?;
        log::debug!("Ladder section: {} ladders", count);

        self.ladders = RecordTable::with_capacity(EntityKind::Ladder, capacity);
        for _ in 0..count {
            let offset = cursor.position();
            let ladder = parse_ladder(cursor, &self.options.limits)?;
            log::trace!("Ladder {} at offset {}", ladder.id(), offset);
            self.ladders.insert(ladder.id(), ladder, offset)?;
        }
        Ok(())
    }

    fn check_trailing(&self, cursor: &ByteCursor<'_>) -> Result<()> {
        if cursor.is_empty() {
            return Ok(());
        }

        if self.options.limits.allow_trailing_data {
            log::warn!(
                "Ignoring {} trailing bytes after offset {}",
                cursor.remaining(),
                cursor.position()
            );
            Ok(())
        } else {
            Err(Error::TrailingData {
                offset: cursor.position(),
                remaining: cursor.remaining(),
            })
        }
    }

    fn resolves(&self, table_has: bool, id: u32) -> bool {
        table_has || self.options.format.is_no_connection(id)
    }

    fn resolve_area_connections(&self) -> Result<()> {
        for area in &self.areas.records {
            for connection in area.all_connections() {
                let target = connection.connecting_area_id();
                if !self.resolves(self.areas.contains(target), target) {
                    return Err(Error::unresolved(
                        EntityKind::Area,
                        format!("area {} ({})", area.id(), connection.direction()),
                        target,
                    ));
                }
            }
        }
        Ok(())
    }

    fn resolve_ladder_references(&self) -> Result<()> {
        for ladder in &self.ladders.records {
            for (field, target) in ladder.area_references() {
                if !self.resolves(self.areas.contains(target), target) {
                    return Err(Error::unresolved(
                        EntityKind::Area,
                        format!("ladder {} {}", ladder.id(), field),
                        target,
                    ));
                }
            }

            for end in NavLadderDirType::ALL {
                for connection in ladder.connections(end) {
                    let target = connection.connecting_ladder_id();
                    if !self.resolves(self.ladders.contains(target), target) {
                        return Err(Error::unresolved(
                            EntityKind::Ladder,
                            format!("ladder {} ({})", ladder.id(), end),
                            target,
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{LoadLimits, NavFormat};
    use crate::types::NavDirType;

    fn header(data: &mut Vec<u8>) {
        data.extend(&0xFEED_FACEu32.to_le_bytes());
        data.extend(&1u32.to_le_bytes());
    }

    fn area(data: &mut Vec<u8>, id: u32, north: &[u32]) {
        data.extend(&id.to_le_bytes());
        data.extend(&(north.len() as u32).to_le_bytes());
        for target in north {
            data.extend(&target.to_le_bytes());
        }
        for _ in 1..NavDirType::COUNT {
            data.extend(&0u32.to_le_bytes());
        }
    }

    fn mesh_with_areas(areas: &[(u32, &[u32])]) -> Vec<u8> {
        let mut data = Vec::new();
        header(&mut data);
        data.extend(&(areas.len() as u32).to_le_bytes());
        for (id, north) in areas {
            area(&mut data, *id, north);
        }
        data.extend(&0u32.to_le_bytes());
        data
    }

    #[test]
    fn test_record_table_duplicate() {
        let mut table = RecordTable::with_capacity(EntityKind::Ladder, 2);
        table.insert(4, "first", 8).unwrap();
        let err = table.insert(4, "second", 20).unwrap_err();

        assert!(matches!(
            err,
            Error::DuplicateId {
                kind: EntityKind::Ladder,
                id: 4,
                offset: 20
            }
        ));
        assert_eq!(table.records, vec!["first"]);
    }

    #[test]
    fn test_build_keeps_file_order() {
        let data = mesh_with_areas(&[(30, &[10]), (10, &[20, 30]), (20, &[])]);
        let mesh = GraphBuilder::new(LoadOptions::default())
            .build(&data)
            .unwrap();

        let ids: Vec<u32> = mesh.areas().map(NavArea::id).collect();
        assert_eq!(ids, vec![30, 10, 20]);

        let north = mesh.get_area(10).unwrap().connections(NavDirType::North);
        assert_eq!(north.at(0).unwrap().connecting_area_id(), 20);
        assert_eq!(north.at(1).unwrap().connecting_area_id(), 30);
    }

    #[test]
    fn test_build_sentinel() {
        let data = mesh_with_areas(&[(1, &[0])]);

        let err = GraphBuilder::new(LoadOptions::default())
            .build(&data)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnresolvedReference {
                kind: EntityKind::Area,
                id: 0,
                ..
            }
        ));

        let options = LoadOptions::new(NavFormat::default().with_no_connection_id(0));
        let mesh = GraphBuilder::new(options).build(&data).unwrap();
        assert_eq!(mesh.area_count(), 1);
    }

    #[test]
    fn test_build_trailing_data() {
        let mut data = mesh_with_areas(&[(1, &[])]);
        data.extend(&[0xAA, 0xBB]);

        assert!(GraphBuilder::new(LoadOptions::default()).build(&data).is_ok());

        let strict = LoadOptions::default().with_limits(LoadLimits::strict());
        let err = GraphBuilder::new(strict).build(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::TrailingData {
                remaining: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_build_area_limit() {
        let data = mesh_with_areas(&[(1, &[]), (2, &[])]);
        let limits = LoadLimits {
            max_areas: 1,
            ..LoadLimits::default()
        };

        let err = GraphBuilder::new(LoadOptions::default().with_limits(limits))
            .build(&data)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::LimitExceeded {
                what: "area",
                count: 2,
                limit: 1,
                offset: 8
            }
        ));
    }
}
