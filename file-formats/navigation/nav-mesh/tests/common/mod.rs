//! Shared helpers for building navigation mesh buffers in tests

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use nav_mesh::format::{DEFAULT_MAGIC, DEFAULT_VERSION};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Area description for [`MeshWriter`]: ID and one target list per direction
#[derive(Debug, Clone, Default)]
pub struct AreaSpec {
    pub id: u32,
    pub connections: [Vec<u32>; 4],
}

impl AreaSpec {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn north(mut self, target: u32) -> Self {
        self.connections[0].push(target);
        self
    }

    pub fn east(mut self, target: u32) -> Self {
        self.connections[1].push(target);
        self
    }

    pub fn south(mut self, target: u32) -> Self {
        self.connections[2].push(target);
        self
    }

    pub fn west(mut self, target: u32) -> Self {
        self.connections[3].push(target);
        self
    }
}

/// Ladder description for [`MeshWriter`]
#[derive(Debug, Clone)]
pub struct LadderSpec {
    pub id: u32,
    pub width: f32,
    pub length: f32,
    pub top: [f32; 3],
    pub bottom: [f32; 3],
    pub direction: u32,
    /// Forward, left, right, behind
    pub top_areas: [u32; 4],
    pub bottom_area: u32,
    pub top_ladders: Vec<u32>,
    pub bottom_ladders: Vec<u32>,
}

impl LadderSpec {
    /// A ladder whose every area field points at `area`
    pub fn new(id: u32, area: u32) -> Self {
        Self {
            id,
            width: 32.0,
            length: 128.0,
            top: [0.0, 0.0, 128.0],
            bottom: [0.0, 0.0, 0.0],
            direction: 0,
            top_areas: [area; 4],
            bottom_area: area,
            top_ladders: Vec::new(),
            bottom_ladders: Vec::new(),
        }
    }
}

/// Writes navigation mesh buffers field by field
#[derive(Debug, Clone)]
pub struct MeshWriter {
    pub magic: u32,
    pub version: u32,
    pub areas: Vec<AreaSpec>,
    pub ladders: Vec<LadderSpec>,
}

impl Default for MeshWriter {
    fn default() -> Self {
        Self {
            magic: DEFAULT_MAGIC,
            version: DEFAULT_VERSION,
            areas: Vec::new(),
            ladders: Vec::new(),
        }
    }
}

impl MeshWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(mut self, area: AreaSpec) -> Self {
        self.areas.push(area);
        self
    }

    pub fn ladder(mut self, ladder: LadderSpec) -> Self {
        self.ladders.push(ladder);
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writes into a Vec cannot fail
        buf.write_u32::<LittleEndian>(self.magic).unwrap();
        buf.write_u32::<LittleEndian>(self.version).unwrap();

        buf.write_u32::<LittleEndian>(self.areas.len() as u32).unwrap();
        for area in &self.areas {
            buf.write_u32::<LittleEndian>(area.id).unwrap();
            for list in &area.connections {
                write_list(&mut buf, list);
            }
        }

        buf.write_u32::<LittleEndian>(self.ladders.len() as u32)
            .unwrap();
        for ladder in &self.ladders {
            buf.write_u32::<LittleEndian>(ladder.id).unwrap();
            buf.write_f32::<LittleEndian>(ladder.width).unwrap();
            buf.write_f32::<LittleEndian>(ladder.length).unwrap();
            for v in ladder.top.iter().chain(&ladder.bottom) {
                buf.write_f32::<LittleEndian>(*v).unwrap();
            }
            buf.write_u32::<LittleEndian>(ladder.direction).unwrap();
            for id in ladder.top_areas {
                buf.write_u32::<LittleEndian>(id).unwrap();
            }
            buf.write_u32::<LittleEndian>(ladder.bottom_area).unwrap();
            write_list(&mut buf, &ladder.top_ladders);
            write_list(&mut buf, &ladder.bottom_ladders);
        }

        buf
    }
}

fn write_list(buf: &mut Vec<u8>, ids: &[u32]) {
    buf.write_u32::<LittleEndian>(ids.len() as u32).unwrap();
    for id in ids {
        buf.write_u32::<LittleEndian>(*id).unwrap();
    }
}
