//! Record decoding for navigation mesh assets
//!
//! Each function decodes exactly one structure at the cursor position and
//! leaves the cursor just past it. Cursor errors are returned unchanged.

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::format::{LoadLimits, NavFormat};
use crate::list::OrderedList;
use crate::types::{
    NavArea, NavConnection, NavDirType, NavLadder, NavLadderConnection, NavLadderDirType,
};

/// Size of the file header in bytes
pub const HEADER_SIZE: usize = 8;

/// Smallest possible area record: ID plus four empty lists
pub const MIN_AREA_SIZE: usize = 4 + NavDirType::COUNT * 4;

/// Smallest possible ladder record: fixed fields plus two empty lists
pub const MIN_LADDER_SIZE: usize = 4 + 4 + 4 + 12 + 12 + 4 + 5 * 4 + NavLadderDirType::COUNT * 4;

/// Decoded file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHeader {
    /// Header magic
    pub magic: u32,
    /// Format version
    pub version: u32,
}

/// Read and check the file header against `format`
pub fn parse_header(cursor: &mut ByteCursor<'_>, format: &NavFormat) -> Result<NavHeader> {
    let magic = cursor.read_u32()?;
    if magic != format.magic {
        return Err(Error::BadMagic {
            expected: format.magic,
            found: magic,
        });
    }

    let version = cursor.read_u32()?;
    if !format.supports_version(version) {
        return Err(Error::UnsupportedVersion {
            version,
            min: *format.versions.start(),
            max: *format.versions.end(),
        });
    }

    Ok(NavHeader { magic, version })
}

/// Read a record count and check it against `limit`
///
/// `min_record_size` bounds the count by what the rest of the buffer could
/// possibly hold; the returned capacity hint never exceeds that bound.
pub(crate) fn read_count(
    cursor: &mut ByteCursor<'_>,
    what: &'static str,
    limit: u32,
    min_record_size: usize,
) -> Result<(u32, usize)> {
    let offset = cursor.position();
    let count = cursor.read_u32()?;
    if count > limit {
        return Err(Error::LimitExceeded {
            what,
            count,
            limit,
            offset,
        });
    }

    let capacity = (count as usize).min(cursor.remaining() / min_record_size.max(1));
    Ok((count, capacity))
}

/// Decode one area record
///
/// Layout: `id`, then for North, East, South and West a `count` followed by
/// `count` connecting area IDs. The direction of each connection is the
/// list it was stored in.
pub fn parse_area(cursor: &mut ByteCursor<'_>, limits: &LoadLimits) -> Result<NavArea> {
    let id = cursor.read_u32()?;
    let mut area = NavArea::new(id);

    for direction in NavDirType::ALL {
        let (count, capacity) =
            read_count(cursor, "area connection", limits.max_connections_per_list, 4)?;
        let list = area.connections_mut(direction);
        *list = OrderedList::with_capacity(capacity);
        for _ in 0..count {
            let connecting_area_id = cursor.read_u32()?;
            list.append(NavConnection::new(connecting_area_id, direction));
        }
    }

    Ok(area)
}

/// Decode one ladder record
///
/// Layout: `id`, `width`, `length`, top point, bottom point, `direction`,
/// the four top area IDs (forward, left, right, behind), the bottom area ID,
/// then the Top and Bottom ladder connection lists.
pub fn parse_ladder(cursor: &mut ByteCursor<'_>, limits: &LoadLimits) -> Result<NavLadder> {
    let id = cursor.read_u32()?;
    let width = cursor.read_f32()?;
    let length = cursor.read_f32()?;
    let top = cursor.read_vec3()?;
    let bottom = cursor.read_vec3()?;

    let direction_offset = cursor.position();
    let raw_direction = cursor.read_u32()?;
    let direction = NavDirType::from_raw(raw_direction).ok_or(Error::InvalidDirection {
        value: raw_direction,
        offset: direction_offset,
    })?;

    let top_forward_area_id = cursor.read_u32()?;
    let top_left_area_id = cursor.read_u32()?;
    let top_right_area_id = cursor.read_u32()?;
    let top_behind_area_id = cursor.read_u32()?;
    let bottom_area_id = cursor.read_u32()?;

    let mut connections: [OrderedList<NavLadderConnection>; NavLadderDirType::COUNT] =
        Default::default();
    for end in NavLadderDirType::ALL {
        let (count, capacity) =
            read_count(cursor, "ladder connection", limits.max_connections_per_list, 4)?;
        let list = &mut connections[end.index()];
        *list = OrderedList::with_capacity(capacity);
        for _ in 0..count {
            let connecting_ladder_id = cursor.read_u32()?;
            list.append(NavLadderConnection::new(connecting_ladder_id, end));
        }
    }

    Ok(NavLadder {
        id,
        width,
        length,
        top,
        bottom,
        direction,
        top_forward_area_id,
        top_left_area_id,
        top_right_area_id,
        top_behind_area_id,
        bottom_area_id,
        connections,
    })
}
