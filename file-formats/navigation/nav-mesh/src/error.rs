//! Error types for navigation mesh loading

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for navigation mesh operations
pub type Result<T> = std::result::Result<T, Error>;

/// The two independent ID spaces of a navigation mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Walkable area
    Area,
    /// Ladder connector
    Ladder,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Area => write!(f, "area"),
            EntityKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// Errors that can occur while loading or querying a navigation mesh
#[derive(Error, Debug)]
pub enum Error {
    /// The buffer ended in the middle of a field
    #[error("Truncated data at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedData {
        /// Offset of the field that could not be read
        offset: usize,
        /// Width of the field
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },

    /// Header magic does not match the configured format
    #[error("Invalid magic value: expected 0x{expected:08X}, found 0x{found:08X}")]
    BadMagic {
        /// Configured magic
        expected: u32,
        /// Magic read from the buffer
        found: u32,
    },

    /// Header version is outside the configured range
    #[error("Unsupported navigation mesh version {version} (supported: {min}..={max})")]
    UnsupportedVersion {
        /// Version read from the buffer
        version: u32,
        /// Lowest accepted version
        min: u32,
        /// Highest accepted version
        max: u32,
    },

    /// A direction field holds a value outside its enumeration
    #[error("Invalid direction value {value} at offset {offset}")]
    InvalidDirection {
        /// Raw value
        value: u32,
        /// Offset of the field
        offset: usize,
    },

    /// Two records of the same kind share an ID
    #[error("Duplicate {kind} ID {id} at offset {offset}")]
    DuplicateId {
        /// ID space the collision happened in
        kind: EntityKind,
        /// Repeated ID
        id: u32,
        /// Offset of the second record
        offset: usize,
    },

    /// A connection or cross-reference names an ID that was never defined
    #[error("Unresolved {kind} reference {id} from {from}")]
    UnresolvedReference {
        /// ID space of the missing target
        kind: EntityKind,
        /// Description of the referencing entity and field
        from: String,
        /// Missing ID
        id: u32,
    },

    /// Lookup of an ID that is not part of the mesh
    #[error("{kind} {id} not found")]
    NotFound {
        /// ID space that was searched
        kind: EntityKind,
        /// Requested ID
        id: u32,
    },

    /// Container access with a bad index
    #[error("Index {index} out of range for list of size {size}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// List size at the time of the call
        size: usize,
    },

    /// A declared count exceeds the configured load limits
    #[error("{what} count {count} at offset {offset} exceeds limit {limit}")]
    LimitExceeded {
        /// What was being counted
        what: &'static str,
        /// Declared count
        count: u32,
        /// Configured maximum
        limit: u32,
        /// Offset of the count field
        offset: usize,
    },

    /// Bytes remain after the ladder section
    #[error("{remaining} trailing bytes after offset {offset}")]
    TrailingData {
        /// End of the parsed data
        offset: usize,
        /// Unparsed byte count
        remaining: usize,
    },

    /// I/O error while reading the asset
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Byte offset the error refers to, if the variant carries one
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::TruncatedData { offset, .. }
            | Error::InvalidDirection { offset, .. }
            | Error::DuplicateId { offset, .. }
            | Error::LimitExceeded { offset, .. }
            | Error::TrailingData { offset, .. } => Some(*offset),
            // Header fields sit at fixed positions
            Error::BadMagic { .. } => Some(0),
            Error::UnsupportedVersion { .. } => Some(4),
            Error::UnresolvedReference { .. }
            | Error::NotFound { .. }
            | Error::IndexOutOfRange { .. }
            | Error::Io(_) => None,
        }
    }

    /// Create an unresolved reference error
    pub(crate) fn unresolved(kind: EntityKind, from: impl Into<String>, id: u32) -> Self {
        Error::UnresolvedReference {
            kind,
            from: from.into(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::BadMagic {
            expected: 0xFEED_FACE,
            found: 0x1234,
        };
        assert_eq!(
            format!("{}", error),
            "Invalid magic value: expected 0xFEEDFACE, found 0x00001234"
        );

        let error = Error::DuplicateId {
            kind: EntityKind::Area,
            id: 5,
            offset: 40,
        };
        assert_eq!(format!("{}", error), "Duplicate area ID 5 at offset 40");

        let error = Error::unresolved(EntityKind::Ladder, "ladder 2 (Top)", 7);
        assert_eq!(
            format!("{}", error),
            "Unresolved ladder reference 7 from ladder 2 (Top)"
        );
    }

    #[test]
    fn test_error_offset() {
        let error = Error::TruncatedData {
            offset: 12,
            needed: 4,
            available: 1,
        };
        assert_eq!(error.offset(), Some(12));

        let error = Error::NotFound {
            kind: EntityKind::Area,
            id: 2,
        };
        assert_eq!(error.offset(), None);
    }
}
