//! Asset format configuration and load limits
//!
//! The header constants and the "no connection" ID differ between the
//! engines that produce navigation meshes, so they are supplied by the
//! caller instead of being baked into the parser.

use std::ops::RangeInclusive;

/// Magic value used by [`NavFormat::default`]
pub const DEFAULT_MAGIC: u32 = 0xFEED_FACE;

/// Version accepted by [`NavFormat::default`]
pub const DEFAULT_VERSION: u32 = 1;

/// Header constants and ID conventions of a navigation mesh format
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavFormat {
    /// Expected header magic
    pub magic: u32,
    /// Accepted header versions
    pub versions: RangeInclusive<u32>,
    /// ID meaning "no connection" in area and ladder references
    ///
    /// `None` means every referenced ID must exist.
    pub no_connection_id: Option<u32>,
}

impl Default for NavFormat {
    fn default() -> Self {
        Self {
            magic: DEFAULT_MAGIC,
            versions: DEFAULT_VERSION..=DEFAULT_VERSION,
            no_connection_id: None,
        }
    }
}

impl NavFormat {
    /// Use a different header magic
    pub fn with_magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    /// Accept a different range of header versions
    pub fn with_versions(mut self, versions: RangeInclusive<u32>) -> Self {
        self.versions = versions;
        self
    }

    /// Treat `id` as "no connection" when resolving references
    pub fn with_no_connection_id(mut self, id: u32) -> Self {
        self.no_connection_id = Some(id);
        self
    }

    /// Check if `version` is accepted
    pub fn supports_version(&self, version: u32) -> bool {
        self.versions.contains(&version)
    }

    /// Check if `id` is the configured "no connection" value
    pub fn is_no_connection(&self, id: u32) -> bool {
        self.no_connection_id == Some(id)
    }
}

/// Upper bounds on the counts declared inside an asset
///
/// Counts are checked before anything is allocated, so a corrupt or hostile
/// file cannot request an arbitrary amount of memory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadLimits {
    /// Maximum number of areas (default: 1M)
    pub max_areas: u32,
    /// Maximum number of ladders (default: 100k)
    pub max_ladders: u32,
    /// Maximum entries in a single connection list (default: 4096)
    pub max_connections_per_list: u32,
    /// Ignore bytes after the ladder section instead of failing (default: true)
    pub allow_trailing_data: bool,
}

impl Default for LoadLimits {
    fn default() -> Self {
        Self {
            max_areas: 1_000_000,
            max_ladders: 100_000,
            max_connections_per_list: 4_096,
            allow_trailing_data: true,
        }
    }
}

impl LoadLimits {
    /// Limits that reject any trailing bytes
    pub fn strict() -> Self {
        Self {
            allow_trailing_data: false,
            ..Self::default()
        }
    }
}

/// Everything the loader needs besides the bytes themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadOptions {
    /// Header and ID conventions
    pub format: NavFormat,
    /// Count limits
    pub limits: LoadLimits,
}

impl LoadOptions {
    /// Options for `format` with default limits
    pub fn new(format: NavFormat) -> Self {
        Self {
            format,
            limits: LoadLimits::default(),
        }
    }

    /// Replace the limits
    pub fn with_limits(mut self, limits: LoadLimits) -> Self {
        self.limits = limits;
        self
    }
}
