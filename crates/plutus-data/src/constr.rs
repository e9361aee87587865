//! Constructor tag mapping.
//!
//! Plutus data encodes a constructor's logical index as a CBOR tag drawn from
//! one of two bands: the compact band `121..=127` for indices `0..=6`, and the
//! extended band `1280..=2673` for indices `7..=1400`.

use thiserror::Error;

/// Tag used for an untagged (plain) list. Sits outside both constructor bands.
pub const PLAIN_ARRAY_TAG: u64 = 0;

/// First tag of the compact band (logical index 0).
pub const COMPACT_TAG_BASE: u64 = 121;
/// Highest logical index encodable in the compact band.
pub const COMPACT_INDEX_MAX: i64 = 6;

/// First tag of the extended band (logical index 7).
pub const EXTENDED_TAG_BASE: u64 = 1280;
/// Highest logical index encodable in the extended band.
pub const EXTENDED_INDEX_MAX: i64 = 1400;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstrError {
    #[error("constructor index {index} is outside the supported range 0..=1400")]
    UnsupportedConstructorRange { index: i64 },
    #[error("tag {tag} is neither a constructor tag nor the plain-array marker")]
    UnknownTag { tag: u64 },
}

/// Maps a logical constructor index to its wire tag.
///
/// `0..=6` map to `121..=127`, `7..=1400` map to `1280..=2673`. Anything else
/// fails with [`ConstrError::UnsupportedConstructorRange`].
pub fn map_constructor_index(index: i64) -> Result<u64, ConstrError> {
    match index {
        0..=COMPACT_INDEX_MAX => Ok(COMPACT_TAG_BASE + index as u64),
        7..=EXTENDED_INDEX_MAX => Ok(EXTENDED_TAG_BASE + (index - 7) as u64),
        _ => Err(ConstrError::UnsupportedConstructorRange { index }),
    }
}

/// Inverse of [`map_constructor_index`]. Returns `None` for tags outside both
/// bands, including [`PLAIN_ARRAY_TAG`].
pub fn constructor_index_of(tag: u64) -> Option<u64> {
    const COMPACT_TAG_MAX: u64 = COMPACT_TAG_BASE + COMPACT_INDEX_MAX as u64;
    const EXTENDED_TAG_MAX: u64 = EXTENDED_TAG_BASE + (EXTENDED_INDEX_MAX - 7) as u64;
    match tag {
        COMPACT_TAG_BASE..=COMPACT_TAG_MAX => Some(tag - COMPACT_TAG_BASE),
        EXTENDED_TAG_BASE..=EXTENDED_TAG_MAX => Some(tag - EXTENDED_TAG_BASE + 7),
        _ => None,
    }
}

/// Returns `true` if `tag` belongs to either constructor band.
pub fn is_constructor_tag(tag: u64) -> bool {
    constructor_index_of(tag).is_some()
}
