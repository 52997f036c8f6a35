use crate::FooterError;
use core::fmt;

/// Value of the footer's `disk_type` field.
///
/// Values 1, 5 and 6 are reserved (deprecated) and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DiskType {
    None = 0,
    /// Flat image; the footer is the only metadata.
    Fixed = 2,
    /// Sparse image with a dynamic disk header and block allocation table.
    Dynamic = 3,
    /// Sparse image backed by a parent image.
    Differencing = 4,
}

impl DiskType {
    /// Whether the image carries a dynamic disk header at `data_offset`.
    #[must_use]
    pub const fn is_sparse(self) -> bool {
        matches!(self, Self::Dynamic | Self::Differencing)
    }
}

impl TryFrom<u32> for DiskType {
    type Error = FooterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            2 => Ok(Self::Fixed),
            3 => Ok(Self::Dynamic),
            4 => Ok(Self::Differencing),
            other => Err(FooterError::UnknownDiskType(other)),
        }
    }
}

impl From<DiskType> for u32 {
    fn from(value: DiskType) -> Self {
        value as Self
    }
}

impl fmt::Display for DiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Fixed => "fixed",
            Self::Dynamic => "dynamic",
            Self::Differencing => "differencing",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip() {
        for kind in [
            DiskType::None,
            DiskType::Fixed,
            DiskType::Dynamic,
            DiskType::Differencing,
        ] {
            assert_eq!(DiskType::try_from(u32::from(kind)), Ok(kind));
        }
    }

    #[test]
    fn reserved_values_are_rejected() {
        for raw in [1, 5, 6, 0xFFFF_FFFF] {
            assert_eq!(
                DiskType::try_from(raw),
                Err(FooterError::UnknownDiskType(raw))
            );
        }
    }

    #[test]
    fn sparse_kinds() {
        assert!(!DiskType::Fixed.is_sparse());
        assert!(DiskType::Dynamic.is_sparse());
        assert!(DiskType::Differencing.is_sparse());
        assert_eq!(DiskType::Dynamic.to_string(), "dynamic");
    }
}
