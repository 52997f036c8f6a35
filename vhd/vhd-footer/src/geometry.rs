use core::fmt;

/// Bytes per sector assumed by the CHS geometry.
pub const SECTOR_SIZE: u64 = 512;

/// Cylinder/head/sector geometry stored in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiskGeometry {
    pub cylinders: u16,
    pub heads: u8,
    pub sectors_per_track: u8,
}

impl DiskGeometry {
    /// Sectors addressable through CHS.
    #[must_use]
    pub fn total_sectors(self) -> u64 {
        u64::from(self.cylinders) * u64::from(self.heads) * u64::from(self.sectors_per_track)
    }

    /// CHS capacity in bytes; may be smaller than the disk's current size.
    #[must_use]
    pub fn capacity(self) -> u64 {
        self.total_sectors() * SECTOR_SIZE
    }
}

impl fmt::Display for DiskGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.cylinders, self.heads, self.sectors_per_track
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_from_chs() {
        let g = DiskGeometry {
            cylinders: 150,
            heads: 4,
            sectors_per_track: 17,
        };
        assert_eq!(g.total_sectors(), 10_200);
        assert_eq!(g.capacity(), 10_200 * 512);
        assert_eq!(g.to_string(), "150/4/17");
    }

    #[test]
    fn max_geometry_does_not_overflow() {
        let g = DiskGeometry {
            cylinders: u16::MAX,
            heads: 16,
            sectors_per_track: 255,
        };
        assert_eq!(g.total_sectors(), 65_535 * 16 * 255);
    }
}
