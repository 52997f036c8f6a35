use crate::geometry::DiskGeometry;
use crate::host_os::HostOs;
use crate::{DiskType, Features, timestamp};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use vhd_record::{Padding, Record, ValidationError};

/// Size of the footer on disk.
pub const FOOTER_SIZE: usize = 512;

/// Magic marker at the start of every footer.
pub const COOKIE: [u8; 8] = *b"conectix";

/// `data_offset` of fixed disks: there is no further header.
pub const FIXED_DATA_OFFSET: u64 = u64::MAX;

/// Format version 1.0.
pub const FORMAT_VERSION: u32 = 0x0001_0000;

/// Creator application written into new footers.
pub const CREATOR_APPLICATION: [u8; 4] = *b"vpc\0";

/// Creator version written into new footers (5.0).
pub const CREATOR_VERSION: u32 = 0x0005_0000;

/// The 512-byte VHD hard disk footer.
///
/// Fields without a declared default are `None` until the footer is read.
/// The setters generated for every field mark the footer dirty; reading
/// leaves it clean.
#[derive(Debug, Clone, Copy, Record)]
#[record(endian = big, validate = check_cookie)]
pub struct Footer {
    #[record(default = COOKIE)]
    cookie: [u8; 8],
    #[record(default = Features::DEFAULT.into_bits())]
    features: u32,
    #[record(default = FORMAT_VERSION)]
    file_format_version: u32,
    #[record(default = FIXED_DATA_OFFSET)]
    data_offset: u64,
    time_stamp: Option<u32>,
    #[record(default = CREATOR_APPLICATION)]
    creator_application: [u8; 4],
    #[record(default = CREATOR_VERSION)]
    creator_version: u32,
    #[record(default = HostOs::current().tag())]
    creator_host_os: u32,
    original_size: Option<u64>,
    current_size: Option<u64>,
    cylinders: Option<u16>,
    heads: Option<u8>,
    sectors_per_track: Option<u8>,
    disk_type: Option<u32>,
    checksum: Option<u32>,
    unique_id: Option<[u8; 16]>,
    saved_state: Option<u8>,
    #[record(padding)]
    #[allow(dead_code)]
    reserved: Padding<427>,
    #[record(dirty)]
    dirty: bool,
}

const _: () = assert!(<Footer as Record>::SIZE == FOOTER_SIZE);

impl Footer {
    fn check_cookie(&self) -> Result<(), ValidationError> {
        if self.cookie == COOKIE {
            return Ok(());
        }
        log::debug!("footer cookie mismatch: \"{}\"", self.cookie.escape_ascii());
        Err(ValidationError::InvalidCookie {
            expected: COOKIE.to_vec(),
            found: self.cookie.to_vec(),
        })
    }

    /// Typed view of `features`.
    #[must_use]
    pub const fn feature_flags(&self) -> Features {
        Features::from_bits(self.features)
    }

    /// `(major, minor)` halves of `file_format_version`.
    #[must_use]
    pub const fn format_version(&self) -> (u16, u16) {
        let [a, b, c, d] = self.file_format_version.to_be_bytes();
        (u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d]))
    }

    /// Whether `data_offset` holds the fixed-disk sentinel.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.data_offset == FIXED_DATA_OFFSET
    }

    /// Unix seconds of `time_stamp`, if set.
    #[must_use]
    pub fn timestamp_unix(&self) -> Option<i64> {
        self.time_stamp.map(timestamp::to_unix_seconds)
    }

    /// Creation time, if set.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.time_stamp.and_then(timestamp::to_datetime)
    }

    /// Creator host, if the tag is one of the known values.
    #[must_use]
    pub fn creator_host(&self) -> Option<HostOs> {
        HostOs::try_from(self.creator_host_os).ok()
    }

    /// Disk type, if set and known.
    #[must_use]
    pub fn disk_kind(&self) -> Option<DiskType> {
        self.disk_type.and_then(|raw| DiskType::try_from(raw).ok())
    }

    /// CHS geometry, once all three parts are set.
    #[must_use]
    pub fn geometry(&self) -> Option<DiskGeometry> {
        Some(DiskGeometry {
            cylinders: self.cylinders?,
            heads: self.heads?,
            sectors_per_track: self.sectors_per_track?,
        })
    }

    /// Set all three geometry fields.
    pub const fn set_geometry(&mut self, geometry: DiskGeometry) -> &mut Self {
        self.set_cylinders(Some(geometry.cylinders))
            .set_heads(Some(geometry.heads))
            .set_sectors_per_track(Some(geometry.sectors_per_track))
    }

    /// `unique_id` as a UUID, bytes taken in stored order.
    #[must_use]
    pub fn unique_id_uuid(&self) -> Option<Uuid> {
        self.unique_id.map(Uuid::from_bytes)
    }

    /// Whether the image was saved with a suspended VM state.
    #[must_use]
    pub fn has_saved_state(&self) -> bool {
        self.saved_state.is_some_and(|s| s != 0)
    }
}
