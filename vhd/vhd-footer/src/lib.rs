//! # VHD Hard Disk Footer
//!
//! Every VHD image ends with a 512-byte footer; dynamic and differencing
//! images also keep a copy at offset zero. The footer identifies the file
//! (`conectix` cookie), records who created it and when, and describes the
//! virtual disk: its size, CHS geometry and type.
//!
//! ## Layout
//!
//! All integers are big-endian.
//!
//! ```text
//! offset  size  field
//! ------  ----  ---------------------------------------------
//!      0     8  cookie               "conectix"
//!      8     4  features             bit 0 temporary, bit 1 reserved (set)
//!     12     4  file_format_version  0x0001_0000
//!     16     8  data_offset          all ones for fixed disks
//!     24     4  time_stamp           seconds since the VHD epoch
//!     28     4  creator_application  e.g. "vpc ", "win "
//!     32     4  creator_version
//!     36     4  creator_host_os      "Wi2k" or "Mac "
//!     40     8  original_size
//!     48     8  current_size
//!     56     2  cylinders
//!     58     1  heads
//!     59     1  sectors_per_track
//!     60     4  disk_type            2 fixed, 3 dynamic, 4 differencing
//!     64     4  checksum             decoded, not verified
//!     68    16  unique_id
//!     84     1  saved_state
//!     85   427  reserved
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::{Seek, SeekFrom};
//! use vhd_footer::{Footer, FOOTER_SIZE, Record};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = File::open("disk.vhd")?;
//! file.seek(SeekFrom::End(-(FOOTER_SIZE as i64)))?;
//! let footer = Footer::read(&mut file)?;
//! println!("{:?} disk, {} bytes", footer.disk_kind(), footer.current_size().unwrap_or(0));
//! # Ok(())
//! # }
//! ```

mod disk_type;
mod error;
mod features;
mod footer;
mod geometry;
mod host_os;
pub mod timestamp;

pub use disk_type::DiskType;
pub use error::FooterError;
pub use features::Features;
pub use footer::{
    COOKIE, CREATOR_APPLICATION, CREATOR_VERSION, FIXED_DATA_OFFSET, FOOTER_SIZE, FORMAT_VERSION,
    Footer,
};
pub use geometry::DiskGeometry;
pub use host_os::HostOs;
pub use vhd_record::{Record, RecordError, ValidationError};
