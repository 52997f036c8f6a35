//! # Declarative Binary Records
//!
//! This crate describes fixed-layout binary records once, as an ordered
//! table of field descriptors, and derives everything else from that table:
//! the byte layout and total size, decoding from a byte source, per-field
//! access, change tracking and equality.
//!
//! ## Overview
//!
//! A record type implements [`Record`], usually through
//! `#[derive(Record)]` (feature `derive`, enabled by default):
//!
//! ```text
//! struct declaration ──derive──▶ FieldDescriptor table (const)
//!                                      │
//!                                      ├─▶ SIZE / Layout (offsets)
//!                                      ├─▶ NAMES (included fields only)
//!                                      └─▶ decode_fields (positional)
//! ```
//!
//! ## Key Components
//!
//! * [`FieldDescriptor`]: name, [`FieldKind`], [`FieldDefault`] and the
//!   inclusion flag of one field.
//! * [`FieldType`]: maps a Rust type (`u8`..`u64`, `[u8; N]`, `Option<T>`,
//!   [`Padding<N>`]) to its wire kind and decoder.
//! * [`Decoder`]: bounds-checked cursor over a buffered record.
//! * [`FieldValue`] / [`FieldMap`]: dynamically typed view of the current
//!   values, keyed by field name.
//! * [`Layout`]: per-field byte offsets computed from the descriptor table.
//!
//! ## Change Tracking
//!
//! Every record carries a dirty flag. It is `false` after `Default` and
//! after a successful [`Record::read`], and `true` after any generated
//! `set_*`/`with_*` setter ran.
//!
//! ## Errors
//!
//! Decoding fails with [`RecordError::TruncatedInput`] when the source ends
//! early, with [`RecordError::Validation`] when the record's validation hook
//! rejects the content, and [`Record::write`] always fails with
//! [`RecordError::Unsupported`].

// Lets the derive's `::vhd_record` paths resolve inside this crate's own tests.
extern crate self as vhd_record;

mod decoder;
mod error;
mod field;
mod layout;
mod record;
mod value;

pub use decoder::Decoder;
pub use error::{RecordError, Result, ValidationError};
pub use field::{FieldDefault, FieldDescriptor, FieldKind, FieldType, Padding};
pub use layout::{Endianness, FieldSlot, Layout, total_size};
pub use record::Record;
pub use value::{FieldMap, FieldValue};

#[cfg(feature = "derive")]
pub use vhd_record_derive::Record;
