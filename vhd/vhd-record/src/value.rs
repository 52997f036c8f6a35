use core::fmt;

/// Dynamically typed value of one record field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Not set yet; the field is computed at read time.
    #[default]
    Unset,
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Integer fields widened to `u64`.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::U8(v) => Some(u64::from(v)),
            Self::U16(v) => Some(u64::from(v)),
            Self::U32(v) => Some(u64::from(v)),
            Self::U64(v) => Some(v),
            Self::Unset | Self::Bytes(_) => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

/// Integers print as hex, byte strings as escaped ASCII when printable
/// and as hex otherwise.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("<unset>"),
            Self::U8(v) => write!(f, "{v:#04x}"),
            Self::U16(v) => write!(f, "{v:#06x}"),
            Self::U32(v) => write!(f, "{v:#010x}"),
            Self::U64(v) => write!(f, "{v:#018x}"),
            Self::Bytes(b) if b.iter().all(|c| c.is_ascii_graphic() || *c == b' ' || *c == 0) => {
                write!(f, "\"{}\"", b.escape_ascii())
            }
            Self::Bytes(b) => {
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered mapping from field name to current value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(&'static str, FieldValue)>,
}

impl FieldMap {
    /// Build a map from entries already in declaration order.
    #[must_use]
    pub const fn from_entries(entries: Vec<(&'static str, FieldValue)>) -> Self {
        Self { entries }
    }

    /// Value of the field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find_map(|(n, v)| (*n == name).then_some(v))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for FieldMap {
    type Item = (&'static str, FieldValue);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.entries {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
