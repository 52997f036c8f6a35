use crate::FooterError;
use core::fmt;

/// Value of the footer's `creator_host_os` field: a four-character tag
/// stored as a big-endian integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HostOs {
    /// `Wi2k`
    Windows = 0x5769_326B,
    /// `Mac `
    Macintosh = 0x4D61_6320,
}

impl HostOs {
    /// Tag written by images created on this platform.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Macintosh
        }
    }

    /// Raw field value.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// The four ASCII characters of the tag.
    #[must_use]
    pub const fn signature(self) -> [u8; 4] {
        self.tag().to_be_bytes()
    }
}

impl TryFrom<u32> for HostOs {
    type Error = FooterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0x5769_326B => Ok(Self::Windows),
            0x4D61_6320 => Ok(Self::Macintosh),
            other => Err(FooterError::UnknownHostOs(other)),
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature().escape_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_spell_their_signature() {
        assert_eq!(&HostOs::Windows.signature(), b"Wi2k");
        assert_eq!(&HostOs::Macintosh.signature(), b"Mac ");
        assert_eq!(HostOs::Windows.to_string(), "Wi2k");
    }

    #[test]
    fn parse_tags() {
        assert_eq!(HostOs::try_from(0x5769_326B), Ok(HostOs::Windows));
        assert_eq!(
            HostOs::try_from(0x4C6E_7578),
            Err(FooterError::UnknownHostOs(0x4C6E_7578))
        );
    }

    #[test]
    fn current_follows_target() {
        let expected = if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Macintosh
        };
        assert_eq!(HostOs::current(), expected);
    }
}
