/// Errors raised when interpreting raw footer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FooterError {
    #[error("unknown disk type {0}")]
    UnknownDiskType(u32),
    #[error("unknown creator host OS {0:#010x}")]
    UnknownHostOs(u32),
}
