use std::io;

use thiserror::Error;

use crate::policy::DialogVariant;
use crate::validate::PolicyViolation;

/// The persisted bytes do not describe a policy this release can read.
///
/// Never transient: the stored request should be treated as unusable.
#[derive(Debug, Error)]
pub enum CorruptEncoding {
    /// The byte source ended before every field of the decoded variant was read.
    #[error("persisted policy truncated")]
    Truncated,
    /// The leading version byte is not one this release writes.
    #[error("unsupported persisted policy format version {0}")]
    UnsupportedVersion(u8),
    /// The variant tag is not one of the three known variants.
    #[error("unknown policy variant tag {0}")]
    UnknownVariant(u8),
    /// The flag word sets bits the decoded variant does not define.
    #[error("flag bits 0x{bits:x} are not defined for {variant} policies")]
    UnknownFlags {
        /// Variant whose flag word was being decoded.
        variant: DialogVariant,
        /// The offending bits.
        bits: u32,
    },
    /// An integer field could not be decoded.
    #[error("malformed integer field: {0}")]
    MalformedInteger(String),
    /// The byte source failed for a reason other than running out of data.
    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for CorruptEncoding {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Self::Truncated,
            io::ErrorKind::InvalidData => Self::MalformedInteger(err.to_string()),
            _ => Self::Io(err),
        }
    }
}

impl From<CorruptEncoding> for io::Error {
    fn from(err: CorruptEncoding) -> Self {
        match err {
            CorruptEncoding::Io(inner) => inner,
            CorruptEncoding::Truncated => {
                io::Error::new(io::ErrorKind::UnexpectedEof, CorruptEncoding::Truncated)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Either failure this crate can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Persisted bytes could not be decoded.
    #[error(transparent)]
    CorruptEncoding(#[from] CorruptEncoding),
    /// A candidate dialog did not satisfy the policy.
    #[error(transparent)]
    PolicyViolation(#[from] PolicyViolation),
}
