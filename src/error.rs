//! Error types for address arithmetic.

use thiserror::Error;

/// Coarse classification of an [`AddrError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text could not be read as an address, mask, binary string or CIDR.
    InvalidInput,
    /// The value parsed, but breaks a precondition of the operation.
    InvalidArgument,
}

/// Errors returned by the functions in [`crate::models`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrError {
    #[error("invalid address {addr:?}: expected 4 dot-separated octets, found {found}")]
    OctetCount { addr: String, found: usize },

    #[error("invalid address {addr:?}: octet {octet:?} is not a number")]
    NonNumericOctet { addr: String, octet: String },

    #[error("invalid address {addr:?}: octet {octet} is outside 0-255")]
    OctetOutOfRange { addr: String, octet: String },

    #[error("invalid binary string {0:?}: length must be a positive multiple of 8")]
    BinaryLength(String),

    #[error("invalid binary string {0:?}: only '0' and '1' are allowed")]
    BinaryDigit(String),

    #[error("invalid CIDR {0:?}: expected A.B.C.D/N")]
    InvalidCidr(String),

    #[error("address {0:?} has no '.' separator")]
    MissingSeparator(String),

    #[error("prefix length {0} is longer than 32 bits")]
    PrefixTooLong(u32),

    #[error("cannot widen mask {0:?}: prefix length is already 0")]
    ZeroPrefix(String),

    #[error("mask {0:?} is not a contiguous run of leading 1-bits")]
    NonContiguousMask(String),
}

impl AddrError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddrError::OctetCount { .. }
            | AddrError::NonNumericOctet { .. }
            | AddrError::OctetOutOfRange { .. }
            | AddrError::BinaryLength(_)
            | AddrError::BinaryDigit(_)
            | AddrError::InvalidCidr(_)
            | AddrError::MissingSeparator(_) => ErrorKind::InvalidInput,
            AddrError::PrefixTooLong(_)
            | AddrError::ZeroPrefix(_)
            | AddrError::NonContiguousMask(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err = AddrError::OctetCount {
            addr: "1.2.3".to_string(),
            found: 3,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            AddrError::ZeroPrefix("0.0.0.0".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(AddrError::PrefixTooLong(33).kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_display() {
        let err = AddrError::OctetOutOfRange {
            addr: "1.2.3.256".to_string(),
            octet: "256".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid address \"1.2.3.256\": octet 256 is outside 0-255"
        );
        assert_eq!(
            AddrError::ZeroPrefix("0.0.0.0".to_string()).to_string(),
            "cannot widen mask \"0.0.0.0\": prefix length is already 0"
        );
    }
}
