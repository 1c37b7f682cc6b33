//! CIDR block value type.

use super::ipv4;
use crate::error::AddrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Network address plus prefix length, written `A.B.C.D/N`.
///
/// The address is kept as given; host bits are not cleared. Fields are only
/// set through [`Cidr::new`] and friends, so `len` never exceeds 32.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    len: u8,
}

impl Cidr {
    /// Create a new [`Cidr`] from text such as `"10.0.0.0/24"`.
    pub fn new(addr_cidr: &str) -> Result<Cidr, AddrError> {
        let addr_cidr = addr_cidr.trim();
        let Some((addr, len)) = addr_cidr.split_once('/') else {
            return Err(AddrError::InvalidCidr(addr_cidr.to_string()));
        };
        let addr = ipv4::parse_address(addr)?;
        let len = ipv4::parse_prefix_length(len, addr_cidr)?;
        Ok(Cidr {
            addr,
            len: len as u8,
        })
    }

    /// Build from an address and a dotted-decimal mask.
    pub fn from_mask(addr: &str, mask: &str) -> Result<Cidr, AddrError> {
        Cidr::new(&ipv4::calculate_cidr(addr, mask)?)
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// Prefix length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Mask for this prefix length in dotted-decimal form.
    pub fn mask(&self) -> String {
        // len <= 32, checked in new()
        let mask = ipv4::get_cidr_mask(u32::from(self.len)).unwrap_or(u32::MAX);
        Ipv4Addr::from(mask).to_string()
    }

    /// The leading `len` bits of the address.
    pub fn prefix_bits(&self) -> Result<String, AddrError> {
        ipv4::cidr_to_binary(&self.to_string())
    }

    /// Same membership rule as [`ipv4::is_address_in_range`], so a /0 block
    /// contains nothing.
    pub fn contains(&self, addr: &str) -> Result<bool, AddrError> {
        ipv4::is_address_in_range(addr, &self.addr.to_string(), &self.mask())
    }

    /// One bit wider, e.g. `10.0.1.0/24` becomes `10.0.1.0/23`.
    pub fn widen(&self) -> Result<Cidr, AddrError> {
        let mask = ipv4::decrement_mask(&self.mask())?;
        Ok(Cidr {
            addr: self.addr,
            len: ipv4::cidr_prefix_length(&mask)? as u8,
        })
    }
}

impl FromStr for Cidr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::new(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}
