//! Dotted-decimal IPv4 arithmetic.
//!
//! Addresses and masks are passed around as `A.B.C.D` text and converted to a
//! 32 character binary string (most significant octet first) where prefix
//! comparisons are needed.

use crate::error::AddrError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u32 = 32;

lazy_static! {
    static ref RE_OCTET: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref RE_BINARY: Regex = Regex::new(r"^[01]*$").expect("Invalid Regex?");
}

/// Parse `A.B.C.D` into an [`Ipv4Addr`], checking octet count, digits and range.
pub fn parse_address(addr: &str) -> Result<Ipv4Addr, AddrError> {
    let parts: Vec<&str> = addr.split('.').collect();
    if parts.len() != 4 {
        return Err(AddrError::OctetCount {
            addr: addr.to_string(),
            found: parts.len(),
        });
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        if !RE_OCTET.is_match(part) {
            return Err(AddrError::NonNumericOctet {
                addr: addr.to_string(),
                octet: part.to_string(),
            });
        }
        // digits only, so the parse can only fail on overflow
        *octet = part.parse().map_err(|_| AddrError::OctetOutOfRange {
            addr: addr.to_string(),
            octet: part.to_string(),
        })?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Convert a dotted-decimal address to its 32 character binary form.
///
/// # Examples
/// ```
/// use router_addr::models::address_to_binary;
/// assert_eq!(
///     address_to_binary("192.168.1.0").unwrap(),
///     "11000000101010000000000100000000"
/// );
/// ```
pub fn address_to_binary(addr: &str) -> Result<String, AddrError> {
    let ip = parse_address(addr)?;
    let binary: String = ip.octets().iter().map(|o| format!("{o:08b}")).collect();
    log::trace!("address_to_binary({addr}) = {binary}");
    Ok(binary)
}

/// Convert a binary string back to dotted-decimal, one octet per 8 bits.
///
/// The input may be any positive multiple of 8 bits long; 32 bits gives an
/// IPv4 address.
pub fn binary_to_address(bits: &str) -> Result<String, AddrError> {
    if !RE_BINARY.is_match(bits) {
        return Err(AddrError::BinaryDigit(bits.to_string()));
    }
    if bits.is_empty() || bits.len() % 8 != 0 {
        return Err(AddrError::BinaryLength(bits.to_string()));
    }

    let mut octets: Vec<u8> = Vec::with_capacity(bits.len() / 8);
    for chunk in &bits.chars().chunks(8) {
        let group: String = chunk.collect();
        let octet = u8::from_str_radix(&group, 2)
            .map_err(|_| AddrError::BinaryDigit(bits.to_string()))?;
        octets.push(octet);
    }
    Ok(octets.iter().join("."))
}

/// Count the 1-bits of a mask.
///
/// Contiguity is not checked, so `255.0.255.0` gives 16. Use
/// [`is_contiguous_mask`] when that matters.
pub fn cidr_prefix_length(mask: &str) -> Result<u32, AddrError> {
    let bits = u32::from(parse_address(mask)?);
    Ok(bits.count_ones())
}

/// The leading `cidr_prefix_length(mask)` bits of `addr`.
pub fn subnet_bits(addr: &str, mask: &str) -> Result<String, AddrError> {
    let len = cidr_prefix_length(mask)? as usize;
    let binary = address_to_binary(addr)?;
    Ok(binary[..len].to_string())
}

/// Whether `addr` lies in the network given by `prefix` and `mask`.
///
/// A zero-length mask never matches, so `0.0.0.0/0` contains nothing.
pub fn is_address_in_range(addr: &str, prefix: &str, mask: &str) -> Result<bool, AddrError> {
    let network = subnet_bits(prefix, mask)?;
    let binary = address_to_binary(addr)?;
    if network.is_empty() {
        log::debug!("zero length mask {mask}, {addr} not matched");
        return Ok(false);
    }
    Ok(binary.starts_with(&network))
}

/// Our side of a point to point link: the neighbor's address with the last
/// octet replaced by `1`.
///
/// Purely textual, the last octet is not checked to be `2`.
pub fn self_address_from_neighbor(neighbor: &str) -> Result<String, AddrError> {
    match neighbor.rsplit_once('.') {
        Some((network, _)) => Ok(format!("{network}.1")),
        None => Err(AddrError::MissingSeparator(neighbor.to_string())),
    }
}

/// Widen a mask by one bit, e.g. `255.255.255.0` becomes `255.255.254.0`.
///
/// Used when coalescing two adjacent /N routes into one /(N-1) route.
pub fn decrement_mask(mask: &str) -> Result<String, AddrError> {
    let len = cidr_prefix_length(mask)?;
    if len == 0 {
        return Err(AddrError::ZeroPrefix(mask.to_string()));
    }
    if !is_contiguous_mask(mask)? {
        return Err(AddrError::NonContiguousMask(mask.to_string()));
    }
    let bits = u32::from(parse_address(mask)?);
    // bit (len - 1) counted from the most significant end
    let widened = bits & !(1u32 << (MAX_LENGTH - len));
    let widened = Ipv4Addr::from(widened).to_string();
    log::debug!("decrement_mask({mask}) /{len} -> {widened} /{}", len - 1);
    Ok(widened)
}

/// `A.B.C.D/N` where N is the prefix length of `mask`.
pub fn calculate_cidr(addr: &str, mask: &str) -> Result<String, AddrError> {
    parse_address(addr)?;
    let len = cidr_prefix_length(mask)?;
    Ok(format!("{addr}/{len}"))
}

/// Parse the `N` of `A.B.C.D/N`: digits only, at most 32.
pub(crate) fn parse_prefix_length(len: &str, text: &str) -> Result<u32, AddrError> {
    if !RE_OCTET.is_match(len) {
        return Err(AddrError::InvalidCidr(text.to_string()));
    }
    let len: u32 = len
        .parse()
        .map_err(|_| AddrError::InvalidCidr(text.to_string()))?;
    if len > MAX_LENGTH {
        return Err(AddrError::PrefixTooLong(len));
    }
    Ok(len)
}

/// Binary form of an address, or only its prefix bits for `A.B.C.D/N`.
///
/// `/0` gives the empty string rather than the full 32 bits, matching
/// [`subnet_bits`] under a zero mask.
pub fn cidr_to_binary(text: &str) -> Result<String, AddrError> {
    let Some((addr, len)) = text.split_once('/') else {
        return address_to_binary(text);
    };
    let len = parse_prefix_length(len, text)?;
    let binary = address_to_binary(addr)?;
    Ok(binary[..len as usize].to_string())
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use router_addr::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u32) -> Result<u32, AddrError> {
    if len > MAX_LENGTH {
        Err(AddrError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Dotted-decimal mask with `len` leading 1-bits.
pub fn prefix_length_to_mask(len: u32) -> Result<String, AddrError> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?).to_string())
}

/// True when the 1-bits of `mask` form one run starting at the top bit.
pub fn is_contiguous_mask(mask: &str) -> Result<bool, AddrError> {
    let bits = u32::from(parse_address(mask)?);
    Ok(bits.leading_ones() + bits.trailing_zeros() == MAX_LENGTH)
}
