//! Address value types and arithmetic.
//!
//! - [`ipv4`] - dotted-decimal / binary conversion, membership and mask functions
//! - [`Cidr`] - network address with prefix length

mod cidr;
mod ipv4;

// Re-export public types
pub use cidr::Cidr;
pub use ipv4::{
    address_to_binary, binary_to_address, calculate_cidr, cidr_prefix_length, cidr_to_binary,
    decrement_mask, get_cidr_mask, is_address_in_range, is_contiguous_mask, parse_address,
    prefix_length_to_mask, self_address_from_neighbor, subnet_bits, MAX_LENGTH,
};
