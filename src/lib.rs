//! IPv4 address and subnet arithmetic for forwarding-table code.
//!
//! - [`models`] - address conversion, membership test and mask widening
//! - [`error`] - [`AddrError`] returned by every fallible function
//! - [`config`] - environment driven settings for the binary
//! - [`cli`] - command dispatch behind `router-addr`

pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use error::{AddrError, ErrorKind};
pub use models::{
    address_to_binary, binary_to_address, cidr_prefix_length, decrement_mask,
    is_address_in_range, self_address_from_neighbor, subnet_bits, Cidr,
};
