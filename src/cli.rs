//! Command line dispatch for the `router-addr` binary.

use crate::config::Config;
use crate::error::AddrError;
use crate::models;
use std::error::Error;

pub const USAGE: &str = "usage: router-addr <command> <args>

commands:
  to-binary ADDR                 dotted-decimal to 32-bit binary string
  to-address BITS                binary string to dotted-decimal
  prefix-len MASK                number of 1-bits in MASK
  subnet-bits ADDR MASK          leading prefix bits of ADDR
  in-range ADDR PREFIX MASK      is ADDR inside PREFIX/MASK
  self-addr NEIGHBOR             neighbor address with last octet set to 1
  decrement-mask MASK            widen MASK by one bit
  cidr ADDR MASK                 ADDR/N notation
  mask-for N                     mask with N leading 1-bits";

/// Run one command and return its output line.
///
/// `args` excludes the program name.
pub fn run<S: AsRef<str>>(args: &[S], config: &Config) -> Result<String, Box<dyn Error>> {
    let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
    let Some((command, rest)) = args.split_first() else {
        return Err(USAGE.into());
    };
    log::debug!("run({command}, {rest:?})");

    let output = match (*command, rest) {
        ("to-binary", [addr]) => models::address_to_binary(addr)?,
        ("to-address", [bits]) => models::binary_to_address(bits)?,
        ("prefix-len", [mask]) => {
            check_mask(mask, config)?;
            models::cidr_prefix_length(mask)?.to_string()
        }
        ("subnet-bits", [addr, mask]) => {
            check_mask(mask, config)?;
            models::subnet_bits(addr, mask)?
        }
        ("in-range", [addr, prefix, mask]) => {
            check_mask(mask, config)?;
            models::is_address_in_range(addr, prefix, mask)?.to_string()
        }
        ("self-addr", [neighbor]) => models::self_address_from_neighbor(neighbor)?,
        ("decrement-mask", [mask]) => models::decrement_mask(mask)?,
        ("cidr", [addr, mask]) => {
            check_mask(mask, config)?;
            models::calculate_cidr(addr, mask)?
        }
        ("mask-for", [len]) => {
            let len: u32 = len
                .parse()
                .map_err(|_| format!("Invalid prefix length {len}"))?;
            models::prefix_length_to_mask(len)?
        }
        _ => {
            let line = args.join(" ");
            return Err(format!("unknown command or wrong arguments: {line}\n{USAGE}").into());
        }
    };
    Ok(output)
}

fn check_mask(mask: &str, config: &Config) -> Result<(), AddrError> {
    if config.strict_masks && !models::is_contiguous_mask(mask)? {
        log::warn!("strict masks: rejecting {mask}");
        return Err(AddrError::NonContiguousMask(mask.to_string()));
    }
    Ok(())
}
