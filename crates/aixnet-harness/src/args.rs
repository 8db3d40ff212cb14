//! Parsing of numeric CLI arguments.

use std::net::Ipv4Addr;

use crate::HarnessError;

/// Parse a 32-bit argument: decimal, `0x` hex (underscores allowed), or a
/// dotted-quad IPv4 address.
pub fn parse_u32_arg(raw: &str) -> Result<u32, HarnessError> {
    let s = raw.trim();
    let invalid = |reason: String| HarnessError::InvalidArgument {
        raw: raw.to_string(),
        reason,
    };
    if s.contains('.') {
        return s
            .parse::<Ipv4Addr>()
            .map(u32::from)
            .map_err(|e| invalid(e.to_string()));
    }
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let hex = hex.replace('_', "");
        return u32::from_str_radix(&hex, 16).map_err(|e| invalid(e.to_string()));
    }
    s.replace('_', "")
        .parse::<u32>()
        .map_err(|e| invalid(e.to_string()))
}
