//! Name-addressable view of every constant and helper.
//!
//! The typed constants in [`crate::machine`] and [`crate::inet`] are the
//! source of truth; the entries here are generated from them, so a name can
//! never disagree with its typed constant. Lookups go through a hash index
//! that is built once, on first use, and never changes afterwards.

mod entries;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

pub use entries::{CONSTANTS, HELPERS};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Header a symbol was translated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Header {
    #[serde(rename = "sys/machine.h")]
    SysMachine,
    #[serde(rename = "net/nh.h")]
    NetNh,
    #[serde(rename = "netinet/in.h")]
    NetinetIn,
}

impl Header {
    /// All headers in inclusion order.
    pub const ALL: [Header; 3] = [Header::SysMachine, Header::NetNh, Header::NetinetIn];

    /// Include path of the header.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SysMachine => "sys/machine.h",
            Self::NetNh => "net/nh.h",
            Self::NetinetIn => "netinet/in.h",
        }
    }

    /// Parse from an include path or a short name (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sys/machine.h" | "machine" | "sys" => Some(Self::SysMachine),
            "net/nh.h" | "nh" => Some(Self::NetNh),
            "netinet/in.h" | "in" | "inet" | "netinet" => Some(Self::NetinetIn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// What a constant's value means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstKind {
    /// A single register bit.
    BitFlag,
    /// A multi-bit mask or composite register value.
    BitMask,
    /// One value out of a closed set (protocols, options, byte orders).
    Enumerant,
    /// An IPv4 address or network number.
    Address,
    /// A bound, port boundary or shift count.
    Limit,
}

impl ConstKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BitFlag => "bit_flag",
            Self::BitMask => "bit_mask",
            Self::Enumerant => "enumerant",
            Self::Address => "address",
            Self::Limit => "limit",
        }
    }
}

/// One named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub name: &'static str,
    /// Exact value regardless of the typed constant's width or signedness.
    pub value: i64,
    pub kind: ConstKind,
    pub header: Header,
}

impl Constant {
    /// The value as a 32-bit register/address pattern, if it fits.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        u32::try_from(self.value).ok()
    }
}

/// Shape of a helper's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelperKind {
    /// Returns 0 or 1.
    Predicate,
    /// Returns a bit field of its argument.
    Extractor,
    /// Host/network order conversion (identity on this platform).
    ByteOrder,
}

impl HelperKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Predicate => "predicate",
            Self::Extractor => "extractor",
            Self::ByteOrder => "byte_order",
        }
    }
}

/// One function-like macro, callable on a 32-bit argument.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Helper {
    pub name: &'static str,
    pub kind: HelperKind,
    pub header: Header,
    #[serde(skip)]
    apply: fn(u32) -> u32,
}

impl Helper {
    pub(crate) const fn new(
        name: &'static str,
        kind: HelperKind,
        header: Header,
        apply: fn(u32) -> u32,
    ) -> Self {
        Self {
            name,
            kind,
            header,
            apply,
        }
    }

    /// Evaluate the helper. Predicates return 0 or 1.
    #[inline]
    #[must_use]
    pub fn call(&self, arg: u32) -> u32 {
        (self.apply)(arg)
    }

    /// Evaluate a predicate helper as a boolean. Non-predicates are true
    /// when their result is non-zero, as in C.
    #[inline]
    #[must_use]
    pub fn test(&self, arg: u32) -> bool {
        self.call(arg) != 0
    }
}

/// A resolved name.
#[derive(Debug, Clone, Copy)]
pub enum Symbol {
    Constant(&'static Constant),
    Helper(&'static Helper),
}

impl Symbol {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant(c) => c.name,
            Self::Helper(h) => h.name,
        }
    }

    #[must_use]
    pub fn header(&self) -> Header {
        match self {
            Self::Constant(c) => c.header,
            Self::Helper(h) => h.header,
        }
    }

    fn kind_label(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Helper(_) => "helper",
        }
    }
}

/// Name resolution failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("{name} is a {found}, not a {expected}")]
    WrongKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Index
// ---------------------------------------------------------------------------

fn index() -> &'static HashMap<&'static str, Symbol> {
    static INDEX: OnceLock<HashMap<&'static str, Symbol>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(CONSTANTS.len() + HELPERS.len());
        for c in CONSTANTS {
            map.insert(c.name, Symbol::Constant(c));
        }
        for h in HELPERS {
            map.insert(h.name, Symbol::Helper(h));
        }
        map
    })
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// All constants, grouped by header in inclusion order.
#[must_use]
pub fn constants() -> &'static [Constant] {
    CONSTANTS
}

/// All helpers.
#[must_use]
pub fn helpers() -> &'static [Helper] {
    HELPERS
}

/// Constants translated from one header.
pub fn by_header(header: Header) -> impl Iterator<Item = &'static Constant> {
    CONSTANTS.iter().filter(move |c| c.header == header)
}

/// Resolve a name to a constant or helper. Names are case-sensitive, as in C.
pub fn resolve(name: &str) -> Result<Symbol, LookupError> {
    index()
        .get(name)
        .copied()
        .ok_or_else(|| LookupError::UnknownSymbol(name.to_string()))
}

/// Resolve a constant by name.
pub fn lookup(name: &str) -> Result<&'static Constant, LookupError> {
    match resolve(name)? {
        Symbol::Constant(c) => Ok(c),
        other => Err(LookupError::WrongKind {
            name: name.to_string(),
            expected: "constant",
            found: other.kind_label(),
        }),
    }
}

/// Value of a constant by name.
pub fn value_of(name: &str) -> Result<i64, LookupError> {
    lookup(name).map(|c| c.value)
}

/// Resolve a helper by name.
pub fn lookup_helper(name: &str) -> Result<&'static Helper, LookupError> {
    match resolve(name)? {
        Symbol::Helper(h) => Ok(h),
        other => Err(LookupError::WrongKind {
            name: name.to_string(),
            expected: "helper",
            found: other.kind_label(),
        }),
    }
}

/// Call a helper by name.
pub fn call(name: &str, arg: u32) -> Result<u32, LookupError> {
    lookup_helper(name).map(|h| h.call(arg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{inet, machine};
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_across_constants_and_helpers() {
        let mut seen = HashSet::new();
        for name in CONSTANTS
            .iter()
            .map(|c| c.name)
            .chain(HELPERS.iter().map(|h| h.name))
        {
            assert!(seen.insert(name), "duplicate symbol {name}");
        }
        assert_eq!(index().len(), CONSTANTS.len() + HELPERS.len());
    }

    #[test]
    fn table_sizes() {
        assert_eq!(by_header(Header::SysMachine).count(), 54);
        assert_eq!(by_header(Header::NetNh).count(), 0);
        assert_eq!(by_header(Header::NetinetIn).count(), 41);
        assert_eq!(HELPERS.len(), 13);
    }

    #[test]
    fn lookup_known_constants() {
        assert_eq!(value_of("IPPROTO_TCP"), Ok(6));
        assert_eq!(value_of("CR_LT"), Ok(0x8000_0000));
        assert_eq!(value_of("DEFAULT_USER_MSR"), Ok(0xD0B0));
        assert_eq!(value_of("BYTE_ORDER"), Ok(4321));
        let c = lookup("INADDR_LOOPBACK").unwrap();
        assert_eq!(c.kind, ConstKind::Address);
        assert_eq!(c.header, Header::NetinetIn);
        assert_eq!(c.as_u32(), Some(inet::INADDR_LOOPBACK));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert_eq!(
            lookup("IPPROTO_SCTP"),
            Err(LookupError::UnknownSymbol("IPPROTO_SCTP".to_string()))
        );
        // Lookup is case-sensitive.
        assert!(matches!(
            resolve("ipproto_tcp"),
            Err(LookupError::UnknownSymbol(_))
        ));
        assert!(matches!(call("", 0), Err(LookupError::UnknownSymbol(_))));
    }

    #[test]
    fn wrong_kind_is_reported() {
        let err = lookup("IN_CLASSA").unwrap_err();
        assert_eq!(
            err,
            LookupError::WrongKind {
                name: "IN_CLASSA".to_string(),
                expected: "constant",
                found: "helper",
            }
        );
        assert_eq!(err.to_string(), "IN_CLASSA is a helper, not a constant");
        assert!(matches!(
            call("IN_CLASSA_NET", 0),
            Err(LookupError::WrongKind { .. })
        ));
    }

    #[test]
    fn call_agrees_with_typed_functions() {
        let samples = [
            0u32,
            0x7F00_0001,
            0x8000_0000,
            0xC0A8_0001,
            0xE000_00FB,
            0xF000_0000,
            u32::MAX,
        ];
        for &a in &samples {
            assert_eq!(call("IN_CLASSA", a), Ok(u32::from(inet::in_classa(a))));
            assert_eq!(call("IN_CLASSB", a), Ok(u32::from(inet::in_classb(a))));
            assert_eq!(call("IN_CLASSC", a), Ok(u32::from(inet::in_classc(a))));
            assert_eq!(call("IN_CLASSD", a), Ok(u32::from(inet::in_classd(a))));
            assert_eq!(
                call("IN_MULTICAST", a),
                Ok(u32::from(inet::in_multicast(a)))
            );
            assert_eq!(
                call("IN_EXPERIMENTAL", a),
                Ok(u32::from(inet::in_experimental(a)))
            );
            assert_eq!(call("IN_BADCLASS", a), Ok(u32::from(inet::in_badclass(a))));
            assert_eq!(call("XER_LENGTH", a), Ok(machine::xer_length(a)));
            assert_eq!(call("XER_COMP_BYTE", a), Ok(machine::xer_comp_byte(a)));
        }
    }

    #[test]
    fn byte_order_helpers_pass_every_value_through() {
        for name in ["htonl", "htons", "ntohl", "ntohs"] {
            let h = lookup_helper(name).unwrap();
            assert_eq!(h.kind, HelperKind::ByteOrder);
            assert_eq!(h.header, Header::NetNh);
            for v in [0u32, 0x1234, 0xFFFF, 0x1_0000, 0xDEAD_BEEF, u32::MAX] {
                assert_eq!(h.call(v), v, "{name}({v:#x})");
            }
        }
    }

    #[test]
    fn predicate_test_matches_call() {
        let h = lookup_helper("IN_CLASSC").unwrap();
        assert!(h.test(0xC0A8_0001));
        assert!(!h.test(0x0A00_0001));
    }

    #[test]
    fn every_constant_fits_in_32_bits() {
        for c in CONSTANTS {
            assert!(c.as_u32().is_some(), "{} = {} does not fit", c.name, c.value);
        }
    }

    #[test]
    fn header_parsing() {
        assert_eq!(Header::from_str_loose("machine"), Some(Header::SysMachine));
        assert_eq!(Header::from_str_loose("NETINET/IN.H"), Some(Header::NetinetIn));
        assert_eq!(Header::from_str_loose("nh"), Some(Header::NetNh));
        assert_eq!(Header::from_str_loose("sys/socket.h"), None);
        for h in Header::ALL {
            assert_eq!(Header::from_str_loose(h.path()), Some(h));
            assert_eq!(h.to_string(), h.path());
        }
    }

    #[test]
    fn kind_labels_match_serialized_names() {
        for c in CONSTANTS {
            assert_eq!(serde_json::to_value(c.kind).unwrap(), c.kind.as_str());
        }
        for h in HELPERS {
            assert_eq!(serde_json::to_value(h.kind).unwrap(), h.kind.as_str());
        }
    }

    #[test]
    fn constant_serializes_with_header_path() {
        let json = serde_json::to_value(lookup("MSR_EE").unwrap()).unwrap();
        assert_eq!(json["name"], "MSR_EE");
        assert_eq!(json["value"], 0x8000);
        assert_eq!(json["kind"], "bit_flag");
        assert_eq!(json["header"], "sys/machine.h");

        let json = serde_json::to_value(lookup_helper("IN_BADCLASS").unwrap()).unwrap();
        assert_eq!(json["kind"], "predicate");
        assert!(json.get("apply").is_none());
    }
}
