//! Table entries, in header order.

use super::{ConstKind, Constant, Header, Helper, HelperKind};
use crate::inet::*;
use crate::machine::*;

/// Builds `Constant` entries from typed constants, taking the name from the
/// identifier so the two cannot diverge.
macro_rules! constant_table {
    ($( $header:ident { $( $kind:ident $name:ident ),* $(,)? } )*) => {
        &[
            $( $(
                Constant {
                    name: stringify!($name),
                    value: $name as i64,
                    kind: ConstKind::$kind,
                    header: Header::$header,
                },
            )* )*
        ]
    };
}

pub static CONSTANTS: &[Constant] = constant_table! {
    SysMachine {
        Enumerant LITTLE_ENDIAN,
        Enumerant BIG_ENDIAN,
        Enumerant PDP_ENDIAN,
        Enumerant BYTE_ORDER,
        BitMask DEFAULT_GPR,

        BitFlag MSR_EE,
        BitFlag MSR_PR,
        BitFlag MSR_FP,
        BitFlag MSR_ME,
        BitFlag MSR_FE,
        BitFlag MSR_FE0,
        BitFlag MSR_SE,
        BitFlag MSR_BE,
        BitFlag MSR_IE,
        BitFlag MSR_FE1,
        BitFlag MSR_AL,
        BitFlag MSR_IP,
        BitFlag MSR_IR,
        BitFlag MSR_DR,
        BitFlag MSR_PM,
        BitMask DEFAULT_MSR,
        BitMask DEFAULT_USER_MSR,

        BitFlag CR_LT,
        BitFlag CR_GT,
        BitFlag CR_EQ,
        BitFlag CR_SO,
        BitFlag CR_FX,
        BitFlag CR_FEX,
        BitFlag CR_VX,
        BitFlag CR_OX,

        BitFlag XER_SO,
        BitFlag XER_OV,
        BitFlag XER_CA,

        BitFlag DSISR_IO,
        BitFlag DSISR_PFT,
        BitFlag DSISR_LOCK,
        BitFlag DSISR_FPIO,
        BitFlag DSISR_PROT,
        BitFlag DSISR_LOOP,
        BitFlag DSISR_DRST,
        BitFlag DSISR_ST,
        BitFlag DSISR_SEGB,
        BitFlag DSISR_DABR,
        BitFlag DSISR_EAR,

        BitFlag SRR_IS_PFT,
        BitFlag SRR_IS_ISPEC,
        BitFlag SRR_IS_IIO,
        BitFlag SRR_IS_PROT,
        BitFlag SRR_IS_LOOP,
        BitFlag SRR_PR_FPEN,
        BitFlag SRR_PR_INVAL,
        BitFlag SRR_PR_PRIV,
        BitFlag SRR_PR_TRAP,
        BitFlag SRR_PR_IMPRE,
    }
    NetinetIn {
        Enumerant IPPROTO_IP,
        Enumerant IPPROTO_ICMP,
        Enumerant IPPROTO_GGP,
        Enumerant IPPROTO_TCP,
        Enumerant IPPROTO_EGP,
        Enumerant IPPROTO_PUP,
        Enumerant IPPROTO_UDP,
        Enumerant IPPROTO_IDP,
        Enumerant IPPROTO_TP,
        Enumerant IPPROTO_LOCAL,
        Enumerant IPPROTO_EON,
        Enumerant IPPROTO_BIP,
        Enumerant IPPROTO_RAW,
        Limit IPPROTO_MAX,

        Limit IPPORT_RESERVED,
        Limit IPPORT_USERRESERVED,
        Enumerant IPPORT_TIMESERVER,

        BitMask IN_CLASSA_NET,
        Limit IN_CLASSA_NSHIFT,
        BitMask IN_CLASSA_HOST,
        Limit IN_CLASSA_MAX,
        BitMask IN_CLASSB_NET,
        Limit IN_CLASSB_NSHIFT,
        BitMask IN_CLASSB_HOST,
        Limit IN_CLASSB_MAX,
        BitMask IN_CLASSC_NET,
        Limit IN_CLASSC_NSHIFT,
        BitMask IN_CLASSC_HOST,

        Address INADDR_ANY,
        Address INADDR_LOOPBACK,
        Address INADDR_BROADCAST,
        Address INADDR_NONE,
        Address IN_LOOPBACKNET,

        Enumerant IP_OPTIONS,
        Enumerant IP_HDRINCL,
        Enumerant IP_TOS,
        Enumerant IP_TTL,
        Enumerant IP_RECVOPTS,
        Enumerant IP_RECVRETOPTS,
        Enumerant IP_RECVDSTADDR,
        Enumerant IP_RETOPTS,
    }
};

// The C macros are untyped: a 16-bit stub handed a wider value returns it
// unchanged, so only values that fit go through the typed function.
fn call_htons(v: u32) -> u32 {
    u16::try_from(v).map_or(v, |s| u32::from(htons(s)))
}

fn call_ntohs(v: u32) -> u32 {
    u16::try_from(v).map_or(v, |s| u32::from(ntohs(s)))
}

fn call_in_classa(i: u32) -> u32 {
    u32::from(in_classa(i))
}

fn call_in_classb(i: u32) -> u32 {
    u32::from(in_classb(i))
}

fn call_in_classc(i: u32) -> u32 {
    u32::from(in_classc(i))
}

fn call_in_classd(i: u32) -> u32 {
    u32::from(in_classd(i))
}

fn call_in_multicast(i: u32) -> u32 {
    u32::from(in_multicast(i))
}

fn call_in_experimental(i: u32) -> u32 {
    u32::from(in_experimental(i))
}

fn call_in_badclass(i: u32) -> u32 {
    u32::from(in_badclass(i))
}

pub static HELPERS: &[Helper] = &[
    Helper::new("XER_COMP_BYTE", HelperKind::Extractor, Header::SysMachine, xer_comp_byte),
    Helper::new("XER_LENGTH", HelperKind::Extractor, Header::SysMachine, xer_length),
    Helper::new("ntohl", HelperKind::ByteOrder, Header::NetNh, ntohl),
    Helper::new("ntohs", HelperKind::ByteOrder, Header::NetNh, call_ntohs),
    Helper::new("htonl", HelperKind::ByteOrder, Header::NetNh, htonl),
    Helper::new("htons", HelperKind::ByteOrder, Header::NetNh, call_htons),
    Helper::new("IN_CLASSA", HelperKind::Predicate, Header::NetinetIn, call_in_classa),
    Helper::new("IN_CLASSB", HelperKind::Predicate, Header::NetinetIn, call_in_classb),
    Helper::new("IN_CLASSC", HelperKind::Predicate, Header::NetinetIn, call_in_classc),
    Helper::new("IN_CLASSD", HelperKind::Predicate, Header::NetinetIn, call_in_classd),
    Helper::new("IN_MULTICAST", HelperKind::Predicate, Header::NetinetIn, call_in_multicast),
    Helper::new(
        "IN_EXPERIMENTAL",
        HelperKind::Predicate,
        Header::NetinetIn,
        call_in_experimental,
    ),
    Helper::new("IN_BADCLASS", HelperKind::Predicate, Header::NetinetIn, call_in_badclass),
];
