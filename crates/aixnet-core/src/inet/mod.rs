//! Internet protocol family constants.
//!
//! Implements `<netinet/in.h>` (and the byte-order macros it pulls in from
//! `<net/nh.h>`) as shipped for AIX on POWER: protocol numbers, reserved
//! port ranges, classful address masks and predicates, well-known addresses
//! and `IPPROTO_IP` level socket options. All logic is safe Rust with no
//! syscalls.
//!
//! Addresses are plain `u32` values with the first octet in the most
//! significant byte, which on this big-endian platform is both host and
//! network order.

// ---------------------------------------------------------------------------
// Byte-order helpers (net/nh.h)
// ---------------------------------------------------------------------------

/// Converts a 32-bit value from host byte order to network byte order.
///
/// Host order is network order on this platform, so the value is returned
/// unchanged. No swap happens even when compiled for a little-endian host.
#[inline]
#[must_use]
pub const fn htonl(v: u32) -> u32 {
    v
}

/// Converts a 16-bit value from host byte order to network byte order.
///
/// Identity, see [`htonl`].
#[inline]
#[must_use]
pub const fn htons(v: u16) -> u16 {
    v
}

/// Converts a 32-bit value from network byte order to host byte order.
///
/// Identity, see [`htonl`].
#[inline]
#[must_use]
pub const fn ntohl(v: u32) -> u32 {
    v
}

/// Converts a 16-bit value from network byte order to host byte order.
///
/// Identity, see [`htonl`].
#[inline]
#[must_use]
pub const fn ntohs(v: u16) -> u16 {
    v
}

// ---------------------------------------------------------------------------
// Protocols (IPPROTO_*)
// ---------------------------------------------------------------------------

/// Dummy protocol for IP-level socket options.
pub const IPPROTO_IP: i32 = 0;
/// Internet Control Message Protocol.
pub const IPPROTO_ICMP: i32 = 1;
/// Gateway-to-gateway protocol.
pub const IPPROTO_GGP: i32 = 3;
/// Transmission Control Protocol.
pub const IPPROTO_TCP: i32 = 6;
/// Exterior Gateway Protocol.
pub const IPPROTO_EGP: i32 = 8;
/// PARC Universal Packet.
pub const IPPROTO_PUP: i32 = 12;
/// User Datagram Protocol.
pub const IPPROTO_UDP: i32 = 17;
/// XNS Internet Datagram Protocol.
pub const IPPROTO_IDP: i32 = 22;
/// ISO transport protocol class 4.
pub const IPPROTO_TP: i32 = 29;
/// Local use.
pub const IPPROTO_LOCAL: i32 = 63;
/// ISO CNLP.
pub const IPPROTO_EON: i32 = 80;
/// Bull Internet Protocol.
pub const IPPROTO_BIP: i32 = 0x53;
/// Raw IP packets.
pub const IPPROTO_RAW: i32 = 255;
/// Upper bound (exclusive) on protocol numbers.
pub const IPPROTO_MAX: i32 = 256;

/// Returns the symbolic name of a protocol number, or `None` if the header
/// does not name it. `IPPROTO_MAX` is a limit and has no name here.
#[must_use]
pub const fn ipproto_name(proto: i32) -> Option<&'static str> {
    match proto {
        IPPROTO_IP => Some("IPPROTO_IP"),
        IPPROTO_ICMP => Some("IPPROTO_ICMP"),
        IPPROTO_GGP => Some("IPPROTO_GGP"),
        IPPROTO_TCP => Some("IPPROTO_TCP"),
        IPPROTO_EGP => Some("IPPROTO_EGP"),
        IPPROTO_PUP => Some("IPPROTO_PUP"),
        IPPROTO_UDP => Some("IPPROTO_UDP"),
        IPPROTO_IDP => Some("IPPROTO_IDP"),
        IPPROTO_TP => Some("IPPROTO_TP"),
        IPPROTO_LOCAL => Some("IPPROTO_LOCAL"),
        IPPROTO_EON => Some("IPPROTO_EON"),
        IPPROTO_BIP => Some("IPPROTO_BIP"),
        IPPROTO_RAW => Some("IPPROTO_RAW"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Ports below this value may only be bound by a privileged process.
pub const IPPORT_RESERVED: u16 = 1024;
/// Ports at or above this value are never assigned automatically.
pub const IPPORT_USERRESERVED: u16 = 5000;
/// Well-known port of the time service.
pub const IPPORT_TIMESERVER: u16 = 37;

/// Returns true if binding `port` requires privilege.
#[inline]
#[must_use]
pub const fn is_reserved_port(port: u16) -> bool {
    port < IPPORT_RESERVED
}

// ---------------------------------------------------------------------------
// Classful addressing
// ---------------------------------------------------------------------------

pub const IN_CLASSA_NET: u32 = 0xff00_0000;
pub const IN_CLASSA_NSHIFT: u32 = 24;
pub const IN_CLASSA_HOST: u32 = 0x00ff_ffff;
pub const IN_CLASSA_MAX: u32 = 128;

pub const IN_CLASSB_NET: u32 = 0xffff_0000;
pub const IN_CLASSB_NSHIFT: u32 = 16;
pub const IN_CLASSB_HOST: u32 = 0x0000_ffff;
pub const IN_CLASSB_MAX: u32 = 65536;

pub const IN_CLASSC_NET: u32 = 0xffff_ff00;
pub const IN_CLASSC_NSHIFT: u32 = 8;
pub const IN_CLASSC_HOST: u32 = 0x0000_00ff;

/// Class A: leading bit `0`.
#[inline]
#[must_use]
pub const fn in_classa(i: u32) -> bool {
    i & 0x8000_0000 == 0
}

/// Class B: leading bits `10`.
#[inline]
#[must_use]
pub const fn in_classb(i: u32) -> bool {
    i & 0xc000_0000 == 0x8000_0000
}

/// Class C: leading bits `110`.
#[inline]
#[must_use]
pub const fn in_classc(i: u32) -> bool {
    i & 0xe000_0000 == 0xc000_0000
}

/// Class D: leading bits `1110`.
#[inline]
#[must_use]
pub const fn in_classd(i: u32) -> bool {
    i & 0xf000_0000 == 0xe000_0000
}

/// Multicast addresses are exactly the class D addresses.
#[inline]
#[must_use]
pub const fn in_multicast(i: u32) -> bool {
    in_classd(i)
}

/// Leading bits `111`. This header's mask also matches class D.
#[inline]
#[must_use]
pub const fn in_experimental(i: u32) -> bool {
    i & 0xe000_0000 == 0xe000_0000
}

/// Leading bits `1111`.
#[inline]
#[must_use]
pub const fn in_badclass(i: u32) -> bool {
    i & 0xf000_0000 == 0xf000_0000
}

/// Class of an IPv4 address under the classful scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Leading nibble `0xF`.
    Bad,
}

/// Classifies `addr` using the `IN_CLASS*` predicates.
#[must_use]
pub const fn classify(addr: u32) -> AddressClass {
    if in_classa(addr) {
        AddressClass::A
    } else if in_classb(addr) {
        AddressClass::B
    } else if in_classc(addr) {
        AddressClass::C
    } else if in_classd(addr) {
        AddressClass::D
    } else {
        AddressClass::Bad
    }
}

/// Network number of a classful address, shifted down.
///
/// Addresses that are neither class A nor class B use the class C split,
/// matching BSD `inet_netof`.
#[must_use]
pub const fn in_netof(addr: u32) -> u32 {
    if in_classa(addr) {
        (addr & IN_CLASSA_NET) >> IN_CLASSA_NSHIFT
    } else if in_classb(addr) {
        (addr & IN_CLASSB_NET) >> IN_CLASSB_NSHIFT
    } else {
        (addr & IN_CLASSC_NET) >> IN_CLASSC_NSHIFT
    }
}

/// Local (host) part of a classful address. Same class rules as [`in_netof`].
#[must_use]
pub const fn in_lnaof(addr: u32) -> u32 {
    if in_classa(addr) {
        addr & IN_CLASSA_HOST
    } else if in_classb(addr) {
        addr & IN_CLASSB_HOST
    } else {
        addr & IN_CLASSC_HOST
    }
}

// ---------------------------------------------------------------------------
// Well-known addresses
// ---------------------------------------------------------------------------

/// The wildcard address `0.0.0.0`.
pub const INADDR_ANY: u32 = 0x0000_0000;
/// `127.0.0.1`.
pub const INADDR_LOOPBACK: u32 = 0x7f00_0001;
/// The broadcast address `255.255.255.255`.
pub const INADDR_BROADCAST: u32 = 0xffff_ffff;
/// Error return of address parsers (also `INADDR_BROADCAST`).
pub const INADDR_NONE: u32 = 0xffff_ffff;
/// Class A network number reserved for loopback.
pub const IN_LOOPBACKNET: u32 = 127;

/// Returns true if `addr` lies on the loopback network.
#[inline]
#[must_use]
pub const fn is_loopback(addr: u32) -> bool {
    in_classa(addr) && in_netof(addr) == IN_LOOPBACKNET
}

// ---------------------------------------------------------------------------
// IPPROTO_IP level socket options
// ---------------------------------------------------------------------------

/// Set/get IP options carried in each packet.
pub const IP_OPTIONS: i32 = 1;
/// Header is included with outgoing data.
pub const IP_HDRINCL: i32 = 2;
/// Type of service.
pub const IP_TOS: i32 = 3;
/// Time to live.
pub const IP_TTL: i32 = 4;
/// Receive all IP options with datagram.
pub const IP_RECVOPTS: i32 = 5;
/// Receive IP options for the response.
pub const IP_RECVRETOPTS: i32 = 6;
/// Receive the destination address with datagram.
pub const IP_RECVDSTADDR: i32 = 7;
/// IP options to send back in replies.
pub const IP_RETOPTS: i32 = 8;
