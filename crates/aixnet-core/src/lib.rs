//! # aixnet-core
//!
//! AIX on POWER/PowerPC platform constants from `<netinet/in.h>`,
//! `<net/nh.h>` and `<sys/machine.h>`.
//!
//! Each header symbol exists twice: as a typed `pub const` (or `const fn` for
//! function-like macros) in [`machine`] and [`inet`], and as an entry in the
//! name-addressable [`table`]. No `unsafe` code is permitted at the crate
//! level.

#![deny(unsafe_code)]

pub mod inet;
pub mod machine;
pub mod table;

pub use table::{
    ConstKind, Constant, Header, Helper, HelperKind, LookupError, Symbol, call, lookup,
    lookup_helper, resolve, value_of,
};
