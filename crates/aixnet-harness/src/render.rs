//! Plain-text rendering for the CLI.

use std::net::Ipv4Addr;

use aixnet_core::inet::{self, AddressClass};
use aixnet_core::table::{Constant, Helper, Symbol};

/// One line describing a constant.
#[must_use]
pub fn render_constant(c: &Constant) -> String {
    format!(
        "{} = {} ({:#x}) [{}] {}",
        c.name,
        c.value,
        c.value,
        c.kind.as_str(),
        c.header
    )
}

/// One line describing a helper's signature.
#[must_use]
pub fn render_helper(h: &Helper) -> String {
    format!("{}(u32) -> u32 [{}] {}", h.name, h.kind.as_str(), h.header)
}

#[must_use]
pub fn render_symbol(symbol: Symbol) -> String {
    match symbol {
        Symbol::Constant(c) => render_constant(c),
        Symbol::Helper(h) => render_helper(h),
    }
}

/// Aligned table of constants, one per line.
#[must_use]
pub fn render_table<'a>(constants: impl IntoIterator<Item = &'a Constant>) -> String {
    let constants: Vec<_> = constants.into_iter().collect();
    let width = constants.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for c in constants {
        out.push_str(&format!(
            "{:<width$}  {:>10}  {:>#12x}  {:<9}  {}\n",
            c.name,
            c.value,
            c.value,
            c.kind.as_str(),
            c.header,
        ));
    }
    out
}

/// Classful breakdown of an address.
#[must_use]
pub fn render_classification(addr: u32) -> String {
    let class = match inet::classify(addr) {
        AddressClass::A => "A",
        AddressClass::B => "B",
        AddressClass::C => "C",
        AddressClass::D => "D (multicast)",
        AddressClass::Bad => "bad",
    };
    let mut out = format!(
        "{} ({addr:#010x}): class {class}, net {:#x}, host {:#x}",
        Ipv4Addr::from(addr),
        inet::in_netof(addr),
        inet::in_lnaof(addr),
    );
    if inet::in_experimental(addr) {
        out.push_str(", experimental");
    }
    if inet::is_loopback(addr) {
        out.push_str(", loopback");
    }
    out
}
