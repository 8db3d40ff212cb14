//! Fixture capture from the current table.
//!
//! Produces one case per constant and one case per (helper, probe) pair, so a
//! captured set pins every value and every helper's behavior at the class
//! boundaries.

use aixnet_core::table::{self, Header};

use crate::fixtures::{FIXTURE_VERSION, FixtureCase, FixtureSet};

/// Helper arguments exercised by captured fixtures: each class boundary, the
/// well-known addresses, and values with bits set in the XER fields.
pub const PROBES: [u32; 12] = [
    0x0000_0000,
    0x7F00_0001,
    0x7FFF_FFFF,
    0x8000_0000,
    0xBFFF_FFFF,
    0xC0A8_0001,
    0xDFFF_FFFF,
    0xE000_00FB,
    0xEFFF_FFFF,
    0xF000_0000,
    0xFFFF_FFFF,
    0x2000_AB55,
];

/// Capture the table, optionally restricted to one header.
#[must_use]
pub fn capture_fixture_set(header: Option<Header>, captured_at: &str) -> FixtureSet {
    let wanted = |h: Header| header.is_none_or(|want| want == h);

    let mut cases: Vec<FixtureCase> = table::constants()
        .iter()
        .filter(|c| wanted(c.header))
        .map(|c| FixtureCase {
            name: format!("{}_value", c.name.to_ascii_lowercase()),
            symbol: c.name.to_string(),
            header: c.header.path().to_string(),
            input: None,
            expected_output: c.value.to_string(),
        })
        .collect();

    for helper in table::helpers().iter().filter(|h| wanted(h.header)) {
        for probe in PROBES {
            cases.push(FixtureCase {
                name: format!("{}_{probe:08x}", helper.name.to_ascii_lowercase()),
                symbol: helper.name.to_string(),
                header: helper.header.path().to_string(),
                input: Some(probe),
                expected_output: helper.call(probe).to_string(),
            });
        }
    }

    FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: header.map_or("all", Header::path).to_string(),
        captured_at: captured_at.to_string(),
        cases,
    }
}
