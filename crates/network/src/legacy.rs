//! Frozen definitions of the historical `approx` networks
//!
//! These networks are reproduced exactly and never read from disk, since their
//! files are not guaranteed to exist in a MESA installation.

/// Species of a frozen network as `(symbol, mass numbers)`
pub(crate) type Species = &'static [(&'static str, &'static [u32])];

const APPROX19: Species = &[
    ("neut", &[]),
    ("h", &[1]),
    ("he", &[3, 4]),
    ("c", &[12]),
    ("n", &[14]),
    ("o", &[16]),
    ("ne", &[20]),
    ("mg", &[24]),
    ("si", &[28]),
    ("s", &[32]),
    ("ar", &[36]),
    ("ca", &[40]),
    ("ti", &[44]),
    ("cr", &[48]),
    ("fe", &[52, 54]),
    ("ni", &[56]),
];

const APPROX20: Species = &[
    ("neut", &[]),
    ("h", &[1]),
    ("he", &[3, 4]),
    ("c", &[12]),
    ("n", &[14]),
    ("o", &[16]),
    ("ne", &[20]),
    ("mg", &[24]),
    ("si", &[28]),
    ("s", &[32]),
    ("ar", &[36]),
    ("ca", &[40]),
    ("ti", &[44]),
    ("cr", &[48]),
    ("fe", &[52, 54, 56]),
    ("ni", &[56]),
];

const APPROX21: Species = &[
    ("neut", &[]),
    ("h", &[1]),
    ("he", &[3, 4]),
    ("c", &[12]),
    ("n", &[14]),
    ("o", &[16]),
    ("ne", &[20]),
    ("mg", &[24]),
    ("si", &[28]),
    ("s", &[32]),
    ("ar", &[36]),
    ("ca", &[40]),
    ("ti", &[44]),
    ("cr", &[48, 56]),
    ("fe", &[52, 54, 56]),
    ("ni", &[56]),
];

/// Lookup of file name to frozen species list
const LEGACY_NETWORKS: &[(&str, Species)] = &[
    ("approx19.net", APPROX19),
    ("approx20.net", APPROX20),
    ("approx21.net", APPROX21),
];

/// Find the frozen species for an exact network file name
pub(crate) fn legacy_network(file_name: &str) -> Option<Species> {
    LEGACY_NETWORKS
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, species)| *species)
}
