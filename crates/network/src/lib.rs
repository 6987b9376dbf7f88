//! Read MESA nuclear network definition files
//!
//! A MESA network file lists the species (isotopes) that make up a nuclear
//! reaction network. This crate reads those files into an ordered collection
//! of element symbols and their mass numbers.
//!
//! Network files may pull in other networks and come in a handful of shapes:
//!
//! ```text
//! ! comments start with an exclamation mark
//! include 'basic.net'
//!
//! add_isos(
//!    neut          ! bare placeholder species
//!    h2            ! single isotope
//!    fe 52 56      ! inclusive range of mass numbers
//!    )
//! ```
//!
//! Single line forms such as `add_iso(co56)` and `add_isos(h1, he4)` are
//! also recognised.
//!
//! The historical `approx19`, `approx20` and `approx21` networks are built in
//! and never read from disk. Names like `approx21_plus_co56` are read as the
//! `approx21` network plus the isotopes named.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use nucnet_network::{analyse_network, NetworkSource, Network};
//! // Read a network from a local directory
//! let source = NetworkSource::Directory("./data/nets".into());
//! let network: Network = analyse_network("mesa_80", &source).unwrap();
//!
//! // Every element and its isotopes in the order they were read
//! for (symbol, isotopes) in &network.isotopes {
//!     println!("{symbol}: {isotopes:?}");
//! }
//! ```
//!
//! Missing files and unrecognised lines are never errors. They are reported
//! through the `log` facade and skipped, so a partially broken network still
//! gives back everything that could be read.

// Modules
mod error;
mod isotopes;
mod legacy;
mod network;
mod parsers;
mod reader;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use isotopes::Isotopes;

#[doc(inline)]
pub use network::{analyse_network, Network, NetworkSource};

#[doc(inline)]
pub use parsers::{classify, Record};

#[doc(inline)]
pub use reader::{read_network, Reader};
