//! Map MESA nuclear networks onto the chart of nuclides
//!
//! Takes the [Isotopes] read from a network file and builds everything needed
//! to draw the network over the full chart of nuclides:
//!
//! - [Grid] of every (z, n) cell, marked [Cell::Present] for network
//!   isotopes and [Cell::Background] for any other known nuclide
//! - [Label]s placed just before the lightest isotope of each element
//! - [Bounds] of the network for setting axis limits
//!
//! Drawing is left to whatever plotting library is preferred.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use nucnet_chart::{build_chart, NuclideTable, SymbolTable};
//! # use nucnet_network::{analyse_network, NetworkSource};
//! // Read the network and the full list of known nuclides
//! let network = analyse_network("mesa_80", &NetworkSource::Mesa).unwrap();
//! let nuclides = NuclideTable::from_csv("nndc_nudat_data_export.csv").unwrap();
//!
//! // Build a 200x200 grid using the built-in periodic table
//! let chart = build_chart(
//!     &network.isotopes,
//!     SymbolTable::builtin(),
//!     &nuclides,
//!     200,
//!     200,
//! )
//! .unwrap();
//!
//! for label in &chart.labels {
//!     println!("{} at z={} n={}", label.text, label.z, label.n);
//! }
//! ```
//!
//! [Isotopes]: nucnet_network::Isotopes

// Modules
mod error;
mod grid;
mod tables;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use grid::{build_chart, Bounds, Cell, Chart, Grid, Label};

#[doc(inline)]
pub use tables::{NuclideTable, SymbolTable};
