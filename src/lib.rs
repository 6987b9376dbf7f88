//! `nucnet` reads MESA nuclear network files and maps them onto the chart of
//! nuclides
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use nucnet_network as network;

#[cfg(feature = "chart")]
#[cfg_attr(docsrs, doc(cfg(feature = "chart")))]
#[doc(inline)]
pub use nucnet_chart as chart;
