//! Accumulator for element symbols and their mass numbers

// external crates
use indexmap::map::Iter;
use indexmap::IndexMap;
use log::trace;
use serde::Serialize;

// internal modules
use crate::parsers::Record;

/// Ordered collection of element symbols and isotope mass numbers
///
/// Symbols are kept in the order they were first seen, and every mass number
/// is kept in the order it was read. Nothing is ever overwritten or
/// deduplicated, so merging the same species twice lists it twice.
///
/// ```rust
/// # use nucnet_network::Isotopes;
/// let mut isotopes = Isotopes::new();
/// isotopes.merge("fe", [52, 54]);
/// isotopes.merge("fe", [56]);
/// isotopes.merge("neut", []);
///
/// assert_eq!(isotopes.get("fe"), Some(&[52, 54, 56][..]));
/// assert_eq!(isotopes.get("neut"), Some(&[][..]));
/// assert_eq!(isotopes.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Isotopes(IndexMap<String, Vec<u32>>);

impl Isotopes {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add mass numbers for a symbol
    ///
    /// An unknown symbol is inserted with the values given, even if there are
    /// none. A known symbol has the values appended to its existing list.
    pub fn merge<S, I>(&mut self, symbol: S, values: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = u32>,
    {
        let symbol = symbol.into();
        let values = values.into_iter();
        trace!("merge {symbol:?}");
        self.0.entry(symbol).or_default().extend(values);
    }

    /// Merge a classified record
    pub(crate) fn merge_record(&mut self, record: Record) {
        self.merge(record.symbol, record.isotopes);
    }

    /// Mass numbers listed for a symbol, if present
    pub fn get(&self, symbol: &str) -> Option<&[u32]> {
        self.0.get(symbol).map(|v| v.as_slice())
    }

    /// Check if a symbol is present
    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    /// Number of element symbols
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no symbols have been merged
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of species, counting placeholders like `neut` once
    ///
    /// ```rust
    /// # use nucnet_network::Isotopes;
    /// let mut isotopes = Isotopes::new();
    /// isotopes.merge("neut", []);
    /// isotopes.merge("he", [3, 4]);
    /// assert_eq!(isotopes.species_count(), 3);
    /// ```
    pub fn species_count(&self) -> usize {
        self.0.values().map(|v| v.len().max(1)).sum()
    }

    /// Iterate over `(symbol, mass numbers)` in insertion order
    pub fn iter(&self) -> Iter<'_, String, Vec<u32>> {
        self.0.iter()
    }

    /// Element symbols in insertion order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Drop the empty symbol left behind by unrecognised records
    pub(crate) fn remove_unrecognised(&mut self) {
        if self.0.shift_remove("").is_some() {
            trace!("removed entry for unrecognised records");
        }
    }
}

impl<'a> IntoIterator for &'a Isotopes {
    type Item = (&'a String, &'a Vec<u32>);
    type IntoIter = Iter<'a, String, Vec<u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<u32>)> for Isotopes {
    fn from_iter<T: IntoIterator<Item = (S, Vec<u32>)>>(iter: T) -> Self {
        let mut isotopes = Isotopes::new();
        for (symbol, values) in iter {
            isotopes.merge(symbol, values);
        }
        isotopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_appends_without_deduplication() {
        let mut isotopes = Isotopes::new();
        isotopes.merge("fe", [56]);
        isotopes.merge("fe", [56]);
        assert_eq!(isotopes.get("fe"), Some(&[56, 56][..]));
    }

    #[test]
    fn merge_keeps_first_insertion_order() {
        let mut isotopes = Isotopes::new();
        isotopes.merge("h", [1]);
        isotopes.merge("he", [4]);
        isotopes.merge("h", [2]);

        let symbols: Vec<&str> = isotopes.symbols().collect();
        assert_eq!(symbols, vec!["h", "he"]);
        assert_eq!(isotopes.get("h"), Some(&[1, 2][..]));
    }

    #[test]
    fn remove_unrecognised_keeps_order() {
        let mut isotopes = Isotopes::new();
        isotopes.merge("h", [1]);
        isotopes.merge("", []);
        isotopes.merge("c", [12]);
        isotopes.remove_unrecognised();

        assert!(!isotopes.contains(""));
        let symbols: Vec<&str> = isotopes.symbols().collect();
        assert_eq!(symbols, vec!["h", "c"]);
    }
}
