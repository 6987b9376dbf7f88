//! Reference tables for the chart of nuclides

// standard library
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

// external crates
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;

// internal modules
use crate::error::{Error, Result};

/// Element symbols in order of atomic number, starting at hydrogen
const ELEMENTS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

// Only ever build the periodic table once on first use
static BUILTIN: OnceLock<SymbolTable> = OnceLock::new();

/// Lookup of element symbol to atomic number
///
/// Lookups ignore case, so `fe`, `Fe` and `FE` are all iron.
///
/// ```rust
/// # use nucnet_chart::SymbolTable;
/// let table = SymbolTable::builtin();
/// assert_eq!(table.atomic_number("fe"), Some(26));
/// assert_eq!(table.atomic_number("Og"), Some(118));
/// assert_eq!(table.atomic_number("neut"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable(HashMap<String, u32>);

impl SymbolTable {
    /// Periodic table of every named element
    pub fn builtin() -> &'static SymbolTable {
        BUILTIN.get_or_init(|| {
            ELEMENTS
                .iter()
                .zip(1..)
                .map(|(symbol, z)| (symbol.to_string(), z))
                .collect()
        })
    }

    /// Read a CSV file with `Symbol` and `AtomicNumber` columns
    ///
    /// Any other columns are ignored.
    ///
    /// ```rust, no_run
    /// # use nucnet_chart::SymbolTable;
    /// let table = SymbolTable::from_csv("sources/periodicTableNames.csv").unwrap();
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading symbol table {}", path.display());

        let table = csv_reader(path)?
            .deserialize::<SymbolRow>()
            .map(|row| row.map(|r| (r.symbol, r.atomic_number)))
            .collect::<core::result::Result<SymbolTable, csv::Error>>()?;

        if table.is_empty() {
            return Err(Error::EmptyTable(path.display().to_string()));
        }
        Ok(table)
    }

    /// Atomic number of an element symbol, if known
    pub fn atomic_number(&self, symbol: &str) -> Option<u32> {
        self.0.get(&symbol.to_lowercase()).copied()
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no symbols
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(symbol, z)| (symbol.as_ref().to_lowercase(), z))
                .collect(),
        )
    }
}

/// Every known nuclide as `(z, n)` pairs
///
/// This is the background of the chart of nuclides, typically the NuDat
/// ground state export from the National Nuclear Data Center.
///
/// ```rust
/// # use nucnet_chart::NuclideTable;
/// let table: NuclideTable = [(1, 0), (1, 1), (2, 2)].into_iter().collect();
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NuclideTable(Vec<(u32, u32)>);

impl NuclideTable {
    /// Read a CSV file with `z` and `n` columns
    ///
    /// Any other columns are ignored, so the NuDat export can be used as is.
    ///
    /// ```rust, no_run
    /// # use nucnet_chart::NuclideTable;
    /// let table = NuclideTable::from_csv("sources/nndc_nudat_data_export.csv").unwrap();
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading nuclide table {}", path.display());

        let table = csv_reader(path)?
            .deserialize::<NuclideRow>()
            .map(|row| row.map(|r| (r.z, r.n)))
            .collect::<core::result::Result<NuclideTable, csv::Error>>()?;

        if table.is_empty() {
            return Err(Error::EmptyTable(path.display().to_string()));
        }
        Ok(table)
    }

    /// Iterate over `(z, n)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Number of nuclides in the table
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no nuclides
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, u32)> for NuclideTable {
    fn from_iter<T: IntoIterator<Item = (u32, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Deserialize)]
struct SymbolRow {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "AtomicNumber")]
    atomic_number: u32,
}

#[derive(Debug, Deserialize)]
struct NuclideRow {
    z: u32,
    n: u32,
}

fn csv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    Ok(ReaderBuilder::new().trim(Trim::All).from_path(path)?)
}
