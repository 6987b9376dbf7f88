//! Occupancy grid of a network over the chart of nuclides

// external crates
use log::{debug, trace, warn};
use nucnet_network::Isotopes;

// internal modules
use crate::error::{Error, Result};
use crate::tables::{NuclideTable, SymbolTable};

/// Placeholder species with fixed chart positions as `(symbol, z, n, label)`
const PLACEHOLDERS: [(&str, i64, i64, &str); 2] = [("neut", 0, 1, "n"), ("prot", 1, 0, "p")];

/// State of a single (z, n) cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Not a known nuclide
    #[default]
    Empty,
    /// Known nuclide that is not part of the network
    Background,
    /// Nuclide in the network
    Present,
}

impl Cell {
    /// Numeric intensity used for plotting
    ///
    /// ```rust
    /// # use nucnet_chart::Cell;
    /// assert_eq!(Cell::Empty.value(), 0.0);
    /// assert_eq!(Cell::Background.value(), 0.1);
    /// assert_eq!(Cell::Present.value(), 1.0);
    /// ```
    pub fn value(&self) -> f64 {
        match self {
            Cell::Empty => 0.0,
            Cell::Background => 0.1,
            Cell::Present => 1.0,
        }
    }
}

/// Fixed size proton/neutron grid
///
/// Rows are the proton number (z) and columns the neutron number (n). Cells
/// are stored row-major, so the cell for (z, n) is at `n + z * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// Fails if `rows` x `cols` cells cannot be addressed.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = rows
            .checked_mul(cols)
            .ok_or(Error::GridTooLarge { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; size],
        })
    }

    /// Number of rows (proton axis)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (neutron axis)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of (z, n), or `None` if it is not on the grid
    ///
    /// Each axis is checked separately, so a neutron number past the last
    /// column is never wrapped onto the next row.
    ///
    /// ```rust
    /// # use nucnet_chart::Grid;
    /// let grid = Grid::new(10, 20).unwrap();
    /// assert_eq!(grid.index(1, 0), Some(20));
    /// assert_eq!(grid.index(0, 20), None);
    /// assert_eq!(grid.index(-1, 0), None);
    /// ```
    pub fn index(&self, z: i64, n: i64) -> Option<usize> {
        let z = usize::try_from(z).ok().filter(|z| *z < self.rows)?;
        let n = usize::try_from(n).ok().filter(|n| *n < self.cols)?;
        Some(n + z * self.cols)
    }

    /// Cell at (z, n), if on the grid
    pub fn get(&self, z: i64, n: i64) -> Option<Cell> {
        self.index(z, n).map(|i| self.cells[i])
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Numeric values of every cell in row-major order
    pub fn values(&self) -> Vec<f64> {
        self.cells.iter().map(Cell::value).collect()
    }

    /// Numeric values one row (proton number) at a time
    pub fn rows_of_values(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(Cell::value).collect())
    }

    /// Number of cells in a particular state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    fn mark_present(&mut self, z: i64, n: i64) -> Result<()> {
        let i = self.index(z, n).ok_or(Error::OutOfBounds {
            z,
            n,
            rows: self.rows,
            cols: self.cols,
        })?;
        self.cells[i] = Cell::Present;
        Ok(())
    }

    fn mark_background(&mut self, z: i64, n: i64) {
        match self.index(z, n) {
            Some(i) if self.cells[i] == Cell::Empty => self.cells[i] = Cell::Background,
            Some(_) => (),
            None => trace!("background nuclide (z={z}, n={n}) is off the grid"),
        }
    }
}

/// Label for an element, placed just before its lightest isotope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Proton number
    pub z: i64,
    /// Neutron number
    pub n: i64,
    /// Display text, e.g. `Fe`, or `n` and `p` for placeholders
    pub text: String,
}

/// Extent of the network on the chart, used for axis limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Lowest proton number
    pub min_z: i64,
    /// Highest proton number
    pub max_z: i64,
    /// Lowest neutron number
    pub min_n: i64,
    /// Highest neutron number
    pub max_n: i64,
}

impl Bounds {
    fn new(z: i64, n: i64) -> Self {
        Self {
            min_z: z,
            max_z: z,
            min_n: n,
            max_n: n,
        }
    }

    fn extend(&mut self, z: i64, n: i64) {
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
        self.min_n = self.min_n.min(n);
        self.max_n = self.max_n.max(n);
    }
}

/// Everything a renderer needs to draw a network on the chart of nuclides
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Occupancy of every (z, n) cell
    pub grid: Grid,
    /// One label per element drawn
    pub labels: Vec<Label>,
    /// Extent of the network, `None` if nothing was drawn
    pub bounds: Option<Bounds>,
}

/// Build the occupancy grid for a network
///
/// Every isotope in the network is marked [Cell::Present]. Every other
/// nuclide from the `nuclides` table is marked [Cell::Background].
///
/// The `neut` and `prot` placeholders are drawn at (0, 1) and (1, 0). Other
/// symbols are looked up in `symbols`, and are skipped with a warning if
/// unknown.
///
/// Fails if a network isotope does not fit on the `rows` x `cols` grid, if
/// the grid itself is too large, or if either reference table is empty.
///
/// ```rust
/// # use nucnet_chart::{build_chart, Cell, NuclideTable, SymbolTable};
/// # use nucnet_network::Isotopes;
/// let mut isotopes = Isotopes::new();
/// isotopes.merge("he", [3, 4]);
///
/// let nuclides: NuclideTable = [(2, 1), (2, 2), (2, 4)].into_iter().collect();
/// let chart = build_chart(&isotopes, SymbolTable::builtin(), &nuclides, 10, 10).unwrap();
///
/// assert_eq!(chart.grid.get(2, 2), Some(Cell::Present));
/// assert_eq!(chart.grid.get(2, 4), Some(Cell::Background));
/// assert_eq!(chart.labels[0].text, "He");
/// ```
pub fn build_chart(
    isotopes: &Isotopes,
    symbols: &SymbolTable,
    nuclides: &NuclideTable,
    rows: usize,
    cols: usize,
) -> Result<Chart> {
    if symbols.is_empty() {
        return Err(Error::EmptyTable("symbols".to_string()));
    }
    if nuclides.is_empty() {
        return Err(Error::EmptyTable("nuclides".to_string()));
    }

    let mut grid = Grid::new(rows, cols)?;
    let mut labels = Vec::with_capacity(isotopes.len());
    let mut bounds: Option<Bounds> = None;

    for (symbol, masses) in isotopes {
        let Some((z, neutrons, text)) = locate(symbol, masses, symbols) else {
            continue;
        };

        for &n in &neutrons {
            grid.mark_present(z, n)?;
            match bounds.as_mut() {
                Some(b) => b.extend(z, n),
                None => bounds = Some(Bounds::new(z, n)),
            }
        }

        // `locate` never gives an empty list of neutrons
        let lightest = neutrons.iter().min().copied().unwrap_or_default();
        trace!("{text}: z={z}, n={neutrons:?}");
        labels.push(Label {
            z,
            n: lightest - 1,
            text,
        });
    }

    for (z, n) in nuclides.iter() {
        grid.mark_background(z as i64, n as i64);
    }

    debug!(
        "Chart has {} network cells and {} background cells",
        grid.count(Cell::Present),
        grid.count(Cell::Background)
    );

    Ok(Chart {
        grid,
        labels,
        bounds,
    })
}

/// Proton number, neutron numbers, and label text for an element
fn locate(
    symbol: &str,
    masses: &[u32],
    symbols: &SymbolTable,
) -> Option<(i64, Vec<i64>, String)> {
    if let Some((_, z, n, text)) = PLACEHOLDERS.iter().find(|p| p.0 == symbol) {
        return Some((*z, vec![*n], text.to_string()));
    }

    let Some(z) = symbols.atomic_number(symbol) else {
        warn!("No atomic number for \"{symbol}\", skipping");
        return None;
    };

    if masses.is_empty() {
        warn!("No isotopes listed for \"{symbol}\", skipping");
        return None;
    }

    let z = z as i64;
    let neutrons = masses.iter().map(|a| *a as i64 - z).collect();
    Some((z, neutrons, capitalise(symbol)))
}

/// Capitalise the first letter of a symbol
fn capitalise(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_uppercase().collect::<String>() + &c.as_str().to_lowercase(),
        None => String::new(),
    }
}
