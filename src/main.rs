//! Command line tool for inspecting MESA nuclear networks
//!
//! Prints the species of a network as JSON, and can optionally write the
//! occupancy grid over the chart of nuclides for plotting elsewhere.

// standard library
use std::path::{Path, PathBuf};

// external crates
use clap::{ArgAction, Parser};
use log::{error, info};

// nucnet crates
use nucnet::chart::{build_chart, Chart, NuclideTable, SymbolTable};
use nucnet::network::{analyse_network, NetworkSource};

/// Read a MESA nuclear network and map it onto the chart of nuclides
#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help(true))]
struct Cli {
    /// Network name, with or without the .net extension
    network: String,

    /// Directory containing the network files [default: current directory]
    #[arg(short, long, value_name = "path")]
    #[arg(conflicts_with = "mesa")]
    dir: Option<PathBuf>,

    /// Search the $MESA_DIR installation tree
    #[arg(short, long)]
    mesa: bool,

    /// Symbol table CSV with Symbol and AtomicNumber columns
    #[arg(long, value_name = "path")]
    symbols: Option<PathBuf>,

    /// Chart of nuclides CSV with z and n columns
    #[arg(long, value_name = "path")]
    nuclides: Option<PathBuf>,

    /// Number of grid rows (proton axis)
    #[arg(long, default_value_t = 200)]
    rows: usize,

    /// Number of grid columns (neutron axis)
    #[arg(long, default_value_t = 200)]
    cols: usize,

    /// Write the occupancy grid as CSV
    #[arg(long, value_name = "path", requires = "nuclides")]
    grid: Option<PathBuf>,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn source(&self) -> NetworkSource {
        match (&self.dir, self.mesa) {
            (_, true) => NetworkSource::Mesa,
            (Some(dir), false) => NetworkSource::Directory(dir.clone()),
            (None, false) => NetworkSource::CurrentDir,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    stderrlog::new()
        .modules(["nucnet", "nucnet_network", "nucnet_chart"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 2)
        .init()?;

    let network = analyse_network(&cli.network, &cli.source())?;
    println!("{}", serde_json::to_string_pretty(&network)?);

    let Some(nuclides) = &cli.nuclides else {
        return Ok(());
    };

    let nuclides = NuclideTable::from_csv(nuclides)?;
    let chart = match &cli.symbols {
        Some(path) => {
            let symbols = SymbolTable::from_csv(path)?;
            build_chart(&network.isotopes, &symbols, &nuclides, cli.rows, cli.cols)?
        }
        None => build_chart(
            &network.isotopes,
            SymbolTable::builtin(),
            &nuclides,
            cli.rows,
            cli.cols,
        )?,
    };

    summarise(&chart);

    if let Some(path) = &cli.grid {
        write_grid(&chart, path)?;
    }

    Ok(())
}

fn summarise(chart: &Chart) {
    if let Some(b) = chart.bounds {
        info!("Proton range  {} - {}", b.min_z, b.max_z);
        info!("Neutron range {} - {}", b.min_n, b.max_n);
    }
    for label in &chart.labels {
        info!("  {:<4} z={:<4} n={}", label.text, label.z, label.n);
    }
}

/// One line per proton number, one value per neutron number
fn write_grid(chart: &Chart, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    for row in chart.grid.rows_of_values() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;

    info!("Grid written to {}", path.display());
    Ok(())
}
