//! Finalised networks and where to find them

// standard library
use std::path::{Path, PathBuf};

// external crates
use log::{debug, info};
use serde::Serialize;

// internal modules
use crate::error::{Error, Result};
use crate::isotopes::Isotopes;
use crate::reader::Reader;

/// Location of network files within a MESA installation, relative to
/// `MESA_DIR`
const MESA_NETS: [&str; 3] = ["data", "net_data", "nets"];

/// Where to look for network files
///
/// The standard MESA installation tree is the usual place, but networks can
/// just as easily be read from the working directory or anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkSource {
    /// `$MESA_DIR/data/net_data/nets`
    Mesa,
    /// The current working directory
    CurrentDir,
    /// Any other directory
    Directory(PathBuf),
}

impl NetworkSource {
    /// Resolve the directory to search
    ///
    /// ```rust
    /// # use nucnet_network::NetworkSource;
    /// # use std::path::PathBuf;
    /// let source = NetworkSource::Directory(PathBuf::from("/path/to/nets"));
    /// assert_eq!(source.dir().unwrap(), PathBuf::from("/path/to/nets"));
    /// ```
    pub fn dir(&self) -> Result<PathBuf> {
        match self {
            NetworkSource::Mesa => {
                let root = std::env::var_os("MESA_DIR").ok_or(Error::MissingMesaDir)?;
                Ok(MESA_NETS.iter().fold(PathBuf::from(root), |p, d| p.join(d)))
            }
            NetworkSource::CurrentDir => Ok(std::env::current_dir()?),
            NetworkSource::Directory(path) => Ok(path.clone()),
        }
    }
}

impl From<&Path> for NetworkSource {
    fn from(path: &Path) -> Self {
        NetworkSource::Directory(path.to_path_buf())
    }
}

impl From<PathBuf> for NetworkSource {
    fn from(path: PathBuf) -> Self {
        NetworkSource::Directory(path)
    }
}

/// A fully read nuclear network
///
/// The [Isotopes] hold every species found, with records that could not be
/// recognised already removed. The `name` records which network was asked
/// for, exactly as requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    /// Network name as requested, e.g. `mesa_80`
    pub name: String,
    /// Element symbols and their mass numbers
    pub isotopes: Isotopes,
}

impl Network {
    /// Finalise the results of a read
    pub fn new<S: Into<String>>(name: S, mut isotopes: Isotopes) -> Self {
        isotopes.remove_unrecognised();
        Self {
            name: name.into(),
            isotopes,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Network {}", self.name)?;
        for (symbol, isotopes) in &self.isotopes {
            writeln!(f, "  {symbol:<6} {isotopes:?}")?;
        }
        Ok(())
    }
}

/// Read and finalise a network
///
/// Looks for `name` in the directory given by `source`, reading every include
/// along the way.
///
/// Failing to find the network file is not an error and will result in an
/// empty network and a warning. Only a `source` that cannot be resolved is
/// returned as an error.
///
/// ```rust, no_run
/// # use nucnet_network::{analyse_network, NetworkSource};
/// // Read the 80 isotope network from the local MESA installation
/// let network = analyse_network("mesa_80", &NetworkSource::Mesa).unwrap();
/// println!("{network}");
/// ```
pub fn analyse_network(name: &str, source: &NetworkSource) -> Result<Network> {
    let dir = source.dir()?;
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir));
    }
    debug!("Searching for networks in {}", dir.display());

    let isotopes = Reader::new(&dir).read(Isotopes::new(), name);
    let network = Network::new(name, isotopes);

    info!(
        "Network {} has {} elements, {} species",
        network.name,
        network.isotopes.len(),
        network.isotopes.species_count()
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalise_removes_empty_symbol() {
        let mut isotopes = Isotopes::new();
        isotopes.merge("", []);
        isotopes.merge("neut", []);

        let network = Network::new("test", isotopes);
        assert!(!network.isotopes.contains(""));
        assert!(network.isotopes.contains("neut"));
        assert_eq!(network.name, "test");
    }
}
