//! Recursive reader for MESA network files

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// external crates
use log::{debug, info, trace, warn};

// internal modules
use crate::isotopes::Isotopes;
use crate::legacy::legacy_network;
use crate::parsers::{classify, line_kind, split_species, Line};

/// Standard extension of network files
const EXTENSION: &str = ".net";

/// Prefix of old network names that may be missing the `mesa_` separator
const MESA_PREFIX: &str = "mesa";

/// Marker for names describing the `approx21` network plus extra isotopes
const COMPOUND_MARKER: &str = "approx21";

/// Segment joining the parts of a compound name
const COMPOUND_JOIN: &str = "plus";

/// Read a network file and merge its species into `isotopes`
///
/// The `name` is looked up in `dir`, with the `.net` extension added when
/// missing. Included files are read from the same directory.
///
/// This never fails. A missing file is logged and `isotopes` is handed back
/// as it was, so anything from earlier reads is kept.
///
/// Note that the result may contain an empty symbol for unrecognised records.
/// Use [analyse_network()](crate::analyse_network) for a cleaned up
/// [Network](crate::Network).
///
/// ```rust
/// # use nucnet_network::{read_network, Isotopes};
/// // Legacy networks never touch the file system
/// let isotopes = read_network(Isotopes::new(), "/no/such/dir", "approx21");
/// assert_eq!(isotopes.get("cr"), Some(&[48, 56][..]));
/// ```
pub fn read_network<P: AsRef<Path>>(isotopes: Isotopes, dir: P, name: &str) -> Isotopes {
    Reader::new(dir).read(isotopes, name)
}

/// Reader for a directory of network files
///
/// Keeps track of the chain of files currently being read so that a file
/// which includes itself, directly or not, is only read once.
#[derive(Debug)]
pub struct Reader {
    dir: PathBuf,
    chain: Vec<PathBuf>,
}

impl Reader {
    /// Create a new reader for network files in `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            chain: Vec::new(),
        }
    }

    /// Directory searched for network files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the network `name` and merge the results into `isotopes`
    pub fn read(&mut self, mut isotopes: Isotopes, name: &str) -> Isotopes {
        let name = with_extension(name);

        if let Some(species) = legacy_network(&name) {
            debug!("Using frozen definition for {name}");
            for (symbol, values) in species {
                isotopes.merge(*symbol, values.iter().copied());
            }
            return isotopes;
        }

        let Some(name) = self.resolve(&name) else {
            return isotopes;
        };

        if let Some(base) = compound_base(&name) {
            return self.read_compound(isotopes, base, &name);
        }

        self.read_file(isotopes, &name)
    }

    /// Find the file name that exists, allowing for one correction
    fn resolve(&self, name: &str) -> Option<String> {
        if self.dir.join(name).is_file() {
            return Some(name.to_string());
        }

        if let Some(rest) = name.strip_prefix(MESA_PREFIX) {
            let corrected = format!("{MESA_PREFIX}_{rest}");
            if self.dir.join(&corrected).is_file() {
                info!("Requested network {name} is missing, using {corrected} instead");
                return Some(corrected);
            }
        }

        warn!("Requested network {name} is missing");
        None
    }

    /// Base network plus extra isotopes described by the name alone
    ///
    /// e.g. `approx21_cr60_plus_co56.net`
    fn read_compound(&mut self, isotopes: Isotopes, base: &str, name: &str) -> Isotopes {
        debug!("Reading compound network {name} on top of {base}");
        let mut isotopes = self.read(isotopes, base);

        for segment in name.split('_').skip(1) {
            if segment == COMPOUND_JOIN {
                continue;
            } else if segment.len() > 3 {
                let segment = segment.strip_suffix(EXTENSION).unwrap_or(segment);
                isotopes.merge_record(classify(segment));
            }
        }

        isotopes
    }

    /// Scan the lines of a network file
    fn read_file(&mut self, mut isotopes: Isotopes, name: &str) -> Isotopes {
        let path = self.dir.join(name);
        let key = path.canonicalize().unwrap_or_else(|_| path.clone());

        if self.chain.contains(&key) {
            warn!("Skipping cyclic include of {name}");
            return isotopes;
        }

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Unable to open network {name}: {e}");
                return isotopes;
            }
        };

        info!("Reading {name}");
        self.chain.push(key);

        let mut header_seen = false;
        for (n, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading {name} at line {}: {e}", n + 1);
                    break;
                }
            };

            match line_kind(&line, header_seen) {
                Line::Blank | Line::Comment => continue,
                Line::Include(Some(target)) => {
                    debug!("{name}:{} include {target}", n + 1);
                    isotopes = self.read(isotopes, target);
                }
                Line::Include(None) => {
                    warn!("{name}:{} include without a file name", n + 1);
                }
                Line::AddIso(argument) => {
                    debug!("{name}:{} add_iso({argument})", n + 1);
                    isotopes.merge_record(classify(argument));
                    break;
                }
                Line::AddIsos(arguments) => {
                    debug!("{name}:{} add_isos({arguments})", n + 1);
                    for species in split_species(arguments) {
                        isotopes.merge_record(classify(species));
                    }
                    break;
                }
                Line::Header => {
                    trace!("{name}:{} skipped block header", n + 1);
                    header_seen = true;
                }
                Line::BlockEnd => {
                    trace!("{name}:{} end of block", n + 1);
                    break;
                }
                Line::Record(text) => {
                    let record = classify(text);
                    if record.is_unrecognised() {
                        trace!("{name}:{} unrecognised record {text:?}", n + 1);
                    }
                    isotopes.merge_record(record);
                }
            }
        }

        self.chain.pop();
        isotopes
    }
}

/// Base network of a compound name, e.g. `approx21` for `approx21_plus_co56.net`
///
/// A name without a `_` separator has no base and is read as a plain file.
/// The base is always shorter than the name, so reading it cannot lead back
/// to the same compound name.
fn compound_base(name: &str) -> Option<&str> {
    if !name.contains(COMPOUND_MARKER) {
        return None;
    }
    name.split_once('_').map(|(base, _)| base)
}

/// Append the standard extension if missing
fn with_extension(name: &str) -> String {
    if name.ends_with(EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{EXTENSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_added_once() {
        assert_eq!(with_extension("approx21"), "approx21.net");
        assert_eq!(with_extension("approx21.net"), "approx21.net");
        assert_eq!(with_extension("mesa_80"), "mesa_80.net");
    }

    #[test]
    fn compound_base_needs_separator() {
        assert_eq!(compound_base("approx21_plus_co56.net"), Some("approx21"));
        assert_eq!(compound_base("approx21cr60_plus_co56.net"), Some("approx21cr60"));
        assert_eq!(compound_base("approx21x.net"), None);
        assert_eq!(compound_base("mesa_80.net"), None);
    }

    #[test]
    fn legacy_merges_into_existing() {
        let mut isotopes = Isotopes::new();
        isotopes.merge("fe", [60]);
        isotopes.merge("co", [56]);

        let isotopes = read_network(isotopes, "/no/such/dir", "approx19.net");
        assert_eq!(isotopes.get("fe"), Some(&[60, 52, 54][..]));
        assert_eq!(isotopes.get("co"), Some(&[56][..]));
        assert_eq!(isotopes.len(), 17);
    }

    #[test]
    fn missing_file_returns_input() {
        let mut isotopes = Isotopes::new();
        isotopes.merge("h", [1]);

        let result = read_network(isotopes.clone(), "/no/such/dir", "mesa80");
        assert_eq!(result, isotopes);
    }
}
