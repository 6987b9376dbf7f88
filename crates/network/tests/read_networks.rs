//! Integration tests for reading network files

use nucnet_network::{analyse_network, read_network, Isotopes, Network, NetworkSource};
use rstest::{fixture, rstest};

const NETS: &str = "./data/nets";

fn source() -> NetworkSource {
    NetworkSource::Directory(NETS.into())
}

#[fixture]
fn basic() -> Network {
    analyse_network("basic", &source()).unwrap()
}

#[rstest]
fn basic_block(basic: Network) {
    let isotopes = &basic.isotopes;
    let symbols: Vec<&str> = isotopes.symbols().collect();
    assert_eq!(symbols, vec!["neut", "h", "prot", "he", "c", "n", "o"]);

    assert_eq!(isotopes.get("neut"), Some(&[][..]));
    assert_eq!(isotopes.get("he"), Some(&[3, 4][..]));
    assert_eq!(isotopes.get("n"), Some(&[13, 14, 15][..]));

    // everything after the closing parenthesis is ignored
    assert!(!isotopes.contains("ne"));
    assert_eq!(basic.name, "basic");
}

#[rstest]
fn unrecognised_records_are_dropped(basic: Network) {
    let raw = read_network(Isotopes::new(), NETS, "basic");
    assert!(raw.contains(""));
    assert!(!basic.isotopes.contains(""));
}

#[rstest]
fn include_matches_direct_read(basic: Network) {
    let included = analyse_network("include_basic", &source()).unwrap();
    assert_eq!(included.isotopes, basic.isotopes);
}

#[rstest]
#[case("approx19")]
#[case("approx19.net")]
fn approx19_is_frozen(#[case] name: &str) {
    // a directory that does not exist proves there is no file access
    let source = NetworkSource::Directory("/no/such/directory".into());
    let network = analyse_network(name, &source).unwrap();

    // 16 species plus the network name
    assert_eq!(network.isotopes.len() + 1, 17);
    assert_eq!(network.isotopes.get("fe"), Some(&[52, 54][..]));
    assert_eq!(network.isotopes.get("neut"), Some(&[][..]));
    assert!(!network.isotopes.contains("prot"));
}

#[rstest]
#[case("approx20", &[52, 54, 56], &[48])]
#[case("approx21", &[52, 54, 56], &[48, 56])]
fn approx_variants(#[case] name: &str, #[case] fe: &[u32], #[case] cr: &[u32]) {
    let isotopes = read_network(Isotopes::new(), NETS, name);
    assert_eq!(isotopes.len(), 16);
    assert_eq!(isotopes.get("fe"), Some(fe));
    assert_eq!(isotopes.get("cr"), Some(cr));
}

#[test]
fn single_add_stops_reading() {
    let isotopes = read_network(Isotopes::new(), NETS, "single_add");
    assert_eq!(isotopes.len(), 1);
    assert_eq!(isotopes.get("fe"), Some(&[56][..]));
}

#[test]
fn single_add_twice_is_not_deduplicated() {
    let isotopes = read_network(Isotopes::new(), NETS, "single_add");
    let isotopes = read_network(isotopes, NETS, "single_add");
    assert_eq!(isotopes.get("fe"), Some(&[56, 56][..]));
}

#[test]
fn multi_add_stops_reading() {
    let isotopes = read_network(Isotopes::new(), NETS, "multi_add");
    let symbols: Vec<&str> = isotopes.symbols().collect();
    assert_eq!(symbols, vec!["h", "he", "neut", "fe"]);
    assert_eq!(isotopes.get("he"), Some(&[3, 4][..]));
    assert!(!isotopes.contains("c"));
}

#[test]
fn nested_includes_accumulate() {
    let network = analyse_network("nested", &source()).unwrap();
    let isotopes = &network.isotopes;

    // appended in file order across files
    assert_eq!(isotopes.get("h"), Some(&[1, 2][..]));
    assert_eq!(isotopes.get("fe"), Some(&[56, 52, 53, 54][..]));

    // the missing include does not lose anything read before or after it
    assert_eq!(isotopes.get("o"), Some(&[16][..]));
    assert_eq!(isotopes.symbols().last(), Some("fe"));
}

#[test]
fn missing_network_is_unchanged() {
    let mut isotopes = Isotopes::new();
    isotopes.merge("h", [1]);

    let result = read_network(isotopes.clone(), NETS, "not_a_network");
    assert_eq!(result, isotopes);

    let network = analyse_network("not_a_network", &source()).unwrap();
    assert!(network.isotopes.is_empty());
}

#[test]
fn mesa_prefix_is_corrected() {
    let isotopes = read_network(Isotopes::new(), NETS, "mesatest");
    assert_eq!(isotopes.get("he"), Some(&[4][..]));
    assert_eq!(isotopes.get("c"), Some(&[12][..]));
}

#[test]
fn reactions_header_is_skipped() {
    let isotopes = read_network(Isotopes::new(), NETS, "reactions");
    let symbols: Vec<&str> = isotopes.symbols().collect();
    assert_eq!(symbols, vec!["he", "c"]);
}

#[test]
fn cyclic_includes_are_read_once() {
    let isotopes = read_network(Isotopes::new(), NETS, "cycle_a");
    assert_eq!(isotopes.get("c"), Some(&[12][..]));
    assert_eq!(isotopes.get("o"), Some(&[16][..]));
}

#[rstest]
#[case("approx21_plus_co56", &[48, 56])]
#[case("approx21_cr60_plus_co56", &[48, 56, 60])]
fn compound_names(#[case] name: &str, #[case] cr: &[u32]) {
    let network = analyse_network(name, &source()).unwrap();
    assert_eq!(network.isotopes.get("co"), Some(&[56][..]));
    assert_eq!(network.isotopes.get("cr"), Some(cr));
    assert!(!network.isotopes.contains("plus"));
    assert_eq!(network.isotopes.len(), 17);
}

#[test]
fn compound_marker_without_separator_is_a_plain_file() {
    let isotopes = read_network(Isotopes::new(), NETS, "approx21x");
    let symbols: Vec<&str> = isotopes.symbols().collect();
    assert_eq!(symbols, vec!["h"]);
}

#[test]
fn compound_base_named_like_a_compound() {
    let isotopes = read_network(Isotopes::new(), NETS, "approx21cr60_plus_co56");
    let symbols: Vec<&str> = isotopes.symbols().collect();
    assert_eq!(symbols, vec!["fe", "co"]);
    assert_eq!(isotopes.get("fe"), Some(&[56][..]));
    assert_eq!(isotopes.get("co"), Some(&[56][..]));
}

#[test]
fn compound_name_needs_a_file() {
    let isotopes = read_network(Isotopes::new(), NETS, "approx21_plus_ni58");
    assert!(isotopes.is_empty());
}
