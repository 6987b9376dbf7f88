//! Set of parser combinators for network file lines

// nom parser combinators
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{self, alpha1};
use nom::combinator::all_consuming;
use nom::sequence::{pair, preceded};
use nom::IResult;

/// Single species record as written in a network file
///
/// Every string maps to a record. Text that does not match any known shape is
/// returned with an empty symbol and no mass numbers, which the reader drops
/// before handing a network back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    /// Element symbol as written, e.g. `fe`, `neut`
    pub symbol: String,
    /// Mass numbers for the element, may be empty
    pub isotopes: Vec<u32>,
}

impl Record {
    fn new(symbol: &str, isotopes: Vec<u32>) -> Self {
        Self {
            symbol: symbol.to_string(),
            isotopes,
        }
    }

    /// True for the fallback produced by unrecognised text
    pub fn is_unrecognised(&self) -> bool {
        self.symbol.is_empty()
    }
}

/// Classify one record of a network file
///
/// Recognised shapes, first match wins:
///
/// | Shape              | Example    | Result                 |
/// | ------------------ | ---------- | ---------------------- |
/// | bare symbol        | `neut`     | `("neut", [])`         |
/// | symbol and mass    | `fe54`     | `("fe", [54])`         |
/// | symbol and range   | `fe 52 54` | `("fe", [52, 53, 54])` |
///
/// Anything else gives an empty [Record].
///
/// ```rust
/// # use nucnet_network::classify;
/// let record = classify("he 3 4");
/// assert_eq!(record.symbol, "he");
/// assert_eq!(record.isotopes, vec![3, 4]);
///
/// assert!(classify("12fe34bar").is_unrecognised());
/// ```
pub fn classify(text: &str) -> Record {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let result = match tokens.as_slice() {
        [token] => bare_symbol(token).or_else(|_| symbol_with_mass(token)),
        [symbol, start, end] => mass_range(symbol, start, end),
        _ => return Record::default(),
    };

    match result {
        Ok((_, record)) => record,
        Err(_) => Record::default(),
    }
}

/// Purely alphabetic token, e.g. `neut`, `prot`
fn bare_symbol(i: &str) -> IResult<&str, Record> {
    let (i, symbol) = all_consuming(alpha1)(i)?;
    Ok((i, Record::new(symbol, Vec::new())))
}

/// Letters directly followed by a mass number, e.g. `fe54`, `al26-1`
fn symbol_with_mass(i: &str) -> IResult<&str, Record> {
    let (i, (symbol, mass)) = pair(alpha1, complete::u32)(i)?;
    Ok((i, Record::new(symbol, vec![mass])))
}

/// Symbol followed by an inclusive range of mass numbers, e.g. `fe 52 54`
fn mass_range<'a>(symbol: &'a str, start: &'a str, end: &'a str) -> IResult<&'a str, Record> {
    let (_, symbol) = all_consuming(alpha1)(symbol)?;
    let (_, start) = all_consuming(complete::u32)(start)?;
    let (i, end) = all_consuming(complete::u32)(end)?;
    Ok((i, Record::new(symbol, (start..=end).collect())))
}

/// Kinds of line found in a network file
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Empty or whitespace only
    Blank,
    /// Full line comment starting with `!`
    Comment,
    /// Inclusion of another network file by name
    Include(Option<&'a str>),
    /// `add_iso(...)` with its argument
    AddIso(&'a str),
    /// `add_isos(...)` with its full argument list
    AddIsos(&'a str),
    /// Opening line of a species block with no content of its own
    Header,
    /// Closing parenthesis of a species block
    BlockEnd,
    /// Anything else, inline comments removed
    Record(&'a str),
}

/// Identify the kind of line
///
/// The opening `add_isos(` or `add_isos_and_reactions(` of a block is only
/// treated as a header while `header_seen` is false.
pub(crate) fn line_kind(line: &str, header_seen: bool) -> Line<'_> {
    if line.trim().is_empty() {
        Line::Blank
    } else if line.trim_start().starts_with('!') {
        Line::Comment
    } else if line.contains("include") {
        Line::Include(include_target(line))
    } else if let Some(argument) = call_argument(line, "add_iso(") {
        Line::AddIso(argument)
    } else if let Some(argument) = call_argument(line, "add_isos(") {
        Line::AddIsos(argument)
    } else if !header_seen && is_block_header(line) {
        Line::Header
    } else if line.contains(')') {
        Line::BlockEnd
    } else {
        Line::Record(strip_comment(line))
    }
}

/// Name of the file in an include directive, quotes removed
///
/// e.g. `include 'basic.net'` gives `basic.net`
pub(crate) fn include_target(line: &str) -> Option<&str> {
    line.split_whitespace()
        .nth(1)
        .map(|target| target.trim_matches(|c| c == '\'' || c == '"'))
        .filter(|target| !target.is_empty())
}

/// Text between the opening of `call` and the next closing parenthesis
///
/// Only matches when the closing parenthesis is on the same line.
pub(crate) fn call_argument<'a>(line: &'a str, call: &str) -> Option<&'a str> {
    call_parser(line, call).ok().map(|(_, argument)| argument)
}

fn call_parser<'a>(i: &'a str, call: &str) -> IResult<&'a str, &'a str> {
    let (i, _) = preceded(take_until(call), tag(call))(i)?;
    take_until(")")(i)
}

/// Split a multi-species argument list on comma-space boundaries
pub(crate) fn split_species(argument: &str) -> impl Iterator<Item = &str> {
    argument.split(", ")
}

/// Opening of an `add_isos(` or `add_isos_and_reactions(` block
fn is_block_header(line: &str) -> bool {
    line.contains("add_isos(") || line.contains("add_isos_and_reactions(")
}

/// Everything before an inline `!` comment
fn strip_comment(line: &str) -> &str {
    line.split_once('!').map_or(line, |(content, _)| content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, isotopes: Vec<u32>) -> Record {
        Record::new(symbol, isotopes)
    }

    #[test]
    fn classify_bare_symbol() {
        assert_eq!(classify("neut"), record("neut", vec![]));
        assert_eq!(classify("  prot  "), record("prot", vec![]));
    }

    #[test]
    fn classify_symbol_with_mass() {
        assert_eq!(classify("fe54"), record("fe", vec![54]));
        assert_eq!(classify("h2"), record("h", vec![2]));
        assert_eq!(classify("al26-1"), record("al", vec![26]));
    }

    #[test]
    fn classify_mass_range() {
        assert_eq!(classify("he 3 4"), record("he", vec![3, 4]));
        assert_eq!(classify("fe 52 54"), record("fe", vec![52, 53, 54]));
        assert_eq!(classify("c 12 12"), record("c", vec![12]));
        // descending ranges are empty rather than reversed
        assert_eq!(classify("c 13 12"), record("c", vec![]));
    }

    #[test]
    fn classify_unrecognised() {
        assert_eq!(classify("12fe34bar"), Record::default());
        assert_eq!(classify(""), Record::default());
        assert_eq!(classify("54"), Record::default());
        assert_eq!(classify("fe 52"), Record::default());
        assert_eq!(classify("fe 52 x"), Record::default());
        assert_eq!(classify("fe2 52 54"), Record::default());
        assert_eq!(classify("fe 52 54 56"), Record::default());
        assert!(classify("add_iso(").is_unrecognised());
    }

    #[test]
    fn line_kinds() {
        assert_eq!(line_kind("\n", false), Line::Blank);
        assert_eq!(line_kind("    ", false), Line::Blank);
        assert_eq!(line_kind("   ! comment", false), Line::Comment);
        assert_eq!(
            line_kind("      include 'basic.net'", false),
            Line::Include(Some("basic.net"))
        );
        assert_eq!(line_kind("include", false), Line::Include(None));
        assert_eq!(line_kind("   add_iso(fe56)", false), Line::AddIso("fe56"));
        assert_eq!(
            line_kind("add_isos(h1, he 3 4)", true),
            Line::AddIsos("h1, he 3 4")
        );
        assert_eq!(line_kind("   add_isos(", false), Line::Header);
        assert_eq!(line_kind("add_isos_and_reactions(", false), Line::Header);
        assert_eq!(line_kind("   )", false), Line::BlockEnd);
        assert_eq!(line_kind("  fe56 ! iron", false), Line::Record("  fe56 "));
        assert_eq!(line_kind("  fe56", false), Line::Record("  fe56"));
    }

    #[test]
    fn header_only_recognised_once() {
        // without a closing parenthesis a second header is just a record
        assert_eq!(line_kind("add_isos(", true), Line::Record("add_isos("));
    }

    #[test]
    fn call_argument_needs_closing_parenthesis() {
        assert_eq!(call_argument("add_iso(co56)", "add_iso("), Some("co56"));
        assert_eq!(call_argument("add_iso(co56", "add_iso("), None);
        assert_eq!(call_argument("add_isos(co56)", "add_iso("), None);
    }

    #[test]
    fn split_species_on_comma_space() {
        let pieces: Vec<&str> = split_species("h1, he 3 4, neut").collect();
        assert_eq!(pieces, vec!["h1", "he 3 4", "neut"]);
    }
}
