//! Line grammars recognized by the scanner.
//!
//! Only two line shapes matter; everything else in a shader file (passes,
//! CG/HLSL blocks, tags) is ignored. Both matchers are anchored to the whole
//! line and return borrowed captures.

use std::sync::LazyLock;

use regex::Regex;

/// `Shader "<name>"`. The capture is greedy up to the last quote on the line.
static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*Shader\s+"(.+)""#).expect("shader name pattern is valid")
});

/// `<ws>[attrs]<key> ("<description>", <type>) = <initializer>`.
static PROPERTY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s+(?:\[[^\]]*\]\s*)*([^\s\[\]("]+)\s*\(\s*"([^"]*)"\s*,\s*(.+?)\s*\)\s*=\s*(.+?)\s*$"#,
    )
    .expect("property pattern is valid")
});

/// `Range(<min>,<max>)`, anywhere inside a type token.
static RANGE_BOUNDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Range\((.+),(.+)\)").expect("range pattern is valid"));

/// Captures of a property declaration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyLine<'a> {
    /// Identifier before the parenthesis, e.g. `_MainTex`.
    pub key: &'a str,
    /// Quoted display text, without the quotes.
    pub description: &'a str,
    /// Raw type token, e.g. `2D` or `Range(0,1)`.
    pub type_token: &'a str,
    /// Everything after `=`, trailing whitespace trimmed.
    pub initializer: &'a str,
}

/// Matches a `Shader "<name>"` line and returns the name.
pub fn match_name_line(line: &str) -> Option<&str> {
    NAME_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Matches a property declaration line.
pub fn match_property_line(line: &str) -> Option<PropertyLine<'_>> {
    let caps = PROPERTY_LINE.captures(line)?;
    Some(PropertyLine {
        key: caps.get(1)?.as_str(),
        description: caps.get(2)?.as_str(),
        type_token: caps.get(3)?.as_str(),
        initializer: caps.get(4)?.as_str(),
    })
}

/// Extracts the trimmed `(min, max)` text from a token containing
/// `Range(<min>,<max>)`. Returns `None` if either bound is missing.
pub fn match_range_bounds(token: &str) -> Option<(&str, &str)> {
    let caps = RANGE_BOUNDS.captures(token)?;
    let min = caps.get(1)?.as_str().trim();
    let max = caps.get(2)?.as_str().trim();
    if min.is_empty() || max.is_empty() {
        return None;
    }
    Some((min, max))
}
