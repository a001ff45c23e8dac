//! Field extraction for lines of the locations list, e.g.
//!
//! ```text
//! Film Title (2015)			Lviv, Ukraine	(studio)
//! ```

/// Characters between the film title and the year token, usually ` (`.
const TITLE_GAP: usize = 2;
/// Offset from the start of the year token to the location fragment.
const FRAGMENT_OFFSET: usize = 5;

#[derive(Debug, PartialEq)]
pub struct ParsedLine {
    pub film: String,
    pub location: String,
}

/// Last of the longest pieces, counted in chars.
fn longest<'a>(pieces: impl Iterator<Item = &'a str>) -> &'a str {
    let mut best = "";
    let mut best_len = 0;
    for piece in pieces {
        let len = piece.chars().count();
        if len >= best_len {
            best = piece;
            best_len = len;
        }
    }
    best
}

/// Best guess of the place name in a location fragment.
///
/// Takes the longest piece between `)` separators, then the longest piece
/// of that between `(` separators. Annotations that are longer than the
/// place itself win, so `" (Lviv) (Ukraine)"` gives `"Ukraine"`.
pub fn location_name(fragment: &str) -> String {
    let outer = longest(fragment.split(')'));
    longest(outer.split('(')).trim().to_string()
}

/// Splits a line into film title and location name for the given year.
/// Returns `None` when the year does not occur on the line.
pub fn parse_line(line: &str, year: i32) -> Option<ParsedLine> {
    let line = line.trim();
    let year = year.to_string();
    let byte_idx = line.find(&year)?;
    let idx = line[..byte_idx].chars().count();

    let film: String = line
        .chars()
        .take(idx.saturating_sub(TITLE_GAP))
        .collect();
    let fragment: String = line.chars().skip(idx + FRAGMENT_OFFSET).collect();

    Some(ParsedLine {
        film,
        location: location_name(&fragment),
    })
}
