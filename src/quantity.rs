//! Quantities

/// Normalises a raw quantity string.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer (empty input, letters, negative numbers, fractions, values too large to
/// represent) counts as zero, meaning "not ordered".
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
