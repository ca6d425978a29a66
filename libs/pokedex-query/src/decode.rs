//! Decoding of raw query-string values.
//!
//! Malformed input never fails: it decodes to `None` and the attribute is
//! left unconstrained.

/// Decode a `"0"`/`"1"` flag.
///
/// Strict three-way switch: `"0"` is `false`, `"1"` is `true`, and every
/// other value (including `""`, `"true"`, `"2"` and absence) is `None`.
pub fn decode_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("0") => Some(false),
        Some("1") => Some(true),
        _ => None,
    }
}

/// Parse a National Pokédex Number.
///
/// A value that is not an integer yields `None` rather than an error.
pub fn decode_pokedex_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

/// Collapse an optional string into `None` when it is absent.
///
/// Empty strings are kept: a request carrying `form=` is
/// matched literally.
pub fn decode_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::to_string)
}
