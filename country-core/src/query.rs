//! Turning a committed search term into service filters.

use crate::types::SearchParams;

/// Pick the filters for a free-text search term.
///
/// A term that reads as a number or contains `UTC` is a timezone lookup.
/// Anything else is sent as both `name` and `capital`; the service ANDs
/// them, so only countries whose name and first capital both contain the
/// term come back.
pub fn search_params_for(term: &str) -> SearchParams {
    if is_numeric(term) || term.contains("UTC") {
        SearchParams {
            timezone: Some(term.to_string()),
            ..Default::default()
        }
    } else {
        SearchParams {
            name: Some(term.to_string()),
            capital: Some(term.to_string()),
            ..Default::default()
        }
    }
}

/// Whether the term reads as a number in the web front end's sense: decimal
/// or exponent literals, `0x`/`0o`/`0b` integers, or a signed `Infinity`.
/// Rust-only spellings such as `inf` and `nan` do not count.
fn is_numeric(term: &str) -> bool {
    let trimmed = term.trim();
    if let Some((radix, digits)) = radix_literal(trimmed) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return true;
    }
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && trimmed.parse::<f64>().is_ok()
}

fn radix_literal(term: &str) -> Option<(u32, &str)> {
    let prefix = term.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &term[2..]))
}
