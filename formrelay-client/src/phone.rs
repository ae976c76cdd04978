//! Phone normalization
//!
//! Subscriber numbers are normalized to `+<dial code><digits>` before they
//! enter the payload. The country comes from geolocation (see [`crate::geo`])
//! unless the user overrides it.

/// Countries pinned to the top of the country picker.
pub const PREFERRED_COUNTRIES: &[&str] = &["NG", "GB", "US", "GH", "ZA"];

/// Countries the form can normalize for, preferred ones first.
pub const DIAL_CODES: &[(&str, &str)] = &[
    ("NG", "234"),
    ("GB", "44"),
    ("US", "1"),
    ("GH", "233"),
    ("ZA", "27"),
    ("KE", "254"),
    ("FR", "33"),
    ("DE", "49"),
    ("IN", "91"),
    ("AE", "971"),
];

/// Dial code for an ISO country code (case-insensitive).
pub fn dial_code(country: &str) -> Option<&'static str> {
    let country = country.to_ascii_uppercase();
    DIAL_CODES
        .iter()
        .find(|(iso, _)| *iso == country)
        .map(|(_, code)| *code)
}

/// Normalize a raw subscriber number to international format.
///
/// A number already starting with `+` keeps its own country prefix. A
/// national number is stripped of separators and its leading trunk zero,
/// then prefixed with the country's dial code. Returns `None` when no
/// digits survive or the country is unknown.
pub fn normalize(country: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    if trimmed.starts_with('+') {
        return Some(format!("+{}", digits));
    }

    let code = dial_code(country)?;
    let national = digits.trim_start_matches('0');
    if national.is_empty() {
        return None;
    }

    Some(format!("+{}{}", code, national))
}
