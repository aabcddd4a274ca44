use super::GenerateError;
use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s*(b|k|kb|m|mb|g|gb)?\s*$").expect("size pattern is valid")
});

/// Parse a file size such as `"1kb"` or `"4MB"` into bytes.
///
/// Units are binary (`1kb` = 1024 bytes) and case-insensitive; a bare
/// number is a byte count.
pub fn parse_file_size(input: &str) -> Result<u64, GenerateError> {
    let invalid = || GenerateError::InvalidFileSize(input.to_string());

    let caps = SIZE_PATTERN.captures(input).ok_or_else(invalid)?;
    let value: u64 = caps[1].parse().map_err(|_| invalid())?;

    let multiplier: u64 = match caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .as_deref()
    {
        None | Some("b") => 1,
        Some("k") | Some("kb") => 1 << 10,
        Some("m") | Some("mb") => 1 << 20,
        Some("g") | Some("gb") => 1 << 30,
        Some(_) => return Err(invalid()),
    };

    value.checked_mul(multiplier).ok_or_else(invalid)
}
