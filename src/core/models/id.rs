//! Record identifiers

use uuid::Uuid;

/// Canonical textual form of an identifier, used for every equality check
/// between ids that may have travelled through different representations
/// (token claims, path segments, stored columns).
///
/// Anything that parses as a UUID (hyphenated, simple, braced or urn, any
/// case) becomes its lowercase hyphenated form. Other text is trimmed and
/// lowercased.
pub fn canonical_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match Uuid::parse_str(trimmed) {
        Ok(id) => id.hyphenated().to_string(),
        Err(_) => trimmed.to_lowercase(),
    }
}

/// Parse a path segment into a record id; `None` means no record can match.
pub fn parse_record_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
