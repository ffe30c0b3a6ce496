//! Field names accepted by the search API.

/// Every field the API can search on, in the order the API documents them.
pub const FIELD_CATALOG: [&str; 10] = [
    "email",
    "password",
    "domain",
    "username",
    "ip",
    "name",
    "uuid",
    "steamid",
    "phone",
    "discordid",
];

/// Check whether `name` is a recognized field.
///
/// Matching is exact: callers are expected to pass already-normalized
/// (trimmed, lowercase) names.
pub fn is_valid_field(name: &str) -> bool {
    FIELD_CATALOG.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_members_are_valid() {
        for field in FIELD_CATALOG {
            assert!(is_valid_field(field), "{} should be valid", field);
        }
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(!is_valid_field("bogus"));
        assert!(!is_valid_field(""));
        assert!(!is_valid_field("e-mail"));
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(!is_valid_field("Email"));
        assert!(!is_valid_field(" email"));
    }
}
