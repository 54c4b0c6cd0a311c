use subtle::ConstantTimeEq;

/// Compare a caller-supplied secret against the expected one in constant
/// time (for equal lengths).
///
/// An empty expected secret never matches, so an unset server secret cannot
/// be satisfied by an empty submission.
pub fn secure_compare(expected: &str, provided: &str) -> bool {
    let expected_bytes = expected.as_bytes();
    let provided_bytes = provided.as_bytes();

    if expected_bytes.is_empty() || expected_bytes.len() != provided_bytes.len() {
        return false;
    }

    expected_bytes.ct_eq(provided_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_secrets() {
        assert!(secure_compare("open-sesame", "open-sesame"));
    }

    #[test]
    fn mismatched_secrets() {
        assert!(!secure_compare("open-sesame", "open-sesamE"));
        assert!(!secure_compare("open-sesame", "open"));
        assert!(!secure_compare("open-sesame", ""));
    }

    #[test]
    fn empty_expected_never_matches() {
        assert!(!secure_compare("", ""));
        assert!(!secure_compare("", "anything"));
    }
}
