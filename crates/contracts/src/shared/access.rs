/// Compare the token from the URL with the one configured at build time.
///
/// No configured (or empty) token means the gate is open. This is a deterrent
/// only: the token ships with the client bundle.
pub fn is_access_granted(expected: Option<&str>, provided: Option<&str>) -> bool {
    match expected.map(str::trim).filter(|t| !t.is_empty()) {
        None => true,
        Some(token) => provided == Some(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_open_without_token() {
        assert!(is_access_granted(None, None));
        assert!(is_access_granted(Some(""), None));
        assert!(is_access_granted(None, Some("anything")));
    }

    #[test]
    fn test_gate_requires_exact_token() {
        assert!(is_access_granted(Some("s3cret"), Some("s3cret")));
        assert!(!is_access_granted(Some("s3cret"), Some("S3CRET")));
        assert!(!is_access_granted(Some("s3cret"), None));
    }
}
