use crate::api::extractors::auth_token::cookie_value;

#[test]
fn test_cookie_value_finds_named_cookie() {
    assert_eq!(cookie_value("authToken=abc123", "authToken"), Some("abc123"));
    assert_eq!(
        cookie_value("theme=dark; authToken=abc123; lang=en", "authToken"),
        Some("abc123")
    );
}

#[test]
fn test_cookie_value_ignores_other_cookies() {
    assert_eq!(cookie_value("theme=dark; lang=en", "authToken"), None);
    // Name must match exactly, not as a prefix
    assert_eq!(cookie_value("authTokenOld=abc123", "authToken"), None);
}

#[test]
fn test_cookie_value_skips_empty_values() {
    assert_eq!(cookie_value("authToken=", "authToken"), None);
    assert_eq!(cookie_value("", "authToken"), None);
}
