use crate::{AuthProvider, CoreError, NewIdentity};

fn jane() -> NewIdentity {
    NewIdentity {
        email: Some("a@x.com".to_string()),
        phone_number: None,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        auth_provider: AuthProvider::Local,
    }
}

#[test]
fn test_valid_registration_passes_validation() {
    assert!(jane().validate().is_ok());
}

#[test]
fn test_identifier_prefers_email_over_phone() {
    let mut reg = jane();
    reg.phone_number = Some("+15551234567".to_string());
    assert_eq!(reg.identifier(), Some("a@x.com"));

    reg.email = None;
    assert_eq!(reg.identifier(), Some("+15551234567"));
}

#[test]
fn test_missing_identifier_fails_validation() {
    let mut reg = jane();
    reg.email = None;
    reg.phone_number = None;
    assert!(matches!(
        reg.validate(),
        Err(CoreError::Validation { field: None, .. })
    ));
}

#[test]
fn test_empty_email_with_phone_is_accepted() {
    let mut reg = jane();
    reg.email = Some(String::new());
    reg.phone_number = Some("+15551234567".to_string());
    assert!(reg.validate().is_ok());
    assert_eq!(reg.identifier(), Some("+15551234567"));
}

#[test]
fn test_malformed_email_fails_validation() {
    for bad in ["not-an-email", "@x.com", "a@", "a@nodot", "a@.com", "a@x."] {
        let mut reg = jane();
        reg.email = Some(bad.to_string());
        let err = reg.validate().unwrap_err();
        match err {
            CoreError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("email"), "input: {bad}")
            }
            other => panic!("expected validation error for {bad}, got {other}"),
        }
    }
}

#[test]
fn test_blank_names_fail_validation() {
    let mut reg = jane();
    reg.first_name = "  ".to_string();
    assert!(matches!(
        reg.validate(),
        Err(CoreError::Validation { field: Some(f), .. }) if f == "firstName"
    ));

    let mut reg = jane();
    reg.last_name = String::new();
    assert!(matches!(
        reg.validate(),
        Err(CoreError::Validation { field: Some(f), .. }) if f == "lastName"
    ));
}

#[test]
fn test_into_identity_zeroes_counters_and_flags() {
    let identity = jane().into_identity(1);

    assert_eq!(identity.id, 1);
    assert_eq!(identity.identifier(), "a@x.com");
    assert_eq!(identity.first_name, "Jane");
    assert_eq!(identity.last_name, "Doe");
    assert_eq!(identity.auth_provider, AuthProvider::Local);
    assert!(!identity.is_email_verified);
    assert!(!identity.is_phone_verified);
    assert_eq!(identity.total_points, 0);
    assert_eq!(identity.total_co2_saved, 0.0);
    assert!(identity.profile_image_url.is_none());
    assert!(identity.company_id.is_none());
}
