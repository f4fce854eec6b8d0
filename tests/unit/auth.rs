use incubator_backend::validation::rules::{
    validate_password_strength, validate_username_format,
};

#[test]
fn password_strength_rules() {
    assert!(validate_password_strength("Str0ng!pass").is_ok());
    assert!(validate_password_strength("abc").is_err());
    assert!(validate_password_strength("alllowercase").is_err());
}

#[test]
fn username_format_rules() {
    assert!(validate_username_format("ada_lovelace").is_ok());
    assert!(validate_username_format("ada-1843").is_ok());
    assert!(validate_username_format("1ada").is_err());
    assert!(validate_username_format("ada lovelace").is_err());
    assert!(validate_username_format("").is_err());
}
