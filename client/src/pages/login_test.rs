use super::*;

#[test]
fn actions_have_distinct_labels() {
    assert_eq!(AuthAction::Login.label(), "Login");
    assert_eq!(AuthAction::Register.label(), "Register");
    assert_ne!(AuthAction::Login.form_class(), AuthAction::Register.form_class());
}

#[test]
fn field_updates_touch_only_their_field() {
    let mut form = CredentialsForm::default();
    CredentialField::Username.apply(&mut form, "bob".to_owned());
    CredentialField::Password.apply(&mut form, "pw123".to_owned());
    assert_eq!(form.username, "bob");
    assert_eq!(form.password, "pw123");

    CredentialField::Username.apply(&mut form, String::new());
    assert_eq!(form.password, "pw123");
}

#[test]
fn blank_username_is_rejected_before_submission() {
    let mut form = CredentialsForm::default();
    CredentialField::Username.apply(&mut form, "   ".to_owned());
    CredentialField::Password.apply(&mut form, "pw".to_owned());
    assert!(form.validate().is_err());
}
