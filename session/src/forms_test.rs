use super::*;

// =============================================================
// CredentialsForm
// =============================================================

#[test]
fn credentials_are_sent_as_typed() {
    let form = CredentialsForm {
        username: " alice ".to_owned(),
        password: " pw ".to_owned(),
    };
    let creds = form.validate().expect("valid");
    assert_eq!(creds.username, " alice ");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn credentials_require_both_fields() {
    let missing_user = CredentialsForm {
        username: "  ".to_owned(),
        password: "pw".to_owned(),
    };
    assert_eq!(missing_user.validate(), Err(FormError::Required("username")));

    let missing_pass = CredentialsForm {
        username: "alice".to_owned(),
        password: String::new(),
    };
    assert_eq!(missing_pass.validate(), Err(FormError::Required("password")));
}

// =============================================================
// WorkoutForm
// =============================================================

#[test]
fn workout_form_requires_name_and_description() {
    assert_eq!(WorkoutForm::default().validate(), Err(FormError::Required("name")));

    let no_description = WorkoutForm {
        name: "Deadlift".to_owned(),
        description: " ".to_owned(),
    };
    assert_eq!(no_description.validate(), Err(FormError::Required("description")));
}

#[test]
fn workout_form_builds_new_workout() {
    let form = WorkoutForm {
        name: " Deadlift ".to_owned(),
        description: "3x5".to_owned(),
    };
    assert_eq!(
        form.validate(),
        Ok(NewWorkout {
            name: "Deadlift".to_owned(),
            description: Some("3x5".to_owned()),
        })
    );
}

#[test]
fn workout_form_clear_resets_fields() {
    let mut form = WorkoutForm {
        name: "a".to_owned(),
        description: "b".to_owned(),
    };
    form.clear();
    assert_eq!(form, WorkoutForm::default());
}

// =============================================================
// RoutineForm
// =============================================================

#[test]
fn routine_toggle_selects_and_deselects() {
    let mut form = RoutineForm::default();
    form.toggle_workout(3);
    form.toggle_workout(1);
    assert_eq!(form.selected, vec![3, 1]);
    assert!(form.is_selected(3));

    form.toggle_workout(3);
    assert_eq!(form.selected, vec![1]);
    assert!(!form.is_selected(3));
}

#[test]
fn routine_selection_is_optional() {
    let form = RoutineForm {
        name: "Pull".to_owned(),
        description: "back day".to_owned(),
        selected: Vec::new(),
    };
    let routine = form.validate().expect("valid");
    assert!(routine.workouts.is_empty());
}

#[test]
fn routine_form_requires_text_fields() {
    let form = RoutineForm {
        name: String::new(),
        description: "x".to_owned(),
        selected: vec![1],
    };
    assert_eq!(form.validate(), Err(FormError::Required("name")));
}

#[test]
fn form_error_message_names_field() {
    assert_eq!(FormError::Required("name").to_string(), "name is required");
}
