use super::*;
use crate::request::{Method, RequestBody};

fn token() -> BearerToken {
    BearerToken::new("T")
}

#[test]
fn login_posts_form_without_authorization() {
    let req = login(&Credentials::new("alice", "pw"));
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/token");
    assert_eq!(req.authorization, None);
    assert_eq!(req.encoded_body().as_deref(), Some("username=alice&password=pw"));
}

#[test]
fn register_posts_json_credentials() {
    let req = register(&Credentials::new("bob", "pw123")).expect("request");
    assert_eq!(req.path, "/auth");
    assert_eq!(
        req.body,
        RequestBody::Json(serde_json::json!({ "username": "bob", "password": "pw123" }))
    );
    assert_eq!(req.authorization, None);
}

#[test]
fn reads_carry_bearer() {
    for req in [list_workouts(&token()), list_routines(&token())] {
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.authorization_header().as_deref(), Some("Bearer T"));
    }
    assert_eq!(list_workouts(&token()).path, "/workouts/workouts");
    assert_eq!(list_routines(&token()).path, "/routines");
}

#[test]
fn writes_carry_bearer() {
    let workout = create_workout(
        &token(),
        &NewWorkout { name: "Squat".to_owned(), description: Some("5x5".to_owned()) },
    )
    .expect("request");
    assert_eq!(workout.path, "/workouts");
    assert_eq!(workout.authorization_header().as_deref(), Some("Bearer T"));

    let routine = create_routine(
        &token(),
        &NewRoutine { name: "Legs".to_owned(), description: None, workouts: vec![1, 2] },
    )
    .expect("request");
    assert_eq!(routine.path, "/routines");
    assert_eq!(routine.authorization_header().as_deref(), Some("Bearer T"));
}

#[test]
fn item_endpoints_use_id_queries() {
    assert_eq!(get_workout(&token(), 5).url(""), "/workouts/?workout_id=5");
    assert_eq!(delete_workout(&token(), 5).url(""), "/workouts/?workout_id=5");
    assert_eq!(delete_workout(&token(), 5).method, Method::Delete);
    assert_eq!(delete_routine(&token(), 9).url(""), "/routines/?routine_id=9");
}

#[test]
fn health_is_unauthenticated_get_root() {
    let req = health();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/");
    assert_eq!(req.authorization, None);
}
