use session::{ApiClient, BearerToken, Credentials, endpoints};

use super::*;
use crate::test_support::{self, StubApi};

#[test]
fn methods_map_to_reqwest() {
    assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
    assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
}

#[tokio::test]
async fn health_check_reaches_api_root() {
    let base_url = test_support::spawn(StubApi::default()).await;
    let api = ApiClient::new(ReqwestTransport::new(base_url).unwrap());

    assert_eq!(api.health().await.unwrap(), "Health check complete");
}

#[tokio::test]
async fn login_form_round_trips_through_http() {
    let base_url = test_support::spawn(StubApi::default()).await;
    let transport = ReqwestTransport::new(base_url).unwrap();

    let response = transport
        .send(endpoints::login(&Credentials::new("alice", "pw")))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.contains("T-alice"));
}

#[tokio::test]
async fn bearer_header_is_sent_on_reads() {
    let stub = StubApi::default().with_workout(1, "Squat");
    let base_url = test_support::spawn(stub.clone()).await;
    let api = ApiClient::new(ReqwestTransport::new(base_url).unwrap());

    let workouts = api.workouts(&BearerToken::new("T-alice")).await.unwrap();

    assert_eq!(workouts.len(), 1);
    assert_eq!(
        stub.seen(),
        vec![("/workouts/workouts".to_owned(), Some("Bearer T-alice".to_owned()))]
    );
}

#[tokio::test]
async fn rejected_credential_is_unauthorized_not_transport_error() {
    let base_url = test_support::spawn(StubApi::default()).await;
    let api = ApiClient::new(ReqwestTransport::new(base_url).unwrap());

    let err = api.routines(&BearerToken::new("bogus")).await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn unreachable_api_is_transport_error() {
    let api = ApiClient::new(ReqwestTransport::new("http://127.0.0.1:1").unwrap());
    let err = api.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
