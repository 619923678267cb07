//! In-process stub of the workout API for CLI tests.
//!
//! Accepts any username with password `pw` and issues `T-<username>`. Every
//! protected route records the `Authorization` header it saw and rejects
//! anything that is not one of its tokens.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{Value, json};

type Rejection = (StatusCode, Json<Value>);

#[derive(Clone, Default)]
pub struct StubApi {
    seen: Arc<Mutex<Vec<(String, Option<String>)>>>,
    registered: Arc<Mutex<Vec<String>>>,
    workouts: Arc<Mutex<Vec<Value>>>,
    routines: Arc<Mutex<Vec<Value>>>,
}

impl StubApi {
    /// `(path, Authorization header)` of every protected request.
    pub fn seen(&self) -> Vec<(String, Option<String>)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().unwrap().clone()
    }

    pub fn with_workout(self, id: i64, name: &str) -> Self {
        self.workouts
            .lock()
            .unwrap()
            .push(json!({ "id": id, "user_id": 1, "name": name, "description": "stub" }));
        self
    }

    fn authorize(&self, path: &str, headers: &HeaderMap) -> Result<(), Rejection> {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        self.seen.lock().unwrap().push((path.to_owned(), authorization.clone()));
        match authorization {
            Some(value) if value.starts_with("Bearer T-") => Ok(()),
            _ => Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Could not validate user" })),
            )),
        }
    }
}

/// Serve `stub` on an ephemeral local port; returns its base URL.
pub async fn spawn(stub: StubApi) -> String {
    let app = Router::new()
        .route("/", get(health))
        .route("/auth/token", post(token))
        .route("/auth", post(register))
        .route("/workouts/workouts", get(list_workouts))
        .route("/workouts", post(create_workout))
        .route("/workouts/", get(get_workout).delete(delete_workout))
        .route("/routines", get(list_routines).post(create_routine))
        .route("/routines/", axum::routing::delete(delete_routine))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn health() -> Json<Value> {
    Json(json!("Health check complete"))
}

async fn token(Form(form): Form<HashMap<String, String>>) -> Result<Json<Value>, Rejection> {
    let username = form.get("username").cloned().unwrap_or_default();
    if form.get("password").map(String::as_str) != Some("pw") || username.is_empty() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Could not validate user" })),
        ));
    }
    Ok(Json(json!({ "access_token": format!("T-{username}"), "token_type": "bearer" })))
}

async fn register(State(stub): State<StubApi>, Json(body): Json<Value>) -> StatusCode {
    let username = body["username"].as_str().unwrap_or_default().to_owned();
    stub.registered.lock().unwrap().push(username);
    StatusCode::CREATED
}

async fn list_workouts(State(stub): State<StubApi>, headers: HeaderMap) -> Result<Json<Value>, Rejection> {
    stub.authorize("/workouts/workouts", &headers)?;
    Ok(Json(Value::Array(stub.workouts.lock().unwrap().clone())))
}

async fn create_workout(
    State(stub): State<StubApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), Rejection> {
    stub.authorize("/workouts", &headers)?;
    let mut workouts = stub.workouts.lock().unwrap();
    let created = json!({
        "id": workouts.len() + 1,
        "user_id": 1,
        "name": body["name"],
        "description": body["description"],
    });
    workouts.push(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

fn find_index(items: &[Value], id: Option<&String>) -> Option<usize> {
    let id: i64 = id?.parse().ok()?;
    items.iter().position(|item| item["id"].as_i64() == Some(id))
}

async fn get_workout(
    State(stub): State<StubApi>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, Rejection> {
    stub.authorize("/workouts/", &headers)?;
    let workouts = stub.workouts.lock().unwrap();
    let found = find_index(&workouts, query.get("workout_id")).map(|i| workouts[i].clone());
    Ok(Json(found.unwrap_or(Value::Null)))
}

async fn delete_workout(
    State(stub): State<StubApi>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, Rejection> {
    stub.authorize("/workouts/", &headers)?;
    let mut workouts = stub.workouts.lock().unwrap();
    let removed = find_index(&workouts, query.get("workout_id")).map(|i| workouts.remove(i));
    Ok(Json(removed.unwrap_or(Value::Null)))
}

async fn list_routines(State(stub): State<StubApi>, headers: HeaderMap) -> Result<Json<Value>, Rejection> {
    stub.authorize("/routines", &headers)?;
    Ok(Json(Value::Array(stub.routines.lock().unwrap().clone())))
}

async fn create_routine(
    State(stub): State<StubApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, Rejection> {
    stub.authorize("/routines", &headers)?;
    let ids: Vec<i64> = body["workouts"]
        .as_array()
        .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();
    let embedded: Vec<Value> = stub
        .workouts
        .lock()
        .unwrap()
        .iter()
        .filter(|w| w["id"].as_i64().is_some_and(|id| ids.contains(&id)))
        .cloned()
        .collect();
    let mut routines = stub.routines.lock().unwrap();
    let created = json!({
        "id": routines.len() + 1,
        "user_id": 1,
        "name": body["name"],
        "description": body["description"],
        "workouts": embedded,
    });
    routines.push(created.clone());
    Ok(Json(created))
}

async fn delete_routine(
    State(stub): State<StubApi>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, Rejection> {
    stub.authorize("/routines/", &headers)?;
    let mut routines = stub.routines.lock().unwrap();
    let removed = find_index(&routines, query.get("routine_id")).map(|i| routines.remove(i));
    Ok(Json(removed.unwrap_or(Value::Null)))
}
