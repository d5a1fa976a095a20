#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use place_bookings::AppError;
use place_bookings::api::routes::resource_routes;
use place_bookings::domain::entities::{Booking, BookingWithUser, NewBooking, NewUser, User};
use place_bookings::domain::repositories::{BookingRepository, UserRepository};
use place_bookings::infrastructure::memory::MemoryStore;
use place_bookings::infrastructure::persistence::{PgBookingRepository, PgUserRepository};
use place_bookings::routes::app_router;
use place_bookings::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

/// State backed by a fresh in-memory store.
pub fn create_test_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    AppState::new(store.clone(), store, "memory")
}

/// State backed by PostgreSQL.
pub fn create_pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        Arc::new(PgBookingRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool)),
        "postgres",
    )
}

/// State whose store fails every call.
pub fn create_failing_state() -> AppState {
    let store = Arc::new(FailingStore);
    AppState::new(store.clone(), store, "failing")
}

/// Test server over the booking and user routes.
pub fn make_server(state: AppState) -> TestServer {
    let app: Router = resource_routes().with_state(state);
    TestServer::new(app).unwrap()
}

/// Test server over the full application router, as served by `server::run`.
pub fn make_app_server(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub fn alice() -> Value {
    json!({ "name": "Alice", "email": "a@x.com" })
}

pub fn booking_body(place_id: &str, user_id: &str) -> Value {
    json!({
        "placeId": place_id,
        "userId": user_id,
        "CheckIn": "2024-01-01",
        "CheckOut": "2024-01-03",
        "PartyType": "couple"
    })
}

/// Creates a user through the API and returns its id.
pub async fn create_user(server: &TestServer, body: &Value) -> String {
    server
        .post("/users")
        .json(body)
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let users = server.get("/users").await.json::<Value>();
    let name = body["name"].as_str().unwrap();
    users
        .as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|u| u["name"] == name)
        .and_then(|u| u["_id"].as_str())
        .unwrap()
        .to_string()
}

fn store_down() -> AppError {
    AppError::internal("Database error", json!({ "reason": "store is down" }))
}

/// Repository that fails every call, used to check the error path.
pub struct FailingStore;

#[async_trait]
impl UserRepository for FailingStore {
    async fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(store_down())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Err(store_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(store_down())
    }
}

#[async_trait]
impl BookingRepository for FailingStore {
    async fn create(&self, _new_booking: NewBooking) -> Result<Booking, AppError> {
        Err(store_down())
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Err(store_down())
    }

    async fn find_by_place_with_user(
        &self,
        _place_id: &str,
    ) -> Result<Vec<BookingWithUser>, AppError> {
        Err(store_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(store_down())
    }
}
