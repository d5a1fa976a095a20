//! In-memory implementation of the user and booking repositories.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithUser, NewBooking, NewUser, User};
use crate::domain::repositories::{BookingRepository, UserRepository};
use crate::error::AppError;

/// A store that keeps users and bookings in insertion order in memory.
///
/// # Use Cases
///
/// - Development without PostgreSQL (`STORAGE=memory`)
/// - HTTP tests that should not need a database
///
/// One instance can back both repositories, which is what makes user
/// expansion possible.
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self {
            users: RwLock::new(Vec::new()),
            bookings: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User::new(
            Uuid::new_v4().to_string(),
            new_user.name,
            new_user.email,
            Utc::now(),
        );

        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.read().await.len() as i64)
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            place_id: new_booking.place_id,
            user_id: new_booking.user_id,
            check_in: new_booking.check_in,
            check_out: new_booking.check_out,
            party_type: new_booking.party_type,
            created_at: Utc::now(),
        };

        self.bookings.write().await.push(booking.clone());
        Ok(booking)
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn find_by_place_with_user(
        &self,
        place_id: &str,
    ) -> Result<Vec<BookingWithUser>, AppError> {
        let matching: Vec<Booking> = self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.place_id == place_id)
            .cloned()
            .collect();

        let users = self.users.read().await;
        let by_id: HashMap<&str, &User> = users.iter().map(|u| (u.id.as_str(), u)).collect();

        Ok(matching
            .into_iter()
            .map(|b| {
                let user = by_id.get(b.user_id.as_str()).map(|u| (*u).clone());
                b.with_user(user)
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.bookings.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
        }
    }

    fn new_booking(place_id: &str, user_id: &str) -> NewBooking {
        NewBooking {
            place_id: place_id.to_string(),
            user_id: user_id.to_string(),
            check_in: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            check_out: Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(),
            party_type: "family".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = MemoryStore::new();

        let a = UserRepository::create(&store, new_user("Alice")).await.unwrap();
        let b = UserRepository::create(&store, new_user("Bob")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(UserRepository::count(&store).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = MemoryStore::new();

        for name in ["Alice", "Bob", "Carol"] {
            UserRepository::create(&store, new_user(name)).await.unwrap();
        }

        let names: Vec<String> = UserRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();

        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[tokio::test]
    async fn test_find_by_place_filters_and_expands() {
        let store = MemoryStore::new();

        let alice = UserRepository::create(&store, new_user("Alice")).await.unwrap();
        BookingRepository::create(&store, new_booking("P1", &alice.id))
            .await
            .unwrap();
        BookingRepository::create(&store, new_booking("P2", &alice.id))
            .await
            .unwrap();

        let found = store.find_by_place_with_user("P1").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].place_id, "P1");
        assert_eq!(found[0].user.as_ref(), Some(&alice));
    }

    #[tokio::test]
    async fn test_find_by_place_with_dangling_user() {
        let store = MemoryStore::new();

        BookingRepository::create(&store, new_booking("P1", "missing-user"))
            .await
            .unwrap();

        let found = store.find_by_place_with_user("P1").await.unwrap();

        assert_eq!(found.len(), 1);
        assert!(found[0].user.is_none());
    }

    #[tokio::test]
    async fn test_find_by_unknown_place_is_empty() {
        let store = MemoryStore::new();

        let found = store.find_by_place_with_user("nowhere").await.unwrap();

        assert!(found.is_empty());
    }
}
