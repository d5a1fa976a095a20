//! PostgreSQL implementation of booking repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithUser, NewBooking, User};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: String,
    place_id: String,
    user_id: String,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    party_type: String,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(r: BookingRow) -> Self {
        Booking {
            id: r.id,
            place_id: r.place_id,
            user_id: r.user_id,
            check_in: r.check_in,
            check_out: r.check_out,
            party_type: r.party_type,
            created_at: r.created_at,
        }
    }
}

/// A booking row joined with its (possibly missing) user.
#[derive(sqlx::FromRow)]
struct BookingUserRow {
    #[sqlx(flatten)]
    booking: BookingRow,
    user_name: Option<String>,
    user_email: Option<String>,
    user_created_at: Option<DateTime<Utc>>,
}

impl From<BookingUserRow> for BookingWithUser {
    fn from(r: BookingUserRow) -> Self {
        // The LEFT JOIN yields all-NULL user columns when the user is missing.
        let user = match (r.user_name, r.user_email, r.user_created_at) {
            (Some(name), Some(email), Some(created_at)) => Some(User::new(
                r.booking.user_id.clone(),
                name,
                email,
                created_at,
            )),
            _ => None,
        };

        Booking::from(r.booking).with_user(user)
    }
}

/// PostgreSQL repository for bookings.
///
/// `user_id` has no foreign key; expansion is an explicit LEFT JOIN in
/// [`BookingRepository::find_by_place_with_user`].
pub struct PgBookingRepository {
    pool: Arc<PgPool>,
}

impl PgBookingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (id, place_id, user_id, check_in, check_out, party_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, place_id, user_id, check_in, check_out, party_type, created_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(new_booking.place_id)
        .bind(new_booking.user_id)
        .bind(new_booking.check_in)
        .bind(new_booking.check_out)
        .bind(new_booking.party_type)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, place_id, user_id, check_in, check_out, party_type, created_at
            FROM bookings
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn find_by_place_with_user(
        &self,
        place_id: &str,
    ) -> Result<Vec<BookingWithUser>, AppError> {
        let rows = sqlx::query_as::<_, BookingUserRow>(
            r#"
            SELECT b.id, b.place_id, b.user_id, b.check_in, b.check_out, b.party_type,
                   b.created_at,
                   u.name       AS user_name,
                   u.email      AS user_email,
                   u.created_at AS user_created_at
            FROM bookings b
            LEFT JOIN users u ON u.id = b.user_id
            WHERE b.place_id = $1
            ORDER BY b.created_at, b.id
            "#,
        )
        .bind(place_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(BookingWithUser::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
