//! Rental models, fee calculation, and rental/return DTOs.
//!
//! A rental embeds a snapshot of the customer and the movie as they were when
//! the rental was created. `date_returned` and `rental_fee` start out empty
//! and are filled in together, once, when the movie comes back.

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;
use vidly_core::AppError;

/// Fee multiplier applied for gold customers.
pub const GOLD_DISCOUNT: f64 = 0.9;

/// Flat database row for the `rentals` table.
#[derive(Debug, Clone, FromRow)]
pub struct RentalRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_is_gold: bool,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub movie_daily_rental_rate: f64,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalCustomer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalMovie {
    pub id: Uuid,
    pub title: String,
    pub daily_rental_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: Uuid,
    pub customer: RentalCustomer,
    pub movie: RentalMovie,
    pub date_out: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
    pub rental_fee: Option<f64>,
}

impl Rental {
    pub fn is_returned(&self) -> bool {
        self.date_returned.is_some()
    }

    /// Whole days elapsed between `date_out` and `now`, rounded down.
    pub fn rental_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.date_out).num_days().max(0)
    }

    /// Fee owed if the rental were returned at `now`.
    pub fn calculate_fee(&self, now: DateTime<Utc>) -> f64 {
        let multiplier = if self.customer.is_gold {
            GOLD_DISCOUNT
        } else {
            1.0
        };
        self.rental_days(now) as f64 * self.movie.daily_rental_rate * multiplier
    }

    /// Marks the rental as returned at `now`, setting the return date and
    /// the fee together.
    ///
    /// # Errors
    ///
    /// Returns a bad request error if the rental was already returned; the
    /// rental is left untouched in that case.
    pub fn mark_returned(&mut self, now: DateTime<Utc>) -> Result<(), AppError> {
        if self.is_returned() {
            return Err(AppError::bad_request(anyhow!("Rental already returned")));
        }

        self.rental_fee = Some(self.calculate_fee(now));
        self.date_returned = Some(now);
        Ok(())
    }
}

impl From<RentalRow> for Rental {
    fn from(row: RentalRow) -> Self {
        Self {
            id: row.id,
            customer: RentalCustomer {
                id: row.customer_id,
                name: row.customer_name,
                phone: row.customer_phone,
                is_gold: row.customer_is_gold,
            },
            movie: RentalMovie {
                id: row.movie_id,
                title: row.movie_title,
                daily_rental_rate: row.movie_daily_rental_rate,
            },
            date_out: row.date_out,
            date_returned: row.date_returned,
            rental_fee: row.rental_fee,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalDto {
    pub customer_id: Uuid,
    pub movie_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRentalDto {
    pub customer_id: Uuid,
    pub movie_id: Uuid,
}
