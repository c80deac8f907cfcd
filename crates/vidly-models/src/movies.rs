//! Movie models and DTOs.
//!
//! A movie stores a snapshot of its genre (id and name) taken when the movie
//! is created or updated, so listing movies never joins on `genres`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Flat database row for the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: Uuid,
    pub title: String,
    pub genre_id: Uuid,
    pub genre_name: String,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieGenre {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub genre: MovieGenre,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

impl Movie {
    pub fn in_stock(&self) -> bool {
        self.number_in_stock > 0
    }
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            genre: MovieGenre {
                id: row.genre_id,
                name: row.genre_name,
            },
            number_in_stock: row.number_in_stock,
            daily_rental_rate: row.daily_rental_rate,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[validate(length(min = 5, max = 50, message = "title must be between 5 and 50 characters"))]
    pub title: String,
    pub genre_id: Uuid,
    #[validate(range(min = 0, max = 255, message = "numberInStock must be between 0 and 255"))]
    pub number_in_stock: i32,
    #[validate(range(
        exclusive_min = 0.0,
        max = 255.0,
        message = "dailyRentalRate must be greater than 0 and at most 255"
    ))]
    pub daily_rental_rate: f64,
}
