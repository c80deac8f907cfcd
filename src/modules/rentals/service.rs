use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vidly_core::AppError;
use vidly_models::{CreateRentalDto, Customer, Movie, MovieRow, Rental, RentalRow};

use crate::metrics::track_rental_created;

pub(crate) const RENTAL_COLUMNS: &str = "id, customer_id, customer_name, customer_phone, \
     customer_is_gold, movie_id, movie_title, movie_daily_rental_rate, date_out, \
     date_returned, rental_fee";

pub struct RentalService;

impl RentalService {
    #[instrument]
    pub async fn get_rentals(db: &PgPool) -> Result<Vec<Rental>, AppError> {
        let rows = sqlx::query_as::<_, RentalRow>(&format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals ORDER BY date_out DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    #[instrument]
    pub async fn get_rental(db: &PgPool, id: Uuid) -> Result<Rental, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(&format!(
            "SELECT {RENTAL_COLUMNS} FROM rentals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow!("The rental with the given ID was not found."))
        })?;

        Ok(row.into())
    }

    /// Rents a movie to a customer.
    ///
    /// The movie row is locked while its stock is checked, and the rental
    /// insert and stock decrement commit together.
    #[instrument]
    pub async fn create_rental(db: &PgPool, dto: CreateRentalDto) -> Result<Rental, AppError> {
        let mut tx = db.begin().await?;

        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customers WHERE id = $1",
        )
        .bind(dto.customer_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow!("Invalid customer.")))?;

        let movie: Movie = sqlx::query_as::<_, MovieRow>(
            r#"SELECT id, title, genre_id, genre_name, number_in_stock, daily_rental_rate
               FROM movies WHERE id = $1
               FOR UPDATE"#,
        )
        .bind(dto.movie_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow!("Invalid movie.")))?
        .into();

        if !movie.in_stock() {
            return Err(AppError::bad_request(anyhow!("Movie not in stock.")));
        }

        let row = sqlx::query_as::<_, RentalRow>(&format!(
            r#"INSERT INTO rentals (
                   customer_id, customer_name, customer_phone, customer_is_gold,
                   movie_id, movie_title, movie_daily_rental_rate
               )
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {RENTAL_COLUMNS}"#
        ))
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(customer.is_gold)
        .bind(movie.id)
        .bind(&movie.title)
        .bind(movie.daily_rental_rate)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE movies SET number_in_stock = number_in_stock - 1 \
             WHERE id = $1 AND number_in_stock > 0",
        )
        .bind(movie.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        track_rental_created();

        Ok(row.into())
    }
}
