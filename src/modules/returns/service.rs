use anyhow::anyhow;
use chrono::{SubsecRound, Utc};
use sqlx::PgPool;
use tracing::{instrument, warn};

use vidly_core::AppError;
use vidly_models::{Rental, RentalRow, ReturnRentalDto};

use crate::metrics::track_rental_returned;
use crate::modules::rentals::service::RENTAL_COLUMNS;

pub struct ReturnService;

impl ReturnService {
    /// Closes out the rental of `movie_id` by `customer_id`.
    ///
    /// Runs as one transaction: the rental row is locked, stamped with the
    /// return date and fee, and the movie goes back into stock. A concurrent
    /// return of the same rental waits on the lock and then sees it as
    /// already returned.
    ///
    /// When a customer has rented the same movie more than once, the open
    /// rental is returned; failing that, the latest one is reported.
    ///
    /// # Errors
    ///
    /// - 404 if no rental matches the customer and movie
    /// - 400 if the rental was already returned
    #[instrument]
    pub async fn return_rental(db: &PgPool, dto: ReturnRentalDto) -> Result<Rental, AppError> {
        let mut tx = db.begin().await?;

        let row = sqlx::query_as::<_, RentalRow>(&format!(
            r#"SELECT {RENTAL_COLUMNS} FROM rentals
               WHERE customer_id = $1 AND movie_id = $2
               ORDER BY (date_returned IS NULL) DESC, date_out DESC
               LIMIT 1
               FOR UPDATE"#
        ))
        .bind(dto.customer_id)
        .bind(dto.movie_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Rental not found")))?;

        let mut rental = Rental::from(row);
        // Postgres stores microseconds; truncate so the response matches
        // what a later read returns.
        rental.mark_returned(Utc::now().trunc_subsecs(6))?;

        sqlx::query("UPDATE rentals SET date_returned = $1, rental_fee = $2 WHERE id = $3")
            .bind(rental.date_returned)
            .bind(rental.rental_fee)
            .bind(rental.id)
            .execute(&mut *tx)
            .await?;

        let restocked =
            sqlx::query("UPDATE movies SET number_in_stock = number_in_stock + 1 WHERE id = $1")
                .bind(rental.movie.id)
                .execute(&mut *tx)
                .await?
                .rows_affected();

        if restocked == 0 {
            warn!(
                movie_id = %rental.movie.id,
                "Returned movie no longer exists; stock not updated"
            );
        }

        tx.commit().await?;
        track_rental_returned(rental.customer.is_gold);

        Ok(rental)
    }
}
