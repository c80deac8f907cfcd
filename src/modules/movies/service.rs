use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vidly_core::AppError;
use vidly_models::{Genre, Movie, MovieDto, MovieRow};

const MOVIE_COLUMNS: &str = "id, title, genre_id, genre_name, number_in_stock, daily_rental_rate";

pub struct MovieService;

impl MovieService {
    /// Looks up the genre a movie is being written with, so its name can be
    /// snapshotted onto the movie row.
    async fn resolve_genre(db: &PgPool, genre_id: Uuid) -> Result<Genre, AppError> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(genre_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::bad_request(anyhow!("Invalid genre.")))
    }

    #[instrument]
    pub async fn get_movies(db: &PgPool) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY title"
        ))
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    #[instrument]
    pub async fn get_movie(db: &PgPool, id: Uuid) -> Result<Movie, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("The movie with the given ID was not found.")))?;

        Ok(row.into())
    }

    #[instrument]
    pub async fn create_movie(db: &PgPool, dto: MovieDto) -> Result<Movie, AppError> {
        let genre = Self::resolve_genre(db, dto.genre_id).await?;

        let row = sqlx::query_as::<_, MovieRow>(&format!(
            r#"INSERT INTO movies (title, genre_id, genre_name, number_in_stock, daily_rental_rate)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {MOVIE_COLUMNS}"#
        ))
        .bind(&dto.title)
        .bind(genre.id)
        .bind(&genre.name)
        .bind(dto.number_in_stock)
        .bind(dto.daily_rental_rate)
        .fetch_one(db)
        .await?;

        Ok(row.into())
    }

    /// Replaces a movie's fields and refreshes its genre snapshot.
    #[instrument]
    pub async fn update_movie(db: &PgPool, id: Uuid, dto: MovieDto) -> Result<Movie, AppError> {
        let genre = Self::resolve_genre(db, dto.genre_id).await?;

        let row = sqlx::query_as::<_, MovieRow>(&format!(
            r#"UPDATE movies
               SET title = $1, genre_id = $2, genre_name = $3,
                   number_in_stock = $4, daily_rental_rate = $5
               WHERE id = $6
               RETURNING {MOVIE_COLUMNS}"#
        ))
        .bind(&dto.title)
        .bind(genre.id)
        .bind(&genre.name)
        .bind(dto.number_in_stock)
        .bind(dto.daily_rental_rate)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("The movie with the given ID was not found.")))?;

        Ok(row.into())
    }

    #[instrument]
    pub async fn delete_movie(db: &PgPool, id: Uuid) -> Result<Movie, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "DELETE FROM movies WHERE id = $1 RETURNING {MOVIE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("The movie with the given ID was not found.")))?;

        Ok(row.into())
    }
}
