use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vidly_core::AppError;
use vidly_models::{Genre, GenreDto};

pub struct GenreService;

impl GenreService {
    #[instrument]
    pub async fn get_genres(db: &PgPool) -> Result<Vec<Genre>, AppError> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(db)
            .await?;

        Ok(genres)
    }

    #[instrument]
    pub async fn get_genre(db: &PgPool, id: Uuid) -> Result<Genre, AppError> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(genre_not_found)
    }

    #[instrument]
    pub async fn create_genre(db: &PgPool, dto: GenreDto) -> Result<Genre, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&dto.name)
        .fetch_one(db)
        .await?;

        Ok(genre)
    }

    #[instrument]
    pub async fn update_genre(db: &PgPool, id: Uuid, dto: GenreDto) -> Result<Genre, AppError> {
        sqlx::query_as::<_, Genre>("UPDATE genres SET name = $1 WHERE id = $2 RETURNING id, name")
            .bind(&dto.name)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(genre_not_found)
    }

    #[instrument]
    pub async fn delete_genre(db: &PgPool, id: Uuid) -> Result<Genre, AppError> {
        sqlx::query_as::<_, Genre>("DELETE FROM genres WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(genre_not_found)
    }
}

fn genre_not_found() -> AppError {
    AppError::not_found(anyhow!("The genre with the given ID was not found."))
}
