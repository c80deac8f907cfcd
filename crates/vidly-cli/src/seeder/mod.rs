//! Fake catalogue data for development databases.
//!
//! Users are never seeded or cleared here; create admins with
//! `create-admin` and register regular users through the API.

mod catalog;
mod customers;
mod models;

pub use catalog::{generate_movies, genre_names, seed_genres, seed_movies};
pub use customers::{generate_customers, seed_customers};
pub use models::{CustomerSeed, MovieSeed, SeedConfig};

use sqlx::PgPool;
use std::time::Instant;

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> anyhow::Result<()> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...\n");

    let genres = seed_genres(db, config.num_genres).await?;
    let movies = seed_movies(db, &genres, config.movies_per_genre).await?;
    let customers = seed_customers(db, config.num_customers).await?;

    println!(
        "\n✅ Seeded {} genres, {} movies and {} customers in {:?}",
        genres.len(),
        movies.len(),
        customers.len(),
        start_time.elapsed()
    );

    Ok(())
}

/// Deletes rentals, movies, genres and customers. Users are kept.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<()> {
    let start_time = Instant::now();
    println!("🗑️  Clearing catalogue data...");

    let mut tx = db.begin().await?;
    for table in ["rentals", "movies", "genres", "customers"] {
        let deleted = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        println!("   ✓ Deleted {} {}", deleted, table);
    }
    tx.commit().await?;

    println!("\n✅ Cleared in {:?}", start_time.elapsed());
    Ok(())
}
