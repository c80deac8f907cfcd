//! Genre and movie seeding.

use fake::Fake;
use fake::faker::lorem::en::Words;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use uuid::Uuid;

use vidly_models::Genre;

use super::models::MovieSeed;

const GENRE_NAMES: &[&str] = &[
    "Action",
    "Comedy",
    "Drama",
    "Horror",
    "Thriller",
    "Romance",
    "Documentary",
    "Animation",
    "Science Fiction",
    "Western",
];

/// Genre names to seed. Capped at the number of known genres.
pub fn genre_names(count: usize) -> Vec<&'static str> {
    GENRE_NAMES.iter().take(count).copied().collect()
}

fn movie_title() -> String {
    let words: Vec<String> = Words(2..5).fake();
    let mut title = words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if title.chars().count() < 5 {
        title.push_str(" Returns");
    }
    title.chars().take(50).collect()
}

pub fn generate_movies(count: usize) -> Vec<MovieSeed> {
    (0..count)
        .map(|_| MovieSeed {
            title: movie_title(),
            number_in_stock: (0..20).fake(),
            // Whole cents, between 0.50 and 5.00
            daily_rental_rate: (50..=500).fake::<i32>() as f64 / 100.0,
        })
        .collect()
}

pub async fn seed_genres(db: &PgPool, count: usize) -> anyhow::Result<Vec<Genre>> {
    let start_time = Instant::now();
    let names = genre_names(count);
    println!("🎬 Seeding {} genres...", names.len());

    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO genres (name) ");
    builder.push_values(&names, |mut row, name| {
        row.push_bind(*name);
    });
    builder.push(" RETURNING id, name");

    let genres = builder.build_query_as::<Genre>().fetch_all(db).await?;

    println!(
        "   ✓ Inserted {} genres in {:?}",
        genres.len(),
        start_time.elapsed()
    );

    Ok(genres)
}

pub async fn seed_movies(
    db: &PgPool,
    genres: &[Genre],
    movies_per_genre: usize,
) -> anyhow::Result<Vec<Uuid>> {
    let start_time = Instant::now();
    println!("📼 Seeding {} movies...", genres.len() * movies_per_genre);

    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(genres.len() * movies_per_genre);

    for genre in genres {
        let movies = generate_movies(movies_per_genre);
        if movies.is_empty() {
            continue;
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO movies (title, genre_id, genre_name, number_in_stock, daily_rental_rate) ",
        );
        builder.push_values(&movies, |mut row, movie| {
            row.push_bind(&movie.title)
                .push_bind(genre.id)
                .push_bind(&genre.name)
                .push_bind(movie.number_in_stock)
                .push_bind(movie.daily_rental_rate);
        });
        builder.push(" RETURNING id");

        let ids: Vec<Uuid> = builder
            .build_query_scalar::<Uuid>()
            .fetch_all(&mut *tx)
            .await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} movies in {:?}",
        all_ids.len(),
        start_time.elapsed()
    );

    Ok(all_ids)
}
