//! Seed records and seeding configuration.

/// Seed data for a movie, before its genre is known by id.
pub struct MovieSeed {
    pub title: String,
    pub number_in_stock: i32,
    pub daily_rental_rate: f64,
}

/// Seed data for a customer.
pub struct CustomerSeed {
    pub name: String,
    pub phone: String,
    pub is_gold: bool,
}

/// Configuration for database seeding.
#[derive(Clone)]
pub struct SeedConfig {
    pub num_genres: usize,
    pub movies_per_genre: usize,
    pub num_customers: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_genres: 6,
            movies_per_genre: 10,
            num_customers: 50,
        }
    }
}

impl SeedConfig {
    /// Creates a configuration with the given number of genres.
    pub fn new(num_genres: usize) -> Self {
        Self {
            num_genres,
            ..Default::default()
        }
    }

    pub fn with_movies_per_genre(mut self, movies_per_genre: usize) -> Self {
        self.movies_per_genre = movies_per_genre;
        self
    }

    pub fn with_customers(mut self, num_customers: usize) -> Self {
        self.num_customers = num_customers;
        self
    }
}
