//! # Vidly CLI
//!
//! Administrative commands and database seeding for Vidly development.
//!
//! ## Usage
//!
//! ```ignore
//! use vidly_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(8).with_customers(50);
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
