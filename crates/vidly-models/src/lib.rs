//! # Vidly Models
//!
//! Domain models and DTOs for the Vidly API.
//!
//! Database rows are flat (`*Row` types deriving `FromRow`); API types nest
//! embedded snapshots and serialize with camelCase keys.
//!
//! # Modules
//!
//! - [`auth`]: Login request and token response
//! - [`customers`]: Customers and the gold-member flag
//! - [`genres`]: Movie genres
//! - [`movies`]: Movies with an embedded genre snapshot and stock level
//! - [`rentals`]: Rentals, rental-fee calculation and return DTOs
//! - [`users`]: Registered users

pub mod auth;
pub mod customers;
pub mod genres;
pub mod movies;
pub mod rentals;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse};
pub use customers::{Customer, CustomerDto};
pub use genres::{Genre, GenreDto};
pub use movies::{Movie, MovieDto, MovieGenre, MovieRow};
pub use rentals::{
    CreateRentalDto, GOLD_DISCOUNT, Rental, RentalCustomer, RentalMovie, RentalRow,
    ReturnRentalDto,
};
pub use users::{RegisterUserDto, User};
