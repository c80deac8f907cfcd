use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use vidly_core::ErrorResponse;
use vidly_models::{
    CreateRentalDto, Customer, CustomerDto, Genre, GenreDto, LoginRequest, LoginResponse, Movie,
    MovieDto, MovieGenre, RegisterUserDto, Rental, RentalCustomer, RentalMovie, ReturnRentalDto,
    User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genres::controller::get_genres,
        crate::modules::genres::controller::get_genre,
        crate::modules::genres::controller::create_genre,
        crate::modules::genres::controller::update_genre,
        crate::modules::genres::controller::delete_genre,
        crate::modules::movies::controller::get_movies,
        crate::modules::movies::controller::get_movie,
        crate::modules::movies::controller::create_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
        crate::modules::customers::controller::get_customers,
        crate::modules::customers::controller::get_customer,
        crate::modules::customers::controller::create_customer,
        crate::modules::customers::controller::update_customer,
        crate::modules::customers::controller::delete_customer,
        crate::modules::rentals::controller::get_rentals,
        crate::modules::rentals::controller::get_rental,
        crate::modules::rentals::controller::create_rental,
        crate::modules::returns::controller::return_rental,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_current_user,
        crate::modules::auth::controller::login_user,
    ),
    components(
        schemas(
            ErrorResponse,
            Genre,
            GenreDto,
            Movie,
            MovieGenre,
            MovieDto,
            Customer,
            CustomerDto,
            Rental,
            RentalCustomer,
            RentalMovie,
            CreateRentalDto,
            ReturnRentalDto,
            User,
            RegisterUserDto,
            LoginRequest,
            LoginResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Genres", description = "Movie genres"),
        (name = "Movies", description = "Movie catalogue and stock"),
        (name = "Customers", description = "Customer records"),
        (name = "Rentals", description = "Renting movies out"),
        (name = "Returns", description = "Returning rentals and computing fees"),
        (name = "Users", description = "User registration and profile"),
        (name = "Authentication", description = "Login")
    ),
    info(
        title = "Vidly API",
        version = "0.1.0",
        description = "Movie rental backend built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "auth_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-auth-token"))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/genres",
            "/api/genres/{id}",
            "/api/movies",
            "/api/movies/{id}",
            "/api/customers",
            "/api/customers/{id}",
            "/api/rentals",
            "/api/rentals/{id}",
            "/api/returns",
            "/api/users",
            "/api/users/me",
            "/api/auth",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn test_openapi_declares_token_header_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("auth_token"));
    }
}
