use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;

use vidly_cli::{admin, seeder};
use vidly_models::RegisterUserDto;

#[derive(Parser)]
#[command(name = "vidly-cli")]
#[command(about = "Vidly CLI - Administrative tools for Vidly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new admin account
    CreateAdmin {
        /// Display name of the admin
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake genres, movies, and customers
    Seed {
        /// Number of genres to create
        #[arg(short = 'g', long, default_value = "6")]
        genres: usize,

        /// Number of movies per genre
        #[arg(short = 'm', long, default_value = "10")]
        movies: usize,

        /// Number of customers to create
        #[arg(short = 'c', long, default_value = "50")]
        customers: usize,
    },
    /// Clear rentals, movies, genres and customers (keeps users)
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&pool, name, email, password).await,
        Commands::Seed {
            genres,
            movies,
            customers,
        } => {
            let config = seeder::SeedConfig::new(genres)
                .with_movies_per_genre(movies)
                .with_customers(customers);
            seeder::seed_all(&pool, config).await
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let dto = RegisterUserDto {
        name,
        email,
        password,
    };
    let display = format!("{} <{}>", dto.name, dto.email);

    admin::create_admin(pool, dto)
        .await
        .context("Error creating admin")?;

    println!("\n✅ Admin created successfully!");
    println!("   {}", display);
    Ok(())
}
