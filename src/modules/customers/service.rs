use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use vidly_core::AppError;
use vidly_models::{Customer, CustomerDto};

fn customer_not_found() -> AppError {
    AppError::not_found(anyhow!("The customer with the given ID was not found."))
}

pub struct CustomerService;

impl CustomerService {
    #[instrument]
    pub async fn get_customers(db: &PgPool) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customers ORDER BY name",
        )
        .fetch_all(db)
        .await?;

        Ok(customers)
    }

    #[instrument]
    pub async fn get_customer(db: &PgPool, id: Uuid) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, is_gold FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(customer_not_found)
    }

    #[instrument]
    pub async fn create_customer(db: &PgPool, dto: CustomerDto) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"INSERT INTO customers (name, phone, is_gold)
               VALUES ($1, $2, $3)
               RETURNING id, name, phone, is_gold"#,
        )
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(dto.is_gold)
        .fetch_one(db)
        .await?;

        Ok(customer)
    }

    #[instrument]
    pub async fn update_customer(
        db: &PgPool,
        id: Uuid,
        dto: CustomerDto,
    ) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            r#"UPDATE customers SET name = $1, phone = $2, is_gold = $3
               WHERE id = $4
               RETURNING id, name, phone, is_gold"#,
        )
        .bind(&dto.name)
        .bind(&dto.phone)
        .bind(dto.is_gold)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(customer_not_found)
    }

    #[instrument]
    pub async fn delete_customer(db: &PgPool, id: Uuid) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            "DELETE FROM customers WHERE id = $1 RETURNING id, name, phone, is_gold",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(customer_not_found)
    }
}
