//! Customer seeding.

use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use uuid::Uuid;

use super::models::CustomerSeed;

const BATCH_SIZE: usize = 500;

fn fit(mut value: String, filler: &str) -> String {
    while value.chars().count() < 5 {
        value.push_str(filler);
    }
    value.chars().take(50).collect()
}

pub fn generate_customers(count: usize) -> Vec<CustomerSeed> {
    (0..count)
        .map(|_| CustomerSeed {
            name: fit(Name().fake(), " Jr."),
            phone: fit(PhoneNumber().fake(), "0"),
            // Roughly one in five customers is gold
            is_gold: Boolean(20).fake(),
        })
        .collect()
}

pub async fn seed_customers(db: &PgPool, count: usize) -> anyhow::Result<Vec<Uuid>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} customers...", count);

    let customers = generate_customers(count);
    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(count);

    for chunk in customers.chunks(BATCH_SIZE) {
        let mut builder =
            QueryBuilder::<Postgres>::new("INSERT INTO customers (name, phone, is_gold) ");
        builder.push_values(chunk, |mut row, customer| {
            row.push_bind(&customer.name)
                .push_bind(&customer.phone)
                .push_bind(customer.is_gold);
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
        "   ✓ Inserted {} customers in {:?}",
        all_ids.len(),
        start_time.elapsed()
    );

    Ok(all_ids)
}
