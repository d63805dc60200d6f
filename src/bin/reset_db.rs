use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::env;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .connect(&database_url)
        .await?;

    println!("Resetting database...");

    // Truncate tables but keep schema
    sqlx::query("TRUNCATE TABLE questions, categories RESTART IDENTITY")
        .execute(&pool)
        .await?;

    println!("Database reset successfully!");
    Ok(())
}
