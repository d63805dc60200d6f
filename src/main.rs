use std::net::TcpListener;

use dotenv::dotenv;
use env_logger::Env;
use sqlx::postgres::PgPoolOptions;

use trivia_api::config::Settings;
use trivia_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .connect(&settings.database_url)
        .await
        .expect("Failed to connect to Postgres");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let address = settings.address();
    log::info!("Starting server at http://{}", address);
    log::info!("Swagger UI available at http://{}/swagger-ui/", address);

    let listener = TcpListener::bind(&address)?;
    run(listener, pool)?.await
}
