use starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    match seed_catalog(&orm).await? {
        Some(summary) => println!(
            "Seed completed. User ID: {}, {} characters, {} planets",
            summary.user_id, summary.characters, summary.planets
        ),
        None => println!("Catalog already seeded, nothing to do"),
    }
    Ok(())
}
