use planet_catalog::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init(&config.log_level, config.is_json_logging());
    config.print_summary();

    server::run(config).await
}
