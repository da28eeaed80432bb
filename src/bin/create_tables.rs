use sparkify_dwh::{
    config::DatabaseConfig,
    pipeline::{self, Phase},
    startup,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = pipeline::connect_and_run(&config, &[Phase::Init]).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
