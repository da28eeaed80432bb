use sparkify_dwh::{
    config::Config,
    pipeline::{self, Phase},
    startup,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let phases = [Phase::Load(&config.load), Phase::Transform];
    if let Err(e) = pipeline::connect_and_run(&config.database, &phases).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
