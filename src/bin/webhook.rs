use pokupki::api::handler;
use pokupki::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    pokupki::setup_logging();

    // Missing configuration is fatal before the runtime starts serving.
    let config = AppConfig::from_env().map_err(lambda_runtime::Error::from)?;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let config = config.clone();
        async move { handler(&config, event).await }
    }))
    .await
}
