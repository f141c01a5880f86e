use ajevif_contact::api::handler;
use ajevif_contact::core::config::AppConfig;
use ajevif_contact::email::SesEmailSender;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ajevif_contact::setup_logging();

    let config = AppConfig::default();
    let sender = SesEmailSender::from_config(&config).await;
    info!(region = %config.aws_region, to = %config.to_address, "Contact handler ready");

    let config = &config;
    let sender = &sender;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(sender, config, event).await
    }))
    .await
}
