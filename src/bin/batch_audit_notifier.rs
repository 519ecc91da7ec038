//! Function entry point: queued audit event batches

use ecs_scaling_notifier::{handler, logging, NotifierConfig, QueueBatch, WebhookNotifier};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = NotifierConfig::from_env()?;
    let notifier = WebhookNotifier::new(config.slack_webhook_url.as_str());

    tracing::info!(
        environment = %config.environment,
        host = notifier.host(),
        "batch_audit_notifier starting"
    );

    let config = &config;
    let notifier = &notifier;
    run(service_fn(move |event: LambdaEvent<QueueBatch>| async move {
        Ok::<_, Error>(handler::handle_batch(notifier, config, event.payload).await)
    }))
    .await
}
