//! Function entry point: scheduler state changes from a pub/sub topic

use ecs_scaling_notifier::{handler, logging, NotifierConfig, TopicEnvelope, WebhookNotifier};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = NotifierConfig::from_env()?;
    let notifier = WebhookNotifier::new(config.slack_webhook_url.as_str());

    tracing::info!(
        environment = %config.environment,
        host = notifier.host(),
        "schedule_state_notifier starting"
    );

    let config = &config;
    let notifier = &notifier;
    run(service_fn(move |event: LambdaEvent<TopicEnvelope>| async move {
        Ok::<_, Error>(handler::handle_schedule_state(notifier, config, event.payload).await)
    }))
    .await
}
