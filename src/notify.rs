use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use aws_config::{defaults, BehaviorVersion};
use aws_sdk_sns::{config::Region, Client};
use tracing::{debug, warn};

use crate::config::NotifyConfig;

/// Outbound notifications about account activity.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, message: &str) -> anyhow::Result<()>;
}

/// Publishes to a single SNS topic.
#[derive(Clone)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub async fn new(region: &str, topic_arn: &str) -> Self {
        let shared = defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: Client::new(&shared),
            topic_arn: topic_arn.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn notify(&self, subject: &str, message: &str) -> anyhow::Result<()> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .context("sns publish")?;
        debug!(subject, "notification published");
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, subject: &str, _message: &str) -> anyhow::Result<()> {
        debug!(subject, "notifications disabled; skipping");
        Ok(())
    }
}

pub async fn from_config(cfg: &NotifyConfig) -> Arc<dyn Notifier> {
    match cfg.sns_topic_arn.as_deref() {
        Some(arn) => Arc::new(SnsNotifier::new(&cfg.aws_region, arn).await) as Arc<dyn Notifier>,
        None => Arc::new(NoopNotifier) as Arc<dyn Notifier>,
    }
}

/// Sends a notification without letting a delivery failure reach the caller.
pub async fn notify_best_effort(notifier: &dyn Notifier, subject: &str, message: &str) {
    if let Err(e) = notifier.notify(subject, message).await {
        warn!(error = %e, subject, "notification failed");
    }
}
