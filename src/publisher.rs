// Broker side of the tool. `Publish` is the seam the pipeline talks to;
// `PubsubPublisher` is the Google Cloud Pub/Sub implementation behind it.
// Credentials come from Application Default Credentials, or the emulator
// when `PUBSUB_EMULATOR_HOST` is set.
use google_cloud_googleapis::pubsub::v1::PubsubMessage;
use google_cloud_pubsub::client::{Client, ClientConfig};
use google_cloud_pubsub::publisher::Publisher;
use tracing::debug;

use crate::cli::Options;

/// Something that can publish one payload and report the ids the broker
/// assigned to it.
pub trait Publish {
    async fn publish(&self, data: Vec<u8>) -> anyhow::Result<Vec<String>>;

    /// Release whatever the publisher holds once the last line is sent.
    async fn shutdown(self)
    where
        Self: Sized,
    {
    }
}

pub struct PubsubPublisher {
    publisher: Publisher,
}

impl PubsubPublisher {
    /// Build a client for `options.project` and a publisher for
    /// `options.topic`. Fails when no credentials can be found or the
    /// client cannot be constructed.
    pub async fn connect(options: &Options) -> anyhow::Result<Self> {
        let config = ClientConfig {
            project_id: Some(options.project.clone()),
            ..Default::default()
        }
        .with_auth()
        .await?;

        let client = Client::new(config).await?;
        let topic = client.topic(&options.topic);
        debug!(topic = %topic.fully_qualified_name(), "publisher ready");

        Ok(Self {
            publisher: topic.new_publisher(None),
        })
    }
}

impl Publish for PubsubPublisher {
    async fn publish(&self, data: Vec<u8>) -> anyhow::Result<Vec<String>> {
        let msg = PubsubMessage {
            data,
            ..Default::default()
        };
        // One request per line: the call returns once the broker has
        // acknowledged the message.
        let ids = self.publisher.publish_immediately(vec![msg], None).await?;
        Ok(ids)
    }

    /// Stop the publisher's background workers.
    async fn shutdown(mut self) {
        self.publisher.shutdown().await;
    }
}
