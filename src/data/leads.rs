//! Outbound lead delivery: email-list subscription and CRM webhook.
//!
//! Delivery is best-effort. Each sink gets exactly one attempt; there is no retry and
//! no acknowledgement beyond the HTTP status.

use {
    crate::{
        config::{INTEGRATIONS, IntegrationSettings},
        data::UtmData,
        models::{LeadData, LeadError, Subscriber, WebhookPayload},
    },
    anyhow::{Context, Result, anyhow, bail},
    async_trait::async_trait,
    futures::future::join_all,
    reqwest::Client,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// One destination for a submitted lead.
#[async_trait]
pub trait LeadSink: Send + Sync {
    fn name(&self) -> &'static str;

    /// Message shown to the visitor when this sink fails.
    fn failure_message(&self) -> &'static str;

    async fn deliver(&self, lead: &LeadData, utms: &UtmData, page_url: &str) -> Result<()>;
}

/// Email-list provider (Beehiiv) subscription.
pub struct SubscriberSink {
    client: Client,
    api_base_url: String,
    api_key: Option<String>,
    publication_id: Option<String>,
}

impl SubscriberSink {
    pub fn new(client: Client, settings: &IntegrationSettings) -> Self {
        Self {
            client,
            api_base_url: INTEGRATIONS.beehiiv.api_base_url.to_string(),
            api_key: settings.beehiiv_api_key.clone(),
            publication_id: settings.beehiiv_publication_id.clone(),
        }
    }
}

#[async_trait]
impl LeadSink for SubscriberSink {
    fn name(&self) -> &'static str {
        "beehiiv"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to add to email list"
    }

    async fn deliver(&self, lead: &LeadData, utms: &UtmData, _page_url: &str) -> Result<()> {
        let (Some(api_key), Some(publication_id)) = (&self.api_key, &self.publication_id) else {
            log::warn!("Beehiiv API key or publication ID not configured");
            bail!("beehiiv is not configured");
        };

        let url = format!(
            "{}/publications/{}/subscriptions",
            self.api_base_url.trim_end_matches('/'),
            publication_id
        );
        let subscriber = Subscriber::new(lead, utms);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&subscriber)
            .send()
            .await
            .context("Beehiiv request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Beehiiv API error {}: {}", status, body);
        }

        log::info!("✅ Beehiiv subscriber added");
        Ok(())
    }
}

/// CRM webhook (Zapier catch hook).
pub struct WebhookSink {
    client: Client,
    webhook_url: Option<String>,
}

impl WebhookSink {
    pub fn new(client: Client, settings: &IntegrationSettings) -> Self {
        Self {
            client,
            webhook_url: settings.zapier_webhook_url.clone(),
        }
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    fn name(&self) -> &'static str {
        "zapier"
    }

    fn failure_message(&self) -> &'static str {
        "Failed to process lead data"
    }

    async fn deliver(&self, lead: &LeadData, utms: &UtmData, page_url: &str) -> Result<()> {
        let Some(webhook_url) = &self.webhook_url else {
            log::warn!("Zapier webhook URL not configured");
            bail!("zapier webhook is not configured");
        };

        let payload = WebhookPayload::new(lead, utms, page_url);

        #[cfg(debug_assertions)]
        if DF.log_lead_payloads {
            log::debug!("webhook payload: {:?}", payload);
        }

        let response = self
            .client
            .post(webhook_url)
            .json(&payload)
            .send()
            .await
            .context("Zapier webhook request failed")?;

        response
            .error_for_status()
            .map_err(|e| anyhow!("Zapier webhook rejected the lead: {}", e))?;

        log::info!("✅ Zapier webhook sent");
        Ok(())
    }
}

/// Both production sinks sharing one HTTP client.
pub fn default_sinks(settings: &IntegrationSettings) -> Result<Vec<Box<dyn LeadSink>>> {
    let client = Client::builder()
        .timeout(settings.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(vec![
        Box::new(SubscriberSink::new(client.clone(), settings)),
        Box::new(WebhookSink::new(client, settings)),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionOutcome {
    /// True when at least one sink accepted the lead.
    pub success: bool,
    /// One user-facing message per failed sink, in sink order.
    pub errors: Vec<String>,
}

/// Validates the lead and fans it out to every sink concurrently.
pub async fn submit_lead(
    sinks: &[Box<dyn LeadSink>],
    lead: &LeadData,
    utms: &UtmData,
    page_url: &str,
) -> Result<SubmissionOutcome, LeadError> {
    lead.validate()?;

    let attempts = sinks.iter().map(|sink| sink.deliver(lead, utms, page_url));
    let results = join_all(attempts).await;

    let mut outcome = SubmissionOutcome::default();
    for (sink, result) in sinks.iter().zip(results) {
        match result {
            Ok(()) => outcome.success = true,
            Err(e) => {
                log::error!("❌ {} delivery failed: {:#}", sink.name(), e);
                outcome.errors.push(sink.failure_message().to_string());
            }
        }
    }
    Ok(outcome)
}
