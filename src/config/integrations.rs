use std::time::Duration;

/// Email-list provider endpoint layout.
pub struct BeehiivConfig {
    pub api_base_url: &'static str,
    pub api_key_env: &'static str,
    pub publication_id_env: &'static str,
    /// Custom field identifying which tool produced the subscriber.
    pub tool_name: &'static str,
}

pub struct ZapierConfig {
    pub webhook_url_env: &'static str,
    /// Value of the `source` field on every webhook payload.
    pub source_tag: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

pub struct IntegrationConfig {
    pub beehiiv: BeehiivConfig,
    pub zapier: ZapierConfig,
    pub client: ClientDefaults,
}

pub const INTEGRATIONS: IntegrationConfig = IntegrationConfig {
    beehiiv: BeehiivConfig {
        api_base_url: "https://api.beehiiv.com/v2",
        api_key_env: "BEEHIIV_API_KEY",
        publication_id_env: "BEEHIIV_PUB_ID",
        tool_name: "Attribution Calculator",
    },
    zapier: ZapierConfig {
        webhook_url_env: "ZAPIER_WEBHOOK_URL",
        source_tag: "attribution_calculator",
    },
    client: ClientDefaults { timeout_ms: 10_000 },
};

/// Runtime secrets for the outbound integrations. Any of them may be missing,
/// in which case the corresponding sink reports itself as not configured.
#[derive(Debug, Clone)]
pub struct IntegrationSettings {
    pub beehiiv_api_key: Option<String>,
    pub beehiiv_publication_id: Option<String>,
    pub zapier_webhook_url: Option<String>,
    pub timeout: Duration,
}

/// Nothing configured, but the client timeout still comes from `INTEGRATIONS`.
impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            beehiiv_api_key: None,
            beehiiv_publication_id: None,
            zapier_webhook_url: None,
            timeout: Duration::from_millis(INTEGRATIONS.client.timeout_ms),
        }
    }
}

impl IntegrationSettings {
    pub fn from_env() -> Self {
        Self {
            beehiiv_api_key: non_empty_env(INTEGRATIONS.beehiiv.api_key_env),
            beehiiv_publication_id: non_empty_env(INTEGRATIONS.beehiiv.publication_id_env),
            zapier_webhook_url: non_empty_env(INTEGRATIONS.zapier.webhook_url_env),
            ..Self::default()
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
