use {
    crate::{
        config::INTEGRATIONS,
        data::UtmData,
        models::{CalculatorInputs, CalculatorResults, CalculatorSnapshot},
        utils::now_iso,
    },
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("Missing Information: please fill in all fields and accept the consent")]
    MissingInformation,

    #[error("'{0}' does not look like an email address")]
    InvalidEmail(String),
}

/// A submitted email-gate form together with the calculator state it was opened from.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadData {
    pub name: String,
    pub email: String,
    pub consent: bool,
    pub inputs: CalculatorInputs,
    pub results: CalculatorResults,
}

impl LeadData {
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || !self.consent {
            return Err(LeadError::MissingInformation);
        }
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(LeadError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot::new(&self.inputs, &self.results)
    }
}

/// Body of the lead webhook: contact fields, the flattened calculator snapshot and
/// attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub full_name: String,
    pub work_email: String,
    pub consent: bool,
    #[serde(flatten)]
    pub snapshot: CalculatorSnapshot,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub li_handle: Option<String>,
    pub page_url: String,
    pub timestamp_iso: String,
    pub source: String,
}

impl WebhookPayload {
    pub fn new(lead: &LeadData, utms: &UtmData, page_url: &str) -> Self {
        Self {
            full_name: lead.name.trim().to_string(),
            work_email: lead.email.trim().to_string(),
            consent: lead.consent,
            snapshot: lead.snapshot(),
            utm_source: utms.utm_source.clone().unwrap_or_default(),
            utm_medium: utms.utm_medium.clone().unwrap_or_default(),
            utm_campaign: utms.utm_campaign.clone().unwrap_or_default(),
            li_handle: utms.li_handle.clone(),
            page_url: page_url.to_string(),
            timestamp_iso: now_iso(),
            source: INTEGRATIONS.zapier.source_tag.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberFields {
    pub tool: String,
    pub name: String,
    pub setup: String,
    pub industry: String,
    pub spend: f64,
    pub mix_meta: f64,
    pub mix_google: f64,
    pub mix_other: f64,
    pub adj_gap: f64,
    pub invisible_revenue: f64,
    pub risk: String,
}

/// Email-list subscription request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    pub reactivate_existing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    pub custom_fields: SubscriberFields,
}

impl Subscriber {
    pub fn new(lead: &LeadData, utms: &UtmData) -> Self {
        Self {
            email: lead.email.trim().to_string(),
            reactivate_existing: true,
            utm_source: utms.utm_source.clone(),
            utm_medium: utms.utm_medium.clone(),
            utm_campaign: utms.utm_campaign.clone(),
            custom_fields: SubscriberFields {
                tool: INTEGRATIONS.beehiiv.tool_name.to_string(),
                name: lead.name.trim().to_string(),
                setup: lead.inputs.setup.to_string(),
                industry: lead.inputs.industry.to_string(),
                spend: lead.inputs.spend,
                mix_meta: lead.inputs.mix.meta,
                mix_google: lead.inputs.mix.google,
                mix_other: lead.inputs.mix.other,
                adj_gap: lead.results.adj_gap,
                invisible_revenue: lead.results.invisible_revenue,
                risk: lead.results.risk.to_string(),
            },
        }
    }
}
