//! Analytics events and the sinks they are fired into.
//!
//! Sinks are fire-and-forget: `track` returns nothing and a broken sink must never
//! change what the calculator shows.

use {
    crate::models::{CalculatorInputs, CalculatorResults, RiskLevel},
    serde::{Deserialize, Serialize},
    std::sync::Mutex,
    strum_macros::{Display, EnumIter},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Where a "book a call" click came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BookCallSource {
    Calculator,
    Vsl,
    Hero,
    Navbar,
    FixTracking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView {
        path: String,
    },
    CalcUpdated {
        spend: f64,
        adj_gap: f64,
        invisible_revenue: f64,
        risk: RiskLevel,
    },
    LeadSubmitted {
        adj_gap: f64,
        invisible_revenue: f64,
        spend: f64,
        setup: String,
        industry: String,
    },
    BookCallClicked {
        source: BookCallSource,
    },
    Custom {
        name: String,
        #[serde(default)]
        parameters: serde_json::Map<String, serde_json::Value>,
    },
}

impl AnalyticsEvent {
    pub fn calc_updated(inputs: &CalculatorInputs, results: &CalculatorResults) -> Self {
        Self::CalcUpdated {
            spend: inputs.spend,
            adj_gap: results.adj_gap,
            invisible_revenue: results.invisible_revenue,
            risk: results.risk,
        }
    }

    pub fn lead_submitted(inputs: &CalculatorInputs, results: &CalculatorResults) -> Self {
        Self::LeadSubmitted {
            adj_gap: results.adj_gap,
            invisible_revenue: results.invisible_revenue,
            spend: inputs.spend,
            setup: inputs.setup.to_string(),
            industry: inputs.industry.to_string(),
        }
    }

    /// Event name as the analytics vendors see it.
    pub fn name(&self) -> &str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::CalcUpdated { .. } => "calc_updated",
            Self::LeadSubmitted { .. } => "lead_submitted",
            Self::BookCallClicked { .. } => "book_call_clicked",
            Self::Custom { name, .. } => name.as_str(),
        }
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &AnalyticsEvent);
}

/// Default sink: writes each event as a JSON line through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!("📊 Analytics: {} {}", event.name(), json),
            Err(e) => log::warn!("Unable to serialize analytics event {}: {}", event.name(), e),
        }
    }
}

/// Keeps every event in memory. Useful for batching and for asserting on what fired.
#[derive(Debug, Default)]
pub struct MemoryAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.events().iter().filter(|e| e.name() == name).count()
    }
}

impl AnalyticsSink for MemoryAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        #[cfg(debug_assertions)]
        if DF.log_analytics {
            log::debug!("recording analytics event {}", event.name());
        }

        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;

    #[test]
    fn calc_updated_carries_headline_numbers() {
        let inputs = CalculatorInputs::default();
        let results = compute(&inputs);
        let event = AnalyticsEvent::calc_updated(&inputs, &results);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "calc_updated");
        assert_eq!(json["spend"], 50_000.0);
        assert_eq!(json["risk"], "High");
        assert_eq!(event.name(), "calc_updated");
    }

    #[test]
    fn lead_submitted_uses_enum_keys() {
        let inputs = CalculatorInputs::default();
        let results = compute(&inputs);
        let json = serde_json::to_value(AnalyticsEvent::lead_submitted(&inputs, &results)).unwrap();
        assert_eq!(json["setup"], "ga4PlusPixels");
        assert_eq!(json["industry"], "ecommerce");
    }

    #[test]
    fn book_call_sources_are_kebab_case() {
        let json =
            serde_json::to_value(AnalyticsEvent::BookCallClicked { source: BookCallSource::FixTracking })
                .unwrap();
        assert_eq!(json["source"], "fix-tracking");
        assert_eq!(BookCallSource::Vsl.to_string(), "vsl");
    }

    #[test]
    fn custom_events_keep_their_name() {
        let event = AnalyticsEvent::Custom {
            name: "faq_opened".into(),
            parameters: serde_json::Map::new(),
        };
        assert_eq!(event.name(), "faq_opened");
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemoryAnalytics::new();
        sink.track(&AnalyticsEvent::PageView { path: "/".into() });
        sink.track(&AnalyticsEvent::BookCallClicked { source: BookCallSource::Hero });
        let names: Vec<String> = sink.events().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["page_view", "book_call_clicked"]);
        assert_eq!(sink.count("page_view"), 1);
    }
}
