mod analytics;
mod leads;
mod session_store;
mod utm;

pub use {
    analytics::{AnalyticsEvent, AnalyticsSink, BookCallSource, LogAnalytics, MemoryAnalytics},
    leads::{LeadSink, SubmissionOutcome, SubscriberSink, WebhookSink, default_sinks, submit_lead},
    session_store::{SessionStore, StoredResults},
    utm::{UtmData, UtmStore},
};
