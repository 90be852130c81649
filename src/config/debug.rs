//! Debugging feature flags.

pub struct LogFlags {
    /// Log every recompute with its inputs and headline numbers.
    pub log_calculations: bool,

    /// Log when auto-balance rewrites the channel mix.
    pub log_auto_balance: bool,

    /// Echo analytics events at debug level before the sink sees them.
    pub log_analytics: bool,

    /// Dump outbound lead payloads (contains contact details, keep off by default).
    pub log_lead_payloads: bool,

    pub log_utm: bool,
}

pub const DF: LogFlags = LogFlags {
    log_auto_balance: true,
    log_utm: true,

    log_calculations: false,
    log_analytics: false,
    log_lead_payloads: false,
};
