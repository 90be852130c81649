//! File persistence and serialization configuration

/// Configuration for UTM attribution persistence
pub struct UtmPersistenceConfig {
    /// Path of the JSON file holding the captured UTM record
    pub path: &'static str,
}

/// Configuration for the results handed from a lead submission to the follow-up page
pub struct SessionPersistenceConfig {
    /// Path of the JSON file holding the last submitted results
    pub results_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub utm: UtmPersistenceConfig,
    pub session: SessionPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    utm: UtmPersistenceConfig { path: ".utm.json" },
    session: SessionPersistenceConfig {
        results_path: ".calculator_results.json",
    },
};
