use {
    crate::{
        config::PERSISTENCE,
        models::{CalculatorResults, RiskLevel},
    },
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        fs::File,
        io::{BufReader, BufWriter},
        path::{Path, PathBuf},
    },
};

/// What the follow-up page needs from the calculator after a lead goes through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResults {
    pub invisible_revenue: f64,
    pub risk: RiskLevel,
}

impl From<&CalculatorResults> for StoredResults {
    fn from(results: &CalculatorResults) -> Self {
        Self {
            invisible_revenue: results.invisible_revenue,
            risk: results.risk,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(PERSISTENCE.session.results_path)
    }
}

impl SessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn save(&self, results: &StoredResults) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        serde_json::to_writer(BufWriter::new(file), results)?;
        Ok(())
    }

    /// `Ok(None)` when no lead has been submitted yet.
    pub fn load(&self) -> Result<Option<StoredResults>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let stored = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Corrupt results file {}", self.path.display()))?;
        Ok(Some(stored))
    }
}
