//! UTM capture from landing URLs and its file-backed persistence.

use {
    crate::{config::PERSISTENCE, utils::now_iso},
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        fs::{self, File},
        io::{BufReader, BufWriter},
        path::{Path, PathBuf},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Attribution fields carried from the landing page into lead submissions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtmData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub li_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl UtmData {
    /// Reads the attribution parameters from a full URL or a bare query string and
    /// stamps the capture time. Empty values count as absent; for repeated keys the
    /// first occurrence wins.
    pub fn from_url(url: &str) -> Self {
        let mut utms = Self {
            timestamp: Some(now_iso()),
            ..Self::default()
        };

        for (key, value) in query_pairs(url) {
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_str() {
                "utm_source" => &mut utms.utm_source,
                "utm_medium" => &mut utms.utm_medium,
                "utm_campaign" => &mut utms.utm_campaign,
                "li_handle" => &mut utms.li_handle,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        utms
    }

    /// True when at least one attribution field is set. The timestamp alone does not count.
    pub fn has_attribution(&self) -> bool {
        [
            &self.utm_source,
            &self.utm_medium,
            &self.utm_campaign,
            &self.li_handle,
        ]
        .iter()
        .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }

    /// Field-by-field merge where `newer` wins whenever it has a value.
    pub fn merged_with(self, newer: UtmData) -> UtmData {
        UtmData {
            utm_source: newer.utm_source.or(self.utm_source),
            utm_medium: newer.utm_medium.or(self.utm_medium),
            utm_campaign: newer.utm_campaign.or(self.utm_campaign),
            li_handle: newer.li_handle.or(self.li_handle),
            timestamp: newer.timestamp.or(self.timestamp),
        }
    }
}

/// Splits the query part of `url` into decoded key/value pairs,
/// decoding the way browsers do for form-encoded queries (`+` is a space).
fn query_pairs(url: &str) -> Vec<(String, String)> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, q)) => q,
        None if without_fragment.contains('=') => without_fragment,
        None => return Vec::new(),
    };

    query
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            log::warn!("Skipping undecodable query component '{}': {}", raw, e);
            None
        }
    }
}

/// File-backed store for the captured UTM record.
#[derive(Debug, Clone)]
pub struct UtmStore {
    path: PathBuf,
}

impl Default for UtmStore {
    fn default() -> Self {
        Self::new(PERSISTENCE.utm.path)
    }
}

impl UtmStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored record, or an empty one when nothing usable is on disk.
    pub fn load(&self) -> UtmData {
        if !self.path.exists() {
            return UtmData::default();
        }
        match self.read() {
            Ok(utms) => utms,
            Err(e) => {
                log::warn!("Unable to retrieve UTM data: {:#}", e);
                UtmData::default()
            }
        }
    }

    fn read(&self) -> Result<UtmData> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        let utms = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Corrupt UTM file {}", self.path.display()))?;
        Ok(utms)
    }

    /// Writes `utms` if it carries any attribution. Returns whether anything was written.
    pub fn store(&self, utms: &UtmData) -> Result<bool> {
        if !utms.has_attribution() {
            return Ok(false);
        }
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        serde_json::to_writer(BufWriter::new(file), utms)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
    }

    /// Landing-page initialization: URL parameters override stored ones field by field,
    /// and the merged record is persisted for later submissions.
    pub fn init_tracking(&self, url: &str) -> UtmData {
        let combined = self.load().merged_with(UtmData::from_url(url));

        match self.store(&combined) {
            Ok(_written) => {
                #[cfg(debug_assertions)]
                if DF.log_utm {
                    log::info!("UTM tracking initialized (stored: {}): {:?}", _written, combined);
                }
            }
            Err(e) => log::warn!("Unable to store UTM data: {:#}", e),
        }
        combined
    }
}
