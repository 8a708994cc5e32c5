//! Deployment settings for till-audit
//!
//! Holds the static configuration the audit front end consumes: the admin
//! secret gating bulk deletion, the fixed civil timezone, the currency
//! symbol, and the terminal/personnel rosters offered by the input prompts.

use chrono::{FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::paths::AuditPaths;
use crate::error::AuditError;

/// Deployment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Shared secret required by the delete-all operation
    #[serde(default = "default_admin_secret")]
    pub admin_secret: String,

    /// Fixed civil timezone as minutes east of UTC.
    ///
    /// Default -180 (UTC-03:00, the America/Sao_Paulo civil time of the
    /// original deployment; the zone has had no DST since 2019).
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// Currency symbol used in display and export
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Checkout terminals available to audit
    #[serde(default = "default_terminals")]
    pub terminals: Vec<String>,

    /// Register operator roster; empty means unrestricted
    #[serde(default)]
    pub operators: Vec<String>,

    /// Supervisor roster; empty means unrestricted
    #[serde(default)]
    pub supervisors: Vec<String>,

    /// Loss-prevention auditor roster; empty means unrestricted
    #[serde(default)]
    pub auditors: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_admin_secret() -> String {
    "123456".to_string()
}

fn default_utc_offset_minutes() -> i32 {
    -180
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_terminals() -> Vec<String> {
    (1..=20).map(|n| n.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            admin_secret: default_admin_secret(),
            utc_offset_minutes: default_utc_offset_minutes(),
            currency_symbol: default_currency(),
            terminals: default_terminals(),
            operators: Vec::new(),
            supervisors: Vec::new(),
            auditors: Vec::new(),
        }
    }
}

impl Settings {
    /// The configured civil timezone
    pub fn timezone(&self) -> FixedOffset {
        // Falls back to UTC if the configured offset is out of range
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    /// Current wall-clock time in the configured civil timezone
    pub fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone()).naive_local()
    }

    /// Whether a terminal id belongs to the configured roster
    pub fn is_known_terminal(&self, terminal_id: &str) -> bool {
        self.terminals.is_empty() || self.terminals.iter().any(|t| t == terminal_id)
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &AuditPaths) -> Result<Self, AuditError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AuditError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| AuditError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AuditPaths) -> Result<(), AuditError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AuditError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| AuditError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
