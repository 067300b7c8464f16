//! JSON export of the dashboard state

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agent::Agent;
use crate::error::{Result, ResultExt};
use crate::page::Page;

/// Headline metrics included in every export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    pub mcp_servers: u32,
    pub rag_documents: u32,
    pub models_trained: u32,
    pub security_score: u32,
}

pub const STATS: ExportStats = ExportStats {
    mcp_servers: 12,
    rag_documents: 1847,
    models_trained: 8,
    security_score: 94,
};

/// Document written by the export download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub timestamp: DateTime<Utc>,
    pub page: Page,
    pub stats: ExportStats,
    pub active_agents: Vec<Agent>,
}

impl ExportSnapshot {
    pub fn new(timestamp: DateTime<Utc>, page: Page, agents: Vec<Agent>) -> Self {
        Self {
            timestamp,
            page,
            stats: STATS,
            active_agents: agents,
        }
    }

    /// Download name, e.g. `dashboard-export-1700000000000.json`
    pub fn file_name(&self) -> String {
        format!("dashboard-export-{}.json", self.timestamp.timestamp_millis())
    }

    pub fn to_json(&self) -> Result<String> {
        let mut value = serde_json::to_value(self)?;
        value["timestamp"] = serde_json::Value::String(
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Write into `dir`, creating it if needed; returns the file path
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), agents = self.active_agents.len(), "exported dashboard");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::fixture_agents;
    use chrono::TimeZone;

    fn snapshot() -> ExportSnapshot {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        ExportSnapshot::new(ts, Page::Agents, fixture_agents())
    }

    #[test]
    fn test_top_level_keys() {
        let json: serde_json::Value = serde_json::from_str(&snapshot().to_json().unwrap()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["activeAgents", "page", "stats", "timestamp"]);
        assert_eq!(json["page"], "agents");
        assert_eq!(json["timestamp"], "2026-10-17T09:30:00.000Z");
        assert_eq!(json["stats"]["securityScore"], 94);
        assert_eq!(json["activeAgents"][1]["state"], "warning");
        assert_eq!(json["activeAgents"][0]["time"], 754);
    }

    #[test]
    fn test_file_name_uses_millis() {
        let snap = snapshot();
        assert_eq!(
            snap.file_name(),
            format!("dashboard-export-{}.json", snap.timestamp.timestamp_millis())
        );
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let snap = snapshot();
        let path = snap.write_to(&target).unwrap();

        assert!(path.starts_with(&target));
        let parsed: ExportSnapshot =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, snap);
    }
}
