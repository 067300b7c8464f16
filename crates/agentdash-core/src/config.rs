//! Dashboard configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result, ResultExt};

/// Main dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Timers and animation delays
    pub timing: TimingSettings,

    /// Simulated progress updater
    pub simulation: SimulationSettings,

    /// Export download target
    pub export: ExportSettings,

    /// Page fragment persistence
    pub session: SessionSettings,

    /// Log output
    pub logging: LoggingSettings,
}

impl DashboardConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent tick period
    pub fn with_agent_tick_ms(mut self, ms: u64) -> Self {
        self.timing.agent_tick_ms = ms;
        self
    }

    /// Set the notification lifetime
    pub fn with_notification_ttl_ms(mut self, ms: u64) -> Self {
        self.timing.notification_ttl_ms = ms;
        self
    }

    /// Set the maximum progress increment per tick
    pub fn with_max_progress_step(mut self, step: u8) -> Self {
        self.simulation.max_progress_step = step;
        self
    }

    /// Fix the simulation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.simulation.seed = Some(seed);
        self
    }

    /// Set the export directory
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export.directory = dir.into();
        self
    }

    /// Set the session state file
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session.state_file = path.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.timing.tick_rate_ms == 0 {
            return Err(DashError::Config("timing.tick_rate_ms must be > 0".into()));
        }
        if self.timing.agent_tick_ms == 0 {
            return Err(DashError::Config("timing.agent_tick_ms must be > 0".into()));
        }
        if self.simulation.max_progress_step > 100 {
            return Err(DashError::Config(format!(
                "simulation.max_progress_step must be <= 100, got {}",
                self.simulation.max_progress_step
            )));
        }
        Ok(())
    }

    /// Load configuration from a TOML file. Missing keys take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Timers, all in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Redraw / input poll period
    pub tick_rate_ms: u64,

    /// Period of the simulated progress updater
    pub agent_tick_ms: u64,

    /// Notification auto-dismiss delay
    pub notification_ttl_ms: u64,

    /// Modal fade-out delay
    pub modal_fade_ms: u64,

    /// Agent removal animation length
    pub removal_animation_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            agent_tick_ms: 1000,
            notification_ttl_ms: 3000,
            modal_fade_ms: 300,
            removal_animation_ms: 300,
        }
    }
}

impl TimingSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn agent_tick(&self) -> Duration {
        Duration::from_millis(self.agent_tick_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn modal_fade(&self) -> Duration {
        Duration::from_millis(self.modal_fade_ms)
    }

    pub fn removal_animation(&self) -> Duration {
        Duration::from_millis(self.removal_animation_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Progress increment per tick is drawn from `0..=max_progress_step`
    pub max_progress_step: u8,

    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            max_progress_step: 2,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Write the page fragment after each navigation
    pub persist: bool,

    pub state_file: PathBuf,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            persist: true,
            state_file: PathBuf::from(".agentdash-session"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file used while the terminal UI owns stdout
    pub file: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("agentdash.log"),
        }
    }
}
