//! Agent records shown on the dashboard
//!
//! An agent here is a UI record, not an executing process. Progress and
//! elapsed time are driven by the simulated updater in [`crate::scheduler`].

use serde::{Deserialize, Serialize};

/// Upper bound for [`Agent::progress`]
pub const MAX_PROGRESS: u8 = 100;

/// Unique agent identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Run state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentState {
    /// Actively making progress
    Running,
    /// Running but needs attention
    Warning,
    /// Held by the operator
    Paused,
}

impl AgentState {
    /// State after a pause/resume action.
    ///
    /// Anything not paused pauses; a paused agent resumes as running.
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Running,
            Self::Running | Self::Warning => Self::Paused,
        }
    }

    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Warning => "warning",
            Self::Paused => "paused",
        }
    }

    /// Label of the pause/resume affordance for an agent in this state
    pub fn toggle_label(self) -> &'static str {
        if self.is_paused() {
            "Resume"
        } else {
            "Pause"
        }
    }

    /// Glyph of the pause/resume affordance
    pub fn toggle_icon(self) -> &'static str {
        if self.is_paused() {
            "▶"
        } else {
            "⏸"
        }
    }
}

impl std::fmt::Display for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dashboard agent record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    /// Free-text status line
    pub status: String,
    /// Percentage, `0..=100`
    pub progress: u8,
    /// Elapsed seconds
    pub time: u64,
    pub state: AgentState,
}

impl Agent {
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        status: impl Into<String>,
        progress: u8,
        time: u64,
        state: AgentState,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status: status.into(),
            progress: progress.min(MAX_PROGRESS),
            time,
            state,
        }
    }

    /// A freshly created agent, as produced by the "new agent" action
    pub fn spawned(id: AgentId) -> Self {
        Self::new(
            id,
            format!("Agent {}", id),
            "Initializing...",
            0,
            0,
            AgentState::Running,
        )
    }

    /// Elapsed time as `mm:ss`
    pub fn elapsed(&self) -> String {
        format_elapsed(self.time)
    }

    /// True when `query` occurs in the name or status, ignoring case
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.status.to_lowercase().contains(&query)
    }
}

/// Format seconds as `mm:ss`. Minutes are not wrapped into hours.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The three agents present at startup
pub fn fixture_agents() -> Vec<Agent> {
    vec![
        Agent::new(
            AgentId(1),
            "Research Agent",
            "Analyzing market trends...",
            67,
            754,
            AgentState::Running,
        ),
        Agent::new(
            AgentId(2),
            "Code Review Agent",
            "Waiting for repository access",
            34,
            312,
            AgentState::Warning,
        ),
        Agent::new(
            AgentId(3),
            "Data Pipeline Agent",
            "Processing batch 3 of 5",
            82,
            1421,
            AgentState::Running,
        ),
    ]
}
