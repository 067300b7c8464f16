//! Owned, single-writer agent store
//!
//! All agent mutations go through [`AgentStore`]. Readers get borrowed
//! slices or cloned snapshots; derived UI numbers come from [`AgentCounts`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::{fixture_agents, Agent, AgentId, AgentState};
use crate::error::{DashError, Result};

/// Counts derived from the store, used by headers, badges and the empty state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCounts {
    pub total: usize,
    pub running: usize,
    pub warning: usize,
    pub paused: usize,
}

impl AgentCounts {
    /// Number shown on the sidebar badge
    pub fn badge(&self) -> usize {
        self.total
    }

    /// Whether the "no agents" view is shown
    pub fn show_empty_state(&self) -> bool {
        self.total == 0
    }
}

#[derive(Debug, Clone)]
pub struct AgentStore {
    agents: Vec<Agent>,
    next_id: u64,
}

impl Default for AgentStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AgentStore {
    pub fn new(agents: Vec<Agent>) -> Self {
        let next_id = agents.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        Self { agents, next_id }
    }

    /// Store seeded with the startup fixtures
    pub fn with_fixtures() -> Self {
        Self::new(fixture_agents())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Owned copy of the current records
    pub fn snapshot(&self) -> Vec<Agent> {
        self.agents.clone()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.iter().any(|a| a.id == id)
    }

    pub fn get(&self, id: AgentId) -> Result<&Agent> {
        self.agents
            .iter()
            .find(|a| a.id == id)
            .ok_or(DashError::AgentNotFound(id))
    }

    fn get_mut(&mut self, id: AgentId) -> Result<&mut Agent> {
        self.agents
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DashError::AgentNotFound(id))
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn counts(&self) -> AgentCounts {
        self.agents
            .iter()
            .fold(AgentCounts::default(), |mut counts, agent| {
                counts.total += 1;
                match agent.state {
                    AgentState::Running => counts.running += 1,
                    AgentState::Warning => counts.warning += 1,
                    AgentState::Paused => counts.paused += 1,
                }
                counts
            })
    }

    /// Append a freshly spawned agent. Ids are never reused.
    pub fn spawn(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push(Agent::spawned(id));
        debug!(agent = %id, "agent spawned");
        id
    }

    /// Remove exactly one record
    pub fn remove(&mut self, id: AgentId) -> Result<Agent> {
        let index = self
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or(DashError::AgentNotFound(id))?;
        Ok(self.agents.remove(index))
    }

    /// Flip between paused and running; returns the new state
    pub fn toggle_pause(&mut self, id: AgentId) -> Result<AgentState> {
        let agent = self.get_mut(id)?;
        agent.state = agent.state.toggled();
        Ok(agent.state)
    }

    /// Records whose name or status contains `query`, in store order
    pub fn filtered<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Agent> + 'a {
        self.agents.iter().filter(move |a| a.matches(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_from_fixtures() {
        let store = AgentStore::with_fixtures();
        let counts = store.counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.running, 2);
        assert_eq!(counts.warning, 1);
        assert_eq!(counts.paused, 0);
        assert_eq!(counts.badge(), 3);
        assert!(!counts.show_empty_state());
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut store = AgentStore::with_fixtures();
        let removed = store.remove(AgentId(2)).unwrap();
        assert_eq!(removed.id, AgentId(2));
        assert_eq!(store.len(), 2);
        assert!(!store.contains(AgentId(2)));

        let err = store.remove(AgentId(2)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_all_shows_empty_state() {
        let mut store = AgentStore::with_fixtures();
        for id in [1, 2, 3] {
            store.remove(AgentId(id)).unwrap();
        }
        assert!(store.is_empty());
        assert!(store.counts().show_empty_state());
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let mut store = AgentStore::with_fixtures();
        assert_eq!(store.toggle_pause(AgentId(1)).unwrap(), AgentState::Paused);
        assert_eq!(store.counts().paused, 1);
        assert_eq!(store.toggle_pause(AgentId(1)).unwrap(), AgentState::Running);
        assert_eq!(store.counts().paused, 0);
        assert!(store.toggle_pause(AgentId(99)).is_err());
    }

    #[test]
    fn test_spawn_ids_are_monotonic() {
        let mut store = AgentStore::with_fixtures();
        let first = store.spawn();
        assert_eq!(first, AgentId(4));
        store.remove(first).unwrap();
        let second = store.spawn();
        assert_eq!(second, AgentId(5));

        let agent = store.get(second).unwrap();
        assert_eq!(agent.progress, 0);
        assert_eq!(agent.state, AgentState::Running);
    }

    #[test]
    fn test_filtered() {
        let store = AgentStore::with_fixtures();
        let names: Vec<_> = store.filtered("agent").map(|a| a.id).collect();
        assert_eq!(names.len(), 3);
        let names: Vec<_> = store.filtered("repository").map(|a| a.id).collect();
        assert_eq!(names, vec![AgentId(2)]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = AgentStore::with_fixtures();
        let snapshot = store.snapshot();
        store.remove(AgentId(1)).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(store.len(), 2);
    }
}
