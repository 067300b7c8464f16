//! Dashboard controller
//!
//! [`Dashboard`] owns every piece of view state and applies [`Action`]s to
//! it. Time only moves when [`Dashboard::advance`] is called, which fires the
//! simulated updater and finishes timed effects (agent removal animations,
//! modal fade-outs, notification expiry). Side effects that need the outside
//! world are handed back as [`Effect`]s.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::agent::{Agent, AgentId};
use crate::chart::ChartViewport;
use crate::config::{DashboardConfig, TimingSettings};
use crate::controls::{self, Control, ControlEffect, NEW_AGENT_CONTROL};
use crate::error::Result;
use crate::export::ExportSnapshot;
use crate::keymap::InputMode;
use crate::navigation::Navigator;
use crate::overlay::{Modal, ModalAction, ModalSlot, NotificationCenter, NotificationKind};
use crate::page::Page;
use crate::scheduler::{IntervalTicks, Simulation, TickSource};
use crate::store::{AgentCounts, AgentStore};

/// Input vocabulary of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    NavigateTo(Page),
    FragmentChanged(String),
    NextPage,
    PreviousPage,
    SelectNext,
    SelectPrevious,
    TogglePause(AgentId),
    TogglePauseSelected,
    RequestDelete(AgentId),
    RequestDeleteSelected,
    NewAgent,
    Activate(String),
    FocusNextControl,
    ActivateFocused,
    Export,
    ConfirmModal,
    CancelModal,
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
    /// New size of the chart's container, in cells
    Resize(u16, u16),
    Quit,
}

/// Work the caller must perform after an action
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Remember the page for the next start
    PersistPage(Page),
    /// Write the snapshot as a download
    Export(ExportSnapshot),
    Quit,
}

#[derive(Debug, Clone, Default)]
struct SearchState {
    /// Query being typed, present while the prompt is open
    input: Option<String>,
    /// Last submitted query
    applied: String,
}

pub struct Dashboard {
    timing: TimingSettings,
    store: AgentStore,
    nav: Navigator,
    modal: ModalSlot,
    notifications: NotificationCenter,
    ticks: Box<dyn TickSource>,
    simulation: Simulation,
    now: Duration,
    removing: Vec<(AgentId, Duration)>,
    selected: usize,
    focused_control: usize,
    search: SearchState,
    chart_area: Option<(u16, u16)>,
    chart: Option<ChartViewport>,
    should_quit: bool,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("page", &self.nav.current())
            .field("agents", &self.store.len())
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Dashboard seeded with the fixture agents and a real-time ticker
    pub fn new(config: &DashboardConfig) -> Self {
        let ticks = IntervalTicks::new(config.timing.agent_tick(), Duration::ZERO);
        Self::with_parts(config, AgentStore::with_fixtures(), Box::new(ticks))
    }

    pub fn with_parts(
        config: &DashboardConfig,
        store: AgentStore,
        ticks: Box<dyn TickSource>,
    ) -> Self {
        Self {
            timing: config.timing.clone(),
            store,
            nav: Navigator::default(),
            modal: ModalSlot::default(),
            notifications: NotificationCenter::new(config.timing.notification_ttl()),
            ticks,
            simulation: Simulation::new(
                config.simulation.max_progress_step,
                config.simulation.seed,
            ),
            now: Duration::ZERO,
            removing: Vec::new(),
            selected: 0,
            focused_control: 0,
            search: SearchState::default(),
            chart_area: None,
            chart: None,
            should_quit: false,
        }
    }

    /// Apply a fragment read at startup. Invalid fragments are ignored.
    pub fn restore(&mut self, fragment: &str) -> Option<Page> {
        match self.nav.on_fragment_change(fragment) {
            Ok(page) => {
                self.after_page_change();
                Some(page)
            }
            Err(e) => {
                debug!(error = %e, "start page not restored");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn page(&self) -> Page {
        self.nav.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn store(&self) -> &AgentStore {
        &self.store
    }

    pub fn counts(&self) -> AgentCounts {
        self.store.counts()
    }

    pub fn modal(&self) -> &ModalSlot {
        &self.modal
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn chart_viewport(&self) -> Option<ChartViewport> {
        self.chart
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input_mode(&self) -> InputMode {
        if self.modal.is_open() {
            InputMode::Modal
        } else if self.search.input.is_some() {
            InputMode::Search
        } else {
            InputMode::Normal
        }
    }

    /// Query currently filtering the agent list
    pub fn search_query(&self) -> &str {
        self.search.input.as_deref().unwrap_or(&self.search.applied)
    }

    pub fn is_searching(&self) -> bool {
        self.search.input.is_some()
    }

    /// Agents shown in the list, after search filtering
    pub fn visible_agents(&self) -> Vec<&Agent> {
        self.store.filtered(self.search_query()).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        let len = self.visible_agents().len();
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        let index = self.selected_index()?;
        self.visible_agents().get(index).copied()
    }

    /// True while the agent's removal animation is playing
    pub fn is_removing(&self, id: AgentId) -> bool {
        self.removing.iter().any(|(r, _)| *r == id)
    }

    /// Controls on the current page, in focus order
    pub fn page_controls(&self) -> Vec<&'static Control> {
        controls::for_page(self.nav.current()).collect()
    }

    pub fn focused_control(&self) -> Option<&'static Control> {
        self.page_controls().get(self.focused_control).copied()
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Move the clock to `now` and run whatever became due
    pub fn advance(&mut self, now: Duration) {
        self.now = now.max(self.now);

        if self.ticks.poll(self.now) {
            self.simulation.step(self.store.agents_mut());
        }

        let due: Vec<AgentId> = self
            .removing
            .iter()
            .filter(|(_, until)| *until <= self.now)
            .map(|(id, _)| *id)
            .collect();
        self.removing.retain(|(_, until)| *until > self.now);
        for id in due {
            self.finish_removal(id);
        }

        self.modal.expire(self.now);
        self.notifications.expire(self.now);
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        if self.modal.is_open() && !self.allowed_over_modal(&action) {
            debug!(?action, "ignored while a modal is open");
            return None;
        }

        match action {
            Action::Navigate(key) => self.navigate(&key),
            Action::NavigateTo(page) => {
                self.nav.navigate_to(page);
                self.after_page_change()
            }
            Action::FragmentChanged(fragment) => match self.nav.on_fragment_change(&fragment) {
                Ok(_) => self.after_page_change(),
                Err(e) => {
                    debug!(error = %e, "fragment change ignored");
                    None
                }
            },
            Action::NextPage => {
                self.nav.next();
                self.after_page_change()
            }
            Action::PreviousPage => {
                self.nav.previous();
                self.after_page_change()
            }
            Action::SelectNext => {
                let len = self.visible_agents().len();
                if len > 0 {
                    self.selected = (self.selected.min(len - 1) + 1) % len;
                }
                None
            }
            Action::SelectPrevious => {
                let len = self.visible_agents().len();
                if len > 0 {
                    let current = self.selected.min(len - 1);
                    self.selected = if current == 0 { len - 1 } else { current - 1 };
                }
                None
            }
            Action::TogglePause(id) => {
                self.toggle_pause(id);
                None
            }
            Action::TogglePauseSelected => {
                if let Some(id) = self.selected_agent().map(|a| a.id) {
                    self.toggle_pause(id);
                }
                None
            }
            Action::RequestDelete(id) => {
                self.request_delete(id);
                None
            }
            Action::RequestDeleteSelected => {
                if let Some(id) = self.selected_agent().map(|a| a.id) {
                    self.request_delete(id);
                }
                None
            }
            Action::NewAgent => self.activate(NEW_AGENT_CONTROL),
            Action::Activate(id) => self.activate(&id),
            Action::FocusNextControl => {
                let len = self.page_controls().len();
                if len > 0 {
                    self.focused_control = (self.focused_control + 1) % len;
                }
                None
            }
            Action::ActivateFocused => {
                let id = self.focused_control()?.id;
                self.activate(id)
            }
            Action::Export => Some(Effect::Export(self.export_snapshot())),
            Action::ConfirmModal => {
                self.confirm_modal();
                None
            }
            Action::CancelModal => {
                if self.modal.close(self.now + self.timing.modal_fade()).is_some() {
                    debug!("modal cancelled");
                }
                None
            }
            Action::OpenSearch => {
                self.search.input = Some(String::new());
                None
            }
            Action::SearchInput(c) => {
                if let Some(input) = self.search.input.as_mut() {
                    input.push(c);
                    self.selected = 0;
                }
                None
            }
            Action::SearchBackspace => {
                if let Some(input) = self.search.input.as_mut() {
                    input.pop();
                }
                None
            }
            Action::SubmitSearch => {
                if let Some(query) = self.search.input.take() {
                    let query = query.trim().to_string();
                    if !query.is_empty() {
                        self.notify(NotificationKind::Info, format!("Searching for \"{}\"", query));
                    }
                    self.search.applied = query;
                    self.selected = 0;
                }
                None
            }
            Action::CancelSearch => {
                self.search = SearchState::default();
                None
            }
            Action::Resize(width, height) => {
                self.on_resize(width, height);
                None
            }
            Action::Quit => {
                self.should_quit = true;
                Some(Effect::Quit)
            }
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.notifications.push(kind, message, self.now)
    }

    /// Snapshot of the state at this instant
    pub fn export_snapshot(&self) -> ExportSnapshot {
        ExportSnapshot::new(Utc::now(), self.nav.current(), self.store.snapshot())
    }

    /// Report the outcome of an export download
    pub fn export_finished(&mut self, result: &Result<std::path::PathBuf>) {
        match result {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.notify(NotificationKind::Success, format!("Exported {}", name));
            }
            Err(e) => {
                self.notify(NotificationKind::Warning, format!("Export failed: {}", e));
            }
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Actions that still apply while a modal is open. Anything that opens
    /// a modal gets through and replaces the current one.
    fn allowed_over_modal(&self, action: &Action) -> bool {
        match action {
            Action::ConfirmModal
            | Action::CancelModal
            | Action::Resize(..)
            | Action::Quit
            | Action::RequestDelete(_)
            | Action::RequestDeleteSelected
            | Action::NewAgent => true,
            Action::Activate(id) => controls::find(id).is_ok_and(|c| c.effect.modal().is_some()),
            Action::ActivateFocused => self
                .focused_control()
                .is_some_and(|c| c.effect.modal().is_some()),
            _ => false,
        }
    }

    fn navigate(&mut self, key: &str) -> Option<Effect> {
        match self.nav.navigate(key) {
            Ok(_) => self.after_page_change(),
            Err(e) => {
                debug!(error = %e, "navigation ignored");
                None
            }
        }
    }

    fn after_page_change(&mut self) -> Option<Effect> {
        self.focused_control = 0;
        let page = self.nav.current();
        if page == Page::Dashboard {
            self.refresh_chart();
        }
        Some(Effect::PersistPage(page))
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.chart_area = Some((width, height));
        if self.nav.current() == Page::Dashboard {
            self.refresh_chart();
        }
    }

    fn refresh_chart(&mut self) {
        if let Some((width, height)) = self.chart_area {
            self.chart = Some(ChartViewport::new(width, height));
        }
    }

    fn toggle_pause(&mut self, id: AgentId) {
        if self.is_removing(id) {
            debug!(agent = %id, "ignoring pause during removal");
            return;
        }
        match self.store.toggle_pause(id) {
            Ok(state) => {
                let name = self
                    .store
                    .get(id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|_| id.to_string());
                let verb = if state.is_paused() { "paused" } else { "resumed" };
                info!(agent = %id, %state, "agent {}", verb);
                self.notify(NotificationKind::Info, format!("{} {}", name, verb));
            }
            Err(e) => debug!(error = %e, "pause ignored"),
        }
    }

    fn request_delete(&mut self, id: AgentId) {
        if self.is_removing(id) {
            return;
        }
        match self.store.get(id) {
            Ok(agent) => {
                let modal = Modal::delete_agent(id, &agent.name);
                self.modal.open(modal);
            }
            Err(e) => debug!(error = %e, "delete ignored"),
        }
    }

    fn activate(&mut self, control_id: &str) -> Option<Effect> {
        let control = match controls::find(control_id) {
            Ok(control) => control,
            Err(e) => {
                debug!(error = %e, "no handler registered");
                return None;
            }
        };
        match control.effect {
            ControlEffect::Notify(kind, message) => {
                self.notify(kind, message);
                None
            }
            ControlEffect::Modal { .. } => {
                if let Some(modal) = control.effect.modal() {
                    self.modal.open(modal);
                }
                None
            }
            ControlEffect::Export => Some(Effect::Export(self.export_snapshot())),
        }
    }

    fn confirm_modal(&mut self) {
        let Some(modal) = self.modal.close(self.now + self.timing.modal_fade()) else {
            return;
        };
        match modal.on_confirm {
            ModalAction::DeleteAgent(id) => {
                if self.store.contains(id) && !self.is_removing(id) {
                    debug!(agent = %id, "removal animation started");
                    self.removing
                        .push((id, self.now + self.timing.removal_animation()));
                }
            }
            ModalAction::SpawnAgent => {
                let id = self.store.spawn();
                info!(agent = %id, "agent created");
                self.notify(NotificationKind::Success, format!("Agent {} created", id));
            }
            ModalAction::Notify { kind, message } => {
                self.notify(kind, message);
            }
        }
    }

    fn finish_removal(&mut self, id: AgentId) {
        let selected = self.selected_agent().map(|a| a.id);
        match self.store.remove(id) {
            Ok(agent) => {
                info!(agent = %id, remaining = self.store.len(), "agent deleted");
                self.notify(NotificationKind::Success, format!("{} deleted", agent.name));
                self.reselect(selected);
            }
            Err(e) => debug!(error = %e, "agent already gone"),
        }
    }

    /// Keep the highlight on `id` if it is still listed, otherwise on the
    /// row that took its place
    fn reselect(&mut self, id: Option<AgentId>) {
        let visible = self.visible_agents();
        let index = id.and_then(|id| visible.iter().position(|a| a.id == id));
        let len = visible.len();
        self.selected = index.unwrap_or_else(|| self.selected.min(len.saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentState;
    use crate::overlay::ModalKind;
    use crate::scheduler::ManualTicks;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn dashboard() -> Dashboard {
        let config = DashboardConfig::new().with_seed(5);
        Dashboard::new(&config)
    }

    #[test]
    fn test_starts_on_dashboard_with_fixtures() {
        let dash = dashboard();
        assert_eq!(dash.page(), Page::Dashboard);
        assert_eq!(dash.counts().total, 3);
        assert_eq!(dash.input_mode(), InputMode::Normal);
    }

    #[test]
    fn test_navigate_returns_persist_effect() {
        let mut dash = dashboard();
        assert_eq!(
            dash.dispatch(Action::Navigate("rag".into())),
            Some(Effect::PersistPage(Page::Rag))
        );
        assert_eq!(dash.dispatch(Action::Navigate("nowhere".into())), None);
        assert_eq!(dash.page(), Page::Rag);

        assert_eq!(
            dash.dispatch(Action::FragmentChanged("#mcp".into())),
            Some(Effect::PersistPage(Page::Mcp))
        );
        assert_eq!(dash.dispatch(Action::FragmentChanged("#".into())), None);
        assert_eq!(dash.page(), Page::Mcp);
    }

    #[test]
    fn test_restore_ignores_bad_fragment() {
        let mut dash = dashboard();
        assert_eq!(dash.restore("#zzz"), None);
        assert_eq!(dash.page(), Page::Dashboard);
        assert_eq!(dash.restore("#ftops"), Some(Page::Ftops));
    }

    #[test]
    fn test_delete_needs_confirmation_then_animation() {
        let mut dash = dashboard();
        dash.dispatch(Action::RequestDelete(AgentId(1)));
        assert_eq!(dash.modal().current().map(|m| m.kind), Some(ModalKind::Danger));
        assert_eq!(dash.counts().total, 3);

        dash.dispatch(Action::ConfirmModal);
        assert!(dash.is_removing(AgentId(1)));
        dash.advance(ms(299));
        assert_eq!(dash.counts().total, 3);

        dash.advance(ms(300));
        assert_eq!(dash.counts().total, 2);
        assert!(!dash.store().contains(AgentId(1)));
        assert!(dash
            .notifications()
            .iter()
            .any(|n| n.message == "Research Agent deleted"));
    }

    #[test]
    fn test_cancel_keeps_agent() {
        let mut dash = dashboard();
        dash.dispatch(Action::RequestDelete(AgentId(2)));
        dash.dispatch(Action::CancelModal);
        dash.advance(ms(5000));
        assert_eq!(dash.counts().total, 3);
        assert_eq!(dash.modal().present(), 0);
    }

    #[test]
    fn test_actions_ignored_while_modal_open() {
        let mut dash = dashboard();
        dash.dispatch(Action::RequestDelete(AgentId(2)));
        assert_eq!(dash.input_mode(), InputMode::Modal);
        assert_eq!(dash.dispatch(Action::NavigateTo(Page::Rag)), None);
        assert_eq!(dash.page(), Page::Dashboard);
        dash.dispatch(Action::Activate("refresh-btn".into()));
        assert!(dash.notifications().is_empty());
    }

    #[test]
    fn test_new_modal_replaces_open_one() {
        let mut dash = dashboard();
        dash.dispatch(Action::RequestDelete(AgentId(1)));
        dash.dispatch(Action::RequestDelete(AgentId(2)));
        assert_eq!(dash.modal().present(), 1);
        let modal = dash.modal().current().unwrap();
        assert!(modal.body.contains("Code Review Agent"));
        assert_eq!(modal.on_confirm, ModalAction::DeleteAgent(AgentId(2)));

        dash.dispatch(Action::Activate("start-training-btn".into()));
        assert_eq!(dash.modal().present(), 1);
        assert!(!matches!(
            dash.modal().current().map(|m| &m.on_confirm),
            Some(ModalAction::DeleteAgent(_))
        ));

        dash.dispatch(Action::NewAgent);
        dash.dispatch(Action::ConfirmModal);
        assert_eq!(dash.counts().total, 4);
        dash.advance(ms(1000));
        assert_eq!(dash.counts().total, 4);
    }

    #[test]
    fn test_pause_toggles_and_notifies() {
        let mut dash = dashboard();
        dash.dispatch(Action::TogglePause(AgentId(1)));
        assert_eq!(dash.store().get(AgentId(1)).unwrap().state, AgentState::Paused);
        assert_eq!(
            dash.notifications().latest().map(|n| n.message.as_str()),
            Some("Research Agent paused")
        );
        dash.dispatch(Action::TogglePause(AgentId(1)));
        assert_eq!(dash.store().get(AgentId(1)).unwrap().state, AgentState::Running);

        dash.dispatch(Action::TogglePause(AgentId(42)));
        assert_eq!(dash.notifications().len(), 2);
    }

    #[test]
    fn test_ticks_drive_progress() {
        let config = DashboardConfig::new().with_seed(1).with_max_progress_step(100);
        let mut ticks = ManualTicks::new();
        ticks.fire(3);
        let mut dash = Dashboard::with_parts(&config, AgentStore::with_fixtures(), Box::new(ticks));

        for i in 1..=5 {
            dash.advance(ms(i));
        }
        let agent = dash.store().get(AgentId(1)).unwrap();
        assert_eq!(agent.time, 754 + 3);
        assert!(agent.progress <= 100);
    }

    #[test]
    fn test_unknown_control_is_silent() {
        let mut dash = dashboard();
        assert_eq!(dash.dispatch(Action::Activate("renamed-btn".into())), None);
        assert!(dash.notifications().is_empty());
        assert_eq!(dash.modal().present(), 0);
    }

    #[test]
    fn test_new_agent_flow() {
        let mut dash = dashboard();
        dash.dispatch(Action::NewAgent);
        assert!(dash.modal().is_open());
        dash.dispatch(Action::ConfirmModal);
        assert_eq!(dash.counts().total, 4);
        assert!(dash.store().contains(AgentId(4)));
    }

    #[test]
    fn test_focus_and_activate_controls() {
        let mut dash = dashboard();
        assert_eq!(dash.focused_control().map(|c| c.id), Some("refresh-btn"));
        dash.dispatch(Action::FocusNextControl);
        assert!(matches!(
            dash.dispatch(Action::ActivateFocused),
            Some(Effect::Export(_))
        ));

        dash.dispatch(Action::NavigateTo(Page::Security));
        assert_eq!(dash.focused_control().map(|c| c.id), Some("run-scan-btn"));
        dash.dispatch(Action::ActivateFocused);
        assert_eq!(
            dash.notifications().latest().map(|n| n.kind),
            Some(NotificationKind::Warning)
        );
    }

    #[test]
    fn test_search_filters_list() {
        let mut dash = dashboard();
        dash.dispatch(Action::OpenSearch);
        for c in "review".chars() {
            dash.dispatch(Action::SearchInput(c));
        }
        assert_eq!(dash.visible_agents().len(), 1);
        dash.dispatch(Action::SubmitSearch);
        assert_eq!(dash.input_mode(), InputMode::Normal);
        assert_eq!(dash.search_query(), "review");
        assert_eq!(dash.selected_agent().map(|a| a.id), Some(AgentId(2)));

        dash.dispatch(Action::OpenSearch);
        dash.dispatch(Action::CancelSearch);
        assert_eq!(dash.visible_agents().len(), 3);
    }

    #[test]
    fn test_selection_wraps_and_clamps() {
        let mut dash = dashboard();
        dash.dispatch(Action::SelectPrevious);
        assert_eq!(dash.selected_agent().map(|a| a.id), Some(AgentId(3)));
        dash.dispatch(Action::SelectNext);
        assert_eq!(dash.selected_agent().map(|a| a.id), Some(AgentId(1)));

        dash.dispatch(Action::SelectPrevious);
        dash.dispatch(Action::RequestDeleteSelected);
        dash.dispatch(Action::ConfirmModal);
        dash.advance(ms(1000));
        assert_eq!(dash.selected_agent().map(|a| a.id), Some(AgentId(2)));
    }

    #[test]
    fn test_selection_follows_agent_when_row_above_is_deleted() {
        let mut dash = dashboard();
        dash.dispatch(Action::SelectPrevious);
        assert_eq!(dash.selected_agent().map(|a| a.id), Some(AgentId(3)));

        dash.dispatch(Action::RequestDelete(AgentId(1)));
        dash.dispatch(Action::ConfirmModal);
        dash.advance(ms(1000));
        assert_eq!(dash.counts().total, 2);
        assert_eq!(dash.selected_index(), Some(1));
        assert_eq!(dash.selected_agent().map(|a| a.id), Some(AgentId(3)));
    }

    #[test]
    fn test_chart_only_recomputed_on_dashboard() {
        let mut dash = dashboard();
        dash.dispatch(Action::Resize(80, 24));
        assert_eq!(dash.chart_viewport().map(|v| v.width), Some(80));

        dash.dispatch(Action::NavigateTo(Page::Agents));
        dash.dispatch(Action::Resize(120, 40));
        assert_eq!(dash.chart_viewport().map(|v| v.width), Some(80));

        dash.dispatch(Action::NavigateTo(Page::Dashboard));
        assert_eq!(dash.chart_viewport().map(|v| v.width), Some(120));
    }

    #[test]
    fn test_export_finished_reports_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let mut dash = dashboard();
        let result = dash.export_snapshot().write_to(dir.path());
        assert!(result.as_ref().unwrap().exists());
        dash.export_finished(&result);
        assert_eq!(
            dash.notifications().latest().map(|n| n.kind),
            Some(NotificationKind::Success)
        );

        let blocked = dir.path().join("file");
        std::fs::write(&blocked, "").unwrap();
        let result = dash.export_snapshot().write_to(blocked.join("sub"));
        assert!(result.is_err());
        dash.export_finished(&result);
        assert_eq!(
            dash.notifications().latest().map(|n| n.kind),
            Some(NotificationKind::Warning)
        );
    }

    #[test]
    fn test_quit() {
        let mut dash = dashboard();
        assert_eq!(dash.dispatch(Action::Quit), Some(Effect::Quit));
        assert!(dash.should_quit());
    }
}
