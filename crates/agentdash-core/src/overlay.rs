//! Modals and toast notifications
//!
//! Both are transient. Times are offsets from dashboard start so that the
//! fade-out and auto-dismiss delays can be driven from tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agent::AgentId;

/// Presentation class of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Duration,
    pub expires_at: Duration,
}

/// Stack of live notifications. No queue limit and no de-duplication.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(id, ?kind, %message, "notification");
        self.items.push(Notification {
            id,
            kind,
            message,
            created_at: now,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Drop notifications whose delay has elapsed; returns how many went
    pub fn expire(&mut self, now: Duration) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        before - self.items.len()
    }

    /// Live notifications, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Generic confirm/cancel
    Confirm,
    /// Destructive confirmation
    Danger,
}

/// What confirming a modal does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    DeleteAgent(AgentId),
    SpawnAgent,
    Notify {
        kind: NotificationKind,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub body: String,
    pub confirm_label: &'static str,
    pub on_confirm: ModalAction,
}

impl Modal {
    pub fn confirm(title: impl Into<String>, body: impl Into<String>, on_confirm: ModalAction) -> Self {
        Self {
            kind: ModalKind::Confirm,
            title: title.into(),
            body: body.into(),
            confirm_label: "Confirm",
            on_confirm,
        }
    }

    pub fn delete_agent(id: AgentId, name: &str) -> Self {
        Self {
            kind: ModalKind::Danger,
            title: "Delete Agent".to_string(),
            body: format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                name
            ),
            confirm_label: "Delete",
            on_confirm: ModalAction::DeleteAgent(id),
        }
    }
}

/// Holder for the single modal. A closed modal lingers while fading out.
#[derive(Debug, Clone, Default)]
pub struct ModalSlot {
    open: Option<Modal>,
    fading: Option<(Modal, Duration)>,
}

impl ModalSlot {
    /// Show `modal`, evicting any open or fading modal
    pub fn open(&mut self, modal: Modal) {
        if self.open.is_some() || self.fading.is_some() {
            debug!(title = %modal.title, "replacing existing modal");
        }
        self.fading = None;
        self.open = Some(modal);
    }

    /// Close the open modal and start its fade-out, which ends at `until`
    pub fn close(&mut self, until: Duration) -> Option<Modal> {
        let modal = self.open.take()?;
        self.fading = Some((modal.clone(), until));
        Some(modal)
    }

    pub fn expire(&mut self, now: Duration) {
        if matches!(self.fading, Some((_, until)) if until <= now) {
            self.fading = None;
        }
    }

    /// The modal accepting input
    pub fn current(&self) -> Option<&Modal> {
        self.open.as_ref()
    }

    pub fn fading(&self) -> Option<&Modal> {
        self.fading.as_ref().map(|(modal, _)| modal)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Number of modals on screen, open or fading
    pub fn present(&self) -> usize {
        usize::from(self.open.is_some()) + usize::from(self.fading.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn info(message: &str) -> ModalAction {
        ModalAction::Notify {
            kind: NotificationKind::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_notifications_stack_and_expire() {
        let mut center = NotificationCenter::new(ms(3000));
        center.push(NotificationKind::Info, "one", ms(0));
        center.push(NotificationKind::Info, "one", ms(10));
        center.push(NotificationKind::Success, "two", ms(2000));
        assert_eq!(center.len(), 3);

        assert_eq!(center.expire(ms(2999)), 0);
        assert_eq!(center.expire(ms(3000)), 1);
        assert_eq!(center.expire(ms(3010)), 1);
        assert_eq!(center.latest().map(|n| n.message.as_str()), Some("two"));
        assert_eq!(center.expire(ms(5000)), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_notification_ids_increase() {
        let mut center = NotificationCenter::new(ms(100));
        let a = center.push(NotificationKind::Warning, "a", ms(0));
        let b = center.push(NotificationKind::Warning, "b", ms(0));
        assert!(b > a);
    }

    #[test]
    fn test_second_modal_replaces_first() {
        let mut slot = ModalSlot::default();
        slot.open(Modal::confirm("First", "", info("1")));
        slot.open(Modal::confirm("Second", "", info("2")));
        assert_eq!(slot.present(), 1);
        assert_eq!(slot.current().map(|m| m.title.as_str()), Some("Second"));
    }

    #[test]
    fn test_open_evicts_fading_modal() {
        let mut slot = ModalSlot::default();
        slot.open(Modal::confirm("First", "", info("1")));
        slot.close(ms(300));
        assert!(!slot.is_open());
        assert_eq!(slot.present(), 1);

        slot.open(Modal::delete_agent(AgentId(1), "Research Agent"));
        assert_eq!(slot.present(), 1);
        assert!(slot.fading().is_none());
        assert_eq!(slot.current().map(|m| m.kind), Some(ModalKind::Danger));
    }

    #[test]
    fn test_fade_out() {
        let mut slot = ModalSlot::default();
        assert!(slot.close(ms(10)).is_none());

        slot.open(Modal::confirm("Only", "", ModalAction::SpawnAgent));
        let closed = slot.close(ms(300)).unwrap();
        assert_eq!(closed.on_confirm, ModalAction::SpawnAgent);

        slot.expire(ms(299));
        assert!(slot.fading().is_some());
        slot.expire(ms(300));
        assert_eq!(slot.present(), 0);
    }

    #[test]
    fn test_delete_modal_names_agent() {
        let modal = Modal::delete_agent(AgentId(2), "Code Review Agent");
        assert!(modal.body.contains("Code Review Agent"));
        assert_eq!(modal.confirm_label, "Delete");
    }
}
