//! Activatable controls ("buttons") and what each one does
//!
//! Controls are looked up by id. An id that is not in the registry is
//! [`DashError::UnknownControl`]; the dashboard treats that as a no-op, so
//! renaming an id silently disables its control.

use crate::error::{DashError, Result};
use crate::overlay::{Modal, ModalAction, NotificationKind};
use crate::page::Page;

/// Follow-up run when a control's modal is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEffect {
    SpawnAgent,
    Notify(NotificationKind, &'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEffect {
    Notify(NotificationKind, &'static str),
    Modal {
        title: &'static str,
        body: &'static str,
        on_confirm: ConfirmEffect,
    },
    Export,
}

impl ControlEffect {
    /// Build the modal for a modal effect
    pub fn modal(&self) -> Option<Modal> {
        match *self {
            ControlEffect::Modal {
                title,
                body,
                on_confirm,
            } => {
                let action = match on_confirm {
                    ConfirmEffect::SpawnAgent => ModalAction::SpawnAgent,
                    ConfirmEffect::Notify(kind, message) => ModalAction::Notify {
                        kind,
                        message: message.to_string(),
                    },
                };
                Some(Modal::confirm(title, body, action))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub id: &'static str,
    pub page: Page,
    pub label: &'static str,
    pub effect: ControlEffect,
}

pub const NEW_AGENT_CONTROL: &str = "new-agent-btn";
pub const EXPORT_CONTROL: &str = "export-btn";

pub const CONTROLS: &[Control] = &[
    Control {
        id: "refresh-btn",
        page: Page::Dashboard,
        label: "Refresh",
        effect: ControlEffect::Notify(NotificationKind::Info, "Dashboard refreshed"),
    },
    Control {
        id: EXPORT_CONTROL,
        page: Page::Dashboard,
        label: "Export",
        effect: ControlEffect::Export,
    },
    Control {
        id: "add-server-btn",
        page: Page::Mcp,
        label: "Add Server",
        effect: ControlEffect::Modal {
            title: "Add MCP Server",
            body: "Register a new Model Context Protocol server?",
            on_confirm: ConfirmEffect::Notify(NotificationKind::Success, "MCP server added"),
        },
    },
    Control {
        id: "test-connection-btn",
        page: Page::Mcp,
        label: "Test Connection",
        effect: ControlEffect::Notify(NotificationKind::Success, "All MCP servers reachable"),
    },
    Control {
        id: "upload-doc-btn",
        page: Page::Rag,
        label: "Upload Document",
        effect: ControlEffect::Modal {
            title: "Upload Document",
            body: "Add a document to the retrieval index?",
            on_confirm: ConfirmEffect::Notify(NotificationKind::Success, "Document queued for indexing"),
        },
    },
    Control {
        id: "reindex-btn",
        page: Page::Rag,
        label: "Reindex",
        effect: ControlEffect::Notify(NotificationKind::Info, "Reindexing started"),
    },
    Control {
        id: NEW_AGENT_CONTROL,
        page: Page::Agents,
        label: "New Agent",
        effect: ControlEffect::Modal {
            title: "Create New Agent",
            body: "Start a new agent with default settings?",
            on_confirm: ConfirmEffect::SpawnAgent,
        },
    },
    Control {
        id: "run-graph-btn",
        page: Page::Langgraph,
        label: "Run Graph",
        effect: ControlEffect::Notify(NotificationKind::Info, "Graph execution started"),
    },
    Control {
        id: "start-training-btn",
        page: Page::Ftops,
        label: "Start Training",
        effect: ControlEffect::Modal {
            title: "Start Fine-Tuning",
            body: "Launch a fine-tuning job on the latest dataset?",
            on_confirm: ConfirmEffect::Notify(NotificationKind::Success, "Training job submitted"),
        },
    },
    Control {
        id: "run-scan-btn",
        page: Page::Security,
        label: "Run Scan",
        effect: ControlEffect::Notify(NotificationKind::Warning, "Security scan found 3 low-severity issues"),
    },
];

pub fn find(id: &str) -> Result<&'static Control> {
    CONTROLS
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| DashError::UnknownControl(id.to_string()))
}

/// Controls shown on `page`, in display order
pub fn for_page(page: Page) -> impl Iterator<Item = &'static Control> {
    CONTROLS.iter().filter(move |c| c.page == page)
}
