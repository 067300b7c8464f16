//! AgentDash Core - view-state engine for the AgentDash operations dashboard
//!
//! Everything the dashboard shows is owned and mutated here, with no
//! dependency on a terminal or any other renderer. The `agentdash` binary
//! draws this state and feeds key presses back in as [`Action`]s.
//!
//! # Architecture
//!
//! - **Store** (`store`): the agent records and their derived counts
//! - **Navigation** (`navigation`, `page`): one visible page at a time,
//!   persisted as a `#page` fragment
//! - **Overlays** (`overlay`): a single modal slot and a toast stack
//! - **Controls** (`controls`): control ids and the effect each one has
//! - **Scheduler** (`scheduler`): tick sources plus the pure progress update
//! - **Chart** (`chart`): constant series and canvas projection
//! - **Export** (`export`): the JSON download
//! - **Dashboard** (`dashboard`): the controller tying it all together
//!
//! # Quick Start
//!
//! ```
//! use agentdash_core::{Action, Dashboard, DashboardConfig, Page};
//! use std::time::Duration;
//!
//! let config = DashboardConfig::new().with_seed(7);
//! let mut dash = Dashboard::new(&config);
//!
//! dash.dispatch(Action::NavigateTo(Page::Agents));
//! dash.dispatch(Action::TogglePauseSelected);
//! dash.advance(Duration::from_secs(1));
//!
//! assert_eq!(dash.page(), Page::Agents);
//! assert_eq!(dash.counts().paused, 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod agent;
pub mod chart;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod keymap;
pub mod navigation;
pub mod overlay;
pub mod page;
pub mod scheduler;
pub mod store;

pub use agent::{Agent, AgentId, AgentState};
pub use config::DashboardConfig;
pub use dashboard::{Action, Dashboard, Effect};
pub use error::{DashError, Result, ResultExt};
pub use export::ExportSnapshot;
pub use keymap::{map_key, InputMode, Key};
pub use navigation::{Navigator, SessionFile};
pub use overlay::{Modal, ModalKind, Notification, NotificationKind};
pub use page::Page;
pub use store::{AgentCounts, AgentStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
