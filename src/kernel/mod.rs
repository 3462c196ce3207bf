//! Headless session core (state/action/effect/event).

pub mod action;
pub mod doc_kind;
pub mod effect;
pub mod event;
pub mod notify;
pub mod services;
pub mod state;
pub mod store;
pub mod tabs;

pub use action::Action;
pub use doc_kind::DocKind;
pub use effect::Effect;
pub use event::SessionEvent;
pub use notify::{Notification, NotificationCenter, NotificationId, Severity};
pub use state::{DirLoadApplied, SessionState, TreeState};
pub use store::{DispatchResult, Store};
pub use tabs::{SaveApplied, TabState, TabsState};
