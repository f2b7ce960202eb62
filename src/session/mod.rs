//! The conversational session controller.
//!
//! A [`Session`] keeps a bounded [`ConversationLog`], sends it to the model
//! through the [`ModelGateway`] (which re-asserts the operating rules every few
//! queries), and hands each reply to the [`ResponseRouter`] for decoding and
//! dispatch.

pub mod console;
pub mod controller;
pub mod export;
pub mod gateway;
pub mod history;
pub mod reminder;
pub mod reply;
pub mod router;

pub use console::Console;
pub use controller::{Input, Session, SessionSettings, SessionState, TERMINATION_TOKENS};
pub use export::Exporter;
pub use gateway::ModelGateway;
pub use history::ConversationLog;
pub use reminder::ReminderScheduler;
pub use reply::{Action, SaveFlag, StructuredReply};
pub use router::{ResponseRouter, RouteOutcome};
