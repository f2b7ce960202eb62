pub mod auth;
pub mod calendar;
pub mod tasks;
pub mod traits;
pub mod types;

pub use auth::GoogleAuth;
pub use calendar::CalendarClient;
pub use tasks::TasksClient;
pub use traits::{EventCreator, TaskCreator};
pub use types::{Attendee, EventDateTime, EventPayload, TaskPayload};
