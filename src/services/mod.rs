//! Services for backend access and fetch orchestration

pub mod backend;
pub mod event_data;
pub mod formatter;

pub use backend::{EventStore, SupabaseClient};
pub use event_data::EventDataService;
