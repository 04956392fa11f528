//! History domain module

mod record;

pub use record::{HistoryRecord, NewHistoryRecord};
