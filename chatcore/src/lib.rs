pub mod error;
pub mod search;
pub mod types;

pub use error::SearchError;
pub use search::{EntryGroup, SearchIndex, Searchable, filter, group, group_key};
pub use types::call::{CallMediaType, CallPhase, CallSession, format_elapsed};
pub use types::contact::Contact;
pub use types::country::{COUNTRIES, Country};
pub use types::nav::NavSignal;
