// Runtime-free types and search logic live in chatcore.
pub use chatcore::{
    COUNTRIES, CallMediaType, CallPhase, CallSession, Contact, Country, EntryGroup, NavSignal,
    SearchError, SearchIndex, Searchable, filter, format_elapsed, group, group_key,
};

pub mod calls;
pub mod config;
pub mod search;
