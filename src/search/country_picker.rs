//! Country-code picker state.

use chatcore::{COUNTRIES, Country, EntryGroup, NavSignal, SearchError, SearchIndex};
use log::debug;

pub struct CountryPicker {
    index: SearchIndex<Country>,
    query: String,
}

impl CountryPicker {
    /// Picker over the built-in country table.
    pub fn new() -> Self {
        Self {
            index: SearchIndex::new(COUNTRIES.to_vec())
                .unwrap_or_else(|_| unreachable!("built-in country table has no empty names")),
            query: String::new(),
        }
    }

    pub fn with_countries(countries: Vec<Country>) -> Result<Self, SearchError> {
        Ok(Self {
            index: SearchIndex::new(countries)?,
            query: String::new(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(target: "Search", "Country query: {:?}", self.query);
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn results(&self) -> Vec<&Country> {
        self.index.filter(&self.query)
    }

    pub fn sections(&self) -> Vec<EntryGroup<'_, Country>> {
        self.index.grouped(&self.query)
    }

    /// Picks a country by ISO code, ignoring case.
    pub fn select(&self, iso_code: &str) -> Option<NavSignal<Country>> {
        self.index
            .find(|c| c.iso_code.eq_ignore_ascii_case(iso_code))
            .copied()
            .map(NavSignal::Selected)
    }

    /// First country using `dial_code`. Shared codes (e.g. `+1`) resolve to
    /// whichever comes first in the table.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&Country> {
        let wanted = dial_code.trim_start_matches('+');
        self.index
            .find(|c| c.dial_code.trim_start_matches('+') == wanted)
    }

    pub fn cancel(&self) -> NavSignal<Country> {
        NavSignal::Close
    }
}

impl Default for CountryPicker {
    fn default() -> Self {
        Self::new()
    }
}
