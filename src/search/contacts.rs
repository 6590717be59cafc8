//! Contact search screen state.

use chatcore::{Contact, EntryGroup, NavSignal, SearchError, SearchIndex};
use log::debug;

/// Query plus a fixed contact list, producing sectioned results.
pub struct ContactSearchScreen {
    index: SearchIndex<Contact>,
    query: String,
}

impl ContactSearchScreen {
    /// Fails if any contact has an empty display name.
    pub fn new(contacts: Vec<Contact>) -> Result<Self, SearchError> {
        Ok(Self {
            index: SearchIndex::new(contacts)?,
            query: String::new(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(target: "Search", "Contact query: {:?}", self.query);
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Matching contacts in roster order.
    pub fn results(&self) -> Vec<&Contact> {
        self.index.filter(&self.query)
    }

    /// Matching contacts split by first letter.
    pub fn sections(&self) -> Vec<EntryGroup<'_, Contact>> {
        self.index.grouped(&self.query)
    }

    pub fn contacts(&self) -> &[Contact] {
        self.index.entries()
    }

    /// Picks the contact with `id`, if it is in the roster.
    pub fn select(&self, id: &str) -> Option<NavSignal<Contact>> {
        self.index
            .find(|c| c.id == id)
            .cloned()
            .map(NavSignal::Selected)
    }

    pub fn cancel(&self) -> NavSignal<Contact> {
        NavSignal::Close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Contact> {
        vec![
            Contact::new("1", "Minh Anh"),
            Contact::new("2", "Bao Tran"),
            Contact::new("3", "Mai Phuong"),
            Contact::new("4", "anh Tuan"),
        ]
    }

    #[test]
    fn test_query_narrows_results() {
        let mut screen = ContactSearchScreen::new(roster()).unwrap();
        assert_eq!(screen.results().len(), 4);

        screen.set_query("ANH");
        let ids: Vec<&str> = screen.results().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);

        screen.clear_query();
        assert_eq!(screen.query(), "");
        assert_eq!(screen.results().len(), 4);
    }

    #[test]
    fn test_sections() {
        let screen = ContactSearchScreen::new(roster()).unwrap();
        let keys: Vec<char> = screen.sections().iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!['M', 'B', 'a']);
        assert_eq!(screen.sections()[0].entries.len(), 2);
    }

    #[test]
    fn test_select() {
        let screen = ContactSearchScreen::new(roster()).unwrap();
        let picked = screen.select("3").and_then(NavSignal::selected).unwrap();
        assert_eq!(picked.display_name, "Mai Phuong");
        assert!(screen.select("99").is_none());
        assert_eq!(screen.cancel(), NavSignal::Close);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut contacts = roster();
        contacts.push(Contact::new("5", ""));
        assert!(matches!(
            ContactSearchScreen::new(contacts),
            Err(SearchError::EmptyDisplayName { position: 4 })
        ));
    }
}
