use serde::{Deserialize, Serialize};

use crate::search::Searchable;

/// A contact as handed to the screens by the caller.
///
/// The fields are opaque: nothing here parses or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Caller-defined identifier, used to pick a contact from search results.
    pub id: String,

    /// Name shown in lists and on the call screens.
    pub display_name: String,

    /// Avatar reference (URL, asset name, ...), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Phone number in whatever format the caller stores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Contact {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar: None,
            phone: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Letter for the avatar placeholder.
    pub fn initial(&self) -> char {
        self.display_name.chars().next().unwrap_or('?')
    }
}

impl Searchable for Contact {
    fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_falls_back_for_empty_name() {
        assert_eq!(Contact::new("1", "Linh").initial(), 'L');
        assert_eq!(Contact::new("2", "").initial(), '?');
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let contact: Contact =
            serde_json::from_str(r#"{"id":"7","display_name":"Mai"}"#).unwrap();
        assert_eq!(contact, Contact::new("7", "Mai"));
    }

    #[test]
    fn test_serialize_skips_missing_optionals() {
        let json = serde_json::to_string(&Contact::new("7", "Mai").with_phone("+84 90")).unwrap();
        assert!(json.contains("\"phone\""));
        assert!(!json.contains("\"avatar\""));
    }
}
