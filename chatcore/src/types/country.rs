use serde::Serialize;

use crate::search::Searchable;

/// A dialing-code entry for the country picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: &'static str,
    /// International dialing prefix, including the leading `+`.
    pub dial_code: &'static str,
}

impl Country {
    pub const fn new(name: &'static str, iso_code: &'static str, dial_code: &'static str) -> Self {
        Self {
            name,
            iso_code,
            dial_code,
        }
    }

    /// Label used in the picker rows, e.g. `Vietnam (+84)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.dial_code)
    }
}

impl Searchable for Country {
    fn display_name(&self) -> &str {
        self.name
    }
}

pub static COUNTRIES: &[Country] = &[
    Country::new("Argentina", "AR", "+54"),
    Country::new("Australia", "AU", "+61"),
    Country::new("Austria", "AT", "+43"),
    Country::new("Bangladesh", "BD", "+880"),
    Country::new("Belgium", "BE", "+32"),
    Country::new("Brazil", "BR", "+55"),
    Country::new("Brunei", "BN", "+673"),
    Country::new("Cambodia", "KH", "+855"),
    Country::new("Canada", "CA", "+1"),
    Country::new("Chile", "CL", "+56"),
    Country::new("China", "CN", "+86"),
    Country::new("Colombia", "CO", "+57"),
    Country::new("Denmark", "DK", "+45"),
    Country::new("Egypt", "EG", "+20"),
    Country::new("Finland", "FI", "+358"),
    Country::new("France", "FR", "+33"),
    Country::new("Germany", "DE", "+49"),
    Country::new("Greece", "GR", "+30"),
    Country::new("Hong Kong", "HK", "+852"),
    Country::new("India", "IN", "+91"),
    Country::new("Indonesia", "ID", "+62"),
    Country::new("Ireland", "IE", "+353"),
    Country::new("Italy", "IT", "+39"),
    Country::new("Japan", "JP", "+81"),
    Country::new("Laos", "LA", "+856"),
    Country::new("Malaysia", "MY", "+60"),
    Country::new("Mexico", "MX", "+52"),
    Country::new("Myanmar", "MM", "+95"),
    Country::new("Netherlands", "NL", "+31"),
    Country::new("New Zealand", "NZ", "+64"),
    Country::new("Nigeria", "NG", "+234"),
    Country::new("Norway", "NO", "+47"),
    Country::new("Pakistan", "PK", "+92"),
    Country::new("Philippines", "PH", "+63"),
    Country::new("Poland", "PL", "+48"),
    Country::new("Portugal", "PT", "+351"),
    Country::new("Russia", "RU", "+7"),
    Country::new("Saudi Arabia", "SA", "+966"),
    Country::new("Singapore", "SG", "+65"),
    Country::new("South Africa", "ZA", "+27"),
    Country::new("South Korea", "KR", "+82"),
    Country::new("Spain", "ES", "+34"),
    Country::new("Sweden", "SE", "+46"),
    Country::new("Switzerland", "CH", "+41"),
    Country::new("Taiwan", "TW", "+886"),
    Country::new("Thailand", "TH", "+66"),
    Country::new("Turkey", "TR", "+90"),
    Country::new("Ukraine", "UA", "+380"),
    Country::new("United Arab Emirates", "AE", "+971"),
    Country::new("United Kingdom", "GB", "+44"),
    Country::new("United States", "US", "+1"),
    Country::new("Vietnam", "VN", "+84"),
];
