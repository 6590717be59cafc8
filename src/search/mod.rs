//! Contact search and country-code picker screens.

mod contacts;
mod country_picker;

pub use contacts::ContactSearchScreen;
pub use country_picker::CountryPicker;
