use chatscreens::search::{ContactSearchScreen, CountryPicker};
use chatscreens::{COUNTRIES, Contact, Country, NavSignal, SearchError, SearchIndex, filter, group};

fn fixture() -> Vec<Country> {
    vec![
        Country::new("Vietnam", "VN", "+84"),
        Country::new("Myanmar", "MM", "+95"),
        Country::new("Australia", "AU", "+61"),
        Country::new("Austria", "AT", "+43"),
    ]
}

#[test]
fn test_grouped_fixture_order() {
    let countries = fixture();
    let groups = group(filter(&countries, "")).unwrap();

    let keys: Vec<char> = groups.iter().map(|g| g.key).collect();
    assert_eq!(keys, vec!['V', 'M', 'A']);

    let a: Vec<&str> = groups[2].entries.iter().map(|c| c.name).collect();
    assert_eq!(a, vec!["Australia", "Austria"]);
}

#[test]
fn test_case_insensitive_match() {
    let countries = fixture();
    for query in ["VIET", "viet", "vIeT"] {
        let names: Vec<&str> = filter(&countries, query).iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Vietnam"], "query {query:?}");
    }
}

#[test]
fn test_empty_query_keeps_full_order() {
    let countries = fixture();
    assert_eq!(
        filter(&countries, "").into_iter().copied().collect::<Vec<_>>(),
        countries
    );
}

#[test]
fn test_picker_with_custom_table() {
    let mut picker = CountryPicker::with_countries(fixture()).unwrap();
    picker.set_query("au");

    let sections = picker.sections();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].entries.len(), 2);

    let picked = picker.select("AT").unwrap();
    assert_eq!(picked, NavSignal::Selected(Country::new("Austria", "AT", "+43")));
    assert_eq!(picker.cancel(), NavSignal::Close);
}

#[test]
fn test_picker_filters_builtin_table() {
    let mut picker = CountryPicker::new();
    picker.set_query("united");
    let names: Vec<&str> = picker.results().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec!["United Arab Emirates", "United Kingdom", "United States"]
    );

    picker.clear_query();
    assert_eq!(picker.results().len(), COUNTRIES.len());
}

#[test]
fn test_contacts_from_json_roster() {
    let json = r#"[
        {"id": "a1", "display_name": "Thu Ha", "phone": "+84 90 000 0001"},
        {"id": "a2", "display_name": "Tuan", "avatar": "tuan.png"},
        {"id": "a3", "display_name": "Hai"}
    ]"#;
    let contacts: Vec<Contact> = serde_json::from_str(json).unwrap();
    let mut screen = ContactSearchScreen::new(contacts).unwrap();

    screen.set_query("ha");
    let sections = screen.sections();
    let keys: Vec<char> = sections.iter().map(|g| g.key).collect();
    assert_eq!(keys, vec!['T', 'H']);

    let picked = screen.select("a2").and_then(NavSignal::selected).unwrap();
    assert_eq!(picked.avatar.as_deref(), Some("tuan.png"));
}

#[test]
fn test_empty_display_name_policy() {
    let contacts = vec![Contact::new("1", "Hoa"), Contact::new("2", "")];

    assert_eq!(
        SearchIndex::new(contacts.clone()).unwrap_err(),
        SearchError::EmptyDisplayName { position: 1 }
    );
    assert_eq!(
        group(&contacts).unwrap_err(),
        SearchError::EmptyDisplayName { position: 1 }
    );
}
