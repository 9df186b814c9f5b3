//! Process-wide acronym table
//!
//! The process table can only be installed once, so everything touching it
//! lives in a single test.

use stringcase::{to_camel_case, to_pascal_case, to_snake_case, Acronyms};

#[test]
fn test_process_acronym_table() {
    assert_eq!(to_pascal_case("APIKey"), "Apikey");

    let mut acronyms = Acronyms::new();
    acronyms.register("APIKey", "Api Key");
    acronyms.install().unwrap();

    assert_eq!(Acronyms::global().map(Acronyms::len), Some(1));
    assert_eq!(to_pascal_case("APIKey"), "ApiKey");
    assert_eq!(to_camel_case("  APIKey  "), "apiKey");

    // Exact match only
    assert_eq!(to_pascal_case("APIKeys"), "Apikeys");

    // Delimited conversions never consult the table
    assert_eq!(to_snake_case("APIKey"), "api_key");

    // A second install is rejected and the table handed back
    let mut other = Acronyms::new();
    other.register("IDs", "I Ds");
    let rejected = other.install().unwrap_err();
    assert_eq!(rejected.get("IDs"), Some("I Ds"));
    assert_eq!(to_pascal_case("IDs"), "Ids");
}
