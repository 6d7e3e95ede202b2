//! Unit tests for the stock naming conventions.

use rstest::rstest;

use super::*;

#[rstest]
#[case::lower(Convention::Lower, "SampleREST", "samplerest")]
#[case::lower_hyphen(Convention::LowerHyphen, "SampleREST", "sample-rest")]
#[case::lower_underscore(Convention::LowerUnderscore, "getById", "get_by_id")]
#[case::lower_camel(Convention::LowerCamel, "get_by_id", "getById")]
#[case::upper_camel(Convention::UpperCamel, "get_by_id", "GetById")]
fn rename_applies_convention(#[case] namer: Convention, #[case] raw: &str, #[case] expected: &str) {
    assert_eq!(namer.rename(raw), expected);
}

#[rstest]
#[case::lower(Convention::Lower, "lower")]
#[case::lower_hyphen(Convention::LowerHyphen, "lower-hyphen")]
#[case::lower_underscore(Convention::LowerUnderscore, "lower-underscore")]
#[case::lower_camel(Convention::LowerCamel, "lower-camel")]
#[case::upper_camel(Convention::UpperCamel, "upper-camel")]
fn label_matches_display(#[case] namer: Convention, #[case] label: &str) {
    assert_eq!(namer.label(), label);
    assert_eq!(namer.to_string(), label);
}

#[test]
fn rename_is_deterministic() {
    let namer: &dyn Namer = &Convention::LowerHyphen;
    assert_eq!(namer.rename("deleteById"), namer.rename("deleteById"));
}

#[test]
fn serde_round_trips_the_label() {
    let json = serde_json::to_string(&Convention::LowerHyphen).expect("serialize");
    assert_eq!(json, "\"lower-hyphen\"");
    let back: Convention = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Convention::LowerHyphen);
}
