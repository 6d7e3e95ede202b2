//! Unit tests for action descriptors.

use rstest::rstest;

use super::*;

#[test]
fn new_action_defaults_metadata() {
    let action = Action::new("getAll", "get_all", Verb::Get);
    assert_eq!(action.name(), "getAll");
    assert_eq!(action.handler_ref(), "get_all");
    assert_eq!(action.desc(), "");
    assert!(action.roles().is_empty());
}

#[test]
fn builders_attach_metadata() {
    let action = Action::new("rolesSpecific", "roles_specific", Verb::Post)
        .with_desc("allows access by specific role")
        .with_roles(vec![String::from("dev")]);
    assert_eq!(action.desc(), "allows access by specific role");
    assert_eq!(action.roles(), [String::from("dev")]);
}

#[test]
fn key_is_the_action_name() {
    let action = Action::new("patch", "patch", Verb::Patch);
    assert_eq!(action.key(), "patch");
}

#[rstest]
#[case::auto(Verb::Auto, "auto")]
#[case::get(Verb::Get, "get")]
#[case::post(Verb::Post, "post")]
#[case::put(Verb::Put, "put")]
#[case::patch(Verb::Patch, "patch")]
#[case::delete(Verb::Delete, "delete")]
fn verb_renders_lowercase(#[case] verb: Verb, #[case] expected: &str) {
    assert_eq!(verb.as_str(), expected);
    assert_eq!(verb.to_string(), expected);
}

#[test]
fn action_serde_round_trips() {
    let action = Action::new("getById", "get_by_id", Verb::Get).with_desc("fetch one");
    let json = serde_json::to_string(&action).expect("serialize");
    let back: Action = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, action);
}
