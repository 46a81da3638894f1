use goaltrack_core::error::ValidationError;
use goaltrack_core::{keys, validate};
use uuid::Uuid;

#[test]
fn valid_usernames_are_case_folded() {
    assert_eq!(validate::username("JohnDoe").unwrap(), "johndoe");
    assert_eq!(validate::username("alice_42").unwrap(), "alice_42");
    assert_eq!(validate::username("ABC").unwrap(), "abc");
}

#[test]
fn short_usernames_are_rejected() {
    for raw in ["", "a", "ab"] {
        assert_eq!(
            validate::username(raw).unwrap_err(),
            ValidationError::UsernameTooShort
        );
    }
}

#[test]
fn non_alphanumeric_usernames_are_rejected() {
    for raw in ["john doe", "john-doe", "john.doe", "jöhn", "user!"] {
        assert_eq!(
            validate::username(raw).unwrap_err(),
            ValidationError::UsernameInvalidCharacter
        );
    }
}

#[test]
fn username_index_keys_collide_across_case() {
    // The store-level uniqueness guard hangs off this: "Alice" and "alice"
    // claim the same index object.
    assert_eq!(keys::username_index("Alice"), keys::username_index("alice"));
    assert_eq!(keys::username_index("Alice"), "usernames/alice.json");
}

#[test]
fn goal_keys_live_under_the_owner_prefix() {
    let user = Uuid::new_v4();
    let goal = Uuid::new_v4();
    assert!(keys::goal(user, goal).starts_with(&keys::goals_prefix(user)));
}

#[test]
fn title_validation_rejects_blank_input() {
    assert!(validate::title("Read 12 books").is_ok());
    assert_eq!(validate::title("  ").unwrap_err(), ValidationError::EmptyTitle);
}
