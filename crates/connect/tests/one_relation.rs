mod models;

use connect::{AttributeKind, Model, OneRelation, Value, ValueRecord};
use models::{Post, User};

#[test]
fn get_returns_initial_value() {
    let empty: OneRelation<User> = OneRelation::new(Post::id(), "author", "id", None);
    assert!(empty.get().is_none());

    let ada = User::new(1, "ada");
    let author = OneRelation::new(Post::id(), "author", "id", Some(ada.clone()));
    assert_eq!(author.get(), Some(&ada));
}

#[test]
fn author_scenario() {
    let mut author = OneRelation::new(Post::id(), "author", "id", None);
    assert_eq!(author.get(), None);

    let user = User::new(42, "grace");
    author.set(Some(user.clone()));
    assert_eq!(author.get(), Some(&user));
}

#[test]
fn get_returns_most_recent_set() {
    let mut author = OneRelation::new(Post::id(), "author", "id", None);

    let users = [User::new(1, "a"), User::new(2, "b"), User::new(3, "c")];
    for user in &users {
        author.set(Some(user.clone()));
        assert_eq!(author.get(), Some(user));
    }

    author.set(None);
    author.set(Some(users[0].clone()));
    assert_eq!(author.get(), Some(&users[0]));
}

#[test]
fn set_none_clears() {
    let mut author = OneRelation::new(Post::id(), "author", "id", Some(User::new(1, "ada")));

    author.set(None);
    assert!(author.get().is_none());
    assert!(!author.is_some());
}

#[test]
fn names_are_fixed_at_construction() {
    let mut author = OneRelation::new(Post::id(), "author", "user_id", None);
    author.set(Some(User::new(7, "linus")));

    assert_eq!(author.relation_name(), "author");
    assert_eq!(author.primary_key(), "user_id");
}

#[test]
fn tagged_as_single_relation() {
    let author: OneRelation<User> = OneRelation::new(Post::id(), "author", "id", None);

    assert_eq!(author.kind(), AttributeKind::RelOne);
    assert_eq!(author.parent(), Post::id());
    assert_ne!(author.parent(), User::id());
}

#[test]
fn take_clears_and_returns() {
    let mut author = OneRelation::new(Post::id(), "author", "id", Some(User::new(1, "ada")));

    assert_eq!(author.take(), Some(User::new(1, "ada")));
    assert!(author.get().is_none());
    assert_eq!(author.take(), None);
}

#[test]
fn get_mut_edits_in_place() {
    let mut author = OneRelation::new(Post::id(), "author", "id", Some(User::new(1, "ada")));

    if let Some(user) = author.get_mut() {
        user.name = "ada lovelace".to_string();
    }
    assert_eq!(author.get().map(|u| u.name.as_str()), Some("ada lovelace"));
}

#[test]
fn load_record() {
    let mut author = OneRelation::new(Post::id(), "author", "id", None);

    author
        .load(ValueRecord::new().with("id", 5).with("name", "ken").into())
        .unwrap();
    assert_eq!(author.get(), Some(&User::new(5, "ken")));
    assert_eq!(author.related_key(), Some(Value::I64(5)));
}

#[test]
fn load_null_clears() {
    let mut author = OneRelation::new(Post::id(), "author", "id", Some(User::new(1, "ada")));

    author.load(Value::Null).unwrap();
    assert!(author.get().is_none());
    assert_eq!(author.related_key(), None);
}

#[test]
fn load_unexpected_payload_keeps_value() {
    let mut author = OneRelation::new(Post::id(), "author", "id", Some(User::new(1, "ada")));

    let err = author.load(Value::I64(5)).unwrap_err();
    assert!(err.root().is_type_conversion());
    assert_eq!(
        err.to_string(),
        "relation `author`: cannot convert I64 to Record"
    );
    assert_eq!(author.get(), Some(&User::new(1, "ada")));
}

#[test]
fn load_incomplete_record_fails() {
    let mut author: OneRelation<User> = OneRelation::new(Post::id(), "author", "id", None);

    let err = author
        .load(ValueRecord::new().with("name", "ken").into())
        .unwrap_err();
    assert!(err.root().is_missing_field());
    assert_eq!(err.to_string(), "relation `author`: missing field `id`");
    assert!(author.get().is_none());
}

#[test]
fn debug_output() {
    let mut author: OneRelation<User> = OneRelation::new(Post::id(), "author", "id", None);
    assert_eq!(format!("{author:?}"), "<none>");

    author.set(Some(User::new(1, "ada")));
    assert_eq!(format!("{author:?}"), format!("{:?}", User::new(1, "ada")));
}
