//! User store integration tests.

use domain::{User, UserId, UserRole};
use user_service_lib::repository::UserStore;
use user_service_lib::seed::demo_users;

fn seeded_store() -> UserStore {
    let mut store = UserStore::new();
    for user in demo_users() {
        store.add(user);
    }
    store
}

fn names(users: &[&User]) -> Vec<String> {
    users.iter().map(|u| u.name().to_string()).collect()
}

fn ids(users: &[&User]) -> Vec<UserId> {
    users.iter().map(|u| u.id()).collect()
}

fn assert_views_agree(store: &UserStore) {
    assert!(store.verify().is_ok());
    assert_eq!(store.count(), store.list().len());
    assert_eq!(
        store.count(),
        store.list_active().len() + store.list_inactive().len()
    );
}

#[test]
fn test_walkthrough_scenario() {
    let mut store = seeded_store();
    assert_eq!(store.count(), 3);

    assert_eq!(store.find_by_id(2).map(User::name), Some("Bob"));
    assert_eq!(names(&store.list_by_role(UserRole::User)), vec!["Bob", "Charlie"]);

    assert!(store.set_active(2, false));
    assert_eq!(names(&store.list_active()), vec!["Alice", "Charlie"]);

    assert!(store.remove(1).is_some());
    assert!(store.find_by_id(1).is_none());
    assert_eq!(store.count(), 2);
    assert_views_agree(&store);
}

#[test]
fn test_duplicate_add_keeps_count_and_fields() {
    let mut store = seeded_store();
    store.set_active(3, false);

    store.add(User::new(3, "Charles", "charles@example.com", UserRole::Admin));

    assert_eq!(store.count(), 3);
    let charlie = store.find_by_id(3).unwrap();
    assert_eq!(charlie.name(), "Charlie");
    assert_eq!(charlie.email(), "charlie@example.com");
    assert_eq!(charlie.role(), UserRole::User);
    assert!(!charlie.is_active());
}

#[test]
fn test_remove_twice_fails() {
    let mut store = seeded_store();
    let before = store.count();

    assert!(store.remove(3).is_some());
    assert_eq!(store.count(), before - 1);
    assert!(store.remove(3).is_none());
    assert_eq!(store.count(), before - 1);
}

#[test]
fn test_toggle_active_preserves_order() {
    let mut store = seeded_store();
    store.add(User::new(4, "Diana", "diana@example.com", UserRole::User));

    store.set_active(2, false);
    assert_eq!(ids(&store.list_active()), vec![1, 3, 4]);
    assert_eq!(ids(&store.list_inactive()), vec![2]);

    store.set_active(2, true);
    assert_eq!(ids(&store.list_active()), vec![1, 2, 3, 4]);
    assert!(store.list_inactive().is_empty());
}

#[test]
fn test_list_by_role_is_exact_subset_in_order() {
    let mut store = UserStore::new();
    store.add(User::new(10, "Root", "root@example.com", UserRole::Admin));
    store.add(User::new(11, "Visitor", "visitor@example.com", UserRole::Guest));
    store.add(User::new(12, "Ops", "ops@example.com", UserRole::Admin));
    store.add(User::new(13, "Dev", "dev@example.com", UserRole::User));

    assert_eq!(ids(&store.list_by_role(UserRole::Admin)), vec![10, 12]);
    assert_eq!(ids(&store.list_by_role(UserRole::Guest)), vec![11]);
    assert_eq!(ids(&store.list_by_role(UserRole::User)), vec![13]);
}

#[test]
fn test_mixed_add_remove_sequence_stays_consistent() {
    let mut store = UserStore::new();
    for id in 0..20 {
        store.add(User::new(id, format!("user{}", id), "", UserRole::Guest));
        assert_views_agree(&store);
    }
    for id in (0..20).step_by(3) {
        assert!(store.remove(id).is_some());
        assert_views_agree(&store);
    }
    for id in 0..5 {
        store.add(User::new(id, "again", "", UserRole::User));
        store.set_active(id, id % 2 == 0);
        assert_views_agree(&store);
    }

    let expected: Vec<UserId> = (0..20)
        .filter(|id| id % 3 != 0)
        .chain([0, 3])
        .collect();
    assert_eq!(ids(&store.list()), expected);
}

#[test]
fn test_lookups_observe_in_place_edits() {
    let mut store = seeded_store();
    if let Some(bob) = store.find_by_id_mut(2) {
        bob.set_name("Robert");
        bob.set_email("robert@example.com");
    }

    let bob = store.find_by_id(2).unwrap();
    assert_eq!(bob.name(), "Robert");
    assert_eq!(store.list()[1].email(), "robert@example.com");
}
