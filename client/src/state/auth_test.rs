use super::*;
use crate::storage::MemoryStorage;
use dto::users::Role;
use uuid::Uuid;

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        name: "Admin User".to_owned(),
        email: "admin@bambly.ai".to_owned(),
        role: Role::Admin,
        department: Some("Management".to_owned()),
        avatar: None,
        last_login: None,
    }
}

fn store_with_backend() -> (SessionStore, MemoryStorage) {
    let backend = MemoryStorage::new();
    (SessionStore::new(std::rc::Rc::new(backend.clone())), backend)
}

#[test]
fn default_state_is_checking() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.logged_in);
    assert!(state.user.is_none());
}

#[test]
fn initialize_with_empty_storage_settles_logged_out() {
    let (store, _) = store_with_backend();
    let state = store.initialize();
    assert!(!state.loading);
    assert!(!state.logged_in);
    assert!(state.user.is_none());
}

#[test]
fn initialize_restores_a_valid_persisted_session() {
    let (store, backend) = store_with_backend();
    backend.set(USER_KEY, &serde_json::to_string(&sample_user()).unwrap());
    backend.set(LOGGED_IN_KEY, LOGGED_IN_MARKER);

    let state = store.initialize();
    assert!(state.logged_in);
    assert!(!state.loading);
    assert_eq!(state.user, Some(sample_user()));
}

#[test]
fn initialize_without_marker_is_logged_out() {
    let (store, backend) = store_with_backend();
    backend.set(USER_KEY, &serde_json::to_string(&sample_user()).unwrap());

    let state = store.initialize();
    assert!(!state.logged_in);
    assert!(state.user.is_none());
}

#[test]
fn marker_value_must_be_the_exact_true_string() {
    let (store, backend) = store_with_backend();
    backend.set(USER_KEY, &serde_json::to_string(&sample_user()).unwrap());

    for bogus in ["True", "TRUE", "1", "yes", "false", ""] {
        backend.set(LOGGED_IN_KEY, bogus);
        let state = store.initialize();
        assert!(!state.logged_in, "marker {bogus:?} must not authenticate");
    }
}

#[test]
fn corrupt_session_blob_settles_logged_out_without_panicking() {
    let (store, backend) = store_with_backend();
    backend.set(USER_KEY, "{not json");
    backend.set(LOGGED_IN_KEY, LOGGED_IN_MARKER);

    let state = store.initialize();
    assert!(!state.loading);
    assert!(!state.logged_in);
    assert!(state.user.is_none());
}

#[test]
fn marker_alone_without_blob_is_logged_out() {
    let (store, backend) = store_with_backend();
    backend.set(LOGGED_IN_KEY, LOGGED_IN_MARKER);

    assert!(!store.initialize().logged_in);
}

#[test]
fn login_persists_blob_and_marker() {
    let (store, backend) = store_with_backend();
    let state = store.login(sample_user());

    assert!(state.logged_in);
    assert_eq!(backend.get(LOGGED_IN_KEY).as_deref(), Some(LOGGED_IN_MARKER));
    let blob = backend.get(USER_KEY).unwrap();
    let stored: SessionUser = serde_json::from_str(&blob).unwrap();
    assert_eq!(stored, sample_user());
}

#[test]
fn login_is_idempotent() {
    let (store, backend) = store_with_backend();
    let _ = store.login(sample_user());
    let first_blob = backend.get(USER_KEY);
    let first_marker = backend.get(LOGGED_IN_KEY);

    let _ = store.login(sample_user());
    assert_eq!(backend.get(USER_KEY), first_blob);
    assert_eq!(backend.get(LOGGED_IN_KEY), first_marker);
}

#[test]
fn logout_clears_both_keys() {
    let (store, backend) = store_with_backend();
    let _ = store.login(sample_user());
    let state = store.logout();

    assert!(!state.logged_in);
    assert!(backend.is_empty());
    // A fresh initialize after logout stays logged out.
    assert!(!store.initialize().logged_in);
}

#[test]
fn logged_in_is_true_only_between_login_and_logout() {
    let (store, _) = store_with_backend();

    assert!(!store.initialize().logged_in);
    assert!(store.login(sample_user()).logged_in);
    assert!(store.initialize().logged_in);
    assert!(!store.logout().logged_in);
    assert!(!store.initialize().logged_in);
}

#[test]
fn auth_state_invariant_holds_for_all_constructors() {
    for state in [AuthState::default(), AuthState::logged_out(), AuthState::logged_in(sample_user())] {
        assert_eq!(state.logged_in, state.user.is_some());
    }
}

#[test]
fn login_survives_a_round_trip_through_a_new_store_instance() {
    let backend = MemoryStorage::new();
    let first = SessionStore::new(std::rc::Rc::new(backend.clone()));
    let _ = first.login(sample_user());

    // A new process over the same persisted storage sees the session.
    let second = SessionStore::new(std::rc::Rc::new(backend));
    let state = second.initialize();
    assert!(state.logged_in);
    assert_eq!(state.user, Some(sample_user()));
}
