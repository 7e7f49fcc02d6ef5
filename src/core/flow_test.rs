// End-to-end banner and configuration flows, exercised the way the
// command layer drives them.

use super::alerts::model::{AlertKind, AlertState};
use super::alerts::store::AlertStore;
use super::bundler::BundlerConfig;
use super::config::{Environment, RuntimeConfig};

#[test]
fn test_warning_then_clear_round_trip() {
    let mut store = AlertStore::new();
    assert_eq!(*store.current(), AlertState::default());

    let shown = store.raise(AlertKind::Warning, Some("low battery".to_string()));
    assert_eq!(shown.kind, Some(AlertKind::Warning));
    assert_eq!(shown.message.as_deref(), Some("low battery"));
    assert!(shown.active);

    let cleared = store.clear();
    assert_eq!(cleared, AlertState::default());
    assert_eq!(*store.current(), AlertState::default());
}

#[test]
fn test_banner_sequence_is_last_write_wins() {
    let mut store = AlertStore::new();
    store.raise(AlertKind::Info, Some("sampling point cloud".to_string()));
    store.raise(AlertKind::Success, Some("point cloud ready".to_string()));
    let shown = store.raise(AlertKind::Error, Some("backend returned 502".to_string()));

    assert_eq!(shown.kind, Some(AlertKind::Error));
    assert_eq!(store.history().len(), 3);
}

#[test]
fn test_runtime_and_bundler_agree_on_public_path() {
    for env in [Environment::Production, Environment::Development] {
        assert_eq!(
            RuntimeConfig::for_env(env).public_path,
            BundlerConfig::for_env(env).public_path
        );
    }
}
