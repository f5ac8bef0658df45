use eldplanner::config::Config;
use eldplanner::config::migrate::{migrate_config_file, missing_keys};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_config(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_eldplanner.conf", name));
    fs::write(&path, content).expect("write config");
    path
}

const PARTIAL: &str = "database: /tmp/custom.sqlite\nrouting:\n  use_fallback: false\n";

#[test]
fn test_missing_keys_reports_nested_paths() {
    let path = temp_config("cfg_missing", PARTIAL);

    let missing = missing_keys(&path).unwrap();
    assert!(missing.contains(&"separator_char".to_string()));
    assert!(missing.contains(&"routing.api_key_env".to_string()));
    assert!(!missing.contains(&"database".to_string()));
    assert!(!missing.contains(&"routing.use_fallback".to_string()));
}

#[test]
fn test_migrate_keeps_user_values() {
    let path = temp_config("cfg_migrate", PARTIAL);

    let added = migrate_config_file(&path).unwrap();
    assert!(!added.is_empty());
    assert!(missing_keys(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert!(!cfg.routing.use_fallback);
    assert_eq!(cfg.routing.fallback_duration_hours, 41.5);

    assert!(migrate_config_file(&path).unwrap().is_empty());
}

#[test]
fn test_partial_file_loads_with_defaults() {
    let path = temp_config("cfg_defaults", "database: /tmp/only_db.sqlite\n");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.separator_char, "-");
    assert_eq!(cfg.default_cycle_used, 0.0);
    assert_eq!(cfg.routing.api_key_env, "OPENROUTE_SERVICE_API_KEY");
    assert!(cfg.routing.use_fallback);
}
