use super::*;

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_config(tag: &str, contents: &str) -> (PathBuf, PathBuf) {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("plan_client_config_{tag}_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("planner.toml");
    fs::write(&path, contents).expect("write config");
    (temp_root, path)
}

fn no_env(_key: &str) -> Option<String> {
    None
}

#[test]
fn defaults_point_at_local_plan_service() {
    let settings = load_settings_from(Path::new("/nonexistent/planner.toml"), no_env);
    assert_eq!(settings, EndpointSettings::default());
    assert_eq!(
        settings.url().expect("url").as_str(),
        "http://127.0.0.1:5001/generate-plan-with-new-results"
    );
}

#[test]
fn file_values_override_defaults() {
    let (temp_root, path) = temp_config("file", "host = \"10.0.0.5\"\nport = 8080\npath = \"plan\"\n");

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.host, "10.0.0.5");
    assert_eq!(settings.port, 8080);
    assert_eq!(settings.url().expect("url").as_str(), "http://10.0.0.5:8080/plan");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn env_overrides_file_and_prefixed_key_wins() {
    let (temp_root, path) = temp_config("env", "host = \"10.0.0.5\"\nport = 8080\n");
    let vars: HashMap<&str, &str> = [
        ("PLANNER_HOST", "plain-host"),
        ("APP__PLANNER_HOST", "prefixed-host"),
        ("PLANNER_PORT", "9000"),
    ]
    .into_iter()
    .collect();

    let settings = load_settings_from(&path, |key| vars.get(key).map(|v| v.to_string()));
    assert_eq!(settings.host, "prefixed-host");
    assert_eq!(settings.port, 9000);
    assert_eq!(settings.path, EndpointSettings::default().path);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn invalid_port_values_are_ignored() {
    let (temp_root, path) = temp_config("port", "port = 700000\n");

    let settings = load_settings_from(&path, |key| {
        (key == "PLANNER_PORT").then(|| "not-a-port".to_string())
    });
    assert_eq!(settings.port, 5001);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn unparseable_file_falls_back_to_defaults() {
    let (temp_root, path) = temp_config("garbage", "this is = = not toml");

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings, EndpointSettings::default());

    fs::remove_dir_all(temp_root).expect("cleanup");
}
