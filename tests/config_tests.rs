use std::fs;

use hello_gateway::Config;

// Kept alone in this binary: it mutates process-wide env vars.
#[test]
fn load_reads_home_config_then_env_overrides() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".hello-gateway");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.yaml"),
        "gateway_url: http://from-file:8080\nrequest_timeout_secs: 4\nlog_file: file.log\n",
    )
    .unwrap();

    std::env::set_var("HOME", home.path());
    std::env::remove_var("HELLO_GATEWAY_URL");
    std::env::remove_var("HELLO_GATEWAY_LOG");

    let config = Config::load().unwrap();
    assert_eq!(config.gateway_url, "http://from-file:8080");
    assert_eq!(config.request_timeout_secs, Some(4));
    assert_eq!(config.log_file, "file.log");

    std::env::set_var("HELLO_GATEWAY_URL", "http://ingress.local");
    std::env::set_var("HELLO_GATEWAY_LOG", "env.log");

    let config = Config::load().unwrap();
    assert_eq!(config.gateway_url, "http://ingress.local");
    assert_eq!(config.log_file, "env.log");
    assert_eq!(config.request_timeout_secs, Some(4));
}
