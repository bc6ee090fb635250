use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _dir) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.mailer.enabled, eq(false));
    assert_that!(
        config.session.lifetime_secs,
        eq(crate::DEFAULT_SESSION_LIFETIME_SECS)
    );
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [session]
            secret = "a-long-enough-session-secret"
            lifetime_secs = 600

            [mailer]
            enabled = false
            timeout_secs = 5
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.session.lifetime_secs, eq(600));
    assert_that!(config.mailer.timeout_secs, eq(5));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("ACCT_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _host = EnvGuard::set("ACCT_SERVER_HOST", "0.0.0.0");
    let _secret = EnvGuard::set("ACCT_SESSION_SECRET", "environment-session-secret");
    let _enabled = EnvGuard::set("ACCT_MAILER_ENABLED", "true");
    let _url = EnvGuard::set("ACCT_MAILER_API_URL", "https://mail.example/send");
    let _key = EnvGuard::set("ACCT_MAILER_API_KEY", "key-from-env");
    let _sender = EnvGuard::set("ACCT_MAILER_SENDER", "noreply@example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host, eq("0.0.0.0"));
    assert_that!(
        config.session.secret.as_deref(),
        eq(Some("environment-session-secret"))
    );
    assert_that!(config.mailer.enabled, eq(true));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _dir) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

// =========================================================================
// Validation Tests - Database path
// =========================================================================

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _secret = EnvGuard::set("ACCT_SESSION_SECRET", "a-long-enough-secret");
    let _path = EnvGuard::set("ACCT_DATABASE_PATH", "/var/lib/accounts.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_escaping_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir) = setup_config_dir();
    let _secret = EnvGuard::set("ACCT_SESSION_SECRET", "a-long-enough-secret");
    let _path = EnvGuard::set("ACCT_DATABASE_PATH", "../outside.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_database_path_when_database_path_then_joined_to_config_dir() {
    // Given
    let (temp, _dir) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path.starts_with(temp.path()), eq(true));
}
