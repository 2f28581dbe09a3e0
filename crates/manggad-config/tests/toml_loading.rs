//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use manggad_config::{ConfigError, EmptyQueryPolicy, ManggadConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./theses.db"
url = "libsql://manggad.turso.io"
auth_token = "secret"

[search]
empty_query = "empty"
fallback_to_sample = true

[general]
default_limit = 50
"#,
        )?;

        let config: ManggadConfig = Figment::from(Serialized::defaults(ManggadConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./theses.db");
        assert!(config.database.is_remote());
        assert_eq!(config.search.empty_query, EmptyQueryPolicy::Empty);
        assert!(config.search.fallback_to_sample);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".manggad")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".manggad/config.toml",
            r#"
[search]
empty_query = "empty"
"#,
        )?;

        let config = ManggadConfig::load().expect("config loads");
        assert_eq!(config.search.empty_query, EmptyQueryPolicy::Empty);
        assert_eq!(config.database.path, ".manggad/manggad.db");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".manggad")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".manggad/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;
        jail.set_env("MANGGAD_GENERAL__DEFAULT_LIMIT", "42");
        jail.set_env("MANGGAD_DATABASE__PATH", ":memory:");

        let config = ManggadConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 42);
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn unknown_policy_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("MANGGAD_SEARCH__EMPTY_QUERY", "everything");
        let result = ManggadConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn zero_limit_from_env_is_invalid() {
    Jail::expect_with(|jail| {
        jail.set_env("MANGGAD_GENERAL__DEFAULT_LIMIT", "0");
        let result = ManggadConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}
