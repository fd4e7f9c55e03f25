use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_config_with_empty_env_matches_default() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, CollectorConfig::default());
    assert_eq!(cfg.store_base_url, "https://store.steampowered.com");
    assert_eq!(cfg.community_base_url, "https://steamcommunity.com");
    assert_eq!(cfg.review_language, "default");
    assert_eq!(cfg.search_filter, "topsellers");
    assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
}

#[test]
fn build_config_strips_trailing_slash_from_base_urls() {
    let mut map = HashMap::new();
    map.insert("STEAMREV_STORE_BASE_URL", "http://127.0.0.1:8080/");
    map.insert("STEAMREV_COMMUNITY_BASE_URL", "http://127.0.0.1:8081");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.store_base_url, "http://127.0.0.1:8080");
    assert_eq!(cfg.community_base_url, "http://127.0.0.1:8081");
}

#[test]
fn build_config_rejects_base_url_without_scheme() {
    let mut map = HashMap::new();
    map.insert("STEAMREV_STORE_BASE_URL", "store.steampowered.com");
    let result = build_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STEAMREV_STORE_BASE_URL"),
        "expected InvalidEnvVar(STEAMREV_STORE_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_config_rejects_blank_user_agent() {
    let mut map = HashMap::new();
    map.insert("STEAMREV_USER_AGENT", "   ");
    let result = build_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STEAMREV_USER_AGENT"),
        "expected InvalidEnvVar(STEAMREV_USER_AGENT), got: {result:?}"
    );
}

#[test]
fn build_config_ignores_unrelated_variables() {
    let mut map = HashMap::new();
    map.insert("STEAMREV_ENV", "production");
    map.insert("STEAMREV_LOG_LEVEL", "debug");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, CollectorConfig::default());
}

#[test]
fn build_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("STEAMREV_USER_AGENT", "custom-agent/2.0");
    map.insert("STEAMREV_REVIEW_LANGUAGE", "english");
    map.insert("STEAMREV_SEARCH_FILTER", "popularnew");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.review_language, "english");
    assert_eq!(cfg.search_filter, "popularnew");
}
