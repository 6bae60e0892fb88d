use tb_config::BoardConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &BoardConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &BoardConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() {
        if has_env_prefix(&env_keys, "TASKBOARD_AUTH") {
            warnings.push(
                "Auth config appears default while TASKBOARD_AUTH* env vars exist. Use double underscores (example: TASKBOARD_AUTH__TOKENS__TOK_A=user_a)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No bearer tokens configured. Add an [auth.tokens] table to .taskboard/config.toml."
                    .to_string(),
            );
        }
    }

    if config.database.path == tb_config::DEFAULT_DB_PATH
        && has_env_prefix(&env_keys, "TASKBOARD_DATABASE")
    {
        warnings.push(
            "Database path appears default while TASKBOARD_DATABASE* env vars exist. Use double underscores (example: TASKBOARD_DATABASE__PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tb_config::{AuthConfig, BoardConfig, DatabaseConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = BoardConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("TASKBOARD_AUTH_TOKENS".to_string(), "tok".to_string()),
                ("TASKBOARD_DATABASE_PATH".to_string(), "x.db".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("TASKBOARD_AUTH__TOKENS"));
    }

    #[test]
    fn warns_when_no_tokens_at_all() {
        let warnings = collect_unconfigured_warnings(&BoardConfig::default(), Vec::new());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("[auth.tokens]"));
    }

    #[test]
    fn does_not_warn_when_configured() {
        let config = BoardConfig {
            auth: AuthConfig {
                tokens: BTreeMap::from([("tok_a".to_string(), "user_a".to_string())]),
            },
            database: DatabaseConfig {
                path: "custom.db".to_string(),
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("TASKBOARD_DATABASE__PATH".to_string(), "custom.db".to_string())],
        );

        assert!(warnings.is_empty());
    }
}
