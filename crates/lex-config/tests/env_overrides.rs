//! Integration tests for `LEXLIFT_*` environment variable overrides.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lex_config::LexConfig;
use pretty_assertions::assert_eq;

fn figment_with_env() -> Figment {
    Figment::from(Serialized::defaults(LexConfig::default()))
        .merge(Env::prefixed("LEXLIFT_").split("__"))
}

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("LEXLIFT_WIKI__MAXLAG", "2");
        jail.set_env("LEXLIFT_SERVER__PORT", "8123");
        jail.set_env("LEXLIFT_STORE__QUEUE_FILE", "pending.txt");

        let config: LexConfig = figment_with_env().extract()?;
        assert_eq!(config.wiki.maxlag, 2);
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.store.queue_file, "pending.txt");
        Ok(())
    });
}

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[crawl]
category = "English transitive verbs"
page_size = 50
"#,
        )?;
        jail.set_env("LEXLIFT_CRAWL__CATEGORY", "English intransitive verbs");

        let config: LexConfig = Figment::from(Serialized::defaults(LexConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LEXLIFT_").split("__"))
            .extract()?;

        assert_eq!(config.crawl.category, "English intransitive verbs");
        assert_eq!(config.crawl.page_size, 50, "toml still wins over defaults");
        Ok(())
    });
}

#[test]
fn unprefixed_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("WIKI__MAXLAG", "1");
        jail.set_env("SERVER__PORT", "1");

        let config: LexConfig = figment_with_env().extract()?;
        assert_eq!(config.wiki.maxlag, 5);
        assert_eq!(config.server.port, 5000);
        Ok(())
    });
}
