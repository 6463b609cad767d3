#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::config::environment::{env_string, env_u32, env_u64};

    fn env_lock<'a>() -> std::sync::MutexGuard<'a, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        saved: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[(&str, Option<&str>)]) -> Self {
            let saved = vars
                .iter()
                .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
                .collect::<Vec<_>>();
            for (key, value) in vars {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
        }
    }

    /// Pin every variable the loader consults so tests are isolated from
    /// the ambient environment.
    fn baseline<'a>(home: &'a str, extra: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
        let mut vars = vec![
            ("HOME", Some(home)),
            ("OPENROUTER_API_KEY", None),
            ("FIRECRAWL_API_KEY", None),
            ("SCOUT_LLM_BASE_URL", None),
            ("SCOUT_TIMEOUT_SECS", None),
            ("SCOUT_MODEL", None),
            ("SCOUT_MAX_TOKENS", None),
            ("SCOUT_GATEWAY_URL", None),
            ("SCOUT_CONNECT_TIMEOUT_SECS", None),
            ("SCOUT_STAGE_TIMEOUT_SECS", None),
        ];
        for &(key, value) in extra {
            if let Some(slot) = vars.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                vars.push((key, value));
            }
        }
        vars
    }

    #[test]
    fn load_from_env_only() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&baseline(
            &home,
            &[
                ("OPENROUTER_API_KEY", Some("llm-key")),
                ("FIRECRAWL_API_KEY", Some("crawl-key")),
                ("SCOUT_TIMEOUT_SECS", Some("45")),
                ("SCOUT_MAX_TOKENS", Some("2048")),
                ("SCOUT_MODEL", Some("env/model")),
                ("SCOUT_GATEWAY_URL", Some("http://gateway.test/mcp")),
                ("SCOUT_STAGE_TIMEOUT_SECS", Some("90")),
            ],
        ));

        let config = Config::load().unwrap();
        assert_eq!(config.llm.api_key, "llm-key");
        assert_eq!(config.llm.timeout_secs, 45);
        assert_eq!(config.models.research, "env/model");
        assert_eq!(config.models.max_tokens, 2048);
        assert_eq!(config.gateway.api_key, "crawl-key");
        assert_eq!(config.gateway.endpoint, "http://gateway.test/mcp");
        assert_eq!(config.pipeline.stage_timeout_secs, 90);
    }

    #[test]
    fn load_prefers_env_over_file() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();
        let config_dir = temp_home.path().join(".scout");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config"),
            r#"{
                "llm": { "api_key": "file-llm-key", "timeout_secs": 20 },
                "models": { "research": "file/model", "max_tokens": 1024 },
                "gateway": { "api_key": "file-crawl-key", "endpoint": "http://file.test/mcp" }
            }"#,
        )
        .unwrap();

        let _env = EnvGuard::new(&baseline(
            &home,
            &[
                ("OPENROUTER_API_KEY", Some("env-llm-key")),
                ("SCOUT_TIMEOUT_SECS", Some("40")),
            ],
        ));

        let config = Config::load().unwrap();
        assert_eq!(config.llm.api_key, "env-llm-key");
        assert_eq!(config.llm.timeout_secs, 40);
        assert_eq!(config.models.research, "file/model");
        assert_eq!(config.models.max_tokens, 1024);
        assert_eq!(config.gateway.api_key, "file-crawl-key");
        assert_eq!(config.gateway.endpoint, "http://file.test/mcp");
    }

    #[test]
    fn load_errors_without_llm_key() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&baseline(
            &home,
            &[("FIRECRAWL_API_KEY", Some("crawl-key"))],
        ));

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("OpenRouter API key not found"));
    }

    #[test]
    fn load_errors_without_gateway_key() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&baseline(
            &home,
            &[("OPENROUTER_API_KEY", Some("llm-key"))],
        ));

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("Firecrawl API key not found"));
    }

    #[test]
    fn save_persists_nested_structure() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&baseline(&home, &[]));

        let mut config = Config::builder().build().unwrap();
        config.llm.api_key = "llm-key".to_string();
        config.llm.timeout_secs = 55;
        config.models.research = "custom/model".to_string();
        config.models.max_tokens = 999;
        config.gateway.api_key = "crawl-key".to_string();
        config.gateway.endpoint = "http://saved.test/mcp".to_string();
        config.pipeline.stage_timeout_secs = 120;
        config.save().unwrap();

        let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
        assert_eq!(json["llm"]["api_key"], "llm-key");
        assert_eq!(json["llm"]["timeout_secs"], 55);
        assert_eq!(json["models"]["research"], "custom/model");
        assert_eq!(json["models"]["max_tokens"], 999);
        assert_eq!(json["gateway"]["api_key"], "crawl-key");
        assert_eq!(json["gateway"]["endpoint"], "http://saved.test/mcp");
        assert_eq!(json["pipeline"]["stage_timeout_secs"], 120);
    }

    #[test]
    fn test_env_string() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_VAR", Some("test_value"))]);

        assert_eq!(env_string("TEST_VAR").unwrap(), Some("test_value".to_string()));
        assert_eq!(env_string("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_u64() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_U64", Some("123"))]);

        assert_eq!(env_u64("TEST_U64").unwrap(), Some(123));
        assert_eq!(env_u64("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_u32() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_U32", Some("456"))]);

        assert_eq!(env_u32("TEST_U32").unwrap(), Some(456));
        assert_eq!(env_u32("NONEXISTENT_VAR").unwrap(), None);
    }
}
