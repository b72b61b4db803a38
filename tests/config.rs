#[cfg(test)]
mod tests {
    use taskdeck::libs::config::{Config, ServerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        user_id: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://tasks.example.com/api".to_string(),
                user_id: "u-42".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.server.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.server.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                user_id: ctx.user_id.clone(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(
            loaded.server,
            Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                user_id: ctx.user_id.clone(),
            })
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_require_server_without_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.require_server().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_require_server_with_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
                user_id: ctx.user_id.clone(),
            }),
        };
        let server = config.require_server().unwrap();
        assert_eq!(server.api_url, ctx.api_url);
    }
}
