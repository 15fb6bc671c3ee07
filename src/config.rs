use std::env;
use std::path::PathBuf;
use std::time::Duration;

const MB: u64 = 1024 * 1024;
const DEFAULT_MAX_PHOTO_MB: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_name: String,
    pub reply_delay: Duration,
    pub reply_jitter: Duration,
    pub max_photo_bytes: u64,
    pub upload_tick: Duration,
    pub analysis_tick: Duration,
    pub log_dir: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    /// Builds the config from any key lookup (process env in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |key: &str, default: u64| {
            Duration::from_millis(
                lookup(key)
                    .and_then(|v| v.trim().parse::<u64>().ok())
                    .unwrap_or(default),
            )
        };

        let assistant_name = lookup("LUNA_ASSISTANT_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Luna".to_string());

        let max_photo_bytes = lookup("LUNA_MAX_PHOTO_MB")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .and_then(|mb| mb.checked_mul(MB))
            .unwrap_or(DEFAULT_MAX_PHOTO_MB * MB);

        let log_dir = lookup("LUNA_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            assistant_name,
            reply_delay: millis("LUNA_REPLY_DELAY_MS", 1000),
            reply_jitter: millis("LUNA_REPLY_JITTER_MS", 1000),
            max_photo_bytes,
            upload_tick: millis("LUNA_UPLOAD_TICK_MS", 100),
            analysis_tick: millis("LUNA_ANALYSIS_TICK_MS", 200),
            log_dir,
            window_width: 960.0,
            window_height: 760.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);

        assert_eq!(config.assistant_name, "Luna");
        assert_eq!(config.reply_delay, Duration::from_millis(1000));
        assert_eq!(config.reply_jitter, Duration::from_millis(1000));
        assert_eq!(config.max_photo_bytes, 10 * 1024 * 1024);
        assert_eq!(config.upload_tick, Duration::from_millis(100));
        assert_eq!(config.analysis_tick, Duration::from_millis(200));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("LUNA_ASSISTANT_NAME", "Stella"),
            ("LUNA_REPLY_DELAY_MS", "250"),
            ("LUNA_REPLY_JITTER_MS", "0"),
            ("LUNA_MAX_PHOTO_MB", "2"),
            ("LUNA_LOG_DIR", "/tmp/luna"),
        ]);

        assert_eq!(config.assistant_name, "Stella");
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.reply_jitter, Duration::ZERO);
        assert_eq!(config.max_photo_bytes, 2 * 1024 * 1024);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/luna"));
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let config = config_with(&[
            ("LUNA_ASSISTANT_NAME", "   "),
            ("LUNA_REPLY_DELAY_MS", "soon"),
            ("LUNA_MAX_PHOTO_MB", "-3"),
        ]);

        assert_eq!(config.assistant_name, "Luna");
        assert_eq!(config.reply_delay, Duration::from_millis(1000));
        assert_eq!(config.max_photo_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overflowing_photo_limit_falls_back() {
        let config = config_with(&[("LUNA_MAX_PHOTO_MB", "18446744073709551615")]);
        assert_eq!(config.max_photo_bytes, 10 * 1024 * 1024);
    }
}
