use std::env;
use std::time::Duration;

use chrono_tz::Tz;
use textdesk_shared::constants::{
    AUTO_REPLY_COOLDOWN_MS, DEFAULT_DISPLAY_TIMEZONE, DEFAULT_SESSION_TTL_SECS,
};

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub admin_password: Option<String>,
    /// HMAC key for session tokens. Random per process when not configured.
    pub session_secret: Vec<u8>,
    pub session_ttl_secs: i64,
    pub upstream: UpstreamConfig,
    pub display_timezone: Tz,
    pub auto_reply_cooldown: Duration,
}

#[derive(Clone, Default)]
pub struct UpstreamConfig {
    pub get_all_url: Option<String>,
    pub update_ai_url: Option<String>,
    pub send_reply_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let session_secret = match env::var("SESSION_SECRET") {
            Ok(s) if !s.is_empty() => s.into_bytes(),
            _ => {
                tracing::warn!("SESSION_SECRET not set; sessions will not survive a restart");
                random_secret()
            }
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8888),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
            session_secret,
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &i64| *v > 0)
                .unwrap_or(DEFAULT_SESSION_TTL_SECS),
            upstream: UpstreamConfig {
                get_all_url: url_var("UPSTREAM_GET_ALL_URL"),
                update_ai_url: url_var("UPSTREAM_UPDATE_AI_URL"),
                send_reply_url: url_var("UPSTREAM_SEND_REPLY_URL"),
                token: non_empty_var("UPSTREAM_TOKEN"),
                timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15),
            },
            display_timezone: parse_timezone(
                &env::var("DISPLAY_TIMEZONE").unwrap_or_else(|_| DEFAULT_DISPLAY_TIMEZONE.into()),
            ),
            auto_reply_cooldown: Duration::from_millis(
                env::var("AUTO_REPLY_COOLDOWN_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(AUTO_REPLY_COOLDOWN_MS),
            ),
        }
    }
}

/// Resolves an IANA zone name, falling back to the default display zone.
pub fn parse_timezone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!("Unknown DISPLAY_TIMEZONE {:?}, using {}", name, DEFAULT_DISPLAY_TIMEZONE);
            chrono_tz::America::Denver
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn url_var(key: &str) -> Option<String> {
    let value = non_empty_var(key)?;
    match url::Url::parse(&value) {
        Ok(_) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {}: invalid URL ({})", key, e);
            None
        }
    }
}

fn random_secret() -> Vec<u8> {
    use rand::RngCore;

    let mut key = vec![0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut key);
    key
}
