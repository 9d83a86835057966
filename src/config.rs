use std::env;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub event_buffer_size: usize,
    pub tracking_retry_budget: u32,
    pub delay_threshold_hours: i64,
    pub currency: String,
    pub enable_sms: bool,
    pub enable_whatsapp: bool,
    pub notify_relay_url: Option<String>,
    pub notify_relay_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_buffer_size: parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            tracking_retry_budget: parse_or_default("TRACKING_RETRY_BUDGET", 5)?,
            delay_threshold_hours: parse_or_default("DELAY_THRESHOLD_HOURS", 48)?,
            currency: env::var("CURRENCY").unwrap_or_else(|_| "XOF".to_string()),
            enable_sms: parse_or_default("ENABLE_SMS", false)?,
            enable_whatsapp: parse_or_default("ENABLE_WHATSAPP", false)?,
            notify_relay_url: env::var("NOTIFY_RELAY_URL").ok(),
            notify_relay_token: env::var("NOTIFY_RELAY_TOKEN").ok(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            log_level: "info".to_string(),
            event_buffer_size: 1024,
            tracking_retry_budget: 5,
            delay_threshold_hours: 48,
            currency: "XOF".to_string(),
            enable_sms: false,
            enable_whatsapp: false,
            notify_relay_url: None,
            notify_relay_token: None,
        }
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
