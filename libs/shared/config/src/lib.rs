use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use tracing::warn;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_APPOINTMENT_DURATION_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub appointment_duration_minutes: i64,
    /// The day sample data is laid out around ("today" for the seeded doctors and appointments).
    pub sample_data_anchor_date: NaiveDate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: DEFAULT_SERVER_PORT,
            appointment_duration_minutes: DEFAULT_APPOINTMENT_DURATION_MINUTES,
            sample_data_anchor_date: Local::now().date_naive(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing or malformed
    /// values fall back to the defaults.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            server_host: parse_or(&lookup, "SERVER_HOST", defaults.server_host),
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
            appointment_duration_minutes: parse_or(
                &lookup,
                "APPOINTMENT_DURATION_MINUTES",
                defaults.appointment_duration_minutes,
            ),
            sample_data_anchor_date: parse_or(
                &lookup,
                "SAMPLE_DATA_ANCHOR_DATE",
                defaults.sample_data_anchor_date,
            ),
        };

        if !config.is_valid() {
            warn!(
                "APPOINTMENT_DURATION_MINUTES must be positive, using {}",
                DEFAULT_APPOINTMENT_DURATION_MINUTES
            );
            return Self {
                appointment_duration_minutes: DEFAULT_APPOINTMENT_DURATION_MINUTES,
                ..config
            };
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        self.appointment_duration_minutes > 0
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {:?}", key, raw, default);
            default
        }),
        None => {
            warn!("{} not set, using default {:?}", key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_source(|_| None);

        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.appointment_duration_minutes, 30);
        assert_eq!(config.server_host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn test_values_read_from_source() {
        let config = AppConfig::from_source(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("APPOINTMENT_DURATION_MINUTES", "45"),
            ("SAMPLE_DATA_ANCHOR_DATE", "2025-06-20"),
        ]));

        assert_eq!(config.bind_address(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.appointment_duration_minutes, 45);
        assert_eq!(
            config.sample_data_anchor_date,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
        );
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = AppConfig::from_source(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("SAMPLE_DATA_ANCHOR_DATE", "20/06/2025"),
        ]));

        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.sample_data_anchor_date, Local::now().date_naive());
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let config = AppConfig::from_source(lookup_from(&[("APPOINTMENT_DURATION_MINUTES", "0")]));
        assert_eq!(config.appointment_duration_minutes, DEFAULT_APPOINTMENT_DURATION_MINUTES);
    }
}
