//! Service configuration, read from the environment (and an optional `.env`).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::auth::AuthGate;
use crate::error::{config_error, Error};
use crate::wire::CoordinateFormat;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Storage {
    Postgres { url: String, max_connections: u32 },
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub storage: Storage,
    pub auth: AuthGate,
    pub coordinate_format: CoordinateFormat,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            if !err.not_found() {
                return Err(config_error(".env", err));
            }
        }

        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address: SocketAddr =
            parse_or(&var, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS.parse().ok())?;

        let storage = match var("STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => Storage::Postgres {
                url: var("DATABASE_URL")
                    .ok_or_else(|| config_error("DATABASE_URL", "required for postgres storage"))?,
                max_connections: parse_or(
                    &var,
                    "DATABASE_MAX_CONNECTIONS",
                    Some(DEFAULT_MAX_CONNECTIONS),
                )?,
            },
            Some("memory") => Storage::Memory,
            Some(other) => {
                return Err(config_error(
                    "STORAGE",
                    format!("unknown storage {:?}", other),
                ))
            }
        };

        let api_key = var("API_KEY").filter(|key| !key.is_empty());
        let auth_enabled = parse_or(&var, "AUTH_ENABLED", Some(api_key.is_some()))?;
        let auth = match (auth_enabled, api_key) {
            (true, Some(api_key)) => AuthGate::with_api_key(api_key),
            (true, None) => {
                return Err(config_error(
                    "API_KEY",
                    "required when AUTH_ENABLED is set",
                ))
            }
            (false, _) => AuthGate::disabled(),
        };

        let coordinate_format = parse_or(
            &var,
            "COORDINATE_FORMAT",
            Some(CoordinateFormat::default()),
        )?;
        let debug = parse_or(&var, "DEBUG", Some(false))?;

        Ok(Self {
            bind_address,
            storage,
            auth,
            coordinate_format,
            debug,
        })
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: Option<T>) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: Flag,
{
    match var(key).map(|value| value.trim().to_string()) {
        Some(value) if !value.is_empty() => {
            T::parse_flag(&value).map_err(|err| config_error(key, err))
        }
        _ => default.ok_or_else(|| config_error(key, "missing")),
    }
}

/// Parsing hook so booleans accept the usual spellings.
trait Flag: Sized {
    fn parse_flag(value: &str) -> Result<Self, String>;
}

impl Flag for bool {
    fn parse_flag(value: &str) -> Result<Self, String> {
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(format!("expected a boolean, got {:?}", other)),
        }
    }
}

macro_rules! impl_flag_via_from_str {
    ($($ty:ty),*) => {
        $(impl Flag for $ty {
            fn parse_flag(value: &str) -> Result<Self, String> {
                value.parse().map_err(|err: <$ty as FromStr>::Err| err.to_string())
            }
        })*
    };
}

impl_flag_via_from_str!(u32, SocketAddr, CoordinateFormat);
