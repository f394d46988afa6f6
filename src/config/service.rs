use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use crate::demo::Station;

pub const DEFAULT_CONFIG_FILE: &str = "flumen.toml";

/// Service configuration
/// Resolved as defaults < TOML file < FLUMEN_* environment < CLI flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    pub bind: IpAddr,

    pub port: u16,

    /// Browser origins allowed to call the API with credentials
    pub cors_origins: Vec<String>,

    pub station_id: u32,
    pub station_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let station = Station::default();
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "https://flumen-frontend.vercel.app".to_string(),
            ],
            station_id: station.id,
            station_name: station.name,
        }
    }
}

impl ServiceConfig {
    /// Read a TOML file. Keys left out keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg: ServiceConfig =
            toml::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    }

    /// Load the file layer. An explicit path must exist; the default file is
    /// optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Apply FLUMEN_* overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup; unparsable values are ignored
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // FLUMEN_BIND
        if let Some(val) = lookup("FLUMEN_BIND") {
            match val.trim().parse::<IpAddr>() {
                Ok(ip) => self.bind = ip,
                Err(_) => tracing::warn!(value = %val, "ignoring invalid FLUMEN_BIND"),
            }
        }

        // FLUMEN_PORT
        if let Some(val) = lookup("FLUMEN_PORT") {
            match val.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!(value = %val, "ignoring invalid FLUMEN_PORT"),
            }
        }

        // FLUMEN_CORS_ORIGINS (comma-separated)
        if let Some(val) = lookup("FLUMEN_CORS_ORIGINS") {
            self.cors_origins = val
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        // FLUMEN_STATION_ID
        if let Some(val) = lookup("FLUMEN_STATION_ID") {
            match val.trim().parse::<u32>() {
                Ok(id) => self.station_id = id,
                Err(_) => tracing::warn!(value = %val, "ignoring invalid FLUMEN_STATION_ID"),
            }
        }

        // FLUMEN_STATION_NAME
        if let Some(val) = lookup("FLUMEN_STATION_NAME") {
            let name = val.trim();
            if !name.is_empty() {
                self.station_name = name.to_string();
            }
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn station(&self) -> Station {
        Station {
            id: self.station_id,
            name: self.station_name.clone(),
        }
    }
}
