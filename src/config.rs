// Dnsomatic-client, a client library for the DNS-O-Matic update service.
// Copyright (C) 2020-2023  Ronja Koistinen

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::network::Transport;
use crate::types::{Error, Result};
use crate::updater::Updater;
use std::path::PathBuf;

/// Settings for a caller driving the updater, read from the environment
/// or a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub hostname: Option<String>,
    pub use_https: bool,
    pub user_agent: Option<String>,
    pub ip_cache: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Reading configuration from environment...");
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{key} not set")))
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let use_https = match optional("DNSOMATIC_HTTPS") {
            None => true,
            Some(v) => match v.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(Error::Config(format!(
                        "DNSOMATIC_HTTPS has invalid value '{v}'"
                    )))
                }
            },
        };

        Ok(Self {
            username: required("DNSOMATIC_USER")?,
            password: required("DNSOMATIC_PASSWORD")?,
            hostname: optional("DNSOMATIC_HOSTNAME"),
            use_https,
            user_agent: optional("DNSOMATIC_USER_AGENT"),
            ip_cache: optional("DNSOMATIC_IP_CACHE").map(PathBuf::from),
        })
    }

    /// Builds an updater with these settings applied.
    pub fn updater<T: Transport>(&self, transport: T) -> Updater<T> {
        let mut updater =
            Updater::with_transport(transport, &self.username, &self.password);
        if !self.use_https {
            updater.disable_https();
        }
        if let Some(hostname) = &self.hostname {
            updater.set_hostname(hostname);
        }
        if let Some(agent) = &self.user_agent {
            updater.set_user_agent(agent);
        }
        updater
    }
}
