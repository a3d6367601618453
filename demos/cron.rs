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

//! Run from cron: resolve the current address and push it to DNS-O-Matic
//! only when it differs from the one cached by the previous run.
//!
//! Configuration comes from the environment or a `.env` file, see
//! [`dnsomatic_client::Config`].

use dnsomatic_client::network::default_client;
use dnsomatic_client::{Config, Resolver, Result};
use log::{debug, error, info};
use std::fs;
use std::io::Write;

fn log_init() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} ({}:{})",
            buf.timestamp(),
            record.args(),
            record.file().unwrap_or("?"),
            record.line().unwrap_or(0)
        )
    })
    .init();
}

fn run(config: &Config) -> Result<()> {
    let ip = Resolver::new()?.resolve()?;
    info!("Resolved IP address: {ip}");

    let cached = config
        .ip_cache
        .as_ref()
        .and_then(|path| fs::read_to_string(path).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    debug!("Cached IP address: '{cached}'");

    if ip == cached {
        info!("IP address {ip} is up to date");
        return Ok(());
    }

    info!("Updating DNS-O-Matic...");
    let client = default_client(
        config.user_agent.as_deref().unwrap_or("DNS-O-Matic-Rust (cron)"),
    )?;
    let mut updater = config.updater(client);
    updater.set_myip(&ip);
    let changed = updater.exec()?;
    debug!("Raw response: {:?}", updater.raw_response());
    info!("Update done, record changed: {changed}");

    if let Some(path) = &config.ip_cache {
        if let Err(e) = fs::write(path, &ip) {
            error!("Unable to write IP cache {}: {e}", path.display());
        }
    }
    Ok(())
}

fn main() {
    log_init();
    debug!("Starting...");
    match Config::from_env() {
        Ok(config) => {
            if let Err(e) = run(&config) {
                error!("{e}");
            }
        }
        Err(e) => error!("{e}"),
    }
    debug!("Done");
}
