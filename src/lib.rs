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

//! Client for the DNS-O-Matic dynamic DNS aggregation service.
//!
//! [`Resolver`] asks `myip.dnsomatic.com` for the caller's public address and
//! [`Updater`] pushes an address to `updates.dnsomatic.com`, turning the
//! service's one-line reply into `Ok(changed)` or a specific [`Error`].
//!
//! ```no_run
//! use dnsomatic_client::{Resolver, Updater};
//!
//! # fn main() -> dnsomatic_client::Result<()> {
//! let ip = Resolver::new()?.resolve()?;
//! let mut updater = Updater::new("user", "password")?;
//! updater.set_hostname("sub.example.com").set_myip(&ip);
//! let changed = updater.exec()?;
//! # let _ = changed;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;

#[cfg(test)]
mod tests;

pub mod config;
pub mod network;
pub mod resolver;
pub mod types;
pub mod updater;
mod util;

pub use config::Config;
pub use network::{HttpRequest, HttpResponse, Method, Transport};
pub use resolver::Resolver;
pub use types::{
    BackMx, Error, Mx, Result, ReturnCode, TransportError, TransportMode,
    Wildcard,
};
pub use updater::Updater;
pub use util::ResponseLine;

/// Host answering with the caller's public IP address.
pub const RESOLVER_HOST: &str = "myip.dnsomatic.com";
/// Host of the update endpoint.
pub const SERVICE_HOST: &str = "updates.dnsomatic.com";
pub const SERVICE_PATH: &str = "/nic/update";
/// Hostname meaning "every host registered with the account".
pub const ALL_HOSTNAMES: &str = "all.dnsomatic.com";

const RESOLVER_USER_AGENT: &str =
    concat!("DNS-O-Matic-Rust/", env!("CARGO_PKG_VERSION"), " (resolver)");
const UPDATER_USER_AGENT: &str =
    concat!("DNS-O-Matic-Rust/", env!("CARGO_PKG_VERSION"), " (updater)");
