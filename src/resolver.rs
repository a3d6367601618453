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

use crate::network::{default_client, send_checked, HttpRequest, Method, Transport};
use crate::types::{Error, Result};
use crate::{RESOLVER_HOST, RESOLVER_USER_AGENT};
use reqwest::blocking::Client;
use std::net::IpAddr;

/// Looks up the caller's current public IP address.
pub struct Resolver<T: Transport = Client> {
    transport: T,
    user_agent: String,
    service_host: String,
}

impl Resolver<Client> {
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(default_client(RESOLVER_USER_AGENT)?))
    }
}

impl<T: Transport> Resolver<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            user_agent: RESOLVER_USER_AGENT.to_string(),
            service_host: RESOLVER_HOST.to_string(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Points the resolver at another host (`host` or `host:port`).
    pub fn set_service_host(&mut self, host: &str) -> &mut Self {
        self.service_host = host.to_string();
        self
    }

    pub fn service_url(&self) -> String {
        format!("http://{}/", self.service_host)
    }

    /// Returns the response body unchanged if it is an IPv4 or IPv6 literal.
    pub fn resolve(&self) -> Result<String> {
        debug!("Getting my current IP address from {}", self.service_host);
        let request = HttpRequest::new(Method::Get, self.service_url())
            .user_agent(&self.user_agent);
        let body = send_checked(&self.transport, &request)?.body;
        if body.parse::<IpAddr>().is_err() {
            return Err(Error::InvalidAddress(body));
        }
        debug!("My current IP address is {body}");
        Ok(body)
    }

    pub fn resolve_addr(&self) -> Result<IpAddr> {
        let body = self.resolve()?;
        body.parse().map_err(|_| Error::InvalidAddress(body))
    }
}
