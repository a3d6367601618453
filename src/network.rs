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

use crate::types::TransportError;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::USER_AGENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub basic_auth: Option<(String, String)>,
    pub form: Option<Vec<(&'static str, String)>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: vec![],
            basic_auth: None,
            form: None,
        }
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.headers
            .push((USER_AGENT.as_str().to_string(), agent.to_string()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one HTTP request and returns the status and body. Timeouts, TLS
/// and connection reuse are left to the implementation.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl Transport for Client {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.get(&request.url),
            Method::Post => self.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((user, password)) = &request.basic_auth {
            builder = builder.basic_auth(user, Some(password));
        }
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }
        let response = builder.send()?;
        let status = response.status().as_u16();
        Ok(HttpResponse {
            status,
            body: response.text()?,
        })
    }
}

/// Sends `request`, treating any non-2xx status as a transport failure.
pub fn send_checked<T: Transport + ?Sized>(
    transport: &T,
    request: &HttpRequest,
) -> Result<HttpResponse, TransportError> {
    debug!("{:?} {}", request.method, request.url);
    let response = transport.send(request)?;
    if (200..300).contains(&response.status) {
        Ok(response)
    } else {
        Err(TransportError::Status(response.status))
    }
}

pub fn default_client(user_agent: &str) -> Result<Client, TransportError> {
    debug!("Initializing HTTP client...");
    Ok(ClientBuilder::new().user_agent(user_agent).build()?)
}
