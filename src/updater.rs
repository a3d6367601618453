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
use crate::types::{BackMx, Error, Mx, Result, ReturnCode, TransportMode, Wildcard};
use crate::util::ResponseLine;
use crate::{ALL_HOSTNAMES, SERVICE_HOST, SERVICE_PATH, UPDATER_USER_AGENT};
use reqwest::blocking::Client;

// Echoed back by the service when it drops an update instead of applying it
const IGNORED_ADDRESS: &str = "127.0.0.1";

/// One update request to DNS-O-Matic. Configure it with the setters, then
/// call [`Updater::exec`].
pub struct Updater<T: Transport = Client> {
    transport: T,
    mode: TransportMode,
    user_agent: String,
    service_host: String,
    username: String,
    password: String,
    hostname: String,
    myip: Option<String>,
    wildcard: Wildcard,
    mx: Mx,
    backmx: BackMx,
    raw_response: Option<String>,
}

impl Updater<Client> {
    pub fn new(username: &str, password: &str) -> Result<Self> {
        let client = default_client(UPDATER_USER_AGENT)?;
        Ok(Self::with_transport(client, username, password))
    }
}

impl<T: Transport> Updater<T> {
    pub fn with_transport(transport: T, username: &str, password: &str) -> Self {
        Self {
            transport,
            mode: TransportMode::default(),
            user_agent: UPDATER_USER_AGENT.to_string(),
            service_host: SERVICE_HOST.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            hostname: ALL_HOSTNAMES.to_string(),
            myip: None,
            wildcard: Wildcard::default(),
            mx: Mx::default(),
            backmx: BackMx::default(),
            raw_response: None,
        }
    }

    /// Update over HTTP with TLS on port 443. This is the default.
    pub fn enable_https(&mut self) -> &mut Self {
        self.mode = TransportMode::Https;
        self
    }

    /// Update over plain HTTP on port 80.
    pub fn disable_https(&mut self) -> &mut Self {
        self.mode = TransportMode::Http;
        self
    }

    pub fn is_https_enabled(&self) -> bool {
        self.mode == TransportMode::Https
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn set_user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Points the updater at another host (`host` or `host:port`).
    pub fn set_service_host(&mut self, host: &str) -> &mut Self {
        self.service_host = host.to_string();
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Host to update. [`ALL_HOSTNAMES`] updates every service registered
    /// with the account.
    pub fn set_hostname(&mut self, hostname: &str) -> &mut Self {
        self.hostname = hostname.to_string();
        self
    }

    pub fn myip(&self) -> Option<&str> {
        self.myip.as_deref()
    }

    /// Address to publish. When unset the service uses the address the
    /// request came from.
    pub fn set_myip(&mut self, myip: &str) -> &mut Self {
        self.myip = Some(myip.to_string());
        self
    }

    pub fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    pub fn enable_wildcard(&mut self) -> &mut Self {
        self.wildcard = Wildcard::Enabled;
        self
    }

    pub fn disable_wildcard(&mut self) -> &mut Self {
        self.wildcard = Wildcard::Disabled;
        self
    }

    pub fn preserve_wildcard(&mut self) -> &mut Self {
        self.wildcard = Wildcard::Preserved;
        self
    }

    pub fn is_wildcard_enabled(&self) -> bool {
        self.wildcard == Wildcard::Enabled
    }

    pub fn is_wildcard_preserved(&self) -> bool {
        self.wildcard == Wildcard::Preserved
    }

    pub fn mx(&self) -> &Mx {
        &self.mx
    }

    /// Mail exchanger for the host. It must resolve to an address or the
    /// service ignores it. `NOCHG` keeps the previous setting.
    pub fn set_mx(&mut self, mx: impl Into<Mx>) -> &mut Self {
        self.mx = mx.into();
        self
    }

    pub fn backmx(&self) -> BackMx {
        self.backmx
    }

    pub fn enable_backmx(&mut self) -> &mut Self {
        self.backmx = BackMx::Enabled;
        self
    }

    pub fn disable_backmx(&mut self) -> &mut Self {
        self.backmx = BackMx::Disabled;
        self
    }

    pub fn preserve_backmx(&mut self) -> &mut Self {
        self.backmx = BackMx::Preserved;
        self
    }

    pub fn is_backmx_enabled(&self) -> bool {
        self.backmx == BackMx::Enabled
    }

    pub fn is_backmx_preserved(&self) -> bool {
        self.backmx == BackMx::Preserved
    }

    /// Body of the last reply, `None` before [`Updater::exec`] has
    /// received one.
    pub fn raw_response(&self) -> Option<&str> {
        self.raw_response.as_deref()
    }

    pub fn service_url(&self) -> String {
        format!("{}://{}{}", self.mode.scheme(), self.service_host, SERVICE_PATH)
    }

    pub fn request_body(&self) -> Vec<(&'static str, String)> {
        let mut body = vec![("hostname", self.hostname.clone())];
        if let Some(ip) = &self.myip {
            body.push(("myip", ip.clone()));
        }
        body.push(("wildcard", self.wildcard.as_str().to_string()));
        body.push(("mx", self.mx.as_str().to_string()));
        body.push(("backmx", self.backmx.as_str().to_string()));
        body
    }

    /// Sends the update. Returns `true` if the record was changed and
    /// `false` if it already had this value.
    pub fn exec(&mut self) -> Result<bool> {
        let mut request = HttpRequest::new(Method::Post, self.service_url())
            .user_agent(&self.user_agent);
        request.basic_auth = Some((self.username.clone(), self.password.clone()));
        request.form = Some(self.request_body());

        let body = send_checked(&self.transport, &request)?.body;
        let raw: &str = self.raw_response.insert(body);
        debug!("DNS-O-Matic raw response: '{raw}'");

        let Some(line) = ResponseLine::parse(raw) else {
            error!("DNS-O-Matic replied with an empty response");
            return Err(Error::MalformedResponse(raw.to_string()));
        };
        let code = ReturnCode::from(line.code);
        code.log();
        match code {
            ReturnCode::Good => {
                if line.echoed == Some(IGNORED_ADDRESS)
                    && self.myip.as_deref() != Some(IGNORED_ADDRESS)
                {
                    error!("DNS-O-Matic ignored the update request");
                    return Err(Error::IgnoredRequest);
                }
                Ok(true)
            }
            ReturnCode::NoChg => Ok(false),
            ReturnCode::BadAuth => Err(Error::BadAuth),
            ReturnCode::NotFQDN => Err(Error::NotFQDN),
            ReturnCode::NoHost => Err(Error::NoHost),
            ReturnCode::NumHost => Err(Error::NumHost),
            ReturnCode::Abuse => Err(Error::Abuse),
            ReturnCode::BadAgent => Err(Error::BadAgent),
            ReturnCode::DNSErr => Err(Error::DNSErr),
            ReturnCode::NineEleven => Err(Error::NineEleven),
            ReturnCode::Other(_) => Err(Error::UnknownResponse(raw.to_string())),
        }
    }
}
