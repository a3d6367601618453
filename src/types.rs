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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

const PRESERVED: &str = "NOCHG";

/// Scheme used to reach the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Https,
    Http,
}

impl TransportMode {
    pub fn scheme(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wildcard {
    Enabled,
    Disabled,
    #[default]
    Preserved,
}

impl Wildcard {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "ON",
            Self::Disabled => "OFF",
            Self::Preserved => PRESERVED,
        }
    }
}

/// Mail exchanger directive. The service ignores an exchanger that does
/// not resolve to an address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mx {
    #[default]
    Preserved,
    Exchanger(String),
}

impl Mx {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Preserved => PRESERVED,
            Self::Exchanger(host) => host,
        }
    }
}

impl From<&str> for Mx {
    fn from(s: &str) -> Self {
        if s == PRESERVED {
            Self::Preserved
        } else {
            Self::Exchanger(s.to_string())
        }
    }
}

impl From<String> for Mx {
    fn from(s: String) -> Self {
        if s == PRESERVED {
            Self::Preserved
        } else {
            Self::Exchanger(s)
        }
    }
}

/// Backup MX directive: list the host itself as a lower preference MX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackMx {
    Enabled,
    Disabled,
    #[default]
    Preserved,
}

impl BackMx {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "YES",
            Self::Disabled => "NO",
            Self::Preserved => PRESERVED,
        }
    }
}

/// Return codes of the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnCode {
    /// The update was accepted and the record now points at the address.
    Good,
    /// The record already had this value.
    NoChg,
    BadAuth,
    NotFQDN,
    NoHost,
    NumHost,
    Abuse,
    BadAgent,
    /// The request failed due to a technical problem at the service.
    DNSErr,
    NineEleven,
    Other(String),
}

impl ReturnCode {
    /// Codes are matched case-insensitively.
    pub fn from(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "good" => Self::Good,
            "nochg" => Self::NoChg,
            "badauth" => Self::BadAuth,
            "notfqdn" => Self::NotFQDN,
            "nohost" => Self::NoHost,
            "numhost" => Self::NumHost,
            "abuse" => Self::Abuse,
            "badagent" => Self::BadAgent,
            "dnserr" => Self::DNSErr,
            "911" => Self::NineEleven,
            _ => Self::Other(code.to_string()),
        }
    }

    pub fn log(&self) {
        match self {
            Self::Good => info!("DNS-O-Matic replied: Hostname(s) updated"),
            Self::NoChg => info!("DNS-O-Matic replied: No change"),
            Self::BadAuth => {
                error!("DNS-O-Matic replied: Authentication failed");
            }
            Self::NotFQDN => error!(
                "DNS-O-Matic replied: Hostname is not a fully-qualified domain name"
            ),
            Self::NoHost => error!(concat!(
                "DNS-O-Matic replied: Hostname does not exist ",
                "or is not registered to this account"
            )),
            Self::NumHost => {
                error!("DNS-O-Matic replied: Too many or too few hosts");
            }
            Self::Abuse => {
                error!("DNS-O-Matic replied: Hostname blocked for abuse");
            }
            Self::BadAgent => {
                error!("DNS-O-Matic replied: User agent not accepted");
            }
            Self::DNSErr => error!(
                "DNS-O-Matic replied: Request failed due to technical problem"
            ),
            Self::NineEleven => {
                error!("DNS-O-Matic replied: Serious problem at the service");
            }
            Self::Other(s) => {
                error!("DNS-O-Matic replied with other message: '{s}'");
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("resolver returned an invalid IP address: '{0}'")]
    InvalidAddress(String),
    #[error("malformed response from update service: '{0}'")]
    MalformedResponse(String),
    #[error("unknown response from update service: '{0}'")]
    UnknownResponse(String),
    #[error("the username and password pair do not match a real user")]
    BadAuth,
    #[error("the hostname specified is not a fully-qualified domain name")]
    NotFQDN,
    #[error("the hostname specified does not exist in this user account")]
    NoHost,
    #[error("too many or too few hosts found")]
    NumHost,
    #[error("the hostname specified is blocked for update abuse")]
    Abuse,
    #[error("the user agent was not sent or HTTP method is not permitted")]
    BadAgent,
    #[error("DNS error encountered at the update service")]
    DNSErr,
    #[error("there is a serious problem at the update service")]
    NineEleven,
    #[error("the update service ignored the request")]
    IgnoredRequest,
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(TransportError::Http(e))
    }
}
