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


use crate::network::{HttpRequest, HttpResponse, Transport};
use crate::types::{Error, TransportError};
use crate::{Resolver, Updater};
use mockito::{Matcher, Mock};
use std::cell::RefCell;
use std::env;
use std::sync::Once;

static INIT: Once = Once::new();
const MOCK_IP: &str = "192.0.2.1"; // RFC 5737
const MOCK_HOST: &str = "mock.example.com";
// base64 of "mockuser:mockpassword"
const MOCK_AUTH: &str = "Basic bW9ja3VzZXI6bW9ja3Bhc3N3b3Jk";

pub(crate) fn log_init() {
    env::set_var("RUST_LOG", "dnsomatic_client=debug");
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Transport answering every request with a fixed reply and keeping the
/// requests it was given.
pub(crate) struct FakeTransport {
    reply: Result<HttpResponse, String>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn replying(body: &str) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: &str) -> Self {
        FakeTransport {
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn failing(msg: &str) -> Self {
        FakeTransport {
            reply: Err(msg.to_string()),
            requests: RefCell::new(vec![]),
        }
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone().map_err(TransportError::Other)
    }
}

struct TestServer {
    server: mockito::ServerGuard,
}

impl TestServer {
    pub fn new() -> Self {
        TestServer {
            server: mockito::Server::new(),
        }
    }

    pub fn make_updater(&self) -> Updater {
        let mut updater = Updater::new("mockuser", "mockpassword").unwrap();
        updater
            .disable_https()
            .set_service_host(&self.server.host_with_port());
        updater
    }

    pub fn make_resolver(&self) -> Resolver {
        let mut resolver = Resolver::new().unwrap();
        resolver.set_service_host(&self.server.host_with_port());
        resolver
    }

    pub fn update_mock_base(&mut self) -> Mock {
        self.server
            .mock("POST", "/nic/update")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .match_header("authorization", MOCK_AUTH)
            .match_header(
                "content-type",
                "application/x-www-form-urlencoded",
            )
            .expect(1)
    }

    fn get_ip_mock(&mut self, body: &str) -> Mock {
        self.server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .expect(1)
            .create()
    }
}

#[test]
fn test_resolve_over_http() {
    log_init();
    let mut server = TestServer::new();
    let get_ip = server.get_ip_mock(MOCK_IP);
    let ip = server.make_resolver().resolve().unwrap();
    get_ip.assert();
    assert_eq!(ip, MOCK_IP);
}

#[test]
fn test_resolve_sends_user_agent() {
    log_init();
    let mut server = TestServer::new();
    let get_ip = server
        .server
        .mock("GET", "/")
        .match_header("user-agent", "resolver-test/1.0")
        .with_body(MOCK_IP)
        .expect(1)
        .create();
    let mut resolver = server.make_resolver();
    resolver.set_user_agent("resolver-test/1.0");
    assert_eq!(resolver.resolve().unwrap(), MOCK_IP);
    get_ip.assert();
}

#[test]
fn test_resolve_error_status() {
    log_init();
    let mut server = TestServer::new();
    let get_ip = server
        .server
        .mock("GET", "/")
        .with_status(503)
        .with_body(MOCK_IP)
        .expect(1)
        .create();
    let err = server.make_resolver().resolve().unwrap_err();
    get_ip.assert();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Status(503))
    ));
}

#[test]
fn test_resolve_invalid_body() {
    log_init();
    let mut server = TestServer::new();
    let get_ip = server.get_ip_mock("<html>nope</html>");
    let err = server.make_resolver().resolve().unwrap_err();
    get_ip.assert();
    assert!(matches!(err, Error::InvalidAddress(body) if body == "<html>nope</html>"));
}

#[test]
fn test_update_good() {
    log_init();
    let mut server = TestServer::new();
    let response = server
        .update_mock_base()
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("hostname".to_string(), MOCK_HOST.to_string()),
            Matcher::UrlEncoded("myip".to_string(), MOCK_IP.to_string()),
            Matcher::UrlEncoded("wildcard".to_string(), "NOCHG".to_string()),
            Matcher::UrlEncoded("mx".to_string(), "NOCHG".to_string()),
            Matcher::UrlEncoded("backmx".to_string(), "NOCHG".to_string()),
        ]))
        .with_body(format!("good {MOCK_IP}"))
        .create();
    let mut updater = server.make_updater();
    updater.set_hostname(MOCK_HOST).set_myip(MOCK_IP);
    let changed = updater.exec().unwrap();
    response.assert();
    assert!(changed);
    assert_eq!(updater.raw_response(), Some(format!("good {MOCK_IP}").as_str()));
}

#[test]
fn test_update_nochg() {
    log_init();
    let mut server = TestServer::new();
    let response = server
        .update_mock_base()
        .with_body(format!("nochg {MOCK_IP}"))
        .create();
    let mut updater = server.make_updater();
    updater.set_hostname(MOCK_HOST).set_myip(MOCK_IP);
    let changed = updater.exec().unwrap();
    response.assert();
    assert!(!changed);
}

#[test]
fn test_update_directives() {
    log_init();
    let mut server = TestServer::new();
    let response = server
        .update_mock_base()
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("hostname".to_string(), MOCK_HOST.to_string()),
            Matcher::UrlEncoded("wildcard".to_string(), "ON".to_string()),
            Matcher::UrlEncoded("mx".to_string(), "mail.example.com".to_string()),
            Matcher::UrlEncoded("backmx".to_string(), "YES".to_string()),
        ]))
        .with_body(format!("good {MOCK_IP}"))
        .create();
    let mut updater = server.make_updater();
    updater
        .set_hostname(MOCK_HOST)
        .enable_wildcard()
        .set_mx("mail.example.com")
        .enable_backmx();
    assert!(updater.exec().unwrap());
    response.assert();
}

#[test]
fn test_update_badauth() {
    log_init();
    let mut server = TestServer::new();
    let response = server.update_mock_base().with_body("badauth").create();
    let err = server.make_updater().exec().unwrap_err();
    response.assert();
    assert!(matches!(err, Error::BadAuth));
}

#[test]
fn test_update_ignored() {
    log_init();
    let mut server = TestServer::new();
    let response = server
        .update_mock_base()
        .with_body("good 127.0.0.1")
        .create();
    let mut updater = server.make_updater();
    updater.set_myip(MOCK_IP);
    let err = updater.exec().unwrap_err();
    response.assert();
    assert!(matches!(err, Error::IgnoredRequest));
    assert_eq!(updater.raw_response(), Some("good 127.0.0.1"));
}

#[test]
fn test_update_error_status() {
    log_init();
    let mut server = TestServer::new();
    let response = server
        .update_mock_base()
        .with_status(500)
        .with_body("911")
        .create();
    let mut updater = server.make_updater();
    let err = updater.exec().unwrap_err();
    response.assert();
    assert!(err.is_transport());
    assert_eq!(updater.raw_response(), None);
}
