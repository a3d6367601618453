// Dnsomatic-client, a client library for the DNS-O-Matic update service.
// Copyright (C) 2022  Ronja Koistinen

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

/// One reply line of the update endpoint:
/// `<code> [<echoed ip>] [<extra>] [<trailing text...>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseLine<'a> {
    pub code: &'a str,
    pub echoed: Option<&'a str>,
    pub extra: Option<&'a str>,
    pub trailing: Option<&'a str>,
}

// Splits off the first whitespace delimited token, returning it and the
// remainder with leading whitespace removed.
fn next_token(s: &str) -> (Option<&str>, &str) {
    let s = s.trim_start();
    if s.is_empty() {
        return (None, s);
    }
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => (Some(token), rest.trim_start()),
        None => (Some(s), ""),
    }
}

impl<'a> ResponseLine<'a> {
    /// Returns `None` only when there is no code token at all.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (code, rest) = next_token(raw.trim_end());
        let (echoed, rest) = next_token(rest);
        let (extra, rest) = next_token(rest);
        Some(Self {
            code: code?,
            echoed,
            extra,
            trailing: (!rest.is_empty()).then_some(rest),
        })
    }
}
