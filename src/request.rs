//! Request descriptors carried through observables by the request dispatcher.
//!
//! Nothing in the observable core depends on these types; they are the payload
//! the bundled binary streams.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while building request descriptors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// HTTP verbs a [`Request`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(Method::Post)
        } else {
            Err(RequestError::UnsupportedMethod(s.to_string()))
        }
    }
}

/// Status codes a request handler reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok = 200,
    InternalServerError = 500,
}

impl StatusCode {
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// A request to dispatch: verb, target and payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub host: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Request {
    pub fn new(method: Method, host: impl Into<String>, path: impl Into<String>) -> Self {
        Request {
            method,
            host: host.into(),
            path: path.into(),
            body: None,
            params: BTreeMap::new(),
        }
    }

    pub fn get(host: impl Into<String>, path: impl Into<String>) -> Self {
        Request::new(Method::Get, host, path)
    }

    pub fn post(host: impl Into<String>, path: impl Into<String>, body: serde_json::Value) -> Self {
        Request {
            body: Some(body),
            ..Request::new(Method::Post, host, path)
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Outcome of handling a single [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
}

impl Response {
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Response { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("get".parse::<Method>(), Ok(Method::Get));
        assert_eq!("POST".parse::<Method>(), Ok(Method::Post));
        assert_eq!(
            "PATCH".parse::<Method>(),
            Err(RequestError::UnsupportedMethod("PATCH".to_string()))
        );
    }

    #[test]
    fn status_codes_keep_their_numeric_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
        assert_eq!(StatusCode::InternalServerError.to_string(), "500");
    }

    #[test]
    fn get_request_serializes_without_body() {
        let request = Request::get("service.example", "user").with_param("id", "3f5h67s4s");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "method": "GET",
                "host": "service.example",
                "path": "user",
                "params": { "id": "3f5h67s4s" },
            })
        );
    }

    #[test]
    fn post_request_deserializes_with_missing_params() {
        let request: Request = serde_json::from_value(json!({
            "method": "POST",
            "host": "service.example",
            "path": "user",
            "body": { "name": "User Name" },
        }))
        .unwrap();

        assert_eq!(
            request,
            Request::post("service.example", "user", json!({ "name": "User Name" }))
        );
        assert!(request.params.is_empty());
    }
}
