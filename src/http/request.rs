use std::fmt::{self, Display};

use super::method::HttpMethod;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Number(f64),
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(value) => write!(f, "{value}"),
            // `f64` displays `150.0` as `150`, which is what the service expects.
            QueryValue::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Number(value)
    }
}

#[derive(Debug, Clone)]
pub struct RequestInput {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, QueryValue)>,
}

impl RequestInput {
    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }
}
