use thiserror::Error;

/// Failure to get a usable response from the server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("browser API error: {0}")]
    Browser(String),
}

impl ClientError {
    /// Wraps a `JsValue` (or anything `Debug`) thrown by a web API
    pub fn browser(e: impl std::fmt::Debug) -> Self {
        Self::Browser(format!("{e:?}"))
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Failure to draw a bar chart
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("bar chart needs exactly 2 columns, got {0}")]
    Shape(usize),

    #[error("chart canvas `{0}` not found")]
    MissingCanvas(String),

    #[error("chart library error: {0}")]
    Library(String),
}
