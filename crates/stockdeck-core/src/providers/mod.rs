//! Provider clients and the error shape their failures normalize to.
//!
//! Each client wraps one upstream HTTP/JSON endpoint family. Success is
//! transport-level success plus a parseable JSON body; no schema validation
//! is applied beyond that, and payloads pass through verbatim.

mod market_data;
mod news;

pub use market_data::MarketDataClient;
pub use news::NewsClient;

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// The four dashboard data sources, one per display region and state slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    Profile,
    PriceChange,
    Chart,
    News,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::PriceChange => "price_change",
            Self::Chart => "chart",
            Self::News => "news",
        }
    }

    /// Static user-facing message rendered when this provider's fetch fails.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::News => "Error fetching news. Please try again later.",
            _ => "An error occurred while fetching data",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure classification for a single provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// The request never produced a response (network error, timeout).
    Transport,
    /// The provider answered with a non-success HTTP status.
    Status,
    /// The body arrived but was not the JSON shape the client consumes.
    Decode,
}

/// Structured error recorded in a fetch slot.
///
/// The kind and HTTP status survive so callers and tests can distinguish
/// failure modes; default rendering still collapses to
/// [`ProviderId::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            message: message.into(),
            status: None,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            message: format!("provider returned status {code}"),
            status: Some(code),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            message: message.into(),
            status: None,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status for [`FetchErrorKind::Status`] failures.
    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::Status => "fetch.status",
            FetchErrorKind::Decode => "fetch.decode",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FetchError {}
