use serde::{Deserialize, Serialize};

/// Outcome code of one asynchronous query, with the numeric values the
/// consumers key off of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    /// No query has settled yet.
    Idle,
    Ok,
    BadRequest,
    NotFound,
    Internal,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Self::Idle => 0,
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = String;

    fn try_from(code: u16) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Idle),
            200 => Ok(Self::Ok),
            400 => Ok(Self::BadRequest),
            404 => Ok(Self::NotFound),
            500 => Ok(Self::Internal),
            other => Err(format!("unknown status code: {}", other)),
        }
    }
}

/// Current state of one asynchronous query as published to consumers.
///
/// Envelopes are replaced wholesale on every transition, never mutated in
/// place, so a subscriber can never observe a torn state. `error` is present
/// exactly when `status` is 400 or above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub status: Status,
    pub message: String,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Starting state of a feed that fires a query immediately.
    pub fn pending(data: T) -> Self {
        Self {
            data,
            status: Status::Idle,
            message: String::new(),
            loading: true,
            error: None,
        }
    }

    /// Starting state of a feed that waits for input before querying.
    pub fn idle(data: T) -> Self {
        Self {
            data,
            status: Status::Idle,
            message: String::new(),
            loading: false,
            error: None,
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            status: Status::Ok,
            message: message.into(),
            loading: false,
            error: None,
        }
    }

    /// Rejected locally before reaching the engine: a guided empty state,
    /// not a failure surfaced to the user.
    pub fn invalid(data: T, message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            data,
            status: Status::BadRequest,
            message: message.into(),
            loading: false,
            error: Some(reason.into()),
        }
    }

    pub fn failed(
        status: Status,
        data: T,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            data,
            status,
            message: message.into(),
            loading: false,
            error: Some(error.into()),
        }
    }

    /// Re-entering the loading state for a refetch. The previous data and
    /// status ride along so subscribers keep rendering the stale result
    /// instead of flashing empty.
    pub fn into_loading(self) -> Self {
        Self {
            loading: true,
            ..self
        }
    }

    /// A query has settled once it is no longer in flight and has produced
    /// some outcome.
    pub fn is_settled(&self) -> bool {
        !self.loading && self.status != Status::Idle
    }

    pub fn is_err(&self) -> bool {
        self.status.code() >= 400
    }
}
