use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_no_route_found(&self) -> bool {
        self.code == NO_ROUTE_FOUND
    }

    pub fn is_stale_result(&self) -> bool {
        self.code == STALE_RESULT
    }

    pub fn is_transport(&self) -> bool {
        self.code == TRANSPORT
    }

    pub fn is_empty_response(&self) -> bool {
        self.code == EMPTY_RESPONSE
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        transport_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        decode_error(err)
    }
}

const ENV_VAR: i32 = 1;
const TRANSPORT: i32 = 3;
const UPSTREAM: i32 = 4;
const DECODE: i32 = 6;
const QUEUE_CLOSED: i32 = 7;
const INVALID_INPUT: i32 = 101;
const NO_ROUTE_FOUND: i32 = 102;
const STALE_RESULT: i32 = 103;
const EMPTY_RESPONSE: i32 = 104;

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: ENV_VAR,
        message: format!("environment variable error: {}", err),
    }
}

// keeps the underlying message, it is shown to the user
pub fn transport_error<T: Display>(err: T) -> Error {
    Error {
        code: TRANSPORT,
        message: err.to_string(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: UPSTREAM,
        message: "upstream error".into(),
    }
}

pub fn decode_error<T: Debug>(_: T) -> Error {
    Error {
        code: DECODE,
        message: "decode error".into(),
    }
}

pub fn queue_closed_error() -> Error {
    Error {
        code: QUEUE_CLOSED,
        message: "event queue closed".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: INVALID_INPUT,
        message: "invalid input".into(),
    }
}

pub fn no_route_found_error() -> Error {
    Error {
        code: NO_ROUTE_FOUND,
        message: "No routes found".into(),
    }
}

pub fn stale_result_error() -> Error {
    Error {
        code: STALE_RESULT,
        message: "stale result".into(),
    }
}

pub fn empty_response_error() -> Error {
    Error {
        code: EMPTY_RESPONSE,
        message: "No routes found, make sure you set the right user and access token.".into(),
    }
}
