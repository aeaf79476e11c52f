use std::error::Error;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;

use benchviz_series::error::SeriesError;
use reqwest::StatusCode;

pub(crate) type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug)]
pub(crate) enum FetchError {
    Http(reqwest::Error),
    Response {
        url: String,
        status_code: StatusCode,
        message: String,
    },
    Io {
        path: PathBuf,
        error: io::Error,
    },
    Decode {
        resource: String,
        error: SeriesError,
    },
    Source(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fetch_error = "fetch error:";

        match self {
            FetchError::Http(error) => write!(f, "{fetch_error} HTTP request error: {error}"),
            FetchError::Response {
                url,
                status_code,
                message,
            } => write!(
                f,
                "{fetch_error} HTTP response error: url = {url}, status = {status_code}, message = {message}"
            ),
            FetchError::Io { path, error } => {
                write!(f, "{fetch_error} reading `{}` failed: {error}", path.display())
            }
            FetchError::Decode { resource, error } => {
                write!(f, "{fetch_error} decoding `{resource}` failed: {error}")
            }
            FetchError::Source(message) => write!(f, "{fetch_error} invalid source: {message}"),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Http(error) => Some(error),
            FetchError::Io { error, .. } => Some(error),
            FetchError::Decode { error, .. } => Some(error),
            FetchError::Response { .. } | FetchError::Source(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Http(error)
    }
}
