use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Neither the requested nor the fallback locale could be fetched
    LocaleUnavailable(String),
    HttpError(String),
    WebsocketError(String),
    /// Raw payload and the reason it could not be decoded
    InvalidResponse(String, String),
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LocaleUnavailable(s) => write!(f, "Unable to get locale: {}", s),
            Error::HttpError(s) => write!(f, "HTTP error: {}", s),
            Error::WebsocketError(s) => write!(f, "Websocket error: {}", s),
            Error::InvalidResponse(payload, e) => {
                write!(f, "Invalid response ({}): {}", e, payload)
            }
            Error::ConfigError(s) => write!(f, "Configuration error: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(error: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebsocketError(error.to_string())
    }
}
