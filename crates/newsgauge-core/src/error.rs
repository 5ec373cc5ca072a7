/// Errors that can occur in Newsgauge operations.
#[derive(Debug, thiserror::Error)]
pub enum NewsgaugeError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("search query is empty")]
    EmptyQuery,

    #[error("no stored result for query {0:?}")]
    UnknownQuery(String),
}

impl From<toml::de::Error> for NewsgaugeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
