//! Client for the random page summary endpoint of the Wikipedia REST API.
//!
//! ```no_run
//! let page = wiki_random::random_page("en")?;
//! assert!(!page.title.is_empty());
//! # Ok::<(), wiki_random::Error>(())
//! ```

use reqwest::Url;

pub mod api;
pub mod builder;
pub mod url;

pub use api::Page;
pub use builder::ClientBuilder;
pub use self::url::{UrlTemplate, DEFAULT_LANGUAGE, RANDOM_SUMMARY};

#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::blocking::Client,
    template: UrlTemplate,
}

/// The request failed, or the response did not contain a valid page.
///
/// Transport and validation problems are not distinguished; the message is
/// the text of the underlying cause.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(#[from] Cause);

#[derive(thiserror::Error, Debug)]
enum Cause {
    #[error(transparent)]
    InvalidUrl(#[from] ::url::ParseError),
    #[error("URL template `{0}` has no {{language}} placeholder")]
    MissingPlaceholder(String),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

macro_rules! from_cause {
    ($($t:ty),+$(,)?) => {
        $(impl From<$t> for Error {
            fn from(e: $t) -> Self {
                Self(e.into())
            }
        })+
    };
}

from_cause!(::url::ParseError, reqwest::Error, serde_json::Error);

impl Error {
    pub(crate) fn missing_placeholder(template: String) -> Self {
        Self(Cause::MissingPlaceholder(template))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Client {
    /// A client for the public Wikipedia endpoint.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn mkurl(&self, language: &str) -> Result<Url> {
        self.template.mkurl(language)
    }
}

/// Fetches a random page summary with a freshly built client.
pub fn random_page(language: &str) -> Result<Page> {
    Client::new()?.random_page(language)
}

#[cfg(test)]
mod tests;
