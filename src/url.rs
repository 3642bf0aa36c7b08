use std::borrow::Cow;
use std::fmt;

use reqwest::Url;

use crate::{Error, Result};

/// Endpoint returning the summary of a random page of one language edition.
pub const RANDOM_SUMMARY: &str =
    "https://{language}.wikipedia.org/api/rest_v1/page/random/summary";

pub const DEFAULT_LANGUAGE: &str = "en";

const PLACEHOLDER: &str = "{language}";

/// An endpoint with a `{language}` placeholder for the language edition.
///
/// The language is substituted verbatim; nothing checks that it looks like a
/// language code. A value that does not produce a valid URL fails in
/// [`UrlTemplate::mkurl`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UrlTemplate(Cow<'static, str>);

impl UrlTemplate {
    pub const fn random_summary() -> Self {
        Self(Cow::Borrowed(RANDOM_SUMMARY))
    }

    pub fn new(template: impl Into<Cow<'static, str>>) -> Result<Self> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(Error::missing_placeholder(template.into_owned()));
        }
        Ok(Self(template))
    }

    pub fn format(&self, language: &str) -> String {
        self.0.replace(PLACEHOLDER, language)
    }

    pub fn mkurl(&self, language: &str) -> Result<Url> {
        Ok(self.format(language).parse()?)
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self::random_summary()
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
