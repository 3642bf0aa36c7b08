use reqwest::blocking::RequestBuilder;
use serde::de::{self, DeserializeOwned, Unexpected};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::Result;

/// Summary of one page.
///
/// Fields of the response other than these two are ignored.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Page {
    /// Display title of the page.
    pub title: String,
    /// Plain text summary. May be empty.
    pub extract: String,
}

pub trait RequestBuilderExt: Sized {
    /// Sends the request, rejects error statuses and decodes the body as JSON.
    fn send_and_report_err(self) -> Result<Value>;

    /// Decodes the fields of `D` by name. The body must be a JSON object.
    fn send_parse<D: DeserializeOwned>(self) -> Result<D> {
        let v = expect_object(self.send_and_report_err()?)?;
        Ok(serde_json::from_value(v)?)
    }
}

fn expect_object(v: Value) -> Result<Value, serde_json::Error> {
    if v.is_object() {
        return Ok(v);
    }
    let unexp = match &v {
        Value::Object(_) => Unexpected::Map,
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
    };
    Err(<serde_json::Error as de::Error>::invalid_type(unexp, &"a JSON object"))
}

impl RequestBuilderExt for RequestBuilder {
    fn send_and_report_err(self) -> Result<Value> {
        let r = self.send()?;
        debug!(url = %r.url(), status = %r.status(), "received response");
        let r = r.error_for_status()?;
        Ok(r.json()?)
    }
}

impl crate::Client {
    /// Fetches the summary of a random page from the given language edition.
    ///
    /// Issues exactly one GET request. Nothing is cached between calls.
    pub fn random_page(&self, language: &str) -> Result<Page> {
        let url = self.mkurl(language)?;
        debug!(%url, "requesting random page");
        self.client.get(url).send_parse()
    }
}
