use std::borrow::Cow;

use crate::url::UrlTemplate;
use crate::{Client, Result};

pub struct ClientBuilder {
    client: reqwest::blocking::ClientBuilder,
    template: Option<Cow<'static, str>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder(),
            template: None,
        }
    }

    /// Use another endpoint. Must contain a `{language}` placeholder.
    pub fn template(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let template = match self.template {
            Some(t) => UrlTemplate::new(t)?,
            None => UrlTemplate::default(),
        };

        // no idle connections, so each response releases its connection when dropped
        let client = self.client.pool_max_idle_per_host(0).build()?;

        Ok(Client { client, template })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
