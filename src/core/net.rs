// src/core/net.rs
// One blocking GET per page. No retries: a failed fetch ends the run.

use std::time::Duration;

use reqwest::Url;
use tracing::info;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Anything that can hand back the raw bytes of a page.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(insecure: bool) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(insecure)
            .build()
            .map_err(|source| Error::Fetch { url: s!("(client setup)"), source })?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("GET {url}");
        let fail = |source| Error::Fetch { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(fail)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http { url: s!(url), status: status.as_u16() });
        }
        // Raw bytes; decoding happens at parse time.
        let body = resp.bytes().map_err(fail)?;
        Ok(body.to_vec())
    }
}

/// `<base>?<page>` with the whole page name form-encoded as the query.
pub fn wiki_url(base: &str, page: &str) -> Result<String> {
    let mut url = Url::parse(base).map_err(|_| Error::Url { url: s!(base) })?;
    url.set_query(None);
    url.query_pairs_mut().append_key_only(page);
    Ok(url.into())
}
