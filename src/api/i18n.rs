use super::endpoint;
use super::error::Error;
use crate::model::Strings;

/// Fetches the locale string tables served by the inverter's web UI.
#[derive(Debug, Clone)]
pub struct LocaleStringStore {
    base_url: String,
    client: reqwest::Client,
}

impl LocaleStringStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        LocaleStringStore {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, locale: &str) -> String {
        format!("{}{}/{}.properties", self.base_url, endpoint::I18N, locale)
    }

    /// `Ok(None)` on a non-success status, transport failures are errors.
    async fn get(&self, locale: &str) -> Result<Option<String>, Error> {
        let url = self.url(locale);
        log::debug!("fetching locale strings from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        if response.status() != http::StatusCode::OK {
            log::debug!("{} responded {}", url, response.status());
            return Ok(None);
        }

        response
            .text()
            .await
            .map(Some)
            .map_err(|e| Error::HttpError(format!("Error reading locale strings: {}", e)))
    }

    /// Read the string table for `locale`, falling back to `en_US` once.
    pub async fn resolve(&self, locale: &str) -> Result<Strings, Error> {
        let text = match self.get(locale).await? {
            Some(text) => text,
            None => {
                log::warn!(
                    "locale {} unavailable, falling back to {}",
                    locale,
                    endpoint::FALLBACK_LOCALE
                );
                self.get(endpoint::FALLBACK_LOCALE)
                    .await?
                    .ok_or_else(|| Error::LocaleUnavailable(locale.to_string()))?
            }
        };

        Ok(parse_properties(&text))
    }
}

/// Parse `key=value` lines. Only the first `=` splits; lines without one are skipped.
pub fn parse_properties(text: &str) -> Strings {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Translation of `key`, or `key` itself when there is none.
pub fn lookup_or_default<'a>(strings: &'a Strings, key: &'a str) -> &'a str {
    strings.get(key).map(String::as_str).unwrap_or(key)
}
