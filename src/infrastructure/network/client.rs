use crate::domain::error::DictionaryError;
use crate::domain::model::Definition;
use crate::domain::traits::HttpTransport;
use url::Url;

/// Client for the free dictionary API.
///
/// Performs one GET per lookup through whatever transport it was built with.
pub struct DictionaryClient<T> {
    transport: T,
    base_url: Url,
}

impl<T: HttpTransport> DictionaryClient<T> {
    pub fn new(transport: T, base_url: &str) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }
        Ok(Self {
            transport,
            base_url,
        })
    }

    /// The entry URL for `word`, which is appended as a single
    /// percent-encoded path segment.
    pub fn lookup_url(&self, word: &str) -> Result<Url, DictionaryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Look up `word` and return the first definition record the service
    /// knows for it.
    pub async fn lookup(&self, word: &str) -> Result<Definition, DictionaryError> {
        let url = self.lookup_url(word)?;
        tracing::debug!(%url, "requesting definition");

        let response = self.transport.get(&url).await?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        if response.status == 404 {
            return Err(DictionaryError::NotFound {
                word: word.to_string(),
            });
        }
        if !response.is_success() {
            return Err(DictionaryError::Status(response.status));
        }

        let definitions: Vec<Definition> = serde_json::from_slice(&response.body)?;
        if definitions.len() > 1 {
            tracing::debug!(
                discarded = definitions.len() - 1,
                "using the first definition record"
            );
        }

        definitions
            .into_iter()
            .next()
            .ok_or_else(|| DictionaryError::NotFound {
                word: word.to_string(),
            })
    }
}
