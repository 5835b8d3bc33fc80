use crate::domain::error::DictionaryError;
use async_trait::async_trait;
use url::Url;

/// Status line and fully drained body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the HTTP layer under the dictionary client
///
/// Anything that can perform a GET and hand back status plus body can stand in
/// for the network, which is how the client is tested without one.
/// Implementations must release the underlying connection before returning.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, DictionaryError>;
}
