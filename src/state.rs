use crate::domain::error::DictionaryError;
use crate::domain::traits::HttpTransport;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::{DictionaryClient, ReqwestTransport};

pub struct AppState<T = ReqwestTransport> {
    pub config: Config,
    pub dictionary: DictionaryClient<T>,
}

impl AppState<ReqwestTransport> {
    pub fn new(config: Config) -> Result<Self, DictionaryError> {
        let transport = ReqwestTransport::from_config(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> AppState<T> {
    pub fn with_transport(config: Config, transport: T) -> Result<Self, DictionaryError> {
        let dictionary = DictionaryClient::new(transport, &config.api_base)?;
        Ok(Self { config, dictionary })
    }
}
