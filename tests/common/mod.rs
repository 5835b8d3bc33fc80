//! Shared fixtures for the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use dictionary_cli::{AppState, Config, DictionaryError, HttpResponse, HttpTransport};
use std::sync::{Arc, Mutex};
use url::Url;

pub const HELLO_JSON: &str = r#"[{"word":"hello","phonetic":"/həˈloʊ/","phonetics":[{"text":"/həˈloʊ/","audio":"http://example/a.mp3"}],"origin":"Old English","meanings":[{"partOfSpeech":"exclamation","definitions":[{"definition":"A greeting.","example":"Hello there!","synonyms":["hi"],"antonyms":[]}]}]}]"#;

pub const HELLO_REPORT: &str = "hello [/həˈloʊ/]
- /həˈloʊ/ (Audio: http://example/a.mp3)
Origin: Old English

exclamation:
- A greeting.
  Example: Hello there!
  Synonyms: [hi]
";

/// In-memory transport answering every GET with the same status and body.
pub struct StubTransport {
    status: u16,
    body: Vec<u8>,
    requested: Arc<Mutex<Vec<Url>>>,
}

impl StubTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(200, body)
    }

    /// Handle on the URLs requested so far; stays usable after the
    /// transport has been moved into a client.
    pub fn requests(&self) -> Arc<Mutex<Vec<Url>>> {
        Arc::clone(&self.requested)
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, DictionaryError> {
        self.requested.lock().unwrap().push(url.clone());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub fn stub_state(transport: StubTransport) -> AppState<StubTransport> {
    AppState::with_transport(Config::default(), transport).unwrap()
}
