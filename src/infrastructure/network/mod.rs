pub mod client;
pub mod http;

pub use client::DictionaryClient;
pub use http::ReqwestTransport;
