//! Look up an English word in the free dictionary API and print its
//! phonetics, origin, and meanings.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::DictionaryError;
pub use domain::model::{Definition, Meaning, Phonetic, Sense};
pub use domain::traits::{HttpResponse, HttpTransport};
pub use infrastructure::config::Config;
pub use infrastructure::network::{DictionaryClient, ReqwestTransport};
pub use interfaces::cli::{run, Cli, Outcome};
pub use state::AppState;
