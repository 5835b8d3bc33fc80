use crate::domain::error::DictionaryError;
use crate::domain::model::Definition;
use crate::domain::traits::HttpTransport;
use crate::state::AppState;

pub async fn lookup_word<T: HttpTransport>(
    state: &AppState<T>,
    word: &str,
) -> Result<Definition, DictionaryError> {
    tracing::info!(word, "looking up word");

    match state.dictionary.lookup(word).await {
        Ok(definition) => {
            tracing::info!(
                word = %definition.word,
                meanings = definition.meanings.len(),
                "lookup succeeded"
            );
            Ok(definition)
        }
        Err(e) => {
            tracing::info!(word, error = %e, "lookup failed");
            Err(e)
        }
    }
}
