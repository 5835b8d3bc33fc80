use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One dictionary entry for a word, as returned by the lookup service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phonetic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    #[serde(deserialize_with = "null_as_default")]
    pub origin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
}

/// A pronunciation transcription, optionally with a link to an audio clip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl Phonetic {
    /// The audio link, if there is a usable one. An empty string counts as none.
    pub fn audio_link(&self) -> Option<&str> {
        self.audio.as_deref().filter(|audio| !audio.is_empty())
    }
}

// Senses grouped under one part of speech
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meaning {
    #[serde(deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub definitions: Vec<Sense>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    #[serde(deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}
