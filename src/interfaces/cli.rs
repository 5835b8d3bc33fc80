use crate::application::lookup::lookup_word;
use crate::domain::error::DictionaryError;
use crate::domain::traits::HttpTransport;
use crate::presentation::report::write_definition;
use crate::presentation::theme::Theme;
use crate::state::AppState;
use clap::Parser;
use std::io::Write;

pub const USAGE: &str = "Usage: dictionary-cli <word>";

#[derive(Parser, Debug, Default)]
#[command(name = "dictionary-cli")]
#[command(about = "Look up an English word in the free dictionary API.")]
#[command(version)]
pub struct Cli {
    /// Output the definition record as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme (plain, temp, wudao, canvas)
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Word to look up
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,

    // Anything after the word is accepted and ignored, dashes included.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No word was given, usage was printed.
    Usage,
    /// The report was printed.
    Found,
    /// The lookup failed and the error line was printed.
    Failed,
}

impl Outcome {
    /// Process exit code. Failures only count when `strict_exit` is on.
    pub fn exit_code(self, strict_exit: bool) -> u8 {
        match self {
            Outcome::Failed if strict_exit => 1,
            _ => 0,
        }
    }
}

/// Run one invocation, writing everything user-facing to `out`.
///
/// Lookup failures are reported on `out` and returned as [`Outcome::Failed`];
/// an `Err` means the output itself could not be produced.
pub async fn run<T, W>(
    cli: &Cli,
    state: &AppState<T>,
    out: &mut W,
) -> Result<Outcome, DictionaryError>
where
    T: HttpTransport,
    W: Write,
{
    let Some(word) = cli.word.as_deref() else {
        writeln!(out, "{}", USAGE)?;
        return Ok(Outcome::Usage);
    };

    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    let definition = match lookup_word(state, word).await {
        Ok(definition) => definition,
        Err(e) => {
            writeln!(out, "error: {}", e)?;
            return Ok(Outcome::Failed);
        }
    };

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&definition)?)?;
    } else {
        let theme_name = cli.theme.as_deref().unwrap_or(state.config.theme.as_str());
        let theme = Theme::from_name(theme_name);
        write_definition(out, &definition, &theme)?;
    }
    out.flush()?;

    Ok(Outcome::Found)
}
