use crate::domain::model::Definition;
use crate::presentation::theme::Theme;
use std::fmt::Write;
use std::io;

/// Render a string list as `[a, b]`.
pub fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Render the full report for one definition record.
///
/// With the plain theme the output is:
///
/// ```text
/// <word> [<phonetic>]
/// - <phonetic text> (Audio: <link>)
/// Origin: <origin>
///
/// <part of speech>:
/// - <definition>
///   Example: <example>
///   Synonyms: [..]
///   Antonyms: [..]
/// ```
///
/// The audio suffix and the synonym/antonym lines only appear when there is
/// something to show; everything else is printed even when empty.
pub fn format_definition(definition: &Definition, theme: &Theme) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{} [{}]",
        (theme.title)(&definition.word),
        (theme.pron)(&definition.phonetic)
    )
    .ok();

    for phonetic in &definition.phonetics {
        write!(output, "- {}", (theme.pron)(&phonetic.text)).ok();
        if let Some(audio) = phonetic.audio_link() {
            write!(output, " ({} {})", (theme.label)("Audio:"), (theme.link)(audio)).ok();
        }
        writeln!(output).ok();
    }

    writeln!(output, "{} {}", (theme.label)("Origin:"), definition.origin).ok();

    for meaning in &definition.meanings {
        writeln!(output).ok();
        writeln!(output, "{}:", (theme.heading)(&meaning.part_of_speech)).ok();

        for sense in &meaning.definitions {
            writeln!(output, "- {}", sense.definition).ok();
            writeln!(
                output,
                "  {} {}",
                (theme.label)("Example:"),
                (theme.eg)(&sense.example)
            )
            .ok();
            if !sense.synonyms.is_empty() {
                writeln!(
                    output,
                    "  {} {}",
                    (theme.label)("Synonyms:"),
                    format_list(&sense.synonyms)
                )
                .ok();
            }
            if !sense.antonyms.is_empty() {
                writeln!(
                    output,
                    "  {} {}",
                    (theme.label)("Antonyms:"),
                    format_list(&sense.antonyms)
                )
                .ok();
            }
        }
    }

    output
}

/// Write the report for `definition` to `out`.
pub fn write_definition<W: io::Write>(
    out: &mut W,
    definition: &Definition,
    theme: &Theme,
) -> io::Result<()> {
    out.write_all(format_definition(definition, theme).as_bytes())
}
