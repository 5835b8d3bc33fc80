use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub pron: fn(&str) -> String,
    pub heading: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub link: fn(&str) -> String,
    pub eg: fn(&str) -> String,
}

impl Theme {
    pub const NAMES: [&'static str; 4] = ["plain", "temp", "wudao", "canvas"];

    pub fn try_from_name(name: &str) -> Option<Self> {
        match name {
            "plain" | "" => Some(Self::plain()),
            "temp" => Some(Self::temp()),
            "wudao" => Some(Self::wudao()),
            "canvas" => Some(Self::canvas()),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or_else(|| {
            eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
            Self::plain()
        })
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            pron: |s| s.to_string(),
            heading: |s| s.to_string(),
            label: |s| s.to_string(),
            link: |s| s.to_string(),
            eg: |s| s.to_string(),
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().italic().bold().underline().to_string(),
            pron: |s| s.normal().to_string(),
            heading: |s| s.green().to_string(),
            label: |s| s.cyan().italic().to_string(),
            link: |s| s.bright_black().dimmed().to_string(),
            eg: |s| s.bright_white().dimmed().italic().to_string(),
        }
    }

    fn wudao() -> Self {
        Self {
            title: |s| s.red().italic().bold().underline().to_string(),
            pron: |s| s.cyan().to_string(),
            heading: |s| s.normal().to_string(),
            label: |s| s.green().italic().to_string(),
            link: |s| s.bright_black().dimmed().to_string(),
            eg: |s| s.bright_yellow().dimmed().italic().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            pron: |s| s.magenta().to_string(),
            heading: |s| s.bright_cyan().bold().to_string(),
            label: |s| s.green().italic().to_string(),
            link: |s| s.bright_blue().to_string(),
            eg: |s| s.bright_black().italic().to_string(),
        }
    }
}
