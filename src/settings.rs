use crate::error::{Error, Result};
use ratatui::style::{Color, Modifier, Style};
use std::path::PathBuf;

const VAULT_DIR_NAME: &str = ".librenotes";
const APP_NAME: &str = "librenotes";

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub header: Style,
    pub list_title: Style,
    pub description: Style,
    pub highlight: Style,
    pub cursor: Style,
    pub help: Style,
    pub info: Style,
    pub error: Style,
}

#[derive(Clone, Debug)]
pub struct PromptSettings {
    pub char_limit: usize,
    pub placeholder: String,
}

#[derive(Clone, Debug)]
pub struct EditorSettings {
    pub placeholder: String,
}

/// Built once at startup and handed to the application by value.
#[derive(Clone, Debug)]
pub struct Config {
    pub vault_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub prompt: PromptSettings,
    pub editor: EditorSettings,
    pub theme: Theme,
}

impl Config {
    /// The vault lives at `<home>/.librenotes`; logs go to the user cache directory.
    pub fn from_home() -> Result<Config> {
        let dirs = directories::BaseDirs::new().ok_or(Error::NoHome)?;
        let mut config = Config::with_vault(dirs.home_dir().join(VAULT_DIR_NAME));
        config.log_dir = Some(dirs.cache_dir().join(APP_NAME).join("logs"));
        Ok(config)
    }

    pub fn with_vault(vault_dir: PathBuf) -> Config {
        Config {
            vault_dir,
            log_dir: None,
            prompt: PromptSettings::default(),
            editor: EditorSettings::default(),
            theme: Theme::default(),
        }
    }
}

impl Default for PromptSettings {
    fn default() -> Self {
        PromptSettings {
            char_limit: 256,
            placeholder: String::from("What do you want to name the file?"),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        EditorSettings { placeholder: String::from("lorem ipsum") }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::pink()
    }
}

impl Theme {
    #[rustfmt::skip]
    const fn pink() -> Theme {
        Theme {
            header:      Style::new().fg(Color::Indexed(16)).bg(Color::Indexed(205)).add_modifier(Modifier::BOLD),
            list_title:  Style::new().fg(Color::Indexed(16)).bg(Color::Indexed(254)),
            description: Style::new().fg(Color::DarkGray),
            highlight:   Style::new().fg(Color::Indexed(205)).add_modifier(Modifier::BOLD),
            cursor:      Style::new().fg(Color::Indexed(205)),
            help:        Style::new().fg(Color::DarkGray),
            info:        Style::new().fg(Color::Green),
            error:       Style::new().fg(Color::Red),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn injected_vault() {
        let config = super::Config::with_vault("/tmp/notes".into());
        assert_eq!(config.vault_dir, std::path::PathBuf::from("/tmp/notes"));
        assert!(config.log_dir.is_none());
        assert_eq!(config.prompt.char_limit, 256);
    }
}
