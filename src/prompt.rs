use crate::settings::{PromptSettings, Theme};
use crossterm::event::KeyEvent;
use tui_textarea::{Input, Key, TextArea};

/// Single-line input for the base name of a new note.
pub struct Prompt {
    textarea: TextArea<'static>,
    settings: PromptSettings,
    theme: Theme,
}

fn inserts_newline(input: &Input) -> bool {
    match input.key {
        Key::Enter => true,
        Key::Char('m') => input.ctrl,
        _ => false,
    }
}

impl Prompt {
    pub fn new(settings: PromptSettings, theme: Theme) -> Prompt {
        let textarea = Prompt::textarea(&settings, &theme);
        Prompt { textarea, settings, theme }
    }

    fn textarea(settings: &PromptSettings, theme: &Theme) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(settings.placeholder.clone());
        textarea.set_style(theme.cursor);
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea
    }

    pub fn value(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or_default()
    }

    pub fn char_limit(&self) -> usize {
        self.settings.char_limit
    }

    pub fn clear(&mut self) {
        self.textarea = Prompt::textarea(&self.settings, &self.theme);
    }

    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Edits that would break the line or exceed the limit are dropped.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let input = Input::from(key);
        if inserts_newline(&input) {
            return;
        }
        let full = self.value().chars().count() >= self.settings.char_limit;
        if full && matches!(input.key, Key::Char(_)) && !input.ctrl && !input.alt {
            return;
        }
        if self.textarea.input(input) && self.value().chars().count() > self.settings.char_limit {
            self.textarea.undo();
        }
    }
}
