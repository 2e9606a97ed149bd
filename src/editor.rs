use crate::settings::{EditorSettings, Theme};
use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Multi-line text buffer. Knows nothing about the file it came from.
pub struct Editor {
    textarea: TextArea<'static>,
    settings: EditorSettings,
    theme: Theme,
}

impl Editor {
    pub fn new(settings: EditorSettings, theme: Theme) -> Editor {
        let textarea = Editor::textarea(Vec::new(), &settings, &theme);
        Editor { textarea, settings, theme }
    }

    fn textarea(lines: Vec<String>, settings: &EditorSettings, theme: &Theme) -> TextArea<'static> {
        let mut textarea = if lines.is_empty() { TextArea::default() } else { TextArea::new(lines) };
        textarea.set_placeholder_text(settings.placeholder.clone());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme.cursor.add_modifier(Modifier::REVERSED));
        textarea
    }

    /// Splitting on '\n' rather than `lines()` keeps a trailing newline intact.
    pub fn set_content(&mut self, content: &str) {
        let lines = content.split('\n').map(String::from).collect();
        self.textarea = Editor::textarea(lines, &self.settings, &self.theme);
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn clear(&mut self) {
        self.textarea = Editor::textarea(Vec::new(), &self.settings, &self.theme);
    }

    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }
}

#[cfg(test)]
mod tests {
    use super::Editor;
    use crate::settings::{EditorSettings, Theme};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn editor() -> Editor {
        Editor::new(EditorSettings::default(), Theme::default())
    }

    fn press(editor: &mut Editor, code: KeyCode) {
        editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_builds_content() {
        let mut editor = editor();
        assert_eq!(editor.content(), "");
        "hello".chars().for_each(|c| press(&mut editor, KeyCode::Char(c)));
        press(&mut editor, KeyCode::Enter);
        "world".chars().for_each(|c| press(&mut editor, KeyCode::Char(c)));
        assert_eq!(editor.content(), "hello\nworld");
        press(&mut editor, KeyCode::Backspace);
        assert_eq!(editor.content(), "hello\nworl");
    }

    #[test]
    fn content_survives_trailing_newline() {
        let mut editor = editor();
        editor.set_content("a\n\nb\n");
        assert_eq!(editor.content(), "a\n\nb\n");
        editor.clear();
        assert_eq!(editor.content(), "");
    }
}
