use crate::editor::Editor;
use crate::error::{Error, Result};
use crate::notelist::NoteList;
use crate::prompt::Prompt;
use crate::settings::{Config, Theme};
use crate::terminal::Size;
use crate::vault::{self, NoteHandle, Vault};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};

// Frame margins (2 columns each side, 1 row top and bottom) plus header,
// spacer, status and help rows, plus the list's own title row.
const LIST_WIDTH_CHROME: u16 = 4;
const LIST_HEIGHT_CHROME: u16 = 2 + 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    List,
    Prompt,
    Editor,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Owns the active view, the three sub-models and the one open note handle.
/// Sub-models keep their state while another view is active.
pub struct App {
    vault: Vault,
    view: View,
    notes: NoteList,
    prompt: Prompt,
    editor: Editor,
    open: Option<NoteHandle>,
    status: Option<Status>,
    theme: Theme,
    quit: bool,
}

impl App {
    /// Creates the vault when missing and takes the first listing. Both
    /// failures are fatal.
    pub fn new(config: Config) -> Result<App> {
        let vault = Vault::new(config.vault_dir);
        vault.ensure()?;
        let notes = NoteList::new(vault.list_notes()?);
        info!("event=app_ready vault={} notes={}", vault.dir().display(), notes.len());
        Ok(App {
            vault,
            view: View::List,
            notes,
            prompt: Prompt::new(config.prompt, config.theme),
            editor: Editor::new(config.editor, config.theme),
            open: None,
            status: None,
            theme: config.theme,
            quit: false,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Name of the note currently held open, if any.
    pub fn open_note(&self) -> Option<&str> {
        self.open.as_ref().map(NoteHandle::name)
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteList {
        &mut self.notes
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn resize(&mut self, size: Size) {
        self.notes.set_size(Size {
            width: size.width.saturating_sub(LIST_WIDTH_CHROME),
            height: size.height.saturating_sub(LIST_HEIGHT_CHROME),
        });
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => self.resize(Size { width, height }),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status = None;

        match key.code {
            KeyCode::Esc => self.exit(),
            KeyCode::Char('c' | 'q') if key.modifiers == KeyModifiers::CONTROL => self.exit(),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => self.show(View::Prompt),
            KeyCode::Char('l') if key.modifiers == KeyModifiers::CONTROL => self.show(View::List),
            KeyCode::Char('e') if key.modifiers == KeyModifiers::CONTROL => self.resume_editor(),
            KeyCode::Char('s') if key.modifiers == KeyModifiers::CONTROL => self.save(),
            KeyCode::Enter if self.view != View::Editor => self.confirm(),
            _ => match self.view {
                View::List => self.notes.handle_key(key),
                View::Prompt => self.prompt.handle_key(key),
                View::Editor => self.editor.handle_key(key),
            },
        }
    }

    fn show(&mut self, view: View) {
        if self.view != view {
            debug!("event=view_change from={:?} to={:?}", self.view, view);
            self.view = view;
        }
    }

    fn exit(&mut self) {
        if let Some(name) = self.open_note() {
            info!("event=quit_unsaved name={name}");
        }
        self.quit = true;
    }

    fn report(&mut self, error: Error) {
        warn!("event=action_failed error={error}");
        self.status = Some(Status::Error(error.to_string()));
    }

    /// Enter is ignored while a note is held open, so a second handle is never taken.
    fn confirm(&mut self) {
        if let Some(name) = self.open_note() {
            let message = format!("{name} is still open; save it with Ctrl+S first");
            self.status = Some(Status::Error(message));
            return;
        }
        let result = match self.view {
            View::List => self.open_selected(),
            View::Prompt => self.create_from_prompt(),
            View::Editor => Ok(()),
        };
        if let Err(error) = result {
            self.report(error);
        }
    }

    fn open_selected(&mut self) -> Result<()> {
        let Some(file_name) = self.notes.selected().map(|entry| entry.file_name.clone()) else {
            return Ok(());
        };
        let content = self.vault.read_note(&file_name)?;
        let handle = self.vault.open_for_edit(&file_name)?;
        self.editor.set_content(&content);
        self.open = Some(handle);
        self.show(View::Editor);
        Ok(())
    }

    fn create_from_prompt(&mut self) -> Result<()> {
        let name = vault::note_file_name(self.prompt.value(), self.prompt.char_limit())?;
        let handle = self.vault.create_note(&name)?;
        self.prompt.clear();
        self.editor.clear();
        self.open = Some(handle);
        self.refresh();
        self.show(View::Editor);
        if self.status.is_none() {
            self.status = Some(Status::Info(format!("Created {name}")));
        }
        Ok(())
    }

    fn resume_editor(&mut self) {
        if self.open.is_some() {
            self.show(View::Editor);
        }
        else {
            self.status = Some(Status::Info(String::from("No note is open")));
        }
    }

    /// On a failed write the buffer and handle are kept so the user can retry.
    fn save(&mut self) {
        if self.view != View::Editor {
            return;
        }
        let Some(handle) = self.open.as_mut() else {
            return;
        };
        if let Err(error) = handle.overwrite(&self.editor.content()) {
            self.report(error);
            return;
        }
        let Some(handle) = self.open.take() else {
            return;
        };
        let name = handle.name().to_owned();
        let closed = handle.close();
        info!("event=note_saved name={name}");

        self.editor.clear();
        self.refresh();
        self.show(View::List);
        match closed {
            Ok(()) if self.status.is_none() => {
                self.status = Some(Status::Info(format!("Saved {name}")));
            }
            Ok(()) => {}
            Err(error) => self.report(error),
        }
    }

    /// A failed re-list keeps the previous snapshot.
    fn refresh(&mut self) {
        match self.vault.list_notes() {
            Ok(entries) => self.notes.replace(entries),
            Err(error) => self.report(error),
        }
    }
}
