use crate::terminal::Size;
use crate::util::{self, Direction};
use crate::vault::ListEntry;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::ListState;

// Two text rows plus one spacer per entry.
const ROWS_PER_ENTRY: u16 = 3;

/// The latest vault snapshot, the subset currently shown, and the highlight.
#[derive(Debug, Default)]
pub struct NoteList {
    entries: Vec<ListEntry>,
    visible: Vec<usize>,
    filter: Option<String>,
    state: ListState,
    size: Size,
}

pub fn modified_label(entry: &ListEntry) -> String {
    let time: DateTime<Local> = entry.modified.into();
    format!("Modified: {}", time.format("%Y-%m-%d %H:%M"))
}

impl NoteList {
    pub fn new(entries: Vec<ListEntry>) -> NoteList {
        let mut list = NoteList::default();
        list.replace(entries);
        list
    }

    /// Swap in a fresh snapshot, keeping the highlighted note when it survives.
    pub fn replace(&mut self, entries: Vec<ListEntry>) {
        let previous = self.selected().map(|entry| entry.name.clone());
        self.entries = entries;
        self.apply_filter();
        if let Some(name) = previous {
            if let Some(row) = self.visible.iter().position(|&i| self.entries[i].name == name) {
                self.state.select(Some(row));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &ListEntry> {
        self.visible.iter().map(|&index| &self.entries[index])
    }

    pub fn selected(&self) -> Option<&ListEntry> {
        let row = self.state.selected()?;
        self.visible.get(row).map(|&index| &self.entries[index])
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn page_step(&self) -> usize {
        usize::from((self.size.height / ROWS_PER_ENTRY).max(1))
    }

    fn apply_filter(&mut self) {
        self.visible = match self.filter.as_deref() {
            None | Some("") => (0..self.entries.len()).collect(),
            Some(query) => {
                let matcher = SkimMatcherV2::default();
                let mut scored: Vec<(i64, usize)> = self
                    .entries
                    .iter()
                    .enumerate()
                    .filter_map(|(index, entry)| {
                        matcher.fuzzy_match(&entry.name, query).map(|score| (score, index))
                    })
                    .collect();
                scored.sort_by(|a, b| b.0.cmp(&a.0));
                scored.into_iter().map(|(_, index)| index).collect()
            }
        };
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let selection = match (self.visible.len(), self.state.selected()) {
            (0, _) => None,
            (len, Some(row)) => Some(row.min(len - 1)),
            (_, None) => Some(0),
        };
        self.state.select(selection);
    }

    pub fn move_selection(&mut self, direction: Direction) {
        if self.visible.is_empty() {
            return;
        }
        let row = self.state.selected().unwrap_or(0);
        self.state.select(Some(util::rotate(direction, self.visible.len(), row)));
    }

    fn page(&mut self, direction: Direction) {
        let Some(last) = self.visible.len().checked_sub(1) else {
            return;
        };
        let row = self.state.selected().unwrap_or(0);
        let row = match direction {
            Direction::Up => row.saturating_sub(self.page_step()),
            Direction::Down => (row + self.page_step()).min(last),
        };
        self.state.select(Some(row));
    }

    fn jump(&mut self, row: usize) {
        if !self.visible.is_empty() {
            self.state.select(Some(row.min(self.visible.len() - 1)));
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
        let Some(query) = self.filter.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Char(character)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                query.push(character);
            }
            KeyCode::Backspace => {
                if query.pop().is_none() {
                    self.filter = None;
                }
            }
            _ => return false,
        }
        self.apply_filter();
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_filter_key(key) {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(Direction::Down),
            KeyCode::PageUp => self.page(Direction::Up),
            KeyCode::PageDown => self.page(Direction::Down),
            KeyCode::Home | KeyCode::Char('g') => self.jump(0),
            KeyCode::End | KeyCode::Char('G') => self.jump(usize::MAX),
            KeyCode::Char('/') => self.filter = Some(String::new()),
            _ => {}
        }
    }
}
