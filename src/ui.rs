use crate::app::{App, Status, View};
use crate::notelist;
use crate::terminal::Terminal;
use crossterm::event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use std::io;

const TITLE: &str = "Welcome to Librenotes!";
const HELP: &str =
    "Ctrl+N: new note - Ctrl+L: list - Ctrl+E: editor - Ctrl+S: save - Esc/Ctrl+Q: quit";

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let banner = Span::styled(format!("  {TITLE}  "), app.theme().header);
    frame.render_widget(Paragraph::new(Line::from(banner)), area);
}

fn draw_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme();
    let mut area = area;
    if let Some(query) = app.notes().filter() {
        let line = Line::from(vec![Span::styled("Filter: ", theme.highlight), Span::raw(query)]);
        frame.render_widget(Paragraph::new(line), Rect { height: 1, ..area });
        area = Rect { y: area.y + 1, height: area.height.saturating_sub(1), ..area };
    }

    let block = Block::default().title(Span::styled(" All Notes ", theme.list_title));
    if app.notes().visible().next().is_none() {
        let message = if app.notes().is_empty() { "No notes." } else { "No matching notes." };
        frame.render_widget(Paragraph::new(message).style(theme.description).block(block), area);
        return;
    }
    let items: Vec<ListItem> = app
        .notes()
        .visible()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(entry.name.clone()),
                Line::styled(notelist::modified_label(entry), theme.description),
                Line::default(),
            ])
        })
        .collect();
    let list = List::new(items).block(block).highlight_style(theme.highlight).highlight_symbol("│ ");
    frame.render_stateful_widget(list, area, app.notes_mut().state_mut());
}

fn draw_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let line = Rect { height: area.height.min(1), ..area };
    let chunks = Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).split(line);
    frame.render_widget(Paragraph::new(Span::styled("> ", app.theme().cursor)), chunks[0]);
    frame.render_widget(app.prompt().widget(), chunks[1]);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let title = app.open_note().unwrap_or_default().to_owned();
    let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(app.editor().widget(), inner);
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let line = match app.status() {
        Some(Status::Info(message)) => Line::styled(message.as_str(), theme.info),
        Some(Status::Error(message)) => Line::styled(message.as_str(), theme.error),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Header banner, active view, status line, help line.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(2)
    .vertical_margin(1)
    .split(frame.size());

    draw_header(frame, app, chunks[0]);
    match app.view() {
        View::List => draw_list(frame, app, chunks[2]),
        View::Prompt => draw_prompt(frame, app, chunks[2]),
        View::Editor => draw_editor(frame, app, chunks[2]),
    }
    draw_status_line(frame, app, chunks[3]);
    frame.render_widget(Paragraph::new(Span::styled(HELP, app.theme().help)), chunks[4]);
}

/// One event per iteration; each is fully handled before the next frame.
pub fn run(terminal: &mut Terminal, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;
        app.handle_event(event::read()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::draw;
    use crate::app::App;
    use crate::settings::Config;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        let symbols: Vec<&str> = buffer.content.iter().map(|cell| cell.symbol()).collect();
        symbols.chunks(width).map(|row| row.concat()).collect::<Vec<_>>().join("\n")
    }

    fn key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_event(Event::Key(KeyEvent::new(code, modifiers)));
    }

    #[test]
    fn frame_shows_header_view_and_help() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("vault");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("ideas.md"), "x").unwrap();
        let mut app = App::new(Config::with_vault(dir)).unwrap();

        let frame = render(&mut app);
        assert!(frame.contains("Welcome to Librenotes!"));
        assert!(frame.contains("All Notes"));
        assert!(frame.contains("ideas.md"));
        assert!(frame.contains("Modified: "));
        assert!(frame.contains("Ctrl+S: save"));

        key(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        let frame = render(&mut app);
        assert!(frame.contains("What do you want to name the file?"));
        assert!(!frame.contains("All Notes"));

        for character in "todo".chars() {
            key(&mut app, KeyCode::Char(character), KeyModifiers::NONE);
        }
        key(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        let frame = render(&mut app);
        assert!(frame.contains(" todo.md "));
        assert!(frame.contains("Created todo.md"));
    }

    #[test]
    fn empty_vault_message() {
        let temp = tempfile::tempdir().unwrap();
        let mut app = App::new(Config::with_vault(temp.path().join("vault"))).unwrap();
        assert!(render(&mut app).contains("No notes."));
    }
}
