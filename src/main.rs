mod app;
mod editor;
mod error;
mod logging;
mod notelist;
mod prompt;
mod settings;
mod terminal;
mod ui;
mod util;
mod vault;

use std::process::ExitCode;

fn start() -> error::Result<()> {
    let config = settings::Config::from_home()?;
    // Panic hooks chain: the logging hook goes in first, then terminal::begin
    // wraps it, so a panic restores the terminal before it is logged and printed.
    let _logger = config.log_dir.as_deref().and_then(|dir| logging::init(dir).ok());
    let mut app = app::App::new(config)?;

    let result = terminal::begin().and_then(|mut terminal| {
        app.resize(terminal::size()?);
        ui::run(&mut terminal, &mut app)
    });
    terminal::end()?;
    Ok(result?)
}

fn main() -> ExitCode {
    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("event=fatal error={error} fatal={}", error.is_fatal());
            eprintln!("librenotes: {error}");
            ExitCode::FAILURE
        }
    }
}
