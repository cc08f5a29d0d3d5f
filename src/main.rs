use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod app;
mod config;
mod directory;
mod dm;
mod error;
mod help;
mod license;
mod members;
mod messages;
mod notification;
mod purpose;
mod scroll;
mod suggest;
mod switcher;
mod theme;
mod widgets;
mod workspace;

use app::{App, OutputMode};
use error::ChanhopError;
use workspace::WorkspaceLoader;

/// Interactive channel switcher
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive channel switcher for team chat workspaces"
)]
struct Args {
    /// Workspace snapshot JSON file (if not provided, reads from stdin)
    workspace: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/chanhop-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/chanhop-debug.log")
            .expect("Failed to open /tmp/chanhop-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== CHANHOP DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config and message catalog early to avoid defaults during app
    // initialization
    let config_result = config::load_config();
    let catalog_result = messages::load_catalog();
    messages::install(catalog_result.catalog);

    let args = Args::parse();

    if let Some(path) = &args.workspace {
        validate_workspace_path(path)?;
    }

    let terminal = init_terminal()?;

    // Deferred loading prevents blocking on large snapshots/stdin
    let loader = if let Some(path) = args.workspace {
        WorkspaceLoader::spawn_load(path)
    } else {
        WorkspaceLoader::spawn_load_stdin()
    };

    let app = App::new_with_loader(loader, &config_result.config);
    let result = run(terminal, app, config_result, catalog_result.warning);

    restore_terminal()?;
    let app = result?;

    // A failed workspace load surfaces after terminal restore
    if let Some(fatal) = &app.fatal {
        return Err(fatal.clone().into());
    }

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== CHANHOP DEBUG SESSION ENDED ===");

    Ok(())
}

/// Validate that the snapshot file exists before entering the TUI
fn validate_workspace_path(path: &std::path::Path) -> Result<(), ChanhopError> {
    if !path.exists() {
        return Err(ChanhopError::WorkspaceNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
    catalog_warning: Option<String>,
) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }
    if let Some(warning) = catalog_warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App) -> Result<()> {
    match app.output_mode() {
        Some(OutputMode::Id) => {
            if let Some(channel) = &app.current_channel {
                println!("{}", channel.id);
            }
        }
        Some(OutputMode::Json) => {
            if let Some(channel) = &app.current_channel {
                println!("{}", serde_json::to_string(channel)?);
            }
        }
        None => {
            // No output mode (exited without switching)
        }
    }

    Ok(())
}
