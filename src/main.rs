//! main.rs
//! Entry point for bullseye

use bullseye::app::AppState;
use bullseye::config::Config;
use bullseye::core::terminal;
use bullseye::utils::cli::{CliAction, handle_args};
use bullseye::utils::{init_logging, resolve_initial_dir};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        tracing::error!(%info, "panic");
        eprintln!("\n[bullseye] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();
    if let CliAction::Exit = action {
        return Ok(());
    }

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging();
    let config = Config::load();

    let mut app = match action {
        CliAction::RunAppAtPath(path_arg) => match resolve_initial_dir(&path_arg) {
            Ok(path) => AppState::from_dir(&config, &path),
            Err(e) => {
                eprintln!("\n[bullseye] Error: Path '{}' cannot be opened: {}", path_arg, e);
                std::process::exit(1);
            }
        },
        _ => match AppState::new(&config) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("\n[bullseye] Error: Cannot determine the working directory: {}", e);
                std::process::exit(1);
            }
        },
    };

    terminal::run_terminal(&mut app)
}
