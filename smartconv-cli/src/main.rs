//! smartconv terminal front end
//!
//! Reads one request per line from stdin and writes results to stdout.
//! Logs go to stderr (filter with RUST_LOG).
//!
//! Commands:
//! - :mode            toggle smart/classic input
//! - :smart, :classic set the input mode
//! - :history         show recent conversions
//! - :categories      list categories
//! - :units <name>    list the units of a category
//! - :help            show this summary
//! - :quit            exit

use std::io::{self, BufRead, IsTerminal, Write};
use smartconv::{Category, Config, Mode, OutputFormat, Renderer, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP: &str = "\
Smart mode:   type a conversion, e.g. '10 kg to lb' or '25 C to F'
Classic mode: <category> <from> <to> <value>, e.g. 'Length Meter Foot 3'
Commands:     :mode :smart :classic :history :categories :units <category> :help :quit";

/// Result of handling one input line
enum Step {
    Output(Option<String>),
    Quit,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt(session: &Session) -> String {
    match session.mode() {
        Mode::Smart => "smart> ".to_string(),
        Mode::Classic => "classic> ".to_string(),
    }
}

fn handle_command(session: &mut Session, renderer: &Renderer, command: &str) -> Step {
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let output = match name {
        "mode" => {
            let mode = session.toggle_mode();
            renderer.render_notice(&format!("Switched to {} mode", mode))
        }
        "smart" => {
            session.set_mode(Mode::Smart);
            renderer.render_notice("Switched to smart mode")
        }
        "classic" => {
            session.set_mode(Mode::Classic);
            renderer.render_notice("Switched to classic mode")
        }
        "history" => renderer.render_history(session.history()),
        "categories" => renderer.render_categories(),
        "units" => match arg.map(str::parse::<Category>) {
            Some(Ok(category)) => renderer.render_units(category),
            Some(Err(e)) => renderer.render_notice(&e.to_string()),
            None => renderer.render_notice("Usage: :units <category>"),
        },
        "help" => renderer.render_notice(HELP),
        "quit" | "exit" => return Step::Quit,
        other => renderer.render_notice(&format!("Unknown command :{} (try :help)", other)),
    };

    Step::Output(Some(output))
}

fn handle_line(session: &mut Session, renderer: &Renderer, line: &str) -> Step {
    match line.strip_prefix(':') {
        Some(command) => handle_command(session, renderer, command),
        None => {
            let outcome = session.submit(line);
            Step::Output(renderer.render_outcome(&outcome))
        }
    }
}

fn main() {
    init_logging();

    let config = Config::from_env();
    // Prompts only for a person typing; piped and JSON sessions get bare responses
    let interactive = io::stdin().is_terminal() && config.output == OutputFormat::Text;
    let renderer = Renderer::new(config.output);
    let mut session = Session::new(config);

    info!(version = VERSION, mode = %session.mode(), interactive, "smartconv started");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());
    let mut stdout = io::stdout();

    loop {
        if interactive {
            if let Err(e) = write!(stdout, "{}", prompt(&session)).and_then(|_| stdout.flush()) {
                error!(error = %e, "failed to write prompt");
                break;
            }
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match handle_line(&mut session, &renderer, line) {
                    Step::Quit => break,
                    Step::Output(None) => {}
                    Step::Output(Some(text)) => {
                        if let Err(e) = writeln!(stdout, "{}", text) {
                            error!(error = %e, "failed to write response");
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    session.end();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(step: Step) -> Option<String> {
        match step {
            Step::Output(text) => text,
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_conversion_line() {
        let mut session = Session::new(Config::default().with_mode(Mode::Smart));
        let renderer = Renderer::default();
        let text = output(handle_line(&mut session, &renderer, "10 kg to lb"));
        assert_eq!(text.as_deref(), Some("✔ 10.0 Kilogram = 22.0462 Pound"));
    }

    #[test]
    fn test_no_match_prints_nothing() {
        let mut session = Session::new(Config::default().with_mode(Mode::Smart));
        let renderer = Renderer::default();
        assert!(output(handle_line(&mut session, &renderer, "hello")).is_none());
    }

    #[test]
    fn test_mode_command() {
        let mut session = Session::default();
        let renderer = Renderer::default();
        let text = output(handle_line(&mut session, &renderer, ":mode"));
        assert_eq!(text.as_deref(), Some("Switched to smart mode"));
        assert_eq!(session.mode(), Mode::Smart);
        assert_eq!(prompt(&session), "smart> ");
    }

    #[test]
    fn test_units_command() {
        let mut session = Session::default();
        let renderer = Renderer::default();
        let text = output(handle_line(&mut session, &renderer, ":units weight")).unwrap();
        assert!(text.starts_with("Weight:\n  Kilogram (kg)"));

        let text = output(handle_line(&mut session, &renderer, ":units volume")).unwrap();
        assert_eq!(text, "unknown category: volume");

        let text = output(handle_line(&mut session, &renderer, ":units")).unwrap();
        assert_eq!(text, "Usage: :units <category>");
    }

    #[test]
    fn test_history_command() {
        let mut session = Session::default();
        let renderer = Renderer::default();
        handle_line(&mut session, &renderer, "Length Meter Centimeter 1");
        let text = output(handle_line(&mut session, &renderer, ":history")).unwrap();
        assert!(text.contains("1.0 Meter = 100.0000 Centimeter"));
    }

    #[test]
    fn test_quit_and_unknown_command() {
        let mut session = Session::default();
        let renderer = Renderer::default();
        assert!(matches!(handle_line(&mut session, &renderer, ":quit"), Step::Quit));
        let text = output(handle_line(&mut session, &renderer, ":frobnicate")).unwrap();
        assert!(text.contains("Unknown command :frobnicate"));
    }
}
