//! damage_tui - Interactive TUI for the elemental damage calculator

mod app;
mod form;
mod report;
mod ui;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use damage_core::config::{default_skill_inputs, load_scenario, load_skill_configs, Scenario};
use damage_core::input::SkillInput;
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 's',
        long = "scenario",
        help = "Scenario file to start from (.toml or .json)"
    )]
    pub scenario: Option<PathBuf>,

    #[arg(
        short = 'k',
        long = "skills",
        help = "TOML file of [[skills]] presets to cycle with 'p' instead of the built-in ones"
    )]
    pub skills: Option<PathBuf>,

    #[arg(
        short = 'p',
        long = "print",
        help = "Print the combat summary and exit instead of starting the TUI"
    )]
    pub print: bool,

    #[arg(
        long = "log-dir",
        help = "Directory for the TUI log file",
        default_value = "logs"
    )]
    pub log_dir: PathBuf,
}

/// Log to a file; the TUI owns the terminal
fn init_file_logging(log_dir: &Path) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, "damage_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/damage_tui.log", log_dir.display());
    Ok(guard)
}

/// Log to stderr so stdout carries only the report
fn init_stderr_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Arguments::parse();

    if args.print {
        init_stderr_logging();
        let scenario = starting_scenario(&args)?;
        let resolved = scenario.resolve();
        let breakdown = resolved.calculate();
        for line in report::full_report(&resolved, &breakdown) {
            println!("{}", line);
        }
        return Ok(());
    }

    let _guard = init_file_logging(&args.log_dir)?;
    let scenario = starting_scenario(&args)?;
    let presets = skill_presets(&args, &scenario)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(scenario).with_presets(presets);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

fn starting_scenario(args: &Arguments) -> Result<Scenario, damage_core::ConfigError> {
    match &args.scenario {
        Some(path) => load_scenario(path),
        None => Ok(Scenario::default()),
    }
}

fn skill_presets(
    args: &Arguments,
    scenario: &Scenario,
) -> Result<Vec<SkillInput>, damage_core::ConfigError> {
    match &args.skills {
        Some(path) => {
            let defaults = scenario.effective_defaults();
            let skills = load_skill_configs(path, &defaults.skill)?;
            tracing::info!("Loaded {} skill presets from {}", skills.len(), path.display());
            Ok(skills.iter().map(SkillInput::from_skill).collect())
        }
        None => Ok(default_skill_inputs()),
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.is_editing() {
            match key.code {
                KeyCode::Enter => app.on_enter(),
                KeyCode::Esc => app.cancel_edit(),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Char(c) => app.on_char(c),
                _ => {}
            }
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Char('4'), _) => app.set_tab(3),
            (KeyCode::Char('5'), _) => app.set_tab(4),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Enter, _) => app.on_enter(),
            (KeyCode::Char('f'), _) => app.toggle_formula(),
            (KeyCode::Char('p'), _) => app.next_preset(),
            (KeyCode::Char('r'), _) => app.reset(),
            (KeyCode::Char('?'), _) => app.toggle_help(),
            _ => {}
        }
    }

    Ok(())
}
