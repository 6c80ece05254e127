//! Loading-facts overlay demo.
//!
//! Simulates a long-running job and rotates facts in a floating overlay
//! above it. Point it at a fact pack to rotate your own:
//!
//! ```bash
//! cargo run -p tidbit -- --pack my_facts.json --interval 2
//! ```

mod app;
mod events;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tidbit_core::{FactLoader, FactPack, LoaderConfig};

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let mut config = LoaderConfig::default();
    if let Some(secs) = flag_value(&args, "--interval") {
        let secs: f64 = secs.parse().map_err(|_| "invalid --interval value")?;
        config.interval = Duration::from_secs_f64(secs.max(0.1));
    }

    let mut loader = FactLoader::new(config);
    if let Some(path) = flag_value(&args, "--pack") {
        let pack = FactPack::load(path).await.map_err(|e| {
            eprintln!("Failed to load fact pack: {e}");
            e
        })?;
        pack.install_into(loader.store_mut())?;
    }

    // Terminal setup; failure here means no usable render surface.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(loader, Instant::now()));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| render(f, &app, now))?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if handle_event(&mut app, ev, Instant::now()) == EventResult::Quit {
                return Ok(());
            }
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn print_help() {
    println!("tidbit - loading-facts overlay demo");
    println!();
    println!("USAGE:");
    println!("  tidbit [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help           Show this help message");
    println!("  --pack <FILE>        Load a JSON fact pack before starting");
    println!("  --interval <SECS>    Rotation interval (default: 3)");
    println!();
    println!("KEYS:");
    println!("  s / Enter   start (or restart) the rotation");
    println!("  x           stop the rotation");
    println!("  c / Tab     cycle category");
    println!("  + / -       lengthen / shorten the interval");
    println!("  b           toggle bold overlay text");
    println!("  q / Esc     quit");
}
