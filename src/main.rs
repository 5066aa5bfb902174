// sortty: step-by-step sorting algorithm visualizer

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::{Config, InputSource, RunMode};
use sortty::input;
use sortty::playback::{ManualTicker, PlaybackController, PlaybackFrame, Renderer};
use sortty::steps::{Algorithm, StepSequence};
use sortty::ui::App;

/// Prints each frame as one line of text
struct LinePrinter;

impl Renderer for LinePrinter {
    fn render(&mut self, frame: PlaybackFrame<'_>) {
        let (primary, secondary) = frame.step.highlight().to_raw();
        println!(
            "{:>5}  {:?}  ({}, {}){}",
            frame.index,
            frame.step.snapshot(),
            primary,
            secondary,
            if frame.is_final { "  final" } else { "" }
        );
    }
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <ALGORITHM> <VALUES>", program_name);
    eprintln!("       {} [OPTIONS] <ALGORITHM> --file <PATH>", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --interval <MS>   Delay between frames (default: 300)");
    eprintln!("      --max-value <N>   Largest value for counting/radix/bucket sort");
    eprintln!("  -f, --file <PATH>     Read comma separated values from a text file");
    eprintln!("      --dump            Print every step instead of opening the UI");
    eprintln!("      --list            List the available algorithms");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} bubble \"5, 1, 4, 2, 8\"", program_name);
    eprintln!("  {} \"Heap Sort\" --file numbers.txt", program_name);
}

/// Play a sequence to the end without a UI, one line per frame
fn dump(sequence: StepSequence, interval: Duration) {
    let mut controller = PlaybackController::new(ManualTicker::new(), interval);
    controller.load(sequence);

    let mut printer = LinePrinter;
    if let Some(frame) = controller.current() {
        printer.render(frame);
    }
    controller.play();
    while controller.is_playing() {
        controller.tick(&mut printer);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let config = match Config::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    if config.mode == RunMode::List {
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            println!("{:>2}. {:<15} ({})", i + 1, algorithm.name(), algorithm.short_name());
        }
        return Ok(());
    }

    let values = match &config.source {
        InputSource::Inline(text) => input::parse(text).map_err(input::InputError::from),
        InputSource::File(path) => input::read_file(path),
    };
    let values = match values {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    };

    if config.mode == RunMode::Dump {
        match config.algorithm.record(&values, &config.limits) {
            Ok(sequence) => dump(sequence, config.tick_interval),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut app = App::new(values, config.limits, config.tick_interval);
    if let Err(e) = app.start(config.algorithm) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
