//! Toroidal Life CLI - Run a Game of Life session in the terminal.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use toroidal_life::{
    Board, ChangeSet, LifeConfig, Pattern, Renderer, Seed, Session,
    session::parse_cycles,
};

/// Prints the board after every change and paces runs with a fixed delay.
struct TerminalRenderer {
    frame_delay: Duration,
    repaints: u64,
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, board: &Board) {
        println!("Initial board ({} live):", board.population());
        print!("{board}");
        println!();
    }

    fn repaint(&mut self, board: &Board, changes: &ChangeSet) {
        self.repaints += 1;
        println!(
            "Update {}: {} live, {} cells changed",
            self.repaints,
            board.population(),
            changes.len()
        );
        print!("{board}");
        println!();
    }

    fn tick(&mut self) {
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
    }
}

struct Args {
    config: Option<PathBuf>,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    pattern: Option<Pattern>,
    cycles: Option<String>,
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {program} [--config FILE] [--load FILE] [--save FILE] [--pattern NAME] [cycles]"
    );
    eprintln!();
    eprintln!("Run Conway's Game of Life on a wrapping board.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  --config FILE   JSON configuration (board size, frame delay, cycle limits)");
    eprintln!("  --load FILE     Start from a saved board instead of a pattern");
    eprintln!("  --save FILE     Write the final board when the run finishes");
    eprintln!("  --pattern NAME  random (default), empty, block, blinker or glider");
    eprintln!("  cycles          Generations to run (default from config)");
    eprintln!();
    eprintln!("Print the default configuration with --example.");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args {
        config: None,
        load: None,
        save: None,
        pattern: None,
        cycles: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .unwrap_or_else(|| fail(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value("--config"))),
            "--load" => parsed.load = Some(PathBuf::from(value("--load"))),
            "--save" => parsed.save = Some(PathBuf::from(value("--save"))),
            "--pattern" => {
                let name = value("--pattern");
                let pattern = Pattern::from_name(&name)
                    .unwrap_or_else(|| fail(format!("unknown pattern {name:?}")));
                parsed.pattern = Some(pattern);
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                print_usage(&args[0]);
                fail(format!("unknown option {other}"));
            }
            other => parsed.cycles = Some(other.to_string()),
        }
    }

    parsed
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    let args = parse_args(&args);

    let config = match &args.config {
        Some(path) => LifeConfig::load(path).unwrap_or_else(|e| fail(e)),
        None => LifeConfig::default(),
    };

    let cycles = match &args.cycles {
        Some(text) => parse_cycles(text, config.max_cycles).unwrap_or_else(|e| fail(e)),
        None => config.default_cycles,
    };

    let renderer = TerminalRenderer {
        frame_delay: config.frame_delay(),
        repaints: 0,
    };

    let seed = Seed::new(args.pattern.unwrap_or_default());
    let mut session = Session::new(config, &seed, renderer).unwrap_or_else(|e| fail(e));

    if let Some(path) = &args.load {
        session.load(path).unwrap_or_else(|e| fail(e));
    }

    let start = Instant::now();
    let summary = session.run(cycles);
    let elapsed = start.elapsed();

    println!(
        "Ran {} generations in {:.2}s, {} live cells remain",
        summary.generations,
        elapsed.as_secs_f32(),
        summary.population
    );

    if let Some(path) = &args.save {
        session.save(path).unwrap_or_else(|e| fail(e));
        println!("Saved board to {}", path.display());
    }
}

fn print_example_config() {
    let config = LifeConfig::default();
    let json = serde_json::to_string_pretty(&config).unwrap_or_else(|e| fail(e));

    println!("Example configuration (config.json):");
    println!("{json}");
}
