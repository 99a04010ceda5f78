use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use connect_four_ai::ai::{Agent, PlayerKind};
use connect_four_ai::config::AppConfig;
use connect_four_ai::game::{Colour, GameOutcome, GameState, SessionHistory};

/// Play Connect Four against the computer, or watch computers play.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against heuristic AIs")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override number of games in the session
    #[arg(long)]
    games: Option<usize>,

    /// Override the Black player: human, random, easy, medium or max
    #[arg(long)]
    black: Option<PlayerKind>,

    /// Override the White player: human, random, easy, medium or max
    #[arg(long)]
    white: Option<PlayerKind>,

    /// Seed for computer players and the starter draw
    #[arg(long)]
    seed: Option<u64>,

    /// Trace engine reasoning at debug level
    #[arg(long)]
    debug: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// A seat at the table: a human reading from stdin or a computer agent.
enum Seat {
    Human,
    Computer(Box<dyn Agent>),
}

impl Seat {
    fn build(kind: PlayerKind, app: &AppConfig, seed: Option<u64>) -> Self {
        match kind {
            PlayerKind::Human => Seat::Human,
            PlayerKind::Computer(difficulty) => {
                Seat::Computer(difficulty.build_agent(&app.engine, seed))
            }
        }
    }

    fn label(&self) -> &str {
        match self {
            Seat::Human => "Human",
            Seat::Computer(agent) => agent.name(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // engine traces only appear when `engine.debug` is set
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .filter_module("connect_four_ai", log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.session.games = games;
    }
    if let Some(black) = cli.black {
        app_config.session.black = black;
    }
    if let Some(white) = cli.white {
        app_config.session.white = white;
    }
    if cli.seed.is_some() {
        app_config.session.seed = cli.seed;
    }
    if cli.debug {
        app_config.engine.debug = true;
    }
    app_config.validate().context("validating configuration")?;

    let session = &app_config.session;
    let mut black = Seat::build(session.black, &app_config, session.seed);
    let mut white = Seat::build(
        session.white,
        &app_config,
        session.seed.map(|s| s.wrapping_add(1)),
    );
    let mut starter_rng = match session.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(2)),
        None => StdRng::from_os_rng(),
    };

    log::info!(
        "{} (Black) vs {} (White), {} game(s) on {}x{}",
        black.label(),
        white.label(),
        session.games,
        app_config.board.rows,
        app_config.board.columns
    );

    let mut game = GameState::new(app_config.board.build()?, Colour::Black);
    let mut history = SessionHistory::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    for number in 1..=session.games {
        let starter = if session.random_starter && starter_rng.random_bool(0.5) {
            Colour::White
        } else {
            Colour::Black
        };
        game.reset(starter);
        println!("\nGame {number}: {starter} starts\n{}", game.board());

        let outcome = play_game(&mut game, &mut black, &mut white, &mut input)?;
        match outcome {
            GameOutcome::Winner(colour) => println!("{colour} wins!"),
            GameOutcome::Draw => println!("Draw."),
        }
        history.record(outcome);
    }

    println!(
        "\nAfter {} game(s): Black {} | White {} | Draws {}",
        history.games(),
        history.wins(Colour::Black),
        history.wins(Colour::White),
        history.draws()
    );
    Ok(())
}

fn play_game(
    game: &mut GameState,
    black: &mut Seat,
    white: &mut Seat,
    input: &mut impl BufRead,
) -> Result<GameOutcome> {
    loop {
        if let Some(outcome) = game.outcome() {
            return Ok(outcome);
        }
        let colour = game.current_colour();
        let seat = match colour {
            Colour::Black => &mut *black,
            Colour::White => &mut *white,
        };
        match seat {
            Seat::Computer(agent) => {
                let column = agent
                    .choose_column(game.board(), colour)
                    .with_context(|| format!("{} choosing for {colour}", agent.name()))?;
                game.apply_move(column)
                    .with_context(|| format!("{} played column {column}", agent.name()))?;
                println!("{colour} ({}) plays {}", agent.name(), column + 1);
            }
            Seat::Human => human_turn(game, colour, &mut *input)?,
        }
        println!("{}", game.board());
    }
}

/// Prompt until the human enters a playable 1-based column.
fn human_turn(game: &mut GameState, colour: Colour, input: &mut impl BufRead) -> Result<()> {
    let columns = game.board().columns();
    loop {
        print!("{colour}, choose a column (1-{columns}): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        let column = match line.trim().parse::<usize>() {
            Ok(n) if (1..=columns).contains(&n) => n - 1,
            _ => {
                println!("Enter a number between 1 and {columns}.");
                continue;
            }
        };
        match game.apply_move(column) {
            Ok(()) => return Ok(()),
            Err(e) => println!("{e}, try another column."),
        }
    }
}
