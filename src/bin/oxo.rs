//! oxo CLI - play Tic-Tac-Toe against the engine in a terminal
//!
//! `oxo play` runs an interactive game against a chosen computer opponent;
//! `oxo demo` pits two computer opponents against each other and prints
//! the playout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use oxo::tictactoe::{Cell, TicTacToeState};
use oxo::{Agent, Game, GameState, MinimaxAgent, OptimisticAgent, Player, RandomAgent};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe with a minimax computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against a computer opponent
    Play(PlayArgs),

    /// Watch two computer opponents play each other
    Demo(DemoArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Side the computer plays
    #[arg(long, value_enum, default_value = "o")]
    bot: Side,

    /// Opponent strategy
    #[arg(long, value_enum, default_value = "minimax")]
    kind: BotKind,

    /// Search depth cutoff for the minimax opponent (default: unlimited)
    #[arg(long)]
    depth: Option<u32>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct DemoArgs {
    /// Strategy for X
    #[arg(long, value_enum, default_value = "minimax")]
    x: BotKind,

    /// Strategy for O
    #[arg(long, value_enum, default_value = "minimax")]
    o: BotKind,

    /// Seed for random strategies
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BotKind {
    /// Perfect play via minimax with alpha-beta pruning
    Minimax,
    /// Chases the fastest win, never blocks
    Optimistic,
    /// Uniformly random legal moves
    Random,
}

impl BotKind {
    fn build(
        self,
        player: Player,
        depth: Option<u32>,
        seed: Option<u64>,
    ) -> Box<dyn Agent<TicTacToeState>> {
        match self {
            BotKind::Minimax => match depth {
                Some(depth) => Box::new(MinimaxAgent::with_max_depth(player, depth)),
                None => Box::new(MinimaxAgent::new(player)),
            },
            BotKind::Optimistic => Box::new(OptimisticAgent::new(player)),
            BotKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::seeded(player, seed)),
                None => Box::new(RandomAgent::new(player)),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play(args),
        Commands::Demo(args) => demo(args),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let bot_player: Player = args.bot.into();
    let mut bot = args.kind.build(bot_player, args.depth, args.seed);
    let mut game = Game::new(TicTacToeState::new());

    println!("You are {}, the computer is {}.", bot_player.opponent(), bot_player);
    println!("{}", render(game.state()));

    while !game.is_over() {
        let action = if game.current_player() == bot_player {
            let action = bot.decide(&game)?;
            println!("Computer plays {action}.");
            action
        } else {
            prompt_move(&game)?
        };

        game.apply_move(action)?;
        println!("{}", render(game.state()));
    }

    match game.winner() {
        Some(winner) if winner == bot_player => println!("Computer ({winner}) wins!"),
        Some(winner) => println!("You ({winner}) win!"),
        None => println!("No winner. Draw!"),
    }

    Ok(())
}

fn demo(args: DemoArgs) -> Result<()> {
    let mut x = args.x.build(Player::X, None, args.seed);
    let mut o = args.o.build(Player::O, None, args.seed);
    let mut game = Game::new(TicTacToeState::new());

    println!("{}", render(game.state()));

    while !game.is_over() {
        let action = if game.current_player() == Player::X {
            x.decide(&game)?
        } else {
            o.decide(&game)?
        };
        println!("{} plays {action}.", game.current_player());
        game.apply_move(action)?;
        println!("{}", render(game.state()));
    }

    match game.winner() {
        Some(winner) => println!("Player {winner} wins!"),
        None => println!("No winner. Draw!"),
    }

    Ok(())
}

/// Ask the human for a move until they enter a legal one.
fn prompt_move(game: &Game<TicTacToeState>) -> Result<usize> {
    let actions = game.state().actions();

    loop {
        print!("Choose a move from {actions:?}: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("failed to read input")?;

        match line.trim().parse::<usize>() {
            Ok(action) if actions.contains(&action) => return Ok(action),
            Ok(action) => println!("Position {action} is not available."),
            Err(_) => println!("That isn't a number! Try again."),
        }
    }
}

/// Board with cell separators, empty cells shown as their index.
fn render(state: &TicTacToeState) -> String {
    let mut out = String::new();
    for row in 0..3 {
        out.push(' ');
        for col in 0..3 {
            let idx = row * 3 + col;
            let c = match state.cell(idx) {
                Cell::X => 'X',
                Cell::O => 'O',
                Cell::Empty => char::from_digit(idx as u32, 10).unwrap_or('?'),
            };
            out.push(c);
            if col < 2 {
                out.push_str(" | ");
            }
        }
        if row < 2 {
            out.push_str("\n-----------\n");
        }
    }
    out
}
