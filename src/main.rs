//! Terminal interface for two players sharing one board.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use royal_engine::GameEvent;

mod command;
mod session;

use command::{Command, HELP};
use session::Session;

#[derive(Parser, Debug)]
#[command(name = "royal", version, about = "Two-player chess at one terminal")]
struct Args {
    /// Resume the game stored in this snapshot file.
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Save the game here after every move. Removed when the game ends.
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Identifier for this session. Random if not given.
    #[arg(long)]
    game_id: Option<String>,

    /// Log filter used when RUST_LOG is unset, e.g. "info" or "royal_engine=debug".
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let game_id = args.game_id.unwrap_or_else(session::new_game_id);
    let mut session = match &args.load {
        Some(path) => Session::load(path, game_id, args.save).map_err(|err| {
            error!(%err, path = %path.display(), "could not load game");
            err
        })?,
        None => Session::new(game_id, args.save),
    };

    println!("Royal {} game {}\n", env!("CARGO_PKG_VERSION"), session.game_id());
    println!("{HELP}\n");

    let mut input = String::new();
    loop {
        println!("{}", session.game());
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match Command::from(input.as_str()) {
            Command::Exit => break,
            Command::Newgame => {
                session.new_game();
                println!("Starting new game...");
            }
            Command::Help => println!("{HELP}"),
            Command::Board => println!("{}", session.game().board()),
            Command::Captured => {
                let captured = session.game().captured_pieces();
                if captured.is_empty() {
                    println!("No captures yet.");
                } else {
                    let names: Vec<String> = captured.iter().map(|p| p.to_string()).collect();
                    println!("Captured: {}", names.join(" "));
                }
            }
            Command::History => {
                for (ply, info) in session.game().move_history().iter().enumerate() {
                    println!("{:>3}. {} {}", ply / 2 + 1, info.piece().color().name(), info);
                }
            }
            Command::Score => println!("{}", session.score()),
            Command::Save => match session.save() {
                Ok(true) => println!("Game saved."),
                Ok(false) => println!("No save file, start with --save <FILE>."),
                Err(err) => println!("Could not save game: {err}"),
            },
            Command::Moves(square) => {
                let moves = session.moves(square);
                if moves.is_empty() {
                    println!("No moves from {square}.");
                } else {
                    let targets: Vec<String> = moves.iter().map(|sq| sq.to_string()).collect();
                    println!("{square}: {}", targets.join(" "));
                }
            }
            Command::GameMove(move_) => match session.play(move_.from(), move_.to()) {
                Ok(events) => {
                    for event in &events {
                        println!("{event}");
                    }
                    if events.iter().any(|e| matches!(e, GameEvent::Checkmate { .. })) {
                        println!("Score: {}", session.score());
                        println!("Starting new game...");
                    }
                }
                Err(rejection) => println!("{rejection}. No action taken."),
            },
            Command::Error(text) => println!("Invalid command: {text}"),
        }
    }
    Ok(())
}
