//! Interactive console blackjack.
//!
//! Usage: `blackjack [HUMANS] [COMPUTERS]`, both defaulting to 1.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Console, Game, GameOptions};

fn main() -> ExitCode {
    let options = match parse_options() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut console = Console::new(stdin, stdout);

    loop {
        if let Err(err) = play_round(options, &mut console) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }

        match console.prompt_new_round() {
            Ok(true) => println!("A new round starts:\n"),
            Ok(false) => {
                println!("Bye-bye!");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }
}

/// Plays one complete round on a freshly seeded game.
fn play_round<R: BufRead, W: Write>(
    options: GameOptions,
    console: &mut Console<R, W>,
) -> Result<(), Box<dyn Error>> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(options, seed)?;

    game.deal()?;
    console.show_table(&game)?;
    game.run_players_turn(console)?;
    game.run_dealer_turn(console)?;
    console.show_table(&game)?;

    let outcome = game.resolve_winners()?;
    console.announce_winners(&outcome)?;

    Ok(())
}

fn parse_options() -> Result<GameOptions, String> {
    let mut options = GameOptions::default();
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        options.humans = parse_count(&arg)?;
    }
    if let Some(arg) = args.next() {
        options.computers = parse_count(&arg)?;
    }
    if args.next().is_some() {
        return Err("usage: blackjack [HUMANS] [COMPUTERS]".to_string());
    }

    Ok(options)
}

fn parse_count(arg: &str) -> Result<usize, String> {
    arg.parse()
        .map_err(|_| format!("invalid player count: {arg}"))
}
