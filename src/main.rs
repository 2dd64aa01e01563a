//! Tilt Puzzle Solver
//!
//! Tilting the board slides every green and blue slider as far as it can
//! go. Green sliders must all be dropped into holes without losing a single
//! blue one. This binary solves boards with breadth-first or depth-first
//! search, gives hints, and offers a small text mode for playing by hand.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use tilt::persistence;
use tilt::session::{HintOutcome, Session, TiltOutcome};
use tilt::{search_bfs, search_dfs_visited, Board, Direction};

/// Solves and plays tilt sliding puzzles.
#[derive(Parser)]
#[command(name = "tilt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board and print every step.
    Solve {
        /// Board file to load.
        file: PathBuf,
        /// Search strategy to use.
        #[arg(short, long, value_enum, default_value_t = Strategy::Bfs)]
        strategy: Strategy,
        /// Also write the solution report to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the next board on a shortest solution.
    Hint {
        /// Board file to load.
        file: PathBuf,
    },
    /// Play a board interactively on the terminal.
    Play {
        /// Board file to load.
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Breadth-first: shortest solution plus search statistics.
    Bfs,
    /// Depth-first with a visited set: any solution.
    Dfs,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            file,
            strategy,
            output,
        } => run_solve(&file, strategy, output.as_deref()),
        Command::Hint { file } => run_hint(&file),
        Command::Play { file } => run_play(&file),
    }
}

/// Loads a board file, attaching the path to any error.
fn load_board(file: &Path) -> anyhow::Result<Board> {
    persistence::load(file).with_context(|| format!("failed to load {}", file.display()))
}

/// Solves a board and prints the result.
fn run_solve(file: &Path, strategy: Strategy, output: Option<&Path>) -> anyhow::Result<()> {
    if matches!(strategy, Strategy::Dfs) && output.is_some() {
        bail!("--output is only supported with the bfs strategy");
    }

    let board = load_board(file)?;
    println!("File: {}", file.display());
    print!("{}", board);

    match strategy {
        Strategy::Bfs => {
            let result = search_bfs(board);
            print!("{}", persistence::format_solution(&result));
            if let Some(output) = output {
                persistence::save_solution(output, &result)
                    .with_context(|| format!("failed to write {}", output.display()))?;
            }
        }
        Strategy::Dfs => match search_dfs_visited(board) {
            Some(goal) => {
                println!("Solution found:");
                print!("{}", goal);
            }
            None => println!("No solution!"),
        },
    }

    Ok(())
}

/// Prints the board one step closer to a solution.
fn run_hint(file: &Path) -> anyhow::Result<()> {
    let mut play = Session::new(load_board(file)?);
    println!("{}", hint_message(play.hint()));
    print!("{}", play.current());
    Ok(())
}

fn hint_message(outcome: HintOutcome) -> &'static str {
    match outcome {
        HintOutcome::NoSolution => "No solution!",
        HintOutcome::AlreadySolved => "Already solved!",
        HintOutcome::Advanced => "Next step!",
    }
}

fn tilt_message(outcome: TiltOutcome) -> &'static str {
    match outcome {
        TiltOutcome::Illegal => "Illegal move. A blue slider will fall through the hole!",
        TiltOutcome::Moved => "",
        TiltOutcome::Solved => "Congratulations!",
    }
}

const HELP: &str = "\
h(int)             -- advance one step toward a solution
l(oad) <filename>  -- load a new puzzle
t(ilt) <n|e|s|w>   -- tilt the board in a direction
q(uit)             -- quit the game
r(eset)            -- reset the current game";

/// Applies one play command and returns the message to show.
///
/// Returns `None` when the player quits.
fn handle_command(play: &mut Session, line: &str) -> Option<String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let message = match words.as_slice() {
        ["q" | "quit"] => return None,
        ["h" | "hint"] => hint_message(play.hint()).to_string(),
        ["r" | "reset"] => {
            play.reset();
            "Puzzle reset!".to_string()
        }
        ["t" | "tilt", direction] => match direction.parse::<Direction>() {
            Ok(direction) => tilt_message(play.tilt(direction)).to_string(),
            Err(e) => e.to_string(),
        },
        ["l" | "load", name] => match persistence::load(name) {
            Ok(board) => {
                play.load(board);
                format!("Loaded: {}", name)
            }
            Err(e) => format!("Failed to load {}: {}", name, e),
        },
        _ => HELP.to_string(),
    };

    Some(message)
}

/// Runs the text-mode game loop on stdin and stdout.
fn run_play(file: &Path) -> anyhow::Result<()> {
    let mut play = Session::new(load_board(file)?);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", play.current());
    println!("{}", HELP);

    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let Some(message) = handle_command(&mut play, &line) else {
            break;
        };

        if !message.is_empty() {
            println!("{}", message);
        }
        print!("{}", play.current());
        stdout.flush()?;
    }

    info!("leaving play mode");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilt::Configuration;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve_arguments() {
        let cli = Cli::parse_from(["tilt", "solve", "board.txt", "--strategy", "dfs"]);
        match cli.command {
            Command::Solve {
                file,
                strategy,
                output,
            } => {
                assert_eq!(file, PathBuf::from("board.txt"));
                assert!(matches!(strategy, Strategy::Dfs));
                assert!(output.is_none());
            }
            _ => panic!("expected the solve command"),
        }
    }

    #[test]
    fn test_solve_defaults_to_bfs() {
        let cli = Cli::parse_from(["tilt", "solve", "board.txt", "-o", "out.txt"]);
        match cli.command {
            Command::Solve {
                strategy, output, ..
            } => {
                assert!(matches!(strategy, Strategy::Bfs));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            _ => panic!("expected the solve command"),
        }
    }

    #[test]
    fn test_dfs_output_rejected_before_loading() {
        let err = run_solve(
            Path::new("no/such/board.txt"),
            Strategy::Dfs,
            Some(Path::new("out.txt")),
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("--output"),
            "argument error should win over the missing file: {err}"
        );
    }

    fn session(text: &str) -> Session {
        Session::new(text.parse().expect("valid board"))
    }

    #[test]
    fn test_play_quit() {
        let mut play = session("3\n. O .\n. G .\n. . .\n");
        assert_eq!(handle_command(&mut play, "q"), None);
        assert_eq!(handle_command(&mut play, "  quit "), None);
    }

    #[test]
    fn test_play_tilt_and_reset() {
        let mut play = session("3\n. O .\n. G .\n. . .\n");
        let start = play.current().clone();

        assert_eq!(handle_command(&mut play, "t s"), Some(String::new()));
        assert_ne!(play.current(), &start);

        assert_eq!(
            handle_command(&mut play, "r"),
            Some("Puzzle reset!".to_string())
        );
        assert_eq!(play.current(), &start);

        assert_eq!(
            handle_command(&mut play, "tilt NORTH"),
            Some("Congratulations!".to_string())
        );
    }

    #[test]
    fn test_play_rejects_bad_input() {
        let mut play = session("3\n. . .\nO . B\n. . G\n");
        let start = play.current().clone();

        assert_eq!(
            handle_command(&mut play, "t w"),
            Some("Illegal move. A blue slider will fall through the hole!".to_string())
        );
        let message = handle_command(&mut play, "t up").unwrap();
        assert!(message.contains("unknown direction"), "got {message:?}");
        assert_eq!(handle_command(&mut play, "dance"), Some(HELP.to_string()));
        assert_eq!(handle_command(&mut play, "t n s"), Some(HELP.to_string()));
        assert_eq!(play.current(), &start);
    }

    #[test]
    fn test_play_hint_and_load() {
        let mut play = session("3\n. O .\n. G .\n. . .\n");
        assert_eq!(handle_command(&mut play, "h"), Some("Next step!".to_string()));
        assert_eq!(
            handle_command(&mut play, "hint"),
            Some("Already solved!".to_string())
        );

        let message = handle_command(&mut play, "l no/such/board.txt").unwrap();
        assert!(message.starts_with("Failed to load no/such/board.txt"), "got {message:?}");
        assert!(play.current().is_goal(), "failed load must keep the board");

        let path = std::env::temp_dir().join(format!("tilt-play-{}.txt", std::process::id()));
        std::fs::write(&path, "2\nG O\n. .\n").unwrap();
        let command = format!("l {}", path.display());
        assert_eq!(
            handle_command(&mut play, &command),
            Some(format!("Loaded: {}", path.display()))
        );
        assert_eq!(play.current().green_count(), 1);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_solve_reports_missing_file() {
        let err = run_solve(Path::new("no/such/board.txt"), Strategy::Bfs, None).unwrap_err();
        assert!(err.to_string().contains("no/such/board.txt"));
    }
}
