use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::Duration;
use wordshift::{
    init_logging, load_from_file, print_history, print_outcome, save_to_file, CliPlayer,
    GameConfig, GreedyBot, Session, TurnMachine, WordList, DEFAULT_KEY_LETTER_COUNT,
    DEFAULT_MAX_TURNS, DEFAULT_START_WORD_LEN,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,
    #[arg(long, default_value_t = DEFAULT_START_WORD_LEN)]
    start_len: usize,
    #[arg(long, default_value_t = DEFAULT_KEY_LETTER_COUNT)]
    key_letters: usize,
    #[arg(long, help = "Do not draw new key letters after they are used")]
    no_replenish: bool,
    #[arg(long, help = "Word list with one word per line (defaults to the bundled list)")]
    dict: Option<PathBuf>,
    #[arg(long, default_value_t = 2000, help = "Bot search deadline in milliseconds")]
    deadline_ms: u64,
    #[arg(long, help = "Write the final game state to this file")]
    save: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against bots in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value = "You")]
        name: String,
        #[arg(long, default_value_t = 1)]
        bots: u8,
    },
    /// Watch bots play each other.
    Auto {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = 2)]
        bots: u8,
    },
    /// Print the history and result of a saved game.
    Replay {
        path: PathBuf,
        #[arg(long, help = "Word list the game was played with")]
        dict: Option<PathBuf>,
    },
}

fn load_words(path: Option<&PathBuf>) -> anyhow::Result<WordList> {
    let words = match path {
        Some(path) => WordList::from_reader(BufReader::new(File::open(path)?))?,
        None => WordList::builtin(),
    };
    if words.is_empty() {
        anyhow::bail!("word list is empty");
    }
    Ok(words)
}

fn build_session(args: &GameArgs) -> anyhow::Result<(Session, Arc<WordList>)> {
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = args.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let config = GameConfig {
        max_turns: args.max_turns,
        start_word_len: args.start_len,
        key_letter_count: args.key_letters,
        replenish_key_letters: !args.no_replenish,
    };
    let words = Arc::new(load_words(args.dict.as_ref())?);
    let game = TurnMachine::new(config, words.clone())?;
    let session =
        Session::new(game, rng).with_bot_deadline(Duration::from_millis(args.deadline_ms));
    Ok((session, words))
}

fn replay(path: &Path, dict: Option<&PathBuf>) -> anyhow::Result<()> {
    let state = load_from_file(path)?;
    let words = Arc::new(load_words(dict)?);
    let game = TurnMachine::from_state(state, words)?;
    println!("Saved game ending on {}", game.current_word());
    print_history(&game);
    print_outcome(&game);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    let (mut session, words, save) = match &cli.command {
        Commands::Play { game, name, bots } => {
            let (mut session, words) = build_session(game)?;
            session.seat_human(name, Box::new(CliPlayer::new()))?;
            for i in 0..*bots {
                session.seat_bot(&format!("Bot {}", i + 1), Arc::new(GreedyBot::new(words.clone())))?;
            }
            println!("Type a word to play it, or /help for commands.");
            (session, words, game.save.clone())
        }
        Commands::Auto { game, bots } => {
            let (mut session, words) = build_session(game)?;
            for i in 0..(*bots).max(1) {
                session.seat_bot(&format!("Bot {}", i + 1), Arc::new(GreedyBot::new(words.clone())))?;
            }
            (session, words, game.save.clone())
        }
        Commands::Replay { path, dict } => return replay(path, dict.as_ref()),
    };
    log::info!("loaded {} words", words.len());

    match session.run().await {
        Ok(None) => println!("Game abandoned."),
        Ok(Some(_)) => {}
        Err(e) => eprintln!("Game ended with an error: {}", e),
    }
    let game = session.game();
    if matches!(cli.command, Commands::Auto { .. }) {
        print_history(game);
    }
    print_outcome(game);
    if let Some(path) = save {
        save_to_file(game.state(), &path)?;
        println!("Saved game to {}", path.display());
    }
    Ok(())
}
