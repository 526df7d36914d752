use std::sync::Arc;

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use wordshift::{GameConfig, GameOutcome, GreedyBot, Session, TurnMachine, WordList};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <max_turns>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let max_turns: u32 = args[2].parse()?;

    let words = Arc::new(WordList::builtin());
    let config = GameConfig {
        max_turns,
        ..GameConfig::default()
    };
    let game = TurnMachine::new(config, words.clone())?;
    let mut session = Session::new(game, SmallRng::seed_from_u64(seed));
    session.seat_bot("player1", Arc::new(GreedyBot::new(words.clone())))?;
    session.seat_bot("player2", Arc::new(GreedyBot::new(words)))?;

    let outcome = session.run().await?;
    let game = session.game();

    let winner = match outcome {
        Some(GameOutcome::Winner(id)) => game
            .players()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone()),
        _ => None,
    };
    let moves = game.history().iter().filter(|r| !r.is_pass()).count();

    let result = json!({
        "player1": {"score": game.players()[0].score},
        "player2": {"score": game.players()[1].score},
        "turns": game.history().len(),
        "moves": moves,
        "final_word": game.current_word(),
        "winner": winner,
        "state": game.state(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
