use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use triadsolver::rng::{random_move, rng_for_game};
use triadsolver::{
    load_cards_from_json, margin, state_fingerprint, CardsDb, GameState, Player, Solver,
    SolverConfig, Suggestion,
};

#[derive(Debug, Parser)]
#[command(name = "triad", about = "Triple Triad solver")]
struct Cli {
    /// Log search statistics (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a move list and suggest the next move
    Solve {
        #[command(flatten)]
        game: GameArgs,

        /// Moves already played: "1:Name@r,c;2:Name@r,c;..."
        #[arg(long, default_value = "")]
        moves: String,
    },
    /// Play the game out with the solver and print every ply
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Opening moves to replay before the solver takes over
        #[arg(long, default_value = "")]
        moves: String,

        /// Player 2 picks uniformly random moves instead of solving
        #[arg(long)]
        random_p2: bool,

        /// Seed for the random opponent (deterministic)
        #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
        seed: u64,
    },
}

#[derive(Debug, Args)]
struct GameArgs {
    /// Cards JSON path (results/stats/numeric schema)
    #[arg(long, default_value = "data/cards.json")]
    cards: PathBuf,

    /// Player 1 deck: comma-separated card names
    #[arg(long)]
    p1: String,

    /// Player 2 deck: comma-separated card names
    #[arg(long)]
    p2: String,

    /// Player 2 moves first
    #[arg(long)]
    second: bool,

    /// Split the root search across threads
    #[arg(long)]
    parallel: bool,

    /// Disable memoization
    #[arg(long)]
    no_memo: bool,
}

impl GameArgs {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            memoize: !self.no_memo,
            parallel: self.parallel,
            ..SolverConfig::default()
        }
    }

    fn new_game(&self, cards: &CardsDb) -> Result<GameState, Box<dyn std::error::Error>> {
        let deck_one = cards.deck(split_names(&self.p1).as_slice())?;
        let deck_two = cards.deck(split_names(&self.p2).as_slice())?;
        let first = if self.second { Player::Two } else { Player::One };
        Ok(GameState::new(deck_one, deck_two, first)?)
    }
}

fn split_names(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Parse one "P:Name@r,c" token.
fn parse_move(tok: &str) -> Result<(Player, String, u8, u8), String> {
    let (who, rest) = tok
        .split_once(':')
        .ok_or_else(|| format!("Invalid move '{tok}', expected P:Name@r,c"))?;
    let (name, pos) = rest
        .rsplit_once('@')
        .ok_or_else(|| format!("Invalid move '{tok}', missing @r,c"))?;
    let (r, c) = pos
        .split_once(',')
        .ok_or_else(|| format!("Invalid position in '{tok}', expected r,c"))?;
    let n: u8 = who
        .trim()
        .parse()
        .map_err(|e| format!("Invalid player in '{tok}': {e}"))?;
    let player = Player::try_from(n).map_err(|e| e.to_string())?;
    let row = r.trim().parse().map_err(|e| format!("Invalid row in '{tok}': {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("Invalid col in '{tok}': {e}"))?;
    Ok((player, name.trim().to_string(), row, col))
}

fn print_board(state: &GameState) {
    println!("Board (owner name U/R/D/L):");
    for r in 0..3u8 {
        let row: Vec<String> = (0..3u8)
            .map(|c| match state.board.at(r, c) {
                Some(card) => {
                    let owner = card.owner.map_or_else(|| "--".to_string(), |p| p.to_string());
                    format!(
                        "{owner} {:<12.12} {}/{}/{}/{}",
                        card.name, card.up, card.right, card.down, card.left
                    )
                }
                None => format!("{:<28}", " ."),
            })
            .collect();
        println!("  {}", row.join(" | "));
    }
    for p in [Player::One, Player::Two] {
        println!("  {p} hand: {}", state.card_names(p).join(", "));
    }
}

fn print_outcome(state: &GameState) {
    match margin(state) {
        Some(m) if m > 0 => println!("Game over: P1 wins by {m}"),
        Some(m) if m < 0 => println!("Game over: P2 wins by {}", -m),
        Some(_) => println!("Game over: draw"),
        None => println!("Game over"),
    }
}

/// Load cards, build the game and replay `moves` through `play_card`.
fn replay(game: &GameArgs, moves: &str) -> Result<GameState, Box<dyn std::error::Error>> {
    let cards = load_cards_from_json(&game.cards)?;
    info!(cards = cards.len(), max_id = cards.max_id(), "cards loaded");
    let mut state = game.new_game(&cards)?;

    for tok in moves.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        let (player, name, row, col) = parse_move(tok)?;
        state.play_card(player, &name, row, col)?;
    }
    Ok(state)
}

fn run_solve(game: &GameArgs, moves: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = replay(game, moves)?;
    print_board(&state);
    debug!(state = %format!("{:032x}", state_fingerprint(&state)), "replayed");

    if state.is_terminal() {
        print_outcome(&state);
        return Ok(());
    }

    let player = state.to_act();
    let mut solver = Solver::new(game.solver_config());
    let res = solver.search(&state, player)?;
    match res.best_move.and_then(|mv| Suggestion::for_move(&state, &mv)) {
        Some(s) => println!(
            "Suggest: {player} plays '{}' at ({},{}) value={}",
            s.card_name, s.row, s.col, res.value
        ),
        None => println!("No move to suggest"),
    }
    Ok(())
}

fn run_play(
    game: &GameArgs,
    moves: &str,
    random_p2: bool,
    seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = replay(game, moves)?;
    let mut solver = Solver::new(game.solver_config());
    let mut rng = rng_for_game(seed, 0);

    while !state.is_terminal() {
        let player = state.to_act();
        let (name, row, col) = if random_p2 && player == Player::Two {
            let Some(mv) = random_move(&state, player, &mut rng) else { break };
            let Some(s) = Suggestion::for_move(&state, &mv) else { break };
            (s.card_name, s.row, s.col)
        } else {
            let Some(s) = solver.solve(&state, player)? else { break };
            (s.card_name, s.row, s.col)
        };
        println!("Turn {}: {player} plays '{name}' at ({row},{col})", state.moves.len() + 1);
        state.play_card(player, &name, row, col)?;
        print_board(&state);
    }
    print_outcome(&state);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Solve { game, moves } => run_solve(game, moves),
        Command::Play {
            game,
            moves,
            random_p2,
            seed,
        } => run_play(game, moves, *random_p2, *seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_tokens() {
        let (p, name, r, c) = parse_move("2:Biggs & Wedge@1,2").unwrap();
        assert_eq!(p, Player::Two);
        assert_eq!(name, "Biggs & Wedge");
        assert_eq!((r, c), (1, 2));
        assert!(parse_move("3:Dodo@0,0").is_err());
        assert!(parse_move("1:Dodo").is_err());
    }
}
