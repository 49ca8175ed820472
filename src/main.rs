use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use chess_rules_engine::encoding::position_tensor::{encode, PLANE_COUNT};
use chess_rules_engine::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules_engine::move_generation::legal_move_generator::{game_status, legal_moves};
use chess_rules_engine::move_generation::legal_move_mask::enumerate;
use chess_rules_engine::move_generation::perft::perft_multi_threaded;
use chess_rules_engine::utils::long_algebraic::{format_long_algebraic, parse_long_algebraic};
use chess_rules_engine::utils::random_playout::random_playout;
use chess_rules_engine::GameState;

/// Inspect positions with the chess rules engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position as FEN
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Moves in long algebraic notation, applied in order (e.g. e2e4 e7e5)
    #[arg(long, num_args = 1.., value_delimiter = ' ')]
    moves: Vec<String>,

    /// Play this many random legal plies after the listed moves
    #[arg(long, default_value_t = 0)]
    random_plies: usize,

    /// Seed for the random playout
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the set entries of the legality mask
    #[arg(long)]
    mask: bool,

    /// Print per-plane sums of the position tensor
    #[arg(long)]
    tensor: bool,

    /// Run perft to this depth from the final position
    #[arg(long)]
    perft: Option<u8>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut game = GameState::from_fen(&args.fen)
        .with_context(|| format!("could not load position '{}'", args.fen))?;

    for text in args.moves.iter().filter(|text| !text.is_empty()) {
        let mv = parse_long_algebraic(text)?;
        if let Err(err) = game.make_move(mv) {
            bail!("move {text} rejected: {err}");
        }
    }

    if args.random_plies > 0 {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let played = random_playout(&mut game, args.random_plies, &mut rng);
        let line: Vec<String> = played.into_iter().filter_map(format_long_algebraic).collect();
        info!("random playout (seed {}): {}", args.seed, line.join(" "));
    }

    println!("{game}");
    println!("fen: {}", game.get_fen());
    println!("status: {:?}", game_status(&game));

    let moves: Vec<String> = legal_moves(&game)
        .into_iter()
        .filter_map(format_long_algebraic)
        .collect();
    println!("legal moves ({}): {}", moves.len(), moves.join(" "));

    if args.mask {
        let mask = enumerate(&game);
        let entries: Vec<String> = mask.iter_set().map(|index| index.to_string()).collect();
        println!("mask entries ({}): {}", mask.count(), entries.join(" "));
    }

    if args.tensor {
        let tensor = encode(&game);
        for (index, plane) in tensor.planes.iter().enumerate() {
            let sum: f32 = plane.iter().flatten().sum();
            println!("plane {index:2}/{PLANE_COUNT}: {sum}");
        }
    }

    if let Some(depth) = args.perft {
        let counts = perft_multi_threaded(&game, depth);
        println!("perft({depth}): {counts:?}");
    }

    Ok(())
}
