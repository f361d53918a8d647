//! Headless match-3 simulation driver (default binary).
//!
//! Generates a match-free board, then repeatedly picks a random legal swap
//! and drives the resolver until the board settles, feeding the event
//! stream into a game session. Events are printed as JSON lines so the run
//! can be inspected or replayed by other tooling.

use anyhow::{anyhow, Result};

use tile_crush::core::{
    generate_board, would_create_match, GameSession, SessionConfig, SimpleRng, TileGenerator,
    TurnResolver,
};
use tile_crush::types::{BoardConfig, GamePhase};

#[derive(Debug, Clone)]
struct SimulateConfig {
    seed: u32,
    board: BoardConfig,
    session: SessionConfig,
    quiet: bool,
}

fn parse_args(args: &[String]) -> Result<SimulateConfig> {
    let mut config = SimulateConfig {
        seed: 1,
        board: BoardConfig::default(),
        session: SessionConfig::default(),
        quiet: false,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = parse_value(args.get(i), "--seed")?;
            }
            "--width" => {
                i += 1;
                config.board.width = parse_value(args.get(i), "--width")?;
            }
            "--height" => {
                i += 1;
                config.board.height = parse_value(args.get(i), "--height")?;
            }
            "--types" => {
                i += 1;
                config.board.tile_types = parse_value(args.get(i), "--types")?;
            }
            "--moves" => {
                i += 1;
                config.session.move_limit = parse_value(args.get(i), "--moves")?;
            }
            "--target" => {
                i += 1;
                config.session.target_score = parse_value(args.get(i), "--target")?;
            }
            "--quiet" => {
                config.quiet = true;
            }
            other => {
                return Err(anyhow!("simulate: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    if config.board.width < 3 && config.board.height < 3 {
        return Err(anyhow!("simulate: board must be at least 3 wide or 3 tall"));
    }
    if config.board.tile_types < 2 {
        return Err(anyhow!("simulate: need at least 2 tile types"));
    }
    Ok(config)
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let value = value.ok_or_else(|| anyhow!("simulate: missing value for {}", flag))?;
    value
        .parse::<T>()
        .map_err(|_| anyhow!("simulate: invalid value for {}: {}", flag, value))
}

/// Every adjacent pair whose swap would produce a match. Probes a scratch
/// copy of the grid; the live board is untouched.
fn legal_swaps(resolver: &TurnResolver) -> Vec<((u8, u8), (u8, u8))> {
    let mut probe = resolver.grid().clone();
    let mut swaps = Vec::new();
    for col in 0..probe.width() {
        for row in 0..probe.height() {
            if col + 1 < probe.width()
                && would_create_match(&mut probe, (col, row), (col + 1, row)).unwrap_or(false)
            {
                swaps.push(((col, row), (col + 1, row)));
            }
            if row + 1 < probe.height()
                && would_create_match(&mut probe, (col, row), (col, row + 1)).unwrap_or(false)
            {
                swaps.push(((col, row), (col, row + 1)));
            }
        }
    }
    swaps
}

fn run(config: &SimulateConfig) -> Result<()> {
    let mut generator = TileGenerator::new(config.seed, config.board.tile_types);
    let grid = generate_board(&config.board, &mut generator);
    let mut resolver = TurnResolver::new(grid, generator);
    let mut session = GameSession::new(config.session);
    // Separate stream so move choice never perturbs the refill sequence.
    let mut chooser = SimpleRng::new(config.seed.wrapping_add(1));

    while !session.is_over() {
        let swaps = legal_swaps(&resolver);
        if swaps.is_empty() {
            // Dead board: no swap anywhere can produce a match. The engine
            // treats this as terminal; the driver reshuffles.
            if !config.quiet {
                println!("{}", serde_json::json!({ "event": "board_reshuffled" }));
            }
            let mut fresh = TileGenerator::new(chooser.next_u32(), config.board.tile_types);
            let grid = generate_board(&config.board, &mut fresh);
            resolver = TurnResolver::new(grid, fresh);
            continue;
        }

        let (a, b) = swaps[chooser.next_range(swaps.len() as u32) as usize];
        resolver.select_tile(a.0, a.1)?;
        resolver.select_tile(b.0, b.1)?;
        resolver.run_until_idle();

        let events = resolver.take_events();
        for event in &events {
            if !config.quiet {
                println!("{}", serde_json::to_string(event)?);
            }
        }
        session.apply_all(&events);
    }

    let outcome = match session.phase() {
        GamePhase::Won => "won",
        GamePhase::Lost => "lost",
        GamePhase::Playing => "playing",
    };
    println!(
        "{}",
        serde_json::json!({
            "event": "session_over",
            "outcome": outcome,
            "score": session.score(),
            "moves_remaining": session.moves_remaining(),
            "seed": config.seed,
        })
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    run(&config)
}
