use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use judge::{play_game, GameResult, MatchConfig, PlayerSpec, TracingObserver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sequence::TeamColor;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Players as <team>:<strategy>, e.g. "blue:weighted red:random"
    #[clap(num_args(0..), value_delimiter = ' ')]
    players: Vec<PlayerSpec>,

    /// Path to a match config JSON file, used instead of the player list
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Continue after the first team wins, until a player runs out of cards
    #[arg(short, long, default_value_t = false)]
    keep_playing: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: BTreeMap<TeamColor, usize>,
    shut_outs: usize,
    draws: usize,
    illegal_moves: BTreeMap<TeamColor, usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::from_specs(&args.players)?,
    };
    config.keep_playing |= args.keep_playing;

    let mut teams = config.build_teams(&mut rng);
    let mut observer = TracingObserver::new(config.keep_playing);
    let mut score = MatchScore::default();

    for game_idx in 0..args.num_games {
        match play_game(&mut rng, &mut teams, &mut observer)? {
            GameResult::WonByTeam {
                team,
                sequences,
                shut_out,
            } => {
                debug!(winner = %team, sequences, shut_out, game_idx);
                *score.wins.entry(team).or_default() += 1;
                if shut_out {
                    score.shut_outs += 1;
                }
            }
            GameResult::Draw => {
                debug!(game_idx, "Draw");
                score.draws += 1;
            }
            GameResult::IllegalMoveByPlayer { player, team, err } => {
                info!(%player, %team, game_idx, "Illegal move by player");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                *score.illegal_moves.entry(team).or_default() += 1;
            }
        }
    }

    let mut summary = String::from("End result:");
    for team in teams.iter().map(|team| team.color) {
        let wins = score.wins.get(&team).copied().unwrap_or(0);
        summary.push_str(&format!("\n- {} wins by {}", wins, team));
        if let Some(illegal) = score.illegal_moves.get(&team) {
            summary.push_str(&format!(" ({} games lost through illegal moves)", illegal));
        }
    }
    summary.push_str(&format!("\n- {} shut-outs\n- {} draws", score.shut_outs, score.draws));
    eprintln!("{}", summary);

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
