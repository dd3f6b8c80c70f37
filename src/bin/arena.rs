// Torneio entre duas estratégias de minixadrez
use clap::Parser;
use env_logger::{Builder, Env, Target};

use minichess::engine::{Arena, EngineSpec, MatchConfig};
use minichess::Variant;

#[derive(Parser, Debug)]
#[command(name = "minichess_arena", version, about = "Run a parallel match between two minichess engines")]
struct Cli {
    #[arg(long, default_value = "4x5")]
    variant: Variant,

    /// Primeiro motor (brancas na primeira partida)
    #[arg(long, default_value = "greedy")]
    white: EngineSpec,

    /// Segundo motor
    #[arg(long, default_value = "minimax:2")]
    black: EngineSpec,

    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Threads da pool (por omissão, o número de CPUs)
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Alterna as cores a cada partida
    #[arg(long)]
    swap_colors: bool,

    #[arg(long, default_value_t = 200)]
    max_plies: usize,
}

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let cli = Cli::parse();
    let defaults = MatchConfig::default();
    let config = MatchConfig {
        variant: cli.variant,
        first: cli.white,
        second: cli.black,
        games: cli.games,
        threads: cli.threads.unwrap_or(defaults.threads),
        seed: cli.seed,
        swap_colors: cli.swap_colors,
        max_plies: Some(cli.max_plies),
    };

    let report = Arena::run(&config)?;

    println!("=== {} vs {} on {} ===", report.first, report.second, config.variant);
    for game in &report.games {
        println!(
            "#{:<3} {:<5} {:<7} {:>4} plies  {}",
            game.index + 1,
            game.first_color.name(),
            game.result.as_str(),
            game.plies,
            game.final_fen
        );
    }
    println!();
    println!("{:<12} {}", report.first.to_string(), report.first_wins);
    println!("{:<12} {}", report.second.to_string(), report.second_wins);
    println!("{:<12} {}", "draws", report.draws);
    println!("{:<12} {}", "unfinished", report.unfinished);
    println!("{:<12} {:.1}", "avg plies", report.average_plies());
    println!("{:<12} {:.1}/{}", "score", report.first_score(), report.games_played());
    Ok(())
}
