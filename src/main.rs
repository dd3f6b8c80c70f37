// Motor Minixadrez - partida entre duas estratégias no terminal
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env, Target};

use minichess::engine::{EngineSpec, GameSession, StepOutcome};
use minichess::*;

#[derive(Parser, Debug)]
#[command(name = "minichess", version, about = "Play a minichess game between two engines")]
struct Cli {
    /// Variante: 4x4, 4x5, 4x8, 5x5, 5x6 ou 6x6
    #[arg(long, default_value = "4x5")]
    variant: Variant,

    /// Estratégia das brancas: random, greedy, minimax ou minimax:<depth>
    #[arg(long, default_value = "greedy")]
    white: EngineSpec,

    /// Estratégia das pretas
    #[arg(long, default_value = "minimax:3")]
    black: EngineSpec,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Pausa entre lances, em milissegundos
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Limite de meios-lances (a partida fica por decidir)
    #[arg(long)]
    max_plies: Option<usize>,

    /// Posição inicial em FEN compacto (substitui a posição da variante)
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let cli = Cli::parse();

    let board = match &cli.fen {
        Some(fen) => Board::from_fen(fen).with_context(|| format!("cannot load position '{}'", fen))?,
        None => Board::new(cli.variant),
    };
    let white = cli.white.build(cli.seed)?;
    let black = cli.black.build(cli.seed.wrapping_add(1))?;

    println!("=== {} : {} (white) vs {} (black) ===", board.config().name(), cli.white, cli.black);
    println!("{}\n", board);

    let mut session = GameSession::new(board, white, black);
    if let Some(limit) = cli.max_plies {
        session = session.with_max_plies(limit);
    }

    let result = loop {
        match session.step()? {
            StepOutcome::Played(mv) => {
                let board = session.board();
                // O lance foi jogado pelo lado que já não está a jogar
                let side = !board.to_move();
                let number = if side == Color::White { board.fullmove_number() } else { board.fullmove_number() - 1 };
                println!("{}. {} {}", number, side.name(), mv);
                if cli.delay_ms > 0 {
                    thread::sleep(Duration::from_millis(cli.delay_ms));
                }
            }
            StepOutcome::Finished(result) => break result,
        }
    };

    let board = session.board();
    println!("\n{}\n", board);
    let message = match board.status() {
        GameStatus::Checkmate => format!("Checkmate, {} wins", (!board.to_move()).name()),
        GameStatus::Stalemate => "Stalemate".to_string(),
        GameStatus::DrawByClock => format!("Draw by the {}-halfmove rule", DRAW_HALFMOVE_THRESHOLD),
        GameStatus::Ongoing => format!("Stopped after {} plies", session.plies()),
    };
    println!("{} ({})", message, result);
    println!("Moves: {}", board.move_log());
    Ok(())
}
