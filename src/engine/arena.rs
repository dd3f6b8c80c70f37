// Ficheiro: src/engine/arena.rs
// Descrição: Torneio entre duas estratégias, com as partidas distribuídas por uma pool rayon.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::{EngineError, EngineSpec, GameSession};
use crate::core::*;

/// Configuração de um torneio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub variant: Variant,
    pub first: EngineSpec,
    pub second: EngineSpec,
    pub games: usize,
    pub threads: usize,
    pub seed: u64,
    /// Alterna as cores a cada partida (o primeiro motor joga de brancas nas partidas pares).
    pub swap_colors: bool,
    pub max_plies: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            variant: Variant::Silverman4x5,
            first: EngineSpec::Greedy,
            second: EngineSpec::Minimax { depth: 2 },
            games: 10,
            threads: num_cpus::get().max(1),
            seed: 0,
            swap_colors: true,
            max_plies: Some(200),
        }
    }
}

/// Resumo de uma partida do torneio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub index: usize,
    /// Cor do primeiro motor nesta partida.
    pub first_color: Color,
    pub result: GameResult,
    pub plies: usize,
    pub final_fen: String,
    pub move_log: String,
    pub substitutions: usize,
}

impl GameSummary {
    /// `Some(true)` se o primeiro motor ganhou, `Some(false)` se perdeu, `None` sem vencedor.
    pub fn first_won(&self) -> Option<bool> {
        self.result.winner().map(|color| color == self.first_color)
    }
}

/// Estatísticas agregadas de um torneio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub first: EngineSpec,
    pub second: EngineSpec,
    /// Partidas ordenadas pelo índice.
    pub games: Vec<GameSummary>,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub unfinished: usize,
    pub total_plies: usize,
}

impl MatchReport {
    fn from_games(config: &MatchConfig, mut games: Vec<GameSummary>) -> Self {
        games.sort_by_key(|g| g.index);
        let mut report = MatchReport {
            first: config.first,
            second: config.second,
            games: Vec::new(),
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            unfinished: 0,
            total_plies: 0,
        };
        for game in &games {
            match (game.result, game.first_won()) {
                (_, Some(true)) => report.first_wins += 1,
                (_, Some(false)) => report.second_wins += 1,
                (GameResult::Draw, None) => report.draws += 1,
                _ => report.unfinished += 1,
            }
            report.total_plies += game.plies;
        }
        report.games = games;
        report
    }

    pub fn games_played(&self) -> usize {
        self.games.len()
    }

    pub fn average_plies(&self) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            self.total_plies as f64 / self.games.len() as f64
        }
    }

    /// Pontuação do primeiro motor (vitória 1, empate 0.5).
    pub fn first_score(&self) -> f64 {
        self.first_wins as f64 + 0.5 * self.draws as f64
    }
}

/// Executa torneios entre estratégias.
pub struct Arena;

impl Arena {
    /// Joga `config.games` partidas independentes numa pool de `config.threads`
    /// threads. As partidas terminadas seguem por um canal para a thread que as
    /// agrega. O relatório é determinístico para uma dada semente.
    pub fn run(config: &MatchConfig) -> Result<MatchReport, EngineError> {
        config.first.validate()?;
        config.second.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads.max(1))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        // Uma semente por partida, derivada da semente do torneio
        let mut rng = StdRng::seed_from_u64(config.seed);
        let seeds: Vec<u64> = (0..config.games).map(|_| rng.gen()).collect();

        log::info!(
            "{} vs {} on {}: {} games, {} threads",
            config.first,
            config.second,
            config.variant,
            config.games,
            config.threads.max(1)
        );

        let (tx, rx) = crossbeam::channel::unbounded::<Result<GameSummary, EngineError>>();
        let total = config.games;

        let collected = crossbeam::scope(|s| {
            let collector = s.spawn(move |_| {
                let mut done = Vec::with_capacity(total);
                for outcome in rx.iter() {
                    if let Ok(game) = &outcome {
                        log::info!(
                            "game {}/{} finished: {} in {} plies",
                            done.len() + 1,
                            total,
                            game.result,
                            game.plies
                        );
                    }
                    done.push(outcome);
                }
                done
            });

            pool.install(|| {
                seeds.par_iter().enumerate().for_each_with(tx, |tx, (index, &seed)| {
                    // O receptor só desaparece se o agregador entrou em pânico
                    let _ = tx.send(play_game(config, index, seed));
                });
            });

            collector.join()
        })
        .map_err(|_| EngineError::ThreadPool("arena worker panicked".to_string()))?
        .map_err(|_| EngineError::ThreadPool("result collector panicked".to_string()))?;

        let games = collected.into_iter().collect::<Result<Vec<_>, _>>()?;
        let report = MatchReport::from_games(config, games);
        log::info!(
            "{} {} - {} {} ({} draws, {} unfinished), avg {:.1} plies",
            report.first,
            report.first_wins,
            report.second_wins,
            report.second,
            report.draws,
            report.unfinished,
            report.average_plies()
        );
        Ok(report)
    }
}

fn play_game(config: &MatchConfig, index: usize, seed: u64) -> Result<GameSummary, EngineError> {
    let first_color = if config.swap_colors && index % 2 == 1 { Color::Black } else { Color::White };
    let first = config.first.build(seed)?;
    let second = config.second.build(seed.wrapping_add(1))?;
    let (white, black) = match first_color {
        Color::White => (first, second),
        Color::Black => (second, first),
    };

    let mut session = GameSession::new(Board::new(config.variant), white, black);
    if let Some(limit) = config.max_plies {
        session = session.with_max_plies(limit);
    }
    let record = session.play()?;
    let move_log = record.moves.iter().map(|m| m.to_coordinate()).collect::<Vec<_>>().join(" ");

    Ok(GameSummary {
        index,
        first_color,
        result: record.result,
        plies: record.plies,
        final_fen: record.final_fen,
        move_log,
        substitutions: record.substitutions,
    })
}
