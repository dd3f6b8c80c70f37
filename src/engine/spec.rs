use std::fmt;
use std::str::FromStr;

use super::{EngineError, GreedyEngine, MinimaxEngine, MoveSelector, RandomEngine};

/// Profundidade usada quando se escreve apenas `minimax`.
pub const DEFAULT_MINIMAX_DEPTH: u32 = 3;

/// Descrição de uma estratégia, lida da linha de comandos (`random`, `greedy`,
/// `minimax` ou `minimax:<profundidade>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineSpec {
    Random,
    Greedy,
    Minimax { depth: u32 },
}

impl EngineSpec {
    /// Constrói a estratégia com o seu próprio gerador semeado.
    pub fn build(self, seed: u64) -> Result<Box<dyn MoveSelector>, EngineError> {
        Ok(match self {
            EngineSpec::Random => Box::new(RandomEngine::new(seed)),
            EngineSpec::Greedy => Box::new(GreedyEngine::new(seed)),
            EngineSpec::Minimax { depth } => Box::new(MinimaxEngine::new(depth, seed)?),
        })
    }

    pub fn validate(self) -> Result<Self, EngineError> {
        match self {
            EngineSpec::Minimax { depth: 0 } => Err(EngineError::InvalidDepth(0)),
            other => Ok(other),
        }
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSpec::Random => f.write_str("random"),
            EngineSpec::Greedy => f.write_str("greedy"),
            EngineSpec::Minimax { depth } => write!(f, "minimax:{}", depth),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let (kind, arg) = match text.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (text.as_str(), None),
        };
        let spec = match (kind, arg) {
            ("random", None) => EngineSpec::Random,
            ("greedy", None) => EngineSpec::Greedy,
            ("minimax", None) => EngineSpec::Minimax { depth: DEFAULT_MINIMAX_DEPTH },
            ("minimax", Some(depth)) => {
                let depth = depth.parse().map_err(|_| EngineError::UnknownEngine(s.to_string()))?;
                EngineSpec::Minimax { depth }
            }
            _ => return Err(EngineError::UnknownEngine(s.to_string())),
        };
        spec.validate()
    }
}
