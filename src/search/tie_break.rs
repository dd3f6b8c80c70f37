use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Política de desempate entre lances com a mesma pontuação na raiz.
pub enum TieBreak {
    /// O primeiro lance (pela ordem de busca) ganha. Determinístico.
    FirstSeen,
    /// Escolha uniforme com um gerador próprio e semeado.
    Uniform(StdRng),
}

impl TieBreak {
    pub fn uniform(seed: u64) -> Self {
        TieBreak::Uniform(StdRng::seed_from_u64(seed))
    }

    /// Escolhe um dos candidatos; `None` se a lista estiver vazia.
    pub fn choose<T: Copy>(&mut self, candidates: &[T]) -> Option<T> {
        match self {
            TieBreak::FirstSeen => candidates.first().copied(),
            TieBreak::Uniform(rng) => candidates.choose(rng).copied(),
        }
    }
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::FirstSeen
    }
}

impl fmt::Debug for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstSeen => f.write_str("FirstSeen"),
            TieBreak::Uniform(_) => f.write_str("Uniform"),
        }
    }
}
