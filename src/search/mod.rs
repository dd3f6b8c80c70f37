pub mod alpha_beta;
pub mod evaluation;
pub mod minimax;
pub mod move_ordering;
pub mod tie_break;

pub use alpha_beta::*;
pub use evaluation::*;
pub use move_ordering::*;
pub use tie_break::TieBreak;
