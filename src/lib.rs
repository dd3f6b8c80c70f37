// Motor Minixadrez - generalized minichess engine library

pub mod core;
pub mod engine;
pub mod moves;
pub mod search;

pub use crate::core::*;
