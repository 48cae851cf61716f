//! Turn resolution: picking cards, comparing pairs, committing outcomes.

mod resolver;

pub use resolver::{
    PairOutcome, RejectReason, Resolution, SelectOutcome, TurnPhase, TurnResolver,
};
