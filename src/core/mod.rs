// This is where the actual calculations happen.

pub mod agent;
pub mod board;
pub mod evaluation;
pub mod score;
pub mod search;
