//! Use cases — application entry points over the handler pipeline

pub mod process_turn;
