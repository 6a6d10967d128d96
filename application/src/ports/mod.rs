//! Port definitions — interfaces the application layer requires from
//! the outside world. Adapters live in the infrastructure layer.

pub mod generation;
pub mod weather;
