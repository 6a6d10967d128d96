//! Generation collaborator adapters

pub mod gateway;
pub mod protocol;

pub use gateway::HttpGenerationGateway;
