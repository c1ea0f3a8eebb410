//! HTTP backend adapter implementing [`SummaryGateway`](summary_application::SummaryGateway)
//! over the agents API with `reqwest`.

mod gateway;
pub mod wire;

pub use gateway::HttpSummaryGateway;
