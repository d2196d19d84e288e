//! Route planning behind a single trait so the UI does not care whether a result is
//! synthesized or computed over the network graph.

pub mod graph;
pub mod mock;
pub mod search;

use rand::RngCore;

use crate::domain::{RouteMode, RouteResult};
use crate::error::AppError;

pub use graph::{GraphPlanner, MetroGraph};
pub use mock::MockPlanner;
pub use search::RouteSearch;

/// Which planner the app uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlannerKind {
    /// Synthesized placeholder routes
    #[default]
    Mock,
    /// Shortest path over the station graph
    Graph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub mode: RouteMode,
}

pub trait RoutePlanner {
    fn plan(
        &self,
        request: &RouteRequest<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<RouteResult, AppError>;
}

/// Shared precondition: both ends chosen and distinct.
pub fn validate_endpoints(from: &str, to: &str) -> Result<(), AppError> {
    if from.is_empty() || to.is_empty() {
        return Err(AppError::IncompleteSelection);
    }
    if from == to {
        return Err(AppError::SameOriginDestination(from.to_string()));
    }
    Ok(())
}
