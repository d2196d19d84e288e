//! Runtime settings resolved from the command line.

use crate::Cli;
use crate::domain::RouteMode;
use crate::routing::PlannerKind;
use crate::schedule::BoardScope;
use crate::shell::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSettings {
    /// `None` seeds from OS entropy
    pub seed: Option<u64>,
    pub planner: PlannerKind,
    pub route_mode: RouteMode,
    pub board_scope: BoardScope,
    pub start_tab: Tab,
    pub keep_tab_state: bool,
}

impl From<&Cli> for AppSettings {
    fn from(cli: &Cli) -> Self {
        Self {
            seed: cli.seed,
            planner: cli.routing,
            route_mode: cli.route_mode,
            board_scope: cli.board_scope,
            start_tab: cli.start_tab,
            keep_tab_state: cli.keep_tab_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_faithful_behaviour() {
        let cli = Cli::parse_from(["metro-connect"]);
        let settings = AppSettings::from(&cli);
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn flags_are_carried_over() {
        let cli = Cli::parse_from([
            "metro-connect",
            "--seed",
            "12",
            "--routing",
            "graph",
            "--route-mode",
            "fewest-transfers",
            "--board-scope",
            "station",
            "--start-tab",
            "tickets",
            "--keep-tab-state",
        ]);
        let settings = AppSettings::from(&cli);
        assert_eq!(settings.seed, Some(12));
        assert_eq!(settings.planner, PlannerKind::Graph);
        assert_eq!(settings.route_mode, RouteMode::FewestTransfers);
        assert_eq!(settings.board_scope, BoardScope::Station);
        assert_eq!(settings.start_tab, Tab::Tickets);
        assert!(settings.keep_tab_state);
    }
}
