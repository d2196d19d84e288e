//! Tab container state.

use std::fmt;

use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, clap::ValueEnum)]
pub enum Tab {
    #[default]
    Map,
    Route,
    Tickets,
    Schedule,
}

impl Tab {
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Map => "🗺",
            Tab::Route => "🧭",
            Tab::Tickets => "🎫",
            Tab::Schedule => "📅",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Map => write!(f, "Карта"),
            Tab::Route => write!(f, "Маршрут"),
            Tab::Tickets => write!(f, "Билеты"),
            Tab::Schedule => write!(f, "Расписание"),
        }
    }
}

/// Owns only the active tab. Whether the newly shown module keeps its state is decided
/// here so the app can rebuild it.
#[derive(Debug, Clone, Copy)]
pub struct Shell {
    active: Tab,
    keep_tab_state: bool,
}

impl Shell {
    pub fn new(start: Tab, keep_tab_state: bool) -> Self {
        Self {
            active: start,
            keep_tab_state,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Activates `tab`. Returns the tab whose module must be remounted, if any.
    pub fn switch_to(&mut self, tab: Tab) -> Option<Tab> {
        if tab == self.active {
            return None;
        }
        self.active = tab;
        (!self.keep_tab_state).then_some(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_remounts_the_new_tab_by_default() {
        let mut shell = Shell::new(Tab::Map, false);
        assert_eq!(shell.switch_to(Tab::Tickets), Some(Tab::Tickets));
        assert_eq!(shell.active(), Tab::Tickets);
        assert_eq!(shell.switch_to(Tab::Tickets), None);
    }

    #[test]
    fn keep_state_never_remounts() {
        let mut shell = Shell::new(Tab::Route, true);
        assert_eq!(shell.switch_to(Tab::Schedule), None);
        assert_eq!(shell.active(), Tab::Schedule);
    }
}
