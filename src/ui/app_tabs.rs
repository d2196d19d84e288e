use chrono::{DateTime, Local};
use rand::RngCore;

use crate::config::BOARD;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::StationRegistry;
use crate::metro_map::MetroMapState;
use crate::routing::RouteSearch;
use crate::schedule::{RandomArrivalFeed, ScheduleBoard};
use crate::settings::AppSettings;
use crate::shell::{Shell, Tab};
use crate::tickets::TicketWallet;
use crate::ui::ui_panels::TicketsView;

/// Active tab plus the state of every tab module.
pub struct TabStates {
    shell: Shell,
    pub map_state: MetroMapState,
    pub route_search: RouteSearch,
    pub wallet: TicketWallet,
    pub tickets_view: TicketsView,
    pub schedule: ScheduleBoard,
}

fn mount_schedule(
    registry: &StationRegistry,
    settings: &AppSettings,
    now: DateTime<Local>,
    rng: &mut dyn RngCore,
) -> ScheduleBoard {
    let stations = registry.names_on_lines(BOARD.lines);
    let feed = RandomArrivalFeed::new(stations.clone(), rng.next_u64());
    ScheduleBoard::new(Box::new(feed), stations, settings.board_scope, now)
}

impl TabStates {
    pub fn mount(
        registry: &StationRegistry,
        settings: &AppSettings,
        now: DateTime<Local>,
        rng: &mut dyn RngCore,
    ) -> Self {
        Self {
            shell: Shell::new(settings.start_tab, settings.keep_tab_state),
            map_state: MetroMapState::default(),
            route_search: RouteSearch::new(settings.route_mode),
            wallet: TicketWallet::seeded(),
            tickets_view: TicketsView::default(),
            schedule: mount_schedule(registry, settings, now, rng),
        }
    }

    pub fn active(&self) -> Tab {
        self.shell.active()
    }

    /// Activates `tab`. Returns true if its state was rebuilt.
    pub fn switch_to(
        &mut self,
        tab: Tab,
        registry: &StationRegistry,
        settings: &AppSettings,
        now: DateTime<Local>,
        rng: &mut dyn RngCore,
    ) -> bool {
        match self.shell.switch_to(tab) {
            Some(remount) => {
                self.remount(remount, registry, settings, now, rng);
                true
            }
            None => false,
        }
    }

    /// Replaces the state of `tab` with a fresh one.
    pub fn remount(
        &mut self,
        tab: Tab,
        registry: &StationRegistry,
        settings: &AppSettings,
        now: DateTime<Local>,
        rng: &mut dyn RngCore,
    ) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Remounting {} tab", tab);
        }

        match tab {
            Tab::Map => self.map_state = MetroMapState::default(),
            Tab::Route => self.route_search = RouteSearch::new(settings.route_mode),
            Tab::Tickets => {
                self.wallet = TicketWallet::seeded();
                self.tickets_view = TicketsView::default();
            }
            Tab::Schedule => self.schedule = mount_schedule(registry, settings, now, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteMode, StationId};
    use chrono::{Duration, TimeZone};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Fixture {
        registry: StationRegistry,
        settings: AppSettings,
        rng: ChaCha8Rng,
        tabs: TabStates,
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()
    }

    impl Fixture {
        fn new(settings: AppSettings) -> Self {
            let registry = StationRegistry::standard().unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(21);
            let tabs = TabStates::mount(&registry, &settings, now(), &mut rng);
            Self {
                registry,
                settings,
                rng,
                tabs,
            }
        }

        fn switch(&mut self, tab: Tab) -> bool {
            self.tabs
                .switch_to(tab, &self.registry, &self.settings, now(), &mut self.rng)
        }
    }

    fn keep_state() -> AppSettings {
        AppSettings {
            keep_tab_state: true,
            ..Default::default()
        }
    }

    #[test]
    fn leaving_tickets_drops_purchases() {
        let mut fx = Fixture::new(AppSettings::default());
        fx.switch(Tab::Tickets);
        fx.tabs.wallet.purchase_by_id("ten", now()).unwrap();
        fx.tabs.tickets_view = TicketsView::Owned;
        assert_eq!(fx.tabs.wallet.tickets().len(), 3);

        fx.switch(Tab::Map);
        assert!(fx.switch(Tab::Tickets));
        assert_eq!(fx.tabs.wallet.tickets().len(), 2);
        assert_eq!(fx.tabs.tickets_view, TicketsView::Buy);
    }

    #[test]
    fn kept_state_survives_round_trips() {
        let mut fx = Fixture::new(keep_state());
        fx.switch(Tab::Tickets);
        fx.tabs.wallet.purchase_by_id("month", now()).unwrap();
        fx.tabs.route_search.set_origin("Южная");

        fx.switch(Tab::Schedule);
        fx.switch(Tab::Route);
        assert!(!fx.switch(Tab::Tickets));
        assert_eq!(fx.tabs.wallet.tickets().len(), 3);
        assert_eq!(fx.tabs.route_search.origin(), Some("Южная"));
    }

    #[test]
    fn route_and_map_start_over_on_return() {
        let settings = AppSettings {
            route_mode: RouteMode::Accessible,
            ..Default::default()
        };
        let mut fx = Fixture::new(settings);
        fx.tabs.map_state.select_station(&fx.registry, StationId(4)).unwrap();

        fx.switch(Tab::Route);
        fx.tabs.route_search.set_origin("Северная");
        fx.tabs.route_search.set_mode(RouteMode::Fastest);

        fx.switch(Tab::Map);
        assert_eq!(fx.tabs.map_state.selected_id(), None);

        fx.switch(Tab::Route);
        assert_eq!(fx.tabs.route_search.origin(), None);
        assert_eq!(fx.tabs.route_search.mode(), RouteMode::Accessible);
    }

    #[test]
    fn schedule_is_rebuilt_on_return() {
        let mut fx = Fixture::new(AppSettings::default());
        fx.switch(Tab::Schedule);
        fx.tabs.schedule.select_station("Южная", now());
        assert_eq!(fx.tabs.schedule.selected_station(), "Южная");

        fx.switch(Tab::Map);
        let later = now() + Duration::minutes(15);
        fx.tabs
            .switch_to(Tab::Schedule, &fx.registry, &fx.settings, later, &mut fx.rng);
        assert_eq!(fx.tabs.schedule.selected_station(), "Центральная");
        assert_eq!(fx.tabs.schedule.entries()[0].time, later);
    }

    #[test]
    fn reselecting_the_active_tab_keeps_its_state() {
        let settings = AppSettings {
            start_tab: Tab::Tickets,
            ..Default::default()
        };
        let mut fx = Fixture::new(settings);
        fx.tabs.wallet.purchase_by_id("single", now()).unwrap();

        assert!(!fx.switch(Tab::Tickets));
        assert_eq!(fx.tabs.active(), Tab::Tickets);
        assert_eq!(fx.tabs.wallet.tickets().len(), 3);
    }
}
