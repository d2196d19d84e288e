use chrono::Local;
use eframe::{Frame, egui};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::StationRegistry;
use crate::routing::{GraphPlanner, MockPlanner, PlannerKind, RoutePlanner};
use crate::settings::AppSettings;
use crate::shell::Tab;
use crate::ui::app_tabs::TabStates;
use crate::ui::toasts::ToastQueue;
use crate::ui::utils::setup_custom_visuals;

pub struct MetroConnectApp {
    pub(super) settings: AppSettings,
    pub(super) registry: StationRegistry,
    /// Route picker order, computed once
    pub(super) station_names: Vec<&'static str>,
    pub(super) planner: Box<dyn RoutePlanner>,
    pub(super) rng: ChaCha8Rng,
    pub(super) tabs: TabStates,

    pub(super) toasts: ToastQueue,
    pub(super) show_help: bool,
}

impl MetroConnectApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        registry: StationRegistry,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut rng = match settings.seed {
            Some(seed) => {
                log::info!("Mock data seeded with {}", seed);
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };

        let planner: Box<dyn RoutePlanner> = match settings.planner {
            PlannerKind::Mock => Box::new(MockPlanner),
            PlannerKind::Graph => Box::new(GraphPlanner::new(registry.clone())),
        };
        log::info!(
            "Routing with {:?} planner, default mode {}",
            settings.planner,
            settings.route_mode
        );

        let tabs = TabStates::mount(&registry, &settings, Local::now(), &mut rng);
        let station_names = registry.names();

        Self {
            station_names,
            planner,
            tabs,
            toasts: ToastQueue::default(),
            show_help: false,
            settings,
            registry,
            rng,
        }
    }

    /// Activates `tab`, rebuilding its state unless tabs keep their state.
    pub(super) fn switch_tab(&mut self, tab: Tab) {
        self.tabs
            .switch_to(tab, &self.registry, &self.settings, Local::now(), &mut self.rng);
    }
}

impl eframe::App for MetroConnectApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete ({} tickets in wallet).",
                self.tabs.wallet.tickets().len()
            );
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_header_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }

        self.toasts.show(ctx);
    }
}
