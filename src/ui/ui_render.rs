use chrono::Local;
use eframe::egui::{
    Align, CentralPanel, Color32, Context, Frame, Grid, Key, Layout, Margin, RichText, ScrollArea,
    TopBottomPanel, Ui, Window,
};
use strum::IntoEnumIterator;

use crate::shell::Tab;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    MapEvent, MapPanel, Panel, RouteEvent, RoutePanel, ScheduleEvent, SchedulePanel, TicketsEvent,
    TicketsPanel,
};

use super::app::MetroConnectApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Number keys bound to the tabs, in tab order.
const TAB_KEYS: [Key; 4] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4];

impl MetroConnectApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.header_panel)
            .inner_margin(Margin::symmetric(16, 10));
        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🚇").size(28.0));
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(UI_TEXT.app_title)
                                .size(22.0)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        ui.label_subdued(UI_TEXT.app_subtitle);
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("?").on_hover_text(UI_TEXT.help_toggle).clicked() {
                            self.show_help = !self.show_help;
                        }
                        ui.badge(
                            UI_TEXT.online_badge,
                            UI_CONFIG.colors.status_on_time,
                            Color32::WHITE,
                        );
                    });
                });

                ui.add_space(8.0);
                let mut picked = None;
                ui.horizontal(|ui| {
                    for tab in Tab::iter() {
                        let text = format!("{} {}", tab.icon(), tab);
                        if ui.selectable_label(self.tabs.active() == tab, text).clicked() {
                            picked = Some(tab);
                        }
                    }
                });
                if let Some(tab) = picked {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Tab bar: {}", tab);
                    }
                    self.switch_tab(tab);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(UI_TEXT.footer);
                    ui.separator();
                    ui.metric(
                        UI_TEXT.wallet_count_label,
                        &self.tabs.wallet.tickets().len().to_string(),
                        UI_CONFIG.colors.accent,
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(UI_TEXT.help_hint);
                    });
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("tab_content")
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.tabs.active() {
                        Tab::Map => {
                            let events = self.map_panel(ui);
                            self.apply_map_events(events);
                        }
                        Tab::Route => {
                            let events = self.route_panel(ui);
                            self.apply_route_events(events);
                        }
                        Tab::Tickets => {
                            let events = self.tickets_panel(ui);
                            self.apply_tickets_events(events);
                        }
                        Tab::Schedule => {
                            let events = self.schedule_panel(ui);
                            self.apply_schedule_events(events);
                        }
                    });
            });
    }

    fn render_shortcut_row(ui: &mut Ui, key: &str, description: &str) {
        ui.label(RichText::new(key).monospace().strong());
        ui.label(description);
        ui.end_row();
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        let tab_rows: Vec<(String, String)> = Tab::iter()
            .take(TAB_KEYS.len())
            .enumerate()
            .map(|(i, tab)| {
                (
                    (i + 1).to_string(),
                    format!("{} «{}»", UI_TEXT.help_switch_tab, tab),
                )
            })
            .collect();

        Window::new(UI_TEXT.help_heading)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (key, description) in &tab_rows {
                            Self::render_shortcut_row(ui, key, description);
                        }
                        Self::render_shortcut_row(ui, "H", UI_TEXT.help_toggle);
                        Self::render_shortcut_row(ui, "Esc", UI_TEXT.help_close);
                    });
                ui.add_space(6.0);
            });
    }

    fn map_panel(&mut self, ui: &mut Ui) -> Vec<MapEvent> {
        let mut panel = MapPanel::new(&self.registry, &self.tabs.map_state);
        panel.render(ui)
    }

    fn route_panel(&mut self, ui: &mut Ui) -> Vec<RouteEvent> {
        let mut panel = RoutePanel::new(
            &self.station_names,
            &self.tabs.route_search,
            self.settings.planner,
        );
        panel.render(ui)
    }

    fn tickets_panel(&mut self, ui: &mut Ui) -> Vec<TicketsEvent> {
        let mut panel = TicketsPanel::new(&self.tabs.wallet, self.tabs.tickets_view);
        panel.render(ui)
    }

    fn schedule_panel(&mut self, ui: &mut Ui) -> Vec<ScheduleEvent> {
        let mut panel = SchedulePanel::new(&self.tabs.schedule);
        panel.render(ui)
    }

    fn apply_map_events(&mut self, events: Vec<MapEvent>) {
        for event in events {
            match event {
                MapEvent::Hover(id) => self.tabs.map_state.hover_station(&self.registry, id),
                MapEvent::Select(id) => match self.tabs.map_state.select_station(&self.registry, id) {
                    Ok(_station) => {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Map: selected {}", _station.name);
                        }
                    }
                    Err(err) => log::warn!("Map selection ignored: {}", err),
                },
                MapEvent::PlanRouteFrom(id) => {
                    let Some(name) = self.registry.get(id).map(|s| s.name) else {
                        continue;
                    };
                    self.switch_tab(Tab::Route);
                    self.tabs.route_search.preset_origin(name);
                }
            }
        }
    }

    fn apply_route_events(&mut self, events: Vec<RouteEvent>) {
        for event in events {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Route panel: {:?}", event);
            }

            match event {
                RouteEvent::SetOrigin(name) => self.tabs.route_search.set_origin(name),
                RouteEvent::SetDestination(name) => self.tabs.route_search.set_destination(name),
                RouteEvent::Swap => {
                    self.tabs.route_search.swap();
                }
                RouteEvent::Search => {
                    // A failure stays on the search state for the result card
                    let _ = self
                        .tabs
                        .route_search
                        .search(self.planner.as_ref(), &mut self.rng);
                }
                RouteEvent::Mode(mode) => self.tabs.route_search.set_mode(mode),
                RouteEvent::BuyTicket => self.switch_tab(Tab::Tickets),
            }
        }
    }

    fn apply_tickets_events(&mut self, events: Vec<TicketsEvent>) {
        for event in events {
            match event {
                TicketsEvent::View(view) => self.tabs.tickets_view = view,
                TicketsEvent::Purchase(product_id) => {
                    match self.tabs.wallet.purchase_by_id(product_id, Local::now()) {
                        Ok((_, notification)) => self.toasts.push(notification),
                        Err(err) => log::warn!("Purchase rejected: {}", err),
                    }
                }
            }
        }
    }

    fn apply_schedule_events(&mut self, events: Vec<ScheduleEvent>) {
        let now = Local::now();
        for event in events {
            match event {
                ScheduleEvent::SelectStation(name) => {
                    self.tabs.schedule.select_station(name, now);
                }
                ScheduleEvent::Refresh => self.tabs.schedule.refresh(now),
            }
        }
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        ctx.input(|i| {
            for (key, tab) in TAB_KEYS.iter().zip(Tab::iter()) {
                if i.key_pressed(*key) {
                    self.switch_tab(tab);
                }
            }

            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
        });
    }
}
