use eframe::egui::{
    Align, Align2, Button, Color32, ComboBox, CornerRadius, CursorIcon, FontId, Frame, Grid,
    Layout, Margin, RichText, Sense, Stroke, Ui, vec2,
};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::config::{MAP_CONFIG, OPERATING_HOURS};
use crate::domain::{ArrivalStatus, Line, RouteMode, StationId, StationRegistry};
use crate::metro_map::{MetroMapState, station_at};
use crate::routing::{PlannerKind, RouteSearch};
use crate::schedule::ScheduleBoard;
use crate::tickets::TicketWallet;
use crate::ui::config::{UI_CONFIG, UI_TEXT, line_color, line_text_color};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card, format_minutes, format_price, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Splits the tab into a wide left column and a narrow right column sharing `events`.
fn two_columns<E>(
    ui: &mut Ui,
    events: &mut Vec<E>,
    left: impl FnOnce(&mut Ui, &mut Vec<E>),
    right: impl FnOnce(&mut Ui, &mut Vec<E>),
) {
    let left_width = ui.available_width() * UI_CONFIG.map_width_share;
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(left_width);
            left(ui, events);
        });
        ui.vertical(|ui| right(ui, events));
    });
}

fn full_width_button(ui: &mut Ui, enabled: bool, text: &str) -> bool {
    ui.add_enabled(
        enabled,
        Button::new(text).min_size(vec2(ui.available_width(), 30.0)),
    )
    .clicked()
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    Hover(Option<StationId>),
    Select(StationId),
    PlanRouteFrom(StationId),
}

/// Station diagram plus the info panel of the selected station
pub struct MapPanel<'a> {
    registry: &'a StationRegistry,
    state: &'a MetroMapState,
}

impl<'a> MapPanel<'a> {
    pub fn new(registry: &'a StationRegistry, state: &'a MetroMapState) -> Self {
        Self { registry, state }
    }

    fn render_canvas(&self, ui: &mut Ui, events: &mut Vec<MapEvent>) {
        let width = ui.available_width();
        let height = width / MAP_CONFIG.aspect_ratio;
        let (response, painter) = ui.allocate_painter(vec2(width, height), Sense::click());
        let rect = response.rect;
        painter.rect_filled(rect, CornerRadius::same(6), UI_CONFIG.colors.map_background);

        // Normalized 0-100 square, centered like an SVG viewBox
        let side = rect.width().min(rect.height());
        let origin = rect.center() - vec2(side, side) / 2.0;
        let scale = side / 100.0;
        let to_screen = |x: f32, y: f32| origin + vec2(x * scale, y * scale);

        for (line, sequence) in self.registry.lines() {
            let stroke = Stroke::new(MAP_CONFIG.line_width * scale, line_color(line));
            for (a, b) in sequence.iter().tuple_windows() {
                if let (Some(sa), Some(sb)) = (self.registry.get(*a), self.registry.get(*b)) {
                    painter.line_segment([to_screen(sa.x, sa.y), to_screen(sb.x, sb.y)], stroke);
                }
            }
        }

        let outline = UI_CONFIG.colors.marker_outline;
        for station in self.registry.stations() {
            let center = to_screen(station.x, station.y);
            let radius = if self.state.is_hovered(station.id) {
                MAP_CONFIG.hovered_marker_radius
            } else {
                MAP_CONFIG.marker_radius
            };
            painter.circle(
                center,
                radius * scale,
                line_color(station.line),
                Stroke::new(0.4 * scale, outline),
            );
            if station.has_transfers() {
                painter.circle_stroke(
                    center,
                    MAP_CONFIG.transfer_ring_radius * scale,
                    Stroke::new(0.3 * scale, outline),
                );
            }
            if self.state.selected_id() == Some(station.id) {
                painter.circle_stroke(
                    center,
                    (MAP_CONFIG.transfer_ring_radius + 0.8) * scale,
                    Stroke::new(0.4 * scale, UI_CONFIG.colors.accent),
                );
            }
        }

        let under_pointer = response
            .hover_pos()
            .and_then(|pos| {
                let local = (pos - origin) / scale;
                station_at(
                    self.registry,
                    local.x,
                    local.y,
                    MAP_CONFIG.hovered_marker_radius + MAP_CONFIG.hit_slop,
                )
            })
            .map(|s| s.id);

        if under_pointer != self.state.hovered_id() {
            events.push(MapEvent::Hover(under_pointer));
        }
        if let Some(id) = under_pointer {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            if response.clicked() {
                events.push(MapEvent::Select(id));
            }
        }

        if let Some(station) = self.state.hovered(self.registry) {
            let anchor = to_screen(station.x, station.y)
                - vec2(0.0, (MAP_CONFIG.transfer_ring_radius + 1.0) * scale);
            let galley = painter.layout_no_wrap(
                format!("{}\n{}", station.name, station.line_name()),
                FontId::proportional(13.0),
                Color32::WHITE,
            );
            let label_rect = Align2::CENTER_BOTTOM
                .anchor_size(anchor, galley.size())
                .expand(6.0);
            painter.rect_filled(label_rect, CornerRadius::same(4), UI_CONFIG.colors.side_panel);
            painter.galley(label_rect.min + vec2(6.0, 6.0), galley, Color32::WHITE);
        }
    }

    fn render_legend(&self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for line in Line::iter() {
                ui.badge(line.display_name(), line_color(line), line_text_color(line));
            }
        });
    }

    fn render_station_info(&self, ui: &mut Ui, events: &mut Vec<MapEvent>) {
        let Some(station) = self.state.selected(self.registry) else {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(RichText::new("🖱").size(40.0).color(Color32::GRAY));
                ui.label_subdued(UI_TEXT.map_empty_hint);
                ui.add_space(30.0);
            });
            return;
        };

        ui.label(RichText::new(station.name).size(20.0).strong());
        ui.badge(station.line_name(), line_color(station.line), line_text_color(station.line));

        let transfer_lines = self.registry.transfer_lines(station.id);
        if !transfer_lines.is_empty() {
            spaced_separator(ui);
            ui.label_subheader(UI_TEXT.transfers_label);
            ui.horizontal_wrapped(|ui| {
                for line in transfer_lines {
                    ui.badge(line.display_name(), line_color(line), line_text_color(line));
                }
            });
        }

        spaced_separator(ui);
        let accent = UI_CONFIG.colors.accent;
        ui.metric(UI_TEXT.first_train_label, OPERATING_HOURS.first_train, accent);
        ui.metric(UI_TEXT.last_train_label, OPERATING_HOURS.last_train, accent);
        ui.metric(UI_TEXT.interval_label, OPERATING_HOURS.interval, accent);

        ui.add_space(12.0);
        if full_width_button(ui, true, UI_TEXT.plan_route_button) {
            events.push(MapEvent::PlanRouteFrom(station.id));
        }
    }
}

impl<'a> Panel for MapPanel<'a> {
    type Event = MapEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        two_columns(
            ui,
            &mut events,
            |ui, events| {
                card(ui, UI_TEXT.map_heading, |ui| {
                    self.render_canvas(ui, events);
                    self.render_legend(ui);
                });
            },
            |ui, events| {
                card(ui, UI_TEXT.station_info_heading, |ui| {
                    self.render_station_info(ui, events);
                });
            },
        );
        events
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent {
    SetOrigin(String),
    SetDestination(String),
    Swap,
    Search,
    Mode(RouteMode),
    BuyTicket,
}

/// Origin/destination pickers and the last search result
pub struct RoutePanel<'a> {
    names: &'a [&'static str],
    search: &'a RouteSearch,
    planner: PlannerKind,
}

impl<'a> RoutePanel<'a> {
    pub fn new(names: &'a [&'static str], search: &'a RouteSearch, planner: PlannerKind) -> Self {
        Self {
            names,
            search,
            planner,
        }
    }

    fn station_combo(
        &self,
        ui: &mut Ui,
        id_salt: &str,
        current: Option<&str>,
        placeholder: &str,
    ) -> Option<String> {
        let mut picked = current.map(str::to_string);
        ComboBox::from_id_salt(id_salt)
            .width(ui.available_width())
            .selected_text(current.unwrap_or(placeholder))
            .show_ui(ui, |ui| {
                for name in self.names {
                    ui.selectable_value(&mut picked, Some(name.to_string()), *name);
                }
            });

        if picked.as_deref() != current { picked } else { None }
    }

    fn render_planner(&self, ui: &mut Ui, events: &mut Vec<RouteEvent>) {
        ui.label_subheader(UI_TEXT.from_label);
        if let Some(name) = self.station_combo(
            ui,
            "route_origin",
            self.search.origin(),
            UI_TEXT.from_placeholder,
        ) {
            events.push(RouteEvent::SetOrigin(name));
        }

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_enabled(self.search.can_swap(), Button::new(UI_TEXT.swap_button))
                .clicked()
            {
                events.push(RouteEvent::Swap);
            }
        });
        ui.add_space(6.0);

        ui.label_subheader(UI_TEXT.to_label);
        if let Some(name) = self.station_combo(
            ui,
            "route_destination",
            self.search.destination(),
            UI_TEXT.to_placeholder,
        ) {
            events.push(RouteEvent::SetDestination(name));
        }

        ui.add_space(14.0);
        if full_width_button(ui, self.search.can_search(), UI_TEXT.search_button) {
            events.push(RouteEvent::Search);
        }

        spaced_separator(ui);
        let mut mode = self.search.mode();
        ui.horizontal(|ui| {
            for candidate in RouteMode::iter() {
                if ui
                    .selectable_value(&mut mode, candidate, candidate.to_string())
                    .clicked()
                    && candidate != self.search.mode()
                {
                    events.push(RouteEvent::Mode(candidate));
                }
            }
        });
        if self.planner == PlannerKind::Mock {
            ui.label_subdued(UI_TEXT.route_mode_mock_hint);
        }
    }

    fn render_result(&self, ui: &mut Ui, events: &mut Vec<RouteEvent>) {
        let Some(route) = self.search.result() else {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label(RichText::new("🔍").size(40.0).color(Color32::GRAY));
                match self.search.last_error() {
                    Some(err) => ui.label_error(err.to_string()),
                    None => ui.label_subdued(UI_TEXT.route_empty_hint),
                }
                ui.add_space(30.0);
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(format_minutes(route.duration)).size(24.0).strong());
                ui.label_subdued(UI_TEXT.travel_time_label);
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.badge(format_price(route.cost), UI_CONFIG.colors.accent, Color32::BLACK);
            });
        });

        spaced_separator(ui);
        let transfers = if route.is_direct() {
            UI_TEXT.no_transfers.to_string()
        } else {
            route.transfers.to_string()
        };
        ui.metric(UI_TEXT.transfers_count_label, &transfers, Color32::WHITE);
        ui.add_space(8.0);

        let last = route.stations.len().saturating_sub(1);
        let per_leg = format!("↓ {}", format_minutes(route.minutes_per_leg()));
        for (index, name) in route.stations.iter().enumerate() {
            let color = if index == 0 {
                UI_CONFIG.colors.route_origin
            } else if index == last {
                UI_CONFIG.colors.route_destination
            } else {
                UI_CONFIG.colors.accent
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").color(color));
                ui.label(RichText::new(name).strong());
            });
            if index < last {
                ui.horizontal(|ui| {
                    ui.add_space(18.0);
                    ui.label_subdued(per_leg.as_str());
                });
            }
        }

        spaced_separator(ui);
        if full_width_button(ui, true, UI_TEXT.buy_ticket_button) {
            events.push(RouteEvent::BuyTicket);
        }
        full_width_button(ui, true, UI_TEXT.share_route_button);
    }
}

impl<'a> Panel for RoutePanel<'a> {
    type Event = RouteEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.columns(2, |cols| {
            card(&mut cols[0], UI_TEXT.route_planner_heading, |ui| {
                self.render_planner(ui, &mut events);
            });
            card(&mut cols[1], UI_TEXT.route_result_heading, |ui| {
                self.render_result(ui, &mut events);
            });
        });
        events
    }
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TicketsView {
    #[default]
    Buy,
    Owned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketsEvent {
    View(TicketsView),
    /// Catalog product id
    Purchase(&'static str),
}

/// Fare catalog and the rider's tickets
pub struct TicketsPanel<'a> {
    wallet: &'a TicketWallet,
    view: TicketsView,
}

impl<'a> TicketsPanel<'a> {
    pub fn new(wallet: &'a TicketWallet, view: TicketsView) -> Self {
        Self { wallet, view }
    }

    fn render_catalog(&self, ui: &mut Ui, events: &mut Vec<TicketsEvent>) {
        let column_width = (ui.available_width() - 12.0) / 2.0;
        Grid::new("ticket_catalog")
            .num_columns(2)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for (index, product) in self.wallet.catalog().iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.set_width(column_width);
                        card(ui, &format!("{} {}", product.icon, product.name), |ui| {
                            ui.label_subdued(product.description);
                            ui.add_space(8.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format_price(product.price))
                                        .size(26.0)
                                        .strong()
                                        .color(UI_CONFIG.colors.accent),
                                );
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui.button(UI_TEXT.buy_button).clicked() {
                                        events.push(TicketsEvent::Purchase(product.id()));
                                    }
                                });
                            });
                        });
                    });
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(12.0);
        card(ui, UI_TEXT.payment_methods_heading, |ui| {
            for method in UI_TEXT.payment_methods {
                ui.label_subdued(*method);
            }
        });
    }

    fn render_owned(&self, ui: &mut Ui, events: &mut Vec<TicketsEvent>) {
        let tickets = self.wallet.tickets();
        if tickets.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.label_subdued(UI_TEXT.no_tickets);
                if ui.button(UI_TEXT.buy_first_ticket_button).clicked() {
                    events.push(TicketsEvent::View(TicketsView::Buy));
                }
            });
            return;
        }

        for ticket in tickets {
            Frame::new()
                .fill(UI_CONFIG.colors.side_panel)
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🎫").size(36.0));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&ticket.label).size(18.0).strong());
                            if ticket.active {
                                ui.badge(
                                    UI_TEXT.ticket_active,
                                    UI_CONFIG.colors.ticket_active,
                                    Color32::WHITE,
                                );
                            } else {
                                ui.badge(UI_TEXT.ticket_used, Color32::DARK_GRAY, Color32::WHITE);
                            }
                            if let Some(date) = ticket.valid_until {
                                ui.metric(
                                    UI_TEXT.valid_until_label,
                                    &date.format("%Y-%m-%d").to_string(),
                                    Color32::LIGHT_GRAY,
                                );
                            }
                            if let Some(rides) = ticket.rides {
                                ui.metric(
                                    UI_TEXT.rides_left_label,
                                    &rides.to_string(),
                                    Color32::LIGHT_GRAY,
                                );
                            }
                            if ticket.active {
                                ui.horizontal(|ui| {
                                    let _ = ui.button(UI_TEXT.qr_button);
                                    let _ = ui.button(UI_TEXT.transfer_ticket_button);
                                });
                            }
                        });
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            ui.label(
                                RichText::new(format_price(ticket.price))
                                    .size(22.0)
                                    .strong()
                                    .color(UI_CONFIG.colors.accent),
                            );
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }
}

impl<'a> Panel for TicketsPanel<'a> {
    type Event = TicketsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        let mut view = self.view;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut view, TicketsView::Buy, UI_TEXT.buy_tab);
            ui.selectable_value(&mut view, TicketsView::Owned, UI_TEXT.my_tickets_tab);
        });
        if view != self.view {
            events.push(TicketsEvent::View(view));
        }
        ui.add_space(10.0);

        match self.view {
            TicketsView::Buy => self.render_catalog(ui, &mut events),
            TicketsView::Owned => self.render_owned(ui, &mut events),
        }
        events
    }
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleEvent {
    SelectStation(&'static str),
    Refresh,
}

/// Badge text and color for a train status.
pub fn status_badge(status: ArrivalStatus) -> (String, Color32) {
    match status {
        ArrivalStatus::OnTime => (
            UI_TEXT.status_on_time.to_string(),
            UI_CONFIG.colors.status_on_time,
        ),
        ArrivalStatus::Arriving => (
            UI_TEXT.status_arriving.to_string(),
            UI_CONFIG.colors.status_arriving,
        ),
        ArrivalStatus::Delayed { minutes } => (
            format!(
                "{} {} {}",
                UI_TEXT.status_delayed_prefix, minutes, UI_TEXT.minutes_suffix
            ),
            UI_CONFIG.colors.status_delayed,
        ),
    }
}

/// Arrival board with station picker and static service info
pub struct SchedulePanel<'a> {
    board: &'a ScheduleBoard,
}

impl<'a> SchedulePanel<'a> {
    pub fn new(board: &'a ScheduleBoard) -> Self {
        Self { board }
    }

    fn render_board(&self, ui: &mut Ui, events: &mut Vec<ScheduleEvent>) {
        ui.horizontal(|ui| {
            ui.label_subheader(UI_TEXT.pick_station_label);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(UI_TEXT.refresh_button).clicked() {
                    events.push(ScheduleEvent::Refresh);
                }
            });
        });

        let mut picked = self.board.selected_station();
        ComboBox::from_id_salt("schedule_station")
            .width(ui.available_width())
            .selected_text(picked)
            .show_ui(ui, |ui| {
                for name in self.board.stations() {
                    ui.selectable_value(&mut picked, *name, *name);
                }
            });
        if picked != self.board.selected_station() {
            events.push(ScheduleEvent::SelectStation(picked));
        }

        ui.add_space(10.0);
        for entry in self.board.entries() {
            Frame::new()
                .fill(UI_CONFIG.colors.central_panel)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(entry.time_label())
                                .size(22.0)
                                .strong()
                                .color(UI_CONFIG.colors.accent),
                        );
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("→ {}", entry.destination)).strong());
                            ui.horizontal(|ui| {
                                ui.label_subdued(format!(
                                    "□ {} {}",
                                    UI_TEXT.platform_label, entry.platform
                                ));
                                let (text, color) = status_badge(entry.status);
                                ui.badge(text, color, Color32::WHITE);
                            });
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let _ = ui.button("🔔");
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn render_sidebar(&self, ui: &mut Ui) {
        card(ui, UI_TEXT.opening_hours_heading, |ui| {
            let accent = UI_CONFIG.colors.accent;
            ui.metric(UI_TEXT.weekdays_label, OPERATING_HOURS.weekday, accent);
            ui.metric(UI_TEXT.weekends_label, OPERATING_HOURS.weekend, accent);
            ui.metric(UI_TEXT.interval_label, OPERATING_HOURS.interval, accent);
        });
        ui.add_space(10.0);
        card(ui, UI_TEXT.notifications_heading, |ui| {
            ui.label_subdued(UI_TEXT.notifications_hint);
            ui.add_space(6.0);
            full_width_button(ui, true, UI_TEXT.notifications_button);
        });
        ui.add_space(10.0);
        card(ui, UI_TEXT.tips_heading, |ui| {
            for tip in UI_TEXT.tips {
                ui.label_subdued(*tip);
            }
        });
    }
}

impl<'a> Panel for SchedulePanel<'a> {
    type Event = ScheduleEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        two_columns(
            ui,
            &mut events,
            |ui, events| {
                card(ui, UI_TEXT.schedule_heading, |ui| {
                    self.render_board(ui, events);
                });
            },
            |ui, _| self.render_sidebar(ui),
        );
        events
    }
}
