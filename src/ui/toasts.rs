use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{Align2, Area, Context, Frame, Id, Margin, RichText, Stroke, vec2};

use crate::tickets::Notification;
use crate::ui::config::UI_CONFIG;

struct Toast {
    notification: Notification,
    shown_at: Instant,
}

/// Fire-and-forget notification stack in the bottom-right corner.
#[derive(Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) {
        self.toasts.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn expire(&mut self, now: Instant) {
        let lifetime = Duration::from_secs_f32(UI_CONFIG.toast_seconds);
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < lifetime);
    }

    pub fn show(&mut self, ctx: &Context) {
        self.expire(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -48.0))
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    Frame::new()
                        .fill(UI_CONFIG.colors.side_panel)
                        .stroke(Stroke::new(1.0, UI_CONFIG.colors.status_on_time))
                        .inner_margin(Margin::same(10))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("✔ {}", toast.notification.title))
                                    .strong()
                                    .color(UI_CONFIG.colors.status_on_time),
                            );
                            ui.label(RichText::new(&toast.notification.description).small());
                        });
                    ui.add_space(6.0);
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Notification {
        Notification {
            title: "Билет".to_string(),
            description: "Списано 55₽".to_string(),
        }
    }

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let mut queue = ToastQueue::default();
        queue.push(note());
        queue.push(note());
        assert_eq!(queue.len(), 2);

        queue.expire(Instant::now());
        assert_eq!(queue.len(), 2);

        queue.expire(Instant::now() + Duration::from_secs(60));
        assert!(queue.is_empty());
    }
}
