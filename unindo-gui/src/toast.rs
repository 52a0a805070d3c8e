use egui::RichText;
use log::debug;
use notification_center::{
    ExpiryTimers, Notification, NotificationCenter, NotificationId, NotificationSettings,
    NotificationStatus,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const TOAST_MAX_WIDTH: f32 = 380.0;
const TOAST_TOP_OFFSET: f32 = 32.0;
const TOAST_RIGHT_MARGIN: f32 = 4.0;
const TOAST_SPACING: f32 = 66.0;
const SLIDE_IN: Duration = Duration::from_millis(350);
const SLIDE_OUT: Duration = Duration::from_millis(450);
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastPalette {
    pub fill: egui::Color32,
    pub stroke: egui::Color32,
    pub text: egui::Color32,
}

/// Colors for a toast with the given status.
pub fn toast_palette(status: Option<NotificationStatus>) -> ToastPalette {
    let stroke = match status {
        Some(NotificationStatus::Success) => egui::Color32::from_rgb(60, 170, 90),
        Some(NotificationStatus::Error) => egui::Color32::from_rgb(210, 70, 70),
        Some(NotificationStatus::Info) => egui::Color32::from_rgb(70, 130, 210),
        None => egui::Color32::from_rgba_premultiplied(80, 80, 80, 200),
    };
    ToastPalette {
        fill: egui::Color32::from_rgba_premultiplied(20, 20, 20, 200),
        stroke,
        text: egui::Color32::from_rgba_premultiplied(235, 235, 235, 230),
    }
}

/// Horizontal slide factor: 0.0 is fully offscreen, 1.0 fully visible.
///
/// `age` is the time since the toast first appeared, `remaining` the time
/// left before its expiry timer fires (if armed).
pub fn slide_factor(age: Duration, remaining: Option<Duration>) -> f32 {
    let smooth = |t: f32| t * t * (3.0 - 2.0 * t);
    let entering = (age.as_secs_f32() / SLIDE_IN.as_secs_f32()).clamp(0.0, 1.0);
    let leaving = remaining
        .map(|left| (left.as_secs_f32() / SLIDE_OUT.as_secs_f32()).clamp(0.0, 1.0))
        .unwrap_or(1.0);
    smooth(entering.min(leaving))
}

/// Overlay that paints the center's notifications as a toast stack and
/// expires them.
///
/// The overlay owns the expiry timers of the surface. Timers are plain
/// deadlines checked on each frame pass, so dropping the overlay (unmounting
/// the surface) leaves nothing behind that could touch the center later.
pub struct ToastOverlay {
    timers: ExpiryTimers,
    max_visible: Option<usize>,
    first_seen: HashMap<NotificationId, Instant>,
}

impl ToastOverlay {
    pub fn new(settings: &NotificationSettings) -> Self {
        Self {
            timers: ExpiryTimers::new(settings.policy, settings.timeout()),
            max_visible: settings.max_visible,
            first_seen: HashMap::new(),
        }
    }

    pub fn timers(&self) -> &ExpiryTimers {
        &self.timers
    }

    /// Frame pass without painting: fires due timers, observes the list and
    /// returns how long the surface may sleep before it needs another pass.
    pub fn update(&mut self, center: &mut NotificationCenter, now: Instant) -> Option<Duration> {
        let expired = self.timers.expire(center, now);
        if !expired.is_empty() {
            debug!("{} toasts expired", expired.len());
        }
        if self.timers.observe(center, now) {
            self.first_seen.retain(|id, _| center.contains(id));
            for item in center.items() {
                self.first_seen.entry(item.id.clone()).or_insert(now);
            }
        }

        let animating = center.items().iter().any(|item| {
            let age = self.age(&item.id, now);
            let remaining = self
                .timers
                .deadline(&item.id)
                .map(|deadline| deadline.saturating_duration_since(now));
            age < SLIDE_IN || remaining.is_some_and(|left| left < SLIDE_OUT)
        });
        let next = self.timers.time_until_next(now);
        if animating {
            Some(next.map_or(ANIMATION_FRAME, |wait| wait.min(ANIMATION_FRAME)))
        } else {
            next.map(|wait| wait.saturating_sub(SLIDE_OUT))
        }
    }

    /// The toasts to paint, oldest first.
    pub fn visible<'a>(&self, center: &'a NotificationCenter) -> &'a [Notification] {
        let items = center.items();
        match self.max_visible {
            Some(max) if items.len() > max => &items[items.len() - max..],
            _ => items,
        }
    }

    /// Runs a frame pass and paints the stack in the top-right corner.
    pub fn show(&mut self, ctx: &egui::Context, center: &mut NotificationCenter) {
        let now = Instant::now();
        let repaint = self.update(center, now);

        let screen_rect = ctx.screen_rect();
        let x = screen_rect.max.x - TOAST_RIGHT_MARGIN;
        let mut y = screen_rect.min.y + TOAST_TOP_OFFSET;
        for notification in self.visible(center) {
            let remaining = self
                .timers
                .deadline(&notification.id)
                .map(|deadline| deadline.saturating_duration_since(now));
            let slide = slide_factor(self.age(&notification.id, now), remaining);
            let offscreen = TOAST_MAX_WIDTH + 24.0;
            let x_pos = x + (1.0 - slide) * offscreen;
            let palette = toast_palette(notification.status);

            egui::Area::new(egui::Id::new(("toast", notification.id.as_str())))
                .order(egui::Order::Foreground)
                .interactable(false)
                .pivot(egui::Align2::RIGHT_TOP)
                .fixed_pos(egui::pos2(x_pos, y))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(palette.fill)
                        .stroke(egui::Stroke::new(1.0, palette.stroke))
                        .rounding(egui::Rounding::same(6.0))
                        .show(ui, |ui| {
                            ui.set_max_width(TOAST_MAX_WIDTH);
                            ui.add_space(2.0);
                            ui.label(
                                RichText::new(&notification.title)
                                    .color(palette.text)
                                    .strong()
                                    .size(16.0),
                            );
                            if let Some(description) = &notification.description {
                                ui.label(RichText::new(description).color(palette.text).size(14.0));
                            }
                            ui.add_space(2.0);
                        });
                });
            y += TOAST_SPACING;
        }

        if let Some(wait) = repaint {
            ctx.request_repaint_after(wait);
        }
    }

    fn age(&self, id: &NotificationId, now: Instant) -> Duration {
        self.first_seen
            .get(id)
            .map(|seen| now.saturating_duration_since(*seen))
            .unwrap_or_default()
    }
}
