//! Scrolling ticker overlay
//!
//! A borderless, optionally always-on-top viewport that slides one line of
//! text right-to-left. The scroll arithmetic lives in [`ScrollState`] so it
//! can be tested without a window.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::font::FontSpec;

/// Vertical padding above the text, half of the 10 px the window adds to the
/// font's line height.
const TOP_PADDING: f32 = 5.0;

/// Horizontal text offset plus the measurements it wraps against.
///
/// The offset starts at the window width (text just off the right edge) and
/// decrements one pixel per tick; once the whole text has passed the left
/// edge it resets to the window width again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: i32,
    text_width: i32,
    window_width: i32,
}

impl ScrollState {
    pub fn new(window_width: i32, text_width: i32) -> Self {
        Self {
            offset: window_width,
            text_width,
            window_width,
        }
    }

    /// Advance by one tick: wrap back to the right edge when the text has
    /// fully scrolled out, otherwise move one pixel left.
    pub fn tick(&mut self) {
        if self.offset < -self.text_width {
            self.offset = self.window_width;
        } else {
            self.offset -= 1;
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }
}

/// The ticker overlay. Constructed with the fully joined display string and a
/// snapshot of the relevant settings; destroyed when the user closes it or
/// the editor toggles it off.
pub struct TickerWindow {
    text: String,
    font: FontSpec,
    interval: Duration,
    foreground: egui::Color32,
    background: egui::Color32,
    position: egui::Pos2,
    size: egui::Vec2,
    always_on_top: bool,
    /// `None` until the first painted frame has measured the text (Idle);
    /// `Some` once scrolling.
    scroll: Option<ScrollState>,
    last_tick: Option<Instant>,
}

impl TickerWindow {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: String,
        font: FontSpec,
        interval_ms: u32,
        foreground: egui::Color32,
        background: egui::Color32,
        position: egui::Pos2,
        size: egui::Vec2,
        always_on_top: bool,
    ) -> Self {
        tracing::info!(
            "Showing ticker: {} chars, {} ms interval, at {:?} size {:?}",
            text.len(),
            interval_ms,
            position,
            size
        );
        Self {
            text,
            font,
            interval: Duration::from_millis(interval_ms.max(1) as u64),
            foreground,
            background,
            position,
            size,
            always_on_top,
            scroll: None,
            last_tick: None,
        }
    }

    /// Declare the ticker viewport for this frame. Returns `false` once the
    /// user has requested the window closed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut builder = egui::ViewportBuilder::default()
            .with_title("Ticker")
            .with_decorations(false)
            .with_resizable(false)
            .with_taskbar(false)
            .with_position(self.position)
            .with_inner_size(self.size);
        if self.always_on_top {
            builder = builder.with_always_on_top();
        }

        // Keep the parent repainting too: immediate viewports are re-declared
        // from the parent's update, so the parent must wake every interval.
        ctx.request_repaint_after(self.interval);

        let mut keep_open = true;
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("ticker_window"),
            builder,
            |ctx, _class| {
                if ctx.input(|i| i.viewport().close_requested()) {
                    keep_open = false;
                }
                self.draw(ctx);
            },
        );
        keep_open
    }

    fn draw(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(self.background))
            .show(ctx, |ui| {
                let galley = ui.fonts(|fonts| {
                    fonts.layout_no_wrap(self.text.clone(), self.font.font_id(), self.foreground)
                });

                // First painted frame: measure once, start at the right edge.
                let scroll = self.scroll.get_or_insert_with(|| {
                    ScrollState::new(self.size.x as i32, galley.size().x.ceil() as i32)
                });
                let last_tick = self.last_tick.get_or_insert_with(Instant::now);

                // Elapsed time converted to whole ticks, so the rate stays one
                // pixel per interval regardless of frame rate.
                let due = (last_tick.elapsed().as_millis() / self.interval.as_millis()) as u32;
                for _ in 0..due {
                    scroll.tick();
                }
                *last_tick += self.interval * due;

                let origin = ui.max_rect().min;
                ui.painter().galley(
                    egui::pos2(origin.x + scroll.offset() as f32, origin.y + TOP_PADDING),
                    galley,
                    self.foreground,
                );

                ctx.request_repaint_after(self.interval);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_starts_at_window_width() {
        let state = ScrollState::new(800, 300);
        assert_eq!(state.offset(), 800);
    }

    #[test]
    fn test_tick_moves_one_pixel_left() {
        let mut state = ScrollState::new(800, 300);
        state.tick();
        assert_eq!(state.offset(), 799);
        state.tick();
        assert_eq!(state.offset(), 798);
    }

    #[test]
    fn test_offset_wraps_after_text_scrolls_out() {
        let window_width = 40;
        let text_width = 25;
        let mut state = ScrollState::new(window_width, text_width);

        // Run well past one full cycle; the offset must never keep falling.
        let mut min_seen = state.offset();
        let mut wrapped = false;
        for _ in 0..(window_width + text_width) * 3 {
            state.tick();
            min_seen = min_seen.min(state.offset());
            if state.offset() == window_width {
                wrapped = true;
            }
        }
        assert!(wrapped, "offset never reset to the window width");
        assert!(
            min_seen >= -text_width - 1,
            "offset fell to {min_seen}, below the wrap threshold"
        );
    }

    #[test]
    fn test_wrap_happens_on_tick_after_threshold() {
        let mut state = ScrollState::new(10, 4);
        // Drive the offset down to exactly -text_width...
        for _ in 0..14 {
            state.tick();
        }
        assert_eq!(state.offset(), -4);
        // ...one more tick passes the threshold, the next one wraps.
        state.tick();
        assert_eq!(state.offset(), -5);
        state.tick();
        assert_eq!(state.offset(), 10);
    }
}
