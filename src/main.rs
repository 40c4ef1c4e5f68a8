#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! To-do List ticker
//!
//! Maintains a short to-do list and displays it as a horizontally scrolling
//! ticker overlay, with persisted user preferences (font, colors, margins,
//! scroll speed, separator).

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_ticker::app::TickerApp;

fn main() -> Result<()> {
    // Initialize file logging
    let file_appender = tracing_appender::rolling::never(".", "todo-ticker.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting To-do List ticker");

    // Install panic hook to log panics
    let next = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Application panic: {}", info);
        next(info);
    }));

    // Try wgpu first, fall back to glow (OpenGL) on systems without
    // DirectX 12 / Vulkan support.
    if let Err(wgpu_err) = run_with_renderer(eframe::Renderer::Wgpu) {
        tracing::warn!("wgpu renderer failed: {}. Trying glow fallback...", wgpu_err);
        if let Err(glow_err) = run_with_renderer(eframe::Renderer::Glow) {
            tracing::error!("Both wgpu and glow renderers failed!");
            tracing::error!("wgpu error: {}", wgpu_err);
            tracing::error!("glow error: {}", glow_err);
            return Err(anyhow::anyhow!(
                "No usable graphics renderer (wgpu: {wgpu_err}; glow: {glow_err})"
            ));
        }
    }

    Ok(())
}

/// Run the application with the specified renderer
fn run_with_renderer(renderer: eframe::Renderer) -> Result<(), anyhow::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_min_inner_size([320.0, 360.0])
            .with_title("To-do List ticker"),
        renderer,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "To-do List ticker",
        native_options,
        Box::new(move |cc| {
            setup_egui_style(&cc.egui_ctx);
            Ok(Box::new(TickerApp::new(cc)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

/// Setup egui visual style. Applied once at creation; the per-frame update
/// never touches visuals.
fn setup_egui_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    use egui::CornerRadius;
    style.visuals.widgets.noninteractive.corner_radius = CornerRadius::same(3);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(5);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(5);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(5);
    style.visuals.window_corner_radius = CornerRadius::same(8);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_setup_configures_the_context() {
        let ctx = egui::Context::default();
        setup_egui_style(&ctx);

        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(
            style.visuals.window_corner_radius,
            egui::CornerRadius::same(8)
        );
        assert_eq!(style.spacing.button_padding, egui::vec2(10.0, 4.0));
    }
}
