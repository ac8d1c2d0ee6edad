mod app;
mod config;
mod error;
mod input;
mod io;
mod layout;
mod message;
mod model;
mod state;
mod style;
mod subscription;
mod view;

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homefront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = config::Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = config::Config::load();
    let start = start_route();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 480.0])
            .with_title("KM&co Realty"),
        ..Default::default()
    };

    eframe::run_native(
        "Homefront",
        options,
        Box::new(|cc| Ok(Box::new(app::Homefront::new(cc, config, start)))),
    )
}

/// Optional deep link, e.g. `homefront /listing/65f0c2`.
fn start_route() -> model::Route {
    let Some(arg) = std::env::args().nth(1) else {
        return model::Route::Home;
    };
    model::Route::parse_strict(&arg).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring start route");
        model::Route::Home
    })
}
