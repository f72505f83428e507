mod app;
mod utils;
mod api;
mod contacts;
mod summary;
mod ui;
mod storage;

use adw::prelude::*;
use adw::Application;

static GLIB_LOGGER: glib::GlibLogger = glib::GlibLogger::new(
    glib::GlibLoggerFormat::Plain,
    glib::GlibLoggerDomain::CrateTarget,
);

fn main() {
    let _ = log::set_logger(&GLIB_LOGGER);
    log::set_max_level(log::LevelFilter::Debug);

    let app = Application::builder()
        .application_id("com.example.TaskdeskGtk")
        .build();
    app.connect_activate(|app| {
        if let Err(e) = crate::storage::init() {
            log::warn!("Cache unavailable: {}", e);
        }
        crate::app::build_ui(app);
    });
    app.run();
}
