//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::domain::config::AppConfig;
use crate::features::books::page::BooksPage;
use crate::services::books_client::{BookSource, BooksClient};

actions!(booktrack, [Quit]);

/// Run the BookTrack GUI application
pub fn run_app(config: AppConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let source: Arc<dyn BookSource> = match BooksClient::new(&config.api) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                tracing::error!("Invalid API configuration: {}", e);
                cx.quit();
                return;
            }
        };

        // Initialize shared entities
        let entities = AppEntities::init(cx);

        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("BookTrack")),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| BooksPage::new(entities.clone(), source.clone(), cx))
        }) {
            tracing::error!("Failed to open main window: {:?}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
