//! Riskdial - an animated circular risk gauge
//! Built with iced, dark mode first

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(iced::Size::new(420.0, 640.0))
        .run()
}
