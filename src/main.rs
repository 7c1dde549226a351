mod config;
mod controller;
mod display;
mod network;
mod widget;

/// The widget's entry-point.
///
/// Reads the config, then polls the race endpoint indefinitely.
/// A failed poll draws an error table; the next tick starts fresh.
#[tokio::main]
async fn main() {
    use dotenv::dotenv;

    use config::{Config, Theme};
    use controller::GridController;
    use display::TerminalGrid;

    // Read environment variables from an '.env' file in the working directory.
    // We use these env vars:
    //  - RUST_LOG
    //  - RACEGRID_CONFIG
    let using_env_file = dotenv().is_ok();

    env_logger::init(); // Use log::* to write to stderr

    if using_env_file {
        log::info!("using .env file")
    }

    let config = Config::read_from_env();
    let theme = Theme::from_param(config.theme.as_deref());
    let target = TerminalGrid::new(theme);

    log::info!(
        "polling {} every {}ms",
        config.race_url(),
        config.poll_interval_millis
    );

    let mut controller = GridController::new(&config, Box::new(target));
    controller.run().await;
}
