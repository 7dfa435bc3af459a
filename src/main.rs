use tracing_subscriber::EnvFilter;

mod core;
mod gui;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = gui::launch::launch() {
        tracing::error!("failed to start: {e}");
        std::process::exit(1);
    }
}
