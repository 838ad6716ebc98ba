use hozur::commands::Cli;
use hozur::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = Cli::menu() {
        tracing::error!(error = %format!("{err:#}"), "command failed");
        msg_error!(format!("{err:#}"));
        std::process::exit(1);
    }
}
