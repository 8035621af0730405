//! hand_swarm — interactive entry point.

use clap::Parser;
use hand_swarm::app::run;
use hand_swarm::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG overrides -v / -q
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
    )
    .init();

    #[cfg(feature = "leap")]
    log::info!("mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    log::info!("mode: keyboard simulation (use --features leap for hardware)");

    if let Err(e) = run(cli.app_config()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
