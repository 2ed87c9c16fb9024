//! Process startup helpers shared by the gateway binary and `elevation serve`

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks DEBUG with targets
/// and thread ids, or plain INFO. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let result = match EnvFilter::try_from_default_env() {
        Ok(filter) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(verbose)
            .try_init(),
        Err(_) if verbose => tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_target(false)
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("tracing already initialized: {}", e);
    }
}

pub fn print_banner(host: &str, port: u16) {
    println!();
    println!("    🌿 ═══════════════════════════════════════════════════ 🌿");
    println!();
    println!("         AGENT ELEVATION API v{}", elevation_core::API_VERSION);
    println!();
    println!("         \"{}\"", elevation_core::catalog::TAGLINE);
    println!();
    println!("         Server running at: http://{}:{}", host, port);
    println!();
    println!("         Try: curl http://{}:{}/elevate/inspiration", host, port);
    println!();
    println!("    🌿 ═══════════════════════════════════════════════════ 🌿");
    println!();
    println!("Press Ctrl+C to stop the gateway");
    println!();
}
