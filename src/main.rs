use anyhow::Result;
use numguess::core::rng::RngSource;
use numguess::core::terminal::TerminalContext;
use numguess::games::rand_num;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with the game on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    rand_num::run_game(&mut RngSource::thread(), stdin.lock(), TerminalContext::stdout())?;
    Ok(())
}
