use anyhow::{Context, Result};
use log::info;

mod engine;
mod error;
mod socd;

use engine::cleaner::{Cleaner, CleanerConfig};
use engine::console::Console;
use engine::input::EvdevKeyboard;
use engine::output::UinputKeyboard;

fn main() -> Result<()> {
    // The status line owns stdout, so only warnings show unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("Starting SOCD Cleaner...");

    let config = CleanerConfig::default();

    // Output first: without the virtual keyboard there is nothing to clean for
    let injector = UinputKeyboard::create().context("Synthetic input is unavailable")?;
    let keys = EvdevKeyboard::open(&config.bindings).context("Keyboard input is unavailable")?;
    info!("Sampling {} keyboard(s)", keys.device_count());

    let mut cleaner = Cleaner::new(config, keys, injector, Console::stdout())?;
    cleaner.run()
}
