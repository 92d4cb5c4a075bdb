//! Space shooter

use arcade_demos::demos::ShooterDemo;
use arcade_demos::{Settings, logging, platform};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let settings = Settings::load();
    log::info!(
        "Space shooter starting ({} quality, {:?} input)",
        settings.quality.as_str(),
        settings.input
    );
    platform::run(ShooterDemo::new(&settings))
}
