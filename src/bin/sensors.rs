//! Simulated sensor dashboard

use arcade_demos::demos::SensorDemo;
use arcade_demos::{Settings, logging, platform};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let seed = Settings::load().seed_or_random();
    log::info!("Sensor noise seed: {}", seed);
    platform::run(SensorDemo::new(seed))
}
