//! Bouncing ball

use arcade_demos::demos::BounceDemo;
use arcade_demos::{logging, platform};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    platform::run(BounceDemo::new())
}
