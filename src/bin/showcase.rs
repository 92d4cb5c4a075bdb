//! Tabbed feature showcase

use arcade_demos::demos::ShowcaseDemo;
use arcade_demos::{Settings, logging, platform};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let settings = Settings::load();
    platform::run(ShowcaseDemo::new(&settings))
}
