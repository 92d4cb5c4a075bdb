//! Platform bring-up check

use arcade_demos::demos::PlatformCheck;
use arcade_demos::{logging, platform};

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    log::info!(
        "Platform check: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    platform::run(PlatformCheck::new())
}
