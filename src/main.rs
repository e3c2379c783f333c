use nautical::{GeoPoint, point_within_range};
use nautical::app_config::AppConfig;
use std::io::{self, BufRead};
use tracing::{debug, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    let location = config.location();
    let field_order = config.feed().field_order();
    let meters = config.range().meters();
    info!("✅  Loaded configuration, reference location {}", location);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let point = GeoPoint::parsed(&line, field_order);
        debug!("Parsed '{}' as {:?}", line, point);

        let distance = location.distance_to(&point);
        if point_within_range(location, &point, meters) {
            info!("🟢 {} is {:.0} m away, within {} m", point, distance, meters);
        } else {
            info!("⚪ {} is {:.0} m away, outside {} m", point, distance, meters);
        }
    }

    info!("🔥 {} finished reading the feed", env!("CARGO_PKG_NAME"));
    Ok(())
}
