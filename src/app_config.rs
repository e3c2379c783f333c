use crate::domain::{FieldOrder, GeoPoint};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    feed: Feed,
    location: GeoPoint,
    range: Range,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn range(&self) -> &Range {
        &self.range
    }
}

// NAUTICAL__LOCATION__LATITUDE overrides location.latitude
fn environment() -> Environment {
    Environment::with_prefix("NAUTICAL").prefix_separator("__").separator("__")
}

#[derive(Debug, Default, Deserialize)]
pub struct Feed {
    #[serde(default)]
    field_order: FieldOrder,
}

impl Feed {
    pub fn field_order(&self) -> FieldOrder {
        self.field_order
    }
}

#[derive(Debug, Deserialize)]
pub struct Range {
    meters: f64,
}

impl Range {
    pub fn meters(&self) -> f64 {
        self.meters
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                feed: Feed {
                    field_order: FieldOrder::LatFirst,
                },
                location: GeoPoint::new(51.8615899, 4.3580323, 0.0),
                range: Range { meters: 10_000.0 },
            },
        }
    }

    pub fn field_order(mut self, field_order: FieldOrder) -> Self {
        self.config.feed.field_order = field_order;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
