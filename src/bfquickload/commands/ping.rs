use crate::config::CatalogConfig;
use crate::model::PingInfo;

pub fn run(config: &CatalogConfig) -> PingInfo {
    PingInfo {
        app_name: config.app_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}
