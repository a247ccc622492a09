//! The fixed dongle pool written on first run.

use std::collections::BTreeMap;

use super::model::Dongle;

/// `(id, display name)` of every dongle the tracker manages.
const POOL: &[(&str, &str)] = &[
    ("davinci-configurator-1", "DaVinci Configurator #1"),
    ("davinci-configurator-2", "DaVinci Configurator #2"),
    ("davinci-developer", "DaVinci Developer"),
];

/// Builds the seed pool with every dongle available.
pub fn default_pool() -> BTreeMap<String, Dongle> {
    POOL.iter()
        .map(|(id, name)| (id.to_string(), Dongle::available(*name)))
        .collect()
}
