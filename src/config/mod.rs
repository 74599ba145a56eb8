//! Configuration loaded from `cryptocore.toml`.

pub mod settings;

pub use settings::Settings;
