//! Configuration management for the toroidal Life simulator

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, LibraryConfig, LogLevel, LoggingConfig, Settings, SimulationConfig,
};
