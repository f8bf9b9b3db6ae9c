pub mod cache_ports;
pub mod config_ports;
pub mod translation_ports;
