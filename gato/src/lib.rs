// ABOUTME: Library exports for gato modules for testing and external use
// ABOUTME: Makes internal modules available to the binary, integration tests and benchmarks

pub mod cli;
pub mod cli_output;
pub mod commands;
pub mod config;
pub mod constants;
pub mod emoji;
pub mod error;
pub mod image_protocols;
