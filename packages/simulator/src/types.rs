//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, written as games finish
    Jsonl,
    /// A single JSON array, written at the end
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricsLevel {
    /// Results only
    Basic,
    /// Results plus the full trade log and turn log
    Detailed,
}
