//! File output for computed quotes.

pub mod export;
