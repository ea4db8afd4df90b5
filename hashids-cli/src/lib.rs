//! # Hashids command line tool
//!
//! Encodes numbers, hex strings and timestamps into hashes and decodes them
//! again, with the codec configured from a TOML file and `HASHIDS_`
//! environment variables.

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
