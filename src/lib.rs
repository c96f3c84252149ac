//! Registro CLI - Terminal-based inspection-fee registration manager
//!
//! This library provides the core functionality for recording, browsing,
//! summarizing, and exporting inspection-fee registration records for a
//! single local user.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (registrations, months, money, ids)
//! - `storage`: Persistence port and JSON file storage
//! - `services`: Business logic (store, filter engine, summaries)
//! - `export`: CSV and PDF serialization
//! - `display`: Terminal formatting
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{RegistroError, RegistroResult};
