//! Daily Cultivator - Tiered Entitlement & Membership Core
//!
//! This crate implements the entitlement evaluator and membership registrar
//! for the Daily Cultivator productivity app: per-tier resource limits,
//! permanent membership numbering, and global membership statistics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
