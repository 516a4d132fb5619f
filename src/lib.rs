//! AHP Sherpa - Analytic Hierarchy Process engine
//!
//! This crate turns pairwise judgments ("A matters 3 times as much as B")
//! into normalized priority weights, checks them for consistency, and
//! synthesizes global rankings of alternatives across a criteria hierarchy.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
