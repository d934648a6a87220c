//! # POB KPI Dashboard
//!
//! Library half of the `pob-kpi` binary: the HTTP API, the CLI, and the
//! configuration they share. The classification engine lives in
//! `pob-kpi-core`.

pub mod api;
pub mod cli;
pub mod config;
