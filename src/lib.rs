//! CareLog demo fixture reset-and-seed pipeline.
//!
//! The CareLog portal ships with a fixed demo dataset (two patients, each
//! with nested appointments and prescriptions). This crate tears down any
//! previously-created demo identities and deterministically repopulates the
//! hosted store, tolerating identities that already exist so the pipeline is
//! safe to re-run.
//!
//! Modules:
//! - `seed` — the pipeline itself (reset coordinator, seed loader, driver)
//! - `api` — HTTP collaborators (GoTrue-style auth, PostgREST-style store)
//! - `dataset` — the fixed demo dataset
//! - `config` — environment-driven configuration

pub mod api;
pub mod config;
pub mod dataset;
pub mod seed;
