//! Core business logic module
//!
//! This module contains all business logic for kali-arm-docs.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`catalog`] - Device catalog model and loading
//! - [`traverse`] - Vendor → board → image walk
//! - [`tally`] - Per-report counters
//! - [`derive`] - Links, natural sort and status columns
//! - [`markdown`] - Table and page rendering
//! - [`reports`] - The Markdown reports built from `devices.yml`
//! - [`kernels`] - NetHunter kernel catalog and reports
//! - [`release`] - Release and imager manifests

pub mod catalog;
pub mod derive;
pub mod kernels;
pub mod markdown;
pub mod release;
pub mod reports;
pub mod tally;
pub mod traverse;
