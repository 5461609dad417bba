//! AHP Engine - Analytic Hierarchy Process for multi-criteria decisions
//!
//! This crate derives criterion weights from pairwise judgments, reports how
//! consistent those judgments are, ranks alternatives by weighted score, and
//! tests how stable the ranking is under weight perturbation.

pub mod config;
pub mod domain;
