//! # Engine Module
//!
//! This module implements the rule-based typing engine of atomtyper: the
//! fixed-point orchestration that assigns OPLS-aa type identifiers to the
//! atoms of a molecular graph.
//!
//! ## Overview
//!
//! Typing is an iterative graph-labeling process. Each pass dispatches every
//! atom to an element-specific rule group; rules match local structural
//! patterns (neighbor-kind counts, bounded ring membership, the resolved
//! types of neighboring atoms) and record their verdicts in per-atom
//! whitelist/blacklist sets. Because some rules depend on the labels of
//! neighbors that may not be resolved yet, the orchestrator repeats passes
//! until the label sets stop growing or an iteration cap is reached.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Pass cap and ring-search parameters
//! - **Label State** ([`labels`]) - Per-atom whitelist/blacklist sets
//! - **Ring Search** ([`rings`]) - Depth-bounded simple-cycle enumeration
//! - **Rules** ([`rules`]) - The registry and the pattern rules per type
//! - **Orchestration** ([`typer`]) - The fixed-point typing run and report
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod labels;
pub(crate) mod neighbors;
pub mod rings;
pub mod rules;
pub mod typer;
