//! # Core Module
//!
//! This module provides the fundamental building blocks for representing
//! molecular graphs in atomtyper, serving as the data foundation of the
//! library.
//!
//! ## Overview
//!
//! The core module implements the essential data structures the typing engine
//! consumes: element kinds, atoms, bonds, and the molecule graph that ties
//! them together. It deliberately contains no typing logic; the engine layer
//! only requires read access to atoms, their element kinds, and their bond
//! connectivity.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms,
//!   bonds, and the molecule graph, plus a fluent builder for programmatic
//!   construction

pub mod models;
