//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent
//! molecular graphs in atomtyper, providing the foundation the typing engine
//! operates on.
//!
//! ## Overview
//!
//! The models module defines the abstractions for molecular structure as the
//! typer sees it: atoms carrying an element kind, undirected bonds between
//! them, and a graph that owns both and caches connectivity. These models are
//! designed to:
//!
//! - **Represent connectivity** - Complete description of atoms and bonds
//! - **Support efficient traversal** - Cached adjacency and incident-bond
//!   lists for neighbor queries
//! - **Maintain type safety** - Slot-map keys for atom identity, strong
//!   typing for element kinds and bond orders
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom representation with a name and element kind
//! - [`element`] - Supported element kinds, including the ghost sentinel for
//!   open attachment points
//! - [`topology`] - Bond representation and bond orders
//! - [`system`] - The molecule graph owning atoms, bonds, and adjacency
//! - [`builder`] - Fluent construction of molecule graphs
//! - [`ids`] - Unique identifier types for atoms
//!
//! ## Usage
//!
//! ```ignore
//! use atomtyper::core::models::{builder::MoleculeBuilder, element::ElementKind};
//!
//! let mut builder = MoleculeBuilder::new();
//! let c = builder.atom("C1", ElementKind::Carbon);
//! let h = builder.atom("H1", ElementKind::Hydrogen);
//! builder.bond(c, h);
//! let graph = builder.build();
//! ```

pub mod atom;
pub mod builder;
pub mod element;
pub mod ids;
pub mod system;
pub mod topology;
