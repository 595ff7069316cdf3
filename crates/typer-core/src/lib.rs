//! # Atomtyper Core Library
//!
//! A rule-based atom-typing engine that assigns OPLS-aa force-field type
//! identifiers to the atoms of a molecular graph.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction,
//! keeping the data model free of any typing logic.
//!
//! - **[`core`]: The Foundation.** Stateless data structures: element kinds,
//!   atoms, bonds, the [`core::models::system::MoleculeGraph`] arena, and a
//!   builder for programmatic construction. The graph exposes a read-only
//!   view (atoms, bonds, neighbors) that the engine consumes; nothing in this
//!   layer knows about force-field types.
//!
//! - **[`engine`]: The Logic Core.** The stateful typing run. A
//!   [`engine::typer::Typer`] owns all per-run state (per-atom
//!   whitelist/blacklist label sets, the memoized neighbor-count cache, and
//!   the rule registry) and drives repeated passes over the graph until the
//!   label sets reach a fixed point. Pattern rules live in
//!   [`engine::rules`], the bounded ring search in [`engine::rings`].
//!
//! The entry point for most callers is
//! [`engine::typer::assign_atom_types`], which runs a typing pass with the
//! default [`engine::config::TyperConfig`] and returns a
//! [`engine::typer::TypingReport`] mapping every non-ghost atom to its
//! confirmed and excluded type identifiers.

pub mod core;
pub mod engine;
