//! A library for reasoning about knowledge and conditional belief in a limited first-order epistemic logic.
//!
//! otter_belief answers queries about what a knowledge base knows, what is consistent with what it knows, and what it believes conditionally.
//! Reasoning is *limited*, in the sense that each modal operator carries a split level which bounds the case analysis made when testing entailment or consistency.
//! At each fixed split level reasoning is sound with respect to the classical semantics, and decidable, even for first-order formulas with quantifiers and functions.
//!
//! # Orientation
//!
//! The library is built around a [knowledge base](crate::kb).
//!
//! A knowledge base holds:
//! - Hard clauses, universally quantified disjunctions of equality literals, which are known.
//! - Conditional beliefs `A ⇒ C`, which are arranged into a *system of spheres* ordered by plausibility.
//! - Facts about the real world, which need not be known.
//!
//! Queries are [formulas](crate::structures::formula) which may mix objective parts with knowledge, consistency, and belief.
//! A query is decided by [reducing](crate::kb) each modal part to a test of entailment or consistency against some sphere, where each sphere is an [objective solver](crate::solver).
//!
//! Useful starting points, then, may be:
//! - The [knowledge base](crate::kb) to see how spheres are built and queries are reduced.
//! - The [solver module](crate::solver) for limited entailment and consistency of objective formulas.
//! - The [structures] to familiarise yourself with the representation of terms, literals, clauses, and formulas.
//! - The [databases](crate::db) which hold terms and ground clauses.
//! - The [configuration](crate::config) to see what may be tuned.
//!
//! # Example
//!
//! Birds are believed to fly.
//! Penguins are believed to be birds which do not fly.
//!
//! ```rust
//! # use otter_belief::config::Config;
//! # use otter_belief::kb::KnowledgeBase;
//! # use otter_belief::structures::formula::Formula;
//! # use otter_belief::structures::literal::TermLiteral;
//! let mut kb = KnowledgeBase::from_config(Config::default());
//!
//! let boolean = kb.terms.fresh_sort().unwrap();
//! let t = kb.terms.fresh_name(boolean).unwrap();
//!
//! let atom = |kb: &mut KnowledgeBase| {
//!     let symbol = kb.terms.fresh_function(boolean, 0).unwrap();
//!     let term = kb.terms.apply(symbol, []).unwrap();
//!     Formula::literal(TermLiteral::equality(term, t))
//! };
//!
//! let bird = atom(&mut kb);
//! let penguin = atom(&mut kb);
//! let flies = atom(&mut kb);
//!
//! assert!(kb.add(&Formula::bel(1, 1, bird.clone(), flies.clone())).is_ok());
//! assert!(kb.add(&Formula::bel(1, 1, penguin.clone(), bird.clone())).is_ok());
//! assert!(kb.add(&Formula::bel(1, 1, penguin.clone(), !flies.clone())).is_ok());
//!
//! assert_eq!(kb.entails(&Formula::bel(1, 1, bird.clone(), flies.clone())), Ok(true));
//! assert_eq!(kb.entails(&Formula::bel(1, 1, penguin.clone(), !flies.clone())), Ok(true));
//! assert_eq!(kb.entails(&Formula::bel(1, 1, penguin, flies)), Ok(false));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout the library, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the construction of spheres can be filtered with `RUST_LOG=spheres …` or,
//! - The outcome of each query, without details of the reduction, can be found with `RUST_LOG=reduction=info …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;
pub mod solver;

pub mod kb;

pub mod misc;
