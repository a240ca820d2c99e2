//! # Pricer Models (L2: Business Logic)
//!
//! Contract terms, payoff evaluators, and binomial lattice parameterisations.
//!
//! This crate provides:
//! - Contract definitions (`instruments::ContractParams`)
//! - Payoff evaluation as a closed sum type (`instruments::PayoffEvaluator`)
//! - Discretisation schemes for recombining lattices (`models::LatticeModel`)
//! - Analytical formulas for validation and volatility estimation
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs and models** for static dispatch
//! - **Raw numerics below, validation above**: parameterisations never reject
//!   inputs; `ContractParams::new` is the validating entry point

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
