//! # pricer_core: Foundation Types for the Lattice Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option vocabulary: `OptionType`, `ExerciseStyle` (`types::option`)
//! - Error types: `PricingError`, `ConfigError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ExerciseStyle, OptionType, PricingError};
//!
//! let call = OptionType::Call;
//! assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
//! assert!(ExerciseStyle::American.allows_early_exercise());
//!
//! let err = PricingError::InvalidParameter { name: "spot", value: -1.0 };
//! assert!(err.to_string().contains("spot"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `ExerciseStyle`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
