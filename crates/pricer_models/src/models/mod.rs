//! Lattice discretisation schemes.
//!
//! [`LatticeModel`] enumerates the supported binomial schemes with static
//! dispatch; the free functions compute each scheme directly from raw
//! scalars when no [`ContractParams`](crate::instruments::ContractParams)
//! is at hand.

pub mod binomial;

pub use binomial::{
    crr, jarrow_rudd, jky, leisen_reimer, peizer_pratt_inversion, plain, plain_drift, tian,
    trigeorgis, LatticeModel, LatticeParams,
};
