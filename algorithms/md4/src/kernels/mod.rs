//! MD4 Kernels
//!
//! The three stages of a digest computation, in data-flow order:
//! [`padding`] -> [`compress`] -> [`finalize`].

pub mod compress;
pub mod constants;
pub mod finalize;
pub mod padding;
