//! # Tenor Math
//!
//! Numerical building blocks for the Tenor curve bootstrapping kernel.
//!
//! This crate provides:
//!
//! - **Solvers**: One-dimensional root finding (bracket-preserving secant,
//!   domain-clamped Newton-Raphson)
//!
//! Solvers never panic and never return early with an error on
//! non-convergence. A failed solve yields a [`SolverResult`](solvers::SolverResult)
//! whose root is NaN, so the failure propagates through downstream arithmetic
//! until a caller chooses to check it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton, secant, Domain, NewtonSolver, SecantSolver, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
