//! # pi_core: Numerical Kernels for Computing π
//!
//! ## Layer 1 (Foundation) Role
//!
//! pi_core is the bottom layer of the workspace and holds the only code with
//! algorithmic content:
//! - Alternating-series estimation of π (`series`)
//! - Integer-only digit spigot producing 800 digits of π (`spigot`)
//!
//! Both components are stateless and independent of each other. Neither can
//! fail: a non-positive term count simply sums zero terms, and the spigot takes
//! no arguments.
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with one external
//! dependency:
//! - num-traits: generic floating-point summation (`f32` / `f64`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pi_core::series::estimate;
//! use pi_core::spigot::{produce_digits, GROUP_COUNT};
//!
//! // Slow but steady: 1 - 1/3 + 1/5 - ...
//! let approx = estimate(100_000);
//! assert!((approx - std::f64::consts::PI).abs() < 1e-4);
//!
//! // Exact digits, four at a time
//! let groups: Vec<String> = produce_digits().map(|g| g.to_string()).collect();
//! assert_eq!(groups.len(), GROUP_COUNT);
//! assert_eq!(groups[0], "3141");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod series;
pub mod spigot;

pub use series::{estimate, estimate_with, truncation_bound};
pub use spigot::{pi_digits, produce_digits, DigitGroup, DigitSpigot};
