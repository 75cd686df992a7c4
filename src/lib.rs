//! # Thermoreg Models
//!
//! Body-temperature dynamics for simulated legged agents.
//!
//! The crate provides a single-compartment energy-balance model that a
//! reinforcement-learning environment can step alongside its physics to
//! produce a thermoregulation (interoception) signal.
//!
//! ## Crate layout
//!
//! - [`models`]: The body thermal model and the tooling built around it.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use thermoreg_models::models::thermal::body::{Conditions, ThermalModel};
//! use uom::si::{f64::Time, time::second};
//!
//! let mut model = ThermalModel::new(38.0);
//!
//! let conditions = Conditions {
//!     action: &[0.0; 8],
//!     evaporative_action: -1.0,
//!     temp_air: 35.0,
//!     temp_earth: 40.0,
//!     is_shade: false,
//! };
//!
//! let body_temp = model.step(&conditions, Time::new::<second>(0.05));
//! assert!(body_temp > 38.0);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
