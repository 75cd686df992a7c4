//! Public models.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Today there is only
//! [`thermal`], which holds the body-temperature model.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the heat-transfer physics lives. The `core` module is an implementation
//! detail; the stateful wrapper and the [`twine_core::Model`] adapters delegate
//! to it.

pub mod thermal;
