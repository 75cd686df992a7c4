//! Thermal systems models.
//!
//! This module contains models of heat exchange between an agent's body and
//! its surroundings.

pub mod body;
