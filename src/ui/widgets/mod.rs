//! Reusable UI widget components.
//!
//! This module contains styling utilities and the wheel slice palette.

pub mod styling;
