//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering

pub mod gauge_ring;

pub use gauge_ring::GaugeRing;
