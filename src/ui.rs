//! UI module for the risk gauge application
//! Dark mode aesthetic with neon accents
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level `canvas::Program` implementations
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Animation** (`animation`): Declarative animation state managers

pub mod animation;
pub mod components;
pub mod primitives;
pub mod theme;
