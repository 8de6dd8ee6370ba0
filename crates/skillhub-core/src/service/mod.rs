//! Business logic services (use cases).
//!
//! Services sit between the boundary layers and the repository traits
//! (ports) -- never concrete infrastructure implementations.

pub mod skill;
