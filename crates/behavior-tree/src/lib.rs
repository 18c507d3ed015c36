//! Lightweight behavior tree library optimized for turn-based games.
//!
//! Trees are walked from the root on every tick and keep no execution state
//! between ticks, which suits turn-based AI where each actor decides once per
//! turn.
//!
//! - **No delta time**: Every tick completes immediately
//! - **Stateless nodes**: Re-walking a tree with the same context gives the same result
//! - **Generic children**: Composites are generic over their child node type, so a
//!   closed data enum can embed them directly instead of boxing trait objects
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]

pub mod behavior;
pub mod composite;
pub mod decorator;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use status::Status;
