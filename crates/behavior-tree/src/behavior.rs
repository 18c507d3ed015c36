//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to access game state and make decisions.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   game state and modify it (e.g., to record emitted intents).
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// Covers both `Box<dyn Behavior<C>>` (heterogeneous trees) and `Box<N>` for a
/// concrete node type `N`, which recursive node enums need for decorators.
impl<C, B> Behavior<C> for Box<B>
where
    B: Behavior<C> + ?Sized,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
