//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`] (error suppression).

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Inverter<B> {
    child: B,
}

impl<B> Inverter<B> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: B) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &B {
        &self.child
    }
}

impl<C, B> Behavior<C> for Inverter<B>
where
    B: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Always returns `Success`, regardless of the child's result.
///
/// Useful for optional steps that shouldn't cause a sequence to fail.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AlwaysSucceed<B> {
    child: B,
}

impl<B> AlwaysSucceed<B> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: B) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &B {
        &self.child
    }
}

impl<C, B> Behavior<C> for AlwaysSucceed<B>
where
    B: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        // Execute child but ignore the result
        let _ = self.child.tick(ctx);
        Status::Success
    }
}
