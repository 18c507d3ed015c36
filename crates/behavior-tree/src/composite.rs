//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both are generic over the child type `B`. Use `Box<dyn Behavior<C>>` for
//! heterogeneous trees built in code, or a concrete node enum for trees that
//! are described as data.

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure` or `Running`, the sequence **stops immediately**
///   and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// An empty sequence succeeds. This is analogous to a short-circuited
/// logical AND (&&) over an empty list being `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sequence<B> {
    children: Vec<B>,
}

impl<B> Sequence<B> {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<B>) -> Self {
        Self { children }
    }

    /// Returns the child behaviors in evaluation order.
    pub fn children(&self) -> &[B] {
        &self.children
    }
}

impl<C, B> Behavior<C> for Sequence<B>
where
    B: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                other => return other, // Short-circuit on Failure or Running
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// An empty selector fails. This is analogous to a short-circuited logical
/// OR (||) over an empty list being `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Selector<B> {
    children: Vec<B>,
}

impl<B> Selector<B> {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<B>) -> Self {
        Self { children }
    }

    /// Returns the child behaviors in evaluation order.
    pub fn children(&self) -> &[B] {
        &self.children
    }
}

impl<C, B> Behavior<C> for Selector<B>
where
    B: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue,
                other => return other, // Short-circuit on Success or Running
            }
        }
        Status::Failure
    }
}
