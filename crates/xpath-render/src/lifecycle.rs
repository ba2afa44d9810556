//! Per-input resource release.
//!
//! Each resource acquired while processing an input is wrapped in a
//! [`Held`] guard tied to that input's [`Scope`]. Guards are only created
//! for resources that were actually acquired, and locals drop in reverse
//! declaration order, so an early `?` return releases exactly what was
//! acquired so far, newest first, once.

use std::cell::RefCell;
use std::fmt;
use std::ops::{Deref, DerefMut};

use log::trace;

/// Kinds of resource acquired while processing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Buffer,
    Tree,
    Context,
    Result,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Buffer => "document buffer",
            Stage::Tree => "document tree",
            Stage::Context => "evaluation context",
            Stage::Result => "query result",
        };
        f.write_str(name)
    }
}

/// Release bookkeeping for one input
#[derive(Debug)]
pub struct Scope {
    label: String,
    released: RefCell<Vec<Stage>>,
}

impl Scope {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            released: RefCell::new(Vec::new()),
        }
    }

    /// Label of the input this scope belongs to
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Take ownership of an acquired resource until the guard drops
    pub fn hold<T>(&self, stage: Stage, value: T) -> Held<'_, T> {
        trace!("{}: acquired {}", self.label, stage);
        Held {
            scope: self,
            stage,
            value,
        }
    }

    /// Stages released so far, in release order
    pub fn released(&self) -> Vec<Stage> {
        self.released.borrow().clone()
    }
}

/// A resource owned by a [`Scope`], released when dropped
pub struct Held<'s, T> {
    scope: &'s Scope,
    stage: Stage,
    value: T,
}

impl<T> Deref for Held<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Held<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for Held<'_, T> {
    fn drop(&mut self) {
        trace!("{}: releasing {}", self.scope.label, self.stage);
        self.scope.released.borrow_mut().push(self.stage);
    }
}
