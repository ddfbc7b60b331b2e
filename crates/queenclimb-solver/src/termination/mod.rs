//! Termination conditions for random restart.
//!
//! A termination is checked after every attempt that failed to reach the
//! goal. Without one, random restart keeps going until a solution is found,
//! which never happens for board sizes 2 and 3.

mod composite;
mod restart_count;
mod time;

use std::fmt::Debug;

use crate::restart::RestartScope;

pub use composite::{AndTermination, OrTermination};
pub use restart_count::RestartCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop restarting.
pub trait Termination: Send + Debug {
    /// Returns true if no further attempt should be started.
    fn is_terminated(&self, scope: &RestartScope) -> bool;
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _scope: &RestartScope) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &RestartScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, scope: &RestartScope) -> bool {
        (**self).is_terminated(scope)
    }
}

#[cfg(test)]
mod tests;
