//! Composite termination conditions (AND/OR).
//!
//! Implemented for tuples of terminations.

use super::Termination;
use crate::restart::RestartScope;

/// Terminates when ANY wrapped termination does.
///
/// # Example
///
/// ```
/// use queenclimb_solver::termination::{OrTermination, RestartCountTermination, TimeTermination};
///
/// // Stop after 500 restarts or 10 seconds, whichever comes first.
/// let termination = OrTermination::new((
///     RestartCountTermination::new(500),
///     TimeTermination::seconds(10),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Terminates only when ALL wrapped terminations do.
#[derive(Debug, Clone)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    /// Creates a new AND termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_composite_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &RestartScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }

        impl<$($T),+> Termination for AndTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &RestartScope) -> bool {
                $((self.0).$idx.is_terminated(scope))&&+
            }
        }
    };
}

impl_composite_termination!(0: T0);
impl_composite_termination!(0: T0, 1: T1);
impl_composite_termination!(0: T0, 1: T1, 2: T2);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3);
