//! Path reconstruction from the recorded next-landmark choices.

use landmark_core::{ORIGIN, SolveError, Tour};

use crate::solver::DpContext;
use crate::table::VisitedSet;

impl DpContext<'_> {
    /// Replay the stored choices from `(set, position)` to the terminal state.
    ///
    /// The walk includes `position` itself and ends at the last landmark
    /// before the return to the origin.
    ///
    /// # Errors
    /// Returns [`SolveError::InconsistentTable`] when a state on the path is
    /// uncomputed, when a stored choice is out of range or already visited,
    /// or when a terminal marker appears before every landmark is visited.
    pub fn walk(&self, set: VisitedSet, position: usize) -> Result<Vec<usize>, SolveError> {
        let mut order = Vec::with_capacity(self.landmark_count());
        self.unwind(set, position, &mut order)?;
        // Unwinding pushes the innermost state first.
        order.reverse();
        Ok(order)
    }

    /// The optimal tour from the start state, origin excluded at both ends.
    ///
    /// # Errors
    /// Propagates errors from [`Self::walk`].
    pub fn tour(&self) -> Result<Tour, SolveError> {
        let walk = self.walk(VisitedSet::start(), ORIGIN)?;
        Ok(Tour::new(walk.into_iter().skip(1).collect()))
    }

    fn unwind(
        &self,
        set: VisitedSet,
        position: usize,
        order: &mut Vec<usize>,
    ) -> Result<(), SolveError> {
        let cell = self
            .table()
            .get(set, position)
            .ok_or_else(|| self.inconsistent(set, position))?;
        match cell.next() {
            None if set == self.full_set() => {}
            None => return Err(self.inconsistent(set, position)),
            Some(next) if next >= self.landmark_count() || set.contains(next) => {
                return Err(self.inconsistent(set, position));
            }
            Some(next) => self.unwind(set.with(next), next, order)?,
        }
        order.push(position);
        Ok(())
    }
}
