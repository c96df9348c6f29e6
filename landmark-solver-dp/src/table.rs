//! Visited-set masks and the memo table indexed by `(mask, position)`.

use std::mem::size_of;

/// Largest landmark count whose visited set fits the `u32` mask without the
/// full-set computation `(1 << N) - 1` overflowing.
pub const MAX_MASK_WIDTH: usize = 31;

/// Bitset of visited landmarks; bit `k` is set once landmark `k` is visited.
///
/// # Examples
/// ```
/// use landmark_solver_dp::VisitedSet;
///
/// let start = VisitedSet::start();
/// assert!(start.contains(0));
/// let next = start.with(2);
/// assert_eq!(next.bits(), 0b101);
/// assert_eq!(next.unvisited(3).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(VisitedSet::full(3).map(VisitedSet::bits), Some(0b111));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisitedSet(u32);

impl VisitedSet {
    /// The start state: only the origin visited.
    #[must_use]
    pub const fn start() -> Self {
        Self(1)
    }

    /// Every one of `count` landmarks visited, or `None` when `count` is zero
    /// or wider than [`MAX_MASK_WIDTH`].
    #[must_use]
    pub const fn full(count: usize) -> Option<Self> {
        if count == 0 || count > MAX_MASK_WIDTH {
            return None;
        }
        Some(Self((1_u32 << count) - 1))
    }

    /// Wrap raw mask bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw mask bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether landmark `landmark` has been visited.
    #[must_use]
    pub const fn contains(self, landmark: usize) -> bool {
        landmark < MAX_MASK_WIDTH && self.0 & (1_u32 << landmark) != 0
    }

    /// The set with `landmark` added. Landmarks beyond the mask are ignored.
    #[must_use]
    pub const fn with(self, landmark: usize) -> Self {
        if landmark >= MAX_MASK_WIDTH {
            return self;
        }
        Self(self.0 | (1_u32 << landmark))
    }

    /// Whether the set only contains landmarks below `count`.
    #[must_use]
    pub const fn fits(self, count: usize) -> bool {
        match Self::full(count) {
            Some(full) => self.0 & !full.0 == 0,
            None => false,
        }
    }

    /// Landmarks below `count` not yet visited, in increasing index order.
    pub fn unvisited(self, count: usize) -> impl Iterator<Item = usize> {
        (0..count.min(MAX_MASK_WIDTH)).filter(move |&landmark| !self.contains(landmark))
    }

    /// Landmarks below `count` already visited, in increasing index order.
    pub fn members(self, count: usize) -> impl Iterator<Item = usize> {
        (0..count.min(MAX_MASK_WIDTH)).filter(move |&landmark| self.contains(landmark))
    }
}

/// A computed state: the best remaining score and the landmark to visit next.
///
/// `next` is `None` only for terminal states, where every landmark has been
/// visited and the tour returns to the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateCell {
    score: f64,
    next: Option<u8>,
}

impl StateCell {
    /// A terminal state scoring the closing leg back to the origin.
    #[must_use]
    pub const fn terminal(score: f64) -> Self {
        Self { score, next: None }
    }

    /// A state continuing to `next`. `None` when `next` cannot be a landmark
    /// index.
    #[must_use]
    pub fn continue_to(score: f64, next: usize) -> Option<Self> {
        if next >= MAX_MASK_WIDTH {
            return None;
        }
        let index = u8::try_from(next).ok()?;
        Some(Self {
            score,
            next: Some(index),
        })
    }

    /// Best attractiveness achievable from this state back to the origin.
    #[must_use]
    pub const fn score(self) -> f64 {
        self.score
    }

    /// Landmark chosen next on the optimal continuation.
    #[must_use]
    pub fn next(self) -> Option<usize> {
        self.next.map(usize::from)
    }
}

/// Memo table with one optional cell per `(mask, position)` pair.
///
/// An empty cell means "not yet computed"; there is no numeric sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTable {
    count: usize,
    cells: Vec<Option<StateCell>>,
}

impl StateTable {
    /// Bytes a table for `count` landmarks occupies, or `None` on overflow.
    ///
    /// # Examples
    /// ```
    /// use landmark_solver_dp::StateTable;
    ///
    /// assert!(StateTable::required_bytes(4).is_some());
    /// assert!(StateTable::required_bytes(200).is_none());
    /// ```
    #[must_use]
    pub fn required_bytes(count: usize) -> Option<u64> {
        let width = u32::try_from(count).ok()?;
        let masks = 1_u64.checked_shl(width)?;
        let cell = u64::try_from(size_of::<Option<StateCell>>()).ok()?;
        masks
            .checked_mul(u64::try_from(count).ok()?)?
            .checked_mul(cell)
    }

    /// Allocate an empty table. Callers check [`Self::required_bytes`] first.
    pub(crate) fn new(count: usize) -> Self {
        let masks = 1_usize << count.min(MAX_MASK_WIDTH);
        Self {
            count,
            cells: vec![None; masks * count],
        }
    }

    fn offset(&self, set: VisitedSet, position: usize) -> Option<usize> {
        if position >= self.count {
            return None;
        }
        usize::try_from(set.bits())
            .ok()?
            .checked_mul(self.count)?
            .checked_add(position)
    }

    /// The computed cell for a state, if any.
    #[must_use]
    pub fn get(&self, set: VisitedSet, position: usize) -> Option<StateCell> {
        let offset = self.offset(set, position)?;
        self.cells.get(offset).copied().flatten()
    }

    /// Record a computed cell. Returns `false` when the state is outside the
    /// table.
    pub(crate) fn insert(&mut self, set: VisitedSet, position: usize, cell: StateCell) -> bool {
        let Some(offset) = self.offset(set, position) else {
            return false;
        };
        match self.cells.get_mut(offset) {
            Some(slot) => {
                *slot = Some(cell);
                true
            }
            None => false,
        }
    }

    /// Number of computed cells.
    #[must_use]
    pub fn computed(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Landmark count the table was sized for.
    #[must_use]
    pub const fn landmark_count(&self) -> usize {
        self.count
    }
}
