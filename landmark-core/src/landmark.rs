//! Named landmarks with a fixed origin at index 0.

use std::collections::HashMap;

use thiserror::Error;

/// Index of the origin every tour starts from and returns to.
pub const ORIGIN: usize = 0;

/// Ordered landmark names with a name-to-index map built once.
///
/// Index 0 is the origin. The set is immutable after construction.
///
/// # Examples
/// ```
/// use landmark_core::{LandmarkSet, ORIGIN};
///
/// # fn main() -> Result<(), landmark_core::LandmarkSetError> {
/// let landmarks = LandmarkSet::new(["Hotel", "Museum", "Harbour"])?;
/// assert_eq!(landmarks.len(), 3);
/// assert_eq!(landmarks.origin_name(), "Hotel");
/// assert_eq!(landmarks.index_of("Harbour"), Some(2));
/// assert_eq!(landmarks.name(ORIGIN), Some("Hotel"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkSet {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

/// Errors returned by [`LandmarkSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkSetError {
    /// No landmarks were supplied, so there is not even an origin.
    #[error("at least one landmark (the origin) is required")]
    Empty,
    /// A landmark name was empty or whitespace.
    #[error("landmark {index} has a blank name")]
    BlankName {
        /// Position of the offending entry.
        index: usize,
    },
    /// Two landmarks share a name.
    #[error("landmark name {name:?} appears at both {first} and {second}")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
    },
}

impl LandmarkSet {
    /// Validate and construct a landmark set. The first name is the origin.
    ///
    /// # Errors
    /// Returns [`LandmarkSetError`] for an empty list, a blank name or a
    /// repeated name.
    pub fn new<I, S>(names: I) -> Result<Self, LandmarkSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let owned: Vec<String> = names.into_iter().map(Into::into).collect();
        if owned.is_empty() {
            return Err(LandmarkSetError::Empty);
        }
        let mut index = HashMap::with_capacity(owned.len());
        for (position, name) in owned.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(LandmarkSetError::BlankName { index: position });
            }
            if let Some(&first) = index.get(name) {
                return Err(LandmarkSetError::DuplicateName {
                    name: name.clone(),
                    first,
                    second: position,
                });
            }
            index.insert(name.clone(), position);
        }
        Ok(Self {
            names: owned,
            index,
        })
    }

    /// Number of landmarks, origin included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; a valid set contains at least the origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the landmark at `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the landmark called `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the origin.
    #[must_use]
    pub fn origin_name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }

    /// Iterate over landmark names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
