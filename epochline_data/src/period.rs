// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::DataError;

/// A named span of years, optionally nested under a parent period.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Period {
    /// Unique name; children refer to their parent by it.
    pub name: String,
    /// First year of the period.
    pub start: i32,
    /// Last year of the period. Never before `start` in a valid forest.
    pub end: i32,
    /// Name of the enclosing period, or `None` for a top-level period.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent: Option<String>,
    /// Fill color as given by the dataset (for example `"#8b4513"`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
}

impl Period {
    /// Creates a top-level period.
    #[must_use]
    pub fn new(name: impl Into<String>, start: i32, end: i32) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            parent: None,
            color: None,
        }
    }

    /// Nests this period under `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns `true` if the period has no parent.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// A validated set of periods linked into a forest by their `parent` names.
///
/// Construction checks every invariant once; afterwards lookups cannot fail.
/// Both [`PeriodForest::roots`] and [`PeriodForest::children_of`] yield
/// periods ordered by start year (ties keep dataset order).
#[derive(Clone, Debug, Default)]
pub struct PeriodForest {
    periods: Vec<Period>,
    by_name: HashMap<String, usize>,
    roots: Vec<usize>,
    children: Vec<Vec<usize>>,
}

impl PeriodForest {
    /// Builds a forest, rejecting reversed spans, duplicate names, dangling
    /// parents and parent cycles.
    pub fn new(periods: Vec<Period>) -> Result<Self, DataError> {
        let mut by_name = HashMap::with_capacity(periods.len());
        for (idx, period) in periods.iter().enumerate() {
            if period.start > period.end {
                return Err(DataError::ReversedPeriod {
                    name: period.name.clone(),
                    start: period.start,
                    end: period.end,
                });
            }
            if by_name.insert(period.name.clone(), idx).is_some() {
                return Err(DataError::DuplicatePeriod {
                    name: period.name.clone(),
                });
            }
        }

        let mut parent_of = Vec::with_capacity(periods.len());
        for period in &periods {
            let parent = match &period.parent {
                None => None,
                Some(parent) => match by_name.get(parent) {
                    Some(&idx) => Some(idx),
                    None => {
                        return Err(DataError::UnknownParent {
                            period: period.name.clone(),
                            parent: parent.clone(),
                        });
                    }
                },
            };
            parent_of.push(parent);
        }

        // A chain longer than the dataset must revisit a period.
        for (idx, period) in periods.iter().enumerate() {
            let mut current = parent_of[idx];
            let mut steps = 0;
            while let Some(next) = current {
                steps += 1;
                if next == idx || steps > periods.len() {
                    return Err(DataError::ParentCycle {
                        period: period.name.clone(),
                    });
                }
                current = parent_of[next];
            }
        }

        let mut roots = Vec::new();
        let mut children = alloc::vec![Vec::new(); periods.len()];
        for (idx, parent) in parent_of.iter().enumerate() {
            match parent {
                None => roots.push(idx),
                Some(parent) => children[*parent].push(idx),
            }
        }
        roots.sort_by_key(|&idx| periods[idx].start);
        for list in &mut children {
            list.sort_by_key(|&idx| periods[idx].start);
        }

        Ok(Self {
            periods,
            by_name,
            roots,
            children,
        })
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns `true` if the forest holds no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Looks up a period by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Period> {
        self.by_name.get(name).map(|&idx| &self.periods[idx])
    }

    /// Iterates over top-level periods ordered by start year.
    pub fn roots(&self) -> impl Iterator<Item = &Period> + '_ {
        self.roots.iter().map(|&idx| &self.periods[idx])
    }

    /// Iterates over the direct children of `name` ordered by start year.
    ///
    /// Unknown names have no children.
    pub fn children_of<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Period> + use<'a> {
        let list: &[usize] = match self.by_name.get(name) {
            Some(&idx) => &self.children[idx],
            None => &[],
        };
        list.iter().map(|&idx| &self.periods[idx])
    }

    /// Returns the parent of `name`, if it has one.
    #[must_use]
    pub fn parent_of(&self, name: &str) -> Option<&Period> {
        self.get(name)?
            .parent
            .as_deref()
            .and_then(|parent| self.get(parent))
    }

    /// Iterates over all periods in dataset order.
    pub fn iter(&self) -> core::slice::Iter<'_, Period> {
        self.periods.iter()
    }
}
