// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error returned when a period dataset cannot form a forest.
#[derive(Clone, PartialEq, Eq)]
pub enum DataError {
    /// A period ends before it starts.
    ReversedPeriod {
        /// Name of the offending period.
        name: String,
        /// Declared start year.
        start: i32,
        /// Declared end year.
        end: i32,
    },
    /// Two periods share a name, so parent references would be ambiguous.
    DuplicatePeriod {
        /// The repeated name.
        name: String,
    },
    /// A period names a parent that is not in the dataset.
    UnknownParent {
        /// Name of the child period.
        period: String,
        /// The missing parent name.
        parent: String,
    },
    /// Following parent links from this period leads back to itself.
    ParentCycle {
        /// A period on the cycle.
        period: String,
    },
}

impl fmt::Debug for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReversedPeriod { name, start, end } => {
                write!(f, "period {name:?} ends ({end}) before it starts ({start})")
            }
            Self::DuplicatePeriod { name } => write!(f, "period {name:?} is defined twice"),
            Self::UnknownParent { period, parent } => {
                write!(f, "period {period:?} names unknown parent {parent:?}")
            }
            Self::ParentCycle { period } => {
                write!(f, "parent links starting at period {period:?} form a cycle")
            }
        }
    }
}

impl core::error::Error for DataError {}
