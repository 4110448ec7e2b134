// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use epochline_data::DataError;
use epochline_viewport::RangeError;

/// Error returned when a [`Timeline`](crate::Timeline) cannot be built.
#[derive(Clone, PartialEq)]
pub enum TimelineError {
    /// The configured total range is unusable.
    Range(RangeError),
    /// The period dataset is inconsistent.
    Data(DataError),
}

impl fmt::Debug for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(err) => write!(f, "invalid configuration: {err}"),
            Self::Data(err) => write!(f, "invalid period data: {err}"),
        }
    }
}

impl core::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::Data(err) => Some(err),
        }
    }
}

impl From<RangeError> for TimelineError {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

impl From<DataError> for TimelineError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}
