// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A year rendered with the BCE/CE sign convention.
///
/// Negative years display as `"{abs(year)} BCE"`, every other year as
/// `"{year} CE"`. Year zero is therefore `"0 CE"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormattedYear(i32);

impl FormattedYear {
    /// Returns the raw signed year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.0
    }

    /// Returns `true` if the year falls before the common era.
    #[must_use]
    pub const fn is_bce(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for FormattedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "{} BCE", self.0.unsigned_abs())
        } else {
            write!(f, "{} CE", self.0)
        }
    }
}

/// Wraps `year` for display using the BCE/CE convention.
#[must_use]
pub const fn format_year(year: i32) -> FormattedYear {
    FormattedYear(year)
}
