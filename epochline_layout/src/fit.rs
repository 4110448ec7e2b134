// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrink-to-fit font sizing for bar and label text.
//!
//! The layout works in percent of the axis and has no font metrics. The
//! renderer supplies them through [`TextMeasure`].

use core::cmp::Ordering;

/// Answers whether text fits a horizontal extent at a font size.
///
/// `width_percent` is in percent of the axis width; implementations convert it
/// to their own units.
pub trait TextMeasure {
    /// Returns `true` if `text` set at `font_size` pixels fits `width_percent`.
    fn fits(&mut self, text: &str, font_size: f64, width_percent: f64) -> bool;
}

impl<F> TextMeasure for F
where
    F: FnMut(&str, f64, f64) -> bool,
{
    fn fits(&mut self, text: &str, font_size: f64, width_percent: f64) -> bool {
        self(text, font_size, width_percent)
    }
}

/// Approximate measure assuming every glyph advances by a fixed share of the
/// font size.
///
/// Useful for headless hosts and tests; real renderers should measure with
/// their text stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AverageAdvance {
    /// Width of the axis in pixels.
    pub axis_width_px: f64,
    /// Advance of one glyph as a fraction of the font size.
    pub advance_em: f64,
    /// Horizontal padding inside the bar, both sides together, in pixels.
    pub padding_px: f64,
}

impl AverageAdvance {
    /// Creates a measure for an axis `axis_width_px` wide with typical Latin
    /// proportions.
    #[must_use]
    pub const fn new(axis_width_px: f64) -> Self {
        Self {
            axis_width_px,
            advance_em: 0.6,
            padding_px: 20.0,
        }
    }
}

impl TextMeasure for AverageAdvance {
    fn fits(&mut self, text: &str, font_size: f64, width_percent: f64) -> bool {
        let glyphs = text.chars().count() as f64;
        let needed = glyphs * font_size * self.advance_em + self.padding_px;
        needed <= width_percent / 100.0 * self.axis_width_px
    }
}

/// Font sizes tried by [`FontRange::fit`], in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontRange {
    /// Size tried first.
    pub max: f64,
    /// Size returned when nothing larger fits.
    pub min: f64,
}

impl Default for FontRange {
    fn default() -> Self {
        Self {
            max: 14.0,
            min: 8.0,
        }
    }
}

// Upper bound on sizes tried, so a degenerate range cannot spin.
const MAX_STEPS: usize = 64;

impl FontRange {
    /// Largest size, stepping down one pixel at a time from `max`, at which
    /// `text` fits `width_percent`. Falls back to `min`.
    pub fn fit(&self, text: &str, width_percent: f64, measure: &mut impl TextMeasure) -> f64 {
        let mut size = self.max;
        for _ in 0..MAX_STEPS {
            if size.partial_cmp(&self.min) != Some(Ordering::Greater) {
                break;
            }
            if measure.fits(text, size, width_percent) {
                return size;
            }
            size -= 1.0;
        }
        self.min
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{AverageAdvance, FontRange, TextMeasure};

    #[test]
    fn wide_bars_keep_the_largest_size() {
        let size =
            FontRange::default().fit("Bronze Age", 50.0, &mut |_: &str, _: f64, _: f64| true);
        assert_eq!(size, 14.0);
    }

    #[test]
    fn shrinks_one_pixel_at_a_time() {
        let mut tried = Vec::new();
        let size = FontRange::default().fit("Iron Age", 10.0, &mut |_: &str, s: f64, _: f64| {
            tried.push(s);
            s <= 11.0
        });
        assert_eq!(size, 11.0);
        assert_eq!(tried, [14.0, 13.0, 12.0, 11.0]);
    }

    #[test]
    fn falls_back_to_the_minimum() {
        let size = FontRange::default().fit("Neolithic", 0.5, &mut |_: &str, _: f64, _: f64| false);
        assert_eq!(size, 8.0);

        let degenerate = FontRange {
            max: f64::NAN,
            min: 8.0,
        };
        assert_eq!(degenerate.fit("x", 10.0, &mut |_: &str, _: f64, _: f64| true), 8.0);
    }

    #[test]
    fn average_advance_scales_with_axis_width() {
        let mut narrow = AverageAdvance::new(400.0);
        let mut wide = AverageAdvance::new(4000.0);
        // 10 glyphs at 14px: 84px of text plus 20px padding.
        assert!(!narrow.fits("Bronze Age", 14.0, 10.0));
        assert!(wide.fits("Bronze Age", 14.0, 10.0));
    }
}
