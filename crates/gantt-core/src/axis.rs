// File: crates/gantt-core/src/axis.rs
// Summary: Day-label series for the horizontal axis, thinned to roughly one label per 80 px.

use chrono::{Days, NaiveDate};

use crate::types::LABEL_SPACING_PX;

/// Every `skip`-th day gets a label so that labels sit about
/// [`LABEL_SPACING_PX`] apart on a chart `width` pixels wide showing `days` days.
pub fn label_skip(width: u32, days: usize) -> usize {
    let days = days.max(1) as f64;
    let px_per_day = f64::from(width) / days;
    if px_per_day > LABEL_SPACING_PX {
        return 1;
    }
    // Saturating cast: a zero width yields usize::MAX, i.e. only the first label.
    ((1.0 / (px_per_day / LABEL_SPACING_PX)).floor() as usize).max(1)
}

/// Lazy sequence of one label per day, `DD/MM` on kept days and a single
/// space elsewhere. Clone it to iterate again.
#[derive(Clone, Debug)]
pub struct DaySeries {
    start: NaiveDate,
    len: usize,
    skip: usize,
    index: usize,
}

impl DaySeries {
    /// Labels for `len` consecutive days starting at `start`.
    pub fn new(start: NaiveDate, len: usize, width: u32) -> Self {
        Self { start, len, skip: label_skip(width, len), index: 0 }
    }

    pub fn skip_n(&self) -> usize { self.skip }
}

impl Iterator for DaySeries {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.index >= self.len {
            return None;
        }
        let i = self.index;
        self.index += 1;
        if i % self.skip != 0 {
            return Some(" ".to_string());
        }
        let label = self
            .start
            .checked_add_days(Days::new(i as u64))
            .map(|d| d.format("%d/%m").to_string())
            .unwrap_or_else(|| " ".to_string());
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for DaySeries {}
