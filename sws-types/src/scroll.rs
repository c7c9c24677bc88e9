/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Scroll position math for the snap-scrolling page container.
//!
//! Every section is exactly one viewport tall, so the section in view is the
//! integer number of viewports scrolled past the top.

/// Index of the section currently in view.
///
/// Always a valid index into a registry of `section_count` entries; an
/// empty registry or a collapsed viewport yields `0`.
pub fn active_section(scroll_top: f64, viewport_height: f64, section_count: usize) -> usize {
    if section_count == 0 || viewport_height <= 0.0 || !scroll_top.is_finite() {
        return 0;
    }
    let index = (scroll_top / viewport_height).floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(section_count - 1)
    }
}

/// Fraction of the scrollable range already scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Scroll offset that brings section `index` to the top of the viewport.
pub fn section_offset(index: usize, viewport_height: f64) -> f64 {
    index as f64 * viewport_height.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_section_floors_by_viewport() {
        assert_eq!(active_section(0.0, 800.0, 8), 0);
        assert_eq!(active_section(799.0, 800.0, 8), 0);
        assert_eq!(active_section(800.0, 800.0, 8), 1);
        assert_eq!(active_section(2450.0, 800.0, 8), 3);
    }

    #[test]
    fn active_section_is_clamped() {
        assert_eq!(active_section(100_000.0, 800.0, 8), 7);
        assert_eq!(active_section(-50.0, 800.0, 8), 0);
    }

    #[test]
    fn active_section_degenerate_inputs() {
        assert_eq!(active_section(500.0, 0.0, 8), 0);
        assert_eq!(active_section(500.0, 800.0, 0), 0);
        assert_eq!(active_section(f64::NAN, 800.0, 8), 0);
    }

    #[test]
    fn progress_spans_the_scrollable_range() {
        assert_eq!(scroll_progress(0.0, 6400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(2800.0, 6400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(5600.0, 6400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(9000.0, 6400.0, 800.0), 1.0);
    }

    #[test]
    fn progress_without_scrollable_range_is_zero() {
        assert_eq!(scroll_progress(10.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn offset_round_trips_through_active_section() {
        for index in 0..8 {
            let offset = section_offset(index, 750.0);
            assert_eq!(active_section(offset, 750.0, 8), index);
        }
    }
}
