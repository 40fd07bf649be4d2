//! Per-monitor section layout.
//!
//! A layout holds fractional rectangles (percent of the monitor's work
//! area) and materializes them into absolute pixel rectangles on
//! demand, so sections always reflect the monitor's current geometry.

use crate::Rect;

/// A section boundary in percent of the work area, each coordinate
/// stored as a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
struct FracRect {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl FracRect {
    /// Builds from `[min_x, min_y, max_x, max_y]` integer percentages,
    /// clamping each coordinate to [0, 100] before storing.
    fn from_percent(entry: [i32; 4]) -> Self {
        let clamp = |v: i32| v.clamp(0, 100) as f32 / 100.0;
        Self {
            left: clamp(entry[0]),
            top: clamp(entry[1]),
            right: clamp(entry[2]),
            bottom: clamp(entry[3]),
        }
    }

    const FULL_AREA: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 1.0,
        bottom: 1.0,
    };

    /// Converts the fractions to absolute coordinates against a work
    /// area. Each axis scales independently; products truncate toward
    /// zero so adjacent sections share edges exactly.
    fn materialize(&self, work_area: &Rect) -> Rect {
        let w = work_area.width as f32;
        let h = work_area.height as f32;
        Rect::from_edges(
            work_area.x + (self.left * w) as i32,
            work_area.y + (self.top * h) as i32,
            work_area.x + (self.right * w) as i32,
            work_area.y + (self.bottom * h) as i32,
        )
    }
}

/// The section layout for one monitor.
#[derive(Debug, Clone)]
pub struct Layout {
    sections: Vec<FracRect>,
    /// Per-monitor border compensation in pixels, user-configured.
    pub adjust_size: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            sections: vec![FracRect::FULL_AREA],
            adjust_size: 0,
        }
    }
}

impl Layout {
    /// Replaces the fractional section list.
    ///
    /// Each entry is `[min_x, min_y, max_x, max_y]` in integer percent
    /// of the work area; out-of-range coordinates are clamped. An
    /// empty list resets to a single full-area section.
    pub fn set_sections(&mut self, entries: &[[i32; 4]]) {
        self.sections = entries
            .iter()
            .map(|&entry| FracRect::from_percent(entry))
            .collect();

        if self.sections.is_empty() {
            self.sections.push(FracRect::FULL_AREA);
        }
    }

    /// Materializes every section against the given work area.
    pub fn sections(&self, work_area: &Rect) -> impl Iterator<Item = Rect> {
        self.sections.iter().map(|frac| frac.materialize(work_area))
    }

    /// Topmost edge over all materialized sections.
    ///
    /// A section touching this edge sits at the top of the monitor,
    /// which turns an Up move into a maximize.
    pub fn top_extent(&self, work_area: &Rect) -> i32 {
        self.sections(work_area)
            .map(|r| r.top())
            .min()
            .unwrap_or(work_area.top())
    }

    /// Bottommost edge over all materialized sections.
    pub fn bottom_extent(&self, work_area: &Rect) -> i32 {
        self.sections(work_area)
            .map(|r| r.bottom())
            .max()
            .unwrap_or(work_area.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK: Rect = Rect {
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
    };

    #[test]
    fn default_layout_is_one_full_section() {
        let layout = Layout::default();
        let sections: Vec<_> = layout.sections(&WORK).collect();
        assert_eq!(sections, vec![WORK]);
    }

    #[test]
    fn empty_input_resets_to_full_area() {
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 50, 100], [50, 0, 100, 100]]);
        layout.set_sections(&[]);

        let sections: Vec<_> = layout.sections(&WORK).collect();
        assert_eq!(sections, vec![WORK]);
    }

    #[test]
    fn two_by_two_grid_materializes_to_quadrants() {
        let mut layout = Layout::default();
        layout.set_sections(&[
            [0, 0, 50, 50],
            [50, 0, 100, 50],
            [0, 50, 50, 100],
            [50, 50, 100, 100],
        ]);

        let sections: Vec<_> = layout.sections(&WORK).collect();
        assert_eq!(
            sections,
            vec![
                Rect::new(0, 0, 960, 540),
                Rect::new(960, 0, 960, 540),
                Rect::new(0, 540, 960, 540),
                Rect::new(960, 540, 960, 540),
            ]
        );
    }

    #[test]
    fn materialization_respects_work_area_origin() {
        // Second monitor to the right of a 1920-wide primary, with a
        // 40px taskbar strip reserved at the top.
        let work = Rect::new(1920, 40, 1280, 984);
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 50, 100]]);

        let sections: Vec<_> = layout.sections(&work).collect();
        assert_eq!(sections, vec![Rect::new(1920, 40, 640, 984)]);
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        let mut layout = Layout::default();
        layout.set_sections(&[[-20, -5, 150, 120]]);

        let sections: Vec<_> = layout.sections(&WORK).collect();
        // Clamped to [0,0,100,100]: never exceeds the work area.
        assert_eq!(sections, vec![WORK]);
    }

    #[test]
    fn set_sections_is_idempotent() {
        let entries = [[0, 0, 33, 100], [33, 0, 67, 100], [67, 0, 100, 100]];

        let mut layout = Layout::default();
        layout.set_sections(&entries);
        let first: Vec<_> = layout.sections(&WORK).collect();

        layout.set_sections(&entries);
        let second: Vec<_> = layout.sections(&WORK).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn extents_span_min_top_to_max_bottom() {
        let mut layout = Layout::default();
        // Only covers the middle band vertically.
        layout.set_sections(&[[0, 25, 100, 75]]);

        assert_eq!(layout.top_extent(&WORK), 270);
        assert_eq!(layout.bottom_extent(&WORK), 810);
    }

    #[test]
    fn sections_stay_inside_work_area() {
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 33, 33], [33, 33, 67, 67], [67, 67, 200, 200]]);

        for section in layout.sections(&WORK) {
            assert!(section.left() >= WORK.left());
            assert!(section.top() >= WORK.top());
            assert!(section.right() <= WORK.right());
            assert!(section.bottom() <= WORK.bottom());
        }
    }
}
