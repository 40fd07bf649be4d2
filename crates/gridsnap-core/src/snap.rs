//! Placement resolution: picks where the focused window goes.
//!
//! Pure functions over monitor geometry, layouts, and a window
//! snapshot. The resolver never touches the OS; the engine applies
//! whatever it decides.

use crate::action::{Direction, MoveMode, SnapRequest};
use crate::geometry::{interval_overlap, overlap_ratio};
use crate::layout::Layout;
use crate::monitor::MonitorGeometry;
use crate::rect::Rect;
use crate::window::{ShowCommand, WindowSnapshot, WindowState};

/// Below this overlap with its closest section, a plain move first
/// aligns the window to that section instead of advancing past it.
pub const SNAP_FILL_THRESHOLD: f32 = 0.97;

/// Above this overlap with the monitor's work area, an Up move
/// maximizes even when the closest section is not at the top edge.
pub const MAXIMIZE_OVERLAP_THRESHOLD: f32 = 0.9;

/// One materialized section, tagged with its monitor's index.
///
/// Sections are rebuilt from the layouts on every query and discarded
/// after use, so they always reflect current monitor geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub monitor: usize,
    pub rect: Rect,
}

/// Materializes every layout against its monitor's current work area.
///
/// `monitors` and `layouts` are parallel slices, one entry per monitor.
pub fn catalog(monitors: &[MonitorGeometry], layouts: &[Layout]) -> Vec<Section> {
    monitors
        .iter()
        .zip(layouts)
        .enumerate()
        .flat_map(|(monitor, (geometry, layout))| {
            layout
                .sections(&geometry.work_area)
                .map(move |rect| Section { monitor, rect })
        })
        .collect()
}

/// A destination section chosen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    /// Destination rectangle in screen coordinates, before padding.
    pub section: Rect,
    /// Index of the destination monitor.
    pub monitor: usize,
    /// Whether the destination shares a monitor with the window's
    /// current section. Extend mode only unions rectangles on the
    /// same monitor.
    pub same_monitor: bool,
}

/// What a hotkey press resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Change the show state; no destination rectangle is involved.
    Show(ShowCommand),
    /// Place the window at a section.
    Move(MoveTarget),
}

/// Resolves a snap request against the current section catalog.
///
/// Returns `None` when there is no eligible destination; the caller
/// treats that as a no-op and leaves the window untouched.
pub fn resolve(
    monitors: &[MonitorGeometry],
    layouts: &[Layout],
    window: &WindowSnapshot,
    request: SnapRequest,
) -> Option<Resolution> {
    let sections = catalog(monitors, layouts);
    let effective = window.effective_rect();
    let direction = request.direction;

    // Locate the section the window currently occupies: highest
    // symmetric overlap, ties broken toward the requested direction so
    // repeated presses stay deterministic when a window spans a tie.
    let mut closest: Option<(Section, f32)> = None;
    for &section in &sections {
        let overlap = overlap_ratio(&effective, &section.rect);
        let better = match closest {
            None => true,
            Some((best, best_overlap)) => {
                overlap > best_overlap
                    || (overlap == best_overlap
                        && wins_direction_tie(direction, &section.rect, &best.rect))
            }
        };
        if better {
            closest = Some((section, overlap));
        }
    }
    let (closest, closest_overlap) = closest?;

    let is_normal = window.state == WindowState::Normal;
    let is_maximized = window.state == WindowState::Maximized;
    let is_minimized = window.state == WindowState::Minimized;

    // A misaligned window first snaps to fill the section it mostly
    // occupies; only subsequent presses advance it.
    if is_normal && request.mode != MoveMode::Extend && closest_overlap < SNAP_FILL_THRESHOLD {
        return Some(Resolution::Move(MoveTarget {
            section: closest.rect,
            monitor: closest.monitor,
            same_monitor: true,
        }));
    }

    let work_area = &monitors[closest.monitor].work_area;
    let closest_layout = &layouts[closest.monitor];

    // Maximize, minimize, and restore are virtual sections above and
    // below the layout. These are terminal: no rectangle is computed.
    if direction == Direction::Up
        && is_normal
        && (closest.rect.top() == closest_layout.top_extent(work_area)
            || overlap_ratio(&effective, work_area) > MAXIMIZE_OVERLAP_THRESHOLD)
    {
        return Some(Resolution::Show(ShowCommand::Maximize));
    }

    if direction == Direction::Down
        && is_normal
        && closest.rect.bottom() == closest_layout.bottom_extent(work_area)
    {
        return Some(Resolution::Show(ShowCommand::Minimize));
    }

    if (direction == Direction::Up && is_minimized)
        || (direction == Direction::Down && is_maximized)
    {
        return Some(Resolution::Show(ShowCommand::Restore));
    }

    // Where the window currently "is" for the directional search. A
    // maximized window acts as a zero-height strip at the top of its
    // work area, a minimized one at the bottom, so the same search
    // drives transitions out of both states.
    let current = if is_maximized {
        Rect::new(work_area.x, work_area.y, work_area.width, 0)
    } else if is_minimized {
        Rect::new(work_area.x, work_area.bottom(), work_area.width, 0)
    } else {
        closest.rect
    };

    let vertical = matches!(direction, Direction::Up | Direction::Down);
    let requires_other_monitor = (is_maximized && direction == Direction::Up)
        || (is_minimized && direction == Direction::Down);
    let requires_same_monitor = !vertical && (is_maximized || is_minimized);

    let mut best: Option<Section> = None;
    let mut best_overlap = i32::MIN;
    let mut best_off_axis = i32::MIN;

    for &candidate in &sections {
        let rect = candidate.rect;

        // Skip the section the window already occupies.
        if rect == current {
            continue;
        }

        let same_monitor = candidate.monitor == closest.monitor;
        if requires_other_monitor && same_monitor {
            continue;
        }
        if requires_same_monitor && !same_monitor {
            continue;
        }

        // The candidate must lie in the direction of travel, unless the
        // same-monitor constraint already pins the search space.
        if !requires_same_monitor {
            let out_of_direction = match direction {
                Direction::Up => rect.bottom() > current.top(),
                Direction::Down => rect.top() < current.top(),
                Direction::Right => rect.left() < current.right(),
                Direction::Left => rect.right() > current.left(),
            };
            if out_of_direction {
                continue;
            }
        }

        let horizontal_overlap =
            interval_overlap(current.left(), current.right(), rect.left(), rect.right());
        let vertical_overlap =
            interval_overlap(current.top(), current.bottom(), rect.top(), rect.bottom());

        // Score on the axis perpendicular to travel; the other axis
        // only breaks ties, clamped so genuine overlap there never
        // outranks the primary score.
        let (axis_overlap, off_axis_overlap) = if vertical {
            (horizontal_overlap, vertical_overlap.min(0))
        } else {
            (vertical_overlap, horizontal_overlap.min(0))
        };

        if axis_overlap < best_overlap {
            continue;
        }

        // Equal primary scores happen constantly on grids. Prefer the
        // nearest section along the travel axis; a maximized or
        // minimized window moving sideways instead jumps to the far
        // edge of its monitor.
        if let Some(best_section) = best {
            if axis_overlap == best_overlap {
                let best_rect = best_section.rect;
                let loses_tie = match direction {
                    Direction::Up => best_rect.bottom() > rect.bottom(),
                    Direction::Down => best_rect.top() < rect.top(),
                    Direction::Left if is_maximized || is_minimized => {
                        best_rect.left() < rect.left()
                    }
                    Direction::Right if is_maximized || is_minimized => {
                        best_rect.right() > rect.right()
                    }
                    Direction::Left => best_rect.left() > rect.left(),
                    Direction::Right => best_rect.right() < rect.right(),
                };
                if loses_tie {
                    continue;
                }
            }
        }

        if off_axis_overlap < best_off_axis {
            continue;
        }

        best = Some(candidate);
        best_overlap = axis_overlap;
        best_off_axis = off_axis_overlap;
    }

    best.map(|section| {
        Resolution::Move(MoveTarget {
            section: section.rect,
            monitor: section.monitor,
            same_monitor: section.monitor == closest.monitor,
        })
    })
}

/// Directional preference between equally overlapping sections: the
/// one whose edge reaches further in the requested direction wins.
fn wins_direction_tie(direction: Direction, candidate: &Rect, best: &Rect) -> bool {
    match direction {
        Direction::Left => candidate.left() < best.left(),
        Direction::Up => candidate.top() < best.top(),
        Direction::Right => candidate.right() > best.right(),
        Direction::Down => candidate.bottom() > best.bottom(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVE: SnapRequest = SnapRequest {
        direction: Direction::Right,
        mode: MoveMode::Move,
    };

    fn request(direction: Direction, mode: MoveMode) -> SnapRequest {
        SnapRequest { direction, mode }
    }

    /// One 1920x1080 monitor with no reserved areas.
    fn single_monitor() -> Vec<MonitorGeometry> {
        vec![MonitorGeometry::new(
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1080),
        )]
    }

    /// Two 1920x1080 monitors side by side.
    fn dual_monitors() -> Vec<MonitorGeometry> {
        vec![
            MonitorGeometry::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080)),
            MonitorGeometry::new(
                Rect::new(1920, 0, 1920, 1080),
                Rect::new(1920, 0, 1920, 1080),
            ),
        ]
    }

    fn full_layouts(count: usize) -> Vec<Layout> {
        (0..count).map(|_| Layout::default()).collect()
    }

    fn grid_2x2() -> Layout {
        let mut layout = Layout::default();
        layout.set_sections(&[
            [0, 0, 50, 50],
            [50, 0, 100, 50],
            [0, 50, 50, 100],
            [50, 50, 100, 100],
        ]);
        layout
    }

    fn normal(rect: Rect) -> WindowSnapshot {
        WindowSnapshot {
            rect,
            normal_rect: rect,
            state: WindowState::Normal,
        }
    }

    fn expect_move(resolution: Option<Resolution>) -> MoveTarget {
        match resolution {
            Some(Resolution::Move(target)) => target,
            other => panic!("expected a move, got {other:?}"),
        }
    }

    // ── catalog ──────────────────────────────────────────────────

    #[test]
    fn catalog_spans_all_monitors() {
        let monitors = dual_monitors();
        let layouts = vec![grid_2x2(), Layout::default()];
        let sections = catalog(&monitors, &layouts);

        assert_eq!(sections.len(), 5);
        assert_eq!(sections.iter().filter(|s| s.monitor == 0).count(), 4);
        assert_eq!(sections[4].rect, Rect::new(1920, 0, 1920, 1080));
    }

    // ── closest-section selection & snap-to-fill ─────────────────

    #[test]
    fn exact_match_is_not_realigned() {
        // Window exactly fills the top-left quadrant: overlap is 1.0,
        // so a Right move advances instead of snapping in place.
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 0, 960, 540));

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.section, Rect::new(960, 0, 960, 540));
    }

    #[test]
    fn misaligned_window_snaps_to_fill_first() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        // Mostly over the top-left quadrant, but offset.
        let window = normal(Rect::new(100, 80, 960, 540));

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.section, Rect::new(0, 0, 960, 540));
        assert!(target.same_monitor);
    }

    #[test]
    fn extend_mode_skips_snap_to_fill() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(100, 80, 960, 540));

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Right, MoveMode::Extend),
        ));
        // Advances to the top-right quadrant instead of realigning.
        assert_eq!(target.section, Rect::new(960, 0, 960, 540));
        assert!(target.same_monitor);
    }

    // ── 2x2 grid movement ────────────────────────────────────────

    #[test]
    fn quadrant_moves_right_within_grid() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 0, 960, 540));

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.section, Rect::new(960, 0, 960, 540));
        assert_eq!(target.monitor, 0);
    }

    #[test]
    fn quadrant_moves_down_within_grid() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 0, 960, 540));

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Down, MoveMode::Move),
        ));
        assert_eq!(target.section, Rect::new(0, 540, 960, 540));
    }

    #[test]
    fn up_from_top_row_maximizes() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 0, 960, 540));

        let resolution = resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Up, MoveMode::Move),
        );
        assert_eq!(resolution, Some(Resolution::Show(ShowCommand::Maximize)));
    }

    #[test]
    fn down_from_bottom_row_minimizes() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 540, 960, 540));

        let resolution = resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Down, MoveMode::Move),
        );
        assert_eq!(resolution, Some(Resolution::Show(ShowCommand::Minimize)));
    }

    #[test]
    fn up_from_bottom_quadrant_moves_up() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 540, 960, 540));

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Up, MoveMode::Move),
        ));
        assert_eq!(target.section, Rect::new(0, 0, 960, 540));
    }

    #[test]
    fn near_work_area_sized_window_maximizes_on_up() {
        // The window covers >90% of the work area but its closest
        // section (bottom-left quadrant) is nowhere near the top edge.
        // The work-area overlap rule maximizes it anyway.
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 100, 1920, 980));

        let resolution = resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Up, MoveMode::Extend),
        );
        assert_eq!(resolution, Some(Resolution::Show(ShowCommand::Maximize)));
    }

    // ── restore shortcuts ────────────────────────────────────────

    #[test]
    fn down_while_maximized_restores() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = WindowSnapshot {
            rect: Rect::new(0, 0, 1920, 1080),
            normal_rect: Rect::new(200, 150, 800, 600),
            state: WindowState::Maximized,
        };

        let resolution = resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Down, MoveMode::Move),
        );
        assert_eq!(resolution, Some(Resolution::Show(ShowCommand::Restore)));
    }

    #[test]
    fn up_while_minimized_restores() {
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = WindowSnapshot {
            rect: Rect::new(-32000, -32000, 160, 28),
            normal_rect: Rect::new(200, 150, 800, 600),
            state: WindowState::Minimized,
        };

        let resolution = resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Up, MoveMode::Move),
        );
        assert_eq!(resolution, Some(Resolution::Show(ShowCommand::Restore)));
    }

    #[test]
    fn minimized_window_matches_by_normal_rect() {
        // The minimized window's screen rect is off in taskbar space;
        // its last normal position (on the second monitor) decides
        // which monitor the sideways move is pinned to.
        let monitors = dual_monitors();
        let layouts = full_layouts(2);
        let window = WindowSnapshot {
            rect: Rect::new(-32000, -32000, 160, 28),
            normal_rect: Rect::new(2000, 100, 800, 600),
            state: WindowState::Minimized,
        };

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.monitor, 1);
        assert_eq!(target.section, Rect::new(1920, 0, 1920, 1080));
    }

    // ── monitor boundaries ───────────────────────────────────────

    #[test]
    fn right_with_no_neighbor_is_noop() {
        let monitors = single_monitor();
        let layouts = full_layouts(1);
        let window = normal(Rect::new(0, 0, 1920, 1080));

        assert_eq!(resolve(&monitors, &layouts, &window, MOVE), None);
    }

    #[test]
    fn right_crosses_to_neighbor_monitor() {
        let monitors = dual_monitors();
        let layouts = full_layouts(2);
        let window = normal(Rect::new(0, 0, 1920, 1080));

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.section, Rect::new(1920, 0, 1920, 1080));
        assert_eq!(target.monitor, 1);
        assert!(!target.same_monitor);
    }

    #[test]
    fn maximized_up_requires_another_monitor() {
        // Side-by-side monitors offer no section above the maximized
        // window, so Up does nothing.
        let monitors = dual_monitors();
        let layouts = full_layouts(2);
        let window = WindowSnapshot {
            rect: Rect::new(0, 0, 1920, 1080),
            normal_rect: Rect::new(100, 100, 800, 600),
            state: WindowState::Maximized,
        };

        let resolution = resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Up, MoveMode::Move),
        );
        assert_eq!(resolution, None);
    }

    #[test]
    fn maximized_up_lands_on_monitor_above() {
        let monitors = vec![
            MonitorGeometry::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080)),
            MonitorGeometry::new(
                Rect::new(0, -1080, 1920, 1080),
                Rect::new(0, -1080, 1920, 1080),
            ),
        ];
        let layouts = full_layouts(2);
        let window = WindowSnapshot {
            rect: Rect::new(0, 0, 1920, 1080),
            normal_rect: Rect::new(100, 100, 800, 600),
            state: WindowState::Maximized,
        };

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Up, MoveMode::Move),
        ));
        assert_eq!(target.monitor, 1);
        assert!(!target.same_monitor);
    }

    #[test]
    fn maximized_sideways_stays_on_monitor_at_far_edge() {
        // A maximized window moving Right must stay on its own monitor
        // and jumps to the far (rightmost) section.
        let monitors = dual_monitors();
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 50, 100], [50, 0, 100, 100]]);
        let layouts = vec![layout, Layout::default()];

        let window = WindowSnapshot {
            rect: Rect::new(0, 0, 1920, 1080),
            normal_rect: Rect::new(100, 100, 800, 600),
            state: WindowState::Maximized,
        };

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.monitor, 0);
        assert_eq!(target.section, Rect::new(960, 0, 960, 1080));
        assert!(target.same_monitor);
    }

    #[test]
    fn minimized_down_crosses_to_monitor_below() {
        let monitors = vec![
            MonitorGeometry::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1080)),
            MonitorGeometry::new(
                Rect::new(0, 1080, 1920, 1080),
                Rect::new(0, 1080, 1920, 1080),
            ),
        ];
        let layouts = full_layouts(2);
        let window = WindowSnapshot {
            rect: Rect::new(-32000, -32000, 160, 28),
            normal_rect: Rect::new(100, 100, 800, 600),
            state: WindowState::Minimized,
        };

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Down, MoveMode::Move),
        ));
        assert_eq!(target.monitor, 1);
    }

    // ── tie-breaking ─────────────────────────────────────────────

    #[test]
    fn left_move_prefers_adjacent_column() {
        // 3x1 grid, window in the rightmost column: Left should land
        // on the middle column, not skip to the leftmost.
        let monitors = single_monitor();
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 33, 100], [33, 0, 67, 100], [67, 0, 100, 100]]);
        let layouts = vec![layout];
        let sections = catalog(&monitors, &layouts);
        let window = normal(sections[2].rect);

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Left, MoveMode::Move),
        ));
        assert_eq!(target.section, sections[1].rect);
    }

    #[test]
    fn down_move_prefers_nearest_row() {
        // 1x3 stack, window in the top band: Down lands on the middle.
        let monitors = single_monitor();
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 100, 33], [0, 33, 100, 67], [0, 67, 100, 100]]);
        let layouts = vec![layout];
        let sections = catalog(&monitors, &layouts);
        let window = normal(sections[0].rect);

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Down, MoveMode::Move),
        ));
        assert_eq!(target.section, sections[1].rect);
    }

    #[test]
    fn right_move_prefers_aligned_row() {
        // From the top-left quadrant moving Right, the top-right
        // quadrant fully shares its vertical extent; the bottom-right
        // does not and must lose.
        let monitors = single_monitor();
        let layouts = vec![grid_2x2()];
        let window = normal(Rect::new(0, 0, 960, 540));

        let target = expect_move(resolve(&monitors, &layouts, &window, MOVE));
        assert_eq!(target.section, Rect::new(960, 0, 960, 540));
    }

    #[test]
    fn closest_section_tie_breaks_toward_direction() {
        // A window spanning both columns of a 2x1 layout overlaps each
        // equally; moving Left must treat the left column as current
        // (and so snap-fill targets it).
        let monitors = single_monitor();
        let mut layout = Layout::default();
        layout.set_sections(&[[0, 0, 50, 100], [50, 0, 100, 100]]);
        let layouts = vec![layout];
        let window = normal(Rect::new(480, 0, 960, 1080));

        let target = expect_move(resolve(
            &monitors,
            &layouts,
            &window,
            request(Direction::Left, MoveMode::Move),
        ));
        assert_eq!(target.section, Rect::new(0, 0, 960, 1080));
    }
}
