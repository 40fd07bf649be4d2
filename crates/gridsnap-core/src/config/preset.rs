//! Built-in layout presets and the JSON section-list format.
//!
//! Section lists travel as JSON arrays of `[min_x, min_y, max_x,
//! max_y]` integer percentages, the format the settings UI and the
//! `custom` config field use.

/// The preset names, in menu order.
pub const NAMES: [&str; 7] = ["1x1", "2x1", "1x2", "2x2", "3x1", "1x3", "3x3"];

/// Default value of the `custom` field (a 2x2 grid).
pub const CUSTOM_DEFAULT: &str = "[[0,0,50,50], [50,0,100,50], [0,50,50,100], [50,50,100,100]]";

/// Looks up a preset's section list by name (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static [[i32; 4]]> {
    let sections: &'static [[i32; 4]] = match name.to_ascii_lowercase().as_str() {
        "1x1" => &[[0, 0, 100, 100]],
        "2x1" => &[[0, 0, 50, 100], [50, 0, 100, 100]],
        "1x2" => &[[0, 0, 100, 50], [0, 50, 100, 100]],
        "2x2" => &[
            [0, 0, 50, 50],
            [50, 0, 100, 50],
            [0, 50, 50, 100],
            [50, 50, 100, 100],
        ],
        "3x1" => &[[0, 0, 33, 100], [33, 0, 67, 100], [67, 0, 100, 100]],
        "1x3" => &[[0, 0, 100, 33], [0, 33, 100, 67], [0, 67, 100, 100]],
        "3x3" => &[
            [0, 0, 33, 33],
            [33, 0, 67, 33],
            [67, 0, 100, 33],
            [0, 33, 33, 67],
            [33, 33, 67, 67],
            [67, 33, 100, 67],
            [0, 67, 33, 100],
            [33, 67, 67, 100],
            [67, 67, 100, 100],
        ],
        _ => return None,
    };
    Some(sections)
}

/// Parses a JSON section list.
///
/// Rejects anything that is not an array of 4-element integer arrays;
/// the caller leaves its existing layout unchanged on error.
pub fn parse_sections(json: &str) -> Result<Vec<[i32; 4]>, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid section list: {e}"))
}
