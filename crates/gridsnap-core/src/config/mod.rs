pub mod keybinding;
mod loader;
pub mod preset;

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::log::LogConfig;

pub use keybinding::{Keybinding, Modifier};
pub use loader::{config_dir, config_path, load, try_load};

/// Bounds for the per-monitor border adjustment, in pixels.
pub const ADJUST_SIZE_MIN: i32 = -30;
pub const ADJUST_SIZE_MAX: i32 = 30;

/// Top-level configuration for Gridsnap.
///
/// Loaded from `~/.config/gridsnap/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// One entry per monitor, in enumeration order. Monitors beyond
    /// the configured list use [`MonitorConfig::default`].
    #[serde(rename = "monitor")]
    pub monitors: Vec<MonitorConfig>,
    /// Hotkey bindings. Empty means the built-in defaults.
    #[serde(rename = "keybinding")]
    pub keybindings: Vec<Keybinding>,
    /// File logging settings.
    pub log: LogConfig,
}

/// Section layout settings for one monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Border compensation in pixels, clamped to [-30, 30].
    pub adjust_size: i32,
    /// Named preset, or "custom" to use the `custom` field.
    pub preset: String,
    /// Custom section list as a JSON array of
    /// `[min_x, min_y, max_x, max_y]` percentages.
    pub custom: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            adjust_size: 0,
            preset: "2x2".into(),
            custom: preset::CUSTOM_DEFAULT.into(),
        }
    }
}

impl MonitorConfig {
    /// Resolves this monitor's section list.
    ///
    /// Unknown preset names and malformed custom JSON are both
    /// reported as errors; the caller keeps whatever layout it had.
    pub fn sections(&self) -> Result<Vec<[i32; 4]>, String> {
        if self.preset.eq_ignore_ascii_case("custom") {
            preset::parse_sections(&self.custom)
        } else {
            preset::lookup(&self.preset)
                .map(<[[i32; 4]]>::to_vec)
                .ok_or_else(|| format!("unknown layout preset {:?}", self.preset))
        }
    }

    /// Builds the monitor's [`Layout`], falling back to the default
    /// full-area layout when the section list cannot be resolved.
    pub fn to_layout(&self) -> Layout {
        let mut layout = Layout::default();
        layout.adjust_size = self.adjust_size;
        match self.sections() {
            Ok(entries) => layout.set_sections(&entries),
            Err(e) => crate::log_warn!("ignoring configured sections: {e}"),
        }
        layout
    }
}

impl Config {
    /// Clamps loaded values to safe ranges.
    pub fn validate(&mut self) {
        for monitor in &mut self.monitors {
            monitor.adjust_size = monitor.adjust_size.clamp(ADJUST_SIZE_MIN, ADJUST_SIZE_MAX);
        }
    }

    /// The effective keybindings: configured ones, or the defaults.
    pub fn keybindings(&self) -> Vec<Keybinding> {
        if self.keybindings.is_empty() {
            keybinding::defaults()
        } else {
            self.keybindings.clone()
        }
    }

    /// Builds one [`Layout`] per monitor for `monitor_count` monitors.
    pub fn layouts(&self, monitor_count: usize) -> Vec<Layout> {
        (0..monitor_count)
            .map(|i| match self.monitors.get(i) {
                Some(monitor) => monitor.to_layout(),
                None => MonitorConfig::default().to_layout(),
            })
            .collect()
    }
}

/// Generates the commented default `config.toml` written by
/// `gridsnap init`.
pub fn generate_config() -> String {
    let presets = preset::NAMES.join(", ");
    format!(
        r#"# Gridsnap configuration.
# One [[monitor]] block per monitor, in enumeration order.

[[monitor]]
# Border compensation in pixels ([-30, 30]). Increase if windows leave
# gaps at section boundaries, decrease if they overlap.
adjust_size = 0
# One of: {presets}, custom.
preset = "2x2"
# Used when preset = "custom": JSON list of [min_x, min_y, max_x, max_y]
# in percent of the monitor's work area.
custom = "{custom}"

[log]
# File logging to ~/.config/gridsnap/logs/gridsnap.log
enabled = false
level = "info"        # debug, info, warn, error
max_file_mb = 10

# Hotkeys default to Ctrl+Alt+Arrow (move) and Ctrl+Alt+Shift+Arrow
# (extend). Uncomment to remap; defining any [[keybinding]] replaces
# all defaults.
#
# [[keybinding]]
# direction = "left"
# mode = "move"
# key = "Left"
# modifiers = ["ctrl", "alt"]
"#,
        custom = preset::CUSTOM_DEFAULT.replace(' ', "")
    )
}
