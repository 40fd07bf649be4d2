use gridsnap_core::SnapRequest;
use gridsnap_core::config::{Keybinding, Modifier};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN, RegisterHotKey,
    UnregisterHotKey,
};

use crate::keys;

/// A registered global hotkey.
struct Hotkey {
    id: i32,
    request: SnapRequest,
}

/// Manages global hotkey registrations.
///
/// Hotkeys are registered on the current thread's message queue.
/// `WM_HOTKEY` messages arrive via the Win32 message pump running on
/// the same thread, and the snap is applied right there: the work per
/// press is a handful of local OS calls, so no worker thread is needed.
pub struct HotkeyManager {
    hotkeys: Vec<Hotkey>,
}

impl HotkeyManager {
    pub fn new() -> Self {
        Self {
            hotkeys: Vec::new(),
        }
    }

    /// Registers keybindings from configuration.
    ///
    /// Each keybinding's key name is resolved to a virtual key code and
    /// its modifiers are converted to Win32 flags. Invalid key names
    /// are logged and skipped; a binding another application already
    /// holds is skipped the same way.
    pub fn register_from_config(&mut self, bindings: &[Keybinding]) {
        for (i, binding) in bindings.iter().enumerate() {
            let id = (i + 1) as i32;

            let Some(vk) = keys::vk_from_name(&binding.key) else {
                eprintln!("Unknown key name: {:?}", binding.key);
                continue;
            };

            let mut modifiers = MOD_NOREPEAT;
            for m in &binding.modifiers {
                modifiers |= modifier_to_flag(m);
            }

            self.register(id, modifiers, vk, binding.request());
        }
    }

    /// Resolves a `WM_HOTKEY` message to its snap request, by hotkey ID.
    ///
    /// Called from the message pump when a `WM_HOTKEY` message arrives.
    pub fn dispatch(&self, hotkey_id: i32) -> Option<SnapRequest> {
        self.hotkeys
            .iter()
            .find(|h| h.id == hotkey_id)
            .map(|h| h.request)
    }

    /// Returns how many hotkeys were successfully registered.
    pub fn len(&self) -> usize {
        self.hotkeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotkeys.is_empty()
    }

    /// Registers a single hotkey.
    fn register(&mut self, id: i32, modifiers: HOT_KEY_MODIFIERS, vk: u32, request: SnapRequest) {
        // SAFETY: RegisterHotKey registers a system-wide hotkey on the
        // current thread's message queue. We use unique IDs to avoid
        // collisions.
        let result = unsafe { RegisterHotKey(None, id, modifiers, vk) };

        if result.is_err() {
            eprintln!("Failed to register hotkey {id} (vk=0x{vk:02X})");
            return;
        }

        self.hotkeys.push(Hotkey { id, request });
    }
}

impl Default for HotkeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for hotkey in &self.hotkeys {
            // SAFETY: UnregisterHotKey removes the hotkey registration.
            unsafe {
                let _ = UnregisterHotKey(None, hotkey.id);
            }
        }
    }
}

/// Converts a platform-agnostic modifier to a Win32 hotkey flag.
fn modifier_to_flag(modifier: &Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}
