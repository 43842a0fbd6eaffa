//! Optional third-party chat widget hook.
//!
//! The widget script may or may not have loaded by the time the user clicks
//! "chat to an expert"; the call is guarded and silently does nothing when
//! the handle is absent.

/// Host-side handle to a floating chat window.
pub trait ChatLauncher {
    fn show_floating_window(&mut self);
}

/// Ask the widget, if present, to show its floating window.
/// Returns true when a launcher handled the request.
pub fn open_chat(launcher: Option<&mut (dyn ChatLauncher + '_)>) -> bool {
    match launcher {
        Some(l) => {
            l.show_floating_window();
            true
        }
        None => {
            log::debug!("chat widget not loaded; ignoring open request");
            false
        }
    }
}
