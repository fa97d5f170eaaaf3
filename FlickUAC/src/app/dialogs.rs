//! Message-dialog helpers for the FlickUAC window
//!
//! All user-visible outcomes go through these; every failure path ends in
//! a dialog and hands control back to the event loop.

use native_windows_gui as nwg;

/// Yes/no question; true when the user confirms
pub fn confirm(parent: &nwg::Window, title: &str, content: &str) -> bool {
    nwg::modal_message(
        parent,
        &nwg::MessageParams {
            title,
            content,
            buttons: nwg::MessageButtons::YesNo,
            icons: nwg::MessageIcons::Question,
        },
    ) == nwg::MessageChoice::Yes
}

/// Informational notice
pub fn info(parent: &nwg::Window, title: &str, content: &str) {
    nwg::modal_message(
        parent,
        &nwg::MessageParams {
            title,
            content,
            buttons: nwg::MessageButtons::Ok,
            icons: nwg::MessageIcons::Info,
        },
    );
}

/// Error notice
pub fn error(parent: &nwg::Window, title: &str, content: &str) {
    nwg::modal_message(
        parent,
        &nwg::MessageParams {
            title,
            content,
            buttons: nwg::MessageButtons::Ok,
            icons: nwg::MessageIcons::Error,
        },
    );
}
