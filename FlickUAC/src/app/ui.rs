//! Native-windows-gui based UI for FlickUAC
//!
//! One window: a toolbar with the four actions and the language menu, and
//! a ListView mirroring the RunAsInvoker values currently in the registry.
//! Every handler runs synchronously on the UI thread and ends back in the
//! event loop, whatever happened.

use super::dialogs;
use super::state::AppState;
use flickuac::locale::{LabelTable, Language, LANGUAGE_MENU};
use flickuac::store::registry::RegistryLayerStore;
use flickuac::store::LayerStore;
use flickuac::{icon, reveal};
use native_windows_derive as nwd;
use native_windows_gui as nwg;
use nwd::NwgUi;
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;
use windows::Win32::Globalization::GetUserDefaultLocaleName;
use windows::Win32::UI::Controls::{ImageList_Remove, ImageList_ReplaceIcon, HIMAGELIST};

const WINDOW_WIDTH: i32 = 560;
const WINDOW_HEIGHT: i32 = 420;

const MARGIN_X: i32 = 12;
const TOOLBAR_Y: i32 = 12;

const BUTTON_WIDTH: i32 = 92;
const BUTTON_HEIGHT: i32 = 26;
const BUTTON_SPACING: i32 = 8;

const COMBO_WIDTH: i32 = 120;

const LIST_Y: i32 = TOOLBAR_Y + BUTTON_HEIGHT + 10;

thread_local! {
    static APP_STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

fn language_names() -> Vec<String> {
    LANGUAGE_MENU
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect()
}

#[derive(Default, NwgUi)]
pub struct FlickApp {
    #[nwg_control(
        size: (WINDOW_WIDTH, WINDOW_HEIGHT),
        position: (300, 300),
        title: "FlickUAC",
        flags: "WINDOW|VISIBLE"
    )]
    #[nwg_events(OnWindowClose: [FlickApp::exit])]
    window: nwg::Window,

    #[nwg_control(
        parent: window,
        text: "Refresh",
        position: (MARGIN_X, TOOLBAR_Y),
        size: (BUTTON_WIDTH, BUTTON_HEIGHT)
    )]
    #[nwg_events(OnButtonClick: [FlickApp::on_refresh])]
    refresh_button: nwg::Button,

    #[nwg_control(
        parent: window,
        text: "Add",
        position: (MARGIN_X + BUTTON_WIDTH + BUTTON_SPACING, TOOLBAR_Y),
        size: (BUTTON_WIDTH, BUTTON_HEIGHT)
    )]
    #[nwg_events(OnButtonClick: [FlickApp::on_add])]
    add_button: nwg::Button,

    #[nwg_control(
        parent: window,
        text: "Delete",
        enabled: false,
        position: (MARGIN_X + (BUTTON_WIDTH + BUTTON_SPACING) * 2, TOOLBAR_Y),
        size: (BUTTON_WIDTH, BUTTON_HEIGHT)
    )]
    #[nwg_events(OnButtonClick: [FlickApp::on_delete])]
    delete_button: nwg::Button,

    #[nwg_control(
        parent: window,
        text: "Location",
        enabled: false,
        position: (MARGIN_X + (BUTTON_WIDTH + BUTTON_SPACING) * 3, TOOLBAR_Y),
        size: (BUTTON_WIDTH, BUTTON_HEIGHT)
    )]
    #[nwg_events(OnButtonClick: [FlickApp::on_locate])]
    location_button: nwg::Button,

    #[nwg_control(
        parent: window,
        collection: language_names(),
        selected_index: Some(2),
        position: (WINDOW_WIDTH - MARGIN_X - COMBO_WIDTH, TOOLBAR_Y),
        size: (COMBO_WIDTH, BUTTON_HEIGHT)
    )]
    #[nwg_events(OnComboxBoxSelection: [FlickApp::on_language_selected])]
    language_combo: nwg::ComboBox<String>,

    #[nwg_resource(size: (16, 16), initial: 16, grow: 16)]
    icon_list: nwg::ImageList,

    #[nwg_control(
        parent: window,
        position: (MARGIN_X, LIST_Y),
        size: (WINDOW_WIDTH - MARGIN_X * 2, WINDOW_HEIGHT - LIST_Y - MARGIN_X),
        list_style: nwg::ListViewStyle::Detailed,
        ex_flags: nwg::ListViewExFlags::FULL_ROW_SELECT,
        flags: "VISIBLE"
    )]
    #[nwg_events(OnListViewItemChanged: [FlickApp::on_selection_changed])]
    entry_list: nwg::ListView,

    #[nwg_resource(
        title: "Select Application",
        action: nwg::FileDialogAction::Open,
        filters: "Executables(*.exe)|All files(*.*)"
    )]
    file_picker: nwg::FileDialog,

    #[nwg_control(
        parent: window,
        interval: Duration::from_millis(1000),
        max_tick: Some(1),
        active: false
    )]
    #[nwg_events(OnTimerTick: [FlickApp::on_badge_expired])]
    badge_timer: nwg::AnimationTimer,
}

impl FlickApp {
    /// One-time setup after the controls exist: wire the image list, build
    /// the single path column, pick the language from the system locale,
    /// and mirror the registry.
    pub fn initialize(&self) {
        self.entry_list
            .set_image_list(Some(&self.icon_list), nwg::ListViewImageListType::Small);
        self.entry_list.insert_column(nwg::InsertListViewColumn {
            index: Some(0),
            fmt: None,
            width: Some(WINDOW_WIDTH - MARGIN_X * 2 - 28),
            text: Some("Path".into()),
        });

        let language = system_language();
        self.change_language(language);
        self.select_language_in_menu(language);
        self.reload_entries();
    }

    fn on_refresh(&self) {
        let found = self.reload_entries();
        let labels = self.labels();
        let badge = if found { "✔️" } else { "❌" };
        self.refresh_button
            .set_text(&format!("{}{}", labels.get("ReFlash"), badge));
        // Cosmetic only: restore the plain label after one second
        self.badge_timer.start();
    }

    fn on_badge_expired(&self) {
        self.badge_timer.stop();
        self.apply_labels();
    }

    fn on_add(&self) {
        let labels = self.labels();

        if self.file_picker.run(Some(&self.window)) {
            if let Ok(selected) = self.file_picker.get_selected_item() {
                let path = selected.to_string_lossy().to_string();
                let prompt = format!("{}\n{}", labels.get("theSelectedFilePathIs"), path);

                if dialogs::confirm(&self.window, labels.get("message"), &prompt) {
                    let mut store = RegistryLayerStore::new();
                    match store.set_invoker_flag(&path) {
                        Ok(()) => dialogs::info(
                            &self.window,
                            labels.get("message"),
                            labels.get("registryValueAdded"),
                        ),
                        Err(e) => {
                            dialogs::error(&self.window, labels.get("error"), &e.to_string())
                        }
                    }
                } else {
                    dialogs::info(
                        &self.window,
                        labels.get("message"),
                        labels.get("noActionTaken"),
                    );
                }
            }
        }

        // Mirror registry state regardless of how the add turned out
        self.reload_entries();
    }

    fn on_delete(&self) {
        let labels = self.labels();
        let mut selected = self.entry_list.selected_items();
        if selected.is_empty() {
            return;
        }

        // Walk rows bottom-up so remove_item keeps lower indices valid
        selected.sort_unstable();
        let mut store = RegistryLayerStore::new();
        for row in selected.into_iter().rev() {
            let Some(path) = self.path_at(row) else {
                continue;
            };
            let prompt = format!("{}\n{}", labels.get("whetherToDeleteTheValue"), path);
            if !dialogs::confirm(&self.window, labels.get("message"), &prompt) {
                continue;
            }

            // Each entry is its own transaction; one failure must not block
            // the remaining entries
            match store.remove(&path) {
                Ok(()) => {
                    self.entry_list.remove_item(row);
                    APP_STATE.with(|state| state.borrow_mut().remove_entry(row));
                    dialogs::info(
                        &self.window,
                        labels.get("message"),
                        labels.get("registryValueDeleted"),
                    );
                }
                Err(e) => dialogs::error(&self.window, labels.get("error"), &e.to_string()),
            }
        }

        self.update_selection_buttons();
    }

    fn on_locate(&self) {
        let labels = self.labels();
        for row in self.entry_list.selected_items() {
            let Some(path) = self.path_at(row) else {
                continue;
            };

            match reveal::resolve_reveal(Path::new(&path)) {
                Some(target) => {
                    if let Err(e) = reveal::open_in_explorer(&target) {
                        dialogs::error(&self.window, labels.get("error"), &e.to_string());
                    }
                }
                // The whole ancestor chain is gone; nothing sensible to open
                None => dialogs::error(&self.window, labels.get("error"), &path),
            }
        }
    }

    fn on_language_selected(&self) {
        if let Some(name) = self.language_combo.selection_string() {
            let language = Language::resolve(&name);
            let current = APP_STATE.with(|state| state.borrow().language);
            if language != current {
                self.change_language(language);
            }
        }
    }

    fn on_selection_changed(&self) {
        self.update_selection_buttons();
    }

    /// Rebuild the visible list from the registry. Previous rows and icons
    /// are discarded wholesale; there is no merge. Returns whether at least
    /// one qualifying entry was found.
    fn reload_entries(&self) -> bool {
        self.entry_list.clear();
        unsafe {
            ImageList_Remove(HIMAGELIST(self.icon_list.handle as isize), -1);
        }

        let store = RegistryLayerStore::new();
        let entries = match store.entries() {
            Ok(entries) => entries,
            Err(e) => {
                let labels = self.labels();
                dialogs::error(&self.window, labels.get("error"), &e.to_string());
                Vec::new()
            }
        };

        let mut paths = Vec::with_capacity(entries.len());
        for (row, entry) in entries.iter().enumerate() {
            let image = self.push_icon(Path::new(&entry.path));
            self.entry_list.insert_item(nwg::InsertListViewItem {
                index: Some(row as i32),
                column_index: 0,
                text: Some(entry.path.clone()),
                image,
            });
            paths.push(entry.path.clone());
        }

        let found = !paths.is_empty();
        APP_STATE.with(|state| state.borrow_mut().entries = paths);
        self.update_selection_buttons();
        found
    }

    /// Copy the entry's icon into the image list and return its slot.
    /// Extraction failure degrades to the generic executable icon.
    fn push_icon(&self, path: &Path) -> Option<i32> {
        let hicon = icon::associated_icon(path).or_else(icon::fallback_icon)?;
        let slot = unsafe {
            ImageList_ReplaceIcon(HIMAGELIST(self.icon_list.handle as isize), -1, hicon)
        };
        // The image list keeps its own copy
        icon::destroy(hicon);
        (slot >= 0).then_some(slot)
    }

    /// Swap the label table; a failed load keeps the previous table.
    fn change_language(&self, language: Language) {
        match LabelTable::load(language) {
            Ok(labels) => {
                APP_STATE.with(|state| {
                    let mut state = state.borrow_mut();
                    state.language = language;
                    state.labels = labels;
                });
                self.apply_labels();
            }
            Err(e) => {
                let labels = self.labels();
                dialogs::error(&self.window, labels.get("error"), &e.to_string());
            }
        }
    }

    fn apply_labels(&self) {
        let labels = self.labels();
        self.refresh_button.set_text(labels.get("ReFlash"));
        self.add_button.set_text(labels.get("ItemAdd"));
        self.delete_button.set_text(labels.get("ItemDelete"));
        self.location_button.set_text(labels.get("ItemLocation"));
    }

    fn select_language_in_menu(&self, language: Language) {
        let index = LANGUAGE_MENU
            .iter()
            .position(|(_, candidate)| *candidate == language);
        self.language_combo.set_selection(index);
    }

    fn update_selection_buttons(&self) {
        let has_selection = self.entry_list.selected_count() > 0;
        self.delete_button.set_enabled(has_selection);
        self.location_button.set_enabled(has_selection);
    }

    fn path_at(&self, row: usize) -> Option<String> {
        APP_STATE.with(|state| state.borrow().entry_path(row).map(str::to_owned))
    }

    fn labels(&self) -> LabelTable {
        APP_STATE.with(|state| state.borrow().labels.clone())
    }

    fn exit(&self) {
        nwg::stop_thread_dispatch();
    }
}

/// Resolve the startup language from the user's locale, defaulting to the
/// English baseline when the system gives nothing usable.
fn system_language() -> Language {
    // LOCALE_NAME_MAX_LENGTH
    let mut buffer = [0u16; 85];
    let len = unsafe { GetUserDefaultLocaleName(&mut buffer) };
    if len <= 1 {
        return Language::English;
    }
    let code = String::from_utf16_lossy(&buffer[..(len - 1) as usize]);
    Language::from_locale_code(&code)
}
