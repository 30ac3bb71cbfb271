//! Theme State
//!
//! Provides the current theme to every component. The theme is read from
//! `localStorage` once at mount, written back on every toggle, and mirrored
//! as the `dark` class on the root `<html>` element.

use leptos::*;
use web_sys::console;

use garfield_vibes::content::{ContentError, ContentResult};
use garfield_vibes::theme::{PreferenceStore, Theme, ThemeController};

/// `localStorage` key holding "light" or "dark"
pub const STORAGE_KEY: &str = "garfield_vibes_theme";

const DARK_CLASS: &str = "dark";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Preference store backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, theme: Theme) -> ContentResult<()> {
        let storage = local_storage()
            .ok_or_else(|| ContentError::Preference("localStorage unavailable".to_string()))?;
        storage
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|e| ContentError::Preference(format!("{:?}", e)))
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `None` when the browser cannot answer the media query
fn system_prefers_dark() -> Option<bool> {
    web_sys::window()?
        .match_media(DARK_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// Mirror the theme onto `<html class="dark">`
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
    {
        console::error_1(&format!("Failed to apply theme: {:?}", e).into());
    }
}

/// Theme handle shared through context.
///
/// Components get a read signal and a toggle; the theme cannot be set any
/// other way.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    controller: StoredValue<ThemeController<LocalStorageStore>>,
}

impl ThemeContext {
    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme
    }

    /// Flip the theme, persist it and update the page
    pub fn toggle(&self) {
        let next = self.controller.try_update_value(|c| c.toggle());
        if let Some(theme) = next {
            apply_theme(theme);
            self.set_theme.set(theme);
        }
    }
}

/// Load the theme and provide it to the component tree
pub fn provide_theme() -> ThemeContext {
    let controller = ThemeController::load(LocalStorageStore, system_prefers_dark());
    let initial = controller.theme();
    apply_theme(initial);

    let (theme, set_theme) = create_signal(initial);
    let ctx = ThemeContext {
        theme,
        set_theme,
        controller: store_value(controller),
    };
    provide_context(ctx);
    ctx
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found")
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        clear();
        let store = LocalStorageStore;
        assert_eq!(store.load(), None);

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().as_deref(), Some("light"));
        clear();
    }

    #[wasm_bindgen_test]
    fn test_stored_value_wins_over_system() {
        clear();
        LocalStorageStore.save(Theme::Light).unwrap();

        let controller = ThemeController::load(LocalStorageStore, Some(true));
        assert_eq!(controller.theme(), Theme::Light);
        clear();
    }

    #[wasm_bindgen_test]
    fn test_apply_theme_sets_root_class() {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();

        apply_theme(Theme::Dark);
        assert!(root.class_list().contains(DARK_CLASS));

        apply_theme(Theme::Light);
        assert!(!root.class_list().contains(DARK_CLASS));
    }
}
