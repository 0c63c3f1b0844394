//! Per-target preference storage and document side effects.
//! Browser: local storage and `<html>` attributes. Desktop: JSON file, no document.

use journey_core::{DocumentEffects, PreferenceStore, Route};
use std::future::Future;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
mod web {
    use gloo::storage::{LocalStorage, Storage};
    use journey_core::{DocumentEffects, Language, PreferenceStore, StoreError};

    pub struct LocalStorageStore;

    impl PreferenceStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            LocalStorage::raw().get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            LocalStorage::raw()
                .set_item(key, value)
                .map_err(|e| StoreError::Backend(format!("{:?}", e)))
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            LocalStorage::raw()
                .remove_item(key)
                .map_err(|e| StoreError::Backend(format!("{:?}", e)))
        }
    }

    pub struct HtmlEffects;

    impl DocumentEffects for HtmlEffects {
        fn apply_language(&self, language: Language) {
            let root = gloo::utils::document_element();
            if let Err(e) = root.set_attribute("lang", language.code()) {
                tracing::warn!(error = ?e, "cannot set document language");
            }
        }

        fn apply_dark_mode(&self, dark: bool) {
            let classes = gloo::utils::document_element().class_list();
            let (on, off) = crate::view::scheme_classes(dark);
            let result = classes.remove_1(off).and_then(|_| classes.add_1(on));
            if let Err(e) = result {
                tracing::warn!(error = ?e, "cannot set color scheme");
            }
        }
    }

    pub fn location_path() -> String {
        gloo::utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn open_store() -> Box<dyn PreferenceStore> {
    Box::new(web::LocalStorageStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_store() -> Box<dyn PreferenceStore> {
    use journey_core::{FileStore, MemoryStore};
    match FileStore::default_location() {
        Some(path) => {
            tracing::info!(path = %path.display(), "using preference file");
            Box::new(FileStore::open(path))
        }
        None => {
            tracing::warn!("no data directory; preferences will not survive restart");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn document_effects() -> Box<dyn DocumentEffects> {
    Box::new(web::HtmlEffects)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_effects() -> Box<dyn DocumentEffects> {
    // Desktop windows style themselves from the dark-mode flag directly.
    Box::new(journey_core::NoEffects)
}

/// Route for the URL the app was opened at. Desktop always starts at the gallery.
pub fn initial_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        Route::from_path(&web::location_path())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Route::Gallery
    }
}

/// Timer raced against a submission. The browser fetch has no request
/// timeout of its own; native requests carry the timeout in the HTTP client.
#[cfg(target_arch = "wasm32")]
pub fn submission_deadline(timeout: Duration) -> impl Future<Output = ()> {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    gloo::timers::future::TimeoutFuture::new(millis)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn submission_deadline(_timeout: Duration) -> impl Future<Output = ()> {
    std::future::pending()
}
