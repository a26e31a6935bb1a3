//! Theme Preference
//!
//! Dark/light flag persisted as `"dark"` / `"light"` and applied as classes
//! on `<body>`.

use crate::storage::KeyValueStorage;

/// Classes added to `<body>` in dark mode
const DARK_BODY_CLASSES: [&str; 2] = ["bg-dark", "text-light"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an explicit `"dark"` selects dark mode
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Navbar color scheme classes
    pub fn navbar_classes(&self) -> &'static str {
        match self {
            Theme::Light => "navbar-light bg-white",
            Theme::Dark => "navbar-dark bg-dark",
        }
    }
}

pub fn load_theme(storage: &impl KeyValueStorage, key: &str) -> Theme {
    Theme::from_stored(storage.get(key).as_deref())
}

pub fn save_theme(storage: &impl KeyValueStorage, key: &str, theme: Theme) {
    if let Err(e) = storage.set(key, theme.as_str()) {
        log::error!("failed to persist theme: {}", e);
    }
}

/// Toggle the dark-mode classes on `<body>`
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let class_list = body.class_list();
    for class in DARK_BODY_CLASSES {
        let result = if theme.is_dark() {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("failed to update body class '{}': {:?}", class, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_toggle_and_persist() {
        let storage = MemoryStorage::default();
        assert_eq!(load_theme(&storage, "theme"), Theme::Light);

        let next = load_theme(&storage, "theme").toggled();
        save_theme(&storage, "theme", next);
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(load_theme(&storage, "theme"), Theme::Dark);

        save_theme(&storage, "theme", next.toggled());
        assert_eq!(storage.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_navbar_classes() {
        assert_eq!(Theme::Dark.navbar_classes(), "navbar-dark bg-dark");
        assert_eq!(Theme::Light.navbar_classes(), "navbar-light bg-white");
    }
}
