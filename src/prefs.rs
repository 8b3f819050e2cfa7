use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const KEY_THEME: &str = "theme";
pub const KEY_ACCENT: &str = "accent";
pub const KEY_LIVE: &str = "live";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Indigo,
    Emerald,
    Amber,
    Rose,
}

impl Accent {
    pub const ALL: [Accent; 4] = [Accent::Indigo, Accent::Emerald, Accent::Amber, Accent::Rose];

    pub fn next(self) -> Self {
        match self {
            Accent::Indigo => Accent::Emerald,
            Accent::Emerald => Accent::Amber,
            Accent::Amber => Accent::Rose,
            Accent::Rose => Accent::Indigo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Accent::Indigo => "indigo",
            Accent::Emerald => "emerald",
            Accent::Amber => "amber",
            Accent::Rose => "rose",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        Accent::ALL.into_iter().find(|a| a.label() == s)
    }
}

/// String key-value storage behind the preference store. Injected so the
/// shell never touches the filesystem directly and tests can run in memory.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Best-effort: implementations swallow write failures.
    fn set(&mut self, key: &str, value: &str);
}

/// The three UI preference flags. Each field persists independently on
/// change; there is no cross-field atomicity and none is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub accent: Accent,
    pub live: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent: Accent::Indigo,
            live: true,
        }
    }
}

impl Preferences {
    /// Rehydrate from storage. Absent or unrecognized values fall back to
    /// the default for that field only.
    pub fn load(store: &dyn KvStore) -> Self {
        let defaults = Self::default();
        Self {
            theme: store
                .get(KEY_THEME)
                .and_then(|s| Theme::parse(&s))
                .unwrap_or(defaults.theme),
            accent: store
                .get(KEY_ACCENT)
                .and_then(|s| Accent::parse(&s))
                .unwrap_or(defaults.accent),
            live: store
                .get(KEY_LIVE)
                .and_then(|s| match s.as_str() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                })
                .unwrap_or(defaults.live),
        }
    }

    pub fn set_theme(&mut self, store: &mut dyn KvStore, theme: Theme) {
        self.theme = theme;
        store.set(KEY_THEME, theme.as_str());
    }

    pub fn set_accent(&mut self, store: &mut dyn KvStore, accent: Accent) {
        self.accent = accent;
        store.set(KEY_ACCENT, accent.label());
    }

    pub fn set_live(&mut self, store: &mut dyn KvStore, live: bool) {
        self.live = live;
        store.set(KEY_LIVE, if live { "true" } else { "false" });
    }
}

/// Filesystem-backed store: one JSON object of string keys, rewritten
/// whole on every `set`. Read once at open; unreadable or malformed files
/// start empty.
pub struct FsStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// Default location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pulseboard").join("prefs.json"))
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                debug!(path = %parent.display(), error = %e, "prefs dir unavailable");
                return;
            }
        }
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    debug!(path = %self.path.display(), error = %e, "prefs write failed");
                }
            }
            Err(e) => debug!(error = %e, "prefs serialize failed"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KvStore for FsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemStore(BTreeMap<String, String>);

#[cfg(test)]
impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}
