//! Scenes and global actions — declarative bulk mode assignments.
//!
//! A scene is a named `(kind → mode)` table; kinds the table does not mention
//! fall back to [`DeviceMode::Off`]. A global action is the degenerate case
//! where every device gets the same mode regardless of kind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::device::{DeviceKind, DeviceMode};

/// Fleet-wide broadcast action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalAction {
    AllOn,
    AllOff,
    EcoMode,
}

impl GlobalAction {
    /// The mode this action assigns to every device.
    #[must_use]
    pub fn target_mode(self) -> DeviceMode {
        match self {
            Self::AllOn => DeviceMode::On,
            Self::AllOff => DeviceMode::Off,
            Self::EcoMode => DeviceMode::Eco,
        }
    }
}

/// A named per-kind mode assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    /// Explicit assignments; unlisted kinds default to `Off`.
    pub modes: HashMap<DeviceKind, DeviceMode>,
}

impl Scene {
    /// Start a scene with the given name and no explicit assignments.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modes: HashMap::new(),
        }
    }

    /// Add an explicit `kind → mode` assignment.
    #[must_use]
    pub fn with(mut self, kind: DeviceKind, mode: DeviceMode) -> Self {
        self.modes.insert(kind, mode);
        self
    }

    /// Mode for the given kind, defaulting to `Off` when unlisted.
    #[must_use]
    pub fn mode_for(&self, kind: DeviceKind) -> DeviceMode {
        self.modes.get(&kind).copied().unwrap_or(DeviceMode::Off)
    }
}

/// Registry of known scenes, keyed by name. Open to extension at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneTable {
    scenes: HashMap<String, Scene>,
}

impl SceneTable {
    /// An empty table with no scenes registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in scenes shipped with the app: Sleep, Away, and Home.
    ///
    /// Home is per-kind (AC and TV eco, fridge on, washer off) rather than a
    /// blanket all-on.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.insert(
            Scene::named("Sleep")
                .with(DeviceKind::Ac, DeviceMode::Eco)
                .with(DeviceKind::Fridge, DeviceMode::Eco),
        );
        table.insert(Scene::named("Away").with(DeviceKind::Fridge, DeviceMode::Eco));
        table.insert(
            Scene::named("Home")
                .with(DeviceKind::Ac, DeviceMode::Eco)
                .with(DeviceKind::Fridge, DeviceMode::On)
                .with(DeviceKind::Tv, DeviceMode::Eco),
        );
        table
    }

    /// Register a scene, replacing any existing scene with the same name.
    pub fn insert(&mut self, scene: Scene) {
        self.scenes.insert(scene.name.clone(), scene);
    }

    /// Look up a scene by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    /// Names of all registered scenes, sorted for stable presentation.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
