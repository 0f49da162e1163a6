//! Demo configuration: a small RON file layered over defaults.
//! Every study boots from the same `DemoConfig`; per-study values
//! (shape sizes, colors, durations) stay as literals in the binaries.

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, io, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Close the app after this many seconds. 0.0 (or omitted) = run until quit.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "shapelab".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    /// Clear color as an sRGB hex string, e.g. "16161e".
    pub background: String,
    /// Draw rapier collider outlines in the physics studies.
    pub rapier_debug: bool,
    /// Soft loader errors, reported once at startup.
    #[serde(skip)]
    pub load_notes: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            background: "16161e".into(),
            rapier_debug: false,
            load_notes: Vec::new(),
        }
    }
}

const FALLBACK_BACKGROUND: Color = Color::srgb(0.086, 0.086, 0.118);

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads config layers in order, later files overriding earlier ones via
    /// a deep map merge. Missing files are skipped; other problems are
    /// returned as soft errors alongside the list of layers actually used.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;

        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    errors.push(format!("{}: read error: {e}", path.display()));
                    continue;
                }
            };
            match ron::from_str::<Value>(&text) {
                Ok(layer) => {
                    match &mut merged {
                        Some(base) => merge_ron(base, layer),
                        None => merged = Some(layer),
                    }
                    used.push(path.display().to_string());
                }
                Err(e) => errors.push(format!("{}: parse error: {e}", path.display())),
            }
        }

        let cfg = match merged {
            Some(value) => match value.into_rust::<DemoConfig>() {
                Ok(cfg) => cfg,
                Err(e) => {
                    errors.push(format!("merged config invalid, using defaults: {e}"));
                    DemoConfig::default()
                }
            },
            None => DemoConfig::default(),
        };
        (cfg, used, errors)
    }

    /// Suspicious values worth a startup `warn!`, never hard errors.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let w = &self.window;
        if w.width <= 0.0 || w.height <= 0.0 {
            warnings.push("window dimensions must be > 0".into());
        }
        if w.width * w.height > 10_000_000.0 {
            warnings.push(format!("very large window area: {}x{}", w.width, w.height));
        }
        if w.auto_close < 0.0 {
            warnings.push(format!(
                "window.autoClose {} negative, treated as disabled",
                w.auto_close
            ));
        } else if w.auto_close > 0.0 && w.auto_close < 0.01 {
            warnings.push(format!(
                "window.autoClose {} closes almost immediately",
                w.auto_close
            ));
        }
        if w.title.is_empty() {
            warnings.push("window.title is empty".into());
        }
        if Srgba::hex(&self.background).is_err() {
            warnings.push(format!(
                "background {:?} is not a hex color, using fallback",
                self.background
            ));
        }
        warnings
    }

    pub fn background_color(&self) -> Color {
        match Srgba::hex(&self.background) {
            Ok(color) => color.into(),
            Err(_) => FALLBACK_BACKGROUND,
        }
    }
}

fn merge_ron(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(base_map), Value::Map(overlay_map)) => {
            'overlay: for (key, value) in overlay_map.into_iter() {
                for (existing, slot) in base_map.iter_mut() {
                    if *existing == key {
                        merge_ron(slot, value);
                        continue 'overlay;
                    }
                }
                base_map.insert(key, value);
            }
        }
        (slot, value) => *slot = value,
    }
}
