//! Camera and input options with TOML preset support.
//!
//! Every tweakable camera and keyboard setting lives here. Options
//! serialize to/from TOML so a tuned camera can be stored as a preset.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera placement, projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// Rejects values the camera cannot be built from: a non-positive near
    /// plane, a far plane not beyond it, a zero world up, or one key bound
    /// to several actions.
    pub fn from_toml_str(content: &str) -> Result<Self, FlycamError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Check the invariants camera construction relies on.
    pub fn validate(&self) -> Result<(), FlycamError> {
        let camera = &self.camera;
        // Written as positive comparisons so NaN is rejected too.
        let near_ok = camera.znear > 0.0;
        let far_ok = camera.zfar > camera.znear;
        if !near_ok {
            return Err(FlycamError::OptionsParse(format!(
                "camera.znear must be positive, got {}",
                camera.znear
            )));
        }
        if !far_ok {
            return Err(FlycamError::OptionsParse(format!(
                "camera.zfar ({}) must exceed camera.znear ({})",
                camera.zfar, camera.znear
            )));
        }
        let up_len = glam::Vec3::from_array(camera.world_up).length();
        if !(up_len.is_finite() && up_len > 0.0) {
            return Err(FlycamError::OptionsParse(
                "camera.world_up must be a non-zero vector".into(),
            ));
        }
        let conflicts = self.keybindings.conflicting_keys();
        if !conflicts.is_empty() {
            return Err(FlycamError::OptionsParse(format!(
                "keys bound to more than one action: {}",
                conflicts.join(", ")
            )));
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)?;
        log::info!("Saved options to '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::MovePolicy;
    use crate::input::KeyAction;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("flycam-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
move_speed = 6.0
move_policy = "walk"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 6.0);
        assert_eq!(opts.camera.move_policy, MovePolicy::Walk);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 60.0);
        assert_eq!(opts.camera.yaw, -90.0);
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera]\nfovy = \"wide\"").unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));
    }

    #[test]
    fn custom_bindings_are_searchable_after_load() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
quit = "KeyQ"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn shared_key_in_preset_is_rejected() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "KeyW"
move_up = "KeyW"
"#;
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(
            matches!(&err, FlycamError::OptionsParse(msg) if msg.contains("KeyW")),
            "{err}"
        );
    }

    #[test]
    fn bad_clip_planes_are_rejected() {
        for toml_str in [
            "[camera]\nznear = 0.0",
            "[camera]\nznear = -1.0",
            "[camera]\nznear = 5.0\nzfar = 5.0",
            "[camera]\nznear = 1.0\nzfar = 0.5",
        ] {
            let err = Options::from_toml_str(toml_str).unwrap_err();
            assert!(matches!(err, FlycamError::OptionsParse(_)), "{toml_str}");
        }
        let ok = Options::from_toml_str("[camera]\nznear = 1.0\nzfar = 2.0");
        assert!(ok.is_ok());
    }

    #[test]
    fn zero_world_up_is_rejected() {
        let err = Options::from_toml_str("[camera]\nworld_up = [0.0, 0.0, 0.0]")
            .unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyA"), Some(KeyAction::MoveLeft));
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut opts = Options::default();
        opts.keybindings.bind(KeyAction::MoveUp, "KeyE");
        assert_eq!(opts.keybindings.lookup("KeyE"), Some(KeyAction::MoveUp));
        assert_eq!(opts.keybindings.lookup("Space"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.camera.fovy = 45.0;
        opts.save(&dir.join("narrow.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "narrow"]);
        let loaded = Options::load(&dir.join("narrow.toml")).unwrap();
        assert_eq!(loaded, opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = scratch_dir("missing");
        let err = Options::load(&dir.join("absent.toml")).unwrap_err();
        assert!(matches!(err, FlycamError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("move_policy").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("position").is_none());
    }
}
