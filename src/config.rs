use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::animation::morph::MorphMode;
use crate::effects::library::EffectKind;
use crate::font::builtin;
use crate::font::glyphs::GlyphTable;
use crate::foundation::core::{Rgb8, Viewport};
use crate::foundation::error::{DotsError, DotsResult};
use crate::layout::text::TextStyle;
use crate::render::surface::DrawSurface;
use crate::scene::{DEFAULT_SPEED, Scene};
use crate::session::{ScheduledCommand, Session};

/// Glyph atlas on disk.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontConfig {
    /// Atlas image; relative paths resolve against the config file's directory.
    pub path: PathBuf,
    /// One character per cell, left to right.
    pub alphabet: String,
    /// Cell width in atlas pixels.
    pub cell_width: u32,
    /// Cell height in atlas pixels.
    pub cell_height: u32,
}

/// Effect selection by registry index or stable name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EffectRef {
    /// Registry index.
    Index(usize),
    /// Effect name, e.g. `"ring"`.
    Name(String),
}

impl Default for EffectRef {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl EffectRef {
    /// Resolve to a registry entry.
    pub fn resolve(&self) -> DotsResult<EffectKind> {
        match self {
            Self::Index(i) => EffectKind::from_index(*i)
                .ok_or_else(|| DotsError::config(format!("no effect at index {i}"))),
            Self::Name(name) => EffectKind::from_name(name)
                .ok_or_else(|| DotsError::config(format!("unknown effect '{name}'"))),
        }
    }
}

impl std::str::FromStr for EffectRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Name(s.to_owned()),
        })
    }
}

/// JSON scene description. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Drawing area.
    pub viewport: Viewport,
    /// Initial text.
    pub text: String,
    /// Placement and sampling of the text.
    pub text_style: TextStyle,
    /// Glyph atlas; `None` uses the built-in 5x8 font.
    pub font: Option<FontConfig>,
    /// Background fill.
    pub background: Rgb8,
    /// Dot color.
    pub color: Rgb8,
    /// Per-frame step distance.
    pub speed: u32,
    /// Effect applied at startup.
    pub effect: EffectRef,
    /// Travel direction.
    pub morph: MorphMode,
    /// Seed for random effects; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Commands to replay at given frames.
    pub script: Vec<ScheduledCommand>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            text: "checking".to_owned(),
            text_style: TextStyle::default(),
            font: None,
            background: Rgb8::BLACK,
            color: Rgb8::WHITE,
            speed: DEFAULT_SPEED,
            effect: EffectRef::default(),
            morph: MorphMode::default(),
            seed: None,
            script: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DotsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DotsError::config(format!("parse scene config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json(s: &str) -> DotsResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| DotsError::config(format!("parse scene config JSON: {e}")))
    }

    /// Parse a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> DotsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DotsError::config(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> DotsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DotsError::serde(e.to_string()))
    }

    /// Check every field that can be checked without touching the filesystem.
    pub fn validate(&self) -> DotsResult<()> {
        self.viewport.validate()?;
        self.text_style.validate()?;
        self.effect.resolve()?;
        Ok(())
    }

    /// Load the configured font, or the built-in one.
    pub fn load_glyphs(&self, base_dir: &Path) -> DotsResult<GlyphTable> {
        match &self.font {
            None => builtin::glyph_table(),
            Some(font) => {
                let path = if font.path.is_absolute() {
                    font.path.clone()
                } else {
                    base_dir.join(&font.path)
                };
                GlyphTable::load(&path, &font.alphabet, font.cell_width, font.cell_height)
            }
        }
    }

    /// Build a scene with the text laid out and the startup effect applied.
    #[tracing::instrument(skip(self), fields(text = %self.text))]
    pub fn build_scene(&self, base_dir: &Path) -> DotsResult<Scene> {
        self.validate()?;
        let effect = self.effect.resolve()?;
        let glyphs = self.load_glyphs(base_dir)?;

        let mut scene = match self.seed {
            Some(seed) => Scene::with_seed(glyphs, self.viewport, seed)?,
            None => Scene::new(glyphs, self.viewport)?,
        };
        scene.set_text_style(self.text_style)?;
        scene.set_background(self.background.r, self.background.g, self.background.b);
        scene.set_color(self.color.r, self.color.g, self.color.b);
        scene.set_speed(self.speed);
        scene.set_morph(self.morph);
        scene.set_effect(effect.index());

        let dots = scene.set_text(&self.text)?;
        scene.apply_effect(None);
        tracing::debug!(dots, effect = effect.name(), "scene built");
        Ok(scene)
    }

    /// Build a session drawing into `surface`, with the script queued.
    pub fn build_session(
        &self,
        base_dir: &Path,
        surface: Box<dyn DrawSurface>,
    ) -> DotsResult<Session> {
        let scene = self.build_scene(base_dir)?;
        let mut session = Session::new(scene, surface);
        session.schedule_all(self.script.iter().cloned())?;
        Ok(session)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
