use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::animation::ease::{StepOutcome, step_toward};
use crate::animation::morph::MorphMode;
use crate::effects::library::EffectKind;
use crate::effects::registry::{self, EffectCursor};
use crate::font::glyphs::GlyphTable;
use crate::foundation::core::{DotSet, Rgb8, Viewport};
use crate::foundation::error::DotsResult;
use crate::layout::text::{self, TextStyle};
use crate::render::surface::{DrawSurface, FrameRGBA};

/// Default per-frame step distance.
pub const DEFAULT_SPEED: u32 = 5;

/// Hook invoked around the animation step of every frame.
pub type DrawHook = Box<dyn FnMut()>;

/// One user-facing command, as a host would bind it to keys or a script.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Re-apply the current effect.
    Apply,
    /// Move the cursor forward and apply.
    Next,
    /// Move the cursor back and apply.
    Previous,
    /// Pick a uniformly random effect and apply it.
    Random,
    /// Apply the effect at an index without moving the cursor.
    Select(usize),
    /// Raise the speed by one.
    SpeedUp,
    /// Lower the speed by one, stopping at zero.
    SpeedDown,
    /// Set the speed.
    SetSpeed(u32),
    /// Replace the dots with new text and re-apply the current effect.
    SetText(String),
    /// Drop every dot.
    Clear,
}

/// Everything one particle-text animation needs: the font, the three dot sets, the style
/// state and the effect cursor.
///
/// The source set is what text layout produces; effects read it and write the target set.
/// The live set is what gets painted, and each frame moves it toward its goal according to
/// the [`MorphMode`].
pub struct Scene {
    glyphs: GlyphTable,
    viewport: Viewport,
    text_style: TextStyle,
    morph: MorphMode,
    source: DotSet,
    target: DotSet,
    live: DotSet,
    background: Rgb8,
    color: Rgb8,
    speed: u32,
    cursor: EffectCursor,
    rng: StdRng,
    pre_draw: Option<DrawHook>,
    post_draw: Option<DrawHook>,
    last_step: StepOutcome,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("viewport", &self.viewport)
            .field("morph", &self.morph)
            .field("source_len", &self.source.len())
            .field("target_len", &self.target.len())
            .field("live_len", &self.live.len())
            .field("background", &self.background)
            .field("color", &self.color)
            .field("speed", &self.speed)
            .field("effect", &self.cursor.index())
            .field("pre_draw", &self.pre_draw.is_some())
            .field("post_draw", &self.post_draw.is_some())
            .finish()
    }
}

impl Scene {
    /// Create an empty scene with an entropy-seeded random source.
    pub fn new(glyphs: GlyphTable, viewport: Viewport) -> DotsResult<Self> {
        Self::with_rng(glyphs, viewport, StdRng::from_os_rng())
    }

    /// Create an empty scene whose random effects replay identically for the same seed.
    pub fn with_seed(glyphs: GlyphTable, viewport: Viewport, seed: u64) -> DotsResult<Self> {
        Self::with_rng(glyphs, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(glyphs: GlyphTable, viewport: Viewport, rng: StdRng) -> DotsResult<Self> {
        viewport.validate()?;
        Ok(Self {
            glyphs,
            viewport,
            text_style: TextStyle::default(),
            morph: MorphMode::default(),
            source: DotSet::new(),
            target: DotSet::new(),
            live: DotSet::new(),
            background: Rgb8::BLACK,
            color: Rgb8::WHITE,
            speed: DEFAULT_SPEED,
            cursor: EffectCursor::default(),
            rng,
            pre_draw: None,
            post_draw: None,
            last_step: StepOutcome::Skipped,
        })
    }

    /// Font used by text layout.
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Viewport effects and rendering use.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Change the viewport. Effects applied afterwards use the new half extents.
    pub fn set_viewport(&mut self, viewport: Viewport) -> DotsResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(())
    }

    /// Text style applied by [`Scene::set_text`].
    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    /// Replace the style applied by [`Scene::set_text`].
    pub fn set_text_style(&mut self, style: TextStyle) -> DotsResult<()> {
        style.validate()?;
        self.text_style = style;
        Ok(())
    }

    /// Current travel direction.
    pub fn morph(&self) -> MorphMode {
        self.morph
    }

    /// Change the travel direction; takes effect on the next apply.
    pub fn set_morph(&mut self, morph: MorphMode) {
        self.morph = morph;
    }

    /// Maximum distance a dot moves per frame.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the per-frame step distance. Zero freezes motion.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    /// Raise the speed by one.
    pub fn increase_speed(&mut self) {
        self.speed = self.speed.saturating_add(1);
    }

    /// Lower the speed by one, stopping at zero.
    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.saturating_sub(1);
    }

    /// Current effect cursor position.
    pub fn effect(&self) -> usize {
        self.cursor.index()
    }

    /// Move the cursor without applying anything.
    pub fn set_effect(&mut self, index: usize) {
        self.cursor.set(index);
    }

    /// Step the cursor back, stopping at the first effect.
    pub fn previous_effect(&mut self) {
        self.cursor.previous();
    }

    /// Step the cursor forward, stopping at the last effect.
    pub fn next_effect(&mut self) {
        self.cursor.next();
    }

    /// Background fill color.
    pub fn background(&self) -> Rgb8 {
        self.background
    }

    /// Set the background fill color.
    pub fn set_background(&mut self, r: u8, g: u8, b: u8) {
        self.background = Rgb8::new(r, g, b);
    }

    /// Dot color.
    pub fn color(&self) -> Rgb8 {
        self.color
    }

    /// Set the dot color.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Rgb8::new(r, g, b);
    }

    /// Install a hook that runs after the background fill and before the animation step.
    pub fn on_pre_draw(&mut self, hook: Option<DrawHook>) {
        self.pre_draw = hook;
    }

    /// Install a hook that runs after the dots are painted.
    pub fn on_post_draw(&mut self, hook: Option<DrawHook>) {
        self.post_draw = hook;
    }

    /// Remove both draw hooks.
    pub fn clear_callbacks(&mut self) {
        self.pre_draw = None;
        self.post_draw = None;
    }

    /// Dots produced by text layout and [`Scene::add_dot`].
    pub fn source(&self) -> &DotSet {
        &self.source
    }

    /// Output of the last applied effect.
    pub fn target(&self) -> &DotSet {
        &self.target
    }

    /// Positions painted on the next frame.
    pub fn live(&self) -> &DotSet {
        &self.live
    }

    /// Drop every dot: source, live and target.
    pub fn clear_dots(&mut self) {
        self.source.clear();
        self.live.clear();
        self.target.clear();
    }

    /// Drop the target set only.
    pub fn clear_effect_dots(&mut self) {
        self.target.clear();
    }

    /// Append one source dot. It appears in the live set at the same position.
    pub fn add_dot(&mut self, x: f64, y: f64) {
        self.source.push(x, y);
        self.live.push(x, y);
    }

    /// Append one dot to the target set.
    pub fn add_effect_dot(&mut self, x: f64, y: f64) {
        self.target.push(x, y);
    }

    /// Append the dots of `text` laid out with `style`; returns how many were added.
    pub fn add_text(&mut self, text: &str, style: &TextStyle) -> DotsResult<usize> {
        let mut laid_out = DotSet::new();
        let added = text::add_text(&mut laid_out, text, &self.glyphs, style)?;
        self.source.extend_from(&laid_out);
        self.live.extend_from(&laid_out);
        Ok(added)
    }

    /// Clear every dot, then lay out `text` with the scene's text style.
    pub fn set_text(&mut self, text: &str) -> DotsResult<usize> {
        self.clear_dots();
        let style = self.text_style;
        self.add_text(text, &style)
    }

    /// Apply effect `index`, or the cursor's effect for `None`.
    ///
    /// The target set is cleared first. An index outside the registry leaves it empty and
    /// returns `None`; the cursor never moves.
    pub fn apply_effect(&mut self, index: Option<usize>) -> Option<EffectKind> {
        let index = index.unwrap_or(self.cursor.index());
        self.run_effect(index)
    }

    /// Move the cursor to a uniformly random effect and apply it.
    pub fn apply_random_effect(&mut self) -> Option<EffectKind> {
        self.cursor.randomize(&mut self.rng);
        self.run_effect(self.cursor.index())
    }

    /// Step the cursor back (saturating) and apply.
    pub fn apply_previous_effect(&mut self) -> Option<EffectKind> {
        self.cursor.previous();
        self.run_effect(self.cursor.index())
    }

    /// Step the cursor forward (saturating) and apply.
    pub fn apply_next_effect(&mut self) -> Option<EffectKind> {
        self.cursor.next();
        self.run_effect(self.cursor.index())
    }

    fn run_effect(&mut self, index: usize) -> Option<EffectKind> {
        let kind = registry::apply_into(
            index,
            &self.source,
            &self.viewport,
            &mut self.rng,
            &mut self.target,
        )?;
        if self.morph == MorphMode::Assemble {
            self.live.copy_from(&self.target);
        }
        self.last_step = StepOutcome::Skipped;
        Some(kind)
    }

    /// Run one command against the scene.
    pub fn execute(&mut self, command: &Command) -> DotsResult<()> {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Apply => {
                self.apply_effect(None);
            }
            Command::Next => {
                self.apply_next_effect();
            }
            Command::Previous => {
                self.apply_previous_effect();
            }
            Command::Random => {
                self.apply_random_effect();
            }
            Command::Select(i) => {
                self.apply_effect(Some(*i));
            }
            Command::SpeedUp => self.increase_speed(),
            Command::SpeedDown => self.decrease_speed(),
            Command::SetSpeed(s) => self.set_speed(*s),
            Command::SetText(t) => {
                if !t.is_empty() {
                    self.set_text(t)?;
                    self.apply_effect(None);
                }
            }
            Command::Clear => self.clear_dots(),
        }
        Ok(())
    }

    /// Run one animation step without drawing.
    pub fn advance(&mut self) -> StepOutcome {
        let goal = match self.morph {
            MorphMode::Assemble => &self.source,
            MorphMode::Disperse => &self.target,
        };
        self.last_step = step_toward(&mut self.live, goal, self.speed);
        self.last_step
    }

    /// Outcome of the most recent animation step.
    pub fn last_step(&self) -> StepOutcome {
        self.last_step
    }

    /// `true` once the last animation step found every live dot on its goal.
    pub fn is_settled(&self) -> bool {
        self.last_step.is_settled()
    }

    /// Render one frame: background, pre-draw hook, animation step, dots, post-draw hook.
    pub fn render_frame(&mut self, surface: &mut dyn DrawSurface) -> DotsResult<FrameRGBA> {
        surface.begin_frame(&self.viewport)?;
        surface.fill_background(self.background);

        if let Some(hook) = self.pre_draw.as_mut() {
            hook();
        }

        self.advance();

        if !self.live.is_empty() {
            surface.fill_dots(self.live.as_slice(), self.color);
        }

        if let Some(hook) = self.post_draw.as_mut() {
            hook();
        }

        surface.end_frame()
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
