use crate::foundation::error::{DotsError, DotsResult};

pub use kurbo::{Point, Vec2};

/// A single particle position. Particles are anonymous; only their index in a [`DotSet`]
/// ties a position to a target.
pub type Dot = Point;

/// Ordered set of particle positions.
///
/// Each entry stores both coordinates, so the x and y sequences can never drift to
/// different lengths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DotSet {
    dots: Vec<Dot>,
}

impl DotSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `n` dots.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            dots: Vec::with_capacity(n),
        }
    }

    /// Append one dot.
    pub fn push(&mut self, x: f64, y: f64) {
        self.dots.push(Point::new(x, y));
    }

    /// Append one dot given as a point.
    pub fn push_point(&mut self, p: Dot) {
        self.dots.push(p);
    }

    /// Number of dots.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Return `true` when the set holds no dots.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Remove every dot, keeping the allocation.
    pub fn clear(&mut self) {
        self.dots.clear();
    }

    /// Dot at `i`, if any.
    pub fn get(&self, i: usize) -> Option<Dot> {
        self.dots.get(i).copied()
    }

    /// Borrow all dots in index order.
    pub fn as_slice(&self) -> &[Dot] {
        &self.dots
    }

    /// Mutably borrow all dots in index order.
    pub fn as_mut_slice(&mut self) -> &mut [Dot] {
        &mut self.dots
    }

    /// Iterate dots in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dot> {
        self.dots.iter()
    }

    /// Replace the contents with a copy of `other`.
    pub fn copy_from(&mut self, other: &DotSet) {
        self.dots.clear();
        self.dots.extend_from_slice(&other.dots);
    }

    /// Append every dot of `other`.
    pub fn extend_from(&mut self, other: &DotSet) {
        self.dots.extend_from_slice(&other.dots);
    }
}

impl FromIterator<Dot> for DotSet {
    fn from_iter<I: IntoIterator<Item = Dot>>(iter: I) -> Self {
        Self {
            dots: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DotSet {
    type Item = &'a Dot;
    type IntoIter = std::slice::Iter<'a, Dot>;

    fn into_iter(self) -> Self::IntoIter {
        self.dots.iter()
    }
}

/// Logical drawing area in CSS-style pixels plus the device pixel ratio.
///
/// Dot coordinates are relative to the viewport center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Logical width.
    pub width: f64,
    /// Logical height.
    pub height: f64,
    /// Device pixels per logical pixel.
    #[serde(default = "one")]
    pub scale: f64,
}

fn one() -> f64 {
    1.0
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 360.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Create a validated viewport with scale 1.
    pub fn new(width: f64, height: f64) -> DotsResult<Self> {
        Self::with_scale(width, height, 1.0)
    }

    /// Create a validated viewport with an explicit device pixel ratio.
    pub fn with_scale(width: f64, height: f64, scale: f64) -> DotsResult<Self> {
        let vp = Self {
            width,
            height,
            scale,
        };
        vp.validate()?;
        Ok(vp)
    }

    /// Check that all extents are finite and positive.
    pub fn validate(&self) -> DotsResult<()> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(DotsError::config(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !ok(self.scale) {
            return Err(DotsError::config(format!(
                "viewport scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Half of the logical width.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the logical height.
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Backing-store size in device pixels.
    pub fn device_size(&self) -> (u32, u32) {
        let w = (self.width * self.scale).round().max(1.0) as u32;
        let h = (self.height * self.scale).round().max(1.0) as u32;
        (w, h)
    }
}

/// Opaque RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA8 bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn parse_hex(s: &str) -> DotsResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let nibble = |c: u8| -> DotsResult<u8> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(DotsError::validation(format!("invalid hex color '{s}'"))),
            }
        };
        let b = hex.as_bytes();
        match b.len() {
            3 => Ok(Self::new(
                nibble(b[0])? * 17,
                nibble(b[1])? * 17,
                nibble(b[2])? * 17,
            )),
            6 => Ok(Self::new(
                nibble(b[0])? * 16 + nibble(b[1])?,
                nibble(b[2])? * 16 + nibble(b[3])?,
                nibble(b[4])? * 16 + nibble(b[5])?,
            )),
            _ => Err(DotsError::validation(format!(
                "hex color must have 3 or 6 digits, got '{s}'"
            ))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = DotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
