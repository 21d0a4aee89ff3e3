use rand::Rng;

use crate::foundation::core::{Dot, DotSet, Point, Viewport};
use crate::foundation::math::{coin, dist, map_range, rad, random_int, value_to_max_range};

/// A target layout, addressed by its registry index.
///
/// Unless noted otherwise, `target[i]` is derived from `source[i]` and/or the index `i`,
/// and the output has the same length as the source. In the formulas below `n` is the
/// source length, `hw`/`hh` are the viewport half extents and `W`/`H` the full extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Every dot on one circle of radius `min(hw, hh)` at angle `i` radians.
    Ring,
    /// Archimedean spiral `(cos i * i, sin i * i)`.
    Spiral,
    /// Source scaled by 100.
    Zoom,
    /// `(cos(x) * i, sin(y) * i)`.
    TrigScramble,
    /// Uniform random integer positions over the viewport.
    Scatter,
    /// Each dot jumps to the midpoint of a random viewport edge.
    EdgeMidpoints,
    /// Everything collapses onto the `(hw, hh)` corner.
    Corner,
    /// Swap the axes.
    Transpose,
    /// Swap the axes and double.
    TransposeDouble,
    /// Ellipse filling the viewport, one degree per dot.
    DegreeEllipse,
    /// Line `y = x` centered on the origin, one unit per dot.
    Diagonal,
    /// One sine period per 360 units along a slowly advancing x.
    SineWave,
    /// Like [`EffectKind::Diagonal`] but packed twenty dots per unit.
    DiagonalTight,
    /// Source shifted by `-min(hw, hh)` on both axes.
    ShiftCorner,
    /// `y` lifted by `|sin(y°) * hh|`.
    SineLift,
    /// Mirrored horizontally onto the top edge.
    TopLineMirror,
    /// Circle of radius `hh` around the `(hw, hh)` corner.
    CornerCircle,
    /// Ellipse of radii `W`, `H` around `(hw, hh)`, mostly off screen.
    WideOrbit,
    /// Transposed copy pushed into a random diagonal quadrant.
    TransposeQuadrants,
    /// Four concentric rings, dots assigned at random.
    NestedRings,
    /// Spiral in degrees, shrunk by 20.
    SlowSpiral,
    /// Polar remap: radius `2 * |p|`, angle `sin(i) * n` degrees.
    PolarSpin,
    /// Polar remap: angle `f = sin(i) * n` degrees, radius `|p - (f, f)| / 50`.
    PolarFold,
    /// `(x cos f°, y sin f°)` with `f = sin(x + y) * n`.
    PolarScale,
    /// [`EffectKind::PolarScale`] plus the swapped source.
    PolarShear,
    /// Axes stretched by the inverse aspect ratio, times 4.
    AspectSwap,
    /// [`EffectKind::AspectSwap`] scaled by `|p| / 20` and raised by 500.
    AspectWarp,
    /// Mirror vertically.
    FlipVertical,
    /// `y` raised by `|sin i| * hh`.
    SineDrop,
    /// `x` kept, `y = i / 50`.
    StackRows,
    /// `(i / 50, i / 50)`.
    DiagonalRamp,
    /// Spiral whose radius folds back every `min(hw, hh)` units.
    WrappedSpiral,
    /// Rotating wave mixed with the source x.
    RotatedWave,
    /// Reversed order: `target[i] = source[n + 1 - i]`.
    ///
    /// The index is shifted by two from a plain reversal. The first two dots have no
    /// partner in range and go to the origin.
    Mirror,
    /// Two rings of radius 100: the first half of the dots around `(m, m)`, the rest around
    /// `(-m, -m)`, with `m = min(hw, hh)`.
    TwinRings,
    /// Heart-like closed curve of radius `min(hw, hh) / 1.2`.
    Heart,
    /// `tan`/`cos` curve clamped to the full viewport size.
    TangentClamp,
    /// `x = sin(z°) * max(hw, hh)`, `y = x * cos(x°)`, `z = i - n`.
    SineCurve,
    /// `x = sin(z) * hw`, `y = x * cos(z)`, `z = i - n`.
    Sweep,
    /// `x = sin(z°) * hw`, `y = sqrt(|x|)`.
    RootCurve,
    /// Source with every dot pushed out by 150 along angle `i`.
    Halo,
    /// Source x normalized to `[-hw, hw]`.
    StretchX,
    /// Source normalized to the whole viewport.
    StretchXY,
    /// Left and right edges, source x reused as y.
    SideWalls,
    /// Rings of radius `min(hw, hh)` strung along the viewport diagonal.
    RingTrail,
    /// The source cut into 3..=10 consecutive groups, each moved by a random offset.
    ///
    /// Groups hold `round(n / groups)` dots, so the output may be shorter than the source.
    Puzzle,
    /// `y` raised by `|sin(i°)| * hh`.
    SineDropDegrees,
    /// Full circle of radius `min(hw, hh)`, starting at a random half turn.
    Circle,
    /// Dots alternate between the top and bottom edges.
    Stripes,
}

impl EffectKind {
    /// Every effect in registry order.
    pub const ALL: [EffectKind; 49] = [
        Self::Ring,
        Self::Spiral,
        Self::Zoom,
        Self::TrigScramble,
        Self::Scatter,
        Self::EdgeMidpoints,
        Self::Corner,
        Self::Transpose,
        Self::TransposeDouble,
        Self::DegreeEllipse,
        Self::Diagonal,
        Self::SineWave,
        Self::DiagonalTight,
        Self::ShiftCorner,
        Self::SineLift,
        Self::TopLineMirror,
        Self::CornerCircle,
        Self::WideOrbit,
        Self::TransposeQuadrants,
        Self::NestedRings,
        Self::SlowSpiral,
        Self::PolarSpin,
        Self::PolarFold,
        Self::PolarScale,
        Self::PolarShear,
        Self::AspectSwap,
        Self::AspectWarp,
        Self::FlipVertical,
        Self::SineDrop,
        Self::StackRows,
        Self::DiagonalRamp,
        Self::WrappedSpiral,
        Self::RotatedWave,
        Self::Mirror,
        Self::TwinRings,
        Self::Heart,
        Self::TangentClamp,
        Self::SineCurve,
        Self::Sweep,
        Self::RootCurve,
        Self::Halo,
        Self::StretchX,
        Self::StretchXY,
        Self::SideWalls,
        Self::RingTrail,
        Self::Puzzle,
        Self::SineDropDegrees,
        Self::Circle,
        Self::Stripes,
    ];

    /// Registry index.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&k| k == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Effect at registry index `i`.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Look up an effect by its [`EffectKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Return `true` for effects whose output can be shorter than their input.
    pub fn truncates(self) -> bool {
        matches!(self, Self::Puzzle)
    }

    /// Stable snake_case identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Spiral => "spiral",
            Self::Zoom => "zoom",
            Self::TrigScramble => "trig_scramble",
            Self::Scatter => "scatter",
            Self::EdgeMidpoints => "edge_midpoints",
            Self::Corner => "corner",
            Self::Transpose => "transpose",
            Self::TransposeDouble => "transpose_double",
            Self::DegreeEllipse => "degree_ellipse",
            Self::Diagonal => "diagonal",
            Self::SineWave => "sine_wave",
            Self::DiagonalTight => "diagonal_tight",
            Self::ShiftCorner => "shift_corner",
            Self::SineLift => "sine_lift",
            Self::TopLineMirror => "top_line_mirror",
            Self::CornerCircle => "corner_circle",
            Self::WideOrbit => "wide_orbit",
            Self::TransposeQuadrants => "transpose_quadrants",
            Self::NestedRings => "nested_rings",
            Self::SlowSpiral => "slow_spiral",
            Self::PolarSpin => "polar_spin",
            Self::PolarFold => "polar_fold",
            Self::PolarScale => "polar_scale",
            Self::PolarShear => "polar_shear",
            Self::AspectSwap => "aspect_swap",
            Self::AspectWarp => "aspect_warp",
            Self::FlipVertical => "flip_vertical",
            Self::SineDrop => "sine_drop",
            Self::StackRows => "stack_rows",
            Self::DiagonalRamp => "diagonal_ramp",
            Self::WrappedSpiral => "wrapped_spiral",
            Self::RotatedWave => "rotated_wave",
            Self::Mirror => "mirror",
            Self::TwinRings => "twin_rings",
            Self::Heart => "heart",
            Self::TangentClamp => "tangent_clamp",
            Self::SineCurve => "sine_curve",
            Self::Sweep => "sweep",
            Self::RootCurve => "root_curve",
            Self::Halo => "halo",
            Self::StretchX => "stretch_x",
            Self::StretchXY => "stretch_xy",
            Self::SideWalls => "side_walls",
            Self::RingTrail => "ring_trail",
            Self::Puzzle => "puzzle",
            Self::SineDropDegrees => "sine_drop_degrees",
            Self::Circle => "circle",
            Self::Stripes => "stripes",
        }
    }

    /// Compute the target layout for `source`.
    pub fn apply<R: Rng>(self, source: &DotSet, viewport: &Viewport, rng: &mut R) -> DotSet {
        let n = source.len();
        let nf = n as f64;
        let half = nf / 2.0;
        let hw = viewport.half_width();
        let hh = viewport.half_height();
        let w = viewport.width;
        let h = viewport.height;
        let min_half = hw.min(hh);
        let max_half = hw.max(hh);

        match self {
            Self::Ring => by_index(source, |i, _| polar(i, min_half)),
            Self::Spiral => by_index(source, |i, _| polar(i, i)),
            Self::Zoom => by_index(source, |_, p| Point::new(p.x * 100.0, p.y * 100.0)),
            Self::TrigScramble => by_index(source, |i, p| Point::new(p.x.cos() * i, p.y.sin() * i)),
            Self::Scatter => by_index(source, |_, _| {
                let x = random_int(rng, -hw, hw);
                let y = random_int(rng, -hh, hh);
                Point::new(x, y)
            }),
            Self::EdgeMidpoints => by_index(source, |_, _| {
                if coin(rng) {
                    if coin(rng) {
                        Point::new(hw, 0.0)
                    } else {
                        Point::new(-hw, 0.0)
                    }
                } else if coin(rng) {
                    Point::new(0.0, -hh)
                } else {
                    Point::new(0.0, hh)
                }
            }),
            Self::Corner => by_index(source, |_, _| Point::new(hw, hh)),
            Self::Transpose => by_index(source, |_, p| Point::new(p.y, p.x)),
            Self::TransposeDouble => by_index(source, |_, p| Point::new(p.y * 2.0, p.x * 2.0)),
            Self::DegreeEllipse => by_index(source, |i, _| {
                Point::new(rad(i).sin() * hw, rad(i).cos() * hh)
            }),
            Self::Diagonal => by_index(source, |i, _| Point::new(i - half, i - half)),
            Self::SineWave => by_index(source, |i, _| {
                let x = (i - half) / 50.0;
                Point::new(x, rad(x).sin() * hh)
            }),
            Self::DiagonalTight => by_index(source, |i, _| {
                let x = (i - half) / 20.0;
                Point::new(x, x)
            }),
            Self::ShiftCorner => {
                by_index(source, |_, p| Point::new(p.x - min_half, p.y - min_half))
            }
            Self::SineLift => by_index(source, |_, p| {
                Point::new(p.x, p.y - (rad(p.y).sin() * hh).abs())
            }),
            Self::TopLineMirror => by_index(source, |_, p| Point::new(-p.x, -hh)),
            Self::CornerCircle => by_index(source, |i, _| {
                Point::new(hw + rad(i).sin() * hh, hh + rad(i).cos() * hh)
            }),
            Self::WideOrbit => by_index(source, |i, _| {
                Point::new(hw + rad(i).sin() * w, hh + rad(i).cos() * h)
            }),
            Self::TransposeQuadrants => by_index(source, |_, p| {
                let s = max_half;
                if coin(rng) {
                    if coin(rng) {
                        Point::new(p.y - s, p.x - s)
                    } else {
                        Point::new(p.y + s, p.x + s)
                    }
                } else if coin(rng) {
                    Point::new(p.y - s, p.x + s)
                } else {
                    Point::new(p.y + s, p.x - s)
                }
            }),
            Self::NestedRings => by_index(source, |i, _| {
                let r = if coin(rng) {
                    if coin(rng) { max_half } else { max_half / 2.0 }
                } else if coin(rng) {
                    max_half / 4.0
                } else {
                    max_half / 8.0
                };
                polar(i, r)
            }),
            Self::SlowSpiral => by_index(source, |i, _| {
                Point::new(rad(i).cos() * i / 20.0, rad(i).sin() * i / 20.0)
            }),
            Self::PolarSpin => by_index(source, |i, p| {
                let r = dist(0.0, 0.0, p.x, p.y) * 2.0;
                let f = i.sin() * nf;
                Point::new(r * rad(f).cos(), r * rad(f).sin())
            }),
            Self::PolarFold => by_index(source, |i, p| {
                let f = i.sin() * nf;
                let r = dist(f, f, p.x, p.y) / 50.0;
                Point::new(r * rad(f).cos(), r * rad(f).sin())
            }),
            Self::PolarScale => by_index(source, |_, p| {
                let f = (p.x + p.y).sin() * nf;
                Point::new(p.x * rad(f).cos(), p.y * rad(f).sin())
            }),
            Self::PolarShear => by_index(source, |_, p| {
                let f = (p.x + p.y).sin() * nf;
                Point::new(p.x * rad(f).cos() + p.y, p.y * rad(f).sin() + p.x)
            }),
            Self::AspectSwap => by_index(source, |_, p| {
                Point::new(p.x * h / w * 4.0, p.y * w / h * 4.0)
            }),
            Self::AspectWarp => by_index(source, |_, p| {
                let d = dist(0.0, 0.0, p.x, p.y);
                Point::new(p.x * h / w * d / 20.0, p.y * w / h * d / 20.0 - 500.0)
            }),
            Self::FlipVertical => by_index(source, |_, p| Point::new(p.x, -p.y)),
            Self::SineDrop => by_index(source, |i, p| Point::new(p.x, p.y + i.sin().abs() * -hh)),
            Self::StackRows => by_index(source, |i, p| Point::new(p.x, i / 50.0)),
            Self::DiagonalRamp => by_index(source, |i, _| Point::new(i / 50.0, i / 50.0)),
            Self::WrappedSpiral => {
                let max_iter = n.saturating_mul(2);
                by_index(source, |i, _| polar(i, value_to_max_range(i, min_half, max_iter, 1.0)))
            }
            Self::RotatedWave => by_index(source, |i, p| {
                let x = (i - half) / 50.0;
                Point::new(x, x.cos() * x - x.sin() * p.x)
            }),
            Self::Mirror => (0..n)
                .map(|i| source.get(n + 1 - i).unwrap_or(Point::ORIGIN))
                .collect(),
            Self::TwinRings => {
                let r = 100.0;
                let mid = n / 2;
                by_index(source, |i, _| {
                    let c = if (i as usize) < mid { min_half } else { -min_half };
                    Point::new(c + i.cos() * r, c + i.sin() * r)
                })
            }
            Self::Heart => {
                let r = min_half / 1.2;
                by_index(source, |i, _| {
                    let t = rad(i);
                    Point::new(t.cos() * r, (t.sin() + t.cos().abs() * -0.5) * r)
                })
            }
            Self::TangentClamp => by_index(source, |i, _| {
                let z = i - nf;
                let x = (z.tan() * hh).clamp(-w, w);
                let y = (z.cos() * hh).clamp(-h, h);
                Point::new(x, y)
            }),
            Self::SineCurve => by_index(source, |i, _| {
                let x = rad(i - nf).sin() * max_half;
                Point::new(x, x * rad(x).cos())
            }),
            Self::Sweep => by_index(source, |i, _| {
                let z = i - nf;
                let x = z.sin() * hw;
                Point::new(x, x * z.cos())
            }),
            Self::RootCurve => by_index(source, |i, _| {
                let x = rad(i - nf).sin() * hw;
                Point::new(x, x.abs().sqrt())
            }),
            Self::Halo => by_index(source, |i, p| {
                Point::new(p.x + i.cos() * 150.0, p.y + i.sin() * 150.0)
            }),
            Self::StretchX => {
                let (min, max) = bounds(source);
                by_index(source, |_, p| {
                    Point::new(map_range(p.x, min.x, max.x, -hw, hw), p.y)
                })
            }
            Self::StretchXY => {
                let (min, max) = bounds(source);
                by_index(source, |_, p| {
                    Point::new(
                        map_range(p.x, min.x, max.x, -hw, hw),
                        map_range(p.y, min.y, max.y, -hh, hh),
                    )
                })
            }
            Self::SideWalls => {
                let mid = n / 2;
                by_index(source, |i, p| {
                    let x = if (i as usize) < mid { -hw } else { hw };
                    Point::new(x, p.x)
                })
            }
            Self::RingTrail => by_index(source, |i, _| {
                let x = map_range(i, 1.0, nf, -hw, hw);
                let y = map_range(i, 1.0, nf, -hh, hh);
                Point::new(x + i.cos() * min_half, y + i.sin() * min_half)
            }),
            Self::Puzzle => puzzle(source, hw, hh, rng),
            Self::SineDropDegrees => by_index(source, |i, p| {
                Point::new(p.x, p.y + rad(i).sin().abs() * -hh)
            }),
            Self::Circle => {
                let offset = if coin(rng) { 180.0 } else { 0.0 };
                by_index(source, |i, _| {
                    let angle = rad(map_range(i, 1.0, nf, -offset, 360.0 - offset));
                    polar(angle, min_half)
                })
            }
            Self::Stripes => by_index(source, |i, p| {
                let y = if (i as usize) % 2 == 0 { hh } else { -hh };
                Point::new(p.x, y)
            }),
        }
    }
}

/// Map every source dot through `f(index, dot)`, preserving order and length.
fn by_index(source: &DotSet, mut f: impl FnMut(f64, Dot) -> Dot) -> DotSet {
    let mut out = DotSet::with_capacity(source.len());
    for (i, &p) in source.iter().enumerate() {
        out.push_point(f(i as f64, p));
    }
    out
}

/// Point at angle `theta` radians and radius `r`.
fn polar(theta: f64, r: f64) -> Dot {
    Point::new(theta.cos() * r, theta.sin() * r)
}

/// Component-wise min and max of the set; both zero when it is empty.
fn bounds(source: &DotSet) -> (Point, Point) {
    let mut it = source.iter();
    let Some(&first) = it.next() else {
        return (Point::ORIGIN, Point::ORIGIN);
    };
    it.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    })
}

fn puzzle<R: Rng>(source: &DotSet, hw: f64, hh: f64, rng: &mut R) -> DotSet {
    let groups = random_int(rng, 3.0, 10.0) as usize;
    let group_size = (source.len() as f64 / groups as f64).round() as usize;

    let offsets: Vec<(f64, f64)> = (0..groups)
        .map(|_| {
            let dx = random_int(rng, -hw, hw) / 1.2;
            let dy = random_int(rng, -hh, hh) / 1.2;
            (dx, dy)
        })
        .collect();

    source
        .iter()
        .take(groups * group_size)
        .enumerate()
        .map(|(i, p)| {
            let (dx, dy) = offsets[i / group_size];
            Point::new(p.x + dx, p.y + dy)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/library.rs"]
mod tests;
