use crate::{IndexType, SegmentError};
use geom::{Degrees, Radians, Vec3};
use serde::{Deserialize, Serialize};

/// Angular step used to approximate arcs with straight facets.
pub const DIV_THETA: Degrees = Degrees(5.0);

/// One piece of road: a straight run of `length` followed by an optional arc
/// turning `theta` degrees around a circle of `radius`.
///
/// Distances are in road units (10cm in the default assets). `width` is half
/// the road width, the surface spans `[-width, +width]` laterally.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    #[serde(default)]
    pub length: f32,
    #[serde(default)]
    pub radius: f32,
    /// Positive is clockwise, zero means no arc
    #[serde(default)]
    pub theta: Degrees,
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_width() -> f32 {
    common::config::config().default_width
}

/// Direction of a segment's arc, from the sign of `theta`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
    Straight,
    Clockwise,
    CounterClockwise,
}

impl RoadSegment {
    /// `theta` in degrees
    pub fn new(length: f32, radius: f32, theta: f32, width: f32) -> Self {
        Self {
            length,
            radius,
            theta: Degrees(theta),
            width,
        }
    }

    pub fn straight(length: f32, width: f32) -> Self {
        Self::new(length, 0.0, 0.0, width)
    }

    /// An arc with no straight run before it
    pub fn arc(radius: f32, theta: f32, width: f32) -> Self {
        Self::new(0.0, radius, theta, width)
    }

    pub fn turn(&self) -> Turn {
        if self.theta.0 > 0.0 {
            Turn::Clockwise
        } else if self.theta.0 < 0.0 {
            Turn::CounterClockwise
        } else {
            Turn::Straight
        }
    }

    /// Radius actually used for the arc. A curve tighter than the road's half
    /// width would fold its inner edge, so it is widened to `width`.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.radius.max(self.width)
    }

    /// How far the heading turns over this segment
    #[inline]
    pub fn heading_change(&self) -> Degrees {
        self.theta
    }

    /// Number of `DIV_THETA` facets emitted before the exact end of the arc.
    /// `None` when the arc needs more facets than a mesh can index.
    pub fn arc_steps(&self) -> Option<usize> {
        let steps = (self.theta.0.abs() / DIV_THETA.0).floor();
        if !(steps <= (IndexType::MAX / 2) as f32) {
            return None;
        }
        Some(steps as usize)
    }

    /// Neither a straight run nor an arc: the segment only has its leading edge
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0 && self.turn() == Turn::Straight
    }

    /// Every problem with this segment's parameters
    pub fn check(&self) -> Vec<SegmentError> {
        let mut errors = vec![];
        for (name, v) in [
            ("length", self.length),
            ("radius", self.radius),
            ("theta", self.theta.0),
            ("width", self.width),
        ] {
            if !v.is_finite() {
                errors.push(SegmentError::NotFinite(name));
            }
        }
        if !(self.width > 0.0) && self.width.is_finite() {
            errors.push(SegmentError::NonPositiveWidth(self.width));
        }
        if self.length < 0.0 {
            errors.push(SegmentError::NegativeLength(self.length));
        }
        if self.theta.0.is_finite() && self.n_local_vertices().is_none() {
            errors.push(SegmentError::TooManyFacets(self.theta.0));
        }
        errors
    }

    pub fn validate(&self) -> Result<(), SegmentError> {
        match self.check().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// How many vertices [`RoadSegment::local_vertices`] returns, `None` if
    /// they cannot be indexed with [`IndexType`]
    pub fn n_local_vertices(&self) -> Option<usize> {
        let straight = if self.length > 0.0 { 2 } else { 0 };
        let arc = match self.turn() {
            Turn::Straight => 0,
            _ => self.arc_steps()?.checked_mul(2)?.checked_add(2)?,
        };
        let n = arc.checked_add(2 + straight)?;
        IndexType::try_from(n).ok()?;
        Some(n)
    }

    /// Vertices of this segment in its own frame: the leading edge is centered
    /// on the origin and the road heads towards +Z.
    ///
    /// Vertices come in (left, right) pairs, one pair per station.
    pub fn local_vertices(&self) -> Result<Vec<Vec3>, SegmentError> {
        self.validate()?;
        let (Some(n), Some(steps)) = (self.n_local_vertices(), self.arc_steps()) else {
            return Err(SegmentError::TooManyFacets(self.theta.0));
        };

        let w = self.width;
        let mut vertices = Vec::with_capacity(n);

        vertices.push(Vec3::ground(-w, 0.0));
        vertices.push(Vec3::ground(w, 0.0));

        if self.length > 0.0 {
            vertices.push(Vec3::ground(-w, self.length));
            vertices.push(Vec3::ground(w, self.length));
        }

        let turn = self.turn();
        if turn == Turn::Straight {
            return Ok(vertices);
        }

        let r = self.effective_radius();
        for i in 0..steps {
            let t = Degrees(DIV_THETA.0 * i as f32).to_radians();
            vertices.extend(arc_pair(turn, r, w, self.length, t));
        }
        // the last pair always sits on the exact angle, the next segment starts there
        vertices.extend(arc_pair(turn, r, w, self.length, self.theta.abs().to_radians()));

        Ok(vertices)
    }
}

/// Left then right vertex at angle `t` along the arc.
/// Turning clockwise the outer edge is on the left, counter-clockwise it is on the right.
fn arc_pair(turn: Turn, r: f32, w: f32, length: f32, t: Radians) -> [Vec3; 2] {
    let (sin, cos) = (t.sin(), t.cos());
    let outer = r + w;
    let inner = r - w;
    match turn {
        Turn::CounterClockwise => [
            Vec3::ground(-r + inner * cos, inner * sin + length),
            Vec3::ground(-r + outer * cos, outer * sin + length),
        ],
        _ => [
            Vec3::ground(r - outer * cos, outer * sin + length),
            Vec3::ground(r - inner * cos, inner * sin + length),
        ],
    }
}
