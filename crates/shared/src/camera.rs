use crate::models::Station;

/// Scale bounds enforced on wheel and pinch zoom.
const MIN_SCALE: f64 = 0.2;
const MAX_SCALE: f64 = 8.0;

/// Fraction of the remaining distance covered by one animation tick.
const ANIMATION_FACTOR: f64 = 0.12;
/// Remaining deltas below these snap the animation exactly onto its target.
const OFFSET_EPSILON: f64 = 0.5;
const SCALE_EPSILON: f64 = 0.001;

/// Zoom applied when framing a single station.
const FOCUS_SCALE: f64 = 1.8;
const FOCUS_SCALE_COMPACT: f64 = 1.4;
/// In compact layout the focused station sits in the upper part of the
/// viewport, clear of the bottom sheet.
const COMPACT_ANCHOR_Y: f64 = 0.4;

/// Diagram-space padding added around a line's bounding box when framing it.
const LINE_PADDING: f64 = 100.0;
const LINE_SCALE_MIN: f64 = 0.4;
const LINE_SCALE_MAX: f64 = 2.0;

/// Diagram-space margin kept around the world extent by the default fit.
const RESET_MARGIN: f64 = 200.0;

/// Diagram-to-screen mapping: `screen = diagram * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned diagram-space extent of a set of stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Bounding box of a set of stations, or None for an empty set.
pub fn station_bounds<'a, I>(stations: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Station>,
{
    let mut iter = stations.into_iter();
    let first = iter.next()?;
    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for station in iter {
        bounds.min_x = bounds.min_x.min(station.x);
        bounds.min_y = bounds.min_y.min(station.y);
        bounds.max_x = bounds.max_x.max(station.x);
        bounds.max_y = bounds.max_y.max(station.y);
    }
    Some(bounds)
}

pub fn point_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

/// Transform that fits the whole world extent into the viewport, centered,
/// never magnifying above 1:1.
pub fn fit_transform(viewport: Viewport, world_w: f64, world_h: f64) -> Transform {
    let scale = (viewport.width / (world_w + RESET_MARGIN))
        .min(viewport.height / (world_h + RESET_MARGIN))
        .min(1.0);
    Transform {
        offset_x: (viewport.width - world_w * scale) / 2.0,
        offset_y: (viewport.height - world_h * scale) / 2.0,
        scale,
    }
}

/// Re-offset so the screen point `(anchor_x, anchor_y)` maps to the same
/// diagram point before and after the scale change.
fn anchored_zoom(from: Transform, anchor_x: f64, anchor_y: f64, scale: f64) -> Transform {
    let ratio = scale / from.scale;
    Transform {
        offset_x: anchor_x - (anchor_x - from.offset_x) * ratio,
        offset_y: anchor_y - (anchor_y - from.offset_y) * ratio,
        scale,
    }
}

#[derive(Debug, Clone, Copy)]
struct PinchBaseline {
    distance: f64,
    start: Transform,
}

/// Owns the diagram transform. All mutation goes through here: direct
/// manipulation and animated focus transitions share the one cell, and
/// starting either cancels the other.
#[derive(Debug, Clone)]
pub struct Camera {
    current: Transform,
    target: Option<Transform>,
    pinch: Option<PinchBaseline>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Camera {
        Camera {
            current: Transform::default(),
            target: None,
            pinch: None,
        }
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Pan by a screen-space delta. Interrupts any running animation.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.target = None;
        self.current.offset_x += dx;
        self.current.offset_y += dy;
    }

    /// Zoom by `factor`, keeping the diagram point under the screen anchor
    /// fixed. Interrupts any running animation.
    pub fn zoom_at(&mut self, anchor_x: f64, anchor_y: f64, factor: f64) {
        self.target = None;
        let scale = (self.current.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.current = anchored_zoom(self.current, anchor_x, anchor_y, scale);
    }

    /// Record the two-finger baseline: the finger distance and the transform
    /// the whole gesture will be measured against.
    pub fn begin_pinch(&mut self, a: (f64, f64), b: (f64, f64)) {
        self.target = None;
        self.pinch = Some(PinchBaseline {
            distance: point_distance(a, b),
            start: self.current,
        });
    }

    /// Rescale relative to the pinch baseline. No-op outside a pinch or when
    /// the baseline distance is degenerate.
    pub fn update_pinch(&mut self, a: (f64, f64), b: (f64, f64), anchor_x: f64, anchor_y: f64) {
        let Some(baseline) = self.pinch else { return };
        if baseline.distance < 1.0 {
            return;
        }
        self.target = None;
        let factor = point_distance(a, b) / baseline.distance;
        let scale = (baseline.start.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.current = anchored_zoom(baseline.start, anchor_x, anchor_y, scale);
    }

    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Start animating toward `target`, replacing any in-flight animation.
    pub fn animate_to(&mut self, target: Transform) {
        self.target = Some(target);
    }

    /// Drop any in-flight animation, keeping the current transform where it
    /// is. Direct manipulation calls this before taking over.
    pub fn cancel_animation(&mut self) {
        self.target = None;
    }

    /// Set the transform immediately, dropping any animation.
    pub fn jump_to(&mut self, transform: Transform) {
        self.target = None;
        self.current = transform;
    }

    /// Advance a running animation by one frame: cover 12% of each remaining
    /// component, snapping exactly onto the target once all three deltas fall
    /// under the convergence thresholds. Returns whether the animation is
    /// still live; without a target this is a no-op.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let dx = target.offset_x - self.current.offset_x;
        let dy = target.offset_y - self.current.offset_y;
        let dk = target.scale - self.current.scale;
        if dx.abs() < OFFSET_EPSILON && dy.abs() < OFFSET_EPSILON && dk.abs() < SCALE_EPSILON {
            self.current = target;
            self.target = None;
            return false;
        }
        self.current.offset_x += dx * ANIMATION_FACTOR;
        self.current.offset_y += dy * ANIMATION_FACTOR;
        self.current.scale += dk * ANIMATION_FACTOR;
        true
    }

    /// Frame one station: zoom in and center it, or in compact layout park it
    /// in the upper part of the viewport.
    pub fn focus_station(&mut self, station: &Station, viewport: Viewport, compact: bool) {
        let scale = if compact { FOCUS_SCALE_COMPACT } else { FOCUS_SCALE };
        let center_x = viewport.width / 2.0;
        let center_y = if compact {
            viewport.height * COMPACT_ANCHOR_Y
        } else {
            viewport.height / 2.0
        };
        self.animate_to(Transform {
            offset_x: center_x - station.x * scale,
            offset_y: center_y - station.y * scale,
            scale,
        });
    }

    /// Frame a whole line: fit its padded bounding box into the part of the
    /// viewport not reserved for the legend. No-op for an empty station set.
    pub fn focus_line<'a, I>(&mut self, stations: I, viewport: Viewport, sidebar_width: f64)
    where
        I: IntoIterator<Item = &'a Station>,
    {
        let Some(bounds) = station_bounds(stations) else {
            return;
        };
        let box_w = (bounds.max_x - bounds.min_x) + LINE_PADDING * 2.0;
        let box_h = (bounds.max_y - bounds.min_y) + LINE_PADDING * 2.0;
        let center_x = (bounds.min_x + bounds.max_x) / 2.0;
        let center_y = (bounds.min_y + bounds.max_y) / 2.0;
        let avail_w = viewport.width - sidebar_width;
        let scale = (avail_w / box_w)
            .min(viewport.height / box_h)
            .clamp(LINE_SCALE_MIN, LINE_SCALE_MAX);
        self.animate_to(Transform {
            offset_x: (sidebar_width + avail_w / 2.0) - center_x * scale,
            offset_y: viewport.height / 2.0 - center_y * scale,
            scale,
        });
    }

    /// Animate back to the default fit for the given world extent.
    pub fn reset_view(&mut self, viewport: Viewport, world_w: f64, world_h: f64) {
        self.animate_to(fit_transform(viewport, world_w, world_h));
    }
}
