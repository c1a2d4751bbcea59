use std::f64::consts::PI;

/// Angular advance of the needle per frame.
pub const NEEDLE_STEP: f64 = PI / 120.0;

const ZONE_LINE_WIDTH: f64 = 18.0;

/// Maps a 0..=100 score onto the upper semicircle, `-PI` (left) to `0` (right).
pub fn angle_for_score(score: f64) -> f64 {
    -PI + (score.clamp(0.0, 100.0) / 100.0) * PI
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeZone {
    pub from: u8,
    pub to: u8,
    pub color: &'static str,
}

pub const GAUGE_ZONES: [GaugeZone; 3] = [
    GaugeZone {
        from: 0,
        to: 40,
        color: "#ef4444",
    },
    GaugeZone {
        from: 40,
        to: 70,
        color: "#f59e0b",
    },
    GaugeZone {
        from: 70,
        to: 100,
        color: "#10b981",
    },
];

impl GaugeZone {
    pub fn contains(&self, score: u8) -> bool {
        score >= self.from && (score < self.to || (self.to == 100 && score == 100))
    }

    pub fn for_score(score: u8) -> &'static GaugeZone {
        GAUGE_ZONES
            .iter()
            .find(|zone| zone.contains(score.min(100)))
            .unwrap_or(&GAUGE_ZONES[GAUGE_ZONES.len() - 1])
    }
}

/// Canvas dimensions and the derived arc placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub width: f64,
    pub height: f64,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 160.0,
        }
    }
}

impl GaugeGeometry {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height - 10.0)
    }

    pub fn radius(&self) -> f64 {
        self.width.min(self.height * 1.4) / 2.0
    }

    pub fn needle_tip(&self, angle: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        let r = self.radius();
        (cx + r * angle.cos(), cy + r * angle.sin())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
    pub line_width: f64,
}

/// Static zone arcs, computed once and reused for every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeBackground {
    pub geometry: GaugeGeometry,
    pub arcs: Vec<ArcSegment>,
}

impl GaugeBackground {
    pub fn prerender(geometry: GaugeGeometry) -> Self {
        let arcs = GAUGE_ZONES
            .iter()
            .map(|zone| ArcSegment {
                start_angle: angle_for_score(f64::from(zone.from)),
                end_angle: angle_for_score(f64::from(zone.to)),
                color: zone.color,
                line_width: ZONE_LINE_WIDTH,
            })
            .collect();
        Self { geometry, arcs }
    }
}

/// Needle angles for one sweep from the left extreme up to `target`.
///
/// Every yielded angle is capped at the target and the last one equals it.
#[derive(Debug, Clone)]
pub struct NeedleSweep {
    current: f64,
    target: f64,
    step: f64,
    done: bool,
}

impl NeedleSweep {
    pub fn new(target: f64) -> Self {
        Self::with_step(target, NEEDLE_STEP)
    }

    pub fn with_step(target: f64, step: f64) -> Self {
        Self {
            current: angle_for_score(0.0),
            target: target.clamp(-PI, 0.0),
            step: step.abs().max(f64::EPSILON),
            done: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Iterator for NeedleSweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        let angle = self.current.min(self.target);
        if self.current < self.target {
            self.current += self.step;
        } else {
            self.done = true;
        }
        Some(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_span_the_upper_semicircle() {
        assert_eq!(angle_for_score(0.0), -PI);
        assert_eq!(angle_for_score(100.0), 0.0);
        assert!((angle_for_score(50.0) + PI / 2.0).abs() < 1e-12);
        assert_eq!(angle_for_score(-5.0), -PI);
        assert_eq!(angle_for_score(250.0), 0.0);
    }

    #[test]
    fn zones_partition_the_scale() {
        assert_eq!(GaugeZone::for_score(0).color, "#ef4444");
        assert_eq!(GaugeZone::for_score(39).color, "#ef4444");
        assert_eq!(GaugeZone::for_score(40).color, "#f59e0b");
        assert_eq!(GaugeZone::for_score(69).color, "#f59e0b");
        assert_eq!(GaugeZone::for_score(70).color, "#10b981");
        assert_eq!(GaugeZone::for_score(100).color, "#10b981");
    }

    #[test]
    fn background_arcs_are_contiguous() {
        let background = GaugeBackground::prerender(GaugeGeometry::default());

        assert_eq!(background.arcs.len(), 3);
        assert_eq!(background.arcs[0].start_angle, -PI);
        assert_eq!(background.arcs[2].end_angle, 0.0);
        for pair in background.arcs.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }

    #[test]
    fn geometry_matches_canvas_layout() {
        let geometry = GaugeGeometry {
            width: 300.0,
            height: 100.0,
        };

        assert_eq!(geometry.center(), (150.0, 90.0));
        assert_eq!(geometry.radius(), 70.0);
        let (x, y) = geometry.needle_tip(-PI / 2.0);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_score_sweep_is_a_single_frame() {
        let frames: Vec<f64> = NeedleSweep::new(angle_for_score(0.0)).collect();

        assert_eq!(frames, vec![-PI]);
    }

    #[test]
    fn sweep_is_monotonic_and_lands_on_target() {
        let target = angle_for_score(62.0);
        let frames: Vec<f64> = NeedleSweep::new(target).collect();

        assert_eq!(frames.first().copied(), Some(-PI));
        assert_eq!(frames.last().copied(), Some(target));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|angle| *angle <= target));
        let full: Vec<f64> = NeedleSweep::new(0.0).collect();
        assert!((121..=123).contains(&full.len()));
    }
}
