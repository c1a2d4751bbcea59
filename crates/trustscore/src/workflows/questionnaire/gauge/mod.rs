mod animator;
mod geometry;

pub use animator::{
    AnimationHandle, AnimationOutcome, GaugeAnimator, GaugeSurface, DEFAULT_FRAME_PERIOD,
};
pub use geometry::{
    angle_for_score, ArcSegment, GaugeBackground, GaugeGeometry, GaugeZone, NeedleSweep,
    GAUGE_ZONES, NEEDLE_STEP,
};
