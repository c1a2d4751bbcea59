use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::geometry::{angle_for_score, GaugeBackground, GaugeGeometry, NeedleSweep};

/// Roughly one display frame at 60 Hz.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Drawing target for the gauge. Every frame is a full redraw.
pub trait GaugeSurface: Send + 'static {
    fn clear(&mut self);
    fn draw_background(&mut self, background: &GaugeBackground);
    fn draw_needle(&mut self, angle: f64, geometry: &GaugeGeometry);
    fn draw_hub(&mut self, geometry: &GaugeGeometry);
    fn draw_label(&mut self, label: &str);
    fn present(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Completed { frames: usize },
    Cancelled { frames: usize },
}

/// Handle to one in-flight needle sweep.
#[derive(Debug)]
pub struct AnimationHandle {
    token: CancellationToken,
    task: JoinHandle<AnimationOutcome>,
}

impl AnimationHandle {
    /// Stops the sweep after the current frame. Safe to call repeatedly.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn join(self) -> Result<AnimationOutcome, JoinError> {
        self.task.await
    }
}

struct ActiveSweep {
    token: CancellationToken,
    running: Arc<AtomicBool>,
}

/// Owns the gauge surface and guarantees at most one sweep runs at a time.
pub struct GaugeAnimator<S> {
    surface: Arc<Mutex<S>>,
    background: Arc<GaugeBackground>,
    frame_period: Duration,
    active: Option<ActiveSweep>,
}

impl<S: GaugeSurface> GaugeAnimator<S> {
    pub fn new(surface: S, geometry: GaugeGeometry) -> Self {
        Self {
            surface: Arc::new(Mutex::new(surface)),
            background: Arc::new(GaugeBackground::prerender(geometry)),
            frame_period: DEFAULT_FRAME_PERIOD,
            active: None,
        }
    }

    pub fn with_frame_period(mut self, frame_period: Duration) -> Self {
        self.frame_period = frame_period.max(Duration::from_millis(1));
        self
    }

    pub fn surface(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.surface)
    }

    pub fn is_animating(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|sweep| sweep.running.load(Ordering::Acquire))
    }

    /// Cancels the running sweep, if any. A no-op when idle.
    pub fn cancel(&mut self) {
        if let Some(sweep) = self.active.take() {
            sweep.token.cancel();
        }
    }

    /// Restarts the needle sweep toward `score`. Must be called inside a tokio runtime.
    pub fn animate(&mut self, score: u8) -> AnimationHandle {
        self.cancel();

        {
            let mut canvas = lock(&self.surface);
            canvas.clear();
            canvas.draw_background(&self.background);
            canvas.present();
        }

        let token = CancellationToken::new();
        let running = Arc::new(AtomicBool::new(true));
        let sweep = SweepTask {
            surface: Arc::clone(&self.surface),
            background: Arc::clone(&self.background),
            sweep: NeedleSweep::new(angle_for_score(f64::from(score.min(100)))),
            label: format!("{}/100", score.min(100)),
            frame_period: self.frame_period,
            token: token.clone(),
            running: Arc::clone(&running),
        };

        tracing::debug!(score, "gauge sweep started");
        let task = tokio::spawn(sweep.run());
        self.active = Some(ActiveSweep {
            token: token.clone(),
            running,
        });

        AnimationHandle { token, task }
    }
}

impl<S> Drop for GaugeAnimator<S> {
    fn drop(&mut self) {
        if let Some(sweep) = self.active.take() {
            sweep.token.cancel();
        }
    }
}

struct SweepTask<S> {
    surface: Arc<Mutex<S>>,
    background: Arc<GaugeBackground>,
    sweep: NeedleSweep,
    label: String,
    frame_period: Duration,
    token: CancellationToken,
    running: Arc<AtomicBool>,
}

impl<S: GaugeSurface> SweepTask<S> {
    async fn run(self) -> AnimationOutcome {
        let SweepTask {
            surface,
            background,
            sweep,
            label,
            frame_period,
            token,
            running,
        } = self;

        let mut interval = tokio::time::interval(frame_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut frames = 0;
        let mut outcome = None;
        for angle in sweep {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    outcome = Some(AnimationOutcome::Cancelled { frames });
                    break;
                }
                _ = interval.tick() => {}
            }
            let mut canvas = lock(&surface);
            // re-checked under the lock: a restart cancels before it redraws
            if token.is_cancelled() {
                outcome = Some(AnimationOutcome::Cancelled { frames });
                break;
            }
            canvas.clear();
            canvas.draw_background(&background);
            canvas.draw_needle(angle, &background.geometry);
            canvas.draw_hub(&background.geometry);
            canvas.draw_label(&label);
            canvas.present();
            drop(canvas);
            frames += 1;
        }

        running.store(false, Ordering::Release);
        let outcome = outcome.unwrap_or(AnimationOutcome::Completed { frames });
        tracing::debug!(?outcome, "gauge sweep finished");
        outcome
    }
}

fn lock<S>(surface: &Mutex<S>) -> std::sync::MutexGuard<'_, S> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Clear,
        Background,
        Needle(f64),
        Hub,
        Label(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Vec<Event>,
    }

    impl GaugeSurface for RecordingSurface {
        fn clear(&mut self) {
            self.events.push(Event::Clear);
        }
        fn draw_background(&mut self, _background: &GaugeBackground) {
            self.events.push(Event::Background);
        }
        fn draw_needle(&mut self, angle: f64, _geometry: &GaugeGeometry) {
            self.events.push(Event::Needle(angle));
        }
        fn draw_hub(&mut self, _geometry: &GaugeGeometry) {
            self.events.push(Event::Hub);
        }
        fn draw_label(&mut self, label: &str) {
            self.events.push(Event::Label(label.to_string()));
        }
    }

    fn events(animator: &GaugeAnimator<RecordingSurface>) -> Vec<Event> {
        lock(&animator.surface()).events.clone()
    }

    #[tokio::test(start_paused = true)]
    async fn sweep_redraws_everything_each_frame() {
        let mut animator =
            GaugeAnimator::new(RecordingSurface::default(), GaugeGeometry::default());

        let outcome = animator.animate(50).join().await.unwrap();

        let expected = NeedleSweep::new(angle_for_score(50.0)).count();
        assert_eq!(outcome, AnimationOutcome::Completed { frames: expected });
        assert!(!animator.is_animating());

        let recorded = events(&animator);
        assert_eq!(&recorded[..2], &[Event::Clear, Event::Background]);
        let frame = &recorded[2..7];
        assert_eq!(frame[0], Event::Clear);
        assert_eq!(frame[1], Event::Background);
        assert!(matches!(frame[2], Event::Needle(angle) if angle == -std::f64::consts::PI));
        assert_eq!(frame[3], Event::Hub);
        assert_eq!(frame[4], Event::Label("50/100".to_string()));
        let needles: Vec<f64> = recorded
            .iter()
            .filter_map(|event| match event {
                Event::Needle(angle) => Some(*angle),
                _ => None,
            })
            .collect();
        assert_eq!(needles.len(), expected);
        assert_eq!(needles.last().copied(), Some(angle_for_score(50.0)));
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_cancels_the_previous_sweep() {
        let mut animator =
            GaugeAnimator::new(RecordingSurface::default(), GaugeGeometry::default());

        let first = animator.animate(90);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(animator.is_animating());

        let second = animator.animate(30);
        assert!(first.is_cancelled());

        let first_outcome = first.join().await.unwrap();
        let second_outcome = second.join().await.unwrap();

        assert!(matches!(first_outcome, AnimationOutcome::Cancelled { frames } if frames > 0));
        assert!(matches!(second_outcome, AnimationOutcome::Completed { .. }));

        let recorded = events(&animator);
        let last_old = recorded
            .iter()
            .rposition(|event| *event == Event::Label("90/100".to_string()))
            .expect("first sweep drew frames");
        let first_new = recorded
            .iter()
            .position(|event| *event == Event::Label("30/100".to_string()))
            .expect("second sweep drew frames");
        assert!(last_old < first_new, "frames from the two sweeps never interleave");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_idempotent() {
        let mut animator =
            GaugeAnimator::new(RecordingSurface::default(), GaugeGeometry::default());

        animator.cancel();
        let handle = animator.animate(100);
        handle.cancel();
        handle.cancel();
        animator.cancel();
        animator.cancel();

        assert!(matches!(
            handle.join().await.unwrap(),
            AnimationOutcome::Cancelled { .. }
        ));
        assert!(!animator.is_animating());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn sweep_cancelled_while_waiting_for_surface_draws_nothing() {
        let mut animator = GaugeAnimator::new(RecordingSurface::default(), GaugeGeometry::default())
            .with_frame_period(Duration::from_millis(1));
        let surface = animator.surface();

        let handle = animator.animate(100);
        while lock(&surface).events.len() <= 2 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let canvas = lock(&surface);
        let drawn = canvas.events.len();
        // let the sweep reach the lock and block on it
        std::thread::sleep(Duration::from_millis(20));
        handle.cancel();
        drop(canvas);

        let outcome = handle.join().await.unwrap();

        assert!(matches!(outcome, AnimationOutcome::Cancelled { .. }));
        assert_eq!(lock(&surface).events.len(), drawn);
    }
}
