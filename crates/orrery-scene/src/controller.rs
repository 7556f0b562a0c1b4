//! The click-to-spin animation state machine.
//!
//! One [`SceneController`] owns one [`SolarScene`] instance; there is no
//! process-wide state, so independent scenes can coexist in tests. The
//! controller receives already-dispatched events (a pick ray per click, a
//! plain signal per double-click, a tick per frame) and never touches the
//! event loop itself.

use orrery_math::Ray;

use crate::builder::SolarScene;

/// Default orbit-angle increment per frame, radians.
pub const ORBIT_STEP: f32 = 0.01;
/// Default spin-angle increment per frame, radians.
pub const SPIN_STEP: f32 = 0.02;

/// Whether the scene is idling or animating the earth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Only the base render loop runs; angles hold still.
    Idle,
    /// Each frame advances the orbit and spin angles.
    Spinning,
}

/// Per-frame angle increments, radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinRates {
    /// Orbit-pivot increment per frame.
    pub orbit_step: f32,
    /// Body self-rotation increment per frame.
    pub spin_step: f32,
}

impl Default for SpinRates {
    fn default() -> Self {
        Self {
            orbit_step: ORBIT_STEP,
            spin_step: SPIN_STEP,
        }
    }
}

/// Owns a scene and the Idle/Spinning state that animates it.
#[derive(Debug)]
pub struct SceneController {
    scene: SolarScene,
    rates: SpinRates,
    state: AnimationState,
}

impl SceneController {
    /// Creates a controller at rest around the given scene.
    #[must_use]
    pub fn new(scene: SolarScene, rates: SpinRates) -> Self {
        Self {
            scene,
            rates,
            state: AnimationState::Idle,
        }
    }

    /// The scene in its current animation pose.
    #[must_use]
    pub fn scene(&self) -> &SolarScene {
        &self.scene
    }

    /// Current animation state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Handles a click, given the pick ray projected through the pointer.
    ///
    /// Starts spinning when the ray intersects the earth's current pick
    /// sphere while idle; any forward intersection counts regardless of
    /// distance. Returns whether the spin started. Clicks while already
    /// spinning, and misses, are no-ops.
    pub fn on_click(&mut self, ray: Ray) -> bool {
        if self.state != AnimationState::Idle {
            return false;
        }
        if ray.intersect_sphere(&self.scene.earth.pick_sphere()).is_none() {
            return false;
        }
        self.state = AnimationState::Spinning;
        true
    }

    /// Handles a double-click: stop spinning regardless of where it landed.
    /// Idempotent when already idle.
    pub fn on_double_click(&mut self) {
        self.state = AnimationState::Idle;
    }

    /// Advances one frame: while spinning, increments both angles by the
    /// configured rates; while idle, holds still. The render pass reads the
    /// scene after this, so the mutation happens-before the frame's draw.
    pub fn advance_frame(&mut self) {
        if self.state == AnimationState::Spinning {
            self.scene.earth.orbit_angle += self.rates.orbit_step;
            self.scene.earth.spin_angle += self.rates.spin_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CAMERA_POSITION;
    use glam::Vec3;

    fn controller() -> SceneController {
        SceneController::new(SolarScene::build(), SpinRates::default())
    }

    /// A ray from the camera through the earth's current center.
    fn ray_at_earth(c: &SceneController) -> Ray {
        let center = c.scene().earth.body_world_center();
        Ray::new(CAMERA_POSITION, center - CAMERA_POSITION)
    }

    /// A ray from the camera toward the world origin, well clear of the earth.
    fn ray_missing_earth() -> Ray {
        Ray::new(CAMERA_POSITION, Vec3::ZERO - CAMERA_POSITION)
    }

    #[test]
    fn test_starts_idle_and_holds_still() {
        let mut c = controller();
        assert_eq!(c.state(), AnimationState::Idle);
        for _ in 0..5 {
            c.advance_frame();
        }
        assert_eq!(c.scene().earth.orbit_angle, 0.0);
        assert_eq!(c.scene().earth.spin_angle, 0.0);
    }

    #[test]
    fn test_hit_click_starts_spinning() {
        let mut c = controller();
        let ray = ray_at_earth(&c);
        assert!(c.on_click(ray));
        assert_eq!(c.state(), AnimationState::Spinning);

        for _ in 0..10 {
            c.advance_frame();
        }
        assert!((c.scene().earth.orbit_angle - 10.0 * ORBIT_STEP).abs() < 1e-6);
        assert!((c.scene().earth.spin_angle - 10.0 * SPIN_STEP).abs() < 1e-6);
    }

    #[test]
    fn test_missed_click_is_a_no_op() {
        let mut c = controller();
        assert!(!c.on_click(ray_missing_earth()));
        assert_eq!(c.state(), AnimationState::Idle);
        c.advance_frame();
        assert_eq!(c.scene().earth.orbit_angle, 0.0);
    }

    #[test]
    fn test_click_while_spinning_does_not_accelerate() {
        let mut c = controller();
        c.on_click(ray_at_earth(&c));
        for _ in 0..4 {
            c.advance_frame();
        }

        // The earth has moved; aim at its current position and click again.
        let again = ray_at_earth(&c);
        assert!(!c.on_click(again), "re-click must not restart or stack");

        let before = c.scene().earth.orbit_angle;
        c.advance_frame();
        let delta = c.scene().earth.orbit_angle - before;
        assert!((delta - ORBIT_STEP).abs() < 1e-6, "rate changed to {delta}");
    }

    #[test]
    fn test_double_click_stops_and_freezes_angles() {
        let mut c = controller();
        c.on_click(ray_at_earth(&c));
        for _ in 0..7 {
            c.advance_frame();
        }
        let orbit = c.scene().earth.orbit_angle;
        let spin = c.scene().earth.spin_angle;

        c.on_double_click();
        assert_eq!(c.state(), AnimationState::Idle);
        for _ in 0..7 {
            c.advance_frame();
        }
        assert_eq!(c.scene().earth.orbit_angle, orbit);
        assert_eq!(c.scene().earth.spin_angle, spin);

        // Stopping again is harmless.
        c.on_double_click();
        assert_eq!(c.state(), AnimationState::Idle);
    }

    #[test]
    fn test_hit_test_tracks_the_moved_earth() {
        let mut c = controller();
        let stale = ray_at_earth(&c);
        c.on_click(stale);
        // Swing the earth a quarter turn away from its starting point.
        for _ in 0..158 {
            c.advance_frame();
        }
        c.on_double_click();

        // The original aim no longer intersects; the fresh aim does.
        assert!(!c.on_click(stale), "stale ray should miss the moved earth");
        let fresh = ray_at_earth(&c);
        assert!(c.on_click(fresh));
    }

    #[test]
    fn test_custom_rates_are_honored() {
        let rates = SpinRates {
            orbit_step: 0.1,
            spin_step: 0.4,
        };
        let mut c = SceneController::new(SolarScene::build(), rates);
        c.on_click(ray_at_earth(&c));
        for _ in 0..3 {
            c.advance_frame();
        }
        assert!((c.scene().earth.orbit_angle - 0.3).abs() < 1e-6);
        assert!((c.scene().earth.spin_angle - 1.2).abs() < 1e-6);
    }
}
