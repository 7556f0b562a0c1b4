//! Viewport tracking that normalizes platform resize and DPI behavior.
//!
//! [`ViewportTracker`] owns the surface dimensions and scale factor, clamps
//! zero sizes to 1×1, and reports a [`ViewportResize`] only when the
//! physical dimensions actually change, so downstream consumers (camera
//! aspect, surface configuration, depth buffer) react exactly once per real
//! resize.

/// Minimum surface dimension (prevents zero-size surface panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Physical pixel dimensions of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicalSize {
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
}

/// Event produced when the surface dimensions or scale factor change.
#[derive(Clone, Copy, Debug)]
pub struct ViewportResize {
    /// New physical pixel dimensions.
    pub physical: PhysicalSize,
    /// New logical width (physical / scale factor).
    pub logical_width: f64,
    /// New logical height (physical / scale factor).
    pub logical_height: f64,
    /// Current scale factor.
    pub scale_factor: f64,
}

/// Tracks surface dimensions and scale factor across resize events.
pub struct ViewportTracker {
    physical_width: u32,
    physical_height: u32,
    scale_factor: f64,
}

impl ViewportTracker {
    /// Creates a tracker from initial physical dimensions and scale factor.
    /// Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        Self {
            physical_width: physical_width.max(MIN_SURFACE_DIMENSION),
            physical_height: physical_height.max(MIN_SURFACE_DIMENSION),
            scale_factor,
        }
    }

    /// Handle a window resize. Returns a resize event only if the clamped
    /// physical dimensions actually changed.
    pub fn handle_resize(
        &mut self,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<ViewportResize> {
        let width = physical_width.max(MIN_SURFACE_DIMENSION);
        let height = physical_height.max(MIN_SURFACE_DIMENSION);

        if width == self.physical_width && height == self.physical_height {
            return None;
        }

        self.physical_width = width;
        self.physical_height = height;
        Some(self.resize_event())
    }

    /// Handle a scale factor change. Always records the new factor; returns
    /// a resize event if the physical dimensions changed with it.
    pub fn handle_scale_factor_changed(
        &mut self,
        new_scale_factor: f64,
        new_physical_width: u32,
        new_physical_height: u32,
    ) -> Option<ViewportResize> {
        self.scale_factor = new_scale_factor;
        self.handle_resize(new_physical_width, new_physical_height)
    }

    /// Current physical pixel dimensions.
    #[must_use]
    pub fn physical_size(&self) -> PhysicalSize {
        PhysicalSize {
            width: self.physical_width,
            height: self.physical_height,
        }
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn resize_event(&self) -> ViewportResize {
        ViewportResize {
            physical: self.physical_size(),
            logical_width: self.physical_width as f64 / self.scale_factor,
            logical_height: self.physical_height as f64 / self.scale_factor,
            scale_factor: self.scale_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_initial_size_is_clamped() {
        let tracker = ViewportTracker::new(0, 0, 1.0);
        assert_eq!(
            tracker.physical_size(),
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn test_resize_reports_change_once() {
        let mut tracker = ViewportTracker::new(800, 600, 1.0);
        let event = tracker.handle_resize(1024, 768).expect("size changed");
        assert_eq!(event.physical.width, 1024);
        assert_eq!(event.physical.height, 768);

        // Repeating the same size is a no-op.
        assert!(tracker.handle_resize(1024, 768).is_none());
    }

    #[test]
    fn test_logical_size_divides_by_scale() {
        let mut tracker = ViewportTracker::new(800, 600, 1.0);
        let event = tracker
            .handle_scale_factor_changed(2.0, 1600, 1200)
            .expect("dims changed");
        assert!((event.logical_width - 800.0).abs() < f64::EPSILON);
        assert!((event.logical_height - 600.0).abs() < f64::EPSILON);
        assert!((event.scale_factor - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_change_without_dim_change_is_silent() {
        let mut tracker = ViewportTracker::new(800, 600, 1.0);
        assert!(tracker.handle_scale_factor_changed(1.25, 800, 600).is_none());
        assert!((tracker.scale_factor() - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_to_zero_clamps() {
        let mut tracker = ViewportTracker::new(800, 600, 1.0);
        let event = tracker.handle_resize(0, 0).expect("clamped change");
        assert_eq!(
            event.physical,
            PhysicalSize {
                width: 1,
                height: 1
            }
        );
    }
}
