//! Surface sizing reconciler.
//!
//! Runs alongside the session lifecycle on every host update. The mounted
//! surface records the last-applied size, so reconciliation is a comparison
//! against that: a change in either dimension triggers a resize.

use chatpane_common::{HostError, PixelSize};
use chatpane_surface::SurfaceManager;

pub struct SizeReconciler;

impl SizeReconciler {
    /// Apply the host's allocated dimensions to the mounted surface when
    /// they differ from the last-applied size. Returns `true` when a resize
    /// was issued; `false` when nothing is mounted or the size is unchanged.
    pub fn reconcile(
        surfaces: &mut SurfaceManager,
        allocated: PixelSize,
    ) -> Result<bool, HostError> {
        let Some(current) = surfaces.size() else {
            return Ok(false);
        };
        if current == allocated {
            return Ok(false);
        }
        surfaces.resize(allocated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpane_surface::{MountHost, Surface, SurfaceOptions};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingHost {
        resizes: Mutex<Vec<PixelSize>>,
    }

    impl MountHost for CountingHost {
        fn attach(&self, _surface: &Surface) -> Result<(), HostError> {
            Ok(())
        }

        fn detach(&self, _mount_id: &str) -> Result<(), HostError> {
            Ok(())
        }

        fn apply_size(&self, _mount_id: &str, size: PixelSize) -> Result<(), HostError> {
            self.resizes.lock().unwrap().push(size);
            Ok(())
        }
    }

    fn mounted_manager(host: Arc<CountingHost>, size: PixelSize) -> SurfaceManager {
        let mut manager = SurfaceManager::new(host);
        manager.create(SurfaceOptions::default(), size).unwrap();
        manager
    }

    #[test]
    fn no_surface_means_no_resize() {
        let host = Arc::new(CountingHost::default());
        let mut manager = SurfaceManager::new(host.clone());

        let resized =
            SizeReconciler::reconcile(&mut manager, PixelSize::new(800, 600)).unwrap();
        assert!(!resized);
        assert!(host.resizes.lock().unwrap().is_empty());
    }

    #[test]
    fn unchanged_size_means_no_resize() {
        let host = Arc::new(CountingHost::default());
        let mut manager = mounted_manager(host.clone(), PixelSize::new(800, 600));

        let resized =
            SizeReconciler::reconcile(&mut manager, PixelSize::new(800, 600)).unwrap();
        assert!(!resized);
        assert!(host.resizes.lock().unwrap().is_empty());
    }

    #[test]
    fn width_only_change_triggers_resize() {
        let host = Arc::new(CountingHost::default());
        let mut manager = mounted_manager(host.clone(), PixelSize::new(800, 600));

        let resized =
            SizeReconciler::reconcile(&mut manager, PixelSize::new(1024, 600)).unwrap();
        assert!(resized);
        assert_eq!(
            host.resizes.lock().unwrap().as_slice(),
            &[PixelSize::new(1024, 600)]
        );
    }

    #[test]
    fn height_only_change_triggers_resize() {
        let host = Arc::new(CountingHost::default());
        let mut manager = mounted_manager(host.clone(), PixelSize::new(800, 600));

        let resized =
            SizeReconciler::reconcile(&mut manager, PixelSize::new(800, 768)).unwrap();
        assert!(resized);
    }

    #[test]
    fn repeated_identical_allocations_resize_once() {
        let host = Arc::new(CountingHost::default());
        let mut manager = mounted_manager(host.clone(), PixelSize::new(800, 600));

        assert!(SizeReconciler::reconcile(&mut manager, PixelSize::new(640, 480)).unwrap());
        assert!(!SizeReconciler::reconcile(&mut manager, PixelSize::new(640, 480)).unwrap());
        assert_eq!(host.resizes.lock().unwrap().len(), 1);
    }
}
