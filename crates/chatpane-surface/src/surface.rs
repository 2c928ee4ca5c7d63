//! Surface lifecycle management.
//!
//! `SurfaceManager` creates, resizes, and detaches the one chat surface,
//! talking to the host framework's container through the `MountHost` trait.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use chatpane_common::{HostError, PixelSize};

/// Static properties of the mounted element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceOptions {
    /// Element id the render library binds to.
    pub mount_id: String,
    /// Accessibility role of the element.
    pub role: String,
    /// CSS `bottom` anchor value.
    pub anchor_bottom: String,
    /// CSS `right` anchor value.
    pub anchor_right: String,
    /// Text alignment inside the surface.
    pub text_align: String,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            mount_id: "webchat".to_string(),
            role: "main".to_string(),
            anchor_bottom: "0".to_string(),
            anchor_right: "0".to_string(),
            text_align: "left".to_string(),
        }
    }
}

impl SurfaceOptions {
    /// Options with a non-default mount id.
    pub fn with_mount_id(mount_id: impl Into<String>) -> Self {
        Self {
            mount_id: mount_id.into(),
            ..Default::default()
        }
    }
}

/// Handle to the mounted surface.
#[derive(Debug, Clone)]
pub struct Surface {
    options: SurfaceOptions,
    size: PixelSize,
}

impl Surface {
    pub fn mount_id(&self) -> &str {
        &self.options.mount_id
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }
}

/// Container boundary provided by the host framework.
///
/// The host owns the actual element tree; the manager only describes what
/// to attach, detach, and resize.
pub trait MountHost: Send + Sync {
    /// Attach a new surface element to the host container.
    fn attach(&self, surface: &Surface) -> Result<(), HostError>;

    /// Detach the surface element with the given mount id.
    fn detach(&self, mount_id: &str) -> Result<(), HostError>;

    /// Apply new pixel dimensions to the surface element.
    fn apply_size(&self, mount_id: &str, size: PixelSize) -> Result<(), HostError>;
}

/// Manages the control's single surface.
pub struct SurfaceManager {
    host: Arc<dyn MountHost>,
    surface: Option<Surface>,
}

impl SurfaceManager {
    pub fn new(host: Arc<dyn MountHost>) -> Self {
        Self {
            host,
            surface: None,
        }
    }

    /// Create and attach the surface. Idempotent: returns `false` without
    /// touching the host if a surface already exists.
    pub fn create(&mut self, options: SurfaceOptions, size: PixelSize) -> Result<bool, HostError> {
        if self.surface.is_some() {
            return Ok(false);
        }

        let surface = Surface { options, size };
        self.host.attach(&surface)?;
        debug!(mount_id = %surface.mount_id(), %size, "surface attached");
        self.surface = Some(surface);
        Ok(true)
    }

    /// Apply the host's allocated dimensions to the surface. Returns `false`
    /// if no surface is mounted.
    pub fn resize(&mut self, size: PixelSize) -> Result<bool, HostError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };

        self.host.apply_size(&surface.options.mount_id, size)?;
        surface.size = size;
        debug!(mount_id = %surface.options.mount_id, %size, "surface resized");
        Ok(true)
    }

    /// Detach the surface from the host container. Returns `false` if no
    /// surface was mounted.
    pub fn detach(&mut self) -> Result<bool, HostError> {
        let Some(surface) = self.surface.take() else {
            return Ok(false);
        };

        self.host.detach(surface.mount_id())?;
        debug!(mount_id = %surface.mount_id(), "surface detached");
        Ok(true)
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn mount_id(&self) -> Option<&str> {
        self.surface.as_ref().map(|s| s.mount_id())
    }

    pub fn size(&self) -> Option<PixelSize> {
        self.surface.as_ref().map(|s| s.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum HostCall {
        Attach(String, PixelSize),
        Detach(String),
        ApplySize(String, PixelSize),
    }

    #[derive(Default)]
    struct RecordingHost {
        calls: Mutex<Vec<HostCall>>,
        fail_attach: bool,
    }

    impl RecordingHost {
        fn failing_attach() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_attach: true,
            }
        }

        fn calls(&self) -> Vec<HostCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MountHost for RecordingHost {
        fn attach(&self, surface: &Surface) -> Result<(), HostError> {
            if self.fail_attach {
                return Err(HostError::AttachError("container gone".into()));
            }
            self.calls.lock().unwrap().push(HostCall::Attach(
                surface.mount_id().to_string(),
                surface.size(),
            ));
            Ok(())
        }

        fn detach(&self, mount_id: &str) -> Result<(), HostError> {
            self.calls
                .lock()
                .unwrap()
                .push(HostCall::Detach(mount_id.to_string()));
            Ok(())
        }

        fn apply_size(&self, mount_id: &str, size: PixelSize) -> Result<(), HostError> {
            self.calls
                .lock()
                .unwrap()
                .push(HostCall::ApplySize(mount_id.to_string(), size));
            Ok(())
        }
    }

    #[test]
    fn create_attaches_once() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());

        let created = manager
            .create(SurfaceOptions::default(), PixelSize::new(640, 480))
            .unwrap();
        assert!(created);
        assert!(manager.is_mounted());
        assert_eq!(manager.mount_id(), Some("webchat"));
        assert_eq!(
            host.calls(),
            vec![HostCall::Attach("webchat".into(), PixelSize::new(640, 480))]
        );
    }

    #[test]
    fn create_is_idempotent() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());

        manager
            .create(SurfaceOptions::default(), PixelSize::new(640, 480))
            .unwrap();
        let created_again = manager
            .create(SurfaceOptions::default(), PixelSize::new(800, 600))
            .unwrap();

        assert!(!created_again);
        // Second create touched neither the host nor the stored size
        assert_eq!(host.calls().len(), 1);
        assert_eq!(manager.size(), Some(PixelSize::new(640, 480)));
    }

    #[test]
    fn failed_attach_leaves_nothing_mounted() {
        let host = Arc::new(RecordingHost::failing_attach());
        let mut manager = SurfaceManager::new(host);

        let result = manager.create(SurfaceOptions::default(), PixelSize::new(640, 480));
        assert!(result.is_err());
        assert!(!manager.is_mounted());
    }

    #[test]
    fn resize_applies_new_size() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());
        manager
            .create(SurfaceOptions::default(), PixelSize::new(640, 480))
            .unwrap();

        let resized = manager.resize(PixelSize::new(800, 600)).unwrap();
        assert!(resized);
        assert_eq!(manager.size(), Some(PixelSize::new(800, 600)));
        assert_eq!(
            host.calls()[1],
            HostCall::ApplySize("webchat".into(), PixelSize::new(800, 600))
        );
    }

    #[test]
    fn resize_without_surface_is_noop() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());

        let resized = manager.resize(PixelSize::new(800, 600)).unwrap();
        assert!(!resized);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn detach_removes_surface() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());
        manager
            .create(SurfaceOptions::default(), PixelSize::new(640, 480))
            .unwrap();

        let detached = manager.detach().unwrap();
        assert!(detached);
        assert!(!manager.is_mounted());
        assert_eq!(host.calls()[1], HostCall::Detach("webchat".into()));
    }

    #[test]
    fn detach_without_surface_is_noop() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());

        let detached = manager.detach().unwrap();
        assert!(!detached);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn custom_mount_id_is_used() {
        let host = Arc::new(RecordingHost::default());
        let mut manager = SurfaceManager::new(host.clone());

        manager
            .create(
                SurfaceOptions::with_mount_id("assistant-pane"),
                PixelSize::new(320, 240),
            )
            .unwrap();
        assert_eq!(manager.mount_id(), Some("assistant-pane"));
    }

    #[test]
    fn default_options_match_widget_element() {
        let options = SurfaceOptions::default();
        assert_eq!(options.mount_id, "webchat");
        assert_eq!(options.role, "main");
        assert_eq!(options.anchor_bottom, "0");
        assert_eq!(options.anchor_right, "0");
        assert_eq!(options.text_align, "left");
    }
}
