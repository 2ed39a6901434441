//! Device metrics providers.
//!
//! A [`MetricsProvider`] is the host seam: it answers "what does the screen
//! look like right now". Hosts re-read it on rotation or font-scale change
//! notifications and classify the fresh value; providers never classify.

use crate::classifier::{Classification, Classifier};
use crate::metrics::{DeviceMetrics, Platform};
use crate::result::ScreenfitResult;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

/// Source of current device metrics
pub trait MetricsProvider: Send + Sync {
    /// Current width, height, scale and font scale
    fn metrics(&self) -> ScreenfitResult<DeviceMetrics>;

    /// Current operating system
    fn platform(&self) -> Platform;
}

/// Read metrics from `provider` and classify them
pub fn classify_current<P>(provider: &P, classifier: &Classifier) -> ScreenfitResult<Classification>
where
    P: MetricsProvider + ?Sized,
{
    let metrics = provider.metrics()?;
    classifier.classify(&metrics)
}

/// Provider that always reports the same metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticProvider {
    metrics: DeviceMetrics,
}

impl StaticProvider {
    /// Create a provider for fixed metrics
    #[must_use]
    pub const fn new(metrics: DeviceMetrics) -> Self {
        Self { metrics }
    }
}

impl MetricsProvider for StaticProvider {
    fn metrics(&self) -> ScreenfitResult<DeviceMetrics> {
        Ok(self.metrics)
    }

    fn platform(&self) -> Platform {
        self.metrics.platform
    }
}

/// Provider whose metrics can be changed while it is shared, to simulate
/// host notifications in tests
#[derive(Debug)]
pub struct MockProvider {
    metrics: RwLock<DeviceMetrics>,
}

impl MockProvider {
    /// Create a provider starting at `metrics`
    #[must_use]
    pub const fn new(metrics: DeviceMetrics) -> Self {
        Self {
            metrics: RwLock::new(metrics),
        }
    }

    /// Replace the current metrics
    pub fn set_metrics(&self, metrics: DeviceMetrics) {
        trace!(width = metrics.width, height = metrics.height, "mock metrics replaced");
        *self.metrics.write().unwrap_or_else(PoisonError::into_inner) = metrics;
    }

    /// Rotate the simulated device by 90 degrees
    pub fn rotate(&self) {
        let mut guard = self.metrics.write().unwrap_or_else(PoisonError::into_inner);
        *guard = guard.rotated();
    }

    /// Change the simulated user font scale
    pub fn set_font_scale(&self, font_scale: f64) {
        let mut guard = self.metrics.write().unwrap_or_else(PoisonError::into_inner);
        guard.font_scale = font_scale;
    }

    fn snapshot(&self) -> DeviceMetrics {
        *self.metrics.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MetricsProvider for MockProvider {
    fn metrics(&self) -> ScreenfitResult<DeviceMetrics> {
        Ok(self.snapshot())
    }

    fn platform(&self) -> Platform {
        self.snapshot().platform
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::breakpoint::BreakpointCategory;
    use crate::metrics::Orientation;
    use std::sync::Arc;
    use std::thread;

    fn iphone_x() -> DeviceMetrics {
        DeviceMetrics::new(375.0, 812.0, Platform::Ios).with_scale(3.0)
    }

    mod static_provider_tests {
        use super::*;

        #[test]
        fn test_returns_canned_values() {
            let provider = StaticProvider::new(iphone_x());
            assert_eq!(provider.metrics().unwrap(), iphone_x());
            assert_eq!(provider.platform(), Platform::Ios);
        }

        #[test]
        fn test_classify_current() {
            let provider = StaticProvider::new(
                DeviceMetrics::new(1024.0, 768.0, Platform::Android).with_scale(2.0),
            );
            let result = classify_current(&provider, &Classifier::default()).unwrap();
            assert_eq!(result.category, BreakpointCategory::Tablet);
            assert_eq!(result.orientation, Orientation::Landscape);
        }

        #[test]
        fn test_classify_current_rejects_malformed_metrics() {
            let provider = StaticProvider::new(DeviceMetrics::new(-375.0, 812.0, Platform::Ios));
            assert!(classify_current(&provider, &Classifier::default()).is_err());
        }

        #[test]
        fn test_trait_object() {
            let provider: Box<dyn MetricsProvider> = Box::new(StaticProvider::new(iphone_x()));
            let result = classify_current(provider.as_ref(), &Classifier::default()).unwrap();
            assert_eq!(result.category, BreakpointCategory::Small);
        }
    }

    mod mock_provider_tests {
        use super::*;

        #[test]
        fn test_rotate() {
            let provider = MockProvider::new(iphone_x());
            let classifier = Classifier::default();

            let before = classify_current(&provider, &classifier).unwrap();
            assert_eq!(before.orientation, Orientation::Portrait);

            provider.rotate();
            let after = classify_current(&provider, &classifier).unwrap();
            assert_eq!(after.orientation, Orientation::Landscape);
            assert_eq!(after.category, BreakpointCategory::Large);
        }

        #[test]
        fn test_set_font_scale() {
            let provider = MockProvider::new(iphone_x());
            provider.set_font_scale(1.5);
            assert!((provider.metrics().unwrap().font_scale - 1.5).abs() < f64::EPSILON);
        }

        #[test]
        fn test_set_metrics_switches_platform() {
            let provider = MockProvider::new(iphone_x());
            provider.set_metrics(DeviceMetrics::new(360.0, 780.0, Platform::Android));
            assert_eq!(provider.platform(), Platform::Android);
        }

        #[test]
        fn test_shared_between_threads() {
            let provider = Arc::new(MockProvider::new(iphone_x()));
            let writer = {
                let provider = Arc::clone(&provider);
                thread::spawn(move || {
                    for _ in 0..100 {
                        provider.rotate();
                    }
                })
            };
            let classifier = Classifier::default();
            for _ in 0..100 {
                let result = classify_current(provider.as_ref(), &classifier).unwrap();
                // Rotating never changes the short side of an iPhone X
                assert_ne!(result.category, BreakpointCategory::Tablet);
            }
            writer.join().unwrap();

            // An even number of rotations restores the original
            assert_eq!(provider.metrics().unwrap(), iphone_x());
        }
    }
}
