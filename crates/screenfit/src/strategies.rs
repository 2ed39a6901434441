//! Proptest strategies for device metrics.
//!
//! Available to downstream crates with the `proptest` feature, so their own
//! layout code can be exercised against arbitrary but valid devices.
//!
//! ```rust,ignore
//! proptest! {
//!     #[test]
//!     fn prop_layout_never_overflows(m in any_device_metrics()) {
//!         let class = Classifier::default().classify(&m).unwrap();
//!         prop_assert!(my_layout(class).fits(m.width));
//!     }
//! }
//! ```

use crate::metrics::{DeviceMetrics, Platform};
use proptest::prelude::*;

/// Either platform
pub fn any_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Ios), Just(Platform::Android)]
}

/// Valid metrics spanning watches to large tablets, at common densities and
/// the full range of accessibility font scales
pub fn any_device_metrics() -> impl Strategy<Value = DeviceMetrics> {
    (
        1.0f64..3000.0,
        1.0f64..3000.0,
        prop_oneof![Just(1.0), Just(1.5), Just(2.0), Just(2.625), Just(3.0), 0.5f64..4.5],
        0.8f64..3.0,
        any_platform(),
    )
        .prop_map(|(width, height, scale, font_scale, platform)| {
            DeviceMetrics::new(width, height, platform)
                .with_scale(scale)
                .with_font_scale(font_scale)
        })
}

/// Phone-sized metrics in portrait
pub fn phone_metrics() -> impl Strategy<Value = DeviceMetrics> {
    (300.0f64..450.0, 560.0f64..960.0, any_platform())
        .prop_map(|(width, height, platform)| DeviceMetrics::new(width, height, platform))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_generated_metrics_are_valid(m in any_device_metrics()) {
            prop_assert!(m.validate().is_ok());
        }

        #[test]
        fn prop_phone_metrics_are_portrait(m in phone_metrics()) {
            prop_assert!(m.height > m.width);
        }
    }
}
