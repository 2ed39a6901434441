//! Screenfit: Responsive Breakpoint Classification
//!
//! Maps device metrics (logical width and height, pixel scale, font scale,
//! platform) to a coarse layout category and an orientation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      SCREENFIT Architecture                       │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌──────────────┐    ┌────────────────┐       │
//! │   │ Metrics    │    │ Device       │    │ Classifier     │       │
//! │   │ Provider   │───►│ Metrics      │───►│ (Breakpoint    │       │
//! │   │ (host/mock)│    │              │    │  Policy)       │       │
//! │   └────────────┘    └──────────────┘    └────────────────┘       │
//! │          ▲                                      │                │
//! │   ┌────────────┐                        ┌────────────────┐       │
//! │   │ Device     │                        │ Classification │       │
//! │   │ Catalog    │                        │ / Profile      │       │
//! │   └────────────┘                        └────────────────┘       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use screenfit::prelude::*;
//!
//! let catalog = DeviceCatalog::new();
//! let iphone = catalog.require("iPhone 11").unwrap();
//! let result = Classifier::default().classify(&iphone.metrics).unwrap();
//! assert_eq!(result.category, BreakpointCategory::Large);
//! assert_eq!(result.orientation, Orientation::Portrait);
//! ```

#![warn(missing_docs)]

mod breakpoint;
mod catalog;
mod classifier;
mod config;
mod metrics;
mod provider;
mod result;

/// Proptest strategies for device metrics
#[cfg(any(test, feature = "proptest"))]
pub mod strategies;

pub use breakpoint::{BreakpointCategory, BreakpointPolicy};
pub use catalog::{DeviceCatalog, DevicePreset};
pub use classifier::{Classification, Classifier, DeviceProfile};
pub use config::ScreenfitConfig;
pub use metrics::{DensityBucket, DeviceMetrics, Orientation, Platform, TextSize};
pub use provider::{classify_current, MetricsProvider, MockProvider, StaticProvider};
pub use result::{ScreenfitError, ScreenfitResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::breakpoint::*;
    pub use super::catalog::*;
    pub use super::classifier::*;
    pub use super::config::*;
    pub use super::metrics::*;
    pub use super::provider::*;
    pub use super::result::*;
}
