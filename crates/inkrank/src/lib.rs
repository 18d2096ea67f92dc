//! inkrank: rank installed fonts by ink usage.
//! Pipeline: locate faces, wrap/paginate sample text, rasterize pages,
//! count dark pixels, normalize against a baseline font.

pub mod config;
mod error;
pub mod input;
pub mod layout;
pub mod locate;
pub mod measure;
pub mod rank;
pub mod render;
pub mod run;
pub use config::{LayoutConfig, Options};
pub use error::{InkError, Result};
pub use locate::ResolvedFont;
pub use measure::InkMeasurement;
pub use rank::RankedResult;
pub use render::{FaceRenderer, PageRaster, TextRenderer};
pub use run::{MeasureRun, Progress};

// Test utilities
pub mod test_support;
