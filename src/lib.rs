//! Img2Lvgl Core - LVGL Asset Compiler
//!
//! # The Four Guarantees (Non-Negotiable)
//! 1. Explicit Thresholding
//! 2. Padding Bits Stay Zero
//! 3. Deterministic Output
//! 4. Both Artifacts Or Neither

pub mod emit;
pub mod identifier;
pub mod normalize;
pub mod pack;
pub mod pipeline;

pub use emit::{render, ArtifactPair, PIXEL_FORMAT};
pub use identifier::{Identifier, IdentifierError};
pub use normalize::{normalize, DecodedImage, PixelMatrix, PixelSource, LIGHT_THRESHOLD};
pub use pack::{pack, PackedBitmap};
pub use pipeline::{convert, ConvertError, ConvertOutcome, ConvertRequest};

pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
