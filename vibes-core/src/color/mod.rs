mod color_board;
mod color_result;
mod extractor;
mod hsl;
mod image_source;

pub use color_board::ColorBoard;
pub use color_result::{ColorResult, FALLBACK_RGB};
pub use extractor::{ColorExtractor, DEFAULT_CONCURRENCY, DEFAULT_SAMPLE_SIZE, average_color};
pub use hsl::{Hsl, HslValue, Rgb};
pub use image_source::{DefaultImageSource, FetchError, ImageSource};
