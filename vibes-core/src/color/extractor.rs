//! Dominant color extraction from cover art.
use super::color_result::ColorResult;
use super::hsl::Rgb;
use super::image_source::{DefaultImageSource, FetchError, ImageSource};
use crate::config::Config;
use futures::{Stream, StreamExt, stream};
use image::imageops::FilterType;
use thiserror::Error;
use tracing::debug;

/// Edge of the square raster images are scaled down to before averaging.
pub const DEFAULT_SAMPLE_SIZE: u32 = 50;
/// Images decoded at the same time by [`ColorExtractor::extract_all`].
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Error)]
enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Computes accent colors from cover art.
///
/// Extraction never fails: anything that goes wrong between fetching the
/// bytes and averaging the pixels resolves to [`ColorResult::fallback`].
/// Nothing is cached here; see [`ColorBoard`](super::ColorBoard) for per-view
/// memoization.
#[derive(Debug, Clone)]
pub struct ColorExtractor<S = DefaultImageSource> {
    source: S,
    sample_size: u32,
    concurrency: usize,
}

impl ColorExtractor<DefaultImageSource> {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let source = DefaultImageSource::new(config.http_timeout)?;
        Ok(ColorExtractor::new(source)
            .with_sample_size(config.color_sample_size)
            .with_concurrency(config.color_concurrency))
    }
}

impl<S: ImageSource> ColorExtractor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sample_size: DEFAULT_SAMPLE_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_sample_size(mut self, sample_size: u32) -> Self {
        self.sample_size = sample_size.max(1);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves the accent color of one image.
    pub async fn extract(&self, reference: &str) -> ColorResult {
        match self.try_extract(reference).await {
            Ok(color) => color,
            Err(error) => {
                debug!(reference, %error, "using fallback color");
                ColorResult::fallback()
            }
        }
    }

    /// Extracts several images concurrently.
    ///
    /// Results come out in completion order, not input order. Dropping the
    /// stream abandons whatever is still in flight.
    pub fn extract_all<'a, I>(&'a self, references: I) -> impl Stream<Item = (String, ColorResult)> + 'a
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: 'a,
    {
        stream::iter(references)
            .map(move |reference| async move {
                let color = self.extract(&reference).await;
                (reference, color)
            })
            .buffer_unordered(self.concurrency)
    }

    async fn try_extract(&self, reference: &str) -> Result<ColorResult, ExtractError> {
        let bytes = self.source.fetch(reference).await?;
        let size = self.sample_size;
        let average = tokio::task::spawn_blocking(move || average_color(&bytes, size)).await??;
        Ok(ColorResult::from_average(average))
    }
}

/// Decodes an image, scales it to `size`x`size` and returns the unweighted
/// mean of every pixel's R, G and B, rounded to whole channels.
pub fn average_color(bytes: &[u8], size: u32) -> Result<Rgb, image::ImageError> {
    let size = size.max(1);
    let sample = image::load_from_memory(bytes)?
        .resize_exact(size, size, FilterType::Triangle)
        .to_rgb8();

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for pixel in sample.pixels() {
        r += u64::from(pixel[0]);
        g += u64::from(pixel[1]);
        b += u64::from(pixel[2]);
    }
    let count = (u64::from(sample.width()) * u64::from(sample.height())).max(1) as f64;
    let mean = |sum: u64| (sum as f64 / count).round() as u8;
    Ok(Rgb::new(mean(r), mean(g), mean(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HslValue;
    use image::{ImageFormat, Rgb as Pixel, RgbImage};
    use std::collections::HashMap;
    use std::io::Cursor;

    /// Serves PNGs from memory; unknown references fail like a 404.
    struct MemorySource {
        images: HashMap<String, Vec<u8>>,
    }

    impl MemorySource {
        fn new(images: &[(&str, Vec<u8>)]) -> Self {
            Self {
                images: images
                    .iter()
                    .map(|(name, bytes)| (name.to_string(), bytes.clone()))
                    .collect(),
            }
        }
    }

    impl ImageSource for MemorySource {
        async fn fetch(&self, reference: &str) -> Result<Vec<u8>, FetchError> {
            self.images
                .get(reference)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    reference: reference.to_string(),
                    status: 404,
                })
        }
    }

    fn png(width: u32, height: u32, paint: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| Pixel(paint(x, y)));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn average_of_solid_image_is_that_color() {
        let bytes = png(120, 80, |_, _| [10, 200, 90]);
        assert_eq!(average_color(&bytes, 50).unwrap(), Rgb::new(10, 200, 90));
    }

    #[test]
    fn average_of_split_image_is_the_midpoint() {
        let bytes = png(100, 100, |x, _| if x < 50 { [0, 0, 0] } else { [200, 100, 50] });
        let avg = average_color(&bytes, 50).unwrap();
        assert!(avg.r.abs_diff(100) <= 1, "{avg:?}");
        assert!(avg.g.abs_diff(50) <= 1, "{avg:?}");
        assert!(avg.b.abs_diff(25) <= 1, "{avg:?}");
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        assert!(average_color(b"definitely not an image", 50).is_err());
    }

    #[tokio::test]
    async fn extract_applies_background_adjustment() {
        let source = MemorySource::new(&[("red", png(10, 10, |_, _| [255, 0, 0]))]);
        let extractor = ColorExtractor::new(source);
        let color = extractor.extract("red").await;
        assert_eq!(color.hsl, HslValue { h: 0, s: 100, l: 35 });
        assert!(!color.is_fallback());
    }

    #[tokio::test]
    async fn failures_resolve_to_fallback() {
        let source = MemorySource::new(&[("broken", b"<html>403</html>".to_vec())]);
        let extractor = ColorExtractor::new(source);
        assert_eq!(extractor.extract("missing").await, ColorResult::fallback());
        assert_eq!(extractor.extract("broken").await, ColorResult::fallback());
    }

    #[tokio::test]
    async fn extracted_saturation_and_lightness_stay_in_range() {
        let images: Vec<(String, Vec<u8>)> = (0..12u8)
            .map(|i| {
                let v = i * 21;
                (format!("img{i}"), png(8, 8, move |_, _| [v, 255 - v, v / 3]))
            })
            .collect();
        let named: Vec<(&str, Vec<u8>)> =
            images.iter().map(|(n, b)| (n.as_str(), b.clone())).collect();
        let extractor = ColorExtractor::new(MemorySource::new(&named));
        for (name, _) in &images {
            let c = extractor.extract(name).await;
            assert!(c.hsl.s <= 100);
            assert!((20..=100).contains(&c.hsl.l));
        }
    }

    #[tokio::test]
    async fn extract_all_yields_every_reference_once() {
        let source = MemorySource::new(&[
            ("a", png(4, 4, |_, _| [0, 0, 255])),
            ("b", png(4, 4, |_, _| [0, 255, 0])),
        ]);
        let extractor = ColorExtractor::new(source).with_concurrency(2);
        let refs = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let results: HashMap<String, ColorResult> = extractor.extract_all(refs).collect().await;

        assert_eq!(results.len(), 3);
        assert_eq!(results["a"].hsl.h, 240);
        assert_eq!(results["b"].hsl.h, 120);
        assert!(results["c"].is_fallback());
    }
}
