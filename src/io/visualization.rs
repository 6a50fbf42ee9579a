//! Frame capture and GIF generation for sort and search runs

use crate::engine::notify::{SearchNotifier, SortNotifier};
use crate::engine::settled::SettledSet;
use crate::io::configuration::{GIF_BAR_GAP, GIF_BAR_WIDTH, GIF_HEIGHT, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, VisualizerError, invalid_parameter};
use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

const BACKGROUND: [u8; 4] = [24, 24, 27, 255];
const BAR: [u8; 4] = [255, 255, 255, 255];
const SETTLED: [u8; 4] = [34, 197, 94, 255];
const HIGHLIGHT: [u8; 4] = [59, 130, 246, 255];

/// One captured notification
#[derive(Debug, Clone)]
enum Capture {
    Sort {
        values: Vec<u32>,
        settled: Vec<usize>,
    },
    Search {
        window: Vec<usize>,
        found: Option<bool>,
    },
}

/// Records notifications so the run can be replayed as an animated GIF
///
/// Sort notifications carry their own bars. Search notifications only carry
/// index windows, so they are drawn over the backdrop array, normally the
/// sorted copy the search ran on.
#[derive(Debug, Clone, Default)]
pub struct AnimationCapture {
    captures: Vec<Capture>,
    backdrop: Vec<u32>,
}

impl AnimationCapture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Bars drawn under search windows
    #[must_use]
    pub fn with_backdrop(mut self, values: Vec<u32>) -> Self {
        self.backdrop = values;
        self
    }

    /// Returns the total number of captured notifications
    pub const fn frame_count(&self) -> usize {
        self.captures.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Frame delays below what viewers support are raised, and frames are
    /// dropped in proportion so the apparent speed is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No notifications were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.captures.is_empty() {
            return Err(invalid_parameter(
                "animation",
                &"empty",
                &"no frames captured for visualization",
            ));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| VisualizerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| VisualizerError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| VisualizerError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!(
            "wrote {} frames to {}",
            self.captures.len(),
            output_path.display()
        );
        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut frames: Vec<Frame> = self
            .captures
            .iter()
            .enumerate()
            .filter(|(i, _)| (i + 1) % skip_factor == 0 || i + 1 == self.captures.len())
            .map(|(_, capture)| Frame::from_parts(self.render(capture), 0, 0, delay(delay_ms)))
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(last, 0, 0, delay(delay_ms * 25)));
        }

        frames
    }

    fn render(&self, capture: &Capture) -> RgbaImage {
        match capture {
            Capture::Sort { values, settled } => draw_bars(values, |i| {
                if settled.contains(&i) { SETTLED } else { BAR }
            }),
            Capture::Search { window, found } => draw_bars(&self.backdrop, |i| {
                match (window.contains(&i), found) {
                    (true, Some(true)) => SETTLED,
                    (true, _) => HIGHLIGHT,
                    (false, _) => BAR,
                }
            }),
        }
    }
}

fn delay(ms: u32) -> image::Delay {
    image::Delay::from_numer_denom_ms(ms, 1)
}

/// Draw one bar per value, bottom aligned and scaled to the largest value
fn draw_bars(values: &[u32], color_of: impl Fn(usize) -> [u8; 4]) -> RgbaImage {
    let count = values.len().max(1) as u32;
    let width = count * (GIF_BAR_WIDTH + GIF_BAR_GAP) + GIF_BAR_GAP;
    let mut img = RgbaImage::from_pixel(width, GIF_HEIGHT, Rgba(BACKGROUND));

    let tallest = values.iter().copied().max().unwrap_or(1).max(1);

    for (i, &value) in values.iter().enumerate() {
        let bar_height = (u64::from(value) * u64::from(GIF_HEIGHT) / u64::from(tallest)) as u32;
        let x0 = GIF_BAR_GAP + i as u32 * (GIF_BAR_WIDTH + GIF_BAR_GAP);
        let color = Rgba(color_of(i));

        for x in x0..x0 + GIF_BAR_WIDTH {
            for y in GIF_HEIGHT - bar_height..GIF_HEIGHT {
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

impl SortNotifier for AnimationCapture {
    fn notify(&mut self, snapshot: &[u32], settled: &SettledSet) -> Result<()> {
        self.captures.push(Capture::Sort {
            values: snapshot.to_vec(),
            settled: settled.to_vec(),
        });
        Ok(())
    }
}

impl SearchNotifier for AnimationCapture {
    fn notify(&mut self, window: &[usize], found: Option<bool>) -> Result<()> {
        self.captures.push(Capture::Search {
            window: window.to_vec(),
            found,
        });
        Ok(())
    }
}
