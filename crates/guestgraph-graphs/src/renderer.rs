//! Rasterization of chart specs with plotters.

use crate::chart::ChartSpec;
use guestgraph_common::{GuestGraphError, Result};
use plotters::prelude::*;
use std::io::Cursor;
use tracing::debug;

/// Fill color for the bars.
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Renders a [`ChartSpec`] to an in-memory PNG.
#[derive(Debug, Clone)]
pub struct BarChartRenderer {
    width: u32,
    height: u32,
}

impl BarChartRenderer {
    /// Creates a renderer producing images of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Draws the chart and encodes it as PNG bytes.
    ///
    /// A spec with zero bars renders as a titled empty chart; it is not an
    /// error.
    pub fn render_png(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; (self.width * self.height * 3) as usize];

        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (self.width, self.height)).into_drawing_area();
            let background = parse_color(&spec.background_color);
            root.fill(&background).map_err(draw_err)?;

            if spec.bars.is_empty() {
                let inner = root
                    .titled(&spec.title, ("sans-serif", 24))
                    .map_err(draw_err)?;
                inner.present().map_err(draw_err)?;
            } else {
                let n = spec.bars.len();
                let max_value = spec.bars.iter().map(|bar| bar.value).max().unwrap_or(0) as f64;
                // Headroom on the right so value labels land outside the bars.
                let x_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

                let mut chart = ChartBuilder::on(&root)
                    .caption(&spec.title, ("sans-serif", 24))
                    .margin(10)
                    .x_label_area_size(60)
                    .y_label_area_size(150)
                    .build_cartesian_2d(0f64..x_max, -0.5f64..(n as f64 - 0.5))
                    .map_err(draw_err)?;

                chart
                    .configure_mesh()
                    .disable_x_mesh()
                    .disable_y_mesh()
                    .x_desc(spec.x_axis_title.as_str())
                    .y_desc(spec.y_axis_title.as_str())
                    .y_labels(n)
                    .y_label_formatter(&|coord: &f64| {
                        // Bars are indexed top-down; y coordinates grow upward.
                        let rounded = coord.round();
                        let index = rounded as isize;
                        if (coord - rounded).abs() < 1e-6 && index >= 0 && (index as usize) < n {
                            spec.bars[n - 1 - index as usize].label.clone()
                        } else {
                            String::new()
                        }
                    })
                    .draw()
                    .map_err(draw_err)?;

                let label_style = ("sans-serif", 14).into_font().color(&BLACK);
                for (i, bar) in spec.bars.iter().enumerate() {
                    let y = (n - 1 - i) as f64;
                    chart
                        .draw_series(std::iter::once(Rectangle::new(
                            [(0.0, y - 0.35), (bar.value as f64, y + 0.35)],
                            BAR_COLOR.filled(),
                        )))
                        .map_err(draw_err)?;
                    chart
                        .draw_series(std::iter::once(Text::new(
                            bar.value_label.clone(),
                            (bar.value as f64 + x_max * 0.01, y),
                            label_style.clone(),
                        )))
                        .map_err(draw_err)?;
                }

                root.present().map_err(draw_err)?;
            }
        }

        let image = image::RgbImage::from_raw(self.width, self.height, buffer)
            .ok_or_else(|| GuestGraphError::graph("chart buffer has unexpected size"))?;
        let mut png = Vec::new();
        image::DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)
            .map_err(|e| GuestGraphError::graph_with_source("failed to encode chart PNG", e))?;

        debug!(bytes = png.len(), bars = spec.bars.len(), "rendered chart");
        Ok(png)
    }
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

fn draw_err<E: std::fmt::Display>(e: E) -> GuestGraphError {
    GuestGraphError::graph(format!("failed to draw chart: {e}"))
}

/// Parses a `#RRGGBB` color string, falling back to black.
fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}
