// src/report/charts.rs
//! Chart rendering.
//!
//! Charts are drawn with [`plotters`] into an in-memory RGB buffer, cropped to
//! the drawn content and encoded as PNG with [`image`]. Text is set in DejaVu
//! Sans, compiled into the binary and registered with plotters on first use,
//! so rendering does not depend on fonts installed on the host.
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;

use image::{ImageFormat, Rgb, RgbImage};
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use super::crop::tight_crop;
use super::histogram::Histogram;
use crate::config::consts::*;
use crate::error::{PipelineError, Result};

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const CORAL: RGBColor = RGBColor(255, 127, 80);
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

const FONT_FAMILY: &str = "DejaVu Sans";
static FONT_BYTES: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans.ttf"));
static FONT_REGISTERED: LazyLock<bool> =
    LazyLock::new(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok());

const TITLE_FONT: (&str, u32) = (FONT_FAMILY, 28);
const LABEL_FONT: (&str, u32) = (FONT_FAMILY, 20);
const TICK_FONT: (&str, u32) = (FONT_FAMILY, 16);

fn ensure_font(path: &Path) -> Result<()> {
    if *FONT_REGISTERED { Ok(()) } else { Err(PipelineError::chart(path, "embedded font failed to load")) }
}

fn chart_err<E: Display>(path: &Path) -> impl Fn(E) -> PipelineError + '_ {
    move |e| PipelineError::chart(path, e)
}

/// Histogram bars over the histogram's own span.
pub fn render_price_distribution(hist: &Histogram, size: (u32, u32), path: &Path) -> Result<()> {
    ensure_font(path)?;
    let mut buf = raster(size);
    {
        let root = BitMapBackend::with_buffer(&mut buf, size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err(path))?;

        let y_top = hist.max_count() + 1;
        let mut chart = ChartBuilder::on(&root)
            .caption(PRICE_DIST_TITLE, TITLE_FONT)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(hist.lo..hist.hi, 0u32..y_top)
            .map_err(chart_err(path))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.2))
            .x_desc(PRICE_DIST_X)
            .y_desc(PRICE_DIST_Y)
            .axis_desc_style(LABEL_FONT)
            .label_style(TICK_FONT)
            .x_label_formatter(&|x| format!("{x:.0}"))
            .draw()
            .map_err(chart_err(path))?;

        chart
            .draw_series(hist.bars().map(|(x0, x1, c)| Rectangle::new([(x0, 0), (x1, c)], SKY_BLUE.filled())))
            .map_err(chart_err(path))?;
        chart
            .draw_series(hist.bars().map(|(x0, x1, c)| Rectangle::new([(x0, 0), (x1, c)], BLACK.stroke_width(1))))
            .map_err(chart_err(path))?;

        root.present().map_err(chart_err(path))?;
    }
    save_png(buf, size, path)
}

/// Mean price per rating as a line with circle markers. The x axis runs
/// 0..6 so that the labelled ticks are exactly the ratings 1..5.
pub fn render_rating_vs_price(points: &[(u8, f64)], size: (u32, u32), path: &Path) -> Result<()> {
    ensure_font(path)?;
    let mut buf = raster(size);
    {
        let root = BitMapBackend::with_buffer(&mut buf, size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err(path))?;

        let (y_lo, y_hi) = padded_range(points.iter().map(|&(_, p)| p));
        let first = i32::from(RATING_TICKS[0]) - 1;
        let last = i32::from(RATING_TICKS[RATING_TICKS.len() - 1]) + 1;

        let mut chart = ChartBuilder::on(&root)
            .caption(RATING_PRICE_TITLE, TITLE_FONT)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(first..last, y_lo..y_hi)
            .map_err(chart_err(path))?;

        chart
            .configure_mesh()
            .light_line_style(WHITE)
            .bold_line_style(BLACK.mix(0.15))
            .x_labels((last - first + 1) as usize)
            .x_label_formatter(&|x| {
                if RATING_TICKS.iter().any(|t| i32::from(*t) == *x) { x.to_string() } else { s!() }
            })
            .y_label_formatter(&|y| format!("{y:.2}"))
            .x_desc(RATING_PRICE_X)
            .y_desc(RATING_PRICE_Y)
            .axis_desc_style(LABEL_FONT)
            .label_style(TICK_FONT)
            .draw()
            .map_err(chart_err(path))?;

        let series: Vec<(i32, f64)> = points.iter().map(|&(r, p)| (i32::from(r), p)).collect();
        chart
            .draw_series(LineSeries::new(series.iter().copied(), CORAL.stroke_width(2)))
            .map_err(chart_err(path))?;
        chart
            .draw_series(series.iter().map(|&pt| Circle::new(pt, 5, CORAL.filled())))
            .map_err(chart_err(path))?;

        root.present().map_err(chart_err(path))?;
    }
    save_png(buf, size, path)
}

/* ---------- helpers ---------- */

fn raster((w, h): (u32, u32)) -> Vec<u8> {
    vec![0u8; w as usize * h as usize * 3]
}

/// Data min..max with 10% head room either side; `0..1` with no data.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.1 } else { 1.0 };
    (lo - pad, hi + pad)
}

fn save_png(buf: Vec<u8>, (w, h): (u32, u32), path: &Path) -> Result<()> {
    let img = RgbImage::from_raw(w, h, buf)
        .ok_or_else(|| PipelineError::chart(path, "raster size mismatch"))?;
    tight_crop(img, BACKGROUND, CROP_PAD_PX)
        .save_with_format(path, ImageFormat::Png)
        .map_err(chart_err(path))
}
