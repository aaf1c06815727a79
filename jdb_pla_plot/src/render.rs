//! SVG rendering
//! SVG 渲染

#![allow(clippy::cast_precision_loss)]

use std::path::Path;

use jdb_pla::{Pla, Value};
use log::debug;
use svg::{
  Document,
  node::element::{Ellipse, Line, Polyline, Rectangle, Text},
};

use crate::{
  conf::PlotConf,
  error::{Error, Result},
  fit::fit_lines,
};

/// 10 color cycle, one color per segment
/// 10 色循环，每段一种颜色
const PALETTE: [&str; 10] = [
  "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
  "#bcbd22", "#17becf",
];

const GRID_TICKS: usize = 5;

/// Data to pixel mapping
/// 数据坐标到像素坐标的映射
struct Frame {
  x_min: f64,
  y_min: f64,
  sx: f64,
  sy: f64,
  left: f64,
  bottom: f64,
}

impl Frame {
  fn new(conf: &PlotConf, (x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) -> Self {
    let (x_min, x_span) = padded(x_min, x_max);
    let (y_min, y_span) = padded(y_min, y_max);
    let m = f64::from(conf.margin);
    let w = (f64::from(conf.width) - 2.0 * m).max(1.0);
    let h = (f64::from(conf.height) - 2.0 * m).max(1.0);
    Self {
      x_min,
      y_min,
      sx: w / x_span,
      sy: h / y_span,
      left: m,
      bottom: m + h,
    }
  }

  #[inline]
  fn px(&self, x: f64) -> f64 {
    self.left + (x - self.x_min) * self.sx
  }

  #[inline]
  fn py(&self, y: f64) -> f64 {
    self.bottom - (y - self.y_min) * self.sy
  }
}

/// Widen zero spans, returns (min, span)
/// 扩展零跨度，返回 (min, span)
fn padded(min: f64, max: f64) -> (f64, f64) {
  let span = max - min;
  if span > 0.0 && span.is_finite() {
    (min, span)
  } else {
    (min - 0.5, 1.0)
  }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
  values
    .filter(|v| v.is_finite())
    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
      (lo.min(v), hi.max(v))
    })
}

fn polyline(pts: impl Iterator<Item = (f64, f64)>) -> Polyline {
  let points = pts
    .map(|(x, y)| format!("{x:.2},{y:.2}"))
    .collect::<Vec<_>>()
    .join(" ");
  Polyline::new().set("fill", "none").set("points", points)
}

fn dashed(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
  Line::new()
    .set("x1", x1)
    .set("y1", y1)
    .set("x2", x2)
    .set("y2", y2)
    .set("stroke", "#ccc")
    .set("stroke-dasharray", "4 4")
}

/// Build the SVG document: series, fitted segments and optional ε circles
/// 构建 SVG 文档：序列、拟合段及可选的 ε 圆
pub fn document<X: Value, Y: Value>(
  xs: &[X],
  ys: &[Y],
  pla: &Pla,
  conf: &PlotConf,
) -> Result<Document> {
  let lines = fit_lines(xs, ys, pla)?;
  if xs.is_empty() {
    return Err(Error::Empty);
  }

  let pad = if conf.circles { pla.eps } else { 0.0 };
  let x_range = bounds(xs.iter().map(|x| x.as_f64()));
  let (y_lo, y_hi) = bounds(
    ys.iter()
      .map(|y| y.as_f64())
      .chain(lines.iter().flat_map(|l| l.ys.iter().copied())),
  );
  let frame = Frame::new(conf, x_range, (y_lo - pad, y_hi + pad));
  let (w, h) = (f64::from(conf.width), f64::from(conf.height));

  let mut doc = Document::new()
    .set("width", conf.width)
    .set("height", conf.height)
    .set("viewBox", (0, 0, conf.width, conf.height))
    .set("font-family", "sans-serif")
    .set("font-size", 12)
    .add(
      Rectangle::new()
        .set("width", conf.width)
        .set("height", conf.height)
        .set("fill", "white"),
    );

  // dashed grid with tick labels
  let (left, right) = (frame.left, w - frame.left);
  let (top, bottom) = (f64::from(conf.margin), frame.bottom);
  for k in 0..=GRID_TICKS {
    let t = k as f64 / GRID_TICKS as f64;
    let gx = left + (right - left) * t;
    let gy = bottom - (bottom - top) * t;
    let vx = frame.x_min + (gx - frame.left) / frame.sx;
    let vy = frame.y_min + (frame.bottom - gy) / frame.sy;
    doc = doc
      .add(dashed(gx, top, gx, bottom))
      .add(dashed(left, gy, right, gy))
      .add(
        Text::new(format!("{vx:.3}"))
          .set("x", gx)
          .set("y", bottom + 16.0)
          .set("text-anchor", "middle"),
      )
      .add(
        Text::new(format!("{vy:.3}"))
          .set("x", left - 6.0)
          .set("y", gy)
          .set("text-anchor", "end")
          .set("dominant-baseline", "middle"),
      );
  }

  // original series
  doc = doc.add(
    polyline(
      xs.iter()
        .zip(ys)
        .map(|(x, y)| (frame.px(x.as_f64()), frame.py(y.as_f64()))),
    )
    .set("stroke", "black")
    .set("stroke-width", 1)
    .set("stroke-opacity", 0.7),
  );

  for (k, line) in lines.iter().enumerate() {
    let color = PALETTE[k % PALETTE.len()];
    doc = doc.add(
      polyline(
        line
          .xs
          .iter()
          .zip(&line.ys)
          .map(|(&x, &y)| (frame.px(x), frame.py(y))),
      )
      .set("stroke", color)
      .set("stroke-width", 2.5),
    );

    if conf.circles {
      let rx = pla.eps * frame.sx;
      let ry = pla.eps * frame.sy;
      for i in line.start_idx..=line.end_idx {
        doc = doc.add(
          Ellipse::new()
            .set("cx", frame.px(xs[i].as_f64()))
            .set("cy", frame.py(ys[i].as_f64()))
            .set("rx", rx)
            .set("ry", ry)
            .set("fill", "none")
            .set("stroke", color)
            .set("stroke-opacity", 0.5)
            .set("stroke-width", 1.5),
        );
      }
    }
  }

  // legend
  let lx = right - 150.0;
  let mut ly = top + 10.0;
  let entries = std::iter::once(("black", "Original Time Series".to_owned())).chain(
    lines.iter().enumerate().map(|(k, line)| {
      (
        PALETTE[k % PALETTE.len()],
        format!("Segment {}-{}", line.start_idx, line.end_idx),
      )
    }),
  );
  for (color, label) in entries {
    doc = doc
      .add(
        Line::new()
          .set("x1", lx)
          .set("y1", ly)
          .set("x2", lx + 20.0)
          .set("y2", ly)
          .set("stroke", color)
          .set("stroke-width", 2.5),
      )
      .add(
        Text::new(label)
          .set("x", lx + 26.0)
          .set("y", ly)
          .set("dominant-baseline", "middle"),
      );
    ly += 16.0;
  }

  // title and axis labels
  let mid_y = (top + bottom) / 2.0;
  doc = doc
    .add(
      Text::new(conf.title.as_str())
        .set("x", w / 2.0)
        .set("y", top / 2.0)
        .set("text-anchor", "middle")
        .set("font-size", 16),
    )
    .add(
      Text::new("Time")
        .set("x", (left + right) / 2.0)
        .set("y", h - 10.0)
        .set("text-anchor", "middle"),
    )
    .add(
      Text::new("Value")
        .set("x", 14)
        .set("y", mid_y)
        .set("text-anchor", "middle")
        .set("transform", format!("rotate(-90 14 {mid_y:.2})")),
    );

  debug!(
    "svg built: points={} segments={}",
    xs.len(),
    lines.len()
  );
  Ok(doc)
}

/// Render as an SVG string
/// 渲染为 SVG 字符串
pub fn render_svg<X: Value, Y: Value>(
  xs: &[X],
  ys: &[Y],
  pla: &Pla,
  conf: &PlotConf,
) -> Result<String> {
  Ok(document(xs, ys, pla, conf)?.to_string())
}

/// Render and write to `path`
/// 渲染并写入 `path`
pub fn save_svg<X: Value, Y: Value>(
  path: impl AsRef<Path>,
  xs: &[X],
  ys: &[Y],
  pla: &Pla,
  conf: &PlotConf,
) -> Result<()> {
  let doc = document(xs, ys, pla, conf)?;
  svg::save(path.as_ref(), &doc)?;
  debug!("svg saved to {}", path.as_ref().display());
  Ok(())
}
