//! Uniform ε piecewise linear approximation of time series (cone intersection)
//! 时间序列的一致 ε 分段线性逼近（锥求交）

#![allow(clippy::cast_precision_loss)]

pub mod build;
pub mod cone;
pub mod conf;
pub mod consts;
pub mod error;
pub mod types;

use log::debug;

pub use self::{
  build::{SegmentBuilder, build_segments, build_segments_with},
  cone::{cone, cone_with},
  conf::{Conf, PlaConf},
  consts::{MAX_ANGLE_DEG, MIN_SERIES_LEN},
  error::{Error, Result},
  types::{Cone, PlaStats, Point, Segment, Value},
};

/// Piecewise linear approximation (no data ownership)
/// 分段线性逼近（不持有数据）
#[derive(Clone, Debug, Default)]
pub struct Pla {
  pub eps: f64,
  pub segments: Vec<Segment>,
  pub len: usize,
}

impl Pla {
  /// Approximate series (xs, ys) within `eps`
  /// 在 `eps` 容差内逼近序列 (xs, ys)
  ///
  /// `xs` must be non-decreasing; otherwise the result is unspecified.
  /// Non-finite samples are rejected.
  /// `xs` 须单调不减，否则结果未定义；非有限样本将被拒绝。
  pub fn new<X: Value, Y: Value>(xs: &[X], ys: &[Y], eps: f64) -> Result<Self> {
    Self::with_conf::<PlaConf, X, Y>(xs, ys, eps)
  }

  pub fn with_conf<C: Conf, X: Value, Y: Value>(xs: &[X], ys: &[Y], eps: f64) -> Result<Self> {
    if !eps.is_finite() || eps < 0.0 {
      return Err(Error::InvalidEpsilon(eps));
    }
    if xs.len() != ys.len() {
      return Err(Error::LengthMismatch {
        x: xs.len(),
        y: ys.len(),
      });
    }
    if let Some(index) = xs
      .iter()
      .zip(ys)
      .position(|(x, y)| !(x.as_f64().is_finite() && y.as_f64().is_finite()))
    {
      return Err(Error::NonFiniteSample { index });
    }

    let len = xs.len();
    let segments = build_segments_with::<C, X, Y>(xs, ys, eps);
    debug!("pla len={len} eps={eps} segments={}", segments.len());

    Ok(Self { eps, segments, len })
  }
}

impl Pla {
  /// Series length
  /// 序列长度
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline]
  #[must_use]
  pub fn segment_count(&self) -> usize {
    self.segments.len()
  }

  #[inline]
  #[must_use]
  pub fn avg_segment_size(&self) -> f64 {
    self.len as f64 / self.segments.len().max(1) as f64
  }

  /// Representative angles in degrees, one per segment
  /// 每段的代表角度（度）
  pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
    self.segments.iter().map(|s| s.angle)
  }

  pub fn slopes(&self) -> impl Iterator<Item = f64> + '_ {
    self.segments.iter().map(|s| s.slope)
  }

  /// Inclusive (start_idx, end_idx) pairs
  /// 闭区间 (start_idx, end_idx) 对
  pub fn ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.segments.iter().map(|s| (s.start_idx, s.end_idx))
  }

  /// First segment containing the index (boundary indices resolve to the earlier segment)
  /// 查找包含给定索引的第一个段（边界索引归属前一段）
  #[must_use]
  pub fn find_segment_for_index(&self, index: usize) -> Option<&Segment> {
    let idx = self.segments.partition_point(|seg| seg.end_idx < index);
    self
      .segments
      .get(idx)
      .filter(|seg| seg.start_idx <= index)
  }

  /// Approximated value at x, extrapolating past the ends
  /// x 处的逼近值，超出两端时外推
  #[must_use]
  pub fn predict(&self, x: f64) -> Option<f64> {
    // partition_point over x1 picks the earlier segment on shared boundaries
    let idx = self.segments.partition_point(|seg| seg.x1 < x);
    let seg = self
      .segments
      .get(idx)
      .or_else(|| self.segments.last())?;
    Some(seg.eval(x))
  }

  /// Largest perpendicular distance of a point from its segment line
  /// 点到所属段直线的最大垂直距离
  #[must_use]
  pub fn max_deviation<X: Value, Y: Value>(&self, xs: &[X], ys: &[Y]) -> f64 {
    let n = xs.len().min(ys.len());
    self
      .segments
      .iter()
      .flat_map(|seg| {
        seg
          .range()
          .take_while(move |&i| i < n)
          .map(move |i| seg.distance(Point::new(xs[i].as_f64(), ys[i].as_f64())))
      })
      .fold(0.0, f64::max)
  }

  #[must_use]
  pub fn stats(&self) -> PlaStats {
    PlaStats {
      segments: self.segment_count(),
      avg_segment_size: self.avg_segment_size(),
      max_segment_size: self
        .segments
        .iter()
        .map(Segment::point_count)
        .max()
        .unwrap_or(0),
    }
  }
}
