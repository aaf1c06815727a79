//! Type definitions for Pla
//! Pla 类型定义

#![allow(clippy::cast_precision_loss, clippy::cast_lossless)]

use std::{fmt::Debug, ops::RangeInclusive};

/// Numeric sample type accepted as series input
/// 可作为序列输入的数值类型
pub trait Value: Copy + Send + Sync + Debug + 'static {
  /// Convert to f64
  /// 转换为 f64
  fn as_f64(self) -> f64;
}

macro_rules! impl_value {
  ($($t:ty),*) => {
    $(
      impl Value for $t {
        #[inline(always)]
        fn as_f64(self) -> f64 {
          self as f64
        }
      }
    )*
  };
}

impl_value!(
  f32, f64, u8, i8, u16, i16, u32, i32, u64, i64, usize, isize
);

/// Sample point (x = time, y = value)
/// 采样点（x 为时间，y 为数值）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Point `i` of a series given as parallel slices
  /// 从平行切片中取第 `i` 个点
  #[inline]
  pub(crate) fn at<X: Value, Y: Value>(xs: &[X], ys: &[Y], i: usize) -> Self {
    Self::new(xs[i].as_f64(), ys[i].as_f64())
  }
}

/// Admissible angle interval [gamma, beta] in radians
/// 可行角度区间 [gamma, beta]（弧度）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
  pub gamma: f64,
  pub beta: f64,
}

impl Cone {
  #[inline]
  #[must_use]
  pub const fn new(gamma: f64, beta: f64) -> Self {
    Self { gamma, beta }
  }

  /// Whole open range (-max, max)
  /// 完整开区间 (-max, max)
  #[inline]
  #[must_use]
  pub const fn full(max: f64) -> Self {
    Self::new(-max, max)
  }

  /// Intersection, None when empty
  /// 交集，为空时返回 None
  #[inline]
  #[must_use]
  pub fn intersect(self, other: Self) -> Option<Self> {
    let gamma = self.gamma.max(other.gamma);
    let beta = self.beta.min(other.beta);
    (gamma <= beta).then_some(Self::new(gamma, beta))
  }

  #[inline]
  #[must_use]
  pub fn width(self) -> f64 {
    self.beta - self.gamma
  }

  #[inline]
  #[must_use]
  pub fn bisector(self) -> f64 {
    (self.gamma + self.beta) * 0.5
  }

  #[inline]
  #[must_use]
  pub fn contains(self, angle: f64) -> bool {
    self.gamma <= angle && angle <= self.beta
  }

  #[inline]
  pub(crate) fn clip(self, max: f64) -> Self {
    Self::new(self.gamma.clamp(-max, max), self.beta.clamp(-max, max))
  }
}

/// Linear segment over inclusive indices: y = y0 + slope * (x - x0)
/// 闭区间索引上的线性段：y = y0 + slope * (x - x0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
  pub start_idx: usize,
  pub end_idx: usize,
  /// Bisector of the final cone, degrees in (-90, 90)
  /// 最终锥的角平分线，单位为度，范围 (-90, 90)
  pub angle: f64,
  pub slope: f64,
  pub x0: f64,
  pub y0: f64,
  /// x of the last point
  /// 最后一个点的 x
  pub x1: f64,
}

impl Segment {
  /// Number of points covered (boundary points included)
  /// 覆盖的点数（含边界点）
  #[inline]
  #[must_use]
  pub fn point_count(&self) -> usize {
    self.end_idx - self.start_idx + 1
  }

  #[inline]
  #[must_use]
  pub fn range(&self) -> RangeInclusive<usize> {
    self.start_idx..=self.end_idx
  }

  /// Fitted value at x
  /// x 处的拟合值
  #[inline]
  #[must_use]
  pub fn eval(&self, x: f64) -> f64 {
    self.slope.mul_add(x - self.x0, self.y0)
  }

  /// Perpendicular distance from point to the fitted line
  /// 点到拟合直线的垂直距离
  #[inline]
  #[must_use]
  pub fn distance(&self, p: Point) -> f64 {
    (p.y - self.eval(p.x)).abs() / self.slope.hypot(1.0)
  }
}

/// Approximation statistics
/// 逼近统计信息
#[derive(Clone, Debug, Default)]
pub struct PlaStats {
  pub segments: usize,
  pub avg_segment_size: f64,
  pub max_segment_size: usize,
}
