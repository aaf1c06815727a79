//! Segment building by greedy cone intersection
//! 通过贪心锥求交构建段
//!
//! Time Complexity: O(N) on smooth data, O(N²) worst case

use std::marker::PhantomData;

use log::trace;

use super::{
  cone::cone_with,
  conf::{Conf, PlaConf},
  consts::{MAX_ANGLE_DEG, MIN_SERIES_LEN},
  types::{Cone, Point, Segment, Value},
};

/// Running cone of one segment anchored at a fixed point
/// 以固定点为锚的单个段的当前锥
#[derive(Clone, Debug)]
pub struct SegmentBuilder<C: Conf = PlaConf> {
  anchor: Point,
  eps: f64,
  cone: Option<Cone>,
  _conf: PhantomData<C>,
}

impl SegmentBuilder<PlaConf> {
  #[inline]
  #[must_use]
  pub fn new(anchor: Point, eps: f64) -> Self {
    Self::with_conf(anchor, eps)
  }
}

impl<C: Conf> SegmentBuilder<C> {
  #[inline]
  #[must_use]
  pub fn with_conf(anchor: Point, eps: f64) -> Self {
    Self {
      anchor,
      eps,
      cone: None,
      _conf: PhantomData,
    }
  }

  #[inline]
  #[must_use]
  pub fn anchor(&self) -> Point {
    self.anchor
  }

  /// Current running cone, None before the first push
  /// 当前锥，首次 push 前为 None
  #[inline]
  #[must_use]
  pub fn cone(&self) -> Option<Cone> {
    self.cone
  }

  /// Try to extend with `target`; false (cone unchanged) when the intersection is empty
  /// 尝试加入 `target`；交集为空时返回 false（锥保持不变）
  pub fn push(&mut self, target: Point) -> bool {
    let candidate = cone_with::<C>(self.anchor, target, self.eps);
    let next = match self.cone {
      None => Some(candidate),
      Some(cur) => cur.intersect(candidate),
    };
    match next {
      Some(c) => {
        self.cone = Some(c);
        true
      }
      None => false,
    }
  }

  /// Emit the segment [start_idx, end_idx] ending at x1, angle = bisector of the running cone
  /// 输出段 [start_idx, end_idx]（终点 x 为 x1），角度取当前锥的角平分线
  #[must_use]
  pub fn finish(&self, start_idx: usize, end_idx: usize, x1: f64) -> Segment {
    let rad = self.cone.map_or(0.0, Cone::bisector);
    let angle = rad.to_degrees().clamp(-MAX_ANGLE_DEG, MAX_ANGLE_DEG);
    Segment {
      start_idx,
      end_idx,
      angle,
      slope: angle.to_radians().tan(),
      x0: self.anchor.x,
      y0: self.anchor.y,
      x1,
    }
  }
}

/// Build segments with the default configuration.
/// 使用默认配置构建段
///
/// `xs` must be non-decreasing; otherwise the result is unspecified.
/// `xs` 须单调不减，否则结果未定义。
#[inline]
pub fn build_segments<X: Value, Y: Value>(xs: &[X], ys: &[Y], eps: f64) -> Vec<Segment> {
  build_segments_with::<PlaConf, X, Y>(xs, ys, eps)
}

/// Build segments by greedy cone intersection.
/// 通过贪心锥求交构建段
///
/// Consecutive segments share their boundary index. Series shorter than 2 give no segment.
/// 相邻段共享边界索引。长度小于 2 的序列不产生段。
pub fn build_segments_with<C: Conf, X: Value, Y: Value>(
  xs: &[X],
  ys: &[Y],
  eps: f64,
) -> Vec<Segment> {
  let n = xs.len().min(ys.len());
  if n < MIN_SERIES_LEN {
    return vec![];
  }

  let mut segments = Vec::new();
  let mut start = 0;

  while start < n - 1 {
    let mut builder = SegmentBuilder::<C>::with_conf(Point::at(xs, ys, start), eps);
    let mut end = start + 1;

    // the first push always succeeds, so every segment spans at least one step
    while end < n && builder.push(Point::at(xs, ys, end)) {
      end += 1;
    }

    let last = end - 1;
    let seg = builder.finish(start, last, xs[last].as_f64());
    trace!("segment {start}..={last} angle={:.6}", seg.angle);
    segments.push(seg);

    start = last;
  }

  segments
}
