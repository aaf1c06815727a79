//! Shared checks for Pla tests
//! Pla 测试共用检查

#![allow(dead_code)]

use jdb_pla::{Pla, SegmentBuilder};

/// Perpendicular distance of (x, y) from the line through (x0, y0) at `angle` degrees
/// (x, y) 到过 (x0, y0)、角度为 `angle` 度的直线的垂直距离
pub fn line_distance(x0: f64, y0: f64, angle: f64, x: f64, y: f64) -> f64 {
  let slope = angle.to_radians().tan();
  (y - (y0 + slope * (x - x0))).abs() / slope.hypot(1.0)
}

/// Segments cover 0..n-1 and consecutive ones share exactly their boundary index
/// 段覆盖 0..n-1，且相邻段恰好共享边界索引
pub fn check_coverage(pla: &Pla, n: usize) {
  if n < 2 {
    assert!(pla.segments.is_empty(), "n={n}");
    return;
  }
  let segs = &pla.segments;
  assert!(!segs.is_empty());
  assert_eq!(segs[0].start_idx, 0);
  assert_eq!(segs[segs.len() - 1].end_idx, n - 1);
  for seg in segs {
    assert!(seg.end_idx > seg.start_idx, "{seg:?}");
  }
  for w in segs.windows(2) {
    assert_eq!(w[0].end_idx, w[1].start_idx);
  }
}

/// Every point lies within eps (plus slack) of its segment line
/// 每个点到所属段直线的距离不超过 eps（加浮点余量）
pub fn check_tolerance(pla: &Pla, xs: &[f64], ys: &[f64], eps: f64) {
  for seg in &pla.segments {
    let (x0, y0) = (xs[seg.start_idx], ys[seg.start_idx]);
    for i in seg.range() {
      let d = line_distance(x0, y0, seg.angle, xs[i], ys[i]);
      let slack = 1e-9 * (1.0 + xs[i].abs().max(ys[i].abs()));
      assert!(d <= eps + slack, "seg={seg:?} i={i} d={d} eps={eps}");
    }
  }
}

/// No angle reaches ±90°
/// 角度不会达到 ±90°
pub fn check_angles(pla: &Pla) {
  for a in pla.angles() {
    assert!(a.abs() < 90.0, "angle={a}");
  }
}

/// Non-final segments cannot absorb one more point
/// 非末段无法再容纳下一个点
pub fn check_maximal(pla: &Pla, xs: &[f64], ys: &[f64], eps: f64) {
  let n = xs.len();
  for seg in &pla.segments {
    let anchor = jdb_pla::Point::new(xs[seg.start_idx], ys[seg.start_idx]);
    let mut builder = SegmentBuilder::new(anchor, eps);
    assert_eq!(builder.anchor(), anchor);
    for i in seg.start_idx + 1..=seg.end_idx {
      assert!(builder.push(jdb_pla::Point::new(xs[i], ys[i])), "seg={seg:?} i={i}");
    }
    if seg.end_idx + 1 < n {
      let next = seg.end_idx + 1;
      assert!(
        !builder.push(jdb_pla::Point::new(xs[next], ys[next])),
        "seg={seg:?} could take {next}"
      );
    }
  }
}
