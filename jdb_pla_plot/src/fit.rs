//! Fitted line reconstruction
//! 拟合直线重建

use jdb_pla::{Pla, Value};

use crate::error::{Error, Result};

/// Fitted polyline of one segment: y = Y[start] + tan(angle) * (x - X[start])
/// 单个段的拟合折线：y = Y[start] + tan(angle) * (x - X[start])
#[derive(Clone, Debug, PartialEq)]
pub struct FitLine {
  pub start_idx: usize,
  pub end_idx: usize,
  pub xs: Vec<f64>,
  pub ys: Vec<f64>,
}

/// Check that (xs, ys) is the series `pla` was built from
/// 检查 (xs, ys) 是否为构建 `pla` 的序列
pub(crate) fn check_series<X: Value, Y: Value>(xs: &[X], ys: &[Y], pla: &Pla) -> Result<()> {
  if xs.len() != ys.len() {
    return Err(Error::LengthMismatch {
      x: xs.len(),
      y: ys.len(),
    });
  }
  match pla.segments.last() {
    Some(seg) if seg.end_idx >= xs.len() => Err(Error::OutOfRange {
      end_idx: seg.end_idx,
      len: xs.len(),
    }),
    _ => Ok(()),
  }
}

/// Reconstruct the fitted polyline of every segment from its angle
/// 根据角度重建每个段的拟合折线
pub fn fit_lines<X: Value, Y: Value>(xs: &[X], ys: &[Y], pla: &Pla) -> Result<Vec<FitLine>> {
  check_series(xs, ys, pla)?;
  Ok(
    pla
      .segments
      .iter()
      .map(|seg| {
        let x0 = xs[seg.start_idx].as_f64();
        let y0 = ys[seg.start_idx].as_f64();
        let slope = seg.angle.to_radians().tan();
        let line_xs: Vec<f64> = seg.range().map(|i| xs[i].as_f64()).collect();
        let line_ys = line_xs.iter().map(|x| y0 + slope * (x - x0)).collect();
        FitLine {
          start_idx: seg.start_idx,
          end_idx: seg.end_idx,
          xs: line_xs,
          ys: line_ys,
        }
      })
      .collect(),
  )
}
