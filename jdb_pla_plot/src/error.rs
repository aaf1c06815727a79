use thiserror::Error;

/// Plot specialized Result type.
/// 绘图专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  /// Nothing to draw.
  /// 没有可绘制的数据。
  #[error("Empty series")]
  Empty,
  #[error("Length mismatch: {x} x values, {y} y values")]
  LengthMismatch { x: usize, y: usize },
  /// Approximation was built from a different (longer) series.
  /// 逼近结果来自另一个（更长的）序列。
  #[error("Segment end {end_idx} out of range for series of length {len}")]
  OutOfRange { end_idx: usize, len: usize },
}
