use thiserror::Error;

/// Pla specialized Result type.
/// Pla 专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Input validation errors, raised before any segment is built.
/// 输入校验错误，在构建任何段之前返回。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// Tolerance is negative, NaN or infinite.
  /// 容差为负数、NaN 或无穷大。
  #[error("Invalid epsilon: {0} (must be finite and >= 0)")]
  InvalidEpsilon(f64),
  /// X and Y have different lengths.
  /// X 与 Y 长度不同。
  #[error("Length mismatch: {x} x values, {y} y values")]
  LengthMismatch { x: usize, y: usize },
  /// A sample is NaN or infinite.
  /// 某个样本为 NaN 或无穷大。
  #[error("Non-finite sample at index {index}")]
  NonFiniteSample { index: usize },
}
