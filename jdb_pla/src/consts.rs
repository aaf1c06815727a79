//! Constants for Pla
//! Pla 常量

/// Shortest series that can form a segment
/// 可构成段的最短序列长度
pub const MIN_SERIES_LEN: usize = 2;

/// Emitted angles (degrees) stay within ±MAX_ANGLE_DEG
/// 输出角度（度）限制在 ±MAX_ANGLE_DEG 之内
pub const MAX_ANGLE_DEG: f64 = 90.0 - 1e-9;
