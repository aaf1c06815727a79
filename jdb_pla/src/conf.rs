//! Compile-time configuration
//! 编译期配置
//!
//! `PlaConf` is generated by build.rs, override with `PLA_ANGLE_MARGIN` / `PLA_DEGENERATE_TOL`.
//! `PlaConf` 由 build.rs 生成，可通过 `PLA_ANGLE_MARGIN` / `PLA_DEGENERATE_TOL` 覆盖。

use std::f64::consts::FRAC_PI_2;

pub trait Conf: Send + Sync + 'static {
  /// Radians kept away from ±π/2 so tan() stays finite
  /// 与 ±π/2 保持的弧度余量，使 tan() 有限
  const ANGLE_MARGIN: f64;
  /// Relative tolerance under which dx² - ε² counts as zero
  /// dx² - ε² 视为零的相对容差
  const DEGENERATE_TOL: f64;

  /// Largest admissible cone angle (radians)
  /// 最大可用锥角（弧度）
  #[inline(always)]
  fn max_angle() -> f64 {
    FRAC_PI_2 - Self::ANGLE_MARGIN
  }
}

include!(concat!(env!("OUT_DIR"), "/conf_gen.rs"));
