//! Tolerance cone between two points
//! 两点之间的容差锥
//!
//! A line through `anchor` with slope m = tan(θ) passes within ε of `target` iff
//! m²(dx² - ε²) - 2m·dx·dy + dy² - ε² <= 0. The cone is the θ range solving it.
//! 过 `anchor`、斜率 m = tan(θ) 的直线与 `target` 的距离不超过 ε，当且仅当上式成立。

use crate::{
  conf::{Conf, PlaConf},
  types::{Cone, Point},
};

/// Cone of line angles through `anchor` staying within `eps` of `target`
/// 过 `anchor` 且与 `target` 距离不超过 `eps` 的直线角度锥
#[inline]
#[must_use]
pub fn cone(anchor: Point, target: Point, eps: f64) -> Cone {
  cone_with::<PlaConf>(anchor, target, eps)
}

/// Same as [`cone`] with explicit configuration
/// 与 [`cone`] 相同，显式指定配置
///
/// When |dx| < ε the admissible set wraps through vertical; only the half holding the
/// anchor→target direction is returned, so greedy maximality holds with respect to that half.
/// 当 |dx| < ε 时可行集跨越竖直方向，仅返回包含锚点→目标方向的一半，贪心最大性仅相对于该半区间成立。
#[must_use]
pub fn cone_with<C: Conf>(anchor: Point, target: Point, eps: f64) -> Cone {
  let max = C::max_angle();
  let dx = anchor.x - target.x;
  let dy = anchor.y - target.y;

  // only the ratios dx:dy:ε matter, scale to 1 so squares cannot overflow
  let s = dx.abs().max(dy.abs()).max(eps);
  if s == 0.0 {
    return Cone::full(max);
  }
  let (dx, dy, eps) = (dx / s, dy / s, eps / s);
  let dx2 = dx * dx;
  let eps2 = eps * eps;

  // target inside the ε disk around anchor: any line works
  let inside = dx2 + dy * dy - eps2;
  if inside <= 0.0 {
    return Cone::full(max);
  }
  let root = inside.sqrt();
  let dxy = dx * dy;
  let denom = dx2 - eps2;
  // target above anchor
  let rising = if dxy == 0.0 { dy < 0.0 } else { dxy > 0.0 };

  let cone = if denom.abs() <= C::DEGENERATE_TOL * dx2.max(eps2) {
    // quadratic term vanishes: -2m·dx·dy + dy² - ε² <= 0
    if dxy == 0.0 {
      if dy == 0.0 {
        Cone::full(max)
      } else if rising {
        Cone::new(max, max)
      } else {
        Cone::new(-max, -max)
      }
    } else {
      let bound = ((dy * dy - eps2) / (2.0 * dxy)).atan();
      if rising {
        Cone::new(bound, max)
      } else {
        Cone::new(-max, bound)
      }
    }
  } else {
    // roots (dx·dy ± ε·root) / (dx² - ε²), the smaller-magnitude one via Vieta to avoid cancellation
    let q = dxy + (eps * root).copysign(dxy);
    let (r1, r2) = if q == 0.0 {
      (0.0, 0.0)
    } else {
      (q / denom, (dy * dy - eps2) / q)
    };
    let (lo, hi) = if r1 > r2 {
      (r2.atan(), r1.atan())
    } else {
      (r1.atan(), r2.atan())
    };
    if denom > 0.0 {
      Cone::new(lo, hi)
    } else if rising {
      // admissible set wraps through vertical, keep the half holding the target direction
      Cone::new(hi, max)
    } else {
      Cone::new(-max, lo)
    }
  };

  cone.clip(max)
}

#[cfg(test)]
mod tests {
  use std::f64::consts::FRAC_PI_4;

  use super::*;

  const TOL: f64 = 1e-12;

  #[test]
  fn zero_eps_is_exact_direction() {
    let c = cone(Point::new(0.0, 0.0), Point::new(1.0, 2.0), 0.0);
    assert_eq!(c.gamma, c.beta);
    assert!((c.gamma - 2f64.atan()).abs() < TOL);
  }

  #[test]
  fn symmetric_around_diagonal() {
    let c = cone(Point::new(0.0, 0.0), Point::new(2.0, 2.0), 0.1);
    assert!(c.gamma < c.beta);
    assert!((c.bisector() - FRAC_PI_4).abs() < 1e-9);
  }

  #[test]
  fn sign_convention_is_irrelevant() {
    let a = Point::new(1.0, 3.0);
    let b = Point::new(4.0, 2.0);
    let ab = cone(a, b, 0.3);
    let ba = cone(b, a, 0.3);
    assert!((ab.gamma - ba.gamma).abs() < TOL);
    assert!((ab.beta - ba.beta).abs() < TOL);
  }

  #[test]
  fn target_within_eps_is_unconstrained() {
    let c = cone(Point::new(0.0, 0.0), Point::new(0.05, 0.05), 0.1);
    assert_eq!(c, Cone::full(PlaConf::max_angle()));
  }

  #[test]
  fn duplicate_point_is_unconstrained() {
    let c = cone(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 0.0);
    assert_eq!(c, Cone::full(PlaConf::max_angle()));
  }

  #[test]
  fn duplicate_x_zero_eps_is_vertical() {
    let max = PlaConf::max_angle();
    let up = cone(Point::new(1.0, 0.0), Point::new(1.0, 5.0), 0.0);
    assert_eq!(up, Cone::new(max, max));
    let down = cone(Point::new(1.0, 0.0), Point::new(1.0, -5.0), 0.0);
    assert_eq!(down, Cone::new(-max, -max));
  }

  #[test]
  fn degenerate_dx_equals_eps_is_half_range() {
    let max = PlaConf::max_angle();
    // dx = eps = 1, dy = 3: slopes >= (9 - 1) / 6
    let c = cone(Point::new(0.0, 0.0), Point::new(1.0, 3.0), 1.0);
    assert!((c.gamma - (8.0f64 / 6.0).atan()).abs() < TOL);
    assert_eq!(c.beta, max);
  }

  #[test]
  fn steep_target_keeps_its_own_direction() {
    // |dx| < eps but target outside the disk
    let anchor = Point::new(0.0, 0.0);
    let target = Point::new(0.05, 1.0);
    let c = cone(anchor, target, 0.1);
    assert!(c.contains((1.0f64 / 0.05).atan()));
    assert_eq!(c.beta, PlaConf::max_angle());

    let c = cone(anchor, Point::new(0.05, -1.0), 0.1);
    assert!(c.contains((-1.0f64 / 0.05).atan()));
    assert_eq!(c.gamma, -PlaConf::max_angle());
  }

  #[test]
  fn every_cone_angle_stays_within_eps() {
    let anchor = Point::new(0.0, 0.0);
    let eps = 0.25;
    for target in [
      Point::new(1.0, 0.3),
      Point::new(3.0, -2.0),
      Point::new(0.2, 1.5),
      Point::new(0.25, -0.7),
      Point::new(10.0, 40.0),
    ] {
      let c = cone(anchor, target, eps);
      assert!(c.gamma <= c.beta);
      for k in 0..=20 {
        let theta = c.gamma + c.width() * f64::from(k) / 20.0;
        let m = theta.tan();
        let d = (m * (target.x - anchor.x) - (target.y - anchor.y)).abs() / m.hypot(1.0);
        assert!(d <= eps + 1e-9, "target={target:?} theta={theta} d={d}");
      }
    }
  }

  #[test]
  fn angles_never_reach_vertical() {
    let max = std::f64::consts::FRAC_PI_2;
    let c = cone(Point::new(0.0, 0.0), Point::new(1e-10, 1e10), 0.0);
    assert!(c.gamma < max && c.beta < max);
    assert!(c.gamma > -max && c.beta > -max);
  }
}
