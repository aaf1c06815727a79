//! Tests for t-norms
//! t-norm 测试

use aok::{OK, Void};
use jdb_tnorm::{Error, TNorm, t_norm};
use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

const TOL: f64 = 1e-12;

/// Grid of membership degrees including the exact bounds
/// 包含精确端点的隶属度网格
fn samples() -> Vec<f64> {
  let mut rng = StdRng::seed_from_u64(42);
  let mut v = vec![0.0, 0.25, 0.5, 1.0];
  v.extend((0..12).map(|_| rng.random_range(0.0..=1.0)));
  v
}

#[test]
fn test_values() -> Void {
  assert_eq!(TNorm::Min.apply(0.3, 0.7), 0.3);
  assert!((TNorm::Product.apply(0.5, 0.4) - 0.2).abs() < TOL);
  assert!((TNorm::Lukasiewicz.apply(0.7, 0.6) - 0.3).abs() < TOL);
  assert_eq!(TNorm::Lukasiewicz.apply(0.3, 0.4), 0.0);
  assert_eq!(TNorm::Drastic.apply(1.0, 0.4), 0.4);
  assert_eq!(TNorm::Drastic.apply(0.4, 1.0), 0.4);
  assert_eq!(TNorm::Drastic.apply(0.9, 0.9), 0.0);
  OK
}

#[test]
fn test_lookup() -> Void {
  for norm in TNorm::ALL {
    assert_eq!(norm.name().parse::<TNorm>()?, norm);
    assert_eq!(norm.to_string(), norm.name());
  }
  assert_eq!("product".parse::<TNorm>()?, TNorm::Product);

  let f = t_norm("lukasiewicz")?;
  assert!((f(0.9, 0.8) - 0.7).abs() < TOL);

  assert_eq!(
    t_norm("hamacher").unwrap_err(),
    Error::Unknown("hamacher".into())
  );
  assert!("".parse::<TNorm>().is_err());
  OK
}

#[test]
fn test_axioms() -> Void {
  let xs = samples();
  for norm in TNorm::ALL {
    for &a in &xs {
      // identity and absorbing element
      assert!((norm.apply(a, 1.0) - a).abs() < TOL, "{norm} a={a}");
      assert_eq!(norm.apply(a, 0.0), 0.0, "{norm} a={a}");

      for &b in &xs {
        let ab = norm.apply(a, b);
        assert!((0.0..=1.0).contains(&ab), "{norm} a={a} b={b}");
        assert!((ab - norm.apply(b, a)).abs() < TOL, "{norm} commutative");

        for &c in &xs {
          let l = norm.apply(norm.apply(a, b), c);
          let r = norm.apply(a, norm.apply(b, c));
          assert!((l - r).abs() < 1e-9, "{norm} associative a={a} b={b} c={c}");

          if b <= c {
            assert!(ab <= norm.apply(a, c) + TOL, "{norm} monotone");
          }
        }
      }
    }
    trace!("{norm} axioms passed");
  }
  OK
}
