//! Fuzzy conjunction operators (t-norms) over [0, 1]
//! [0, 1] 上的模糊合取算子（t-norm）

pub mod error;

use std::{fmt, str::FromStr};

pub use error::{Error, Result};

/// Binary t-norm function
/// 二元 t-norm 函数
pub type TNormFn = fn(f64, f64) -> f64;

/// Closed set of supported t-norms
/// 支持的 t-norm 集合（封闭）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TNorm {
  /// min(a, b)
  Min,
  /// a * b
  Product,
  /// max(0, a + b - 1)
  Lukasiewicz,
  /// b if a = 1, a if b = 1, else 0
  Drastic,
}

impl TNorm {
  pub const ALL: [Self; 4] = [Self::Min, Self::Product, Self::Lukasiewicz, Self::Drastic];

  #[inline]
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::Min => "min",
      Self::Product => "prod",
      Self::Lukasiewicz => "lukasiewicz",
      Self::Drastic => "drastic",
    }
  }

  #[inline]
  #[must_use]
  pub fn apply(self, a: f64, b: f64) -> f64 {
    (self.as_fn())(a, b)
  }

  /// Plain function pointer for this t-norm
  /// 该 t-norm 对应的函数指针
  #[inline]
  #[must_use]
  pub fn as_fn(self) -> TNormFn {
    match self {
      Self::Min => min,
      Self::Product => product,
      Self::Lukasiewicz => lukasiewicz,
      Self::Drastic => drastic,
    }
  }
}

impl FromStr for TNorm {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Ok(match s {
      "min" => Self::Min,
      "prod" | "product" => Self::Product,
      "lukasiewicz" => Self::Lukasiewicz,
      "drastic" => Self::Drastic,
      _ => return Err(Error::Unknown(s.to_owned())),
    })
  }
}

impl fmt::Display for TNorm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Look up a t-norm by name
/// 按名称查找 t-norm
pub fn t_norm(name: &str) -> Result<TNormFn> {
  name.parse::<TNorm>().map(TNorm::as_fn)
}

fn min(a: f64, b: f64) -> f64 {
  a.min(b)
}

fn product(a: f64, b: f64) -> f64 {
  a * b
}

fn lukasiewicz(a: f64, b: f64) -> f64 {
  (a + b - 1.0).max(0.0)
}

#[allow(clippy::float_cmp)]
fn drastic(a: f64, b: f64) -> f64 {
  if a == 1.0 {
    b
  } else if b == 1.0 {
    a
  } else {
    0.0
  }
}
