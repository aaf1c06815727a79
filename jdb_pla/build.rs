use std::{env, fs, path::Path};

fn main() {
  println!("cargo:rerun-if-env-changed=PLA_ANGLE_MARGIN");
  println!("cargo:rerun-if-env-changed=PLA_DEGENERATE_TOL");

  let out_dir = env::var_os("OUT_DIR").unwrap();
  let dest_path = Path::new(&out_dir).join("conf_gen.rs");

  let angle_margin = get_env_or_default("PLA_ANGLE_MARGIN", 1e-12);
  let degenerate_tol = get_env_or_default("PLA_DEGENERATE_TOL", 1e-12);

  // `{:e}` keeps the literal a valid f64 token for any value
  let content = format!(
    "
/// Default configuration generated by build.rs
/// build.rs 生成的默认配置
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaConf;

impl Conf for PlaConf {{
    const ANGLE_MARGIN: f64 = {:e};
    const DEGENERATE_TOL: f64 = {:e};
}}
",
    angle_margin, degenerate_tol
  );

  fs::write(&dest_path, content).unwrap();
  println!("cargo:rerun-if-changed=build.rs");
}

fn get_env_or_default(key: &str, default: f64) -> f64 {
  match env::var(key) {
    Ok(val) => val
      .parse()
      .ok()
      .filter(|v: &f64| v.is_finite() && *v >= 0.0)
      .unwrap_or(default),
    Err(_) => default,
  }
}
