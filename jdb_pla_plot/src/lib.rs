//! SVG rendering of piecewise linear approximations
//! 分段线性逼近的 SVG 渲染
//!
//! Draws the original series, each segment's fitted line and optionally an ε circle
//! around every point, colored per segment.
//! 绘制原始序列、各段拟合直线，以及可选的每点 ε 圆，按段着色。

pub mod conf;
pub mod error;
pub mod fit;
pub mod render;

pub use self::{
  conf::PlotConf,
  error::{Error, Result},
  fit::{FitLine, fit_lines},
  render::{document, render_svg, save_svg},
};
