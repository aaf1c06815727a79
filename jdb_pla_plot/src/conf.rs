//! Plot configuration
//! 绘图配置

/// Canvas and content options
/// 画布与内容选项
#[derive(Clone, Debug)]
pub struct PlotConf {
  pub width: u32,
  pub height: u32,
  pub margin: u32,
  /// Draw an ε circle around every point in its segment color
  /// 在每个点周围以所属段颜色绘制 ε 圆
  pub circles: bool,
  pub title: String,
}

impl Default for PlotConf {
  fn default() -> Self {
    Self {
      width: 1200,
      height: 600,
      margin: 60,
      circles: true,
      title: "Time Series with ε-Circles and Piecewise Linear Approximation".into(),
    }
  }
}

impl PlotConf {
  /// Fitted lines only, no ε circles
  /// 仅绘制拟合直线，不绘制 ε 圆
  #[must_use]
  pub fn lines_only() -> Self {
    Self {
      circles: false,
      title: "Piecewise Linear Approximation of Time Series".into(),
      ..Self::default()
    }
  }
}
