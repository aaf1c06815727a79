use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Name matches no known t-norm.
  /// 名称不对应任何已知 t-norm。
  #[error("Unknown t-norm type: {0}")]
  Unknown(String),
}
