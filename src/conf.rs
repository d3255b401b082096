//! Build parameters.
//! 构建参数。

use crate::{Idmix, consts::DEFAULT_ALPHABET, error::Result};

/// Parameters for building an [`Idmix`].
/// 构建 [`Idmix`] 的参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conf {
  /// Seeds every shuffle; ids are specific to it. May be empty
  /// (empty salt = identity shuffles).
  /// 所有洗牌的种子；id 与之绑定。可为空（空盐即恒等洗牌）。
  pub salt: Vec<u8>,

  /// Minimum id length in bytes. 0 disables padding.
  /// id 的最小字节长度。0 表示不填充。
  pub min_len: usize,

  /// Candidate digit alphabet; separators and guards are carved from it.
  /// 候选数字字母表；分隔符与守卫符从中拆出。
  pub alphabet: Vec<u8>,
}

impl Default for Conf {
  fn default() -> Self {
    Self {
      salt: Vec::new(),
      min_len: 0,
      alphabet: DEFAULT_ALPHABET.to_vec(),
    }
  }
}

impl Conf {
  /// Build the codec. 构建编解码器。
  #[inline]
  pub fn build(self) -> Result<Idmix> {
    Idmix::build(self)
  }
}
