//! The built codec value.
//! 构建完成的编解码器值。

use log::debug;

use crate::{alphabet::prepare, conf::Conf, error::Result};

/// Reversible id codec. Immutable once built and freely shared across
/// threads: every call allocates its own scratch.
/// 可逆 id 编解码器。构建后不可变，可跨线程共享：每次调用自备临时缓冲。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idmix {
  pub(crate) alphabet: Vec<u8>,
  pub(crate) separators: Vec<u8>,
  pub(crate) guards: Vec<u8>,
  pub(crate) salt: Vec<u8>,
  pub(crate) min_len: usize,
}

impl Idmix {
  /// Build with `salt`, default alphabet, no minimum length.
  /// 用 `salt`、默认字母表、无最小长度构建。
  pub fn new(salt: &[u8]) -> Result<Self> {
    Conf {
      salt: salt.to_vec(),
      ..Conf::default()
    }
    .build()
  }

  /// Build with `salt` and a minimum id length.
  /// 用 `salt` 和最小 id 长度构建。
  pub fn with_len(salt: &[u8], min_len: usize) -> Result<Self> {
    Conf {
      salt: salt.to_vec(),
      min_len,
      ..Conf::default()
    }
    .build()
  }

  pub(crate) fn build(conf: Conf) -> Result<Self> {
    let Conf {
      salt,
      min_len,
      alphabet,
    } = conf;
    let p = prepare(&alphabet, &salt)?;
    debug!(
      "idmix: alphabet {} separators {} guards {} min_len {}",
      p.alphabet.len(),
      p.separators.len(),
      p.guards.len(),
      min_len
    );
    Ok(Self {
      alphabet: p.alphabet,
      separators: p.separators,
      guards: p.guards,
      salt,
      min_len,
    })
  }

  /// Upper bound of [`encode`](Self::encode) output length for `numbers`.
  /// Never undershoots the real length.
  /// `numbers` 经 [`encode`](Self::encode) 后输出长度的上界，绝不低估。
  pub fn estimate_len(&self, numbers: &[u64]) -> usize {
    let base = self.alphabet.len() as u64;
    // two guards, lottery byte plus one separator per gap, digits per number
    // 两个守卫符，彩签字节加每个间隔一个分隔符，再加各数字的位数
    let mut len = 2 + numbers.len();
    for &n in numbers {
      let mut n = n;
      len += 1;
      while n >= base {
        n /= base;
        len += 1;
      }
    }
    len.max(self.min_len)
  }

  /// Working digit alphabet (separators and guards already carved out).
  /// 工作数字字母表（分隔符与守卫符已拆出）。
  #[inline]
  pub fn alphabet(&self) -> &[u8] {
    &self.alphabet
  }

  #[inline]
  pub fn separators(&self) -> &[u8] {
    &self.separators
  }

  #[inline]
  pub fn guards(&self) -> &[u8] {
    &self.guards
  }

  #[inline]
  pub fn salt(&self) -> &[u8] {
    &self.salt
  }

  #[inline]
  pub fn min_len(&self) -> usize {
    self.min_len
  }
}
