//! Encoder: lottery byte, self-seeding reshuffle per number, separators,
//! guard and half-alphabet padding.
//! 编码器：彩签字节、逐数字自引用重洗、分隔符、守卫符及半字母表填充。

use crate::{
  consts::MAX_NUMBERS,
  error::{Error, Result},
  mix::Idmix,
  shuffle::shuffle,
};

impl Idmix {
  /// Encode `numbers` into one id. Deterministic; the output only uses
  /// alphabet, separator and guard bytes and is at least `min_len` long.
  /// 将 `numbers` 编码为一个 id。确定性；输出仅含字母表、分隔符与守卫符
  /// 字节，长度不小于 `min_len`。
  pub fn encode(&self, numbers: &[u64]) -> Result<Vec<u8>> {
    if numbers.is_empty() {
      return Err(Error::EmptyNumbers);
    }
    if numbers.len() > MAX_NUMBERS {
      return Err(Error::TooManyNumbers(numbers.len()));
    }

    let alen = self.alphabet.len();

    // input checksum, drives the lottery byte and guard choice
    // 输入校验和，决定彩签字节与守卫符选取
    let mix: u64 = numbers
      .iter()
      .enumerate()
      .fold(0, |acc, (i, &n)| acc + n % (i as u64 + 100));
    let lottery = self.alphabet[(mix % alen as u64) as usize];

    let mut out = Vec::with_capacity(self.estimate_len(numbers));
    out.push(lottery);

    let mut alphabet = self.alphabet.clone();
    let mut seed = Vec::with_capacity(alen);

    for (i, &n) in numbers.iter().enumerate() {
      // seed = lottery + salt + previous alphabet, clipped to alphabet size
      // seed = 彩签 + 盐 + 上一轮字母表，截断到字母表长度
      seed.clear();
      seed.push(lottery);
      seed.extend_from_slice(&self.salt);
      seed.extend_from_slice(&alphabet);
      seed.truncate(alen);

      shuffle(&mut alphabet, &seed);

      let start = out.len();
      push_digits(&mut out, n, &alphabet);

      if i + 1 < numbers.len() {
        let idx = (n % (out[start] as u64 + i as u64)) as usize % self.separators.len();
        out.push(self.separators[idx]);
      }
    }

    if out.len() < self.min_len {
      self.pad(&mut out, mix, &mut alphabet);
    }

    Ok(out)
  }

  /// Encode a single number. 编码单个数字。
  #[inline]
  pub fn encode_one(&self, n: u64) -> Result<Vec<u8>> {
    self.encode(&[n])
  }

  /// Grow `out` to `min_len`: one guard on each side, then wrap with
  /// reshuffled alphabet halves and center-crop.
  /// 将 `out` 填充到 `min_len`：两侧各一守卫符，再以重洗的半字母表包裹
  /// 并居中裁剪。
  fn pad(&self, out: &mut Vec<u8>, mix: u64, alphabet: &mut Vec<u8>) {
    let glen = self.guards.len() as u64;

    let idx = ((mix + out[0] as u64) % glen) as usize;
    out.insert(0, self.guards[idx]);

    if out.len() < self.min_len {
      let idx = ((mix + out[2] as u64) % glen) as usize;
      out.push(self.guards[idx]);
    }

    let half = alphabet.len() / 2;
    let mut seed = Vec::with_capacity(alphabet.len());
    while out.len() < self.min_len {
      seed.clear();
      seed.extend_from_slice(alphabet);
      shuffle(alphabet, &seed);

      out.splice(..0, alphabet[half..].iter().copied());
      out.extend_from_slice(&alphabet[..half]);

      let excess = out.len().saturating_sub(self.min_len);
      if excess > 0 {
        out.drain(..excess / 2);
        out.truncate(self.min_len);
      }
    }
  }
}

/// Positional digits of `n` over `alphabet`, most significant first.
/// `n` 在 `alphabet` 上的进位制数字位，高位在前。
fn push_digits(out: &mut Vec<u8>, mut n: u64, alphabet: &[u8]) {
  let base = alphabet.len() as u64;
  let start = out.len();
  loop {
    out.push(alphabet[(n % base) as usize]);
    n /= base;
    if n == 0 {
      break;
    }
  }
  out[start..].reverse();
}
