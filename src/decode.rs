//! Decoder: guard strip, mirrored reshuffles, re-encode integrity gate.
//! 解码器：剥守卫符、镜像重洗、重编码完整性闸门。

use crate::{
  consts::MAX_NUMBERS,
  error::{Error, Result},
  mix::Idmix,
  shuffle::shuffle,
};

impl Idmix {
  /// Decode an id back into its numbers. Returns exactly the sequence the
  /// id was encoded from, or fails; never a partial or "close" result.
  /// 将 id 解码回数字序列。要么返回编码时的精确序列，要么失败；
  /// 绝不返回部分或"近似"结果。
  pub fn decode(&self, id: &[u8]) -> Result<Vec<u64>> {
    let payload = self.strip_guards(id)?;
    let (&lottery, rest) = payload.split_first().ok_or(Error::InvalidId)?;

    let chunks = rest.split(|b| self.separators.contains(b));

    // pre-scan sizes the result exactly; oversized input fails before
    // any per-chunk work
    // 预扫描精确确定结果大小；超限输入在逐段解码前即失败
    let count = chunks.clone().count();
    if count > MAX_NUMBERS {
      return Err(Error::TooManyNumbers(count));
    }

    let alen = self.alphabet.len();
    let mut alphabet = self.alphabet.clone();
    let mut seed = Vec::with_capacity(alen);
    let mut numbers = Vec::with_capacity(count);

    for chunk in chunks {
      seed.clear();
      seed.push(lottery);
      seed.extend_from_slice(&self.salt);
      seed.extend_from_slice(&alphabet);
      seed.truncate(alen);

      shuffle(&mut alphabet, &seed);
      numbers.push(unhash(chunk, &alphabet)?);
    }

    // Garbage in must become a detectable error, not plausible numbers.
    // 垃圾输入必须成为可检测的错误，而非貌似合理的数字。
    if self.encode(&numbers)? != id {
      return Err(Error::InvalidId);
    }

    Ok(numbers)
  }

  /// Decode an id that must hold exactly one number.
  /// 解码必须恰含一个数字的 id。
  pub fn decode_one(&self, id: &[u8]) -> Result<u64> {
    let numbers = self.decode(id)?;
    match numbers[..] {
      [n] => Ok(n),
      _ => Err(Error::InvalidId),
    }
  }

  /// How many numbers an id holds, without decoding it.
  /// 不解码即统计 id 中的数字个数。
  pub fn numbers_count(&self, id: &[u8]) -> Result<usize> {
    let payload = self.strip_guards(id)?;
    let (_, rest) = payload.split_first().ok_or(Error::InvalidId)?;
    Ok(rest.split(|b| self.separators.contains(b)).count())
  }

  /// A guard may appear at the front, the back, both, or neither.
  /// 守卫符可出现在首、尾、两端或都不出现。
  fn strip_guards<'a>(&self, id: &'a [u8]) -> Result<&'a [u8]> {
    let mut parts = id.split(|b| self.guards.contains(b));
    let first = parts.next().ok_or(Error::InvalidId)?;
    match (parts.next(), parts.next(), parts.next()) {
      (None, _, _) => Ok(first),
      (Some(mid), None, _) | (Some(mid), Some(_), None) => Ok(mid),
      _ => Err(Error::InvalidId),
    }
  }
}

/// Decode one chunk over `alphabet`. Foreign bytes and `u64` overflow are
/// both invalid.
/// 在 `alphabet` 上解码一个分段。外来字节与 `u64` 溢出均视为非法。
fn unhash(chunk: &[u8], alphabet: &[u8]) -> Result<u64> {
  let base = alphabet.len() as u64;
  let mut value = 0u64;
  for &b in chunk {
    let idx = alphabet
      .iter()
      .position(|&a| a == b)
      .ok_or(Error::InvalidId)? as u64;
    value = value
      .checked_mul(base)
      .and_then(|v| v.checked_add(idx))
      .ok_or(Error::InvalidId)?;
  }
  Ok(value)
}
