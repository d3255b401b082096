//! Alphabet preparation: dedup, separator carving, guard carving.
//! 字母表准备：去重、拆分隔符、拆守卫符。

use crate::{
  consts::{DEFAULT_SEPARATORS, MIN_ALPHABET_LEN},
  error::{Error, Result},
  shuffle::shuffle,
};

/// Character sets derived from one candidate alphabet and one salt.
/// 由一个候选字母表和一个盐派生出的字符集。
pub(crate) struct Prepared {
  pub alphabet: Vec<u8>,
  pub separators: Vec<u8>,
  pub guards: Vec<u8>,
}

pub(crate) fn prepare(candidate: &[u8], salt: &[u8]) -> Result<Prepared> {
  let mut alphabet = dedup(candidate);

  if alphabet.len() < MIN_ALPHABET_LEN {
    return Err(Error::AlphabetLen(alphabet.len()));
  }
  // NUL and whitespace cannot be digits
  // NUL 与空白字符不能作数字位
  if alphabet.iter().any(|&b| b == 0 || b.is_ascii_whitespace()) {
    return Err(Error::AlphabetSpace);
  }

  // Carve default separators out of the alphabet, keeping default order.
  // 按默认顺序从字母表中拆出分隔符。
  let mut separators: Vec<u8> = DEFAULT_SEPARATORS
    .iter()
    .copied()
    .filter(|b| alphabet.contains(b))
    .collect();
  alphabet.retain(|b| !separators.contains(b));

  shuffle(&mut separators, salt);

  // One separator per 3.5 alphabet chars. The shortfall comes from the
  // alphabet front before the alphabet itself is shuffled.
  // 每 3.5 个字母表字符配一个分隔符。不足部分在字母表洗牌前从其前缀补齐。
  if separators.is_empty() || alphabet.len() * 2 > separators.len() * 7 {
    // ceil(alphabet_len / 3.5)
    let mut need = (alphabet.len() * 2).div_ceil(7);
    if need == 1 {
      need = 2;
    }
    if need > separators.len() {
      let diff = need - separators.len();
      separators.extend_from_slice(&alphabet[..diff]);
      alphabet.drain(..diff);
    }
  }

  shuffle(&mut alphabet, salt);

  // ceil(alphabet_len / 12) guards, at least one. A tiny alphabet keeps
  // its digits and donates guards from the separator set instead.
  // ceil(字母表长度 / 12) 个守卫符，至少一个。字母表过小时保留数字位，
  // 改由分隔符集让出守卫符。
  let guard_len = alphabet.len().div_ceil(12).max(1);
  let guards = if alphabet.len() < 3 {
    let g = separators[..guard_len].to_vec();
    separators.drain(..guard_len);
    g
  } else {
    let g = alphabet[..guard_len].to_vec();
    alphabet.drain(..guard_len);
    g
  };

  Ok(Prepared {
    alphabet,
    separators,
    guards,
  })
}

/// Keep the first occurrence of each byte.
/// 每个字节只保留第一次出现。
fn dedup(candidate: &[u8]) -> Vec<u8> {
  let mut seen = [false; 256];
  let mut out = Vec::with_capacity(candidate.len());
  for &b in candidate {
    if !seen[b as usize] {
      seen[b as usize] = true;
      out.push(b);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_split() {
    let p = prepare(crate::consts::DEFAULT_ALPHABET, b"").unwrap();
    // 62 candidates - 14 separators - 4 guards
    assert_eq!(p.separators, DEFAULT_SEPARATORS);
    assert_eq!(p.guards.len(), 4);
    assert_eq!(p.alphabet.len(), 44);
  }

  #[test]
  fn test_disjoint() {
    let p = prepare(crate::consts::DEFAULT_ALPHABET, b"salt").unwrap();
    for b in &p.separators {
      assert!(!p.alphabet.contains(b));
      assert!(!p.guards.contains(b));
    }
    for b in &p.guards {
      assert!(!p.alphabet.contains(b));
    }
  }

  #[test]
  fn test_guards_from_separators() {
    // 16 distinct chars, 14 of them separators: alphabet shrinks to 2
    // 16 个不同字符中 14 个是分隔符：字母表缩至 2
    let p = prepare(b"cfhistuCFHISTUxy", b"").unwrap();
    assert_eq!(p.alphabet.len(), 2);
    assert_eq!(p.guards.len(), 1);
    assert_eq!(p.separators.len(), 13);
  }
}
