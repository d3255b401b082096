//! Construction: validation, custom alphabets, derived set shapes.
//! 构建：校验、自定义字母表、派生集形状。

use aok::{OK, Void};
use idmix::{Conf, Error, Idmix};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_default_conf() -> Void {
  let mix = Conf::default().build()?;
  assert_eq!(mix.min_len(), 0);
  // 62 candidates - 14 separators - 4 guards
  assert_eq!(mix.alphabet().len(), 44);
  assert_eq!(mix.separators().len(), 14);
  assert_eq!(mix.guards().len(), 4);
  OK
}

#[test]
fn test_alphabet_too_short() -> Void {
  let err = Conf {
    alphabet: b"abcdefghij".to_vec(),
    ..Conf::default()
  }
  .build()
  .unwrap_err();
  assert_eq!(err, Error::AlphabetLen(10));

  // length before dedup does not count / 去重前的长度不算数
  let err = Conf {
    alphabet: b"abababababababababababababababab".to_vec(),
    ..Conf::default()
  }
  .build()
  .unwrap_err();
  assert_eq!(err, Error::AlphabetLen(2));
  OK
}

#[test]
fn test_alphabet_whitespace() -> Void {
  let err = Conf {
    alphabet: b"abcdefghijklmno pqrstuvwxyz".to_vec(),
    ..Conf::default()
  }
  .build()
  .unwrap_err();
  assert_eq!(err, Error::AlphabetSpace);
  OK
}

#[test]
fn test_custom_alphabet() -> Void {
  let mix = Conf {
    salt: b"this is my salt".to_vec(),
    alphabet: b"0123456789abcdef".to_vec(),
    ..Conf::default()
  }
  .build()?;

  for numbers in [vec![1u64], vec![1234567u64], vec![1u64, 2, 3, 4]] {
    let id = mix.encode(&numbers)?;
    assert_eq!(mix.decode(&id)?, numbers);
  }
  OK
}

/// Nearly every candidate is a separator: digits shrink to two and the
/// guard comes from the separator set.
/// 几乎所有候选都是分隔符：数字位缩至两个，守卫符取自分隔符集。
#[test]
fn test_tiny_working_alphabet() -> Void {
  let mix = Conf {
    salt: b"tiny".to_vec(),
    alphabet: b"cfhistuCFHISTUxy".to_vec(),
    ..Conf::default()
  }
  .build()?;
  assert_eq!(mix.alphabet().len(), 2);
  assert_eq!(mix.guards().len(), 1);

  for numbers in [vec![0u64], vec![7u64], vec![1u64, 2, 3], vec![u64::MAX]] {
    let id = mix.encode(&numbers)?;
    assert_eq!(mix.decode(&id)?, numbers);
  }

  let padded = Conf {
    salt: b"tiny".to_vec(),
    min_len: 16,
    alphabet: b"cfhistuCFHISTUxy".to_vec(),
  }
  .build()?;
  let id = padded.encode(&[7])?;
  assert!(id.len() >= 16);
  assert_eq!(padded.decode(&id)?, [7]);
  OK
}

#[test]
fn test_sets_disjoint() -> Void {
  let mix = Idmix::new(b"disjoint salt")?;
  for &b in mix.separators() {
    assert!(!mix.alphabet().contains(&b));
    assert!(!mix.guards().contains(&b));
  }
  for &b in mix.guards() {
    assert!(!mix.alphabet().contains(&b));
  }
  OK
}

#[test]
fn test_alphabet_salt_sensitivity() -> Void {
  let a = Idmix::new(b"salt a")?;
  let b = Idmix::new(b"salt b")?;
  assert_ne!(a.alphabet(), b.alphabet());
  OK
}
