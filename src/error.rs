//! Error types for idmix
//! idmix 错误类型

use thiserror::Error;

use crate::consts::{MAX_NUMBERS, MIN_ALPHABET_LEN};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("alphabet: need {MIN_ALPHABET_LEN} distinct chars, got {0}")]
  AlphabetLen(usize),

  #[error("alphabet: whitespace not allowed")]
  AlphabetSpace,

  #[error("encode: numbers must not be empty")]
  EmptyNumbers,

  #[error("too many numbers: {0} > {MAX_NUMBERS}")]
  TooManyNumbers(usize),

  /// Malformed id, foreign byte, overflow, or re-encode mismatch.
  /// id 格式错误、外来字节、溢出或重编码不一致。
  #[error("invalid id")]
  InvalidId,

  #[error("snapshot: {0}")]
  Snapshot(#[from] SnapshotError),
}

/// Snapshot import / byte format rejections.
/// 快照导入及字节格式的拒绝原因。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
  #[error("bad magic")]
  Magic,

  #[error("unsupported version: {0}")]
  Version(u8),

  #[error("truncated at byte {0}")]
  Truncated(usize),

  #[error("trailing bytes after snapshot")]
  Trailing,

  #[error("checksum mismatch")]
  Checksum,

  #[error("{field}: length {got}, expect {expect}")]
  FieldLen {
    field: &'static str,
    expect: usize,
    got: usize,
  },

  #[error("{0}: too few entries")]
  TooFew(&'static str),

  #[error("{0}: forbidden byte")]
  Forbidden(&'static str),
}
