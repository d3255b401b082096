//! Context snapshot: rebuild an equivalent codec without re-running
//! alphabet preparation.
//! 上下文快照：无需重跑字母表准备即可重建等价的编解码器。

use crate::{
  error::{Result, SnapshotError},
  mix::Idmix,
};

/// Magic prefix of the snapshot byte format.
/// 快照字节格式的魔数前缀。
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"IMIX";

/// Version tag of the snapshot byte format.
/// 快照字节格式的版本号。
pub const SNAPSHOT_VERSION: u8 = 1;

/// Serialized image of a built [`Idmix`]. The two alphabet copies mirror
/// the classic hashids context layout; only their lengths carry meaning.
/// 构建完成的 [`Idmix`] 的序列化镜像。两个字母表副本沿用经典 hashids
/// 上下文布局，仅长度有意义。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
pub struct Snapshot {
  pub alphabet: Vec<u8>,
  pub alphabet_copy_1: Vec<u8>,
  pub alphabet_copy_2: Vec<u8>,
  pub alphabet_len: u64,
  pub salt: Vec<u8>,
  pub salt_len: u64,
  pub separators: Vec<u8>,
  pub separators_len: u64,
  pub guards: Vec<u8>,
  pub guards_len: u64,
  pub min_len: u64,
}

impl Idmix {
  /// Export a snapshot of this codec.
  /// 导出此编解码器的快照。
  pub fn export(&self) -> Snapshot {
    Snapshot {
      alphabet: self.alphabet.clone(),
      alphabet_copy_1: self.alphabet.clone(),
      alphabet_copy_2: self.alphabet.clone(),
      alphabet_len: self.alphabet.len() as u64,
      salt: self.salt.clone(),
      salt_len: self.salt.len() as u64,
      separators: self.separators.clone(),
      separators_len: self.separators.len() as u64,
      guards: self.guards.clone(),
      guards_len: self.guards.len() as u64,
      min_len: self.min_len as u64,
    }
  }

  /// Rebuild a codec from a snapshot, validating every length field.
  /// The result encodes and decodes exactly like the exporter.
  /// 从快照重建编解码器，校验每个长度字段。重建结果的编解码行为与
  /// 导出方完全一致。
  pub fn import(snap: &Snapshot) -> Result<Self> {
    check_len("alphabet", &snap.alphabet, snap.alphabet_len)?;
    check_len("alphabet_copy_1", &snap.alphabet_copy_1, snap.alphabet_len)?;
    check_len("alphabet_copy_2", &snap.alphabet_copy_2, snap.alphabet_len)?;
    check_len("salt", &snap.salt, snap.salt_len)?;
    check_len("separators", &snap.separators, snap.separators_len)?;
    check_len("guards", &snap.guards, snap.guards_len)?;

    // encode needs a base of at least 2, one separator and one guard
    // 编码至少需要基数 2、一个分隔符和一个守卫符
    if snap.alphabet.len() < 2 {
      return Err(SnapshotError::TooFew("alphabet").into());
    }
    if snap.separators.is_empty() {
      return Err(SnapshotError::TooFew("separators").into());
    }
    if snap.guards.is_empty() {
      return Err(SnapshotError::TooFew("guards").into());
    }
    if snap.alphabet.contains(&0) {
      return Err(SnapshotError::Forbidden("alphabet").into());
    }

    Ok(Self {
      alphabet: snap.alphabet.clone(),
      separators: snap.separators.clone(),
      guards: snap.guards.clone(),
      salt: snap.salt.clone(),
      min_len: snap.min_len as usize,
    })
  }
}

impl Snapshot {
  /// Byte form: magic, version, length-prefixed fields (little-endian),
  /// `min_len`, crc32 trailer.
  /// 字节形式：魔数、版本、小端长度前缀字段、`min_len`、crc32 尾部。
  pub fn to_bytes(&self) -> Vec<u8> {
    let bufs = [
      &self.alphabet,
      &self.alphabet_copy_1,
      &self.alphabet_copy_2,
      &self.salt,
      &self.separators,
      &self.guards,
    ];

    let cap =
      SNAPSHOT_MAGIC.len() + 1 + bufs.iter().map(|b| 4 + b.len()).sum::<usize>() + 8 + 4;
    let mut out = Vec::with_capacity(cap);

    out.extend_from_slice(&SNAPSHOT_MAGIC);
    out.push(SNAPSHOT_VERSION);
    for buf in bufs {
      out.extend_from_slice(&(buf.len() as u32).to_le_bytes());
      out.extend_from_slice(buf);
    }
    out.extend_from_slice(&self.min_len.to_le_bytes());

    let crc = crc32fast::hash(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
  }

  /// Parse the byte form. Every defect has its own rejection: magic,
  /// version, truncation, trailing bytes, checksum.
  /// 解析字节形式。每类缺陷都有独立的拒绝原因：魔数、版本、截断、
  /// 多余字节、校验和。
  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    let head = SNAPSHOT_MAGIC.len() + 1;
    if bytes.len() < head + 4 {
      return Err(SnapshotError::Truncated(bytes.len()).into());
    }

    let (body, crc_bytes) = bytes.split_at(bytes.len() - 4);
    let mut crc = [0u8; 4];
    crc.copy_from_slice(crc_bytes);
    if crc32fast::hash(body) != u32::from_le_bytes(crc) {
      return Err(SnapshotError::Checksum.into());
    }

    if body[..SNAPSHOT_MAGIC.len()] != SNAPSHOT_MAGIC {
      return Err(SnapshotError::Magic.into());
    }
    let version = body[SNAPSHOT_MAGIC.len()];
    if version != SNAPSHOT_VERSION {
      return Err(SnapshotError::Version(version).into());
    }

    let mut r = Reader {
      buf: body,
      pos: head,
    };
    let alphabet = r.vec()?;
    let alphabet_copy_1 = r.vec()?;
    let alphabet_copy_2 = r.vec()?;
    let salt = r.vec()?;
    let separators = r.vec()?;
    let guards = r.vec()?;
    let min_len = r.u64()?;
    if r.pos != body.len() {
      return Err(SnapshotError::Trailing.into());
    }

    Ok(Self {
      alphabet_len: alphabet.len() as u64,
      salt_len: salt.len() as u64,
      separators_len: separators.len() as u64,
      guards_len: guards.len() as u64,
      alphabet,
      alphabet_copy_1,
      alphabet_copy_2,
      salt,
      separators,
      guards,
      min_len,
    })
  }
}

fn check_len(field: &'static str, buf: &[u8], len: u64) -> Result<()> {
  if buf.len() as u64 != len {
    return Err(
      SnapshotError::FieldLen {
        field,
        expect: len as usize,
        got: buf.len(),
      }
      .into(),
    );
  }
  Ok(())
}

struct Reader<'a> {
  buf: &'a [u8],
  pos: usize,
}

impl<'a> Reader<'a> {
  fn take(&mut self, n: usize) -> Result<&'a [u8]> {
    if self.buf.len() - self.pos < n {
      return Err(SnapshotError::Truncated(self.pos).into());
    }
    let s = &self.buf[self.pos..self.pos + n];
    self.pos += n;
    Ok(s)
  }

  fn u32(&mut self) -> Result<u32> {
    let mut b = [0u8; 4];
    b.copy_from_slice(self.take(4)?);
    Ok(u32::from_le_bytes(b))
  }

  fn u64(&mut self) -> Result<u64> {
    let mut b = [0u8; 8];
    b.copy_from_slice(self.take(8)?);
    Ok(u64::from_le_bytes(b))
  }

  fn vec(&mut self) -> Result<Vec<u8>> {
    let n = self.u32()? as usize;
    Ok(self.take(n)?.to_vec())
  }
}
