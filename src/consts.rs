//! Algorithm constants. Every value is fixed by the hashids algorithm;
//! changing any of them changes every encoded id.
//! 算法常量。所有值均由 hashids 算法固定；改动任何一个都会改变全部编码结果。

/// Default digit alphabet. Separator candidates are carved out of it at
/// build time, so the working alphabet is smaller.
/// 默认数字字母表。构建时会从中拆出分隔符候选，工作字母表因此更小。
pub const DEFAULT_ALPHABET: &[u8] =
  b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Separator candidates, kept in this order before the salt shuffle.
/// 分隔符候选集，盐洗牌之前保持此顺序。
pub const DEFAULT_SEPARATORS: &[u8] = b"cfhistuCFHISTU";

/// Minimum distinct chars a candidate alphabet must keep after dedup.
/// 候选字母表去重后必须保留的最小字符数。
pub const MIN_ALPHABET_LEN: usize = 16;

/// Hard ceiling on numbers per encode/decode call.
/// 单次编码/解码的数字个数硬上限。
pub const MAX_NUMBERS: usize = 65536;
