//! # idmix - Reversible short ids for sequential integers
//! idmix - 顺序整数的可逆短 id
//!
//! Deterministically turn one or more `u64` values into a short shuffled
//! id, and decode it back to the exact input values. Compatible with the
//! hashids family. Not cryptography: anyone holding the salt can reverse
//! ids. Meant to keep raw row numbers out of urls, never to guard access.
//! 将一个或多个 `u64` 确定性地变为打乱的短 id，并可解码还原出精确原值。
//! 与 hashids 算法族兼容。非密码学方案：持有盐即可逆向。用于避免在 url
//! 中暴露原始行号，而非访问控制。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use idmix::Idmix;
//!
//! # fn main() -> idmix::Result<()> {
//! let mix = Idmix::new(b"this is my salt")?;
//! let id = mix.encode(&[1, 2, 3])?;
//! assert_eq!(mix.decode(&id)?, [1, 2, 3]);
//!
//! // minimum length padding / 最小长度填充
//! let mix = Idmix::with_len(b"this is my salt", 8)?;
//! assert!(mix.encode_one(1)?.len() >= 8);
//!
//! // snapshot: rebuild without re-deriving the alphabet
//! // 快照：无需重新派生字母表即可重建
//! let bytes = mix.export().to_bytes();
//! let same = Idmix::import(&idmix::Snapshot::from_bytes(&bytes)?)?;
//! assert_eq!(same.encode_one(1)?, mix.encode_one(1)?);
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod conf;
mod consts;
mod decode;
mod encode;
pub mod error;
mod mix;
mod shuffle;
mod snapshot;

pub use conf::Conf;
pub use consts::{DEFAULT_ALPHABET, DEFAULT_SEPARATORS, MAX_NUMBERS, MIN_ALPHABET_LEN};
pub use error::{Error, Result, SnapshotError};
pub use mix::Idmix;
pub use snapshot::{SNAPSHOT_MAGIC, SNAPSHOT_VERSION, Snapshot};
