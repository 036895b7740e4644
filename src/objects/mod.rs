//! Typed records parsed from git output
//!
//! - `commit`, `author`, `message`: `show`/`log --pretty=raw` records
//! - `tree_object`, `tree`: `ls-tree -l` entries
//! - `branch`: `branch -v` lines
//! - `tag`: `show-ref --tags` lines
//! - `log`: a sequence of commits
//! - `status`: `status --porcelain` entries

pub mod author;
pub mod branch;
pub mod commit;
pub mod log;
pub mod message;
pub mod status;
pub mod tag;
pub mod tree;
pub mod tree_object;

pub use author::Author;
pub use branch::Branch;
pub use commit::Commit;
pub use log::Log;
pub use message::Message;
pub use status::{Status, StatusEntry};
pub use tag::Tag;
pub use tree::Tree;
pub use tree_object::{ObjectKind, TreeObject};

/// Anything that names a commit: branch, tag, sha, `HEAD`
pub trait Treeish {
    fn treeish(&self) -> &str;
}

impl Treeish for str {
    fn treeish(&self) -> &str {
        self
    }
}

impl Treeish for String {
    fn treeish(&self) -> &str {
        self
    }
}

impl<T: Treeish + ?Sized> Treeish for &T {
    fn treeish(&self) -> &str {
        (**self).treeish()
    }
}

/// Undo git's C-style path quoting: `"caf\303\251"` → `café`.
///
/// Unquoted input is returned as is. Octal escapes are raw bytes and are
/// reassembled before UTF-8 decoding.
pub(crate) fn unquote_path(raw: &str) -> String {
    let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) else {
        return raw.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut rest = inner.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        rest = tail;
        if byte != b'\\' {
            bytes.push(byte);
            continue;
        }
        let Some((&escaped, tail)) = rest.split_first() else {
            bytes.push(b'\\');
            break;
        };
        rest = tail;
        match escaped {
            b'0'..=b'7' => {
                let digits: Vec<u8> = std::iter::once(escaped)
                    .chain(rest.iter().copied().take(2).take_while(|d| matches!(d, b'0'..=b'7')))
                    .collect();
                rest = &rest[digits.len() - 1..];
                let value = digits
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                bytes.push(u8::try_from(value).unwrap_or(u8::MAX));
            }
            b'a' => bytes.push(0x07),
            b'b' => bytes.push(0x08),
            b't' => bytes.push(b'\t'),
            b'n' => bytes.push(b'\n'),
            b'v' => bytes.push(0x0b),
            b'f' => bytes.push(0x0c),
            b'r' => bytes.push(b'\r'),
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
