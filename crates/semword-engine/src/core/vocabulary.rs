//! Embedding vocabulary decoded from the word2vec binary format.
//!
//! Layout:
//! ```text
//! "<count> <dim>\n"
//! count × [key bytes][' '][dim × f32 little-endian]
//! ```
//! Entries may be separated by a newline, which is skipped.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, SemwordError};

/// Immutable store of key → unit-length vector.
///
/// All vectors live in one flat buffer, `dim` floats per row, so cosine
/// similarity between two rows is a dot product. Keys keep file order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keys: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<f32>,
    dim: usize,
}

impl Vocabulary {
    /// Create an empty vocabulary of the given dimension.
    pub fn with_dim(dim: usize) -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            vectors: Vec::new(),
            dim,
        }
    }

    /// Build a vocabulary from `(key, vector)` pairs.
    pub fn from_entries<I>(dim: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut vocab = Self::with_dim(dim);
        for (key, vector) in entries {
            vocab.insert(key, &vector)?;
        }
        Ok(vocab)
    }

    /// Read and decode a word2vec binary file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_word2vec_bytes(&bytes)
    }

    /// Decode a word2vec binary buffer.
    pub fn from_word2vec_bytes(bytes: &[u8]) -> Result<Self> {
        let header_end = bytes
            .iter()
            .position(|&b| b == b'\n')
            .ok_or_else(|| SemwordError::Model("missing header line".into()))?;
        let header = std::str::from_utf8(&bytes[..header_end])
            .map_err(|_| SemwordError::Model("header is not text".into()))?;
        let (count, dim) = parse_header(header)?;

        let row_bytes = dim
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or_else(|| SemwordError::Model(format!("dimension {dim} is too large")))?;
        count
            .checked_mul(dim)
            .ok_or_else(|| SemwordError::Model(format!("{count} × {dim} floats overflow")))?;

        // Each entry takes at least a space and a row.
        let capacity = count.min(bytes.len() / row_bytes.saturating_add(1));
        let mut vocab = Self::with_dim(dim);
        vocab.keys.reserve(capacity);
        vocab.vectors.reserve(capacity * dim);

        let mut pos = header_end + 1;
        for entry in 0..count {
            while bytes.get(pos) == Some(&b'\n') {
                pos += 1;
            }
            let rest = &bytes[pos.min(bytes.len())..];
            let space = rest.iter().position(|&b| b == b' ').ok_or_else(|| {
                SemwordError::Model(format!("truncated key at entry {entry} of {count}"))
            })?;
            let key = decode_key(&rest[..space]);
            pos += space + 1;

            let row = bytes
                .get(pos..)
                .and_then(|rest| rest.get(..row_bytes))
                .ok_or_else(|| {
                    SemwordError::Model(format!("truncated vector at entry {entry} of {count}"))
                })?;
            let vector: Vec<f32> = bytemuck::cast_slice::<u8, [u8; 4]>(row)
                .iter()
                .map(|&word| f32::from_le_bytes(word))
                .collect();
            pos += row_bytes;

            vocab.insert(key, &vector)?;
        }

        log::info!(
            "vocabulary decoded: {} keys, {} dimensions",
            vocab.len(),
            vocab.dim
        );
        Ok(vocab)
    }

    /// Encode this vocabulary in the word2vec binary format.
    /// Vectors are written as stored, i.e. unit length.
    pub fn write_word2vec<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{} {}", self.keys.len(), self.dim)?;
        for (i, key) in self.keys.iter().enumerate() {
            out.write_all(key.as_bytes())?;
            out.write_all(b" ")?;
            let row: Vec<[u8; 4]> = self.vector(i).iter().map(|v| v.to_le_bytes()).collect();
            out.write_all(bytemuck::cast_slice(row.as_slice()))?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn insert(&mut self, key: String, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dim {
            return Err(SemwordError::Model(format!(
                "vector for {key:?} has {} dimensions, expected {}",
                vector.len(),
                self.dim
            )));
        }
        if self.index.contains_key(&key) {
            log::debug!("duplicate key {key:?} ignored");
            return Ok(());
        }
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            self.vectors.extend(vector.iter().map(|v| v / norm));
        } else {
            self.vectors.extend_from_slice(vector);
        }
        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        Ok(())
    }

    /// Row index of a key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Key at a row index.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Unit vector at a row index. Panics when out of range.
    pub fn vector(&self, index: usize) -> &[f32] {
        &self.vectors[index * self.dim..(index + 1) * self.dim]
    }

    /// Iterate over keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let mut fields = header.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next()) {
        (Some(Ok(count)), Some(Ok(dim))) if dim > 0 => Ok((count, dim)),
        _ => Err(SemwordError::Model(format!("bad header {header:?}"))),
    }
}

/// Keys with invalid UTF-8 keep their valid characters only.
fn decode_key(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(key) => key.to_owned(),
        Err(_) => String::from_utf8_lossy(raw)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect(),
    }
}
