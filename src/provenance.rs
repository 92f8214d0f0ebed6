// ==============================================================================
// provenance.rs - Input File Fingerprints
// ==============================================================================
// Description: Records size and SHA-256 of every input read during a QC run
// Author: Matt Barham
// Created: 2025-10-31
// Modified: 2026-10-14
// Version: 2.1.0
// ==============================================================================

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub path: String,
    pub size: u64,
    pub hash_sha256: String,
}

/// Reader that hashes every byte handed to the parser
///
/// The fingerprint describes exactly the bytes that were parsed, provided
/// the consumer read to end of file.
pub struct DigestReader<R> {
    inner: R,
    hasher: Sha256,
    size: u64,
}

impl<R: Read> DigestReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            size: 0,
        }
    }

    pub fn finish(self, path: &Path) -> InputFile {
        let hash_sha256 = format!("{:x}", self.hasher.finalize());
        debug!("SHA-256 of {:?}: {}", path, hash_sha256);

        InputFile {
            path: path.display().to_string(),
            size: self.size,
            hash_sha256,
        }
    }
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        self.size += n as u64;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    #[test]
    fn test_digest_of_read_bytes() {
        let mut reader = DigestReader::new(&b"abc"[..]);
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        let input = reader.finish(Path::new("abc.txt"));
        assert_eq!(contents, "abc");
        assert_eq!(input.size, 3);
        assert_eq!(input.path, "abc.txt");
        assert_eq!(
            input.hash_sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_through_buffered_reader() {
        // Small buffer forces several reads through the digest
        let data = vec![b'x'; 10_000];
        let mut reader = BufReader::with_capacity(7, DigestReader::new(&data[..]));
        let mut sink = Vec::new();
        reader.read_to_end(&mut sink).unwrap();

        let input = reader.into_inner().finish(Path::new("x.txt"));
        assert_eq!(input.size, 10_000);
        assert_eq!(input.hash_sha256, format!("{:x}", Sha256::digest(&data)));
    }

    #[test]
    fn test_digest_of_empty_input() {
        let input = DigestReader::new(std::io::empty()).finish(Path::new("empty.txt"));
        assert_eq!(input.size, 0);
        assert_eq!(
            input.hash_sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
