use std::collections::HashMap;

use bytes::Bytes;
use newsdesk_core::ImageToken;

/// Owns downloaded image bytes and hands the core opaque tokens; the core
/// only stores and compares tokens, never pixels.
#[derive(Default)]
pub struct ImageStore {
    images: HashMap<ImageToken, Bytes>,
    next: ImageToken,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, bytes: Bytes) -> ImageToken {
        self.next += 1;
        let token = self.next;
        self.images.insert(token, bytes);
        token
    }

    pub fn byte_len(&self, token: ImageToken) -> Option<usize> {
        self.images.get(&token).map(|bytes| bytes.len())
    }
}
