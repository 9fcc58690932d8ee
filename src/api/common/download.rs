//
//  cloudfoundry-client
//  api/common/download.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Chunked file downloads.
//!
//! Package bits can be large, so downloads are never buffered by the client.
//! A [`Download`] hands out the response body chunk by chunk, in order, until
//! the end of the stream. It cannot be restarted: each chunk is yielded once.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudfoundry_client::api::common::Download;
//!
//! # async fn example(mut download: Download) -> cloudfoundry_client::api::common::Result<()> {
//! let mut total = 0;
//! while let Some(chunk) = download.next_chunk().await? {
//!     total += chunk.len();
//! }
//! println!("downloaded {} bytes", total);
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::Result;

/// A finite, ordered, non-restartable sequence of body chunks.
#[derive(Debug)]
pub struct Download {
    response: reqwest::Response,
}

impl Download {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    /// The size announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Yields the next chunk, or `None` once the body is exhausted.
    ///
    /// A transport failure mid-stream ends the download with an error.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        Ok(self.response.chunk().await?)
    }

    /// Streams the remaining body into `writer` and returns the byte count.
    pub async fn write_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.next_chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    /// Reads the remaining body into memory.
    ///
    /// Convenient for small payloads; prefer [`write_to`](Self::write_to)
    /// for package bits. The buffer grows with the bytes actually received,
    /// never with the announced `Content-Length`.
    pub async fn collect(mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        while let Some(chunk) = self.next_chunk().await? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer)
    }
}
