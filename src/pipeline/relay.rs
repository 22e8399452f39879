//! Body relay: gated, full reads of downstream response bodies.

use axum::body::Bytes;
use http_body_util::BodyExt;

use crate::error::ChainError;
use crate::pipeline::gate;

/// Read a downstream response body to completion.
///
/// The admission gate runs first; a refusal is the `EndOfStream` condition,
/// distinct from a read failure. Any error while draining the stream
/// (truncation, disconnect, partial read) surfaces as `Read` with the
/// underlying cause attached. Ownership of the bytes passes to the caller.
/// No size limit is enforced at this layer.
pub async fn read_to_end<B>(body: B) -> Result<Bytes, ChainError>
where
    B: BodyExt,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    if !gate::admit() {
        return Err(ChainError::EndOfStream);
    }

    match body.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => Err(ChainError::Read(err.into())),
    }
}
