//! Lossy u8 quantization of concept embeddings.
//!
//! Contract: per component `v`, `scaled = 127.5 * (v + 1.0)`, clamped to
//! [0, 255] and truncated to u8. The affine mapping assumes `v` nominally
//! spans [-1, 1] (L2-normalized embedding spaces); components outside that
//! range saturate silently to 0 or 255 and never raise an error. The
//! conversion is irreversible and no dequantization step exists — compact
//! storage deliberately trades precision for size.

/// Quantize a single embedding component.
///
/// -1.0 maps to 0, 0.0 to 127, 1.0 to 255. Out-of-range values clamp;
/// NaN saturates to 0 via the clamp-then-cast policy.
pub fn quantize_component(v: f32) -> u8 {
    let scaled = 127.5 * (v + 1.0);
    scaled.clamp(0.0, 255.0) as u8
}

/// Quantize an embedding into a vector of the same length.
pub fn quantize(embedding: &[f32]) -> Vec<u8> {
    embedding.iter().copied().map(quantize_component).collect()
}

/// Quantize a batch of embeddings, preserving order.
pub fn quantize_batch(embeddings: &[Vec<f32>]) -> Vec<Vec<u8>> {
    embeddings.iter().map(|e| quantize(e)).collect()
}
