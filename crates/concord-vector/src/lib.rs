//! Concord vector crate - concept encoding and u8 quantization.

pub mod encoder;
pub mod quantizer;

pub use encoder::{ConceptEncoder, MockConceptEncoder, OnnxConceptEncoder};
pub use quantizer::{quantize, quantize_batch, quantize_component};
