//! Concept encoder trait and implementations.
//!
//! - `OnnxConceptEncoder` loads a sentence-transformer ONNX model (e.g.
//!   all-MiniLM-L6-v2) via ort and tokenizes with the HuggingFace tokenizers
//!   crate. This is the production encoding backend.
//! - `MockConceptEncoder` provides deterministic hash-based vectors for
//!   testing and for running without model files.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::{Arc, Mutex};

use concord_core::error::ConcordError;
use ort::session::Session;
use ort::value::TensorRef;
use tokenizers::Tokenizer;
use tracing::info;

/// Service that maps sentences to fixed-dimension concept embeddings.
///
/// The output has the same length and order as the input, and every vector
/// has `dimensions()` components. The dimension is fixed when the encoder is
/// constructed and constant for its lifetime. Component values carry no
/// range guarantee by contract; the quantizer assumes a nominal [-1, 1] and
/// clamps the rest.
pub trait ConceptEncoder: Send + Sync {
    /// Encode a batch of sentences into one embedding per sentence.
    fn encode_batch(
        &self,
        sentences: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, ConcordError>> + Send;

    /// Return the dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;
}

// ---------------------------------------------------------------------------
// OnnxConceptEncoder - real ONNX Runtime inference
// ---------------------------------------------------------------------------

/// ONNX Runtime-backed concept encoder using a sentence-transformer model.
///
/// Expects a model accepting `input_ids`, `attention_mask`, and
/// `token_type_ids` as i64 inputs and producing token-level embeddings of
/// shape `[batch, seq_len, hidden_dim]`. Masked mean pooling followed by
/// L2 normalization yields one unit vector per sentence, so components land
/// in the nominal [-1, 1] range the quantizer assumes.
pub struct OnnxConceptEncoder {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    dimensions: usize,
}

// ort::Session is Send + Sync internally (uses Arc<SharedSessionInner>).
unsafe impl Send for OnnxConceptEncoder {}
unsafe impl Sync for OnnxConceptEncoder {}

impl std::fmt::Debug for OnnxConceptEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxConceptEncoder")
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

impl OnnxConceptEncoder {
    /// Load from explicit model and tokenizer file paths.
    pub fn from_files(model_path: &Path, tokenizer_path: &Path) -> Result<Self, ConcordError> {
        if !model_path.exists() {
            return Err(ConcordError::Encoding(format!(
                "ONNX model not found at {}",
                model_path.display()
            )));
        }
        if !tokenizer_path.exists() {
            return Err(ConcordError::Encoding(format!(
                "Tokenizer not found at {}",
                tokenizer_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| ConcordError::Encoding(format!("ONNX session builder: {}", e)))?
            .with_intra_threads(1)
            .map_err(|e| ConcordError::Encoding(format!("ONNX set threads: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| ConcordError::Encoding(format!("ONNX load model: {}", e)))?;

        // Detect output dimensions from the model output type.
        // Sentence-transformer output is typically [batch, seq_len, hidden_dim].
        let dimensions = session
            .outputs()
            .first()
            .and_then(|out| out.dtype().tensor_shape())
            .and_then(|shape| shape.last().copied())
            .map(|d| if d > 0 { d as usize } else { 384 })
            .unwrap_or(384);

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| ConcordError::Encoding(format!("Failed to load tokenizer: {}", e)))?;

        info!(
            model = %model_path.display(),
            dimensions,
            "Loaded ONNX concept encoder"
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            dimensions,
        })
    }

    /// Tokenize one sentence, run inference, and mean-pool the output.
    fn encode_sync(&self, sentence: &str) -> Result<Vec<f32>, ConcordError> {
        if sentence.is_empty() {
            return Err(ConcordError::Encoding(
                "Cannot encode empty sentence".to_string(),
            ));
        }

        let encoding = self
            .tokenizer
            .encode(sentence, true)
            .map_err(|e| ConcordError::Encoding(format!("Tokenization failed: {}", e)))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let token_type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|&t| t as i64)
            .collect();

        let seq_len = input_ids.len();

        let ids_array = ndarray::Array2::from_shape_vec((1, seq_len), input_ids)
            .map_err(|e| ConcordError::Encoding(format!("input_ids array: {}", e)))?;
        let mask_array = ndarray::Array2::from_shape_vec((1, seq_len), attention_mask.clone())
            .map_err(|e| ConcordError::Encoding(format!("attention_mask array: {}", e)))?;
        let type_array = ndarray::Array2::from_shape_vec((1, seq_len), token_type_ids)
            .map_err(|e| ConcordError::Encoding(format!("token_type_ids array: {}", e)))?;

        let ids_ref = TensorRef::from_array_view(&ids_array)
            .map_err(|e| ConcordError::Encoding(format!("TensorRef input_ids: {}", e)))?;
        let mask_ref = TensorRef::from_array_view(&mask_array)
            .map_err(|e| ConcordError::Encoding(format!("TensorRef attention_mask: {}", e)))?;
        let type_ref = TensorRef::from_array_view(&type_array)
            .map_err(|e| ConcordError::Encoding(format!("TensorRef token_type_ids: {}", e)))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| ConcordError::Encoding(format!("Session lock poisoned: {}", e)))?;
        let outputs = session
            .run(ort::inputs![ids_ref, mask_ref, type_ref])
            .map_err(|e| ConcordError::Encoding(format!("ONNX inference failed: {}", e)))?;

        // Extract token embeddings as flat slice: [1, seq_len, hidden_dim].
        let (shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ConcordError::Encoding(format!("Extract embeddings: {}", e)))?;

        let shape_dims: Vec<i64> = shape.iter().copied().collect();
        if shape_dims.len() < 2 {
            return Err(ConcordError::Encoding(format!(
                "Unexpected output shape: {:?}",
                shape_dims
            )));
        }

        let hidden_dim = *shape_dims.last().unwrap() as usize;

        // Mean pooling over the sequence dimension, masked by attention_mask.
        let mut pooled = vec![0.0f32; hidden_dim];
        let mut count = 0.0f32;

        for (tok_idx, &mask_val) in attention_mask.iter().enumerate() {
            if mask_val > 0 {
                let offset = tok_idx * hidden_dim;
                for dim in 0..hidden_dim {
                    pooled[dim] += data[offset + dim];
                }
                count += 1.0;
            }
        }

        if count > 0.0 {
            for val in &mut pooled {
                *val /= count;
            }
        }

        // L2-normalize the embedding.
        let norm: f32 = pooled.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for val in &mut pooled {
                *val /= norm;
            }
        }

        Ok(pooled)
    }

    fn encode_batch_sync(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, ConcordError> {
        sentences.iter().map(|s| self.encode_sync(s)).collect()
    }
}

impl ConceptEncoder for OnnxConceptEncoder {
    async fn encode_batch(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, ConcordError> {
        // ONNX Runtime inference is CPU-bound; run on a blocking thread.
        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let dims = self.dimensions;
        let sentences_owned = sentences.to_vec();

        tokio::task::spawn_blocking(move || {
            let encoder = OnnxConceptEncoder {
                session,
                tokenizer,
                dimensions: dims,
            };
            encoder.encode_batch_sync(&sentences_owned)
        })
        .await
        .map_err(|e| ConcordError::Encoding(format!("Encoding task panicked: {}", e)))?
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

// ---------------------------------------------------------------------------
// MockConceptEncoder - deterministic hash-based vectors for testing
// ---------------------------------------------------------------------------

/// Mock encoder that returns deterministic vectors derived from a hash of
/// the input sentence.
///
/// Identical inputs always produce identical outputs, values lie in [-1, 1],
/// and the dimension is configurable (default 384, matching MiniLM). This
/// allows exercising the full pipeline without model files.
#[derive(Debug, Clone)]
pub struct MockConceptEncoder {
    dimensions: usize,
}

impl MockConceptEncoder {
    pub fn new() -> Self {
        Self { dimensions: 384 }
    }

    /// Use a non-default dimension. `dimensions = 0` is permitted and yields
    /// empty vectors (the quantized preview is then empty as well).
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn hash_to_vector(&self, sentence: &str) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.dimensions);
        for i in 0..self.dimensions {
            let mut hasher = DefaultHasher::new();
            sentence.hash(&mut hasher);
            i.hash(&mut hasher);
            let h = hasher.finish();
            let val = ((h as f64) / (u64::MAX as f64)) * 2.0 - 1.0;
            result.push(val as f32);
        }
        result
    }
}

impl Default for MockConceptEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptEncoder for MockConceptEncoder {
    async fn encode_batch(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, ConcordError> {
        sentences
            .iter()
            .map(|s| {
                if s.is_empty() {
                    Err(ConcordError::Encoding(
                        "Cannot encode empty sentence".to_string(),
                    ))
                } else {
                    Ok(self.hash_to_vector(s))
                }
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
