//! OpenTelemetry GenAI Semantic Convention attribute names and values.
//!
//! `#[instrument]` declares span fields as dotted identifiers
//! (`gen_ai.request.model = ...`). Fields filled in after the response
//! arrives are recorded through `Span::record` with the names below.

/// The finish reason of the first choice (e.g., "stop", "length").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

/// The model that actually served the response.
pub const GEN_AI_RESPONSE_MODEL: &str = "gen_ai.response.model";

// --- Operation name values ---

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

// --- Provider name values ---

/// OpenAI (and OpenAI-compatible) provider identifier.
pub const PROVIDER_OPENAI: &str = "openai";
