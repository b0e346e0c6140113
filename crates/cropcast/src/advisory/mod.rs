//! Advisory decision engine.
//!
//! Two independent components share the same design: ordered rule
//! evaluation, deterministic tie-breaks, and a guaranteed default. The
//! [`interpreter`] turns a numeric yield estimate plus its input features
//! into qualitative factors, anomaly flags, and recommendations. The
//! [`intent`] router matches free-text questions against a priority-ordered
//! keyword hierarchy and always produces a response, even when the optional
//! completion service in front of it fails.

pub mod domain;
pub mod intent;
pub mod interpreter;

pub use domain::{ConversationTurn, FeatureVector, InputShapeError, Speaker, YieldEstimate};
pub use intent::{
    AdvisoryResponder, ChatService, CompletionResponder, FallbackResponder, IntentRouter,
    KeywordResponder,
};
pub use interpreter::{
    Anomaly, Factor, FactorBreakdown, InterpreterConfig, OutcomeAssessment, OutcomeInterpreter,
    Recommendation, Severity,
};
