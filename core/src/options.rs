//! Configuration options for the evaluators.

/// Configuration options shared by the boolean and arithmetic evaluators.
///
/// # Example
///
/// ```
/// use uexpr_core::EvaluatorOptions;
///
/// let options = EvaluatorOptions {
///     max_depth: Some(256),
/// };
/// assert_eq!(EvaluatorOptions::default().max_depth, None);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting depth of parenthesized groups, negations and calls.
    ///
    /// Evaluation is plain recursive descent, so without a limit a deeply
    /// nested input can exhaust the call stack. Callers handling untrusted
    /// input should either bound the input size or set a limit here.
    ///
    /// Default: None (unbounded)
    pub max_depth: Option<usize>,
}

impl EvaluatorOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Whether `depth` nested levels are still allowed.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}
