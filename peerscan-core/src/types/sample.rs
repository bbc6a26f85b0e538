//! One fetch's ephemeral payload.

/// The subject document's numeric attribute plus its peer population.
///
/// Fetched fresh on each detection call; nothing here is cached or reused.
/// The same `peers` vector drives both detection strategies so their
/// statistics stay comparable.
#[derive(Debug, Clone, Default)]
pub struct MetadataSample {
    /// The subject's extracted numeric attribute, `None` when the document
    /// does not exist or the attribute is absent/non-numeric.
    pub subject: Option<f64>,
    /// Numeric attribute values of comparable documents (subject excluded).
    pub peers: Vec<f64>,
}

impl MetadataSample {
    pub fn new(subject: Option<f64>, peers: Vec<f64>) -> Self {
        Self { subject, peers }
    }
}
