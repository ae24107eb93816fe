
/// One unit of batch work: two signatures to compare
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignaturePair {
    /// Unique identifier, in input order
    pair_id: u64,
    /// User-provided label for the pair
    label: String,
    /// The source signature, None if it was empty in the input
    from: Option<Vec<u8>>,
    /// The target signature, None if it was empty in the input
    to: Option<Vec<u8>>
}

impl SignaturePair {
    /// Constructor; empty signatures are stored as None
    pub fn new(pair_id: u64, label: String, from: Option<Vec<u8>>, to: Option<Vec<u8>>) -> Self {
        Self {
            pair_id,
            label,
            from: from.filter(|s| !s.is_empty()),
            to: to.filter(|s| !s.is_empty())
        }
    }

    // getters
    pub fn pair_id(&self) -> u64 {
        self.pair_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn from(&self) -> Option<&[u8]> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&[u8]> {
        self.to.as_deref()
    }

    pub fn from_len(&self) -> usize {
        self.from.as_ref().map(|s| s.len()).unwrap_or(0)
    }

    pub fn to_len(&self) -> usize {
        self.to.as_ref().map(|s| s.len()).unwrap_or(0)
    }
}
