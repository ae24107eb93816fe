
/// Seeded linear congruential generator so the randomized tests are reproducible
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // Knuth's MMIX constants; the low bits are weak, so hand out the high half
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.state >> 32
    }

    pub fn next_usize(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        (self.next_u64() as usize) % upper
    }

    /// Random sequence of length `0..=max_len` drawn from `alphabet`
    pub fn sequence(&mut self, max_len: usize, alphabet: &[u8]) -> Vec<u8> {
        let len = self.next_usize(max_len + 1);
        (0..len)
            .map(|_| alphabet[self.next_usize(alphabet.len())])
            .collect()
    }
}
