use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source for one entity kind. Ids start at 1 and are never
/// handed out twice.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self { next: AtomicU64::new(1) }
    }

    /// Reserve the next id.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Id the next call to `next_id` will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::IdSequence;

    #[test]
    fn starts_at_one_and_increments() {
        let seq = IdSequence::new();
        assert_eq!(seq.peek(), 1);
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        let seq = std::sync::Arc::new(IdSequence::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = seq.clone();
                std::thread::spawn(move || (0..250).map(|_| seq.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 1000);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&1000));
    }
}
