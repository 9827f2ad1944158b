use wrapped_domain::CardInstanceId;

/// Source of identifiers for paginated card instances.
pub trait IdSource {
    fn next_id(&mut self, kind: &str) -> CardInstanceId;
}

/// Random, collision-resistant identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self, kind: &str) -> CardInstanceId {
        CardInstanceId::random(kind)
    }
}

/// Predictable identifiers (`ranked-1`, `comparison-2`, ...) for tests and
/// reproducible output.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self, kind: &str) -> CardInstanceId {
        self.next += 1;
        CardInstanceId::new(kind, &self.next.to_string())
    }
}
