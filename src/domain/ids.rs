/// Monotonic identifier source owned by whichever store hands out ids.
///
/// Ids are `"{prefix}-{sequence}"` with the sequence starting at 1, so they
/// stay unique regardless of clock resolution.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let sequence = self.next;
        self.next += 1;
        format!("{}-{sequence}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_prefixed_and_unique() {
        let mut ids = IdGenerator::new("tsk");
        let generated = (0..100).map(|_| ids.next_id()).collect::<Vec<_>>();
        assert_eq!(generated[0], "tsk-1");
        assert_eq!(generated[99], "tsk-100");
        assert_eq!(generated.iter().collect::<HashSet<_>>().len(), 100);
    }
}
