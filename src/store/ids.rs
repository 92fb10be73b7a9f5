//! Identifier generation for sprints and daily logs.
//!
//! Ids are opaque strings. The default generator is a monotonic counter
//! seeded above the largest numeric id already in the store, so rapid
//! successive creations can never collide (the original scheme derived ids
//! from wall-clock milliseconds, which could).

pub trait IdSource {
    fn next_id(&mut self) -> String;
}

pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Seed the counter above every numeric id in `existing`. Non-numeric
    /// ids (e.g. legacy timestamp strings) are ignored for seeding but keep
    /// working as opaque references.
    pub fn seeded_from<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max = existing
            .into_iter()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
