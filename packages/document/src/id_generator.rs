use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

/// Derive a stable origin id from the archetype (and template) a document
/// was created from, using CRC32
pub fn get_origin_id(archetype_id: &str, template_id: Option<&str>) -> String {
    let origin = match template_id {
        Some(template_id) => format!("archetype://{}/{}", archetype_id, template_id),
        None => format!("archetype://{}", archetype_id),
    };

    let mut hasher = Hasher::new();
    hasher.update(origin.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for section instances within a document.
///
/// The counter only moves forward, so an id is never handed out twice in
/// the lineage of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(archetype_id: &str, template_id: Option<&str>) -> Self {
        Self::from_seed(get_origin_id(archetype_id, template_id))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id; `None` once the counter is exhausted
    pub fn new_id(&mut self) -> Option<String> {
        self.count = self.count.checked_add(1)?;
        Some(format!("{}-{}", self.seed, self.count))
    }

    /// Move the counter past `id` if it is one of ours (`<seed>-<n>`)
    pub fn observe(&mut self, id: &str) {
        let n = id
            .strip_prefix(self.seed.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|n| n.parse::<u32>().ok());

        if let Some(n) = n {
            self.count = self.count.max(n);
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn count(&self) -> u32 {
        self.count
    }
}
