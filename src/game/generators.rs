use async_trait::async_trait;
use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 6;

/// Trait for generating game ids
#[async_trait]
pub trait GameIdGenerator: Send + Sync {
    async fn generate(&self) -> String;
}

/// Short lowercase base-36 ids that are easy to read out and type
pub struct RandomGameIdGenerator;

impl RandomGameIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomGameIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameIdGenerator for RandomGameIdGenerator {
    async fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}
