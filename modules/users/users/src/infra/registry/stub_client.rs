use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::domain::error::LookupError;
use crate::domain::ports::RegistryClient;

/// Registry stand-in for load testing.
///
/// Answers every lookup with a random six-digit code after a random delay,
/// without any network access.
#[derive(Debug, Clone)]
pub struct StubRegistryClient {
    delay_ms: Range<u64>,
}

impl Default for StubRegistryClient {
    fn default() -> Self {
        Self {
            delay_ms: 500..1500,
        }
    }
}

impl StubRegistryClient {
    #[must_use]
    pub fn with_delay_ms(delay_ms: Range<u64>) -> Self {
        Self { delay_ms }
    }
}

#[async_trait]
impl RegistryClient for StubRegistryClient {
    async fn resolve(&self, _birth_number: &str) -> Result<Option<i32>, LookupError> {
        let (delay, code) = {
            let mut rng = rand::rng();
            let delay = if self.delay_ms.is_empty() {
                0
            } else {
                rng.random_range(self.delay_ms.clone())
            };
            (delay, rng.random_range(100_000..1_000_000))
        };

        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_returns_six_digit_code() {
        let stub = StubRegistryClient::with_delay_ms(0..1);
        for _ in 0..20 {
            let code = stub.resolve("8910141234").await.unwrap().unwrap();
            assert!((100_000..1_000_000).contains(&code));
        }
    }
}
