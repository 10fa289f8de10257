use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::error::*;

/// One async mutex per key, created on first use. Guards serialize read-modify-write
/// sequences on a single record across awaits.
#[derive(Debug, Default)]
pub struct KeyedLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &str) -> AgentResult<OwnedMutexGuard<()>> {
        let lock = {
            let mut locks = self.locks.lock().map_err(|err| {
                AgentError::from_msg(AgentErrorKind::InvalidState, &format!("Lock table poisoned: {err}"))
            })?;
            locks.entry(key.to_string()).or_default().clone()
        };
        Ok(lock.lock_owned().await)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_same_key_is_serialized() {
        let locks = Arc::new(KeyedLocks::new());
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let (locks, log) = (locks.clone(), log.clone());
            tokio::spawn(async move {
                let _guard = locks.lock("r1").await.unwrap();
                log.lock().unwrap().push("first:start");
                tokio::time::sleep(Duration::from_millis(50)).await;
                log.lock().unwrap().push("first:end");
            })
        };
        tokio::task::yield_now().await;
        let second = {
            let (locks, log) = (locks.clone(), log.clone());
            tokio::spawn(async move {
                let _guard = locks.lock("r1").await.unwrap();
                log.lock().unwrap().push("second");
            })
        };
        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:start", "first:end", "second"]
        );
    }

    #[tokio::test]
    async fn test_distinct_keys_do_not_block() {
        let locks = KeyedLocks::new();
        let _r1 = locks.lock("r1").await.unwrap();
        let _r2 = locks.lock("r2").await.unwrap();
    }
}
