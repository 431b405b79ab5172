/// Login-wait polling
use crate::error::{FlowError, Result};
use crate::platform::Sleeper;
use std::future::Future;
use std::time::Duration;

/// Bounded, cancellable poll for a completed sign-in.
///
/// A tick is one `interval` of sleep followed by one probe. The poll is active
/// while [`LoginPoll::wait`] runs; dropping the future stops it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginPoll {
    attempts: u32,
    max_attempts: u32,
    interval: Duration,
    active: bool,
}

impl LoginPoll {
    pub fn new(interval: Duration, max_attempts: u32) -> LoginPoll {
        LoginPoll {
            attempts: 0,
            max_attempts,
            interval,
            active: false,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn cancel(&mut self) {
        self.active = false;
    }

    /// Run `probe` once per tick until it reports `true`.
    ///
    /// Returns `Timeout` once `max_attempts` probes have all reported `false`,
    /// and the probe's own error if it fails.
    pub async fn wait<S, F, Fut>(&mut self, sleeper: &S, mut probe: F) -> Result<()>
    where
        S: Sleeper,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        self.active = true;

        loop {
            sleeper.sleep(self.interval).await;
            self.attempts += 1;

            match probe().await {
                Ok(true) => {
                    self.cancel();
                    log::info!("Login detected after {} checks", self.attempts);
                    return Ok(());
                }
                Ok(false) if self.attempts >= self.max_attempts => {
                    self.cancel();
                    log::warn!("Gave up waiting for login after {} checks", self.attempts);
                    return Err(FlowError::Timeout {
                        attempts: self.attempts,
                    });
                }
                Ok(false) => {}
                Err(e) => {
                    self.cancel();
                    log::error!("Login check failed on attempt {}: {}", self.attempts, e);
                    return Err(e);
                }
            }
        }
    }
}
