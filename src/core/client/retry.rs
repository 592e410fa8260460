use crate::core::BridgeError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(std::time::Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: std::time::Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: std::time::Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

/// Configuration for the transport's automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: std::time::Duration::from_millis(200),
                factor: 2.0,
                max: std::time::Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl Backoff {
    fn delay_for(&self, attempt: u32) -> std::time::Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let mut delay = base.as_secs_f64() * factor.powi(attempt as i32);
                delay = delay.min(max.as_secs_f64());
                if *jitter {
                    delay *= jitter_factor();
                }
                std::time::Duration::from_secs_f64(delay)
            }
        }
    }
}

/// Multiplier in `[0.5, 1.5)` derived from the clock's sub-second noise.
fn jitter_factor() -> f64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    0.5 + f64::from(nanos % 1_000) / 1_000.0
}

impl super::BridgeClient {
    /// Send a request, retrying per the client retry policy.
    ///
    /// A request whose body cannot be cloned is sent exactly once.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        override_cfg: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, BridgeError> {
        let cfg = override_cfg.unwrap_or_else(|| self.retry_config());

        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            let this_try = match req.try_clone() {
                Some(r) => r,
                None => return Ok(req.send().await?),
            };

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !cfg.retry_on_status.contains(&status) || attempt >= cfg.max_retries {
                        return Ok(resp);
                    }
                }
                Err(e) => {
                    let transient = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if !transient || attempt >= cfg.max_retries {
                        return Err(e.into());
                    }
                }
            }

            tokio::time::sleep(cfg.backoff.delay_for(attempt)).await;
            attempt += 1;
        }
    }
}
