use redis::AsyncCommands;

const KEY_PREFIX: &str = "revoked";

/// Redis-backed store of revoked token identifiers. Entries carry a TTL equal
/// to the token's remaining lifetime, so they expire naturally once the token
/// itself would no longer validate.
#[derive(Clone)]
pub struct RevocationStore {
    client: redis::Client,
}

impl RevocationStore {
    pub fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        Ok(Self {
            client: redis::Client::open(redis_url)?,
        })
    }

    /// Record a token's issued-at as revoked for `ttl_seconds`. A token that
    /// is already past its expiry needs no record at all.
    pub async fn revoke(&self, issued_at: i64, ttl_seconds: i64) -> Result<(), redis::RedisError> {
        if ttl_seconds <= 0 {
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn
            .set_ex(
                format!("{}:{}", KEY_PREFIX, issued_at),
                1,
                ttl_seconds as u64,
            )
            .await?;
        Ok(())
    }

    /// An unreachable store is treated as "not revoked": availability wins
    /// over strictness here, the degradation is only logged.
    pub async fn is_revoked(&self, issued_at: i64) -> bool {
        match self.check(issued_at).await {
            Ok(revoked) => revoked,
            Err(e) => {
                tracing::warn!(
                    "Revocation store unreachable, treating token as not revoked: {}",
                    e
                );
                false
            }
        }
    }

    async fn check(&self, issued_at: i64) -> Result<bool, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.exists(format!("{}:{}", KEY_PREFIX, issued_at)).await
    }
}
