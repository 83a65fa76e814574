use crate::fixtures;
use crate::models::Account;
use crate::service::errors::ServiceError;
use crate::service::MockService;
use crate::store::keys;

impl MockService {
    /// Matches a demo credential against the bundled account fixture. Goes
    /// through the same offline/latency/failure gate as every other remote
    /// call; a wrong credential is a successful `None`, not a failure.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Account>, ServiceError> {
        self.gate().await?;
        let accounts = fixtures::accounts().map_err(|source| ServiceError::Corrupt {
            key: self.key("accounts"),
            source,
        })?;
        Ok(accounts
            .into_iter()
            .find(|account| account.username == username && account.password == password))
    }

    // Session accessors are local reads and deliberately skip the gate: the
    // client must be able to restore a session while offline.

    pub async fn remember_session(&self, account: &Account) -> Result<(), ServiceError> {
        let key = self.key(keys::USER);
        let raw = serde_json::to_string(account)
            .map_err(|source| ServiceError::Corrupt { key: key.clone(), source })?;
        self.store.set(&key, &raw).await?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<Option<Account>, ServiceError> {
        let key = self.key(keys::USER);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(account) => Ok(Some(account)),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding unreadable saved session");
                self.store.remove(&key).await?;
                Ok(None)
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ServiceError> {
        let key = self.key(keys::USER);
        self.store.remove(&key).await?;
        Ok(())
    }
}
