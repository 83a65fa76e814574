use crate::fixtures;
use crate::models::types::LiveClassStatus;
use crate::models::LiveClass;
use crate::service::errors::ServiceError;
use crate::service::MockService;
use crate::store::keys;

impl MockService {
    pub async fn get_live_classes(&self) -> Result<Vec<LiveClass>, ServiceError> {
        self.gate().await?;
        self.collection(keys::LIVE_CLASSES, || Ok(fixtures::default_live_classes())).await
    }

    /// Adds a participant. Joining a scheduled class moves it live; a status
    /// never reverts here, so joining a class that is already live (or ended)
    /// only bumps the participant count.
    pub async fn join_live_class(&self, id: &str) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut classes =
            self.collection(keys::LIVE_CLASSES, || Ok(fixtures::default_live_classes())).await?;
        let Some(class) = classes.iter_mut().find(|class| class.id == id) else {
            return Ok(());
        };

        class.participants += 1;
        if class.status == LiveClassStatus::Scheduled {
            class.status = LiveClassStatus::Live;
        }
        self.persist(keys::LIVE_CLASSES, &classes).await
    }
}
