use uuid::Uuid;

use crate::core::time::now_utc;
use crate::fixtures;
use crate::models::types::NotificationKind;
use crate::models::Notification;
use crate::service::errors::ServiceError;
use crate::service::MockService;
use crate::store::keys;

/// A notification before the service assigns it an id and timestamp.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub title: String,
    pub title_hi: String,
    pub title_mar: String,
    pub message: String,
    pub message_hi: String,
    pub message_mar: String,
    pub kind: NotificationKind,
    pub action_url: Option<String>,
}

impl MockService {
    pub async fn get_notifications(&self) -> Result<Vec<Notification>, ServiceError> {
        self.gate().await?;
        self.collection(keys::NOTIFICATIONS, || Ok(fixtures::default_notifications())).await
    }

    /// Marks one notification read. Idempotent; unknown ids resolve without
    /// error and without a write.
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ServiceError> {
        self.gate().await?;
        let mut notifications =
            self.collection(keys::NOTIFICATIONS, || Ok(fixtures::default_notifications())).await?;
        let Some(notification) =
            notifications.iter_mut().find(|notification| notification.id == id)
        else {
            return Ok(());
        };
        if notification.read {
            return Ok(());
        }

        notification.read = true;
        self.persist(keys::NOTIFICATIONS, &notifications).await
    }

    /// Prepends a new unread notification and returns its generated id.
    pub async fn add_notification(&self, draft: NotificationDraft) -> Result<String, ServiceError> {
        self.gate().await?;
        let mut notifications =
            self.collection(keys::NOTIFICATIONS, || Ok(fixtures::default_notifications())).await?;

        let notification = Notification {
            id: format!("notif-{}", Uuid::new_v4()),
            title: draft.title,
            title_hi: draft.title_hi,
            title_mar: draft.title_mar,
            message: draft.message,
            message_hi: draft.message_hi,
            message_mar: draft.message_mar,
            kind: draft.kind,
            timestamp: now_utc(),
            read: false,
            action_url: draft.action_url,
        };
        let id = notification.id.clone();
        notifications.insert(0, notification);
        self.persist(keys::NOTIFICATIONS, &notifications).await?;
        Ok(id)
    }

    /// Unread count for the UI badge.
    pub async fn unread_notifications(&self) -> Result<usize, ServiceError> {
        let notifications = self.get_notifications().await?;
        Ok(notifications.iter().filter(|notification| !notification.read).count())
    }
}
