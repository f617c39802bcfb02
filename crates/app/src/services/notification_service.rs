//! Notification service — use-cases for the user's inbox.

use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::id::NotificationId;
use hearth_domain::notification::Notification;

use crate::ports::NotificationRepository;

/// Application service for inbox notifications.
pub struct NotificationService<R> {
    repo: R,
}

impl<R: NotificationRepository> NotificationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, HearthError> {
        let mut notifications = self.repo.get_all().await?;
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    /// Number of unread notifications (the badge count).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn unread_count(&self) -> Result<usize, HearthError> {
        let notifications = self.repo.get_all().await?;
        Ok(notifications.iter().filter(|n| !n.read).count())
    }

    /// Mark one notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] if the notification does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn mark_read(&self, id: NotificationId) -> Result<Notification, HearthError> {
        let mut notification = self.repo.get_by_id(id).await?.ok_or_else(|| {
            HearthError::from(NotFoundError {
                entity: "Notification",
                id: id.to_string(),
            })
        })?;
        notification.mark_read();
        self.repo.update(notification).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use hearth_domain::notification::NotificationKind;

    struct InMemoryNotificationRepo {
        store: Mutex<HashMap<NotificationId, Notification>>,
    }

    impl Default for InMemoryNotificationRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl NotificationRepository for InMemoryNotificationRepo {
        fn create(
            &self,
            notification: Notification,
        ) -> impl Future<Output = Result<Notification, HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(notification.id, notification.clone());
            async { Ok(notification) }
        }

        fn get_by_id(
            &self,
            id: NotificationId,
        ) -> impl Future<Output = Result<Option<Notification>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Notification>, HearthError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Notification> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            notification: Notification,
        ) -> impl Future<Output = Result<Notification, HearthError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(notification.id, notification.clone());
            async { Ok(notification) }
        }
    }

    async fn seeded_service() -> (NotificationService<InMemoryNotificationRepo>, NotificationId) {
        let repo = InMemoryNotificationRepo::default();
        let alert = Notification::new(
            NotificationKind::Alert,
            "Humidity alert",
            "Clothes take longer to dry in this weather.",
        );
        let alert_id = alert.id;
        repo.create(alert).await.unwrap();
        repo.create(Notification::new(
            NotificationKind::Offer,
            "Cleaning voucher",
            "20% off your next service appointment.",
        ))
        .await
        .unwrap();
        (NotificationService::new(repo), alert_id)
    }

    #[tokio::test]
    async fn should_list_all_notifications() {
        let (svc, _) = seeded_service().await;
        let all = svc.list_notifications().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_count_unread_notifications() {
        let (svc, alert_id) = seeded_service().await;
        assert_eq!(svc.unread_count().await.unwrap(), 2);

        svc.mark_read(alert_id).await.unwrap();
        assert_eq!(svc.unread_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_mark_notification_read() {
        let (svc, alert_id) = seeded_service().await;
        let updated = svc.mark_read(alert_id).await.unwrap();
        assert!(updated.read);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_notification() {
        let (svc, _) = seeded_service().await;
        let result = svc.mark_read(NotificationId::new()).await;
        assert!(matches!(result, Err(HearthError::NotFound(_))));
    }
}
