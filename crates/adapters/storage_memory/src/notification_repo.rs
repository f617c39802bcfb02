//! In-memory notification repository.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use hearth_app::ports::NotificationRepository;
use hearth_domain::error::HearthError;
use hearth_domain::id::NotificationId;
use hearth_domain::notification::Notification;

/// Notification repository backed by a mutex-guarded map.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    store: Mutex<HashMap<NotificationId, Notification>>,
}

impl InMemoryNotificationRepository {
    fn store(&self) -> std::sync::MutexGuard<'_, HashMap<NotificationId, Notification>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationRepository for InMemoryNotificationRepository {
    fn create(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Notification, HearthError>> + Send {
        self.store().insert(notification.id, notification.clone());
        async { Ok(notification) }
    }

    fn get_by_id(
        &self,
        id: NotificationId,
    ) -> impl Future<Output = Result<Option<Notification>, HearthError>> + Send {
        let result = self.store().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Notification>, HearthError>> + Send {
        let result: Vec<Notification> = self.store().values().cloned().collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<Notification, HearthError>> + Send {
        self.store().insert(notification.id, notification.clone());
        async { Ok(notification) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_domain::notification::NotificationKind;

    #[tokio::test]
    async fn should_store_and_fetch_notification() {
        let repo = InMemoryNotificationRepository::default();
        let n = Notification::new(NotificationKind::Alert, "Humidity alert", "It's humid.");
        let id = n.id;

        repo.create(n).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Humidity alert");
        assert!(!fetched.read);
    }

    #[tokio::test]
    async fn should_persist_read_flag_on_update() {
        let repo = InMemoryNotificationRepository::default();
        let mut n = Notification::new(NotificationKind::Offer, "Voucher", "20% off.");
        let id = n.id;
        repo.create(n.clone()).await.unwrap();

        n.mark_read();
        repo.update(n).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(fetched.read);
    }
}
