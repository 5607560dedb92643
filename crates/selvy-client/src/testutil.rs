//! In-memory remote store test double
//!
//! Behaves like the real collaborator: remote-assigned monotonic ids that
//! are never reused, nested image lists in upload order, and per-operation
//! failure switches plus call counters for asserting that invalid input
//! never reaches the store.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use selvy_core::{Image, ImageFile, ImageId, Pod, PodFields, PodId};
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::store::{RemoteStore, StoreError};

/// Build a pod fixture
pub fn seed_pod(id: i64, name: &str, pod_type: &str) -> Pod {
    Pod {
        id: PodId(id),
        name: name.to_string(),
        pod_type: pod_type.to_string(),
        description: None,
        planting_date: NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
        care_note: None,
        images: Vec::new(),
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    pods: Mutex<Vec<Pod>>,
    next_pod_id: AtomicI64,
    next_image_id: AtomicI64,

    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fail_upload: AtomicBool,

    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,

    hold_uploads: Mutex<Option<Arc<Notify>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pods(pods: Vec<Pod>) -> Self {
        let max_pod = pods.iter().map(|p| p.id.0).max().unwrap_or(0);
        let max_image = pods
            .iter()
            .flat_map(|p| &p.images)
            .map(|i| i.id.0)
            .max()
            .unwrap_or(0);
        let store = Self::new();
        store.next_pod_id.store(max_pod, Ordering::SeqCst);
        store.next_image_id.store(max_image, Ordering::SeqCst);
        *store.pods.lock().unwrap() = pods;
        store
    }

    /// Make uploads park until the returned gate is notified
    pub fn hold_uploads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.hold_uploads.lock().unwrap() = Some(gate.clone());
        gate
    }

    fn rejected() -> StoreError {
        StoreError::Status { code: 500 }
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn list_pods(&self) -> Result<Vec<Pod>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        Ok(self.pods.lock().unwrap().clone())
    }

    async fn create_pod(
        &self,
        fields: PodFields,
        care_note: Option<String>,
        image: Option<ImageFile>,
    ) -> Result<Pod, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let id = PodId(self.next_pod_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut pod = Pod {
            id,
            name: fields.name,
            pod_type: fields.type_value,
            description: fields.description,
            planting_date: fields.planting_date,
            care_note,
            images: Vec::new(),
        };
        if let Some(file) = image {
            let image_id = self.next_image_id.fetch_add(1, Ordering::SeqCst) + 1;
            pod.images.push(Image {
                id: ImageId(image_id),
                filename: format!("{}_{}", id, file.filename),
                description: None,
                upload_time: Utc::now(),
            });
        }
        self.pods.lock().unwrap().push(pod.clone());
        Ok(pod)
    }

    async fn update_pod(&self, id: PodId, fields: PodFields) -> Result<Pod, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let mut pods = self.pods.lock().unwrap();
        let pod = pods
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        pod.name = fields.name;
        pod.pod_type = fields.type_value;
        pod.description = fields.description;
        pod.planting_date = fields.planting_date;
        Ok(pod.clone())
    }

    async fn delete_pod(&self, id: PodId) -> Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let mut pods = self.pods.lock().unwrap();
        let before = pods.len();
        pods.retain(|p| p.id != id);
        if pods.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn upload_image(
        &self,
        id: PodId,
        file: ImageFile,
        description: Option<String>,
    ) -> Result<Image, StoreError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.hold_uploads.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let image_id = self.next_image_id.fetch_add(1, Ordering::SeqCst) + 1;
        let image = Image {
            id: ImageId(image_id),
            filename: format!("{}_{}", id, file.filename),
            description,
            upload_time: Utc::now(),
        };

        let mut pods = self.pods.lock().unwrap();
        let pod = pods
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        pod.images.push(image.clone());
        Ok(image)
    }
}
