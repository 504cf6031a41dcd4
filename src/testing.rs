//! Scripted fakes shared by the page tests

use crate::api::{CatalogApi, LayoutScope};
use crate::error::{Result, StorefrontError};
use crate::models::{ApiEnvelope, ContactPayload, HouseType, Layout, SocialMediaLink};
use crate::notify::{next_notification_id, NotificationId, NotificationKind, Notifier};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

type Reply<T> = Result<ApiEnvelope<T>>;

fn pop<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Reply<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(StorefrontError::Transport("no scripted response".to_string())))
}

pub fn success<T>(data: T) -> Reply<T> {
    Ok(ApiEnvelope {
        success: Some(true),
        status: None,
        data: Some(data),
        message: None,
    })
}

pub fn status_success<T>(data: T) -> Reply<T> {
    Ok(ApiEnvelope {
        success: None,
        status: Some("success".to_string()),
        data: Some(data),
        message: None,
    })
}

pub fn failure<T>(message: &str) -> Reply<T> {
    Ok(ApiEnvelope {
        success: Some(false),
        status: Some("error".to_string()),
        data: None,
        message: Some(message.to_string()),
    })
}

pub fn transport_error<T>() -> Reply<T> {
    Err(StorefrontError::Transport("connection refused".to_string()))
}

pub fn layout(id: i64, name: Option<&str>, width: Option<f64>, length: Option<f64>) -> Layout {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "room_width": width,
        "room_length": length,
        "is_public": true,
    }))
    .unwrap()
}

pub fn house(id: i64, name: &str, price: f64) -> HouseType {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "price_start": price,
        "floors": 2,
        "is_active": 1,
    }))
    .unwrap()
}

/// Answers each call from a queue and records what it was asked
#[derive(Default)]
pub struct ScriptedApi {
    pub contact_replies: Mutex<VecDeque<Reply<Value>>>,
    pub layout_replies: Mutex<VecDeque<Reply<Vec<Layout>>>>,
    pub delete_replies: Mutex<VecDeque<Reply<Value>>>,
    pub toggle_replies: Mutex<VecDeque<Reply<Value>>>,
    pub social_replies: Mutex<VecDeque<Reply<Vec<SocialMediaLink>>>>,
    pub house_replies: Mutex<VecDeque<Reply<Vec<HouseType>>>>,
    pub single_house_replies: Mutex<VecDeque<Reply<HouseType>>>,

    pub contact_calls: Mutex<Vec<ContactPayload>>,
    pub layout_calls: Mutex<Vec<LayoutScope>>,
    pub delete_calls: Mutex<Vec<i64>>,
    pub toggle_calls: Mutex<Vec<i64>>,
    pub house_calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn push_contact(&self, reply: Reply<Value>) {
        self.contact_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_layouts(&self, reply: Reply<Vec<Layout>>) {
        self.layout_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_delete(&self, reply: Reply<Value>) {
        self.delete_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_toggle(&self, reply: Reply<Value>) {
        self.toggle_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_social(&self, reply: Reply<Vec<SocialMediaLink>>) {
        self.social_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_houses(&self, reply: Reply<Vec<HouseType>>) {
        self.house_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_house(&self, reply: Reply<HouseType>) {
        self.single_house_replies.lock().unwrap().push_back(reply);
    }

    pub fn contact_count(&self) -> usize {
        self.contact_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogApi for ScriptedApi {
    async fn submit_contact(&self, payload: &ContactPayload) -> Reply<Value> {
        self.contact_calls.lock().unwrap().push(payload.clone());
        pop(&self.contact_replies)
    }

    async fn list_layouts(&self, scope: LayoutScope) -> Reply<Vec<Layout>> {
        self.layout_calls.lock().unwrap().push(scope);
        pop(&self.layout_replies)
    }

    async fn delete_layout(&self, id: i64) -> Reply<Value> {
        self.delete_calls.lock().unwrap().push(id);
        pop(&self.delete_replies)
    }

    async fn toggle_layout_public(&self, id: i64) -> Reply<Value> {
        self.toggle_calls.lock().unwrap().push(id);
        pop(&self.toggle_replies)
    }

    async fn active_social_links(&self) -> Reply<Vec<SocialMediaLink>> {
        pop(&self.social_replies)
    }

    async fn house_types(&self, include_inactive: bool) -> Reply<Vec<HouseType>> {
        self.house_calls
            .lock()
            .unwrap()
            .push(format!("all(include_inactive={})", include_inactive));
        pop(&self.house_replies)
    }

    async fn house_type(&self, id: i64) -> Reply<HouseType> {
        self.house_calls.lock().unwrap().push(format!("one({})", id));
        pop(&self.single_house_replies)
    }

    async fn house_types_by_category(&self, category: &str) -> Reply<Vec<HouseType>> {
        self.house_calls
            .lock()
            .unwrap()
            .push(format!("category({})", category));
        pop(&self.house_replies)
    }
}

/// Keeps every notification and answers confirmations with a fixed reply
pub struct RecordingNotifier {
    pub answer: bool,
    pub seen: Mutex<Vec<(NotificationKind, String)>>,
    pub confirms: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            seen: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
        }
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.seen.lock().unwrap().iter().map(|(k, _)| *k).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) -> NotificationId {
        self.seen.lock().unwrap().push((kind, message.to_string()));
        next_notification_id()
    }

    fn confirm(&self, _title: &str, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.answer
    }
}
