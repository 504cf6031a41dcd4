//! Layout gallery: public/all scope, free-text search, grid/list toggle and
//! owner actions on saved layouts.

use crate::api::{CatalogApi, LayoutScope};
use crate::fetcher::{Fallback, RemoteList};
use crate::models::Layout;
use crate::navigation::Navigation;
use crate::notify::NotificationManager;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{error, info};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Everything a renderer needs for one gallery card
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCard {
    pub id: i64,
    pub title: String,
    pub dimensions: String,
    pub furniture_count: usize,
    pub created_on: Option<String>,
    /// None means "show the placeholder"
    pub thumbnail_url: Option<String>,
    pub is_public: bool,
    pub view: Navigation,
    pub clone: Navigation,
}

impl From<&Layout> for LayoutCard {
    fn from(layout: &Layout) -> Self {
        LayoutCard {
            id: layout.id,
            title: display_name(layout),
            dimensions: dimensions_label(layout),
            furniture_count: layout.furniture.as_ref().map_or(0, Vec::len),
            created_on: layout.created_at.as_deref().and_then(format_created_date),
            thumbnail_url: layout.thumbnail_url.clone().filter(|url| !url.is_empty()),
            is_public: layout.is_public,
            view: Navigation::view_layout(layout.id),
            clone: Navigation::clone_layout(layout.id),
        }
    }
}

pub fn display_name(layout: &Layout) -> String {
    match layout.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Layout #{}", layout.id),
    }
}

/// `{width}m × {length}m`, with missing or zero sides shown as 0
pub fn dimensions_label(layout: &Layout) -> String {
    let side = |v: Option<f64>| format_number(v.filter(|n| *n != 0.0).unwrap_or(0.0));
    format!("{}m × {}m", side(layout.room_width), side(layout.room_length))
}

/// Stringifies a number the way the browser does: `3.0` is `"3"`
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Accepts the backend's RFC 2822 timestamps as well as ISO 8601 and plain
/// SQL datetimes; renders `d/m/YYYY`
pub fn format_created_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%-d/%-m/%Y").to_string())
}

/// Case-insensitive match on the name, plain substring match on the room
/// sides. An empty query keeps everything.
pub fn filter_layouts(layouts: &[Layout], query: &str) -> Vec<Layout> {
    if query.is_empty() {
        return layouts.to_vec();
    }
    let lowered = query.to_lowercase();
    layouts
        .iter()
        .filter(|layout| {
            layout
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&lowered))
                || layout
                    .room_width
                    .is_some_and(|w| format_number(w).contains(query))
                || layout
                    .room_length
                    .is_some_and(|l| format_number(l).contains(query))
        })
        .cloned()
        .collect()
}

pub struct GalleryPage {
    api: Arc<dyn CatalogApi>,
    notifications: NotificationManager,
    layouts: RemoteList<Layout>,
    scope: LayoutScope,
    search: String,
    view_mode: ViewMode,
}

impl GalleryPage {
    pub fn new(api: Arc<dyn CatalogApi>, notifications: NotificationManager) -> Self {
        Self {
            api,
            notifications,
            layouts: RemoteList::new("Gallery", Fallback::Empty),
            scope: LayoutScope::default(),
            search: String::new(),
            view_mode: ViewMode::default(),
        }
    }

    /// Initial fetch for the current scope
    pub async fn mount(&self) -> bool {
        self.refresh().await
    }

    /// Stops any in-flight fetch from landing after the page is gone
    pub async fn unmount(&self) {
        self.layouts.invalidate().await;
    }

    pub async fn refresh(&self) -> bool {
        self.layouts.load(self.api.list_layouts(self.scope)).await
    }

    pub fn scope(&self) -> LayoutScope {
        self.scope
    }

    /// Switches between public and all layouts; re-fetches only on change
    pub async fn set_scope(&mut self, scope: LayoutScope) -> bool {
        if self.scope == scope {
            return false;
        }
        self.scope = scope;
        self.refresh().await
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn layout_list(&self) -> &RemoteList<Layout> {
        &self.layouts
    }

    pub async fn is_loading(&self) -> bool {
        self.layouts.is_loading().await
    }

    /// Layouts that pass the current search, recomputed every call
    pub async fn visible_layouts(&self) -> Vec<Layout> {
        filter_layouts(&self.layouts.items().await, &self.search)
    }

    pub async fn cards(&self) -> Vec<LayoutCard> {
        self.visible_layouts().await.iter().map(LayoutCard::from).collect()
    }

    /// True when loading is done and nothing matches
    pub async fn shows_empty_state(&self) -> bool {
        !self.is_loading().await && self.visible_layouts().await.is_empty()
    }

    /// Deletes a layout after confirmation, then re-fetches the whole list
    pub async fn delete_layout(&self, id: i64) -> bool {
        if !self
            .notifications
            .ask("Delete layout", "Are you sure you want to delete this layout?")
        {
            return false;
        }

        match self.api.delete_layout(id).await {
            Ok(envelope) if envelope.success_flag() => {
                info!("[Gallery] Deleted layout {}", id);
                self.notifications.success("Layout deleted successfully!");
                self.refresh().await;
                true
            }
            Ok(envelope) => {
                let reason = envelope.message.unwrap_or_default();
                error!("[Gallery] Failed to delete layout {}: {}", id, reason);
                self.notifications
                    .error(&format!("Failed to delete layout: {}", reason));
                false
            }
            Err(e) => {
                error!("[Gallery] Error deleting layout {}: {}", id, e);
                self.notifications.error("Error deleting layout");
                false
            }
        }
    }

    /// Flips a layout between public and private, then re-fetches
    pub async fn toggle_public(&self, id: i64, currently_public: bool) -> bool {
        match self.api.toggle_layout_public(id).await {
            Ok(envelope) if envelope.success_flag() => {
                let now = if currently_public { "private" } else { "public" };
                info!("[Gallery] Layout {} is now {}", id, now);
                self.notifications
                    .success(&format!("Layout is now {}!", now));
                self.refresh().await;
                true
            }
            Ok(envelope) => {
                let reason = envelope.message.unwrap_or_default();
                error!("[Gallery] Failed to toggle layout {}: {}", id, reason);
                self.notifications
                    .error(&format!("Failed to toggle visibility: {}", reason));
                false
            }
            Err(e) => {
                error!("[Gallery] Error toggling layout {}: {}", id, e);
                self.notifications.error("Error toggling visibility");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use crate::testing::{failure, layout, success, transport_error, RecordingNotifier, ScriptedApi};
    use serde_json::Value;

    fn page(api: &Arc<ScriptedApi>) -> GalleryPage {
        GalleryPage::new(api.clone(), NotificationManager::default())
    }

    #[test]
    fn search_matches_room_width() {
        let layouts = vec![
            layout(1, Some("Sofa Set"), Some(3.0), None),
            layout(2, Some("Table"), Some(5.0), None),
        ];
        let filtered = filter_layouts(&layouts, "3");
        assert_eq!(filtered, vec![layouts[0].clone()]);
    }

    #[test]
    fn search_is_case_insensitive_on_name_only() {
        let layouts = vec![
            layout(1, Some("Living Room"), Some(4.5), Some(6.0)),
            layout(2, None, Some(2.0), Some(3.0)),
        ];
        assert_eq!(filter_layouts(&layouts, "LIVING").len(), 1);
        assert_eq!(filter_layouts(&layouts, "4.5").len(), 1);
        assert_eq!(filter_layouts(&layouts, "6")[0].id, 1);
        assert_eq!(filter_layouts(&layouts, "").len(), 2);
        assert!(filter_layouts(&layouts, "kitchen").is_empty());
    }

    #[test]
    fn numbers_stringify_like_the_browser() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(-2.0), "-2");
    }

    #[test]
    fn card_fills_in_defaults() {
        let card = LayoutCard::from(&layout(9, None, None, Some(4.0)));
        assert_eq!(card.title, "Layout #9");
        assert_eq!(card.dimensions, "0m × 4m");
        assert_eq!(card.furniture_count, 0);
        assert_eq!(card.created_on, None);
        assert_eq!(card.view.path(), "/app?view=9");
        assert_eq!(card.clone.path(), "/app?clone=9");
    }

    #[test]
    fn created_dates_from_backend_formats() {
        assert_eq!(
            format_created_date("Tue, 14 May 2024 09:30:00 GMT").as_deref(),
            Some("14/5/2024")
        );
        assert_eq!(
            format_created_date("2024-01-05T10:00:00+07:00").as_deref(),
            Some("5/1/2024")
        );
        assert_eq!(
            format_created_date("2023-12-31 23:59:59").as_deref(),
            Some("31/12/2023")
        );
        assert_eq!(format_created_date("yesterday"), None);
    }

    #[tokio::test]
    async fn mount_loads_public_layouts() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![layout(1, Some("A"), Some(3.0), Some(3.0))]));
        let gallery = page(&api);

        assert!(gallery.mount().await);
        assert_eq!(api.layout_calls.lock().unwrap().as_slice(), &[LayoutScope::Public]);
        assert_eq!(gallery.cards().await.len(), 1);
        assert!(!gallery.shows_empty_state().await);
    }

    #[tokio::test]
    async fn scope_change_refetches_only_when_different() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![]));
        api.push_layouts(success(vec![layout(1, None, None, None), layout(2, None, None, None)]));
        let mut gallery = page(&api);
        gallery.mount().await;

        assert!(!gallery.set_scope(LayoutScope::Public).await);
        assert!(gallery.set_scope(LayoutScope::All).await);
        assert_eq!(
            api.layout_calls.lock().unwrap().as_slice(),
            &[LayoutScope::Public, LayoutScope::All]
        );
        assert_eq!(gallery.visible_layouts().await.len(), 2);
    }

    #[tokio::test]
    async fn failures_show_an_empty_gallery() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![layout(1, None, None, None)]));
        api.push_layouts(failure("database unavailable"));
        api.push_layouts(transport_error());
        let gallery = page(&api);

        gallery.mount().await;
        assert_eq!(gallery.visible_layouts().await.len(), 1);
        gallery.refresh().await;
        assert!(gallery.shows_empty_state().await);
        gallery.refresh().await;
        assert!(gallery.visible_layouts().await.is_empty());
    }

    #[tokio::test]
    async fn view_mode_does_not_touch_data() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![layout(1, None, None, None)]));
        let mut gallery = page(&api);
        gallery.mount().await;

        assert_eq!(gallery.view_mode(), ViewMode::Grid);
        gallery.set_view_mode(ViewMode::List);
        assert_eq!(gallery.view_mode(), ViewMode::List);
        assert_eq!(gallery.visible_layouts().await.len(), 1);
        assert_eq!(api.layout_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_auto_confirmed_and_refetches() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![layout(1, None, None, None)]));
        api.push_delete(success(Value::Null));
        api.push_layouts(success(vec![]));
        let gallery = page(&api);
        gallery.mount().await;

        assert!(gallery.delete_layout(1).await);
        assert_eq!(api.delete_calls.lock().unwrap().as_slice(), &[1]);
        assert_eq!(api.layout_calls.lock().unwrap().len(), 2);
        assert!(gallery.visible_layouts().await.is_empty());
    }

    #[tokio::test]
    async fn declined_delete_never_calls_backend() {
        let api = Arc::new(ScriptedApi::default());
        let notifier = Arc::new(RecordingNotifier::new(false));
        let gallery = GalleryPage::new(api.clone(), NotificationManager::new(notifier.clone()));

        assert!(!gallery.delete_layout(4).await);
        assert!(api.delete_calls.lock().unwrap().is_empty());
        assert_eq!(notifier.confirms.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_delete_keeps_list_and_reports() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![layout(1, None, None, None)]));
        api.push_delete(failure("Layout not found"));
        let notifier = Arc::new(RecordingNotifier::new(true));
        let gallery = GalleryPage::new(api.clone(), NotificationManager::new(notifier.clone()));
        gallery.mount().await;

        assert!(!gallery.delete_layout(1).await);
        assert_eq!(api.layout_calls.lock().unwrap().len(), 1);
        assert_eq!(gallery.visible_layouts().await.len(), 1);
        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen[0], (NotificationKind::Error, "Failed to delete layout: Layout not found".to_string()));
    }

    #[tokio::test]
    async fn toggle_public_reports_new_state() {
        let api = Arc::new(ScriptedApi::default());
        api.push_toggle(success(Value::Null));
        api.push_layouts(success(vec![]));
        api.push_toggle(transport_error());
        let notifier = Arc::new(RecordingNotifier::new(true));
        let gallery = GalleryPage::new(api.clone(), NotificationManager::new(notifier.clone()));

        assert!(gallery.toggle_public(5, true).await);
        assert!(!gallery.toggle_public(5, false).await);
        assert_eq!(api.toggle_calls.lock().unwrap().as_slice(), &[5, 5]);
        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen[0].1, "Layout is now private!");
        assert_eq!(seen[1], (NotificationKind::Error, "Error toggling visibility".to_string()));
    }

    #[tokio::test]
    async fn unmount_discards_late_response() {
        let api = Arc::new(ScriptedApi::default());
        let gallery = page(&api);
        let ticket = gallery.layout_list().begin().await;
        gallery.unmount().await;

        let applied = gallery
            .layout_list()
            .apply(ticket, success(vec![layout(1, None, None, None)]))
            .await;
        assert!(!applied);
        assert!(gallery.visible_layouts().await.is_empty());
    }
}
