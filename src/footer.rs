//! Site footer: fixed link columns, social links from the catalog and the
//! bottom bar.

use crate::api::CatalogApi;
use crate::fetcher::{Fallback, RemoteList};
use crate::models::SocialMediaLink;
use chrono::Datelike;
use std::sync::Arc;

const NO_LINKS_TEXT: &str = "No social media links available";
const APP_VERSION_LABEL: &str = "v2.0.0";

/// Fixed footer links as (label, path)
const QUICK_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Designer", "/app"),
    ("Gallery", "/gallery"),
    ("News", "/news"),
    ("About", "/about"),
];

const SUPPORT_LINKS: [(&str, &str); 3] = [
    ("FAQ", "/faq"),
    ("Ask Question", "/qna"),
    ("Contact Us", "/contact"),
];

pub fn social_icon(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "facebook" => "📘",
        "instagram" => "📷",
        "twitter" => "🐦",
        "linkedin" => "💼",
        "youtube" => "📺",
        "tiktok" => "🎵",
        "whatsapp" => "💬",
        _ => "🔗",
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} FurniLayout. All Rights Reserved.", year)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// One rendered social link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialEntry {
    pub icon: &'static str,
    pub platform: String,
    pub url: String,
}

impl From<&SocialMediaLink> for SocialEntry {
    fn from(link: &SocialMediaLink) -> Self {
        SocialEntry {
            icon: social_icon(&link.platform),
            platform: link.platform.clone(),
            url: link.url.clone(),
        }
    }
}

pub struct Footer {
    api: Arc<dyn CatalogApi>,
    links: RemoteList<SocialMediaLink>,
}

impl Footer {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            links: RemoteList::new("Footer", Fallback::Empty),
        }
    }

    pub async fn mount(&self) -> bool {
        self.links.load(self.api.active_social_links()).await
    }

    pub async fn unmount(&self) {
        self.links.invalidate().await;
    }

    pub fn link_list(&self) -> &RemoteList<SocialMediaLink> {
        &self.links
    }

    pub async fn entries(&self) -> Vec<SocialEntry> {
        self.links.items().await.iter().map(SocialEntry::from).collect()
    }

    pub async fn shows_empty_state(&self) -> bool {
        self.links.is_empty().await
    }

    /// Placeholder for the social column while there are no links
    pub async fn empty_state_text(&self) -> Option<&'static str> {
        if self.links.is_empty().await {
            Some(NO_LINKS_TEXT)
        } else {
            None
        }
    }

    pub fn quick_links(&self) -> &'static [(&'static str, &'static str)] {
        &QUICK_LINKS
    }

    pub fn support_links(&self) -> &'static [(&'static str, &'static str)] {
        &SUPPORT_LINKS
    }

    pub fn version(&self) -> &'static str {
        APP_VERSION_LABEL
    }

    pub fn copyright(&self) -> String {
        copyright_line(current_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{failure, success, transport_error, ScriptedApi};

    fn link(id: i64, platform: &str) -> SocialMediaLink {
        SocialMediaLink {
            id,
            platform: platform.to_string(),
            url: format!("https://{}.com/furnilayout", platform.to_lowercase()),
        }
    }

    #[test]
    fn icons_ignore_case() {
        assert_eq!(social_icon("Instagram"), "📷");
        assert_eq!(social_icon("WHATSAPP"), "💬");
        assert_eq!(social_icon("mastodon"), "🔗");
        assert_eq!(social_icon(""), "🔗");
    }

    #[test]
    fn copyright_mentions_year() {
        assert_eq!(copyright_line(2026), "© 2026 FurniLayout. All Rights Reserved.");
        assert!(current_year() >= 2024);
    }

    #[tokio::test]
    async fn fixed_columns_and_placeholder() {
        let api = Arc::new(ScriptedApi::default());
        api.push_social(success(vec![link(1, "Facebook")]));
        let footer = Footer::new(api.clone());

        assert_eq!(footer.empty_state_text().await, Some("No social media links available"));
        footer.mount().await;
        assert_eq!(footer.empty_state_text().await, None);

        assert_eq!(footer.quick_links().len(), 5);
        assert_eq!(footer.quick_links()[1], ("Designer", "/app"));
        assert_eq!(footer.support_links().last(), Some(&("Contact Us", "/contact")));
        assert_eq!(footer.version(), "v2.0.0");
        assert!(footer.copyright().ends_with("FurniLayout. All Rights Reserved."));
    }

    #[tokio::test]
    async fn mount_lists_links_with_icons() {
        let api = Arc::new(ScriptedApi::default());
        api.push_social(success(vec![link(1, "Facebook"), link(2, "TikTok")]));
        let footer = Footer::new(api.clone());

        assert!(footer.mount().await);
        let entries = footer.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].icon, "📘");
        assert_eq!(entries[1].icon, "🎵");
        assert_eq!(entries[1].url, "https://tiktok.com/furnilayout");
        assert!(!footer.shows_empty_state().await);
    }

    #[tokio::test]
    async fn failures_leave_footer_empty() {
        let api = Arc::new(ScriptedApi::default());
        api.push_social(success(vec![link(1, "Youtube")]));
        api.push_social(failure("Failed to fetch"));
        api.push_social(transport_error());
        let footer = Footer::new(api.clone());

        footer.mount().await;
        assert_eq!(footer.entries().await.len(), 1);
        footer.mount().await;
        assert!(footer.shows_empty_state().await);
        footer.mount().await;
        assert!(footer.shows_empty_state().await);
        assert_eq!(footer.link_list().stats().await.failed_fetches, 2);
    }
}
