//! Wires the HTTP client, the notifier and every page together from one
//! [`StorefrontConfig`].

use crate::api::{CatalogApi, HttpCatalogApi};
use crate::config::{load_config, StorefrontConfig};
use crate::contact::ContactModal;
use crate::error::Result;
use crate::footer::Footer;
use crate::gallery::GalleryPage;
use crate::house_types::HouseTypesPage;
use crate::notify::NotificationManager;
use crate::tour::VirtualTourPage;
use futures_util::future::join3;
use log::info;
use std::sync::Arc;

/// Which mounts applied their result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountReport {
    pub gallery: bool,
    pub house_types: bool,
    pub footer: bool,
}

pub struct Storefront {
    config: StorefrontConfig,
    api: Arc<dyn CatalogApi>,
    notifications: NotificationManager,
    gallery: GalleryPage,
    house_types: HouseTypesPage,
    footer: Footer,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let api = HttpCatalogApi::new(&config)?;
        info!("[Storefront] Using API at {}", api.base_url());
        let notifications = NotificationManager::from_mode(config.notifications);
        Ok(Self::with_api(config, Arc::new(api), notifications))
    }

    /// Loads the saved config (plus env override) and builds from it
    pub fn from_config_file() -> Result<Self> {
        Self::new(load_config()?)
    }

    pub fn with_api(
        config: StorefrontConfig,
        api: Arc<dyn CatalogApi>,
        notifications: NotificationManager,
    ) -> Self {
        let close_delay = config.close_delay();
        Self {
            gallery: GalleryPage::new(Arc::clone(&api), notifications.clone()),
            house_types: HouseTypesPage::new(Arc::clone(&api), notifications.clone(), close_delay),
            footer: Footer::new(Arc::clone(&api)),
            config,
            api,
            notifications,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    pub fn gallery(&self) -> &GalleryPage {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryPage {
        &mut self.gallery
    }

    pub fn house_types(&self) -> &HouseTypesPage {
        &self.house_types
    }

    pub fn house_types_mut(&mut self) -> &mut HouseTypesPage {
        &mut self.house_types
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    pub fn virtual_tour(&self) -> VirtualTourPage {
        VirtualTourPage::new(
            Arc::clone(&self.api),
            self.notifications.clone(),
            self.config.close_delay(),
        )
    }

    /// A standalone contact form, e.g. for the contact page
    pub fn contact_modal(&self, property_name: &str) -> ContactModal {
        ContactModal::new(
            Arc::clone(&self.api),
            self.notifications.clone(),
            property_name,
            self.config.close_delay(),
        )
    }

    /// Loads the gallery, the house types and the footer at the same time
    pub async fn mount_all(&self) -> MountReport {
        let (gallery, house_types, footer) = join3(
            self.gallery.mount(),
            self.house_types.mount(),
            self.footer.mount(),
        )
        .await;
        MountReport {
            gallery,
            house_types,
            footer,
        }
    }

    pub async fn unmount_all(&self) {
        join3(
            self.gallery.unmount(),
            self.house_types.unmount(),
            self.footer.unmount(),
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::DEFAULT_PROPERTY_NAME;
    use crate::fallback::default_house_types;
    use crate::testing::{layout, status_success, success, transport_error, ScriptedApi};
    use std::time::Duration;

    fn storefront(api: &Arc<ScriptedApi>) -> Storefront {
        let config = StorefrontConfig {
            close_delay_ms: 500,
            ..StorefrontConfig::default()
        };
        Storefront::with_api(config, api.clone(), NotificationManager::default())
    }

    #[tokio::test]
    async fn mount_all_loads_every_section() {
        let api = Arc::new(ScriptedApi::default());
        api.push_layouts(success(vec![layout(1, Some("Living"), Some(4.0), Some(5.0))]));
        api.push_houses(transport_error());
        api.push_social(success(vec![]));
        let shop = storefront(&api);

        let report = shop.mount_all().await;
        assert_eq!(
            report,
            MountReport {
                gallery: true,
                house_types: true,
                footer: true,
            }
        );
        assert_eq!(shop.gallery().visible_layouts().await.len(), 1);
        assert_eq!(shop.house_types().houses().await, default_house_types());
        assert!(shop.footer().shows_empty_state().await);
    }

    #[tokio::test]
    async fn unmount_drops_late_results() {
        let api = Arc::new(ScriptedApi::default());
        api.push_houses(status_success(vec![]));
        let shop = storefront(&api);

        let list = shop.house_types().house_list().clone();
        let ticket = list.begin().await;
        shop.unmount_all().await;
        assert!(!list.apply(ticket, status_success(vec![])).await);
        assert!(!shop.house_types().is_loading().await);
    }

    #[test]
    fn factories_share_configured_delay() {
        let api = Arc::new(ScriptedApi::default());
        let shop = storefront(&api);
        assert_eq!(shop.config().close_delay(), Duration::from_millis(500));
        assert_eq!(shop.contact_modal("").property_name(), DEFAULT_PROPERTY_NAME);
        assert_eq!(shop.virtual_tour().mode(), crate::tour::TourMode::Explore);
    }

    #[test]
    fn builds_http_client_from_config() {
        let config = StorefrontConfig::default().with_api_base_url("http://127.0.0.1:9/");
        let shop = Storefront::new(config);
        assert!(shop.is_ok());
    }
}
