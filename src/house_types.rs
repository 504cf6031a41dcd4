//! House type catalog page

use crate::api::CatalogApi;
use crate::contact::{ContactModal, ModalSlot};
use crate::fallback::default_house_types;
use crate::fetcher::{Fallback, RemoteList};
use crate::models::HouseType;
use crate::navigation::Navigation;
use crate::notify::NotificationManager;
use log::{error, warn};
use std::sync::Arc;
use std::time::Duration;

/// Short rupiah price: `Rp 850jt` below a billion, `Rp 1.2M` from a billion up
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price == 0.0 {
        return "Hubungi Kami".to_string();
    }
    // Halves round up, not to even
    let in_million = price / 1_000_000.0;
    if in_million >= 1000.0 {
        let billions = (in_million / 100.0).round() / 10.0;
        format!("Rp {:.1}M", billions)
    } else {
        format!("Rp {:.0}jt", in_million.round())
    }
}

/// Render-ready view of one house type
#[derive(Debug, Clone, PartialEq)]
pub struct HouseCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub floors_badge: String,
    pub land_size: String,
    pub building_size: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub features: Vec<String>,
    pub price: String,
}

impl From<&HouseType> for HouseCard {
    fn from(house: &HouseType) -> Self {
        let or_dash = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("-")
                .to_string()
        };
        HouseCard {
            id: house.id,
            name: house.name.clone(),
            description: house.description.clone(),
            floors_badge: format!("{} Lantai", house.floors),
            land_size: or_dash(&house.land_size),
            building_size: or_dash(&house.building_size),
            bedrooms: house.bedrooms,
            bathrooms: house.bathrooms,
            features: house.features.clone(),
            price: format_price(house.price_start),
        }
    }
}

pub struct HouseTypesPage {
    api: Arc<dyn CatalogApi>,
    notifications: NotificationManager,
    close_delay: Duration,
    houses: RemoteList<HouseType>,
    selected: Option<HouseType>,
    contact: ModalSlot,
    contact_open: bool,
}

impl HouseTypesPage {
    pub fn new(api: Arc<dyn CatalogApi>, notifications: NotificationManager, close_delay: Duration) -> Self {
        Self {
            api,
            notifications,
            close_delay,
            houses: RemoteList::new("HouseTypes", Fallback::Static(default_house_types))
                .missing_data_is_failure(),
            selected: None,
            contact: ModalSlot::default(),
            contact_open: false,
        }
    }

    /// Loads active house types; any failure shows the built-in catalog
    pub async fn mount(&self) -> bool {
        self.houses.load(self.api.house_types(false)).await
    }

    pub async fn unmount(&self) {
        self.houses.invalidate().await;
    }

    pub fn house_list(&self) -> &RemoteList<HouseType> {
        &self.houses
    }

    pub async fn houses(&self) -> Vec<HouseType> {
        self.houses.items().await
    }

    pub async fn cards(&self) -> Vec<HouseCard> {
        self.houses.items().await.iter().map(HouseCard::from).collect()
    }

    pub async fn is_loading(&self) -> bool {
        self.houses.is_loading().await
    }

    pub async fn shows_empty_state(&self) -> bool {
        !self.houses.is_loading().await && self.houses.is_empty().await
    }

    pub fn selected(&self) -> Option<&HouseType> {
        self.selected.as_ref()
    }

    pub fn virtual_tour(&mut self, house: &HouseType) -> Navigation {
        self.selected = Some(house.clone());
        Navigation::VirtualTour {
            house_type: Some(house.id),
        }
    }

    pub fn auto_layout(&mut self, house: &HouseType) -> Navigation {
        self.selected = Some(house.clone());
        Navigation::Designer {
            view: None,
            clone: None,
            house_type: Some(house.id),
        }
    }

    /// Opens the contact modal about `house`
    pub fn contact_agent(&mut self, house: &HouseType) -> &mut ContactModal {
        self.selected = Some(house.clone());
        let modal = ContactModal::new(
            Arc::clone(&self.api),
            self.notifications.clone(),
            house.name.clone(),
            self.close_delay,
        );
        self.contact_open = true;
        self.contact.open(modal)
    }

    /// The open modal, if any. When a contact modal has closed since the
    /// last look, its house is deselected.
    pub fn contact_modal(&mut self) -> Option<&mut ContactModal> {
        if self.contact_open && !self.contact.is_open() {
            self.contact_open = false;
            self.selected = None;
        }
        self.contact.get()
    }

    pub fn close_contact(&mut self) {
        if self.contact_open {
            self.contact.close();
            self.contact_open = false;
            self.selected = None;
        }
    }

    /// Single house type detail, or None if it cannot be loaded
    pub async fn fetch_house_type(&self, id: i64) -> Option<HouseType> {
        match self.api.house_type(id).await {
            Ok(envelope) if envelope.is_ok() => envelope.data,
            Ok(envelope) => {
                warn!(
                    "[HouseTypes] House type {} unavailable: {}",
                    id,
                    envelope.message.as_deref().unwrap_or("no message")
                );
                None
            }
            Err(e) => {
                error!("[HouseTypes] Error loading house type {}: {}", id, e);
                None
            }
        }
    }

    /// House types in one category; empty when the request fails
    pub async fn fetch_by_category(&self, category: &str) -> Vec<HouseType> {
        match self.api.house_types_by_category(category).await {
            Ok(envelope) if envelope.is_ok() => envelope.data.unwrap_or_default(),
            Ok(envelope) => {
                warn!(
                    "[HouseTypes] Category {} unavailable: {}",
                    category,
                    envelope.message.as_deref().unwrap_or("no message")
                );
                Vec::new()
            }
            Err(e) => {
                error!("[HouseTypes] Error loading category {}: {}", category, e);
                Vec::new()
            }
        }
    }
}
