//! Virtual tour page: an opaque 3D viewer plus a two-state mode switch that
//! decides which side panel sits next to it.

use crate::api::CatalogApi;
use crate::contact::{ContactModal, ModalSlot};
use crate::navigation::Navigation;
use crate::notify::NotificationManager;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const TOUR_PROPERTY_NAME: &str = "Virtual Tour Properti";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourMode {
    #[default]
    Explore,
    Inspect,
}

impl TourMode {
    /// Value handed to the embedded viewer
    pub fn as_str(&self) -> &'static str {
        match self {
            TourMode::Explore => "explore",
            TourMode::Inspect => "inspect",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TourMode::Explore => "Mode: Eksplorasi Virtual Tour",
            TourMode::Inspect => "Mode: Inspect Rumah",
        }
    }
}

impl fmt::Display for TourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side panel shown while inspecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

static INSPECT_PANEL: InfoPanel = InfoPanel {
    title: "Mode Inspect Rumah",
    tips: &[
        "Klik pada objek untuk melihat detail",
        "Gunakan mouse untuk zoom in/out",
        "Lihat dimensi dan spesifikasi ruangan",
    ],
};

pub struct VirtualTourPage {
    api: Arc<dyn CatalogApi>,
    notifications: NotificationManager,
    close_delay: Duration,
    mode: TourMode,
    contact: ModalSlot,
}

impl VirtualTourPage {
    pub fn new(api: Arc<dyn CatalogApi>, notifications: NotificationManager, close_delay: Duration) -> Self {
        Self {
            api,
            notifications,
            close_delay,
            mode: TourMode::default(),
            contact: ModalSlot::default(),
        }
    }

    pub fn mode(&self) -> TourMode {
        self.mode
    }

    pub fn explore(&mut self) {
        self.mode = TourMode::Explore;
    }

    pub fn inspect(&mut self) {
        self.mode = TourMode::Inspect;
    }

    pub fn info_panel(&self) -> Option<&'static InfoPanel> {
        match self.mode {
            TourMode::Inspect => Some(&INSPECT_PANEL),
            TourMode::Explore => None,
        }
    }

    /// Jump to the layout designer; the tour keeps no state about it
    pub fn auto_layout(&self) -> Navigation {
        Navigation::designer()
    }

    pub fn back_home(&self) -> Navigation {
        Navigation::Home
    }

    pub fn contact_agent(&mut self) -> &mut ContactModal {
        let modal = ContactModal::new(
            Arc::clone(&self.api),
            self.notifications.clone(),
            TOUR_PROPERTY_NAME,
            self.close_delay,
        );
        self.contact.open(modal)
    }

    pub fn contact_modal(&mut self) -> Option<&mut ContactModal> {
        self.contact.get()
    }

    pub fn close_contact(&mut self) {
        self.contact.close();
    }
}
