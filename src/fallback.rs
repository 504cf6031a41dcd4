//! Static catalog data shown when the API cannot be reached

use crate::models::HouseType;

/// A house type as compiled into the binary
struct FallbackHouseType {
    id: i64,
    name: &'static str,
    description: &'static str,
    price_start: f64,
    type_category: &'static str,
    land_size: &'static str,
    building_size: &'static str,
    bedrooms: u32,
    bathrooms: u32,
    floors: u32,
    carport: u32,
    image_url: &'static str,
    features: &'static [&'static str],
}

/// Default house type catalog, in display order
const DEFAULT_HOUSE_TYPES: [FallbackHouseType; 4] = [
    FallbackHouseType {
        id: 1,
        name: "Rumah Modern",
        description: "Desain kontemporer dengan sentuhan modern. Cocok untuk keluarga muda yang menginginkan gaya hidup praktis dan elegan.",
        price_start: 850_000_000.0,
        type_category: "Modern",
        land_size: "10x15 m",
        building_size: "120 m²",
        bedrooms: 3,
        bathrooms: 2,
        floors: 2,
        carport: 1,
        image_url: "/assets/house-modern.jpg",
        features: &["Smart Home Ready", "Open Space Concept", "Large Windows", "Modern Kitchen", "Private Garden"],
    },
    FallbackHouseType {
        id: 2,
        name: "Rumah Klasik",
        description: "Arsitektur klasik yang timeless dengan detail ornamen yang elegan. Memberikan kesan mewah dan berkelas.",
        price_start: 1_200_000_000.0,
        type_category: "Classic",
        land_size: "12x20 m",
        building_size: "180 m²",
        bedrooms: 4,
        bathrooms: 3,
        floors: 2,
        carport: 2,
        image_url: "/assets/house-classic.jpg",
        features: &["Classic Architecture", "Elegant Details", "Spacious Rooms", "Grand Entrance", "Luxury Finishes"],
    },
    FallbackHouseType {
        id: 3,
        name: "Rumah Contemporary",
        description: "Perpaduan unik antara modern dan minimalis. Desain inovatif dengan material berkualitas tinggi.",
        price_start: 950_000_000.0,
        type_category: "Contemporary",
        land_size: "10x18 m",
        building_size: "140 m²",
        bedrooms: 3,
        bathrooms: 2,
        floors: 2,
        carport: 1,
        image_url: "/assets/house-contemporary.jpg",
        features: &["Unique Design", "High Ceiling", "Natural Lighting", "Premium Materials", "Eco-Friendly"],
    },
    FallbackHouseType {
        id: 4,
        name: "Rumah Industrial",
        description: "Gaya industrial yang trendy dengan ekspos material. Perfect untuk yang suka tampilan bold dan edgy.",
        price_start: 780_000_000.0,
        type_category: "Industrial",
        land_size: "9x15 m",
        building_size: "110 m²",
        bedrooms: 3,
        bathrooms: 2,
        floors: 1,
        carport: 1,
        image_url: "/assets/house-industrial.jpg",
        features: &["Exposed Brick", "Metal Accents", "Open Layout", "Loft Style", "Urban Design"],
    },
];

impl FallbackHouseType {
    fn to_house_type(&self, display_order: u32) -> HouseType {
        HouseType {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            price_start: self.price_start,
            type_category: Some(self.type_category.to_string()),
            land_size: Some(self.land_size.to_string()),
            building_size: Some(self.building_size.to_string()),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            floors: self.floors,
            carport: self.carport,
            image_url: Some(self.image_url.to_string()),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            display_order,
            is_active: true,
        }
    }
}

/// The house types shown when the catalog API fails
pub fn default_house_types() -> Vec<HouseType> {
    DEFAULT_HOUSE_TYPES
        .iter()
        .zip(1..)
        .map(|(house, order)| house.to_house_type(order))
        .collect()
}
