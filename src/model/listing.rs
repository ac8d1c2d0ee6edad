use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    #[default]
    Active,
    UnderContract,
    Sold,
    #[serde(other)]
    Unknown,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sold => "Sold",
            Self::UnderContract => "Under contract",
            Self::Active | Self::Unknown => "For sale",
        }
    }

    pub fn is_for_sale(&self) -> bool {
        !matches!(self, Self::Sold)
    }
}

/// One listing document as served by the agency API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub id: String,
    /// Mongo document id; preferred over `id` when both are present.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub title: String,
    pub address: String,
    #[serde(deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    pub property_type: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub listing_type: Option<String>,
    pub status: ListingStatus,
    #[serde(deserialize_with = "lenient_number")]
    pub total_bedrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub beds: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub total_bathrooms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub baths: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub sqft: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub living_area: Option<f64>,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub image: Option<String>,
}

impl Listing {
    pub fn key(&self) -> &str {
        self.object_id.as_deref().unwrap_or(&self.id)
    }

    pub fn bedrooms(&self) -> Option<f64> {
        self.total_bedrooms.or(self.beds)
    }

    pub fn bathrooms(&self) -> Option<f64> {
        self.total_bathrooms.or(self.baths)
    }

    pub fn area(&self) -> Option<f64> {
        self.living_area.or(self.sqft)
    }

    /// Photos for the gallery: `images`, else the single cover `image`.
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images.clone()
        } else {
            self.image.iter().cloned().collect()
        }
    }

    pub fn cover(&self) -> Option<&str> {
        self.images
            .first()
            .or(self.image.as_ref())
            .map(String::as_str)
    }

    pub fn property_type(&self) -> &str {
        self.property_type
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("Residential")
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingFilter {
    #[default]
    All,
    ForSale,
    Sold,
}

impl ListingFilter {
    pub const ALL: [ListingFilter; 3] = [Self::All, Self::ForSale, Self::Sold];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::ForSale => "For sale",
            Self::Sold => "Sold",
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::ForSale => listing.status.is_for_sale(),
            Self::Sold => listing.status == ListingStatus::Sold,
        }
    }

    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

/// Numbers may arrive as JSON numbers or as text like "899,000" or "$1.2e6".
/// Text that does not read as a number is treated as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Numeric>::deserialize(deserializer)? {
        Some(Numeric::Number(n)) => Some(n),
        Some(Numeric::Text(text)) => {
            let cleaned: String = text
                .chars()
                .filter(|c| !matches!(c, ',' | '$' | ' '))
                .collect();
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        None => None,
    })
}

/// Whole dollars with thousands separators; a missing or zero price renders as "0".
pub fn format_price(price: Option<f64>) -> String {
    let whole = price
        .filter(|p| p.is_finite() && *p > 0.0)
        .map(|p| p.round() as u64)
        .unwrap_or(0);
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shown when no catalog file is available.
pub fn sample_listing() -> Listing {
    Listing {
        id: "dummy-1".to_string(),
        title: "Luxury Modern Home in Prime Location".to_string(),
        address: "123 Main Street, Toronto, ON".to_string(),
        price: Some(899_000.0),
        kind: Some("Detached".to_string()),
        listing_type: Some("For Sale".to_string()),
        status: ListingStatus::Active,
        beds: Some(4.0),
        baths: Some(3.0),
        sqft: Some(2500.0),
        living_area: Some(2500.0),
        description: "This stunning luxury home features modern design and premium finishes \
            throughout. Located in a prime neighborhood with easy access to schools, shopping, \
            and transit."
            .to_string(),
        features: [
            "Hardwood Floors",
            "Updated Kitchen",
            "Finished Basement",
            "Attached Garage",
            "Central Air",
            "Modern Bathrooms",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        images: vec![
            "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&auto=format&fit=crop&q=80"
                .to_string(),
        ],
        ..Default::default()
    }
}
