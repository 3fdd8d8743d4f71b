use serde::{Deserialize, Deserializer};

/// Image shown when a listing has no media or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A listing as normalized by the remote listing function.
///
/// `id` is our rendering key; `listing_id` is the MLS's own identifier and the
/// two are not interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub listing_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,

    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub sqft: Option<u64>,

    #[serde(deserialize_with = "null_as_default")]
    pub property_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub property_sub_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub description: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub media: Vec<PropertyMedia>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertyMedia {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub media_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
}

/// MLS feeds send `null` for fields they do not have; treat it like absent.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Property {
    /// URL of the lowest-`order` media item, or the placeholder.
    pub fn primary_image(&self) -> &str {
        self.media
            .iter()
            .filter(|m| !m.url.is_empty())
            .min_by_key(|m| m.order)
            .map(|m| m.url.as_str())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// "Jupiter, FL 33458"
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
            .trim()
            .to_string()
    }
}

/// Whole US dollars with thousands separators: `1250000.0` -> `$1,250,000`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Bathroom counts come back as decimals (2.5); whole numbers drop the ".0".
pub fn format_count(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
