//! Catalog records: one dish category with its variants and descriptive
//! attributes, as supplied by a [`CatalogStore`](crate::CatalogStore).

use std::borrow::Cow;

use crate::AttributeName;

/// A stored value that is either a single text or an ordered list of texts.
///
/// Documents use this shape for `subcategory` (the record's variants),
/// `size`, and `dietary_restriction`.
///
/// # Examples
/// ```
/// use dishmatch_core::FieldValue;
///
/// let sizes = FieldValue::List(vec!["Small".into(), "Large".into()]);
/// assert_eq!(sizes.to_text(), "Small,Large");
/// assert_eq!(FieldValue::Text("Regular".into()).to_text(), "Regular");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum FieldValue {
    /// A single text value.
    Text(String),
    /// An ordered sequence of text values.
    List(Vec<String>),
}

impl FieldValue {
    /// Return the value as text. Lists are joined with `,`.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// Return the single text value, if this is not a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// Return the list elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Tri-state reading of a record's health flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Healthy {
    /// Marked healthy.
    Yes,
    /// Marked not healthy.
    No,
    /// No information recorded.
    #[default]
    Unknown,
}

impl Healthy {
    /// Return the canonical text form: `"true"`, `"false"` or `"unknown"`.
    ///
    /// # Examples
    /// ```
    /// use dishmatch_core::Healthy;
    ///
    /// assert_eq!(Healthy::Yes.as_str(), "true");
    /// assert_eq!(Healthy::from_text(" False "), Healthy::No);
    /// assert_eq!(Healthy::from_text("maybe"), Healthy::Unknown);
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
            Self::Unknown => "unknown",
        }
    }

    /// Interpret stored text. Unrecognised text maps to `Unknown`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "true" | "yes" => Self::Yes,
            "false" | "no" => Self::No,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Healthy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record's health flag exactly as the store holds it.
///
/// Matching compares the stored text; [`state`](Self::state) gives the
/// tri-state reading. A missing or null flag has no text and never matches.
///
/// # Examples
/// ```
/// use dishmatch_core::{HealthFlag, Healthy};
///
/// let flag = HealthFlag::from("Yes");
/// assert_eq!(flag.as_text(), Some("Yes"));
/// assert_eq!(flag.state(), Healthy::Yes);
/// assert_eq!(HealthFlag::default().state(), Healthy::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "HealthRepr", into = "Option<String>")
)]
pub struct HealthFlag(Option<String>);

impl HealthFlag {
    /// Return the stored text, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Interpret the stored text as a tri-state flag.
    #[must_use]
    pub fn state(&self) -> Healthy {
        self.as_text().map_or(Healthy::Unknown, Healthy::from_text)
    }
}

impl From<&str> for HealthFlag {
    fn from(text: &str) -> Self {
        Self(Some(text.to_owned()))
    }
}

impl From<Healthy> for HealthFlag {
    fn from(state: Healthy) -> Self {
        Self::from(state.as_str())
    }
}

impl From<HealthFlag> for Option<String> {
    fn from(flag: HealthFlag) -> Self {
        flag.0
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum HealthRepr {
    Missing,
    Flag(bool),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<HealthRepr> for HealthFlag {
    fn from(repr: HealthRepr) -> Self {
        match repr {
            HealthRepr::Missing => Self(None),
            HealthRepr::Flag(flag) => Self(Some(flag.to_string())),
            HealthRepr::Text(text) => Self(Some(text)),
        }
    }
}

/// Decode `null` as the field's default so a sparse document still loads.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One dish category as held by the catalog store.
///
/// The pipeline only reads these fields; derived values such as match scores
/// and prices live on [`ScoredRecord`](crate::ScoredRecord) and
/// [`LineItem`](crate::LineItem).
///
/// # Examples
/// ```
/// use dishmatch_core::{AttributeName, CatalogRecord, FieldValue};
///
/// let record = CatalogRecord {
///     category: "Milkshake".into(),
///     subcategory: Some(FieldValue::List(vec!["Oreo Shake".into(), "Vanilla".into()])),
///     taste: "Sweet".into(),
///     average_rating: 4.4,
///     ..CatalogRecord::default()
/// };
///
/// assert_eq!(record.variant_names(), vec!["Oreo Shake", "Vanilla"]);
/// assert_eq!(record.attribute_text(AttributeName::Taste).as_deref(), Some("Sweet"));
/// assert!(record.attribute_text(AttributeName::Size).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CatalogRecord {
    /// Dish category, e.g. `"Milkshake"`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub category: String,
    /// The record's variants: one name or an ordered list of names.
    pub subcategory: Option<FieldValue>,
    /// Vendor selling the dish.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub vendor: String,
    /// Taste descriptor; may be empty.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub taste: String,
    /// Size or sizes on offer.
    pub size: Option<FieldValue>,
    /// Health flag as stored.
    pub healthy: HealthFlag,
    /// Price tier such as `"cheap"` or `"medium"`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub price_tier: String,
    /// Dietary restriction the dish is unsuitable for, if any.
    pub dietary_restriction: Option<FieldValue>,
    /// Average rating on a 0 to 5 scale.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub average_rating: f64,
}

impl CatalogRecord {
    /// Return the text form of the field that `name` compares against.
    ///
    /// Returns `None` for absent optional fields, which never match.
    #[must_use]
    pub fn attribute_text(&self, name: AttributeName) -> Option<Cow<'_, str>> {
        match name {
            AttributeName::Category => Some(Cow::Borrowed(self.category.as_str())),
            AttributeName::Subcategory => self.subcategory.as_ref().map(FieldValue::to_text),
            AttributeName::Vendor => Some(Cow::Borrowed(self.vendor.as_str())),
            AttributeName::Taste => Some(Cow::Borrowed(self.taste.as_str())),
            AttributeName::Size => self.size.as_ref().map(FieldValue::to_text),
            AttributeName::Healthy => self.healthy.as_text().map(Cow::Borrowed),
            AttributeName::PriceTier => Some(Cow::Borrowed(self.price_tier.as_str())),
            AttributeName::AverageRating => Some(Cow::Owned(self.average_rating.to_string())),
        }
    }

    /// Return the variant names this record expands into.
    ///
    /// A list yields each element in order, a single text yields itself, and
    /// an absent subcategory yields one empty name.
    #[must_use]
    pub fn variant_names(&self) -> Vec<&str> {
        match &self.subcategory {
            Some(FieldValue::List(items)) => items.iter().map(String::as_str).collect(),
            Some(FieldValue::Text(text)) => vec![text.as_str()],
            None => vec![""],
        }
    }
}
