//! Priced line items, one per purchasable variant.

use crate::{CatalogRecord, FieldValue, HealthFlag, Price};

/// One purchasable variant with its session price.
///
/// # Examples
/// ```
/// use dishmatch_core::{CatalogRecord, LineItem, Price};
///
/// let record = CatalogRecord {
///     category: "Pizza".into(),
///     vendor: "Dominos".into(),
///     ..CatalogRecord::default()
/// };
/// let item = LineItem::from_record(&record, "Margherita", Price::MIN);
///
/// assert_eq!(item.subcategory, "Margherita");
/// assert_eq!(item.vendor, "Dominos");
/// assert_eq!(item.price.value(), 75);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    /// Category of the originating record, original case preserved.
    pub category: String,
    /// The single variant this item represents.
    pub subcategory: String,
    /// Session-stable price.
    pub price: Price,
    /// Vendor of the originating record.
    pub vendor: String,
    /// Taste descriptor of the originating record.
    pub taste: String,
    /// Health flag of the originating record.
    pub healthy: HealthFlag,
    /// Dietary restriction of the originating record.
    pub dietary_restriction: Option<FieldValue>,
    /// Average rating of the originating record.
    pub average_rating: f64,
}

impl LineItem {
    /// Build a line item for one variant of `record`.
    pub fn from_record(record: &CatalogRecord, subcategory: impl Into<String>, price: Price) -> Self {
        Self {
            category: record.category.clone(),
            subcategory: subcategory.into(),
            price,
            vendor: record.vendor.clone(),
            taste: record.taste.clone(),
            healthy: record.healthy.clone(),
            dietary_restriction: record.dietary_restriction.clone(),
            average_rating: record.average_rating,
        }
    }
}
