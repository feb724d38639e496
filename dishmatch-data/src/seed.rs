//! The fixed catalog written by the provisioning command.

use dishmatch_core::{CatalogRecord, FieldValue, Healthy};

/// One catalog record with its stable storage identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedEntry {
    /// Identifier derived from the record's category and vendor.
    pub id: String,
    /// Stored document.
    pub record: CatalogRecord,
}

impl SeedEntry {
    /// Wrap `record`, deriving its identifier.
    #[must_use]
    pub fn new(record: CatalogRecord) -> Self {
        Self {
            id: seed_id(&record.category, &record.vendor),
            record,
        }
    }
}

/// Derive the storage identifier for a category and vendor.
///
/// Both parts are lowercased and every run of non-alphanumeric characters
/// becomes a single `-`.
///
/// # Examples
/// ```
/// use dishmatch_data::seed_id;
///
/// assert_eq!(seed_id("Ice Cream", "Baskin Robbins"), "ice-cream:baskin-robbins");
/// assert_eq!(seed_id("Milkshake", "Shake & Co."), "milkshake:shake-co");
/// ```
#[must_use]
pub fn seed_id(category: &str, vendor: &str) -> String {
    format!("{}:{}", slug(category), slug(vendor))
}

fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Return the fixed catalog in a stable order.
#[must_use]
pub fn seed_catalog() -> Vec<SeedEntry> {
    vec![
        dish(
            "Milkshake",
            &["Oreo Shake", "Vanilla", "Chocolate"],
            "Shake Shack",
            "Sweet",
        )
        .sizes(&["Regular", "Large"])
        .healthy(Healthy::No)
        .tier("medium")
        .restriction(FieldValue::Text("lactose intolerant".into()))
        .rated(4.6),
        dish(
            "Pizza",
            &["Margherita", "Farmhouse", "Pepperoni"],
            "Dominos",
            "Savory",
        )
        .sizes(&["Small", "Medium", "Large"])
        .healthy(Healthy::No)
        .tier("medium")
        .rated(4.2),
        dish("Salad", &["Caesar", "Greek"], "Green Bowl", "Fresh")
            .size("Regular")
            .healthy(Healthy::Yes)
            .tier("medium")
            .restriction(FieldValue::Text("vegan".into()))
            .rated(4.4),
        dish("Biryani", &["Chicken", "Vegetable"], "Paradise", "Spicy")
            .sizes(&["Half", "Full"])
            .healthy(Healthy::No)
            .tier("cheap")
            .rated(4.5),
        dish(
            "Ice Cream",
            &["Mint Chip", "Strawberry"],
            "Baskin Robbins",
            "Sweet",
        )
        .size("Cup")
        .healthy(Healthy::No)
        .tier("cheap")
        .restriction(FieldValue::Text("lactose intolerant".into()))
        .rated(4.3),
        single("Smoothie", "Mango", "Juice Bar", "Sweet")
            .size("Regular")
            .healthy(Healthy::Yes)
            .tier("medium")
            .restriction(FieldValue::List(vec!["vegan".into(), "gluten free".into()]))
            .rated(4.1),
        dish("Burger", &["Whopper", "Veggie Burger"], "Burger King", "Savory")
            .size("Regular")
            .healthy(Healthy::No)
            .tier("cheap")
            .rated(3.8),
        dish("Sushi", &["Salmon Roll", "Avocado Roll"], "Sushi Zen", "Umami")
            .healthy(Healthy::Yes)
            .tier("premium")
            .restriction(FieldValue::Text("gluten intolerant".into()))
            .rated(4.7),
        single("Dosa", "Masala Dosa", "Saravana Bhavan", "Savory")
            .size("Regular")
            .healthy(Healthy::Unknown)
            .tier("cheap")
            .restriction(FieldValue::List(vec!["vegan".into()]))
            .rated(4.0),
    ]
    .into_iter()
    .map(|draft| SeedEntry::new(draft.0))
    .collect()
}

struct Draft(CatalogRecord);

fn dish(category: &str, variants: &[&str], vendor: &str, taste: &str) -> Draft {
    let variants = variants.iter().map(|&v| v.to_owned()).collect();
    Draft(CatalogRecord {
        category: category.to_owned(),
        subcategory: Some(FieldValue::List(variants)),
        vendor: vendor.to_owned(),
        taste: taste.to_owned(),
        ..CatalogRecord::default()
    })
}

fn single(category: &str, variant: &str, vendor: &str, taste: &str) -> Draft {
    Draft(CatalogRecord {
        category: category.to_owned(),
        subcategory: Some(FieldValue::Text(variant.to_owned())),
        vendor: vendor.to_owned(),
        taste: taste.to_owned(),
        ..CatalogRecord::default()
    })
}

impl Draft {
    fn size(mut self, size: &str) -> Self {
        self.0.size = Some(FieldValue::Text(size.to_owned()));
        self
    }

    fn sizes(mut self, sizes: &[&str]) -> Self {
        self.0.size = Some(FieldValue::List(
            sizes.iter().map(|&s| s.to_owned()).collect(),
        ));
        self
    }

    fn healthy(mut self, healthy: Healthy) -> Self {
        self.0.healthy = healthy.into();
        self
    }

    fn tier(mut self, tier: &str) -> Self {
        self.0.price_tier = tier.to_owned();
        self
    }

    fn restriction(mut self, restriction: FieldValue) -> Self {
        self.0.dietary_restriction = Some(restriction);
        self
    }

    fn rated(mut self, rating: f64) -> Self {
        self.0.average_rating = rating;
        self
    }
}
