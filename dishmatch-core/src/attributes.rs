//! Structured query attributes produced by a
//! [`QueryInterpreter`](crate::QueryInterpreter).
//!
//! Every recognised attribute is a tagged variant. Text-compared attributes
//! share [`Attribute::Text`]; the list-capable `dietary_restrictions` entry
//! has its own [`Attribute::DietaryRestrictions`] case so scoring never has
//! to inspect value types at runtime.

/// Attribute names compared against a record field as case-insensitive text.
///
/// # Examples
/// ```
/// use dishmatch_core::AttributeName;
///
/// assert_eq!(AttributeName::PriceTier.as_str(), "price_tier");
/// assert_eq!("taste".parse::<AttributeName>(), Ok(AttributeName::Taste));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    /// Dish category.
    Category,
    /// Variant name.
    Subcategory,
    /// Vendor name.
    Vendor,
    /// Taste descriptor.
    Taste,
    /// Portion size.
    Size,
    /// Health flag.
    Healthy,
    /// Price tier.
    PriceTier,
    /// Average rating.
    AverageRating,
}

/// Query key carrying dietary restrictions.
pub const DIETARY_RESTRICTIONS: &str = "dietary_restrictions";

impl AttributeName {
    /// Return the attribute's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Vendor => "vendor",
            Self::Taste => "taste",
            Self::Size => "size",
            Self::Healthy => "healthy",
            Self::PriceTier => "price_tier",
            Self::AverageRating => "average_rating",
        }
    }
}

impl std::fmt::Display for AttributeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttributeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "subcategory" => Ok(Self::Subcategory),
            "vendor" => Ok(Self::Vendor),
            "taste" => Ok(Self::Taste),
            "size" => Ok(Self::Size),
            "healthy" => Ok(Self::Healthy),
            "price_tier" => Ok(Self::PriceTier),
            "average_rating" => Ok(Self::AverageRating),
            _ => Err(format!("unknown attribute '{s}'")),
        }
    }
}

/// The query's dietary restrictions.
///
/// The two shapes drive separate rules: a single value excludes records
/// carrying the same restriction, a list scores records whose own list
/// intersects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DietaryQuery {
    /// One restriction.
    Single(String),
    /// Several restrictions.
    AnyOf(Vec<String>),
}

/// One non-null query attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// A text-compared attribute.
    Text {
        /// Which record field to compare.
        name: AttributeName,
        /// Requested value.
        value: String,
    },
    /// The `dietary_restrictions` entry.
    DietaryRestrictions(DietaryQuery),
}

impl Attribute {
    /// Construct a text-compared attribute.
    pub fn text(name: AttributeName, value: impl Into<String>) -> Self {
        Self::Text {
            name,
            value: value.into(),
        }
    }
}

/// The interpreter's structured reading of a free-text query.
///
/// Null values never reach this type; an empty value means the interpreter
/// found nothing (or failed), which sends ranking to the popularity fallback.
///
/// # Examples
/// ```
/// use dishmatch_core::{AttributeName, DietaryQuery, QueryAttributes};
///
/// let query = QueryAttributes::new()
///     .with_text(AttributeName::Taste, "sweet")
///     .with_dietary(DietaryQuery::Single("lactose intolerant".into()));
///
/// assert_eq!(query.len(), 2);
/// assert_eq!(
///     query.dietary(),
///     Some(&DietaryQuery::Single("lactose intolerant".into()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryAttributes {
    entries: Vec<Attribute>,
}

impl QueryAttributes {
    /// Construct an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute.
    pub fn push(&mut self, attribute: Attribute) {
        self.entries.push(attribute);
    }

    /// Append a text-compared attribute while returning `self` for chaining.
    #[must_use]
    pub fn with_text(mut self, name: AttributeName, value: impl Into<String>) -> Self {
        self.push(Attribute::text(name, value));
        self
    }

    /// Append the dietary entry while returning `self` for chaining.
    #[must_use]
    pub fn with_dietary(mut self, query: DietaryQuery) -> Self {
        self.push(Attribute::DietaryRestrictions(query));
        self
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Return the first dietary entry, if any.
    #[must_use]
    pub fn dietary(&self) -> Option<&DietaryQuery> {
        self.entries.iter().find_map(|entry| match entry {
            Attribute::DietaryRestrictions(query) => Some(query),
            Attribute::Text { .. } => None,
        })
    }

    /// Return the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no attributes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a QueryAttributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Attribute> for QueryAttributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(feature = "serde")]
mod json {
    use log::debug;
    use serde_json::{Map, Value};

    use super::{Attribute, AttributeName, DIETARY_RESTRICTIONS, DietaryQuery, QueryAttributes};

    impl QueryAttributes {
        /// Build attributes from the interpreter's flat JSON object.
        ///
        /// Nulls, unknown keys and nested objects are dropped. Booleans and
        /// numbers become their plain text form and a list under any key
        /// other than `dietary_restrictions` becomes its elements joined
        /// with `,`.
        ///
        /// # Examples
        /// ```
        /// use dishmatch_core::{DietaryQuery, QueryAttributes};
        ///
        /// let json = serde_json::json!({
        ///     "taste": "SWEET",
        ///     "healthy": true,
        ///     "vendor": null,
        ///     "mood": "happy",
        ///     "dietary_restrictions": ["vegan", "gluten free"],
        /// });
        /// let Some(map) = json.as_object() else { unreachable!() };
        ///
        /// let attributes = QueryAttributes::from_json_map(map);
        ///
        /// assert_eq!(attributes.len(), 3);
        /// assert_eq!(
        ///     attributes.dietary(),
        ///     Some(&DietaryQuery::AnyOf(vec!["vegan".into(), "gluten free".into()]))
        /// );
        /// ```
        #[must_use]
        pub fn from_json_map(map: &Map<String, Value>) -> Self {
            map.iter()
                .filter_map(|(key, value)| attribute_from_json(key, value))
                .collect()
        }
    }

    fn attribute_from_json(key: &str, value: &Value) -> Option<Attribute> {
        if value.is_null() {
            return None;
        }
        if key == DIETARY_RESTRICTIONS {
            return dietary_from_json(value).map(Attribute::DietaryRestrictions);
        }
        let Ok(name) = key.parse::<AttributeName>() else {
            debug!("dropping unrecognised query attribute '{key}'");
            return None;
        };
        let Some(text) = json_text(value) else {
            debug!("dropping query attribute '{key}' with non-scalar value");
            return None;
        };
        Some(Attribute::text(name, text))
    }

    fn dietary_from_json(value: &Value) -> Option<DietaryQuery> {
        match value {
            Value::Array(items) => Some(DietaryQuery::AnyOf(
                items.iter().filter_map(scalar_text).collect(),
            )),
            other => scalar_text(other).map(DietaryQuery::Single),
        }
    }

    fn json_text(value: &Value) -> Option<String> {
        match value {
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| scalar_text(item).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            other => scalar_text(other),
        }
    }

    fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text.clone()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Number(number) => Some(number.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}
