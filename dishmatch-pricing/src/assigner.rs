//! Session-scoped price memoisation.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use dishmatch_core::{Price, PriceSource};
use log::trace;

/// Category whose variants all share one price.
pub const MILKSHAKE: &str = "milkshake";

/// Grouping key under which a price is memoised.
///
/// Milkshake variants collapse onto the single key `milkshake`; every other
/// pair becomes `lowercase(category)::subcategory`. The variant name keeps
/// its case.
///
/// # Examples
/// ```
/// use dishmatch_pricing::PriceKey;
///
/// assert_eq!(PriceKey::new("Pizza", "Margherita").as_str(), "pizza::Margherita");
/// assert_eq!(PriceKey::new("MilkShake", "Vanilla").as_str(), "milkshake");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PriceKey(String);

impl PriceKey {
    /// Build the key for one variant of `category`.
    #[must_use]
    pub fn new(category: &str, subcategory: &str) -> Self {
        let category = category.to_lowercase();
        if category == MILKSHAKE {
            return Self(category);
        }
        Self(format!("{category}::{subcategory}"))
    }

    /// Return the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Memoising price lookup for one session.
///
/// The first lookup for a key draws from the [`PriceSource`]; later lookups
/// return the stored price unchanged. Entries are never evicted or updated.
/// Lookups take `&mut self`, so the check-then-insert sequence cannot
/// interleave with another caller. Wrap the assigner in a `Mutex` before
/// sharing it between threads.
#[derive(Debug)]
pub struct PriceAssigner<S> {
    cache: HashMap<PriceKey, Price>,
    source: S,
}

impl<S: PriceSource> PriceAssigner<S> {
    /// Create an empty cache drawing from `source`.
    pub fn new(source: S) -> Self {
        Self {
            cache: HashMap::new(),
            source,
        }
    }

    /// Return the session price for one variant, drawing it on first use.
    pub fn price_for(&mut self, category: &str, subcategory: &str) -> Price {
        let key = PriceKey::new(category, subcategory);
        let source = &mut self.source;
        *self.cache.entry(key).or_insert_with_key(|key| {
            let price = Price::from_step(source.next_step());
            trace!("assigned price {price} to {key}");
            price
        })
    }

    /// Return the cached price for one variant without drawing.
    #[must_use]
    pub fn cached(&self, category: &str, subcategory: &str) -> Option<Price> {
        self.cache
            .get(&PriceKey::new(category, subcategory))
            .copied()
    }

    /// Return the number of memoised keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Report whether no price has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Return a sorted copy of the cache.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<PriceKey, Price> {
        self.cache
            .iter()
            .map(|(key, price)| (key.clone(), *price))
            .collect()
    }

    /// Borrow the underlying price source.
    pub const fn source(&self) -> &S {
        &self.source
    }
}
