//! Stored catalog entries.

use std::fmt;

use chrono::{DateTime, Utc};
use lumaskin_model::ProductRecord;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A deterministic product identifier.
///
/// Derived from name and brand, rendered as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId([u8; 16]);

impl ProductId {
    pub fn from_first_16_bytes_of_sha256(digest: [u8; 32]) -> Self {
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    /// Id for a product, stable across imports.
    pub fn for_product(name: &str, brand: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        hasher.update([0x1f]);
        hasher.update(brand.as_bytes());
        Self::from_first_16_bytes_of_sha256(hasher.finalize().into())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ProductId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("product id must be 16 bytes"))?;
        Ok(Self(bytes))
    }
}

/// A product as held by a catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: ProductId,
    pub imported_at: DateTime<Utc>,
    pub product: ProductRecord,
}

impl StoredProduct {
    pub fn new(product: ProductRecord, imported_at: DateTime<Utc>) -> Self {
        Self {
            id: ProductId::for_product(&product.name, &product.brand),
            imported_at,
            product,
        }
    }
}

/// Wraps a batch with ids and one shared import timestamp.
pub fn stamp_batch(records: &[ProductRecord], imported_at: DateTime<Utc>) -> Vec<StoredProduct> {
    records
        .iter()
        .cloned()
        .map(|record| StoredProduct::new(record, imported_at))
        .collect()
}
