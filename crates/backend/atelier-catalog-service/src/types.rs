use serde::Serialize;

/// A storefront product. The catalog is a fixed in-memory list; there is no
/// product database behind it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    /// Price in major currency units.
    pub price: f64,
    pub currency: &'static str,
    pub image: &'static str,
    pub gallery_images: &'static [&'static str],
    /// Hex swatches; empty when the product has a single colorway.
    pub colors: &'static [&'static str],
}
