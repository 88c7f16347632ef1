//! Virtual try-on: pick garments, upload a body photo, get a composite.

use cartwise_client::{ApiClient, TryOnItem};
use cartwise_core::{ImageRef, Product};

pub const MISSING_PHOTO: &str = "Upload a photo of yourself first.";
pub const NO_GARMENT: &str = "Select at least one item to try on.";
pub const INVALID_PHOTO: &str = "The photo must be an image data URL.";
pub const GENERATION_FAILED: &str = "Try-on generation failed. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TryOnDialog {
    product_id: String,
    body_photo: Option<String>,
    garments: Vec<TryOnItem>,
    selected: Vec<bool>,
    generating: bool,
    result_url: Option<String>,
    error: Option<String>,
}

impl TryOnDialog {
    /// Opens the dialog with `product` as the first, pre-selected garment.
    #[must_use]
    pub fn open_for(product: &Product) -> Self {
        let mut dialog = Self {
            product_id: product.id.clone(),
            ..Self::default()
        };
        dialog.add_garment(garment_for(product));
        dialog
    }

    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Adds a garment, selected.
    pub fn add_garment(&mut self, item: TryOnItem) {
        self.garments.push(item);
        self.selected.push(true);
    }

    #[must_use]
    pub fn garments(&self) -> &[TryOnItem] {
        &self.garments
    }

    /// Flips selection of the garment at `index`; out-of-range is a no-op.
    pub fn toggle_garment(&mut self, index: usize) {
        if let Some(flag) = self.selected.get_mut(index) {
            *flag = !*flag;
        }
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Accepts an uploaded photo as a `data:image/...` URL.
    pub fn set_body_photo(&mut self, data_url: impl Into<String>) -> bool {
        let data_url = data_url.into();
        if data_url.starts_with("data:image/") {
            self.body_photo = Some(data_url);
            self.error = None;
            true
        } else {
            self.error = Some(INVALID_PHOTO.to_string());
            false
        }
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    #[must_use]
    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Requests a composite of the selected garments on the body photo.
    /// Failures become an inline error; the previous result is cleared.
    pub async fn generate(&mut self, client: &ApiClient) -> Option<&str> {
        let Some(photo) = self.body_photo.clone() else {
            self.error = Some(MISSING_PHOTO.to_string());
            return None;
        };
        let items: Vec<TryOnItem> = self
            .garments
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(item, _)| item.clone())
            .collect();
        if items.is_empty() {
            self.error = Some(NO_GARMENT.to_string());
            return None;
        }

        self.generating = true;
        self.error = None;
        self.result_url = None;

        match client.generate_tryon(&photo, &items).await {
            Ok(url) => self.result_url = Some(url),
            Err(e) => {
                tracing::warn!(error = %e, product_id = %self.product_id, "try-on generation failed");
                self.error = Some(GENERATION_FAILED.to_string());
            }
        }
        self.generating = false;
        self.result_url.as_deref()
    }
}

/// Garment descriptor for a catalog product. Bundled asset images are not
/// reachable by the backend, so only remote images are sent.
#[must_use]
pub fn garment_for(product: &Product) -> TryOnItem {
    let image_url = match ImageRef::parse(&product.image) {
        ImageRef::Remote(url) => Some(url),
        ImageRef::Asset(_) => None,
    };
    let category = Some(product.category.clone()).filter(|c| !c.is_empty());
    TryOnItem {
        image_url,
        mask_url: None,
        body_region: category.as_deref().and_then(body_region_for).map(str::to_string),
        category,
        sub_category: None,
    }
}

/// Maps a product category to the body region the try-on service expects.
///
/// Categories are matched word by word, singular or plural, so "Tops"
/// matches `top` but "Laptops" does not.
fn body_region_for(category: &str) -> Option<&'static str> {
    const REGIONS: &[(&str, &[&str])] = &[
        ("full_body", &["dress", "jumpsuit", "coat"]),
        (
            "upper_body",
            &["top", "shirt", "t-shirt", "blouse", "sweater", "jacket", "hoodie"],
        ),
        ("lower_body", &["pant", "jean", "skirt", "short", "trouser"]),
        ("feet", &["shoe", "sneaker", "boot"]),
    ];

    let category = category.to_ascii_lowercase();
    let words: Vec<&str> = category
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .filter(|w| !w.is_empty())
        .collect();
    let has_word = |token: &str| {
        words.iter().any(|w| {
            *w == token || w.strip_suffix('s') == Some(token) || w.strip_suffix("es") == Some(token)
        })
    };

    REGIONS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|&t| has_word(t)))
        .map(|(region, _)| *region)
}
