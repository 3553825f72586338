// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the storefront, the admin panel and the
// REST backend. Prices are display text ("₹1,299") and are never parsed.

use serde::{Deserialize, Deserializer, Serialize};

/// Category shown for products that were saved without one
pub const DEFAULT_CATEGORY: &str = "General";

/// Product listing as returned by `GET /api/products`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    /// Affiliate outbound URL
    pub link: String,
    pub price: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Category label used for display and filtering.
    ///
    /// Missing or blank categories fall back to [`DEFAULT_CATEGORY`].
    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }

    /// AI-written description, if there is anything to show
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// In-progress product record edited in the admin form.
///
/// Also the body of `POST /api/add-product` and the (possibly partial)
/// response of `POST /api/smart-scrape`: absent or `null` fields become
/// empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub price: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

impl ProductDraft {
    /// True when no field has been filled in
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Draft fields that the admin form can edit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    ImageUrl,
    Link,
    Price,
    Category,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Category,
        DraftField::Price,
        DraftField::Title,
        DraftField::ImageUrl,
        DraftField::Link,
        DraftField::Description,
    ];

    /// Form label
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Smart Title",
            DraftField::ImageUrl => "Image URL",
            DraftField::Link => "Affiliate Link",
            DraftField::Price => "Price",
            DraftField::Category => "Category",
            DraftField::Description => "Description",
        }
    }

    pub fn get(self, draft: &ProductDraft) -> &str {
        match self {
            DraftField::Title => &draft.title,
            DraftField::ImageUrl => &draft.image_url,
            DraftField::Link => &draft.link,
            DraftField::Price => &draft.price,
            DraftField::Category => &draft.category,
            DraftField::Description => &draft.description,
        }
    }

    pub fn get_mut(self, draft: &mut ProductDraft) -> &mut String {
        match self {
            DraftField::Title => &mut draft.title,
            DraftField::ImageUrl => &mut draft.image_url,
            DraftField::Link => &mut draft.link,
            DraftField::Price => &mut draft.price,
            DraftField::Category => &mut draft.category,
            DraftField::Description => &mut draft.description,
        }
    }
}

/// Body of `POST /api/smart-scrape`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

/// Status body returned by the write endpoints
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: Option<&str>) -> Product {
        Product {
            id: 1,
            title: "USB-C Hub".to_string(),
            image_url: "https://img.example/hub.jpg".to_string(),
            link: "https://amzn.example/hub".to_string(),
            price: "₹1,299".to_string(),
            category: category.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_category_label_defaults_to_general() {
        assert_eq!(product(None).category_label(), "General");
        assert_eq!(product(Some("")).category_label(), "General");
        assert_eq!(product(Some("   ")).category_label(), "General");
        assert_eq!(product(Some("Tech")).category_label(), "Tech");
    }

    #[test]
    fn test_product_without_category_or_description_deserializes() {
        let json = r#"{
            "id": 7,
            "title": "Desk Lamp",
            "image_url": "https://img.example/lamp.jpg",
            "link": "https://amzn.example/lamp",
            "price": "$19.99"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert!(product.category.is_none());
        assert!(product.description_text().is_none());
        assert_eq!(product.category_label(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_blank_description_is_hidden() {
        let mut p = product(Some("Home"));
        p.description = Some("  ".to_string());
        assert!(p.description_text().is_none());

        p.description = Some("Bright and compact.".to_string());
        assert_eq!(p.description_text(), Some("Bright and compact."));
    }

    #[test]
    fn test_partial_scrape_response_fills_draft() {
        let json = r#"{"title": "Smart Watch", "price": "₹2,499", "description": null}"#;
        let draft: ProductDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.title, "Smart Watch");
        assert_eq!(draft.price, "₹2,499");
        assert_eq!(draft.description, "");
        assert_eq!(draft.image_url, "");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_draft_field_accessors() {
        let mut draft = ProductDraft::default();
        assert!(draft.is_empty());

        for field in DraftField::ALL {
            *field.get_mut(&mut draft) = field.label().to_string();
        }
        for field in DraftField::ALL {
            assert_eq!(field.get(&draft), field.label());
        }
        assert_eq!(draft.title, "Smart Title");
        assert_eq!(draft.link, "Affiliate Link");
    }

    #[test]
    fn test_api_message_ignores_unknown_fields() {
        let json = r#"{"message": "Product added successfully!", "status": 201}"#;
        let message: ApiMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.message.as_deref(), Some("Product added successfully!"));
        assert!(message.error.is_none());
    }
}
