// fixtures/mod.rs - Sample deals
//
// Used to seed an empty backend (SEED_SAMPLE_DEALS=true) and as test data.
// Prices are display strings, exactly as an admin would type them.

use crate::web_app::model::{Product, ProductDraft};

const SAMPLE_DEALS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "Noise-Cancelling Headphones",
        "https://images.example.com/headphones.jpg",
        "https://www.amazon.in/dp/B0HEADPHONE?tag=deals-21",
        "₹4,999",
        "Electronics",
        "Over-ear, 30 hours of battery and a fold-flat case.",
    ),
    (
        "Cotton Crew T-Shirt (Pack of 3)",
        "https://images.example.com/tshirts.jpg",
        "https://www.flipkart.com/p/itm-tshirt-pack?affid=deals",
        "₹799",
        "Fashion",
        "",
    ),
    (
        "Stainless Steel Water Bottle",
        "https://images.example.com/bottle.jpg",
        "https://www.amazon.in/dp/B0BOTTLE01?tag=deals-21",
        "₹349",
        "",
        "Keeps drinks cold for 24 hours.",
    ),
    (
        "Mechanical Keyboard",
        "https://images.example.com/keyboard.jpg",
        "https://www.amazon.in/dp/B0KEYBOARD?tag=deals-21",
        "₹2,499",
        "Electronics",
        "Hot-swappable switches and white backlight.",
    ),
    (
        "LED Desk Lamp",
        "https://images.example.com/lamp.jpg",
        "https://www.flipkart.com/p/itm-desk-lamp?affid=deals",
        "₹1,199",
        "Home",
        "",
    ),
];

/// Sample deals as admin drafts, ready to be published
pub fn sample_drafts() -> Vec<ProductDraft> {
    SAMPLE_DEALS
        .iter()
        .map(
            |&(title, image_url, link, price, category, description)| ProductDraft {
                title: title.to_string(),
                image_url: image_url.to_string(),
                link: link.to_string(),
                price: price.to_string(),
                category: category.to_string(),
                description: description.to_string(),
            },
        )
        .collect()
}

/// Sample deals as stored products, newest (highest id) first.
///
/// Blank categories and descriptions stay `None` so callers see the same
/// shapes the backend can return.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_DEALS
        .iter()
        .enumerate()
        .map(
            |(i, &(title, image_url, link, price, category, description))| Product {
                id: i as i64 + 1,
                title: title.to_string(),
                image_url: image_url.to_string(),
                link: link.to_string(),
                price: price.to_string(),
                category: Some(category.to_string()).filter(|c| !c.is_empty()),
                description: Some(description.to_string()).filter(|d| !d.is_empty()),
            },
        )
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_complete() {
        for draft in sample_drafts() {
            assert!(!draft.title.is_empty());
            assert!(!draft.image_url.is_empty());
            assert!(!draft.link.is_empty());
            assert!(!draft.price.is_empty());
        }
    }

    #[test]
    fn test_sample_products_newest_first() {
        let ids: Vec<i64> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
        assert_eq!(sample_products()[2].category_label(), "General");
    }
}
