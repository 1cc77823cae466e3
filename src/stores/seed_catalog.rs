use uuid::Uuid;

use crate::types::internal::item::{Item, timestamp_now};

struct SeedItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
    category: &'static str,
    created_at: &'static str,
}

const SEED_ITEMS: [SeedItem; 6] = [
    SeedItem {
        id: "6292860d-3235-4eb0-9f67-11bace383009",
        name: "Premium Wireless Headphones",
        description: "High-quality wireless headphones with noise cancellation and premium sound quality. Perfect for music lovers and professionals.",
        price: 299.99,
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        category: "Electronics",
        created_at: "2026-01-12T17:38:55.116Z",
    },
    SeedItem {
        id: "564c454f-1bc5-4531-922c-36c37732d632",
        name: "Ergonomic Office Chair",
        description: "Comfortable ergonomic office chair with lumbar support and adjustable height. Ideal for long working hours.",
        price: 449.99,
        image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        category: "Furniture",
        created_at: "2026-01-12T17:38:55.117Z",
    },
    SeedItem {
        id: "62f575e7-da30-474b-8f6f-483e0cb4d1be",
        name: "Smart Fitness Watch",
        description: "Advanced fitness tracking watch with heart rate monitor, GPS, and smartphone connectivity.",
        price: 199.99,
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        category: "Electronics",
        created_at: "2026-01-12T17:38:55.117Z",
    },
    SeedItem {
        id: "5eca690e-f345-4e72-83dd-f0a47dfb39f9",
        name: "Professional Camera Lens",
        description: "High-performance camera lens for professional photography with superior image quality and versatility.",
        price: 899.99,
        image: "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        category: "Photography",
        created_at: "2026-01-12T17:38:55.117Z",
    },
    SeedItem {
        id: "c2e9a912-1883-48b8-9bea-96567e1e2679",
        name: "Organic Coffee Beans",
        description: "Premium organic coffee beans sourced from sustainable farms. Rich flavor and aromatic experience.",
        price: 24.99,
        image: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        category: "Food & Beverage",
        created_at: "2026-01-12T17:38:55.117Z",
    },
    SeedItem {
        id: "18f5d58b-154f-48b4-ba09-7effffa2ba06",
        name: "Minimalist Desk Lamp",
        description: "Modern minimalist desk lamp with adjustable brightness and sleek design. Perfect for any workspace.",
        price: 79.99,
        image: "https://images.unsplash.com/photo-1513506003901-1e6a229e2d15?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        category: "Home & Office",
        created_at: "2026-01-12T17:38:55.117Z",
    },
];

impl SeedItem {
    fn to_item(&self, id: String, created_at: String) -> Item {
        Item {
            id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: self.price,
            image: self.image.to_string(),
            category: self.category.to_string(),
            in_stock: true,
            created_at,
            updated_at: None,
        }
    }
}

/// Demo catalog with fixed identifiers, used to populate the in-memory store
pub fn demo_items() -> Vec<Item> {
    SEED_ITEMS
        .iter()
        .map(|seed| seed.to_item(seed.id.to_string(), seed.created_at.to_string()))
        .collect()
}

/// Demo catalog with fresh identifiers and creation times, written to a new data file
pub fn fresh_demo_items() -> Vec<Item> {
    SEED_ITEMS
        .iter()
        .map(|seed| seed.to_item(Uuid::new_v4().to_string(), timestamp_now()))
        .collect()
}
