//! Sample Data
//!
//! Static records the list views start from. Every function returns a fresh
//! owned vector, so no view can leak mutations into another.

use chrono::NaiveDate;

use crate::domain::{Category, Order, Product, Transaction};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "iPhone 14 Pro", 999.0, "Electronics", "Apple", "Latest flagship smartphone with premium features", day(2024, 1, 15)),
        Product::new(2, "MacBook Air", 1299.0, "Electronics", "Apple", "Lightweight laptop with M2 chip", day(2024, 1, 10)),
        Product::new(3, "Nike Air Max", 129.0, "Footwear", "Nike", "Comfortable running shoes", day(2024, 1, 5)),
        Product::new(4, "Coffee Maker", 79.0, "Home", "Philips", "Automatic drip coffee maker", day(2024, 1, 3)),
        Product::new(5, "Gaming Chair", 299.0, "Furniture", "DXRacer", "Ergonomic gaming chair with lumbar support", day(2024, 1, 1)),
        Product::new(6, "Smart Watch", 199.0, "Electronics", "Samsung", "Fitness tracking smartwatch", day(2024, 1, 20)),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order::new(1, "John Doe", 299.99, "Pending", day(2024, 1, 15)),
        Order::new(2, "Jane Smith", 499.99, "Completed", day(2024, 1, 10)),
        Order::new(3, "Alice Johnson", 129.99, "Shipped", day(2024, 1, 5)),
        Order::new(4, "Bob Brown", 79.99, "Cancelled", day(2024, 1, 3)),
        Order::new(5, "Charlie Davis", 199.99, "Pending", day(2024, 1, 1)),
        Order::new(6, "Diana Evans", 299.99, "Completed", day(2024, 1, 20)),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(1, "John Doe", 299.99, "Pending", day(2024, 1, 15)),
        Transaction::new(2, "Jane Smith", 499.99, "Completed", day(2024, 1, 10)),
        Transaction::new(3, "Alice Johnson", 129.99, "Shipped", day(2024, 1, 5)),
        Transaction::new(4, "Bob Brown", 79.99, "Cancelled", day(2024, 1, 3)),
        Transaction::new(5, "Charlie Davis", 199.99, "Pending", day(2024, 1, 1)),
        Transaction::new(6, "Diana Evans", 299.99, "Completed", day(2024, 1, 20)),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "Electronics", "Phones, Laptops, Tablets, Cameras, and other gadgets", day(2024, 1, 15)),
        Category::new(2, "Fashion", "Clothing, Shoes, Accessories, Jewelry", day(2024, 1, 16)),
        Category::new(3, "Home & Kitchen", "Furniture, Appliances, Kitchen items, Home decor", day(2024, 1, 17)),
        Category::new(4, "Beauty & Personal Care", "Makeup, Skincare, Hair care, Personal hygiene", day(2024, 1, 18)),
        Category::new(5, "Sports & Fitness", "Exercise equipment, Sports gear, Outdoor activities", day(2024, 1, 19)),
        Category::new(6, "Books & Stationery", "Books, Notebooks, Office supplies", day(2024, 1, 20)),
        Category::new(7, "Toys & Games", "Kids toys, Board games, Gaming accessories", day(2024, 1, 21)),
        Category::new(8, "Automotive", "Car accessories, Tools, Spare parts", day(2024, 1, 22)),
        Category::new(9, "Health & Wellness", "Supplements, Medical supplies, Health monitors", day(2024, 1, 23)),
        Category::new(10, "Food & Beverages", "Groceries, Snacks, Drinks, Organic food", day(2024, 1, 24)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: HashSet<u32> = categories().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 10);
        let ids: HashSet<u32> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_seed_returns_independent_copies() {
        let mut first = orders();
        first.push(Order::new(99, "Extra", 1.0, "Pending", day(2024, 2, 1)));
        assert_eq!(orders().len(), 6);
    }
}
