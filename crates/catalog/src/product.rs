use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tambo_core::{DomainError, DomainResult, Money, ProductId};

/// Minimum-stock threshold applied when a product does not declare one.
pub const DEFAULT_MIN_STOCK: u32 = 10;

/// Product category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vinos,
    Cervezas,
    Licores,
    Whiskey,
    Vodka,
    Ron,
    #[default]
    Otros,
}

/// Input for creating or replacing a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub cost_price: Money,
    pub sale_price: Money,
    pub stock: u32,
    pub min_stock: u32,
    pub supplier: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub cost_price: Money,
    pub sale_price: Money,
    pub stock: u32,
    pub min_stock: u32,
    pub supplier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a product from validated input.
    pub fn create(id: ProductId, new: NewProduct, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = validated_name(&new.name)?;
        Ok(Self {
            id,
            name,
            description: new.description,
            category: new.category,
            cost_price: new.cost_price,
            sale_price: new.sale_price,
            stock: new.stock,
            min_stock: new.min_stock,
            supplier: new.supplier,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every user-editable field, preserving id and creation time.
    pub fn apply_update(&mut self, new: NewProduct, now: DateTime<Utc>) -> DomainResult<()> {
        self.name = validated_name(&new.name)?;
        self.description = new.description;
        self.category = new.category;
        self.cost_price = new.cost_price;
        self.sale_price = new.sale_price;
        self.stock = new.stock;
        self.min_stock = new.min_stock;
        self.supplier = new.supplier;
        self.updated_at = now;
        Ok(())
    }

    /// Profit margin as a percentage of the sale price.
    ///
    /// `None` when the sale price is zero (the ratio is undefined, not 0%).
    /// Negative when the product sells below cost. Always computed on read,
    /// never stored.
    pub fn margin_percent(&self) -> Option<f64> {
        if self.sale_price.is_zero() {
            return None;
        }
        let sale = self.sale_price.centavos() as i128;
        let cost = self.cost_price.centavos() as i128;
        Some((sale - cost) as f64 / sale as f64 * 100.0)
    }

    /// Whether the stock level has reached the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

fn validated_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(trimmed.to_string())
}
