use std::sync::RwLock;

use chrono::{DateTime, Utc};
use thiserror::Error;

use tambo_catalog::{CatalogReader, NewProduct, Product};
use tambo_core::{DomainError, ProductId, StoreError, StoreResult};

/// Failure of a catalog mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// In-memory product catalog.
///
/// Products are kept in definition order; updates happen in place so the
/// order is stable for the lifetime of the store.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, new: NewProduct, now: DateTime<Utc>) -> Result<Product, CatalogError> {
        let product = Product::create(ProductId::new(), new, now)?;
        let mut products = self.write()?;
        products.push(product.clone());
        Ok(product)
    }

    pub fn update(
        &self,
        id: ProductId,
        new: NewProduct,
        now: DateTime<Utc>,
    ) -> Result<Product, CatalogError> {
        let mut products = self.write()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        product.apply_update(new, now)?;
        Ok(product.clone())
    }

    pub fn get(&self, id: ProductId) -> Result<Product, CatalogError> {
        let products = self.read()?;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::Domain(DomainError::NotFound))
    }

    /// Products at or below their minimum stock, in catalog order.
    pub fn low_stock(&self) -> StoreResult<Vec<Product>> {
        let products = self.read()?;
        Ok(products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect())
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Atomically take stock for a set of order lines.
    ///
    /// Every line is validated against the same snapshot before any stock is
    /// decremented, so a rejected line leaves the catalog untouched. Lines
    /// repeating a product draw from the same pool. Returns the updated
    /// products in line order.
    pub fn take_stock(&self, wants: &[(ProductId, u32)]) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.write()?;

        let mut claims: Vec<(usize, u32)> = Vec::with_capacity(wants.len());
        for (id, quantity) in wants {
            let position = products
                .iter()
                .position(|p| p.id == *id)
                .ok_or(DomainError::NotFound)?;
            let claimed: u32 = claims
                .iter()
                .filter(|(seen, _)| *seen == position)
                .map(|(_, q)| q)
                .sum();
            let available = products[position].stock - claimed;
            if available < *quantity {
                return Err(DomainError::validation(format!(
                    "insufficient stock for {}: requested {}, available {}",
                    products[position].name, quantity, available
                ))
                .into());
            }
            claims.push((position, *quantity));
        }

        let mut taken = Vec::with_capacity(wants.len());
        for (position, quantity) in claims {
            products[position].stock -= quantity;
            taken.push(products[position].clone());
        }
        Ok(taken)
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<Product>>> {
        self.products
            .read()
            .map_err(|_| StoreError::unavailable("catalog lock poisoned"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<Product>>> {
        self.products
            .write()
            .map_err(|_| StoreError::unavailable("catalog lock poisoned"))
    }
}

impl CatalogReader for InMemoryCatalog {
    fn list_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read()?.clone())
    }

    fn find_by_name_fragment(&self, fragment: &str) -> StoreResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        let products = self.read()?;
        Ok(products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
