use std::sync::Arc;

use tambo_core::StoreResult;

use crate::product::Product;

/// Read-side contract over the product catalog.
///
/// The messaging engine only ever reads the catalog through this trait; the
/// backing store decides how products are kept.
pub trait CatalogReader: Send + Sync {
    /// Every product, in catalog-definition order.
    fn list_all(&self) -> StoreResult<Vec<Product>>;

    /// Products whose name contains `fragment`, compared case-insensitively,
    /// in catalog-definition order. An empty fragment matches everything;
    /// callers decide whether that is meaningful.
    fn find_by_name_fragment(&self, fragment: &str) -> StoreResult<Vec<Product>>;
}

impl<S> CatalogReader for Arc<S>
where
    S: CatalogReader + ?Sized,
{
    fn list_all(&self) -> StoreResult<Vec<Product>> {
        (**self).list_all()
    }

    fn find_by_name_fragment(&self, fragment: &str) -> StoreResult<Vec<Product>> {
        (**self).find_by_name_fragment(fragment)
    }
}
