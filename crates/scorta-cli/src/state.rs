//! In-memory mirror of the remote collection and the CRUD operations over it.
//!
//! `Inventory` is the single source of truth between a load and the next
//! save. Every mutation replaces the remote collection wholesale; there is no
//! partial update on the wire. Save failures are logged and deliberately not
//! rolled back, so the mirror can run ahead of the stored document.

use scorta_api_types::{Collection, Product};
use tracing::{error, warn};
use uuid::Uuid;

use crate::client::{CliError, Remote};

/// Input shape for [`Inventory::add`]: every field required, id generated.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
}

/// Input shape for [`Inventory::update_by_id`]: absent fields keep their
/// value. An empty or whitespace-only string is treated the same as absent,
/// which means a text field can never be cleared through an update.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}

impl ProductPatch {
    fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// The client-side state container owning the product sequence.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Collection,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_products(products: Collection) -> Self {
        Self { products }
    }

    /// The current sequence, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Replace the in-memory sequence with the remote collection.
    ///
    /// A transport or parse failure resets the sequence to empty and is
    /// reported through the log only; callers proceed against the empty
    /// mirror.
    pub async fn load(&mut self, remote: &Remote) {
        match remote.fetch_collection().await {
            Ok(collection) => self.products = collection,
            Err(err) => {
                error!(error = %err, "failed to load the inventory from the server");
                self.products = Vec::new();
            }
        }
    }

    /// Send the full in-memory sequence as the remote replacement.
    ///
    /// A failure is logged and the local mutation that triggered the save is
    /// kept, so local and remote state may diverge until the next successful
    /// save.
    pub async fn save(&self, remote: &Remote) {
        if let Err(err) = remote.replace_collection(&self.products).await {
            warn!(error = %err, "failed to save the inventory to the server");
        }
    }

    /// Validate `draft`, append it with a fresh id, and save.
    pub async fn add(&mut self, remote: &Remote, draft: ProductDraft) -> Result<Product, CliError> {
        let name = non_empty("name", &draft.name)?;
        let category = non_empty("category", &draft.category)?;
        positive_quantity(draft.quantity)?;
        positive_price(draft.price)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            quantity: draft.quantity,
            price: draft.price,
        };
        self.products.push(product.clone());
        self.save(remote).await;
        Ok(product)
    }

    /// Apply the present fields of `patch` to the product with `id`, then
    /// save. Validation happens before any field is touched.
    pub async fn update_by_id(
        &mut self,
        remote: &Remote,
        id: &str,
        patch: ProductPatch,
    ) -> Result<Product, CliError> {
        let index = self.index_of(id).ok_or_else(|| CliError::NotFound(id.to_string()))?;

        if let Some(quantity) = patch.quantity {
            positive_quantity(quantity)?;
        }
        if let Some(price) = patch.price {
            positive_price(price)?;
        }

        let product = &mut self.products[index];
        if let Some(name) = patch.name() {
            product.name = name.to_string();
        }
        if let Some(category) = patch.category() {
            product.category = category.to_string();
        }
        if let Some(quantity) = patch.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        let updated = product.clone();

        self.save(remote).await;
        Ok(updated)
    }

    /// Remove the product with `id`, then save.
    pub async fn delete_by_id(&mut self, remote: &Remote, id: &str) -> Result<Product, CliError> {
        let index = self.index_of(id).ok_or_else(|| CliError::NotFound(id.to_string()))?;
        let removed = self.products.remove(index);
        self.save(remote).await;
        Ok(removed)
    }

    /// Every product whose id equals `query` exactly or whose name contains
    /// `query` case-insensitively. An empty result is a normal outcome.
    pub fn find(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.id == query || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CliError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn positive_quantity(quantity: u32) -> Result<(), CliError> {
    if quantity == 0 {
        return Err(CliError::Validation(
            "quantity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn positive_price(price: f64) -> Result<(), CliError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CliError::Validation(
            "price must be a positive number".to_string(),
        ));
    }
    Ok(())
}
