//! Product CRUD and availability views.

use log::warn;
use serde_json::json;

use super::{photo_part, ApiClient};
use crate::availability::{derive_availability, ProductAvailability};
use crate::error::Result;
use crate::guard::Route;
use crate::models::Product;
use crate::params::{CreateProduct, UpdateProduct};

impl ApiClient {
    /// Lists all products.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/produk"));
        self.send(request, &session.token).await
    }

    /// Fetches a single product by ID.
    pub async fn get_product(&self, id: u64) -> Result<Product> {
        let session = self.require_session()?;
        let request = self.http.get(self.url(&format!("/api/produk/{id}")));
        self.send(request, &session.token).await
    }

    /// Lists products the backend itself flags as available.
    ///
    /// The backend's flag lags the borrowing table; prefer
    /// [`list_products_with_availability`](Self::list_products_with_availability)
    /// when the derived figure matters.
    pub async fn list_available_products(&self) -> Result<Vec<Product>> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/produk/status/tersedia"));
        self.send(request, &session.token).await
    }

    /// Lists products at or below their minimum-stock threshold.
    pub async fn list_low_stock_products(&self) -> Result<Vec<Product>> {
        let session = self.require_session()?;
        let request = self
            .http
            .get(self.url("/api/produk/peringatan/stok-rendah"));
        self.send(request, &session.token).await
    }

    /// Lists products joined with their derived availability.
    ///
    /// Availability is computed client-side from the full borrowing list.
    /// When that list cannot be fetched, each product degrades to the
    /// optimistic product-only view rather than failing the whole listing.
    pub async fn list_products_with_availability(&self) -> Result<Vec<ProductAvailability>> {
        let products = self.list_products().await?;
        match self.list_borrowings(&Default::default()).await {
            Ok(borrowings) => Ok(derive_availability(products, &borrowings)),
            Err(e) => {
                warn!("Falling back to product-only availability: {e}");
                Ok(products
                    .into_iter()
                    .map(ProductAvailability::from_product_only)
                    .collect())
            }
        }
    }

    /// Derived availability for a single product.
    pub async fn product_availability(&self, id: u64) -> Result<ProductAvailability> {
        let product = self.get_product(id).await?;
        match self.list_borrowings(&Default::default()).await {
            Ok(borrowings) => Ok(ProductAvailability::derive(product, &borrowings)),
            Err(e) => {
                warn!("Falling back to product-only availability: {e}");
                Ok(ProductAvailability::from_product_only(product))
            }
        }
    }

    /// Creates a product (admin only).
    pub async fn create_product(&self, params: &CreateProduct) -> Result<Product> {
        params.validate()?;
        let session = self.require_route(Route::AdminInventory)?;
        let url = self.url("/api/produk");
        let request = match &params.photo {
            Some(path) => {
                let mut form = reqwest::multipart::Form::new()
                    .text("nama", params.name.clone())
                    .text("jumlah_stok", params.total_stock.to_string());
                if let Some(description) = &params.description {
                    form = form.text("deskripsi", description.clone());
                }
                if let Some(category_id) = params.category_id {
                    form = form.text("kategori_id", category_id.to_string());
                }
                if let Some(minimum) = params.minimum_stock {
                    form = form.text("stok_minimum", minimum.to_string());
                }
                self.http
                    .post(url)
                    .multipart(form.part("foto", photo_part(path)?))
            }
            None => self.http.post(url).json(&json!({
                "nama": params.name,
                "deskripsi": params.description,
                "kategori_id": params.category_id,
                "jumlah_stok": params.total_stock,
                "stok_minimum": params.minimum_stock,
            })),
        };
        self.send(request, &session.token).await
    }

    /// Updates a product (admin only).
    pub async fn update_product(&self, params: &UpdateProduct) -> Result<Product> {
        params.validate()?;
        let session = self.require_route(Route::AdminInventory)?;
        let url = self.url(&format!("/api/produk/{}", params.id));
        let request = match &params.photo {
            Some(path) => {
                let mut form = reqwest::multipart::Form::new();
                if let Some(name) = &params.name {
                    form = form.text("nama", name.clone());
                }
                if let Some(description) = &params.description {
                    form = form.text("deskripsi", description.clone());
                }
                if let Some(category_id) = params.category_id {
                    form = form.text("kategori_id", category_id.to_string());
                }
                if let Some(total) = params.total_stock {
                    form = form.text("jumlah_stok", total.to_string());
                }
                if let Some(minimum) = params.minimum_stock {
                    form = form.text("stok_minimum", minimum.to_string());
                }
                self.http
                    .put(url)
                    .multipart(form.part("foto", photo_part(path)?))
            }
            None => self.http.put(url).json(&json!({
                "nama": params.name,
                "deskripsi": params.description,
                "kategori_id": params.category_id,
                "jumlah_stok": params.total_stock,
                "stok_minimum": params.minimum_stock,
            })),
        };
        self.send(request, &session.token).await
    }

    /// Deletes a product (admin only).
    pub async fn delete_product(&self, id: u64) -> Result<()> {
        let session = self.require_route(Route::AdminInventory)?;
        let response = self
            .http
            .delete(self.url(&format!("/api/produk/{id}")))
            .bearer_auth(&session.token)
            .send()
            .await?;
        self.expect_success(response).await
    }
}
