//! Page session: product list, loading flag, filter selection, contact form.
//!
//! One session per page, owned by one task and mutated only through the
//! methods below. Every catalog mutation republishes a [`CatalogView`] to
//! subscribers; the view is recomputed from scratch each time.

use tokio::sync::watch;

use klimatpro_catalog::{Catalog, Facets, FilterSelection, PriceRange, Product};
use klimatpro_core::DomainResult;

use crate::inquiry::{ContactForm, InquiryError, InquirySink};
use crate::source::ProductSource;
use crate::types::CatalogView;

#[derive(Debug)]
pub struct StorefrontSession {
    catalog: Catalog,
    facets: Facets,
    selection: FilterSelection,
    loading: bool,
    contact: ContactForm,
    view_tx: watch::Sender<CatalogView>,
}

impl StorefrontSession {
    /// Empty catalog, unrestricted selection over `[0, price_max]`.
    pub fn new(price_max: u64) -> Self {
        let selection = FilterSelection::unrestricted(price_max);
        let (view_tx, _) = watch::channel(CatalogView {
            loading: false,
            selection: selection.clone(),
            facets: Facets::default(),
            products: Vec::new(),
            found: 0,
        });

        Self {
            catalog: Catalog::empty(),
            facets: Facets::default(),
            selection,
            loading: false,
            contact: ContactForm::new(),
            view_tx,
        }
    }

    /// Receiver that always holds the latest [`CatalogView`].
    pub fn subscribe(&self) -> watch::Receiver<CatalogView> {
        self.view_tx.subscribe()
    }

    // -------------------------
    // Product source
    // -------------------------

    /// Enter the loading state (catalog area shows a loading indicator).
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.publish();
    }

    /// Replace the product list wholesale and leave the loading state.
    ///
    /// A list that breaks catalog invariants is treated like a failed load.
    pub fn finish_load(&mut self, products: Vec<Product>) {
        self.catalog = Catalog::from_products(products).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding invalid product list");
            Catalog::empty()
        });
        self.facets = self.catalog.facets();
        self.loading = false;
        tracing::debug!(
            products = self.catalog.len(),
            brands = self.facets.brands.len(),
            types = self.facets.types.len(),
            "catalog replaced"
        );
        self.publish();
    }

    /// One load from `source`. If the source never answers, the session
    /// stays in the loading state.
    pub async fn load_from(&mut self, source: &dyn ProductSource) {
        self.begin_load();
        let products = source.load().await;
        self.finish_load(products);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    // -------------------------
    // Filter & selection
    // -------------------------

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.catalog.visible(&self.selection)
    }

    /// Price bound checked against the session's slider maximum.
    pub fn price_range(&self, low: u64, high: u64) -> DomainResult<PriceRange> {
        self.selection.price_range_for(low, high)
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.selection.set_price_range(range);
        self.publish();
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.selection.toggle_brand(brand);
        self.publish();
    }

    pub fn toggle_type(&mut self, kind: &str) {
        self.selection.toggle_type(kind);
        self.publish();
    }

    pub fn reset_filters(&mut self) {
        self.selection.reset();
        self.publish();
    }

    pub fn view(&self) -> CatalogView {
        let products: Vec<Product> = self.visible().into_iter().cloned().collect();
        CatalogView {
            loading: self.loading,
            selection: self.selection.clone(),
            facets: self.facets.clone(),
            found: products.len(),
            products,
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }

    // -------------------------
    // Contact form
    // -------------------------

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Submit the contact form to `sink`.
    ///
    /// Only an incomplete form is reported back. A sink failure is logged and
    /// otherwise swallowed: the form is cleared and the visitor sees nothing.
    pub async fn submit_inquiry(&mut self, sink: &dyn InquirySink) -> DomainResult<()> {
        match self.contact.submit(sink).await {
            Ok(()) => Ok(()),
            Err(InquiryError::Incomplete(e)) => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "inquiry sink failed; submission lost");
                Ok(())
            }
        }
    }
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self::new(klimatpro_catalog::DEFAULT_PRICE_MAX)
    }
}
