//! A shopping session: catalog, basket and checkout wired to the API.

use larek_commerce::view::{
    BasketCounter, BasketListView, CheckoutDialogs, ClickTarget, ProductCardView,
    ProductDetailView, SuccessView,
};
use larek_commerce::{
    Basket, CatalogPage, CheckoutFlow, CommerceError, PaymentMethod, Product, ProductId,
};
use tracing::{error, warn};

use crate::{ApiUrls, CheckoutError, FetchClient, OrderSubmissionClient, ProductCatalogClient};

/// One customer's storefront session.
///
/// Owns the single [`Basket`] and [`CheckoutFlow`]; views are handed out
/// already subscribed to the basket. The checkout dialogs follow the flow
/// after every step change.
#[derive(Debug)]
pub struct Storefront {
    catalog_client: ProductCatalogClient,
    orders: OrderSubmissionClient,
    cdn_url: String,
    catalog: CatalogPage,
    basket: Basket,
    checkout: CheckoutFlow,
    dialogs: CheckoutDialogs,
}

impl Storefront {
    pub fn new(
        catalog_client: ProductCatalogClient,
        orders: OrderSubmissionClient,
        cdn_url: impl Into<String>,
    ) -> Self {
        let basket = Basket::new();
        let dialogs = CheckoutDialogs::new(&basket);
        Self {
            catalog_client,
            orders,
            cdn_url: cdn_url.into(),
            catalog: CatalogPage::empty(),
            basket,
            checkout: CheckoutFlow::new(),
            dialogs,
        }
    }

    /// Build both endpoint clients from one shared client.
    pub fn connect(client: FetchClient, urls: &ApiUrls) -> Self {
        let client = client.with_base_url(urls.api_url.clone());
        Self::new(
            ProductCatalogClient::new(client.clone()),
            OrderSubmissionClient::new(client),
            urls.cdn_url.clone(),
        )
    }

    /// Fetch the catalog, replacing the current one. An unreachable API
    /// leaves the catalog empty.
    pub async fn load_catalog(&mut self) -> &CatalogPage {
        self.catalog = self.catalog_client.get_products().await;
        &self.catalog
    }

    pub fn catalog(&self) -> &CatalogPage {
        &self.catalog
    }

    pub fn cdn_url(&self) -> &str {
        &self.cdn_url
    }

    pub fn product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.catalog
            .find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.clone()))
    }

    /// Gallery cards in catalog order.
    pub fn cards(&self) -> Vec<ProductCardView> {
        self.catalog
            .items
            .iter()
            .map(|p| ProductCardView::new(p.clone(), self.cdn_url.clone()))
            .collect()
    }

    /// Open the detail dialog for a product.
    pub fn preview(&self, id: &ProductId) -> Result<ProductDetailView, CommerceError> {
        let card = ProductCardView::new(self.product(id)?.clone(), self.cdn_url.clone());
        let mut view = ProductDetailView::new(card, &self.basket);
        view.modal_mut().open();
        Ok(view)
    }

    /// Buy or un-buy a product. Returns whether it is in the basket afterwards.
    pub fn toggle_product(&mut self, id: &ProductId) -> Result<bool, CommerceError> {
        let view = self.preview(id)?;
        view.toggle(&mut self.basket)
    }

    /// Remove a line from the basket dialog. Unknown IDs are ignored.
    pub fn remove_from_basket(&mut self, id: &ProductId) -> bool {
        self.basket.remove(id)
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn basket_counter(&self) -> BasketCounter {
        BasketCounter::new(&self.basket)
    }

    pub fn basket_list(&self) -> BasketListView {
        self.dialogs.basket().clone()
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn dialogs(&self) -> &CheckoutDialogs {
        &self.dialogs
    }

    /// Route a click on the open checkout dialog. Overlay and close-button
    /// clicks close the current step.
    pub fn handle_click(&mut self, target: ClickTarget) -> Result<bool, CommerceError> {
        self.dialogs.handle_click(&mut self.checkout, target)
    }

    pub fn open_basket(&mut self) -> Result<(), CommerceError> {
        let result = self.checkout.open_basket();
        self.synced(result)
    }

    pub fn place_order(&mut self) -> Result<(), CommerceError> {
        let result = self.checkout.place_order(&self.basket);
        self.synced(result)
    }

    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<bool, CommerceError> {
        self.checkout.select_payment(method)
    }

    pub fn enter_address(&mut self, value: impl Into<String>) -> Result<(), CommerceError> {
        self.checkout.enter_address(value)
    }

    pub fn continue_to_contacts(&mut self) -> Result<(), CommerceError> {
        let result = self.checkout.continue_to_contacts();
        self.synced(result)
    }

    pub fn enter_email(&mut self, value: impl Into<String>) -> Result<(), CommerceError> {
        self.checkout.enter_email(value)
    }

    pub fn enter_phone(&mut self, value: impl Into<String>) -> Result<(), CommerceError> {
        self.checkout.enter_phone(value)
    }

    /// Assemble the order from the current basket and post it.
    ///
    /// On success the basket is cleared and the success dialog is returned.
    /// On failure the flow stays on the contacts step with every input kept.
    /// Dropping the future before the server answers counts as a failure.
    pub async fn submit_order(&mut self) -> Result<SuccessView, CheckoutError> {
        let draft = self.checkout.begin_submit(&self.basket)?;
        self.dialogs.sync(&self.checkout);

        let outcome = {
            let mut submission = Submission {
                flow: &mut self.checkout,
            };
            match self.orders.post_order(&draft).await {
                Ok(confirmation) => submission
                    .flow
                    .complete_submit(&mut self.basket, &confirmation)
                    .map_err(CheckoutError::from),
                Err(e) => {
                    error!(error = %e, "order submission failed");
                    submission.flow.fail_submit(e.to_string())?;
                    Err(CheckoutError::Submission(e))
                }
            }
        };
        self.dialogs.sync(&self.checkout);

        outcome?;
        Ok(self.dialogs.success().clone())
    }

    pub fn dismiss_success(&mut self) -> Result<(), CommerceError> {
        let result = self.checkout.dismiss_success();
        self.synced(result)
    }

    /// Close the open dialog, if any.
    pub fn close(&mut self) -> Result<(), CommerceError> {
        let result = self.checkout.close();
        self.synced(result)
    }

    fn synced<T>(&mut self, result: Result<T, CommerceError>) -> Result<T, CommerceError> {
        self.dialogs.sync(&self.checkout);
        result
    }
}

/// An order in flight. Puts the flow back on the contacts step if dropped
/// before the server answered.
struct Submission<'a> {
    flow: &'a mut CheckoutFlow,
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if self.flow.is_submitting() && self.flow.fail_submit("submission cancelled").is_ok() {
            warn!("order submission cancelled before the server answered");
        }
    }
}
