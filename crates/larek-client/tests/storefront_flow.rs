//! End-to-end shopping sessions against a scripted transport.

use async_trait::async_trait;
use larek_client::{
    ApiUrls, CheckoutError, FetchClient, FetchError, Method, RequestBuilder, Response,
    Storefront, Transport,
};
use larek_commerce::view::ClickTarget;
use larek_commerce::{CheckoutStep, CommerceError, PaymentMethod, Price, ProductId};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const CATALOG: &str = r#"{
    "total": 3,
    "items": [
        {
            "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
            "description": "Если планируете решать задачи в тренажёре, берите два.",
            "image": "/5_Dots.svg",
            "title": "+1 час в сутках",
            "category": "софт-скил",
            "price": 750
        },
        {
            "id": "c101ab44-ed99-4a54-990d-47aa2bb4e7d9",
            "description": "Лизните этот леденец, чтобы мгновенно запоминать и узнавать любой цветовой код CSS.",
            "image": "/Shell.svg",
            "title": "HEX-леденец",
            "category": "другое",
            "price": 1450
        },
        {
            "id": "b06cde61-912f-4663-9751-09956c0eed67",
            "description": "Будет стоять над душой и не давать прокрастинировать.",
            "image": "/Asterisk_2.svg",
            "title": "Мамка-таймер",
            "category": "софт-скил",
            "price": null
        }
    ]
}"#;

const TIMER: &str = "854cef69-976d-4c2a-a18c-2aa45046c390";
const LOLLIPOP: &str = "c101ab44-ed99-4a54-990d-47aa2bb4e7d9";
const PRICELESS: &str = "b06cde61-912f-4663-9751-09956c0eed67";

/// Replays queued outcomes in order and records every request.
#[derive(Clone, Default)]
struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<Result<Response, FetchError>>>>,
    sent: Arc<Mutex<Vec<RequestBuilder>>>,
    stalled: Arc<AtomicBool>,
}

impl MockTransport {
    /// Never answer the next requests.
    fn stall(&self) {
        self.stalled.store(true, Ordering::SeqCst);
    }

    fn respond(&self, outcome: Result<Response, FetchError>) -> &Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    fn sent(&self) -> Vec<RequestBuilder> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.sent.lock().unwrap().push(request);
        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::RequestError("no scripted response".to_string())))
    }
}

fn storefront(transport: &MockTransport) -> Storefront {
    let urls = ApiUrls::from_origin("https://larek.test");
    Storefront::connect(FetchClient::new(transport.clone()), &urls)
}

async fn loaded_storefront(transport: &MockTransport) -> Storefront {
    transport.respond(Ok(Response::ok_json(CATALOG)));
    let mut shop = storefront(transport);
    shop.load_catalog().await;
    shop
}

fn fill_checkout(shop: &mut Storefront) {
    shop.open_basket().unwrap();
    shop.place_order().unwrap();
    shop.select_payment(PaymentMethod::OnDelivery).unwrap();
    shop.enter_address("Москва, ул. Пушкина, 1").unwrap();
    shop.continue_to_contacts().unwrap();
    shop.enter_email("buyer@example.com").unwrap();
    shop.enter_phone("+7 900 123 45 67").unwrap();
}

#[tokio::test]
async fn test_catalog_loads_with_cdn_images() {
    let transport = MockTransport::default();
    let shop = loaded_storefront(&transport).await;

    assert_eq!(shop.catalog().items.len(), 3);
    let cards = shop.cards();
    assert_eq!(cards[0].title(), "+1 час в сутках");
    assert_eq!(
        cards[1].image_url(),
        "https://larek.test/content/weblarek/Shell.svg"
    );
    assert_eq!(cards[2].price_label(), "Бесценно");

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url(), "https://larek.test/api/weblarek/product/");
}

#[tokio::test]
async fn test_unreachable_api_gives_empty_catalog() {
    let transport = MockTransport::default();
    transport.respond(Err(FetchError::Timeout));
    let mut shop = storefront(&transport);

    assert!(shop.load_catalog().await.is_empty());
    assert_eq!(
        shop.product(&ProductId::new(TIMER)),
        Err(CommerceError::ProductNotFound(ProductId::new(TIMER)))
    );
}

#[tokio::test]
async fn test_basket_views_follow_toggles() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    let counter = shop.basket_counter();
    let list = shop.basket_list();

    assert!(!list.order_button_enabled());
    assert_eq!(shop.toggle_product(&ProductId::new(TIMER)), Ok(true));
    assert_eq!(shop.toggle_product(&ProductId::new(LOLLIPOP)), Ok(true));

    assert_eq!(counter.count(), 2);
    assert!(list.order_button_enabled());
    assert_eq!(list.total_label(), "2200 синапсов");

    let preview = shop.preview(&ProductId::new(TIMER)).unwrap();
    assert_eq!(preview.action_label(), "Убрать");
    assert_eq!(shop.toggle_product(&ProductId::new(TIMER)), Ok(false));
    assert_eq!(preview.action_label(), "Купить");
    assert_eq!(counter.count(), 1);
    assert_eq!(shop.basket().total(), Price::new(1450));
}

#[tokio::test]
async fn test_priceless_product_is_refused() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;

    let preview = shop.preview(&ProductId::new(PRICELESS)).unwrap();
    assert!(!preview.action_enabled());
    assert_eq!(
        shop.toggle_product(&ProductId::new(PRICELESS)),
        Err(CommerceError::NotPurchasable(ProductId::new(PRICELESS)))
    );
    assert!(shop.basket().is_empty());
}

#[tokio::test]
async fn test_successful_checkout() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    let counter = shop.basket_counter();

    shop.toggle_product(&ProductId::new(TIMER)).unwrap();
    shop.toggle_product(&ProductId::new(LOLLIPOP)).unwrap();
    fill_checkout(&mut shop);

    transport.respond(Ok(Response::ok_json(
        r#"{"id":"28c57cb4-3002-4445-8aa1-2a06a5055ae5","total":2200}"#,
    )));
    let success = shop.submit_order().await.unwrap();

    assert_eq!(success.message(), "Списано 2200 синапсов");
    assert_eq!(shop.checkout().step(), CheckoutStep::Success);
    assert_eq!(
        shop.dialogs().active().map(|modal| modal.name()),
        Some("success")
    );
    assert!(shop.basket().is_empty());
    assert_eq!(counter.count(), 0);
    assert!(shop.checkout().payment().method().is_none());
    assert_eq!(shop.checkout().contacts().email().value(), "");

    let sent = transport.sent();
    let order = &sent[1];
    assert_eq!(order.method(), Method::Post);
    assert_eq!(order.url(), "https://larek.test/api/weblarek/order");
    assert_eq!(
        order.body_json().unwrap(),
        serde_json::json!({
            "payment": "onDelivery",
            "email": "buyer@example.com",
            "phone": "+7 900 123 45 67",
            "address": "Москва, ул. Пушкина, 1",
            "total": 2200,
            "items": [TIMER, LOLLIPOP],
        })
    );

    shop.dismiss_success().unwrap();
    assert_eq!(shop.checkout().step(), CheckoutStep::Browsing);
    assert!(shop.dialogs().active().is_none());
}

#[tokio::test]
async fn test_failed_submission_keeps_everything() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    shop.toggle_product(&ProductId::new(LOLLIPOP)).unwrap();
    fill_checkout(&mut shop);

    transport.respond(Ok(Response::new(
        400,
        HashMap::new(),
        r#"{"error":"Неверная сумма заказа"}"#.as_bytes().to_vec(),
    )));
    let err = shop.submit_order().await.unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Submission(FetchError::HttpError { status: 400, .. })
    ));
    assert_eq!(shop.checkout().step(), CheckoutStep::ContactsOpen);
    assert!(shop.checkout().last_failure().is_some());
    assert_eq!(shop.basket().len(), 1);
    assert_eq!(shop.checkout().contacts().email().value(), "buyer@example.com");

    // The customer retries from the same step.
    transport.respond(Ok(Response::ok_json(r#"{"id":"retry","total":1450}"#)));
    let success = shop.submit_order().await.unwrap();
    assert_eq!(success.message(), "Списано 1450 синапсов");
}

#[tokio::test]
async fn test_null_confirmation_is_a_failure() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    shop.toggle_product(&ProductId::new(TIMER)).unwrap();
    fill_checkout(&mut shop);

    transport.respond(Ok(Response::ok_json("null")));
    let err = shop.submit_order().await.unwrap_err();

    assert_eq!(err, CheckoutError::Submission(FetchError::EmptyBody));
    assert_eq!(shop.checkout().step(), CheckoutStep::ContactsOpen);
    assert!(!shop.basket().is_empty());
}

#[tokio::test]
async fn test_incomplete_contacts_never_reach_the_network() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    shop.toggle_product(&ProductId::new(TIMER)).unwrap();
    shop.open_basket().unwrap();
    shop.place_order().unwrap();
    shop.select_payment(PaymentMethod::Online).unwrap();
    shop.enter_address("Казань").unwrap();
    shop.continue_to_contacts().unwrap();
    shop.enter_email("not-an-email").unwrap();

    let err = shop.submit_order().await.unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::Commerce(CommerceError::CheckoutIncomplete(_))
    ));
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn test_overlay_click_closes_checkout_step() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    shop.toggle_product(&ProductId::new(LOLLIPOP)).unwrap();

    shop.open_basket().unwrap();
    assert!(shop.dialogs().basket().modal().is_open());
    assert!(shop.basket_list().modal().is_open());

    assert_eq!(shop.handle_click(ClickTarget::Content), Ok(false));
    assert_eq!(shop.checkout().step(), CheckoutStep::BasketOpen);

    assert_eq!(shop.handle_click(ClickTarget::Overlay), Ok(true));
    assert_eq!(shop.checkout().step(), CheckoutStep::Browsing);
    assert!(shop.dialogs().active().is_none());

    fill_checkout(&mut shop);
    assert!(shop.dialogs().contacts().modal().is_open());
    assert!(!shop.dialogs().payment().modal().is_open());
    assert_eq!(shop.handle_click(ClickTarget::CloseButton), Ok(true));

    // Inputs survive the close.
    shop.open_basket().unwrap();
    shop.place_order().unwrap();
    assert_eq!(
        shop.checkout().payment().address().value(),
        "Москва, ул. Пушкина, 1"
    );
    assert!(shop.dialogs().payment().next_enabled(shop.checkout()));
}

#[tokio::test]
async fn test_dropped_submission_returns_to_contacts() {
    let transport = MockTransport::default();
    let mut shop = loaded_storefront(&transport).await;
    shop.toggle_product(&ProductId::new(TIMER)).unwrap();
    fill_checkout(&mut shop);

    transport.stall();
    let attempt = tokio::time::timeout(Duration::from_millis(20), shop.submit_order()).await;
    assert!(attempt.is_err());

    assert_eq!(shop.checkout().step(), CheckoutStep::ContactsOpen);
    assert_eq!(shop.checkout().last_failure(), Some("submission cancelled"));
    assert!(shop.dialogs().contacts().modal().is_open());
    assert_eq!(shop.basket().len(), 1);
    assert_eq!(shop.close(), Ok(()));
}
