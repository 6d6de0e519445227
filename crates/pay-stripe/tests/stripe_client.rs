//! StripeClient against a mock Stripe API.

use pay_core::{
    CheckoutSessionParams, GatewaySettings, IntentRequest, PaymentIntentParams, PaymentProcessor,
    ProcessorError,
};
use pay_stripe::{StripeClient, StripeConfig};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> StripeClient {
    let config = StripeConfig::new("sk_test_gateway").with_api_base_url(server.uri());
    StripeClient::new(config).unwrap()
}

#[tokio::test]
async fn creates_checkout_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(header("authorization", "Bearer sk_test_gateway"))
        .and(body_string_contains("mode=payment"))
        .and(body_string_contains("payment_method_types%5B0%5D=card"))
        .and(body_string_contains("line_items%5B0%5D%5Bprice%5D=price_123"))
        .and(body_string_contains("line_items%5B0%5D%5Bquantity%5D=1"))
        .and(body_string_contains(
            "success_url=https%3A%2F%2Fvetgo-book.netlify.app%2Fsuccess",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cs_test_abc",
            "object": "checkout.session",
            "url": "https://checkout.stripe.com/c/pay/cs_test_abc",
            "expires_at": 1700000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stripe = client_for(&server).await;
    let params = CheckoutSessionParams::payment(
        vec![json!({"price": "price_123", "quantity": 1})],
        &GatewaySettings::default(),
    );

    let session = stripe.create_checkout_session(&params).await.unwrap();
    assert_eq!(session.id, "cs_test_abc");
    assert!(session.expires_at.is_some());
}

#[tokio::test]
async fn creates_payment_intent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header("stripe-version", "2024-12-18.acacia"))
        .and(body_string_contains("amount=1000"))
        .and(body_string_contains("currency=usd"))
        .and(body_string_contains("automatic_payment_methods%5Benabled%5D=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_test",
            "object": "payment_intent",
            "amount": 1000,
            "currency": "usd",
            "status": "requires_payment_method",
            "client_secret": "pi_test_secret_xyz",
            "created": 1700000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stripe = client_for(&server).await;
    let params = PaymentIntentParams::from(IntentRequest::new(1000, "usd"));

    let intent = stripe.create_payment_intent(&params).await.unwrap();
    assert_eq!(intent.client_secret, "pi_test_secret_xyz");
    assert_eq!(intent.status, "requires_payment_method");
}

#[tokio::test]
async fn relays_stripe_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": {
                "type": "card_error",
                "code": "card_declined",
                "message": "Your card was declined."
            }
        })))
        .mount(&server)
        .await;

    let stripe = client_for(&server).await;
    let params = PaymentIntentParams::from(IntentRequest::new(500, "cad"));

    let err = stripe.create_payment_intent(&params).await.unwrap_err();
    assert_eq!(err.to_string(), "Your card was declined.");
    assert!(matches!(err, ProcessorError::Rejected { status: 402, .. }));
}

#[tokio::test]
async fn rejects_unparseable_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let stripe = client_for(&server).await;
    let params =
        CheckoutSessionParams::payment(vec![json!({"price": "p"})], &GatewaySettings::default());

    let err = stripe.create_checkout_session(&params).await.unwrap_err();
    assert!(matches!(err, ProcessorError::InvalidResponse(_)));
}

#[tokio::test]
async fn reports_network_failure() {
    // Nothing listens on port 1
    let config = StripeConfig::new("sk_test_gateway").with_api_base_url("http://127.0.0.1:1");
    let stripe = StripeClient::new(config).unwrap();
    let params = PaymentIntentParams::from(IntentRequest::new(500, "cad"));

    let err = stripe.create_payment_intent(&params).await.unwrap_err();
    assert!(matches!(err, ProcessorError::Network(_)));
}
