//! # Ledger Client
//!
//! Async handle for talking to the [`LedgerActor`](super::LedgerActor).

use super::{LedgerError, LedgerRequest, Response};
use crate::inventory::{InventorySnapshot, RefreshReport};
use crate::model::{Cart, CustomerInfo, OrderRecord};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable sender half of the ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> LedgerRequest,
    ) -> Result<T, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    /// Re-reads the ledger file into the actor's store.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<RefreshReport, LedgerError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::Refresh { respond_to })
            .await
    }

    /// Copy of the inventory as the actor currently sees it.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<InventorySnapshot, LedgerError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::Snapshot { respond_to })
            .await
    }

    /// Commits `cart` against the ledger and records the order.
    #[instrument(skip(self, cart), fields(lines = cart.len()))]
    pub async fn checkout(
        &self,
        customer: CustomerInfo,
        cart: Cart,
    ) -> Result<OrderRecord, LedgerError> {
        debug!("Sending request");
        self.request(|respond_to| LedgerRequest::Checkout {
            customer,
            cart,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::mock::{create_mock_client, expect_checkout, expect_refresh};
    use crate::model::{ItemKey, OrderId};
    use crate::orders::OrderError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn potato_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(ItemKey::new("potato", Decimal::from_str("1.35").unwrap()), 23).unwrap();
        cart
    }

    #[tokio::test]
    async fn test_checkout_round_trip() {
        let (client, mut receiver) = create_mock_client(10);

        // Spawn task to call checkout
        let checkout_task = tokio::spawn(async move {
            client
                .checkout(CustomerInfo::new("John", "Doe"), potato_cart())
                .await
        });

        // Expect the checkout request
        let (customer, cart, responder) = expect_checkout(&mut receiver)
            .await
            .expect("Expected Checkout request");
        assert_eq!(customer.full_name(), "John Doe");
        assert_eq!(cart.total_quantity(), 23);

        // Respond with a recorded order
        let record = OrderRecord::new(OrderId::new(&customer, 1), customer, cart);
        responder.send(Ok(record)).unwrap();

        let result = checkout_task.await.unwrap().expect("Checkout failed");
        assert_eq!(result.id.as_str(), "John_Doe_1");
    }

    #[tokio::test]
    async fn test_checkout_error_is_passed_through() {
        let (client, mut receiver) = create_mock_client(10);

        let checkout_task = tokio::spawn(async move {
            client
                .checkout(CustomerInfo::new("John", "Doe"), potato_cart())
                .await
        });

        let (_, _, responder) = expect_checkout(&mut receiver).await.unwrap();
        responder
            .send(Err(OrderError::SequenceExhausted.into()))
            .unwrap();

        let result = checkout_task.await.unwrap();
        assert!(matches!(
            result,
            Err(LedgerError::Order(OrderError::SequenceExhausted))
        ));
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert!(matches!(client.refresh().await, Err(LedgerError::ActorClosed)));
    }

    #[tokio::test]
    async fn test_dropped_responder() {
        let (client, mut receiver) = create_mock_client(10);

        let refresh_task = tokio::spawn(async move { client.refresh().await });
        let responder = expect_refresh(&mut receiver).await.unwrap();
        drop(responder);

        let result = refresh_task.await.unwrap();
        assert!(matches!(result, Err(LedgerError::ActorDropped)));
    }
}
