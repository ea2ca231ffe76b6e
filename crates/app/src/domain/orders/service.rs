//! Orders Service

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::database::Db;
use crate::domain::carts::records::lines_total;
use crate::domain::carts::repositories::{PgCartLinesRepository, PgCartsRepository};
use crate::domain::orders::data::NewPayment;
use crate::domain::orders::errors::OrdersServiceError;
use crate::domain::orders::records::{
    Order, OrderLineUuid, OrderRecord, OrderUuid, PaymentRecord, PaymentUuid,
};
use crate::domain::orders::repositories::{PgOrdersRepository, PgPaymentsRepository};
use crate::domain::orders::status::{OrderStatus, PaymentStatus};
use crate::identity::UserUuid;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    payments_repository: PgPaymentsRepository,
    carts_repository: PgCartsRepository,
    cart_lines_repository: PgCartLinesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            payments_repository: PgPaymentsRepository::new(),
            carts_repository: PgCartsRepository::new(),
            cart_lines_repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.checkout",
        skip(self),
        fields(user_uuid = %user, order_uuid = tracing::field::Empty),
        err
    )]
    async fn checkout(&self, user: UserUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        // Locks the cart row so concurrent adds for the same user wait
        // until this checkout commits or rolls back.
        let cart = self
            .carts_repository
            .lock_for_user(&mut tx, user)
            .await?
            .ok_or(OrdersServiceError::EmptyCart)?;

        let cart_lines = self
            .cart_lines_repository
            .list_lines(&mut tx, cart.uuid)
            .await?;

        if cart_lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        if self
            .orders_repository
            .find_pending_for_user(&mut tx, user)
            .await?
            .is_some()
        {
            return Err(OrdersServiceError::ActiveOrderExists);
        }

        let total_amount = lines_total(&cart_lines);

        let order = self
            .orders_repository
            .create_order(&mut tx, OrderUuid::new(), user, total_amount)
            .await?;

        let mut lines = Vec::with_capacity(cart_lines.len());

        for cart_line in &cart_lines {
            let line = self
                .orders_repository
                .insert_line(
                    &mut tx,
                    OrderLineUuid::new(),
                    order.uuid,
                    cart_line.variant_uuid,
                    cart_line.quantity,
                    cart_line.price_at_time,
                )
                .await?;

            lines.push(line);
        }

        self.cart_lines_repository.clear(&mut tx, cart.uuid).await?;

        tx.commit().await?;

        tracing::Span::current().record("order_uuid", tracing::field::display(order.uuid));

        info!(
            order_uuid = %order.uuid,
            total_amount = order.total_amount,
            line_count = lines.len(),
            "checked out cart into order"
        );

        Ok(Order { order, lines })
    }

    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .orders_repository
            .get_order(&mut tx, order)
            .await?
            .filter(|record| record.user_uuid == user)
            .ok_or(OrdersServiceError::NotFound)?;

        let lines = self.orders_repository.list_lines(&mut tx, order).await?;

        tx.commit().await?;

        Ok(Order {
            order: record,
            lines,
        })
    }

    async fn set_order_status(
        &self,
        user: UserUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .orders_repository
            .lock_order(&mut tx, order)
            .await?
            .filter(|record| record.user_uuid == user)
            .ok_or(OrdersServiceError::NotFound)?;

        if !record.order_status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidOrderTransition {
                from: record.order_status,
                to: status,
            });
        }

        let updated = self
            .orders_repository
            .set_status(&mut tx, order, status)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(
        name = "orders.service.record_payment",
        skip(self, payment),
        fields(
            user_uuid = %user,
            order_uuid = %payment.order_uuid,
            payment_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn record_payment(
        &self,
        user: UserUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .lock_order(&mut tx, payment.order_uuid)
            .await?
            .filter(|record| record.user_uuid == user)
            .ok_or(OrdersServiceError::NotFound)?;

        if self
            .payments_repository
            .get_by_order(&mut tx, order.uuid)
            .await?
            .is_some()
        {
            return Err(OrdersServiceError::PaymentAlreadyExists);
        }

        // The charged amount is the order total at payment time. Coupon
        // redemptions adjust the order total before this point, never after.
        let created = self
            .payments_repository
            .create_payment(
                &mut tx,
                PaymentUuid::new(),
                order.uuid,
                payment.method,
                payment.status,
                order.total_amount,
            )
            .await?;

        tx.commit().await?;

        tracing::Span::current().record("payment_uuid", tracing::field::display(created.uuid));

        info!(
            payment_uuid = %created.uuid,
            amount = created.amount,
            "recorded payment"
        );

        Ok(created)
    }

    async fn set_payment_status(
        &self,
        user: UserUuid,
        payment: PaymentUuid,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .payments_repository
            .lock_for_user(&mut tx, payment, user)
            .await?
            .ok_or(OrdersServiceError::PaymentNotFound)?;

        if !record.payment_status.can_transition_to(status) {
            return Err(OrdersServiceError::InvalidPaymentTransition {
                from: record.payment_status,
                to: status,
            });
        }

        let updated = self
            .payments_repository
            .set_status(&mut tx, payment, status)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Freezes the user's cart lines into a new pending order and empties
    /// the cart, all in one transaction.
    async fn checkout(&self, user: UserUuid) -> Result<Order, OrdersServiceError>;

    /// Fetches one of the user's orders with its lines.
    async fn get_order(
        &self,
        user: UserUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// Advances the order through its status machine.
    async fn set_order_status(
        &self,
        user: UserUuid,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Records the single payment for an order, charging the order total.
    async fn record_payment(
        &self,
        user: UserUuid,
        payment: NewPayment,
    ) -> Result<PaymentRecord, OrdersServiceError>;

    /// Resolves a pending payment to completed or failed.
    async fn set_payment_status(
        &self,
        user: UserUuid,
        payment: PaymentUuid,
        status: PaymentStatus,
    ) -> Result<PaymentRecord, OrdersServiceError>;
}
