//! In-memory [`OrderSource`] for handler tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use orderwatch_core::{
    Customer, Fulfillment, Metafield, MetafieldList, MetafieldValue, OrderName, UpstreamOrder,
};
use orderwatch_shopify::{OrderSource, UpstreamError};

/// Canned reply for the order search.
#[derive(Debug, Clone)]
pub(crate) enum OrdersReply {
    Orders(Vec<UpstreamOrder>),
    Status(u16),
    Garbled,
    Panic,
}

/// Canned reply for the metafield listing.
#[derive(Debug, Clone)]
pub(crate) enum MetafieldsReply {
    List(MetafieldList),
    Status(u16),
}

#[derive(Debug)]
pub(crate) struct FakeSource {
    orders: OrdersReply,
    metafields: MetafieldsReply,
    searched: Mutex<Vec<String>>,
    metafield_calls: AtomicUsize,
}

impl FakeSource {
    pub(crate) fn new(orders: OrdersReply, metafields: MetafieldsReply) -> Self {
        Self {
            orders,
            metafields,
            searched: Mutex::new(Vec::new()),
            metafield_calls: AtomicUsize::new(0),
        }
    }

    /// One order, no metafields.
    pub(crate) fn with_order(order: UpstreamOrder) -> Self {
        Self::new(OrdersReply::Orders(vec![order]), MetafieldsReply::List(MetafieldList::default()))
    }

    pub(crate) fn searched(&self) -> Vec<String> {
        match self.searched.lock() {
            Ok(names) => names.clone(),
            Err(e) => panic!("fake lock poisoned: {e}"),
        }
    }

    pub(crate) fn metafield_calls(&self) -> usize {
        self.metafield_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderSource for FakeSource {
    async fn find_orders(&self, name: &OrderName) -> Result<Vec<UpstreamOrder>, UpstreamError> {
        match self.searched.lock() {
            Ok(mut names) => names.push(name.as_str().to_owned()),
            Err(e) => panic!("fake lock poisoned: {e}"),
        }
        match &self.orders {
            OrdersReply::Orders(orders) => Ok(orders.clone()),
            OrdersReply::Status(status) => Err(UpstreamError::Status { status: *status }),
            OrdersReply::Garbled => Err(UpstreamError::Decode {
                endpoint: "orders.json",
                reason: "expected value at line 1 column 1".to_owned(),
            }),
            OrdersReply::Panic => panic!("order source exploded"),
        }
    }

    async fn order_metafields(&self, _order_id: u64) -> Result<MetafieldList, UpstreamError> {
        self.metafield_calls.fetch_add(1, Ordering::SeqCst);
        match &self.metafields {
            MetafieldsReply::List(list) => Ok(list.clone()),
            MetafieldsReply::Status(status) => Err(UpstreamError::Status { status: *status }),
        }
    }
}

pub(crate) fn order(email: Option<&str>, fulfillments: Vec<Fulfillment>) -> UpstreamOrder {
    UpstreamOrder {
        id: 5_512_345_678_901,
        name: "#1001".to_owned(),
        email: email.map(str::to_owned),
        financial_status: Some("paid".to_owned()),
        fulfillment_status: None,
        customer: Some(Customer { first_name: Some("Ada".to_owned()) }),
        fulfillments,
    }
}

pub(crate) fn fulfillment(shipment_status: Option<&str>) -> Fulfillment {
    Fulfillment {
        shipment_status: shipment_status.map(str::to_owned),
        tracking_number: Some("1Z999AA10123456784".to_owned()),
        tracking_url: Some("https://www.ups.com/track?tracknum=1Z999AA10123456784".to_owned()),
    }
}

pub(crate) fn custom_status(value: &str) -> MetafieldList {
    MetafieldList {
        metafields: vec![Metafield {
            namespace: Some("custom".to_owned()),
            key: Some("shipping_status".to_owned()),
            value: Some(MetafieldValue::Text(value.to_owned())),
        }],
    }
}
