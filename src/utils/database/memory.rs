use super::Health;
use crate::modules::{
    auth::repository::{self as session_repository, Session, SessionCreationPayload, SessionRepository},
    cart::repository::{self as cart_repository, CartItem, CartLine},
    menu::repository::{self as menu_repository, CreateMenuItemPayload, MenuItem, UpdateMenuItemPayload},
    order::{
        repository::{self as order_repository, Order, OrderLine, OrderStatus, OrderSummary, PlaceOrderPayload},
        service::OrderDraft,
    },
    restaurant::repository::{
        self as restaurant_repository, CreateRestaurantPayload, Restaurant, UpdateRestaurantPayload,
    },
    user::repository::{self as user_repository, CreateUserPayload, User},
};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<Session>,
    restaurants: Vec<Restaurant>,
    menu_items: Vec<MenuItem>,
    cart_items: Vec<CartItem>,
    orders: Vec<Order>,
    order_items: Vec<OrderLine>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Process-local stand-in for PostgreSQL implementing every repository trait.
#[derive(Default)]
pub struct MemoryDatabase {
    tables: Mutex<Tables>,
    unhealthy: AtomicBool,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unhealthy(&self, unhealthy: bool) {
        self.unhealthy.store(unhealthy, Ordering::SeqCst);
    }

    pub async fn cart_items(&self) -> Vec<CartItem> {
        self.tables.lock().await.cart_items.clone()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.tables.lock().await.orders.clone()
    }

    pub async fn users(&self) -> Vec<User> {
        self.tables.lock().await.users.clone()
    }
}

#[async_trait]
impl Health for MemoryDatabase {
    async fn ping(&self) -> Result<(), String> {
        if self.unhealthy.load(Ordering::SeqCst) {
            return Err(String::from("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl user_repository::Repository for MemoryDatabase {
    async fn create(&self, payload: CreateUserPayload) -> Result<User, user_repository::Error> {
        let mut tables = self.tables.lock().await;
        if tables
            .users
            .iter()
            .any(|user| user.username == payload.username || user.email == payload.email)
        {
            return Err(user_repository::Error::UnexpectedError);
        }

        let user = User {
            id: tables.next_id(),
            username: payload.username,
            email: payload.email,
            password_hash: payload.password_hash,
            is_admin: payload.is_admin,
            created_at: now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, user_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(
        &self,
        username: String,
    ) -> Result<Option<User>, user_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: String) -> Result<Option<User>, user_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|user| user.email == email).cloned())
    }
}

#[async_trait]
impl SessionRepository for MemoryDatabase {
    async fn create(
        &self,
        payload: SessionCreationPayload,
    ) -> Result<Session, session_repository::Error> {
        let mut tables = self.tables.lock().await;
        let session = Session {
            id: tables.next_id(),
            token: payload.token,
            user_id: payload.user_id,
            expires_at: payload.expires_at,
            created_at: now(),
        };
        tables.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_by_token(
        &self,
        token: String,
    ) -> Result<Option<Session>, session_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .sessions
            .iter()
            .find(|session| session.token == token)
            .cloned())
    }

    async fn delete_by_token(&self, token: String) -> Result<(), session_repository::Error> {
        let mut tables = self.tables.lock().await;
        tables.sessions.retain(|session| session.token != token);
        Ok(())
    }
}

#[async_trait]
impl restaurant_repository::Repository for MemoryDatabase {
    async fn create(
        &self,
        payload: CreateRestaurantPayload,
    ) -> Result<Restaurant, restaurant_repository::Error> {
        let mut tables = self.tables.lock().await;
        let restaurant = Restaurant {
            id: tables.next_id(),
            name: payload.name,
            description: payload.description,
            address: payload.address,
            phone: payload.phone,
            image_url: payload.image_url,
            is_active: payload.is_active,
            created_at: now(),
        };
        tables.restaurants.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, restaurant_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .restaurants
            .iter()
            .find(|restaurant| restaurant.id == id)
            .cloned())
    }

    async fn find_many(
        &self,
        filters: restaurant_repository::Filters,
    ) -> Result<Vec<Restaurant>, restaurant_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .restaurants
            .iter()
            .filter(|restaurant| {
                filters
                    .is_active
                    .map_or(true, |is_active| restaurant.is_active == is_active)
            })
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, restaurant_repository::Error> {
        Ok(self.tables.lock().await.restaurants.len() as i64)
    }

    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateRestaurantPayload,
    ) -> Result<Option<Restaurant>, restaurant_repository::Error> {
        let mut tables = self.tables.lock().await;
        let restaurant = match tables.restaurants.iter_mut().find(|r| r.id == id) {
            Some(restaurant) => restaurant,
            None => return Ok(None),
        };

        if let Some(name) = payload.name {
            restaurant.name = name;
        }
        if let Some(description) = payload.description {
            restaurant.description = description;
        }
        if let Some(address) = payload.address {
            restaurant.address = address;
        }
        if let Some(phone) = payload.phone {
            restaurant.phone = phone;
        }
        if let Some(image_url) = payload.image_url {
            restaurant.image_url = image_url;
        }
        if let Some(is_active) = payload.is_active {
            restaurant.is_active = is_active;
        }

        Ok(Some(restaurant.clone()))
    }
}

#[async_trait]
impl menu_repository::Repository for MemoryDatabase {
    async fn create(
        &self,
        payload: CreateMenuItemPayload,
    ) -> Result<MenuItem, menu_repository::Error> {
        let mut tables = self.tables.lock().await;
        if !tables
            .restaurants
            .iter()
            .any(|restaurant| restaurant.id == payload.restaurant_id)
        {
            return Err(menu_repository::Error::UnexpectedError);
        }

        let menu_item = MenuItem {
            id: tables.next_id(),
            restaurant_id: payload.restaurant_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            image_url: payload.image_url,
            is_available: payload.is_available,
            created_at: now(),
        };
        tables.menu_items.push(menu_item.clone());
        Ok(menu_item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, menu_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.menu_items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_many_by_restaurant_id(
        &self,
        restaurant_id: i64,
        filters: menu_repository::Filters,
    ) -> Result<Vec<MenuItem>, menu_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .menu_items
            .iter()
            .filter(|item| item.restaurant_id == restaurant_id)
            .filter(|item| {
                filters
                    .is_available
                    .map_or(true, |is_available| item.is_available == is_available)
            })
            .cloned()
            .collect())
    }

    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateMenuItemPayload,
    ) -> Result<Option<MenuItem>, menu_repository::Error> {
        let mut tables = self.tables.lock().await;
        let item = match tables.menu_items.iter_mut().find(|item| item.id == id) {
            Some(item) => item,
            None => return Ok(None),
        };

        if let Some(name) = payload.name {
            item.name = name;
        }
        if let Some(description) = payload.description {
            item.description = description;
        }
        if let Some(price) = payload.price {
            item.price = price;
        }
        if let Some(category) = payload.category {
            item.category = category;
        }
        if let Some(image_url) = payload.image_url {
            item.image_url = image_url;
        }
        if let Some(is_available) = payload.is_available {
            item.is_available = is_available;
        }

        Ok(Some(item.clone()))
    }
}

fn cart_lines(tables: &Tables, user_id: i64) -> Vec<CartLine> {
    tables
        .cart_items
        .iter()
        .filter(|cart_item| cart_item.user_id == user_id)
        .filter_map(|cart_item| {
            tables
                .menu_items
                .iter()
                .find(|item| item.id == cart_item.menu_item_id)
                .map(|item| CartLine {
                    id: cart_item.id,
                    user_id: cart_item.user_id,
                    menu_item_id: cart_item.menu_item_id,
                    quantity: cart_item.quantity,
                    name: item.name.clone(),
                    price: item.price.clone(),
                    image_url: item.image_url.clone(),
                    restaurant_id: item.restaurant_id,
                    is_available: item.is_available,
                })
        })
        .collect()
}

#[async_trait]
impl cart_repository::Repository for MemoryDatabase {
    async fn increment(
        &self,
        user_id: i64,
        menu_item_id: i64,
    ) -> Result<CartItem, cart_repository::Error> {
        let mut tables = self.tables.lock().await;
        if let Some(cart_item) = tables
            .cart_items
            .iter_mut()
            .find(|c| c.user_id == user_id && c.menu_item_id == menu_item_id)
        {
            cart_item.quantity += 1;
            return Ok(cart_item.clone());
        }

        let cart_item = CartItem {
            id: tables.next_id(),
            user_id,
            menu_item_id,
            quantity: 1,
            created_at: now(),
        };
        tables.cart_items.push(cart_item.clone());
        Ok(cart_item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>, cart_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.cart_items.iter().find(|c| c.id == id).cloned())
    }

    async fn find_lines_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<CartLine>, cart_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(cart_lines(&tables, user_id))
    }

    async fn set_quantity(&self, id: i64, quantity: i32) -> Result<(), cart_repository::Error> {
        let mut tables = self.tables.lock().await;
        if let Some(cart_item) = tables.cart_items.iter_mut().find(|c| c.id == id) {
            cart_item.quantity = quantity;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), cart_repository::Error> {
        let mut tables = self.tables.lock().await;
        tables.cart_items.retain(|c| c.id != id);
        Ok(())
    }
}

fn summarize(tables: &Tables, order: &Order) -> OrderSummary {
    OrderSummary {
        order: order.clone(),
        total_items: tables
            .order_items
            .iter()
            .filter(|line| line.order_id == order.id)
            .map(|line| line.quantity as i64)
            .sum(),
    }
}

fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    orders
}

#[async_trait]
impl order_repository::Repository for MemoryDatabase {
    async fn place_from_cart(
        &self,
        payload: PlaceOrderPayload,
    ) -> Result<Order, order_repository::Error> {
        let mut tables = self.tables.lock().await;
        let lines = cart_lines(&tables, payload.user_id);
        if lines.is_empty() {
            return Err(order_repository::Error::EmptyCart);
        }

        let draft = OrderDraft::from_cart_lines(&lines);
        let order = Order {
            id: tables.next_id(),
            user_id: payload.user_id,
            total_amount: draft.total_amount,
            delivery_address: payload.delivery_address,
            phone: payload.phone,
            status: OrderStatus::Pending,
            created_at: now(),
            updated_at: None,
        };

        for (item, line) in draft.items.into_iter().zip(lines.iter()) {
            let id = tables.next_id();
            tables.order_items.push(OrderLine {
                id,
                order_id: order.id,
                menu_item_id: item.menu_item_id,
                quantity: item.quantity,
                price: item.price,
                menu_item_name: line.name.clone(),
            });
        }
        tables
            .cart_items
            .retain(|c| !draft.cart_item_ids.contains(&c.id));
        tables.orders.push(order.clone());

        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, order_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.orders.iter().find(|order| order.id == id).cloned())
    }

    async fn find_lines_by_order_id(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderLine>, order_repository::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .order_items
            .iter()
            .filter(|line| line.order_id == order_id)
            .map(|line| {
                let mut line = line.clone();
                if let Some(item) = tables.menu_items.iter().find(|i| i.id == line.menu_item_id) {
                    line.menu_item_name = item.name.clone();
                }
                line
            })
            .collect())
    }

    async fn find_summaries_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<OrderSummary>, order_repository::Error> {
        let tables = self.tables.lock().await;
        let orders = tables
            .orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect();

        Ok(newest_first(orders)
            .iter()
            .map(|order| summarize(&tables, order))
            .collect())
    }

    async fn find_many_summaries(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<OrderSummary>, order_repository::Error> {
        let tables = self.tables.lock().await;
        let limit = limit.map_or(usize::MAX, |limit| limit.max(0) as usize);

        Ok(newest_first(tables.orders.clone())
            .iter()
            .take(limit)
            .map(|order| summarize(&tables, order))
            .collect())
    }

    async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Option<Order>, order_repository::Error> {
        let mut tables = self.tables.lock().await;
        Ok(tables
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .map(|order| {
                order.status = status;
                order.updated_at = Some(now());
                order.clone()
            }))
    }
}
