use crate::{
    modules::{
        menu::repository::CreateMenuItemPayload,
        restaurant::repository::CreateRestaurantPayload,
        user::repository::CreateUserPayload,
    },
    types::Context,
    utils::password,
};
use bigdecimal::BigDecimal;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to look up or create the admin user")]
    Admin,
    #[error("failed to hash the admin password")]
    Password,
    #[error("failed to seed sample data: {0}")]
    Seed(&'static str),
}

struct SampleItem {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    category: &'static str,
    image_url: &'static str,
}

struct SampleRestaurant {
    name: &'static str,
    description: &'static str,
    address: &'static str,
    phone: &'static str,
    image_url: &'static str,
    menu: &'static [SampleItem],
}

const SAMPLE_RESTAURANTS: &[SampleRestaurant] = &[
    SampleRestaurant {
        name: "Pizza Paradise",
        description: "Authentic Italian pizzas with fresh ingredients and traditional recipes. Family-owned since 1995.",
        address: "123 Main Street, Downtown",
        phone: "+1 (555) 123-4567",
        image_url: "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400&h=300&fit=crop",
        menu: &[
            SampleItem {
                name: "Margherita Pizza",
                description: "Classic pizza with fresh mozzarella, tomato sauce, and basil",
                price: "12.99",
                category: "Pizza",
                image_url: "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Pepperoni Pizza",
                description: "Traditional pepperoni with mozzarella cheese",
                price: "14.99",
                category: "Pizza",
                image_url: "https://images.unsplash.com/photo-1628840042765-356cda07504e?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Hawaiian Pizza",
                description: "Ham, pineapple, and mozzarella cheese",
                price: "15.99",
                category: "Pizza",
                image_url: "https://images.unsplash.com/photo-1604382354936-07c5d9983bd3?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Garlic Bread",
                description: "Fresh baked bread with garlic butter",
                price: "5.99",
                category: "Sides",
                image_url: "https://images.unsplash.com/photo-1572441713132-51c75654db73?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Caesar Salad",
                description: "Fresh romaine lettuce with Caesar dressing",
                price: "8.99",
                category: "Salads",
                image_url: "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=300&h=200&fit=crop",
            },
        ],
    },
    SampleRestaurant {
        name: "Burger House",
        description: "Gourmet burgers made with premium beef and fresh ingredients. Best burgers in town!",
        address: "456 Oak Avenue, Midtown",
        phone: "+1 (555) 234-5678",
        image_url: "https://images.unsplash.com/photo-1550547660-d9450f859349?w=400&h=300&fit=crop",
        menu: &[
            SampleItem {
                name: "Classic Cheeseburger",
                description: "Beef patty, cheese, lettuce, tomato, onion, pickles",
                price: "9.99",
                category: "Burgers",
                image_url: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Bacon BBQ Burger",
                description: "Beef patty, bacon, BBQ sauce, cheddar cheese, onion rings",
                price: "12.99",
                category: "Burgers",
                image_url: "https://images.unsplash.com/photo-1550547660-d9450f859349?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Veggie Burger",
                description: "Plant-based patty with fresh vegetables",
                price: "10.99",
                category: "Burgers",
                image_url: "https://images.unsplash.com/photo-1525059696034-4967a7290025?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "French Fries",
                description: "Crispy golden fries with your choice of seasoning",
                price: "4.99",
                category: "Sides",
                image_url: "https://images.unsplash.com/photo-1573080496219-bb080dd4f877?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Onion Rings",
                description: "Beer-battered onion rings",
                price: "5.99",
                category: "Sides",
                image_url: "https://images.unsplash.com/photo-1551218808-94e220e084d2?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Chocolate Milkshake",
                description: "Rich chocolate milkshake with whipped cream",
                price: "6.99",
                category: "Drinks",
                image_url: "https://images.unsplash.com/photo-1572490122747-3968b75cc699?w=300&h=200&fit=crop",
            },
        ],
    },
    SampleRestaurant {
        name: "Sushi Master",
        description: "Fresh sushi and Japanese cuisine. Master chefs prepare authentic dishes daily.",
        address: "789 Cherry Lane, Uptown",
        phone: "+1 (555) 345-6789",
        image_url: "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=400&h=300&fit=crop",
        menu: &[
            SampleItem {
                name: "Salmon Sashimi",
                description: "Fresh Atlantic salmon, 6 pieces",
                price: "16.99",
                category: "Sashimi",
                image_url: "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "California Roll",
                description: "Crab, avocado, cucumber, 8 pieces",
                price: "8.99",
                category: "Rolls",
                image_url: "https://images.unsplash.com/photo-1611143669185-af224c5e3252?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Dragon Roll",
                description: "Eel, cucumber, avocado, eel sauce, 8 pieces",
                price: "14.99",
                category: "Rolls",
                image_url: "https://images.unsplash.com/photo-1553621042-f6e147245754?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Miso Soup",
                description: "Traditional Japanese miso soup with tofu and seaweed",
                price: "4.99",
                category: "Soups",
                image_url: "https://images.unsplash.com/photo-1615874959471-d37d43e89acc?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Edamame",
                description: "Steamed soybeans with sea salt",
                price: "5.99",
                category: "Appetizers",
                image_url: "https://images.unsplash.com/photo-1596797038530-2c107229654b?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Green Tea",
                description: "Traditional Japanese green tea",
                price: "2.99",
                category: "Drinks",
                image_url: "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=300&h=200&fit=crop",
            },
        ],
    },
    SampleRestaurant {
        name: "Taco Fiesta",
        description: "Authentic Mexican street tacos and traditional dishes. Spice up your day!",
        address: "321 Elm Street, Riverside",
        phone: "+1 (555) 456-7890",
        image_url: "https://images.unsplash.com/photo-1565299585323-38174c3c0a5a?w=400&h=300&fit=crop",
        menu: &[
            SampleItem {
                name: "Beef Tacos",
                description: "Three soft shell tacos with seasoned beef, lettuce, cheese, and salsa",
                price: "10.99",
                category: "Tacos",
                image_url: "https://images.unsplash.com/photo-1565299585323-38174c3c0a5a?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Chicken Tacos",
                description: "Three soft shell tacos with grilled chicken, pico de gallo, and avocado",
                price: "10.99",
                category: "Tacos",
                image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Fish Tacos",
                description: "Three soft shell tacos with beer-battered fish, cabbage slaw, and chipotle sauce",
                price: "12.99",
                category: "Tacos",
                image_url: "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Guacamole & Chips",
                description: "Fresh homemade guacamole with crispy tortilla chips",
                price: "7.99",
                category: "Appetizers",
                image_url: "https://images.unsplash.com/photo-1534939561126-855b8675edd7?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Quesadilla",
                description: "Flour tortilla with melted cheese, served with sour cream and salsa",
                price: "8.99",
                category: "Main Dishes",
                image_url: "https://images.unsplash.com/photo-1618040996337-56904b7850b9?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Horchata",
                description: "Traditional Mexican rice drink with cinnamon",
                price: "4.99",
                category: "Drinks",
                image_url: "https://images.unsplash.com/photo-1544145945-f90425340c7e?w=300&h=200&fit=crop",
            },
        ],
    },
    SampleRestaurant {
        name: "Sweet Dreams Bakery",
        description: "Fresh baked goods, pastries, and desserts. Made fresh daily with love.",
        address: "654 Maple Drive, Park District",
        phone: "+1 (555) 567-8901",
        image_url: "https://images.unsplash.com/photo-1555507036-ab1f4038808a?w=400&h=300&fit=crop",
        menu: &[
            SampleItem {
                name: "Chocolate Chip Cookies",
                description: "Fresh baked cookies with premium chocolate chips, 6 pieces",
                price: "6.99",
                category: "Cookies",
                image_url: "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Blueberry Muffin",
                description: "Large muffin with fresh blueberries",
                price: "4.99",
                category: "Muffins",
                image_url: "https://images.unsplash.com/photo-1607958996343-b5e88169055f?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Croissant",
                description: "Buttery, flaky French croissant",
                price: "3.99",
                category: "Pastries",
                image_url: "https://images.unsplash.com/photo-1555507036-ab1f4038808a?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Cheesecake Slice",
                description: "New York style cheesecake with berry topping",
                price: "7.99",
                category: "Desserts",
                image_url: "https://images.unsplash.com/photo-1524351199678-941a58a3df50?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Cappuccino",
                description: "Espresso with steamed milk and foam",
                price: "4.99",
                category: "Coffee",
                image_url: "https://images.unsplash.com/photo-1572442388796-11668a67e53d?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Latte",
                description: "Espresso with steamed milk",
                price: "4.99",
                category: "Coffee",
                image_url: "https://images.unsplash.com/photo-1461023058943-07fcbe16d735?w=300&h=200&fit=crop",
            },
        ],
    },
    SampleRestaurant {
        name: "Noodle Express",
        description: "Fast and delicious Asian noodles. Perfect for a quick lunch or dinner.",
        address: "987 Pine Street, Business District",
        phone: "+1 (555) 678-9012",
        image_url: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=400&h=300&fit=crop",
        menu: &[
            SampleItem {
                name: "Chicken Ramen",
                description: "Rich chicken broth with ramen noodles, egg, and vegetables",
                price: "11.99",
                category: "Ramen",
                image_url: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Beef Lo Mein",
                description: "Stir-fried noodles with beef and vegetables",
                price: "12.99",
                category: "Noodles",
                image_url: "https://images.unsplash.com/photo-1585032226651-759b368d7246?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Pad Thai",
                description: "Thai stir-fried noodles with shrimp, tofu, and peanuts",
                price: "13.99",
                category: "Noodles",
                image_url: "https://images.unsplash.com/photo-1559314809-0d1550147b98?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Spring Rolls",
                description: "Crispy vegetable spring rolls with sweet and sour sauce, 4 pieces",
                price: "6.99",
                category: "Appetizers",
                image_url: "https://images.unsplash.com/photo-1529692236671-f1f6cf9683ba?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Wonton Soup",
                description: "Pork and shrimp wontons in clear broth",
                price: "7.99",
                category: "Soups",
                image_url: "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?w=300&h=200&fit=crop",
            },
            SampleItem {
                name: "Jasmine Tea",
                description: "Fragrant jasmine green tea",
                price: "2.99",
                category: "Drinks",
                image_url: "https://images.unsplash.com/photo-1556679343-c7306c1976bc?w=300&h=200&fit=crop",
            },
        ],
    },
];

/// Makes sure the configured admin account exists. Matches on username only.
pub async fn ensure_admin(ctx: &Context) -> Result<(), Error> {
    let config = &ctx.bootstrap;

    let existing = ctx
        .repos
        .users
        .find_by_username(config.admin_username.clone())
        .await
        .map_err(|_| Error::Admin)?;

    if existing.is_some() {
        tracing::debug!("Admin user '{}' already exists", config.admin_username);
        return Ok(());
    }

    let password_hash = password::hash(&config.admin_password).map_err(|_| Error::Password)?;

    ctx.repos
        .users
        .create(CreateUserPayload {
            username: config.admin_username.clone(),
            email: config.admin_email.clone(),
            password_hash,
            is_admin: true,
        })
        .await
        .map_err(|_| Error::Admin)?;

    tracing::info!("Created admin user '{}'", config.admin_username);
    Ok(())
}

/// Seeds the sample restaurants and their menus into an empty catalog.
pub async fn seed_sample_data(ctx: &Context) -> Result<(), Error> {
    let count = ctx
        .repos
        .restaurants
        .count()
        .await
        .map_err(|_| Error::Seed("could not count restaurants"))?;

    if count > 0 {
        tracing::debug!("Skipping sample data, {} restaurants already exist", count);
        return Ok(());
    }

    for sample in SAMPLE_RESTAURANTS {
        let restaurant = ctx
            .repos
            .restaurants
            .create(CreateRestaurantPayload {
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                address: sample.address.to_string(),
                phone: sample.phone.to_string(),
                image_url: sample.image_url.to_string(),
                is_active: true,
            })
            .await
            .map_err(|_| Error::Seed("could not create restaurant"))?;

        for item in sample.menu {
            let price = BigDecimal::from_str(item.price)
                .map_err(|_| Error::Seed("invalid sample price"))?;

            ctx.repos
                .menu_items
                .create(CreateMenuItemPayload {
                    restaurant_id: restaurant.id,
                    name: item.name.to_string(),
                    description: item.description.to_string(),
                    price,
                    category: item.category.to_string(),
                    image_url: item.image_url.to_string(),
                    is_available: true,
                })
                .await
                .map_err(|_| Error::Seed("could not create menu item"))?;
        }
    }

    tracing::info!("Seeded {} sample restaurants", SAMPLE_RESTAURANTS.len());
    Ok(())
}

pub async fn run(ctx: &Context) -> Result<(), Error> {
    if !ctx.bootstrap.init_db {
        tracing::info!("INIT_DB is off, skipping admin and sample data bootstrap");
        return Ok(());
    }

    ensure_admin(ctx).await?;
    seed_sample_data(ctx).await?;

    tracing::info!("Database initialized successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{menu::repository::Filters as MenuFilters, restaurant::repository::Filters};
    use crate::utils::testing;

    #[tokio::test]
    async fn seeds_once() {
        let (ctx, db) = testing::context();

        run(&ctx).await.unwrap();
        run(&ctx).await.unwrap();

        let restaurants = ctx.repos.restaurants.find_many(Filters::default()).await.unwrap();
        assert_eq!(restaurants.len(), 6);
        assert_eq!(restaurants[0].name, "Pizza Paradise");
        assert_eq!(db.users().await.len(), 1);

        let menu = ctx
            .repos
            .menu_items
            .find_many_by_restaurant_id(restaurants[0].id, MenuFilters::default())
            .await
            .unwrap();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu[0].price, BigDecimal::from_str("12.99").unwrap());
    }

    #[tokio::test]
    async fn does_not_seed_over_existing_restaurants() {
        let (ctx, _) = testing::context();
        testing::create_restaurant(&ctx, "Corner Cafe").await;

        seed_sample_data(&ctx).await.unwrap();

        assert_eq!(ctx.repos.restaurants.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn admin_is_not_duplicated() {
        let (ctx, db) = testing::context();

        ensure_admin(&ctx).await.unwrap();
        ensure_admin(&ctx).await.unwrap();

        let users = db.users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
        assert!(users[0].is_admin);
        assert!(password::verify("admin123", &users[0].password_hash));
    }
}
