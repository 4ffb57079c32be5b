//! End-to-end flow over an in-memory database: menus, foods, tables,
//! order packs, summaries and invoices.

use chrono::{Duration, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

use restaurant_server::db::models::{
    DiningTableCreate, FoodCreate, InvoiceCreate, MenuCreate, OrderCreate, OrderItemCreate,
    OrderItemUpdate, OrderPack, PaymentStatus,
};
use restaurant_server::db::repository::{
    DiningTableRepository, FoodRepository, InvoiceRepository, MenuRepository, OrderItemRepository,
    OrderRepository, RepoError,
};
use restaurant_server::{BillingError, BillingService};

async fn mem_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.expect("in-memory db");
    db.use_ns("restaurant")
        .use_db("restaurant")
        .await
        .expect("select ns/db");
    db
}

async fn seed_menu(db: &Surreal<Db>) -> String {
    let menu = MenuRepository::new(db.clone())
        .create(MenuCreate {
            name: "Dinner".to_string(),
            category: "Mains".to_string(),
            start_date: None,
            end_date: None,
        })
        .await
        .expect("create menu");
    menu.id.expect("menu id").to_string()
}

async fn seed_food(db: &Surreal<Db>, menu: &str, name: &str, unit_price: f64) -> String {
    let food = FoodRepository::new(db.clone())
        .create(FoodCreate {
            name: name.to_string(),
            unit_price,
            image: "https://example.com/dish.png".to_string(),
            menu: menu.parse().expect("menu ref"),
        })
        .await
        .expect("create food");
    food.id.expect("food id").to_string()
}

async fn seed_table(db: &Surreal<Db>, table_number: i32) -> String {
    let table = DiningTableRepository::new(db.clone())
        .create(DiningTableCreate {
            table_number,
            guest_count: 2,
        })
        .await
        .expect("create table");
    table.id.expect("table id").to_string()
}

#[tokio::test]
async fn full_order_flow_to_invoice_view() {
    let db = mem_db().await;

    let menu = seed_menu(&db).await;
    let burger = seed_food(&db, &menu, "Burger", 5.00).await;
    let fries = seed_food(&db, &menu, "Fries", 3.50).await;
    let table = seed_table(&db, 4).await;

    let item_repo = OrderItemRepository::new(db.clone());
    let (order, items) = item_repo
        .create_pack(OrderPack {
            dining_table: table.parse().expect("table ref"),
            order_items: vec![
                OrderItemCreate {
                    food: burger.parse().expect("food ref"),
                    quantity: 2.0,
                },
                OrderItemCreate {
                    food: fries.parse().expect("food ref"),
                    quantity: 1.0,
                },
            ],
        })
        .await
        .expect("create pack");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].total_price, 10.00);
    assert_eq!(items[1].total_price, 3.50);

    let order_id = order.id.clone().expect("order id").to_string();
    let billing = BillingService::new(db.clone());
    let summary = billing.order_summary(&order_id).await.expect("summary");

    assert_eq!(summary.table_number, 4);
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.payment_due, 13.50);
    assert_eq!(summary.order_items[0].name, "Burger");
    assert_eq!(summary.order_items[0].unit_price, 5.00);
    assert_eq!(summary.order_items[1].name, "Fries");

    let invoice = InvoiceRepository::new(db.clone())
        .create(InvoiceCreate {
            order: order_id.parse().expect("order ref"),
            payment_method: None,
            payment_status: None,
        })
        .await
        .expect("create invoice");

    assert_eq!(invoice.payment_status, PaymentStatus::Pending);
    assert!(invoice.payment_due_date > Utc::now());
    assert!(invoice.payment_due_date <= Utc::now() + Duration::days(1));

    let invoice_id = invoice.id.expect("invoice id").to_string();
    let view = billing.invoice_view(&invoice_id).await.expect("view");

    assert_eq!(view.invoice_id, invoice_id);
    assert_eq!(view.order_id, order_id);
    assert_eq!(view.payment_method, None);
    assert_eq!(view.payment_status, PaymentStatus::Pending);
    assert_eq!(view.table_number, 4);
    assert_eq!(view.payment_due, 13.50);
    assert_eq!(view.order_details.len(), 2);
}

#[tokio::test]
async fn summary_of_missing_order_is_not_found() {
    let db = mem_db().await;
    let billing = BillingService::new(db);

    let err = billing
        .order_summary("order:does_not_exist")
        .await
        .expect_err("missing order");
    assert!(matches!(err, BillingError::NotFound(_)));
}

#[tokio::test]
async fn summary_of_order_without_items_is_ambiguous() {
    let db = mem_db().await;

    let table = seed_table(&db, 7).await;
    let order = OrderRepository::new(db.clone())
        .create(OrderCreate {
            dining_table: table.parse().expect("table ref"),
        })
        .await
        .expect("create order");

    let order_id = order.id.expect("order id").to_string();
    let err = BillingService::new(db)
        .order_summary(&order_id)
        .await
        .expect_err("empty order");
    assert!(matches!(err, BillingError::Ambiguous(_)));
}

#[tokio::test]
async fn food_create_requires_existing_menu() {
    let db = mem_db().await;

    let err = FoodRepository::new(db)
        .create(FoodCreate {
            name: "Orphan".to_string(),
            unit_price: 1.00,
            image: "https://example.com/orphan.png".to_string(),
            menu: "menu:missing".parse().expect("menu ref"),
        })
        .await
        .expect_err("missing menu");
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn invoice_create_requires_existing_order() {
    let db = mem_db().await;

    let err = InvoiceRepository::new(db)
        .create(InvoiceCreate {
            order: "order:missing".parse().expect("order ref"),
            payment_method: None,
            payment_status: None,
        })
        .await
        .expect_err("missing order");
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn order_pack_rejects_missing_food_entirely() {
    let db = mem_db().await;

    let menu = seed_menu(&db).await;
    let burger = seed_food(&db, &menu, "Burger", 5.00).await;
    let table = seed_table(&db, 2).await;

    let item_repo = OrderItemRepository::new(db.clone());
    let err = item_repo
        .create_pack(OrderPack {
            dining_table: table.parse().expect("table ref"),
            order_items: vec![
                OrderItemCreate {
                    food: burger.parse().expect("food ref"),
                    quantity: 1.0,
                },
                OrderItemCreate {
                    food: "food:missing".parse().expect("food ref"),
                    quantity: 1.0,
                },
            ],
        })
        .await
        .expect_err("missing food");
    assert!(matches!(err, RepoError::NotFound(_)));

    // Nothing was inserted for the rejected pack
    let items = item_repo.find_all().await.expect("list items");
    assert!(items.is_empty());
    let orders = OrderRepository::new(db).find_all().await.expect("orders");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn order_item_update_recomputes_line_total() {
    let db = mem_db().await;

    let menu = seed_menu(&db).await;
    let burger = seed_food(&db, &menu, "Burger", 5.00).await;
    let table = seed_table(&db, 3).await;

    let item_repo = OrderItemRepository::new(db.clone());
    let (_, items) = item_repo
        .create_pack(OrderPack {
            dining_table: table.parse().expect("table ref"),
            order_items: vec![OrderItemCreate {
                food: burger.parse().expect("food ref"),
                quantity: 1.0,
            }],
        })
        .await
        .expect("create pack");

    let item_id = items[0].id.clone().expect("item id").to_string();
    let updated = item_repo
        .update(
            &item_id,
            OrderItemUpdate {
                food: None,
                quantity: Some(3.0),
            },
        )
        .await
        .expect("update item");

    assert_eq!(updated.quantity, 3.0);
    assert_eq!(updated.total_price, 15.00);
}

#[tokio::test]
async fn table_numbers_are_unique() {
    let db = mem_db().await;

    seed_table(&db, 9).await;
    let err = DiningTableRepository::new(db)
        .create(DiningTableCreate {
            table_number: 9,
            guest_count: 4,
        })
        .await
        .expect_err("duplicate table number");
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn food_unit_price_is_rounded_on_create() {
    let db = mem_db().await;

    let menu = seed_menu(&db).await;
    let food_id = seed_food(&db, &menu, "Truffle", 10.005).await;

    let food = FoodRepository::new(db)
        .find_by_id(&food_id)
        .await
        .expect("find food")
        .expect("food exists");
    assert_eq!(food.unit_price, 10.01);
}

#[tokio::test]
async fn db_service_opens_on_disk_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("restaurant.db");

    let service = restaurant_server::db::DbService::new(&db_path.to_string_lossy())
        .await
        .expect("open on-disk db");

    let menu = MenuRepository::new(service.db.clone())
        .create(MenuCreate {
            name: "Lunch".to_string(),
            category: "Mains".to_string(),
            start_date: None,
            end_date: None,
        })
        .await
        .expect("create menu on disk");
    assert!(menu.id.is_some());
}

#[tokio::test]
async fn menu_update_rejects_bad_windows() {
    let db = mem_db().await;

    let menu_repo = MenuRepository::new(db);
    let menu = menu_repo
        .create(MenuCreate {
            name: "Specials".to_string(),
            category: "Seasonal".to_string(),
            start_date: None,
            end_date: None,
        })
        .await
        .expect("create menu");
    let menu_id = menu.id.expect("menu id").to_string();

    let now = Utc::now();

    // Inverted window
    let err = menu_repo
        .update(
            &menu_id,
            restaurant_server::db::models::MenuUpdate {
                name: None,
                category: None,
                start_date: Some(now + Duration::days(2)),
                end_date: Some(now + Duration::days(1)),
            },
        )
        .await
        .expect_err("inverted window");
    assert!(matches!(err, RepoError::Validation(_)));

    // Window entirely in the past
    let err = menu_repo
        .update(
            &menu_id,
            restaurant_server::db::models::MenuUpdate {
                name: None,
                category: None,
                start_date: Some(now - Duration::days(2)),
                end_date: Some(now - Duration::days(1)),
            },
        )
        .await
        .expect_err("expired window");
    assert!(matches!(err, RepoError::Validation(_)));

    // Open window is accepted
    let updated = menu_repo
        .update(
            &menu_id,
            restaurant_server::db::models::MenuUpdate {
                name: None,
                category: None,
                start_date: Some(now - Duration::days(1)),
                end_date: Some(now + Duration::days(1)),
            },
        )
        .await
        .expect("valid window");
    assert!(updated.start_date.is_some());
}
