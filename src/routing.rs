//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_by_essential_endpoint,
        get_categories_by_type_endpoint, get_categories_endpoint, get_category_count_endpoint,
        get_category_endpoint, get_discretionary_expense_categories_endpoint,
        get_essential_expense_categories_endpoint, get_fixed_income_categories_endpoint,
        get_invisible_expense_categories_endpoint, get_variable_income_categories_endpoint,
        update_category_endpoint,
    },
    endpoints,
    not_found::get_404_not_found,
    openapi::get_openapi_endpoint,
    summary::{
        get_discretionary_total_endpoint, get_essential_total_endpoint,
        get_monthly_balance_endpoint, get_monthly_expenses_endpoint, get_monthly_income_endpoint,
        get_recurring_total_endpoint, get_totals_by_category_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint,
        get_discretionary_transactions_endpoint, get_expenses_endpoint, get_income_endpoint,
        get_installment_transactions_endpoint, get_recurring_expenses_endpoint,
        get_transaction_endpoint, get_transactions_by_category_endpoint,
        get_transactions_endpoint, get_transactions_in_period_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let category_routes = Router::new()
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint)
                .put(update_category_endpoint)
                .delete(delete_category_endpoint),
        )
        .route(
            endpoints::CATEGORIES_BY_TYPE,
            get(get_categories_by_type_endpoint),
        )
        .route(
            endpoints::CATEGORIES_BY_ESSENTIAL,
            get(get_categories_by_essential_endpoint),
        )
        .route(
            endpoints::FIXED_INCOME_CATEGORIES,
            get(get_fixed_income_categories_endpoint),
        )
        .route(
            endpoints::VARIABLE_INCOME_CATEGORIES,
            get(get_variable_income_categories_endpoint),
        )
        .route(
            endpoints::ESSENTIAL_EXPENSE_CATEGORIES,
            get(get_essential_expense_categories_endpoint),
        )
        .route(
            endpoints::DISCRETIONARY_EXPENSE_CATEGORIES,
            get(get_discretionary_expense_categories_endpoint),
        )
        .route(
            endpoints::INVISIBLE_EXPENSE_CATEGORIES,
            get(get_invisible_expense_categories_endpoint),
        )
        .route(endpoints::CATEGORY_COUNT, get(get_category_count_endpoint));

    let transaction_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(endpoints::EXPENSES, get(get_expenses_endpoint))
        .route(endpoints::INCOME, get(get_income_endpoint))
        .route(
            endpoints::RECURRING_EXPENSES,
            get(get_recurring_expenses_endpoint),
        )
        .route(
            endpoints::DISCRETIONARY_TRANSACTIONS,
            get(get_discretionary_transactions_endpoint),
        )
        .route(
            endpoints::INSTALLMENT_TRANSACTIONS,
            get(get_installment_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_IN_PERIOD,
            get(get_transactions_in_period_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS_BY_CATEGORY,
            get(get_transactions_by_category_endpoint),
        );

    let summary_routes = Router::new()
        .route(endpoints::SUMMARY_EXPENSES, get(get_monthly_expenses_endpoint))
        .route(endpoints::SUMMARY_INCOME, get(get_monthly_income_endpoint))
        .route(endpoints::SUMMARY_RECURRING, get(get_recurring_total_endpoint))
        .route(endpoints::SUMMARY_ESSENTIAL, get(get_essential_total_endpoint))
        .route(
            endpoints::SUMMARY_DISCRETIONARY,
            get(get_discretionary_total_endpoint),
        )
        .route(endpoints::SUMMARY_BALANCE, get(get_monthly_balance_endpoint))
        .route(
            endpoints::SUMMARY_BY_CATEGORY,
            get(get_totals_by_category_endpoint),
        );

    category_routes
        .merge(transaction_routes)
        .merge(summary_routes)
        .route(endpoints::OPENAPI, get(get_openapi_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Exercises the routes end to end through the router.
#[cfg(test)]
mod router_tests {
    use axum::{
        body::Bytes,
        http::{StatusCode, header::LOCATION},
        middleware,
    };
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, build_router, endpoints, endpoints::format_endpoint, logging_middleware,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_category(server: &TestServer, name: &str, essential: bool, type_: &str) -> i64 {
        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": name, "essential": essential, "type": type_}))
            .await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Value>()["id"]
            .as_i64()
            .expect("Category ID missing from response")
    }

    #[tokio::test]
    async fn create_then_get_category() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Lazer", "essential": false, "type": "DISCRETIONARY_EXPENSE"}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let location = response.header(LOCATION);
        let location = location.to_str().expect("Location is not ASCII");
        assert_eq!(location, format_endpoint(endpoints::CATEGORY, 1));

        let response = server.get(location).await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "id": 1,
            "name": "Lazer",
            "essential": false,
            "type": "DISCRETIONARY_EXPENSE"
        }));
    }

    #[tokio::test]
    async fn duplicate_category_name_is_conflict() {
        let server = get_test_server();
        create_category(&server, "Lazer", false, "DISCRETIONARY_EXPENSE").await;

        server
            .post(endpoints::CATEGORIES)
            .json(&json!({"name": "Lazer", "essential": true, "type": "ESSENTIAL_EXPENSE"}))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::CATEGORY, 999))
            .expect_failure()
            .await;

        response.assert_status_not_found();
        assert!(response.as_bytes().is_empty());
    }

    #[tokio::test]
    async fn unknown_category_type_is_bad_request() {
        let server = get_test_server();

        server
            .get(&format_endpoint(endpoints::CATEGORIES_BY_TYPE, "GROCERIES"))
            .expect_failure()
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn category_filters() {
        let server = get_test_server();
        create_category(&server, "Salário", true, "FIXED_INCOME").await;
        create_category(&server, "Aluguel", true, "ESSENTIAL_EXPENSE").await;
        create_category(&server, "Café", false, "INVISIBLE_EXPENSE").await;

        let by_type = server
            .get(&format_endpoint(endpoints::CATEGORIES_BY_TYPE, "INVISIBLE_EXPENSE"))
            .await
            .json::<Value>();
        let non_essential = server
            .get(&format_endpoint(endpoints::CATEGORIES_BY_ESSENTIAL, false))
            .await
            .json::<Value>();
        let count = server.get(endpoints::CATEGORY_COUNT).await.json::<Value>();

        assert_eq!(by_type[0]["name"], "Café");
        assert_eq!(non_essential.as_array().map(Vec::len), Some(1));
        assert_eq!(count, json!({"essential": 2, "non_essential": 1}));
    }

    #[tokio::test]
    async fn create_transaction_with_installments() {
        let server = get_test_server();
        let category_id = create_category(&server, "Compras", false, "DISCRETIONARY_EXPENSE").await;

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "description": "Notebook",
                "amount": "3600.00",
                "date": "2026-02-01",
                "type": "EXPENSE",
                "installment_count": 12,
                "category_id": category_id
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["amount"], "3600.00");
        assert_eq!(body["monthly_amount"], "300.00");
        assert_eq!(body["current_installment"], 1);
        assert_eq!(body["recurring"], false);
        assert_eq!(body["category"]["name"], "Compras");

        let installments = server
            .get(endpoints::INSTALLMENT_TRANSACTIONS)
            .await
            .json::<Value>();
        assert_eq!(installments.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn transaction_validation_errors_are_bad_request() {
        let server = get_test_server();
        let category_id = create_category(&server, "Mercado", true, "ESSENTIAL_EXPENSE").await;

        for body in [
            json!({"description": "x", "amount": "-1", "date": "2026-02-01", "type": "EXPENSE", "category_id": category_id}),
            json!({"description": " ", "amount": "1", "date": "2026-02-01", "type": "EXPENSE", "category_id": category_id}),
            json!({"description": "x", "amount": "1", "date": "2026-02-01", "type": "EXPENSE", "category_id": 999}),
            json!({"description": "x", "amount": "1", "date": "01/02/2026", "type": "EXPENSE", "category_id": category_id}),
            json!({"description": "x", "amount": "1", "date": "2026-02-01", "type": "EXPENSE", "category_id": category_id, "installment_count": 2, "current_installment": 3}),
            json!({"description": "x", "amount": "100000000.00", "date": "2026-02-01", "type": "EXPENSE", "category_id": category_id}),
            json!({"description": "x", "amount": "50000000000000000.00", "date": "2026-02-01", "type": "EXPENSE", "category_id": category_id}),
        ] {
            let response = server
                .post(endpoints::TRANSACTIONS)
                .json(&body)
                .expect_failure()
                .await;

            response.assert_status_bad_request();
            assert!(
                response.json::<Value>()["error"].is_string(),
                "want error detail for {body}"
            );
        }
    }

    #[tokio::test]
    async fn deleting_category_removes_its_transactions() {
        let server = get_test_server();
        let category_id = create_category(&server, "Mercado", true, "ESSENTIAL_EXPENSE").await;
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "description": "Feira",
                "amount": 80,
                "date": "2026-02-07",
                "type": "EXPENSE",
                "category_id": category_id
            }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .delete(&format_endpoint(endpoints::CATEGORY, category_id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .get(endpoints::TRANSACTIONS)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn period_requires_ordered_dates() {
        let server = get_test_server();

        server
            .get(endpoints::TRANSACTIONS_IN_PERIOD)
            .add_query_params(&[("start", "2026-03-01"), ("end", "2026-02-01")])
            .expect_failure()
            .await
            .assert_status_bad_request();

        server
            .get(endpoints::TRANSACTIONS_IN_PERIOD)
            .add_query_params(&[("start", "2026-02-01")])
            .expect_failure()
            .await
            .assert_status_bad_request();

        server
            .get(endpoints::TRANSACTIONS_IN_PERIOD)
            .add_query_params(&[("start", "2026-02-01"), ("end", "2026-02-28")])
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn summaries_of_empty_database() {
        let server = get_test_server();

        server
            .get(endpoints::SUMMARY_EXPENSES)
            .await
            .assert_json(&Value::Null);
        server
            .get(endpoints::SUMMARY_RECURRING)
            .await
            .assert_json(&Value::Null);
        server
            .get(endpoints::SUMMARY_BALANCE)
            .await
            .assert_json(&json!("0.00"));
        server
            .get(endpoints::SUMMARY_BY_CATEGORY)
            .add_query_params(&[("type", "EXPENSE")])
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn totals_by_category_requires_type() {
        let server = get_test_server();

        server
            .get(endpoints::SUMMARY_BY_CATEGORY)
            .expect_failure()
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/budgets")
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn largest_amounts_can_be_summed() {
        let server = get_test_server();
        let category_id = create_category(&server, "Imóveis", true, "ESSENTIAL_EXPENSE").await;
        for _ in 0..2 {
            server
                .post(endpoints::TRANSACTIONS)
                .json(&json!({
                    "description": "Casa",
                    "amount": "99999999.99",
                    "date": "2026-02-01",
                    "type": "EXPENSE",
                    "category_id": category_id
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get(endpoints::SUMMARY_ESSENTIAL).await;
        response.assert_status_ok();
        response.assert_json(&json!("199999999.98"));

        let response = server
            .get(endpoints::SUMMARY_BY_CATEGORY)
            .add_query_params(&[("type", "EXPENSE")])
            .await;
        response.assert_status_ok();
        response.assert_json(&json!([{"category": "Imóveis", "total": "199999999.98"}]));
    }

    #[tokio::test]
    async fn invalid_utf8_body_is_bad_request_with_logging() {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection, "Etc/UTC").expect("Could not create app state");
        let app = build_router(state).layer(middleware::from_fn(logging_middleware));
        let server = TestServer::try_new(app).expect("Could not create test server.");

        server
            .post(endpoints::CATEGORIES)
            .content_type("application/json")
            .bytes(Bytes::from_static(
                b"{\"name\":\"A\xff\xfe\",\"essential\":false,\"type\":\"INVESTMENT\"}",
            ))
            .expect_failure()
            .await
            .assert_status_bad_request();

        server
            .get(endpoints::CATEGORIES)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let server = get_test_server();

        let response = server.get(endpoints::OPENAPI).await;

        response.assert_status_ok();
        let doc = response.json::<Value>();
        assert!(doc["openapi"].as_str().is_some_and(|version| version.starts_with("3.")));
        assert!(doc["paths"][endpoints::CATEGORIES]["post"].is_object());
        assert!(doc["paths"][endpoints::TRANSACTION]["put"].is_object());
        assert!(doc["paths"][endpoints::SUMMARY_BY_CATEGORY]["get"].is_object());
        assert!(doc["components"]["schemas"]["TransactionResponse"].is_object());
    }
}
