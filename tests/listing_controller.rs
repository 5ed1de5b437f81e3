use shop_catalog::domain::filter::FilterCategory;
use shop_catalog::domain::price::{CustomPriceRange, PriceSelection};
use shop_catalog::domain::product::ResultPage;
use shop_catalog::domain::types::PageNumber;
use shop_catalog::repository::errors::RepositoryError;
use shop_catalog::services::ServiceError;
use shop_catalog::services::listing::FilterChange;

mod common;

use common::{ScriptedReader, controller, navigated_query, product, query};

#[test]
fn scenario_selecting_os_keeps_brand_and_resets_page() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("brand.acme=true&page=3"))
        .unwrap();

    controller
        .request_filter_change(FilterChange::toggle("os.linux", true))
        .unwrap();

    assert_eq!(
        navigated_query(&controller),
        query("brand.acme=true&os.linux=true&page=1")
    );
    assert!(!navigated_query(&controller).contains_key("customprice"));
    let target = controller.navigator().last().unwrap();
    assert_eq!(target.path, "/laptops");
}

#[test]
fn scenario_tier_replaces_custom_range() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("customprice=100,500"))
        .unwrap();
    assert_eq!(
        controller.state().price().custom_range(),
        Some(CustomPriceRange::new(100, 500))
    );

    controller
        .request_filter_change(FilterChange::toggle("price.under200", true))
        .unwrap();

    assert_eq!(
        navigated_query(&controller),
        query("price.under200=true&page=1")
    );
    assert_eq!(controller.state().price().custom_range(), None);
}

#[test]
fn custom_price_clears_selected_tier() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("price.200to500=true&brand.dell=true&page=2"))
        .unwrap();

    controller
        .request_filter_change(FilterChange::CustomPrice(CustomPriceRange::new(300, 800)))
        .unwrap();

    let outgoing = navigated_query(&controller);
    assert_eq!(outgoing.get("customprice"), Some("300,800"));
    assert!(outgoing.iter().all(|(key, _)| !key.starts_with("price.")));
    assert_eq!(outgoing, query("brand.dell=true&customprice=300,800&page=1"));
    assert!(controller.state().selected_in(FilterCategory::Price).is_empty());
}

#[test]
fn second_tier_replaces_the_active_one() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("price.under200=true"))
        .unwrap();

    controller
        .request_filter_change(FilterChange::toggle("price.500to1000", true))
        .unwrap();

    assert_eq!(
        navigated_query(&controller),
        query("price.500to1000=true&page=1")
    );
    assert_eq!(
        controller.state().selected_in(FilterCategory::Price),
        vec!["price.500to1000"]
    );
}

#[test]
fn deselecting_the_active_tier_leaves_no_price_constraint() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("price.under200=true&page=2"))
        .unwrap();

    controller
        .request_filter_change(FilterChange::toggle("price.under200", false))
        .unwrap();

    assert_eq!(navigated_query(&controller), query("page=1"));
    assert_eq!(controller.state().price(), &PriceSelection::Unconstrained);
}

#[test]
fn inbound_query_with_two_tiers_keeps_the_newly_added_one() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("price.under200=true"))
        .unwrap();

    controller
        .on_query_changed(&query("price.under200=true&price.over1000=true"))
        .unwrap();

    assert_eq!(
        controller.state().price(),
        &PriceSelection::Tier("price.over1000".to_string())
    );
    assert!(reader.last_query().filters.contains("price.over1000"));
    assert!(!reader.last_query().filters.contains("price.under200"));
}

#[test]
fn filter_change_always_lands_on_first_page() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller.on_query_changed(&query("page=7")).unwrap();

    controller
        .request_filter_change(FilterChange::toggle("brand.acme", true))
        .unwrap();

    assert_eq!(navigated_query(&controller).get("page"), Some("1"));
}

#[test]
fn pagination_keeps_filters_and_moves_page() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller
        .on_query_changed(&query("brand.acme=true&customprice=100,500&page=3"))
        .unwrap();

    controller
        .request_filter_change(FilterChange::Page(PageNumber::new(3).unwrap()))
        .unwrap();
    assert_eq!(
        navigated_query(&controller),
        query("brand.acme=true&customprice=100,500&page=3")
    );

    controller
        .request_filter_change(FilterChange::Page(PageNumber::new(4).unwrap()))
        .unwrap();
    assert_eq!(navigated_query(&controller).get("page"), Some("4"));
}

#[test]
fn product_query_carries_state() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);

    controller
        .on_query_changed(&query(
            "brand.acme=true&ram.16gb=true&customprice=100,500&page=2",
        ))
        .unwrap();

    let sent = reader.last_query();
    assert_eq!(sent.page.get(), 2);
    assert_eq!(sent.per_page, 24);
    assert_eq!(sent.min_custom, Some(100));
    assert_eq!(sent.max_custom, Some(500));
    assert_eq!(
        sent.filters.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["brand.acme", "ram.16gb"]
    );
}

#[test]
fn empty_response_sets_no_results() {
    let reader = ScriptedReader::default();
    reader.respond(Ok(ResultPage::new(vec![], 0)));
    reader.respond(Ok(ResultPage::new(vec![product(1, 150, &["brand.acme"])], 1)));
    let mut controller = controller(&reader);

    controller.on_query_changed(&query("brand.msi=true")).unwrap();
    assert!(controller.results().no_results);
    assert!(!controller.results().loading);

    controller.on_query_changed(&query("brand.acme=true")).unwrap();
    assert!(!controller.results().no_results);
    assert_eq!(controller.results().total, 1);
    assert_eq!(controller.results().items.len(), 1);
}

#[test]
fn failed_fetch_is_an_error_state_not_an_empty_listing() {
    let reader = ScriptedReader::default();
    reader.respond(Err(RepositoryError::Unavailable("timeout".to_string())));
    let mut controller = controller(&reader);

    let result = controller.on_query_changed(&query("brand.acme=true"));

    assert!(matches!(result, Err(ServiceError::Repository(_))));
    let view = controller.listing_view();
    assert!(!view.loading);
    assert!(!view.no_results);
    assert!(view.error.is_some());

    controller.on_query_changed(&query("brand.acme=true")).unwrap();
    assert_eq!(controller.results().error, None);
}

#[test]
fn stale_response_is_discarded() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller.load_query(&query("brand.acme=true"));
    let stale = controller.begin_refresh();

    controller.load_query(&query("brand.dell=true"));
    let fresh = controller.begin_refresh();
    assert!(fresh.query().filters.contains("brand.dell"));

    controller
        .complete_refresh(fresh, Ok(ResultPage::new(vec![product(3, 900, &["brand.dell"])], 1)))
        .unwrap();
    controller
        .complete_refresh(stale, Ok(ResultPage::new(vec![], 0)))
        .unwrap();

    assert_eq!(controller.results().total, 1);
    assert!(!controller.results().no_results);
    assert_eq!(controller.results().items[0].id, 3);
}

#[test]
fn stale_failure_does_not_surface() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    let stale = controller.begin_refresh();
    let fresh = controller.begin_refresh();

    let outcome = controller.complete_refresh(
        stale,
        Err(RepositoryError::Unavailable("late".to_string())),
    );

    assert!(outcome.is_ok());
    assert!(controller.results().loading);
    controller.complete_refresh(fresh, Ok(ResultPage::default())).unwrap();
    assert!(!controller.results().loading);
}

#[test]
fn listing_view_exposes_shareable_query_and_pages() {
    let reader = ScriptedReader::default();
    let items = (1..=24).map(|id| product(id, 100, &["brand.acme"])).collect();
    reader.respond(Ok(ResultPage::new(items, 60)));
    let mut controller = controller(&reader);

    controller
        .on_query_changed(&query("brand.acme=true&page=2&utm_source=mail"))
        .unwrap();
    let view = controller.listing_view();

    assert_eq!(view.query, "brand.acme=true&page=2");
    assert_eq!(view.products.page, 2);
    assert_eq!(view.products.pages, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(view.products.items.len(), 24);
    assert!(view.selected.contains("brand.acme"));
}

#[test]
fn navigation_feeds_back_into_the_controller() {
    let reader = ScriptedReader::default();
    let mut controller = controller(&reader);
    controller.on_query_changed(&query("page=2")).unwrap();

    controller
        .request_filter_change(FilterChange::toggle("storage.1tb", true))
        .unwrap();
    let outgoing = navigated_query(&controller);
    controller.on_query_changed(&outgoing).unwrap();

    assert_eq!(reader.queries.borrow().len(), 2);
    assert_eq!(reader.last_query().page, PageNumber::FIRST);
    assert!(reader.last_query().filters.contains("storage.1tb"));
}
