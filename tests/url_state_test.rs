//! Integration tests for the URL state codec

mod common;

use catalog_filter::{
    clear_all, decode, encode, merge_activity, set_active, ActiveSelection, FilterDimension,
    QueryParams, SortType, ViewType,
};
use common::{base_catalog, items};
use pretty_assertions::assert_eq;

fn dimensions() -> Vec<FilterDimension> {
    FilterDimension::all().to_vec()
}

#[test]
fn encode_then_decode_restores_selection() {
    let items = items();
    let catalog = base_catalog(&items);
    let state = set_active(&catalog, FilterDimension::Provider, "Zeta", true);
    let state = set_active(&state, FilterDimension::Provider, "", true);
    let state = set_active(&state, FilterDimension::Maturity, "Auto Pilot", true);

    let mut params = QueryParams::new();
    encode(
        &mut params,
        "key value",
        &state,
        Some(ViewType::List),
        Some(SortType::Descending),
    );
    let query = params.to_query_string();

    let decoded = decode(&QueryParams::parse(&format!("?{query}")), &dimensions());
    assert_eq!(decoded.keyword, "key value");
    assert_eq!(decoded.view, Some(ViewType::List));
    assert_eq!(decoded.sort, Some(SortType::Descending));

    let restored = merge_activity(&clear_all(&state), &decoded.filters);
    assert_eq!(restored, state);
}

#[test]
fn invalid_provider_json_does_not_block_maturity() {
    let params = QueryParams::parse("provider=not-json&maturity=%5B%22Full+Lifecycle%22%5D");
    let decoded = decode(&params, &dimensions());

    assert_eq!(
        decoded.filters,
        ActiveSelection::new().with(FilterDimension::Maturity, &["Full Lifecycle"])
    );
}

#[test]
fn unrelated_parameters_survive_encoding() {
    let items = items();
    let catalog = base_catalog(&items);
    let state = set_active(&catalog, FilterDimension::Provider, "Acme", true);

    let mut params = QueryParams::parse("utm_source=mail&keyword=old&page=3");
    encode(&mut params, "", &state, None, None);

    assert_eq!(
        params.to_query_string(),
        "utm_source=mail&page=3&provider=%5B%22Acme%22%5D"
    );
}

#[test]
fn cleared_state_removes_codec_keys() {
    let mut params = QueryParams::parse(
        "keyword=db&view=list&sort=ascending&provider=%5B%22Acme%22%5D&other=1",
    );
    let items = items();
    encode(&mut params, "", &base_catalog(&items), None, None);
    assert_eq!(params.to_query_string(), "other=1");
}

#[test]
fn decoded_selection_is_order_independent_per_dimension() {
    let items = items();
    let catalog = base_catalog(&items);
    let forward = QueryParams::parse("provider=%5B%22Acme%22%2C%22Zeta%22%5D");
    let backward = QueryParams::parse("provider=%5B%22Zeta%22%2C%22Acme%22%5D");

    let a = merge_activity(&catalog, &decode(&forward, &dimensions()).filters);
    let b = merge_activity(&catalog, &decode(&backward, &dimensions()).filters);
    assert_eq!(a, b);
    assert!(a.is_active(FilterDimension::Provider, "Zeta"));
}
