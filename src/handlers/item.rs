use axum::{
    extract::{rejection::{PathRejection, QueryRejection}, Path, Query},
    http::StatusCode,
    Json,
};
use crate::models::{parse_item_id, ErrorResponse, ItemEcho, ItemQuery};
use tracing::debug;

const INVALID_ITEM_ID: &str = "Input should be a valid integer, unable to parse string as an integer";

/// Echo an item id and optional query value
pub async fn read_item(
    item_id: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ItemEcho>, (StatusCode, Json<ErrorResponse>)> {

    // A non-integer id is a validation failure, not a bad route
    let raw_id = match item_id {
        Ok(Path(raw_id)) => raw_id,
        Err(rejection) => {
            debug!("Rejected item path: {}", rejection.body_text());
            return Err(ErrorResponse::with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.body_text(),
            ));
        }
    };
    let Some(item_id) = parse_item_id(&raw_id) else {
        debug!("Rejected item id '{}'", raw_id);
        return Err(ErrorResponse::with_status(StatusCode::UNPROCESSABLE_ENTITY, INVALID_ITEM_ID));
    };

    let query = match query {
        Ok(Query(pairs)) => ItemQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!("Rejected item query: {}", rejection.body_text());
            return Err(ErrorResponse::with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.body_text(),
            ));
        }
    };

    Ok(Json(ItemEcho {
        item_id,
        q: query.q,
    }))
}
