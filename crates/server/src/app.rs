use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use ranger::error::{IndexOutOfRange, InvalidBounds};
use ranger::Ranger;
use serde::Deserialize;
use tracing::{error, info};


pub fn build_app() -> Router {
    Router::new()
        .route("/", get(|| async { "Welcome to the ranger service!" }))
        .route("/listify", get(listify))
}


#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueAtIndexParams {
    begin: i32,
    end: i32,
    get_at_index: usize
}


async fn listify(Query(params): Query<ValueAtIndexParams>) -> Response {
    match get_value_at_index(&params) {
        Ok(value) => {
            info!(
                begin = params.begin,
                end = params.end,
                index = params.get_at_index,
                value,
                "value at index in range requested"
            );
            (StatusCode::OK, Json(value)).into_response()
        },
        Err(err) => error_to_response(&params, err)
    }
}


fn get_value_at_index(params: &ValueAtIndexParams) -> anyhow::Result<i32> {
    let ranger = Ranger::new(params.begin, params.end)?;
    let value = ranger.at(params.get_at_index)?;
    Ok(value)
}


fn error_to_response(params: &ValueAtIndexParams, err: anyhow::Error) -> Response {
    let status_code = if err.is::<InvalidBounds>() || err.is::<IndexOutOfRange>() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    error!(
        begin = params.begin,
        end = params.end,
        index = params.get_at_index,
        status = status_code.as_u16(),
        error = %err,
        "value at index in range request failed"
    );

    let message = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
        // the concrete error goes to the log, not to the client
        "an error has occurred".to_string()
    } else {
        format!("{}", err)
    };

    (status_code, message).into_response()
}
