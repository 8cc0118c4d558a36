use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use pdf_stamp::{JsonBody, Report};
use std::collections::HashMap;

/// Approval stamping endpoint (GET or POST).
///
/// Fields are read from the query string first, then from a JSON body.
pub async fn stamp(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    let query = query_params(&uri);
    let body = JsonBody::parse(&body);

    let report = state.stamper.handle(&[&query, &body]).await;
    report_response(report)
}

/// Query string as a map; an unparseable query counts as empty
pub fn query_params(uri: &Uri) -> HashMap<String, String> {
    Query::<HashMap<String, String>>::try_from_uri(uri)
        .map(|Query(params)| params)
        .unwrap_or_default()
}

fn report_response(report: Report) -> Response {
    let status = StatusCode::from_u16(report.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.message,
    )
        .into_response()
}
