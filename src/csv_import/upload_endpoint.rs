//! The route handler for importing expenses from an uploaded CSV file.

use axum::{
    Json,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, csv_import::csv::parse_expenses_csv, user::User};

/// The largest CSV upload accepted, in bytes. Requests beyond this are
/// rejected before the handler runs.
pub const MAX_CSV_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A route handler for importing expenses from an uploaded CSV file.
///
/// Expects a multipart form with a `user` field naming the importing user
/// and a `file` field holding the CSV text. Rows the parser cannot use are
/// dropped silently; the response reports how many expenses were imported
/// and returns them.
pub async fn upload_csv_endpoint(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, Error> {
    let mut user_name: Option<String> = None;
    let mut csv_data: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| Error::Multipart(error.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        let text = field
            .text()
            .await
            .map_err(|error| Error::Multipart(error.to_string()))?;

        match name.as_deref() {
            Some("user") => user_name = Some(text),
            Some("file") => csv_data = Some(text),
            _ => {}
        }
    }

    let user = user_name.unwrap_or_default().parse::<User>()?;
    let csv_data = csv_data.ok_or(Error::NoFile)?;

    tracing::debug!("Received CSV upload of {} bytes for {user}", csv_data.len());

    let candidates = parse_expenses_csv(&csv_data, user);
    let imported = state.ledger()?.expenses.insert_imported(candidates);

    Ok(Json(json!({
        "message": format!("Successfully imported {} expenses", imported.len()),
        "expenses": imported,
    }))
    .into_response())
}

#[cfg(test)]
mod upload_csv_endpoint_tests {
    use axum::{
        extract::{FromRequest, Multipart, State},
        http::{Request, StatusCode},
    };

    use crate::{AppState, endpoints};

    use super::upload_csv_endpoint;

    const STATEMENT_CSV: &str = "Date,Description,Amount,Category\n\
        2024-01-05,\"Coffee Shop\",12.50,Dining\n\
        2024-01-06,Sushi,-9.00,\n\
        2024-01-07,Refund pending,N/A,Dining\n\
        2024-01-08,Short row";

    async fn must_make_multipart(fields: &[(&str, &str)]) -> Multipart {
        let boundary = "MY_BOUNDARY123456789";
        let boundary_start = format!("--{boundary}");
        let boundary_end = format!("--{boundary}--");

        let mut lines: Vec<String> = Vec::new();

        for (name, value) in fields {
            lines.push(boundary_start.clone());
            lines.push(format!(
                "Content-Disposition: form-data; name=\"{name}\"{}",
                if *name == "file" {
                    "; filename=\"statement.csv\""
                } else {
                    ""
                }
            ));
            lines.push(String::new());
            lines.push((*value).to_owned());
        }

        lines.push(boundary_end);

        let data = lines.join("\r\n").into_bytes();

        let request = Request::builder()
            .method("POST")
            .uri(endpoints::UPLOAD_CSV)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(data.into())
            .unwrap();

        Multipart::from_request(request, &{}).await.unwrap()
    }

    #[tokio::test]
    async fn upload_imports_usable_rows_and_reports_count() {
        let state = AppState::new();

        let response = upload_csv_endpoint(
            State(state.clone()),
            must_make_multipart(&[("user", "Matt"), ("file", STATEMENT_CSV)]).await,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["message"], "Successfully imported 2 expenses");
        assert_eq!(body["expenses"].as_array().unwrap().len(), 2);
        assert_eq!(body["expenses"][1]["amount"], 9.0);
        assert_eq!(body["expenses"][1]["category"], "Imported");

        let ledger = state.ledger().unwrap();
        assert_eq!(ledger.expenses.all().len(), 2);
    }

    #[tokio::test]
    async fn upload_with_unknown_user_returns_invalid_user() {
        let state = AppState::new();

        let error = upload_csv_endpoint(
            State(state.clone()),
            must_make_multipart(&[("user", "bob"), ("file", STATEMENT_CSV)]).await,
        )
        .await
        .unwrap_err();

        assert_eq!(error, crate::Error::InvalidUser);
        assert!(state.ledger().unwrap().expenses.all().is_empty());
    }

    #[tokio::test]
    async fn upload_with_missing_user_field_returns_invalid_user() {
        let state = AppState::new();

        let error = upload_csv_endpoint(
            State(state.clone()),
            must_make_multipart(&[("file", STATEMENT_CSV)]).await,
        )
        .await
        .unwrap_err();

        assert_eq!(error, crate::Error::InvalidUser);
    }

    #[tokio::test]
    async fn upload_without_file_returns_no_file_error() {
        let state = AppState::new();

        let error = upload_csv_endpoint(
            State(state.clone()),
            must_make_multipart(&[("user", "Eileen")]).await,
        )
        .await
        .unwrap_err();

        assert_eq!(error, crate::Error::NoFile);
        assert!(state.ledger().unwrap().expenses.all().is_empty());
    }

    #[tokio::test]
    async fn upload_with_empty_file_imports_nothing() {
        let state = AppState::new();

        let response = upload_csv_endpoint(
            State(state.clone()),
            must_make_multipart(&[("user", "Matt"), ("file", "")]).await,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["message"], "Successfully imported 0 expenses");
    }
}
