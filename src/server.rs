use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use log::{error, info};
use serde::Deserialize;

use crate::calendar::Selection;
use crate::ics::plan_to_ics;
use crate::plan::Plan;
use crate::render::{calendar_page, edit_page};
use crate::store::Store;
use crate::testdata;
use crate::view::View;

const TESTDATA_LINES: usize = 100;

pub struct AppState {
    pub store: Store,
}

type SharedState = Arc<AppState>;

pub fn router(store: Store) -> Router {
    Router::new()
        .route("/", get(handle_current))
        .route("/:year/", get(handle_year))
        .route("/:year/:month/", get(handle_month))
        .route("/edit", get(handle_edit))
        .route("/save", post(handle_save))
        .route("/testdata", get(handle_testdata))
        .route("/plan.ics", get(handle_ics))
        .with_state(Arc::new(AppState { store }))
}

#[derive(Deserialize)]
struct CalendarQuery {
    #[serde(default)]
    json: bool,
}

#[derive(Deserialize)]
struct SaveForm {
    text: String,
}

async fn handle_current(
    State(state): State<SharedState>,
    Query(query): Query<CalendarQuery>,
) -> Response {
    respond_calendar(&state, Selection::today(), query.json).await
}

async fn handle_year(
    State(state): State<SharedState>,
    Path(year): Path<i32>,
    Query(query): Query<CalendarQuery>,
) -> Response {
    let Some(selection) = Selection::new(year, None) else {
        return (StatusCode::NOT_FOUND, "No such year").into_response();
    };
    respond_calendar(&state, selection, query.json).await
}

async fn handle_month(
    State(state): State<SharedState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<CalendarQuery>,
) -> Response {
    let Some(selection) = Selection::new(year, Some(month)) else {
        return (StatusCode::NOT_FOUND, "No such month").into_response();
    };
    respond_calendar(&state, selection, query.json).await
}

async fn respond_calendar(state: &AppState, selection: Selection, json: bool) -> Response {
    let plan = match load_plan(&state.store).await {
        Ok(plan) => plan,
        Err(response) => return response,
    };

    let view = View::build(&plan, selection);

    if json {
        return Json(view).into_response();
    }

    Html(calendar_page(&view, Local::now().date_naive())).into_response()
}

async fn handle_edit(State(state): State<SharedState>) -> Response {
    match state.store.read().await {
        Ok(text) => Html(edit_page(text.as_deref().unwrap_or_default())).into_response(),
        Err(err) => {
            error!("{err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read plan").into_response()
        }
    }
}

async fn handle_save(State(state): State<SharedState>, Form(form): Form<SaveForm>) -> Response {
    if let Err(err) = state.store.save(&form.text).await {
        error!("{err}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save plan").into_response();
    }

    info!("Saved {} lines", form.text.lines().count());
    Redirect::to("/").into_response()
}

async fn handle_testdata(State(state): State<SharedState>) -> Response {
    let text = testdata::lines(&mut rand::rng(), Local::now().date_naive(), TESTDATA_LINES);

    if let Err(err) = state.store.append(&text).await {
        error!("{err}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to append test data").into_response();
    }

    Redirect::to("/edit").into_response()
}

async fn handle_ics(State(state): State<SharedState>) -> Response {
    match load_plan(&state.store).await {
        Ok(plan) => (
            [(header::CONTENT_TYPE, "text/calendar")],
            plan_to_ics(&plan).to_string(),
        )
            .into_response(),
        Err(response) => response,
    }
}

async fn load_plan(store: &Store) -> Result<Plan, Response> {
    match store.read().await {
        Ok(text) => Ok(Plan::from_source(text.as_deref())),
        Err(err) => {
            error!("{err}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to read plan").into_response())
        }
    }
}
