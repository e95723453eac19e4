//! Single binary web server: the bracket command surface as a REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (e.g. ./data).

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use bracket_draw_web::{
    add_teams, chunk_text, draw, export_csv, export_filename, render_bracket_tree, render_round,
    render_team_list, Store, StoreError, Tournament, TournamentError, TRANSPORT_CHUNK_LIMIT,
};
use serde::Deserialize;

type AppStore = Data<Store>;

/// Either a domain rejection (400) or a persistence failure (500).
enum CmdError {
    Domain(TournamentError),
    Store(StoreError),
}

impl From<TournamentError> for CmdError {
    fn from(e: TournamentError) -> Self {
        CmdError::Domain(e)
    }
}

impl From<StoreError> for CmdError {
    fn from(e: StoreError) -> Self {
        CmdError::Store(e)
    }
}

fn error_response(e: CmdError) -> HttpResponse {
    match e {
        CmdError::Domain(e) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        CmdError::Store(e) => {
            log::error!("Persistence failure: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Persistence unavailable" }))
        }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct NewTournamentBody {
    name: Option<String>,
}

#[derive(Deserialize)]
struct AddTeamsBody {
    /// Raw text with `;`/`,`/newline-separated team names.
    names: String,
}

/// Path segment: opaque tournament key (e.g. /api/tournaments/{key})
#[derive(Deserialize)]
struct KeyPath {
    key: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-draw-web",
    })
}

/// Start a fresh tournament under this key (replaces any previous state).
#[post("/api/tournaments/{key}/new")]
async fn api_new(
    store: AppStore,
    path: Path<KeyPath>,
    body: Option<Json<NewTournamentBody>>,
) -> HttpResponse {
    let name = body.and_then(|b| b.into_inner().name);
    let result: Result<Tournament, CmdError> = store.with_key_lock(&path.key, || {
        let tournament = Tournament::new(name);
        store.save(&path.key, &tournament)?;
        Ok(tournament)
    });
    match result {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Add teams from raw separated text. Rejects input with no usable names.
#[post("/api/tournaments/{key}/teams")]
async fn api_add_teams(
    store: AppStore,
    path: Path<KeyPath>,
    body: Json<AddTeamsBody>,
) -> HttpResponse {
    let result: Result<(Tournament, usize), CmdError> = store.with_key_lock(&path.key, || {
        let mut t = store.load(&path.key)?;
        let added = add_teams(&mut t, &body.names)?;
        store.save(&path.key, &t)?;
        Ok((t, added))
    });
    match result {
        Ok((t, added)) => HttpResponse::Ok().json(serde_json::json!({
            "added": added,
            "total": t.teams.len(),
            "tournament": t,
        })),
        Err(e) => error_response(e),
    }
}

/// Current team list, in stored order.
#[get("/api/tournaments/{key}/teams")]
async fn api_list_teams(store: AppStore, path: Path<KeyPath>) -> HttpResponse {
    match store.load(&path.key) {
        Ok(t) => HttpResponse::Ok().json(serde_json::json!({
            "name": t.name,
            "teams": t.teams,
            "text": render_team_list(&t.teams),
        })),
        Err(e) => error_response(e.into()),
    }
}

/// Randomize the team order and create a bracket (needs at least 2 teams).
#[post("/api/tournaments/{key}/draw")]
async fn api_draw(store: AppStore, path: Path<KeyPath>) -> HttpResponse {
    let result: Result<(Tournament, u32), CmdError> = store.with_key_lock(&path.key, || {
        let mut t = store.load(&path.key)?;
        let seed = draw(&mut t)?;
        store.save(&path.key, &t)?;
        Ok((t, seed))
    });
    match result {
        Ok((t, seed)) => {
            let round1 = t
                .bracket
                .as_ref()
                .and_then(|b| b.rounds.first())
                .map(|r| render_round(r, 1))
                .unwrap_or_default();
            HttpResponse::Ok().json(serde_json::json!({
                "seed": seed,
                "round1": round1,
                "tournament": t,
            }))
        }
        Err(e) => error_response(e),
    }
}

/// First-round pairs of the current bracket.
#[get("/api/tournaments/{key}/pairs")]
async fn api_pairs(store: AppStore, path: Path<KeyPath>) -> HttpResponse {
    let result: Result<String, CmdError> = (|| {
        let t = store.load(&path.key)?;
        let bracket = t.bracket()?;
        Ok(bracket
            .rounds
            .first()
            .map(|r| render_round(r, 1))
            .unwrap_or_default())
    })();
    match result {
        Ok(text) => HttpResponse::Ok().json(serde_json::json!({ "text": text })),
        Err(e) => error_response(e),
    }
}

/// Full bracket as text, pre-split into transport-sized chunks.
#[get("/api/tournaments/{key}/bracket")]
async fn api_bracket(store: AppStore, path: Path<KeyPath>) -> HttpResponse {
    let result: Result<(String, Vec<String>), CmdError> = (|| {
        let t = store.load(&path.key)?;
        let bracket = t.bracket()?;
        let text = format!("{}\n\n{}", t.name, render_bracket_tree(&bracket.rounds));
        Ok((t.name.clone(), chunk_text(&text, TRANSPORT_CHUNK_LIMIT)))
    })();
    match result {
        Ok((name, chunks)) => HttpResponse::Ok().json(serde_json::json!({
            "name": name,
            "chunks": chunks,
        })),
        Err(e) => error_response(e),
    }
}

/// CSV export of the current bracket as a file download.
#[get("/api/tournaments/{key}/export")]
async fn api_export(store: AppStore, path: Path<KeyPath>) -> HttpResponse {
    let t = match store.load(&path.key) {
        Ok(t) => t,
        Err(e) => return error_response(e.into()),
    };
    let bracket = match t.bracket() {
        Ok(b) => b,
        Err(e) => return error_response(e.into()),
    };
    let csv = match export_csv(&bracket.rounds) {
        Ok(csv) => csv,
        Err(e) => {
            log::error!("CSV export failed for key '{}': {e}", path.key);
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Export failed" }));
        }
    };
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", export_filename(&t)),
        ))
        .body(csv)
}

/// Wipe teams and bracket; the tournament name is kept.
#[post("/api/tournaments/{key}/reset")]
async fn api_reset(store: AppStore, path: Path<KeyPath>) -> HttpResponse {
    let result: Result<Tournament, CmdError> = store.with_key_lock(&path.key, || {
        let mut t = store.load(&path.key)?;
        t.reset();
        store.save(&path.key, &t)?;
        Ok(t)
    });
    match result {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "./data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{} (data in {})", bind.0, bind.1, data_dir);

    let store = Data::new(Store::new(data_dir));

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(api_health)
            .service(api_new)
            .service(api_add_teams)
            .service(api_list_teams)
            .service(api_draw)
            .service(api_pairs)
            .service(api_bracket)
            .service(api_export)
            .service(api_reset)
    })
    .bind(bind)?
    .run()
    .await
}
