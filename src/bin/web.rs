//! Single binary web server: predicts a fight card from posted statistics.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, PREDICTION_MODE (memoized | exhaustive),
//! MAX_EXHAUSTIVE_MATCHUPS (largest card walked outcome by outcome).

use actix_web::{
    get, post,
    web::{self, Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use fight_predictor::{
    load_event_csv, predict_outcomes, AggregationMode, EventCard, MatchupBracket, PredictionError,
    PredictionReport, Roster, StatisticsRecord,
};
use serde::{Deserialize, Serialize};

/// Server-wide settings, read once from the environment.
#[derive(Clone, Debug)]
struct PredictorConfig {
    default_mode: AggregationMode,
    max_exhaustive_matchups: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            default_mode: AggregationMode::Memoized,
            max_exhaustive_matchups: default_max_exhaustive_matchups(),
        }
    }
}

impl PredictorConfig {
    fn from_env() -> Self {
        let default_mode = match std::env::var("PREDICTION_MODE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring PREDICTION_MODE: {}", e);
                AggregationMode::Memoized
            }),
            Err(_) => AggregationMode::Memoized,
        };
        let max_exhaustive_matchups = std::env::var("MAX_EXHAUSTIVE_MATCHUPS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_exhaustive_matchups);
        Self {
            default_mode,
            max_exhaustive_matchups,
        }
    }
}

type AppConfig = Data<PredictorConfig>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// One fighter as posted by the client, in card order.
#[derive(Deserialize)]
struct FighterBody {
    name: String,
    #[serde(default)]
    slpm: Option<f64>,
    #[serde(default)]
    str_acc: Option<String>,
}

#[derive(Deserialize)]
struct PredictBody {
    fighters: Vec<FighterBody>,
    #[serde(default)]
    mode: Option<AggregationMode>,
}

#[derive(Deserialize)]
struct ModeQuery {
    #[serde(default)]
    mode: Option<AggregationMode>,
}

#[derive(Serialize, Deserialize)]
struct PredictResponse {
    #[serde(flatten)]
    report: PredictionReport,
    /// Text rendering of the report, one line per winner.
    summary: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "fight-predictor",
    })
}

/// Predict a card from JSON: fighters in order, consecutive pairs fight each other.
#[post("/api/predictions")]
async fn api_predict(config: AppConfig, body: Json<PredictBody>) -> HttpResponse {
    let body = body.into_inner();
    let roster = Roster::new(body.fighters.iter().map(|f| f.name.trim()));
    let bracket = MatchupBracket::from_roster(&roster);
    let stats = body
        .fighters
        .into_iter()
        .map(|f| StatisticsRecord {
            name: f.name.trim().to_string(),
            slpm: f.slpm,
            str_acc: f.str_acc,
        })
        .collect();
    let card = EventCard {
        roster,
        bracket,
        stats,
    };
    run_prediction(&config, card, body.mode).await
}

/// Predict a card from a CSV body (`Name`, `SLpM`, `Str. Acc.` columns).
#[post("/api/predictions/csv")]
async fn api_predict_csv(
    config: AppConfig,
    query: Query<ModeQuery>,
    body: String,
) -> HttpResponse {
    match load_event_csv(body.as_bytes()) {
        Ok(card) => run_prediction(&config, card, query.mode).await,
        Err(e) => bad_request(&e),
    }
}

/// Runs the prediction on actix's blocking thread pool so an exhaustive walk never stalls a
/// server worker.
async fn run_prediction(
    config: &PredictorConfig,
    card: EventCard,
    mode: Option<AggregationMode>,
) -> HttpResponse {
    let mode = mode.unwrap_or(config.default_mode);
    let matchups = card.bracket.len();
    if mode == AggregationMode::Exhaustive && matchups > config.max_exhaustive_matchups {
        log::warn!(
            "Rejected exhaustive prediction of {} matchup(s) (limit {})",
            matchups,
            config.max_exhaustive_matchups
        );
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!(
                "Exhaustive mode allows at most {} matchups",
                config.max_exhaustive_matchups
            )
        }));
    }
    let fighters = card.roster.len();
    let result = web::block(move || {
        predict_outcomes(&card.roster, &card.bracket, &card.stats, mode)
    })
    .await;
    match result {
        Ok(Ok(report)) => {
            log::info!(
                "Predicted card of {} fighter(s): {} outcome(s)",
                fighters,
                report.total_outcomes
            );
            let summary = report.to_string();
            HttpResponse::Ok().json(PredictResponse { report, summary })
        }
        Ok(Err(e)) => bad_request(&e),
        Err(e) => {
            log::error!("Prediction task failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Prediction task failed" }))
        }
    }
}

fn bad_request(e: &PredictionError) -> HttpResponse {
    log::warn!("Prediction failed: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// 2^12 outcomes walk in tens of milliseconds; each extra matchup doubles it.
fn default_max_exhaustive_matchups() -> usize {
    12
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let config = Data::new(PredictorConfig::from_env());
    let bind = (host.as_str(), port);
    log::info!(
        "Starting server at http://{}:{} ({:?} mode)",
        bind.0,
        bind.1,
        config.default_mode
    );

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .service(api_health)
            .service(api_predict)
            .service(api_predict_csv)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn app_config(max_exhaustive_matchups: usize) -> AppConfig {
        Data::new(PredictorConfig {
            max_exhaustive_matchups,
            ..PredictorConfig::default()
        })
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(App::new().service(api_health)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);
    }

    #[actix_web::test]
    async fn json_card_is_predicted() {
        let app = test::init_service(
            App::new().app_data(app_config(12)).service(api_predict),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/predictions")
            .set_json(serde_json::json!({
                "fighters": [
                    { "name": "A", "slpm": 5.0, "str_acc": "50%" },
                    { "name": "B", "slpm": 3.0, "str_acc": "90%" },
                ],
                "mode": "exhaustive",
            }))
            .to_request();
        let body: PredictResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.report.total_outcomes, 2);
        assert_eq!(body.report.winners, vec!["B".to_string()]);
        assert!(body.summary.contains("Fight 1 Winner: B"));
    }

    #[actix_web::test]
    async fn csv_card_with_bad_accuracy_is_rejected() {
        let app = test::init_service(
            App::new().app_data(app_config(20)).service(api_predict_csv),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/predictions/csv")
            .set_payload("Name,SLpM,Str. Acc.\nA,5.0,50\nB,3.0,90%\n")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn exhaustive_csv_card_runs_off_the_worker() {
        let app = test::init_service(
            App::new().app_data(app_config(12)).service(api_predict_csv),
        )
        .await;
        let rows: String = (0..24)
            .map(|i| format!("F{},{}.0,{}%\n", i, 1 + i % 5, 20 + i * 3))
            .collect();
        let req = test::TestRequest::post()
            .uri("/api/predictions/csv?mode=exhaustive")
            .set_payload(format!("Name,SLpM,Str. Acc.\n{}", rows))
            .to_request();
        let body: PredictResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.report.total_outcomes, 4096);
        assert_eq!(body.report.winners.len(), 12);
    }

    #[actix_web::test]
    async fn exhaustive_mode_respects_limit() {
        let app = test::init_service(
            App::new().app_data(app_config(1)).service(api_predict_csv),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/predictions/csv?mode=exhaustive")
            .set_payload("Name,SLpM,Str. Acc.\nA,1,10%\nB,1,20%\nC,1,30%\nD,1,40%\n")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
