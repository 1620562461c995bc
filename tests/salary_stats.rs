mod common;

use common::{page_of, ScriptedTransport};
use salary_stats::clients::{ApiRequest, HeadHunterClient, SuperJobClient, Transport};
use salary_stats::error::Stage;
use salary_stats::models::{Provider, TermStatistics};
use salary_stats::services::{render_report, StatsService};
use salary_stats::{App, AppError, AppResult, Config};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

fn config(languages: &[&str]) -> Config {
    Config {
        hh_api_base_url: "http://hh.test".to_string(),
        sj_api_base_url: "http://sj.test/2.30".to_string(),
        sj_token: Some("test-token".to_string()),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        ..Config::default()
    }
}

/// HeadHunter 与 SuperJob 的模拟接口：
/// "TestCity" 在两家目录中的 ID 都是 42，"Go" 有两个职位，其他词没有职位
fn fake_api(request: &ApiRequest) -> AppResult<Value> {
    let url = request.url.as_str();
    let term = request
        .query_value("text")
        .or_else(|| request.query_value("keywords[0][keys]"))
        .unwrap_or_default();

    if url.ends_with("/areas") {
        return Ok(json!([
            {"id": "113", "name": "Country", "areas": [
                {"id": "7", "name": "Region", "areas": [
                    {"id": "42", "name": "TestCity", "areas": []}
                ]}
            ]}
        ]));
    }
    if url.ends_with("/regions/combined/") {
        return Ok(json!([
            {"id": 1, "title": "Country", "towns": [],
             "regions": [{"id": 7, "title": "Region", "towns": [{"id": 42, "title": "TestCity"}]}]}
        ]));
    }
    if url.ends_with("/vacancies") {
        assert_eq!(request.query_value("area"), Some("42"));
        let items = match term {
            "Go" => json!([
                {"salary": {"from": 100000, "to": null, "currency": "RUR"}},
                {"salary": {"from": null, "to": 200000, "currency": "RUR"}}
            ]),
            "Rust" => json!([{"salary": {"from": 3000, "to": 5000, "currency": "USD"}}]),
            _ => json!([]),
        };
        return Ok(json!({"items": items, "pages": 1}));
    }
    if url.ends_with("/vacancies/") {
        assert_eq!(request.query_value("town"), Some("42"));
        let objects = match term {
            "Go" => json!([
                {"payment_from": 100000, "payment_to": 0, "currency": "rub"},
                {"payment_from": 0, "payment_to": 200000, "currency": "rub"}
            ]),
            "Rust" => json!([{"payment_from": 0, "payment_to": 0, "currency": "rub"}]),
            _ => json!([]),
        };
        return Ok(json!({"objects": objects, "more": false}));
    }
    panic!("unexpected request: {:?}", request);
}

fn go_stats() -> TermStatistics {
    TermStatistics {
        term: "Go".to_string(),
        vacancies_count: 2,
        vacancies_processed: 2,
        average_salary: 140_000,
    }
}

#[tokio::test]
async fn test_end_to_end_head_hunter() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let client = HeadHunterClient::new(&config(&["Go"]), transport as Arc<dyn Transport>);

    let rows = assert_ok!(
        StatsService::new(&client)
            .collect("TestCity", &["Go".to_string()])
            .await
    );
    assert_eq!(rows, vec![go_stats()]);
}

#[tokio::test]
async fn test_end_to_end_super_job() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let client = SuperJobClient::new(&config(&["Go"]), transport as Arc<dyn Transport>);

    let rows = assert_ok!(
        StatsService::new(&client)
            .collect("TestCity", &["Go".to_string()])
            .await
    );
    assert_eq!(rows, vec![go_stats()]);
}

#[tokio::test]
async fn test_unusable_vacancies_still_counted() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let hh = HeadHunterClient::new(&config(&[]), transport.clone() as Arc<dyn Transport>);
    let sj = SuperJobClient::new(&config(&[]), transport as Arc<dyn Transport>);

    for stats in [
        StatsService::new(&hh).collect_term("TestCity", "Rust").await.unwrap(),
        StatsService::new(&sj).collect_term("TestCity", "Rust").await.unwrap(),
    ] {
        assert_eq!(stats.vacancies_count, 1);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }
}

#[tokio::test]
async fn test_terms_keep_catalog_order_and_resolve_per_term() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let client = HeadHunterClient::new(&config(&[]), transport.clone() as Arc<dyn Transport>);
    let terms: Vec<String> = ["Python", "Go", "Rust"].iter().map(|s| s.to_string()).collect();

    let rows = StatsService::new(&client).collect("TestCity", &terms).await.unwrap();

    let names: Vec<&str> = rows.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(names, vec!["Python", "Go", "Rust"]);
    assert_eq!(transport.requests_to("/areas").len(), 3);
}

#[tokio::test]
async fn test_collect_is_idempotent() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let client = SuperJobClient::new(&config(&[]), transport as Arc<dyn Transport>);
    let terms: Vec<String> = vec!["Go".to_string(), "Rust".to_string(), "C".to_string()];
    let service = StatsService::new(&client);

    let first = service.collect("TestCity", &terms).await.unwrap();
    let second = service.collect("TestCity", &terms).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_city_fails_with_stage_context() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let client = HeadHunterClient::new(&config(&[]), transport.clone() as Arc<dyn Transport>);

    let err = assert_err!(
        StatsService::new(&client)
            .collect("Atlantis", &["Go".to_string(), "Rust".to_string()])
            .await
    );

    assert!(err.is_location_not_found());
    match &err {
        AppError::Stage {
            provider,
            term,
            stage,
            ..
        } => {
            assert_eq!(*provider, Provider::HeadHunter);
            assert_eq!(term, "Go");
            assert_eq!(*stage, Stage::ResolveLocation);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // 第一个搜索词失败后不再继续
    assert!(transport.requests_to("/vacancies").is_empty());
}

#[tokio::test]
async fn test_fetch_failure_names_the_term() {
    let transport = Arc::new(ScriptedTransport::new(|request| {
        let term = request.query_value("keywords[0][keys]");
        if request.url.ends_with("/vacancies/") && term == Some("Java") {
            return Err(AppError::bad_status(Provider::SuperJob, request.endpoint(), 500));
        }
        fake_api(request)
    }));
    let client = SuperJobClient::new(&config(&[]), transport as Arc<dyn Transport>);
    let terms: Vec<String> = vec!["Go".to_string(), "Java".to_string()];

    let err = assert_err!(StatsService::new(&client).collect("TestCity", &terms).await);
    assert!(err.is_transport_error());
    assert_eq!(err.to_string(), "[SuperJob] term 'Java': fetch vacancies failed");
}

#[tokio::test]
async fn test_app_builds_both_reports() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let app = App::with_transport(config(&["Go", "Rust"]), transport.clone());

    let reports = app
        .run("TestCity", &[Provider::HeadHunter, Provider::SuperJob])
        .await
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].provider, Provider::HeadHunter);
    assert_eq!(reports[1].provider, Provider::SuperJob);
    for report in &reports {
        assert_eq!(report.city, "TestCity");
        assert_eq!(report.rows[0], go_stats());
        assert_eq!(report.rows[1].vacancies_processed, 0);
    }

    let table = render_report(&reports[0]);
    assert!(table.starts_with("╔Head Hunter vacancies"));
    assert!(table.contains("║ Go       ║ 2               ║ 2                   ║ 140000         ║"));

    let sj_requests = transport.requests_to("/vacancies/");
    assert!(sj_requests
        .iter()
        .all(|r| r.headers.iter().any(|(k, v)| k == "X-Api-App-Id" && v == "test-token")));
}

#[tokio::test]
async fn test_app_runs_only_selected_provider() {
    let transport = Arc::new(ScriptedTransport::new(fake_api));
    let app = App::with_transport(config(&["Go"]), transport.clone());

    let reports = app.run("TestCity", &[Provider::SuperJob]).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].provider, Provider::SuperJob);
    assert!(transport.requests_to("/areas").is_empty());
    // 一次目录请求 + 一页职位
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(page_of(&requests[1]), 0);
}

/// 访问真实接口，需要网络
#[tokio::test]
#[ignore]
async fn test_live_head_hunter() {
    salary_stats::logger::init(true);
    let config = Config {
        languages: vec!["Python".to_string()],
        ..Config::default()
    };
    let app = App::initialize(config).unwrap();
    let reports = app.run("Москва", &[Provider::HeadHunter]).await.unwrap();
    println!("{}", render_report(&reports[0]));
    assert!(reports[0].rows[0].vacancies_count > 0);
}
