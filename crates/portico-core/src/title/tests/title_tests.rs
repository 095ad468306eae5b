use std::sync::Arc;

use serde_json::json;

use crate::config::Preferences;
use crate::i18n::Translator;
use crate::kernel::constants::ConstantsRegistry;
use crate::router::{Router, aggregate, modules};
use crate::title::{MemoryTitleSink, TitleReactor};

fn router() -> Router {
    let constants = ConstantsRegistry::with_defaults();
    Router::new(aggregate(modules::all(&constants).unwrap()).unwrap())
}

fn translator() -> Arc<Translator> {
    Arc::new(
        Translator::from_json("en-US", &json!({ "demos": { "vben": { "about": "About" } } })).unwrap(),
    )
}

#[tokio::test]
async fn test_title_combines_route_and_app_name() {
    let router = router();
    let prefs = Preferences::new("Vben Admin", true);
    let sink = Arc::new(MemoryTitleSink::new());
    let _reactor = TitleReactor::subscribe(&router, &prefs, translator(), sink.clone());

    assert_eq!(sink.writes(), vec!["Vben Admin".to_string()]);

    router.navigate("/word-generator").await.unwrap();
    assert_eq!(sink.last().as_deref(), Some("项目方案生成 - Vben Admin"));

    router.navigate("/vben-admin/about").await.unwrap();
    assert_eq!(sink.last().as_deref(), Some("About - Vben Admin"));
}

#[tokio::test]
async fn test_disabled_dynamic_title_writes_nothing() {
    let router = router();
    let prefs = Preferences::new("Vben Admin", false);
    let sink = Arc::new(MemoryTitleSink::new());
    let reactor = TitleReactor::subscribe(&router, &prefs, translator(), sink.clone());

    router.navigate("/word-generator").await.unwrap();
    prefs.app.name.set("Renamed".to_string());
    assert_eq!(sink.count(), 0);
    assert_eq!(reactor.compute(), None);

    // turning it on re-evaluates with the current route
    prefs.app.dynamic_title.set(true);
    assert_eq!(sink.writes(), vec!["项目方案生成 - Renamed".to_string()]);
}

#[tokio::test]
async fn test_evaluation_is_idempotent() {
    let router = router();
    let prefs = Preferences::new("Vben Admin", true);
    let sink = Arc::new(MemoryTitleSink::new());
    let reactor = TitleReactor::subscribe(&router, &prefs, translator(), sink.clone());

    router.navigate("/Report-generator").await.unwrap();
    let first = reactor.compute();
    reactor.evaluate();
    reactor.evaluate();

    assert_eq!(reactor.compute(), first);
    let writes = sink.writes();
    assert!(writes.iter().skip(1).all(|w| w == "项目报告生成 - Vben Admin"));

    // unchanged preference values do not notify
    let before = sink.count();
    prefs.app.name.set("Vben Admin".to_string());
    assert_eq!(sink.count(), before);
}

#[tokio::test]
async fn test_stopped_reactor_ignores_changes() {
    let router = router();
    let prefs = Preferences::new("Vben Admin", true);
    let sink = Arc::new(MemoryTitleSink::new());
    let mut reactor = TitleReactor::subscribe(&router, &prefs, translator(), sink.clone());
    assert!(reactor.is_active());
    assert_eq!(router.current().subscriber_count(), 1);

    reactor.stop();
    assert!(!reactor.is_active());
    assert_eq!(router.current().subscriber_count(), 0);

    router.navigate("/word-generator").await.unwrap();
    prefs.app.name.set("Other".to_string());
    assert_eq!(sink.count(), 1, "only the initial evaluation was written");
}

#[tokio::test]
async fn test_dropping_reactor_unsubscribes() {
    let router = router();
    let prefs = Preferences::new("Vben Admin", true);
    let sink = Arc::new(MemoryTitleSink::new());
    {
        let _reactor = TitleReactor::subscribe(&router, &prefs, translator(), sink.clone());
        assert_eq!(prefs.app.name.subscriber_count(), 1);
    }
    assert_eq!(prefs.app.name.subscriber_count(), 0);
    router.navigate("/word-generator").await.unwrap();
    assert_eq!(sink.count(), 1);
}
