#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder`, `AppState` and `load_config`.

use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use storefront_composer_app::adapters::{JsonCatalogSource, JsonLayoutStore, PUBLISHED_FILE};
use storefront_composer_app::{load_config, AppState, AppStateBuilder};
use storefront_composer_core::config::ComposerConfig;
use storefront_composer_core::error::CoreError;
use storefront_composer_core::services::editors::{
    BannerEdit, BannerField, BannerLinkSlot, SectionEdit,
};
use storefront_composer_core::services::{ScreenView, SectionBody};
use storefront_composer_core::traits::Notifier;
use storefront_composer_core::types::{Banner, Notification, NotificationLevel, SectionKind};

// ===== Helpers =====

#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn levels(&self) -> Vec<NotificationLevel> {
        self.seen.lock().unwrap().iter().map(|n| n.level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("catalog.json");
    let catalog = serde_json::json!({
        "products": [
            {
                "id": "p-apple",
                "name": "Apple",
                "weight": "1 kg",
                "price": 2.5,
                "originalPrice": 3.0,
                "discount": 17.0,
                "image": "https://img/apple.png",
                "categoryId": "sub-fruit"
            },
            {
                "id": "p-milk",
                "name": "Milk",
                "weight": "1 l",
                "price": 1.2,
                "originalPrice": 1.2,
                "image": "https://img/milk.png",
                "categoryId": "sub-milk"
            }
        ],
        "categories": [
            {
                "id": "cat-produce",
                "name": "Produce",
                "subCategories": [{ "id": "sub-fruit", "name": "Fruit" }]
            },
            {
                "id": "cat-dairy",
                "name": "Dairy",
                "subCategories": [{ "id": "sub-milk", "name": "Milk" }]
            }
        ]
    });
    std::fs::write(&path, serde_json::to_string(&catalog).unwrap()).unwrap();
    path
}

fn build_state(dir: &Path, notifier: Arc<RecordingNotifier>) -> AppState {
    AppStateBuilder::new()
        .catalog_source(Arc::new(JsonCatalogSource::new(write_catalog(dir))))
        .layout_store(Arc::new(JsonLayoutStore::new(dir.join("layouts"))))
        .notifier(notifier)
        .build()
        .expect("build should succeed")
}

// ===== Builder =====

#[tokio::test]
async fn builder_with_required_adapters_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    let state = build_state(tmp.path(), Arc::new(RecordingNotifier::default()));

    assert!(!state.startup_completed.load(Ordering::SeqCst));
    assert!(state.composer.read().await.sections().is_empty());
    assert_eq!(state.ctx.config, ComposerConfig::default());
}

#[tokio::test]
async fn builder_missing_catalog_source_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let result = AppStateBuilder::new()
        .layout_store(Arc::new(JsonLayoutStore::new(tmp.path())))
        .build();

    match result {
        Err(CoreError::ValidationError(msg)) => assert!(msg.contains("catalog_source")),
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("build should fail"),
    }
}

#[tokio::test]
async fn builder_missing_layout_store_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let result = AppStateBuilder::new()
        .catalog_source(Arc::new(JsonCatalogSource::new(tmp.path().join("c.json"))))
        .build();

    assert!(matches!(result, Err(CoreError::ValidationError(msg)) if msg.contains("layout_store")));
}

#[tokio::test]
async fn builder_rejects_invalid_config() {
    let tmp = tempfile::tempdir().unwrap();
    let result = AppStateBuilder::new()
        .catalog_source(Arc::new(JsonCatalogSource::new(tmp.path().join("c.json"))))
        .layout_store(Arc::new(JsonLayoutStore::new(tmp.path())))
        .config(ComposerConfig {
            max_sections: 0,
            ..ComposerConfig::default()
        })
        .build();

    assert!(matches!(result, Err(CoreError::ConfigError(_))));
}

// ===== Startup =====

#[tokio::test]
async fn startup_loads_catalog_and_sets_flag() {
    let tmp = tempfile::tempdir().unwrap();
    let state = build_state(tmp.path(), Arc::new(RecordingNotifier::default()));

    state.run_startup().await.unwrap();

    assert!(state.startup_completed.load(Ordering::SeqCst));
    let catalog = state.catalog.read().await;
    assert_eq!(catalog.products.len(), 2);
    assert_eq!(catalog.categories.len(), 2);
}

#[tokio::test]
async fn startup_fails_without_catalog_file() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppStateBuilder::new()
        .catalog_source(Arc::new(JsonCatalogSource::new(tmp.path().join("missing.json"))))
        .layout_store(Arc::new(JsonLayoutStore::new(tmp.path())))
        .build()
        .unwrap();

    let err = state.run_startup().await.unwrap_err();

    assert!(matches!(err, CoreError::CatalogError(_)));
    assert!(!state.startup_completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn draft_is_restored_on_next_startup() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = Arc::new(RecordingNotifier::default());

    let first = build_state(tmp.path(), notifier.clone());
    first.run_startup().await.unwrap();
    {
        let mut composer = first.composer.write().await;
        composer.add_section(SectionKind::Stories).unwrap();
        composer.add_section(SectionKind::ProductList).unwrap();
    }
    first.save_draft().await.unwrap();
    assert_eq!(notifier.levels(), vec![NotificationLevel::Success]);

    let second = build_state(tmp.path(), notifier.clone());
    second.run_startup().await.unwrap();

    let restored = second.composer.read().await;
    let original = first.composer.read().await;
    assert_eq!(restored.sections(), original.sections());
    assert!(restored.selected_id().is_none());
}

// ===== Save / publish =====

#[tokio::test]
async fn publish_writes_published_file() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let state = build_state(tmp.path(), notifier.clone());
    state.run_startup().await.unwrap();

    let mut banner = Banner::new("Fresh", "https://img/fresh.png");
    banner.linked_product_ids.insert("p-apple".to_string());
    {
        let mut composer = state.composer.write().await;
        let id = composer.add_section(SectionKind::Banner).unwrap();
        composer
            .edit_section(&id, SectionEdit::Banner(BannerEdit::Add(banner)))
            .unwrap();
    }

    state.publish().await.unwrap();

    assert!(tmp.path().join("layouts").join(PUBLISHED_FILE).exists());
    assert_eq!(notifier.levels(), vec![NotificationLevel::Success]);
}

#[tokio::test]
async fn incomplete_layout_is_not_published() {
    let tmp = tempfile::tempdir().unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let state = build_state(tmp.path(), notifier.clone());
    state.run_startup().await.unwrap();
    {
        let mut composer = state.composer.write().await;
        let id = composer.add_section(SectionKind::Banner).unwrap();
        let banner = Banner::new("Fresh", "https://img/fresh.png");
        let banner_id = banner.id.clone();
        composer
            .edit_section(&id, SectionEdit::Banner(BannerEdit::Add(banner)))
            .unwrap();
        composer
            .edit_section(
                &id,
                SectionEdit::Banner(BannerEdit::Update {
                    banner_id,
                    field: BannerField::Image(String::new()),
                }),
            )
            .unwrap();
    }

    let err = state.publish().await.unwrap_err();

    assert!(matches!(err, CoreError::ValidationError(_)));
    assert!(!tmp.path().join("layouts").join(PUBLISHED_FILE).exists());
    assert_eq!(notifier.levels(), vec![NotificationLevel::Error]);
}

// ===== Preview =====

#[tokio::test]
async fn preview_follows_composer_edits() {
    let tmp = tempfile::tempdir().unwrap();
    let state = build_state(tmp.path(), Arc::new(RecordingNotifier::default()));
    state.run_startup().await.unwrap();

    let banner = Banner::new("Fresh", "https://img/fresh.png");
    let banner_id = banner.id.clone();
    let section_id = {
        let mut composer = state.composer.write().await;
        let id = composer.add_section(SectionKind::Banner).unwrap();
        composer
            .edit_section(&id, SectionEdit::Banner(BannerEdit::Add(banner)))
            .unwrap();
        id
    };

    let interactive = |view: ScreenView| match view {
        ScreenView::Home { sections, .. } => match &sections[0].body {
            SectionBody::Banners(tiles) => tiles[0].interactive,
            other => panic!("unexpected body {other:?}"),
        },
        other => panic!("unexpected view {other:?}"),
    };
    assert!(!interactive(state.preview().await));

    state
        .composer
        .write()
        .await
        .edit_section(
            &section_id,
            SectionEdit::Banner(BannerEdit::ToggleLink {
                banner_id,
                slot: BannerLinkSlot::Banner,
                product_id: "p-milk".to_string(),
            }),
        )
        .unwrap();

    assert!(interactive(state.preview().await));
}

// ===== Config =====

#[tokio::test]
async fn missing_config_file_yields_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let config = load_config(&tmp.path().join("composer.json")).await.unwrap();
    assert_eq!(config, ComposerConfig::default());
}

#[tokio::test]
async fn config_file_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("composer.json");
    std::fs::write(&path, r#"{"maxSections": 5, "validateDrafts": false}"#).unwrap();

    let config = load_config(&path).await.unwrap();

    assert_eq!(config.max_sections, 5);
    assert!(!config.validate_drafts);
    assert_eq!(config.empty_state_message, ComposerConfig::default().empty_state_message);
}

#[tokio::test]
async fn invalid_config_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("composer.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(load_config(&path).await, Err(CoreError::ConfigError(_))));
}
