//! Draft save / publish service

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::ComposerConfig;
use crate::error::{CoreError, CoreResult};
use crate::traits::{LayoutStore, Notifier};
use crate::types::{Notification, Section, SectionData};

/// Check required fields of every section.
///
/// Returns one message per problem, in section order. Dangling product links
/// are not reported here; they resolve to nothing at render time.
#[must_use]
pub fn validate_sections(sections: &[Section]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for (index, section) in sections.iter().enumerate() {
        let label = match section.title() {
            Some(title) if !title.trim().is_empty() => format!("\"{title}\""),
            _ => format!("#{} ({})", index + 1, section.kind()),
        };
        if !seen.insert(section.id()) {
            problems.push(format!("Section {label}: duplicate id {}", section.id()));
        }

        match section.data() {
            SectionData::Banner(data) => {
                for (i, banner) in data.banners.iter().enumerate() {
                    if banner.image.trim().is_empty() {
                        problems.push(format!("Section {label}: banner {} has no image", i + 1));
                    }
                    if banner.title.trim().is_empty() {
                        problems.push(format!("Section {label}: banner {} has no title", i + 1));
                    }
                }
            }
            SectionData::CategoryGrid(data) => {
                for (i, category) in data.categories.iter().enumerate() {
                    if category.name.trim().is_empty() {
                        problems.push(format!("Section {label}: category {} has no name", i + 1));
                    }
                    for (j, sub) in category.sub_categories.iter().enumerate() {
                        if sub.name.trim().is_empty() {
                            problems.push(format!(
                                "Section {label}: subcategory {} of category {} has no name",
                                j + 1,
                                i + 1
                            ));
                        }
                    }
                }
            }
            SectionData::LifestyleBanner(data) => {
                if data.image.trim().is_empty() {
                    problems.push(format!("Section {label}: lifestyle banner has no image"));
                }
            }
            SectionData::FlashSale(data) => {
                for (i, item) in data.items.iter().enumerate() {
                    if item.product_id.trim().is_empty() {
                        problems.push(format!("Section {label}: flash sale item {} has no product", i + 1));
                    }
                }
            }
            SectionData::Stories(data) => {
                for (i, story) in data.stories.iter().enumerate() {
                    if story.image.trim().is_empty() {
                        problems.push(format!("Section {label}: story {} has no image", i + 1));
                    }
                }
            }
            SectionData::ProductList(_) | SectionData::WellbeingGrid(_) => {}
        }
    }
    problems
}

/// Persists layouts through the host's store and reports outcomes to the
/// notification channel. The section sequence is only borrowed.
pub struct LayoutPublishService {
    store: Arc<dyn LayoutStore>,
    notifier: Arc<dyn Notifier>,
    config: ComposerConfig,
}

impl LayoutPublishService {
    #[must_use]
    pub fn new(store: Arc<dyn LayoutStore>, notifier: Arc<dyn Notifier>, config: ComposerConfig) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Save the working draft
    pub async fn save_draft(&self, sections: &[Section]) -> CoreResult<()> {
        if self.config.validate_drafts {
            self.check(validate_sections(sections))?;
        }
        match self.store.save_draft(sections).await {
            Ok(()) => {
                log::info!("Draft saved ({} sections)", sections.len());
                self.notifier.notify(Notification::success("Draft saved"));
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to save draft", e)),
        }
    }

    /// Validate and publish
    pub async fn publish(&self, sections: &[Section]) -> CoreResult<()> {
        let mut problems = Vec::new();
        if sections.is_empty() {
            problems.push("Layout has no sections".to_string());
        }
        problems.extend(validate_sections(sections));
        self.check(problems)?;

        match self.store.publish(sections).await {
            Ok(()) => {
                log::info!("Layout published ({} sections)", sections.len());
                self.notifier.notify(Notification::success("Layout published"));
                Ok(())
            }
            Err(e) => Err(self.fail("Failed to publish layout", e)),
        }
    }

    /// Last saved draft, empty when nothing was saved
    pub async fn load_draft(&self) -> CoreResult<Vec<Section>> {
        Ok(self.store.load_draft().await?.unwrap_or_default())
    }

    fn check(&self, problems: Vec<String>) -> CoreResult<()> {
        if problems.is_empty() {
            return Ok(());
        }
        let message = problems.join("; ");
        Err(self.fail("Layout is incomplete", CoreError::ValidationError(message)))
    }

    fn fail(&self, context: &str, err: CoreError) -> CoreError {
        if err.is_expected() {
            log::warn!("{context}: {err}");
        } else {
            log::error!("{context}: {err}");
        }
        self.notifier
            .notify(Notification::error(format!("{context}: {err}")));
        err
    }
}
