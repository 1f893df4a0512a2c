//! Banner section editor

use super::{toggle_link, SectionEditor};
use crate::types::{Banner, BannerSectionData, BannerVariant, LandingBanner};

/// Editable banner fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerField {
    Image(String),
    Title(String),
    Subtitle(Option<String>),
    Variant(BannerVariant),
}

/// Which link set of a banner a toggle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLinkSlot {
    /// The banner's own links
    Banner,
    /// Links of the nested landing banner
    Landing,
}

/// Banner section edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerEdit {
    Add(Banner),
    Remove {
        banner_id: String,
    },
    Update {
        banner_id: String,
        field: BannerField,
    },
    ToggleLink {
        banner_id: String,
        slot: BannerLinkSlot,
        product_id: String,
    },
    /// `None` removes the landing banner together with its links
    SetLandingImage {
        banner_id: String,
        image: Option<String>,
    },
}

/// Banner section editor
pub struct BannerEditor;

impl SectionEditor for BannerEditor {
    type Payload = BannerSectionData;
    type Item = Banner;
    type Field = BannerField;

    fn items(payload: &BannerSectionData) -> &[Banner] {
        &payload.banners
    }

    fn with_items(_payload: &BannerSectionData, banners: Vec<Banner>) -> BannerSectionData {
        BannerSectionData { banners }
    }

    fn apply_field(banner: &mut Banner, field: BannerField) {
        match field {
            BannerField::Image(image) => banner.image = image,
            BannerField::Title(title) => banner.title = title,
            BannerField::Subtitle(subtitle) => banner.subtitle = subtitle,
            BannerField::Variant(variant) => banner.variant = variant,
        }
    }
}

impl BannerEditor {
    /// Apply one edit
    #[must_use]
    pub fn apply(payload: &BannerSectionData, edit: BannerEdit) -> BannerSectionData {
        match edit {
            BannerEdit::Add(banner) => Self::add(payload, banner),
            BannerEdit::Remove { banner_id } => Self::remove(payload, &banner_id),
            BannerEdit::Update { banner_id, field } => Self::update(payload, &banner_id, field),
            BannerEdit::ToggleLink {
                banner_id,
                slot,
                product_id,
            } => Self::toggle_link(payload, &banner_id, slot, &product_id),
            BannerEdit::SetLandingImage { banner_id, image } => {
                Self::set_landing_image(payload, &banner_id, image)
            }
        }
    }

    /// Toggle a product on the banner or on its landing banner.
    ///
    /// Toggling a landing link on a banner without one creates an image-less
    /// landing banner to hold the link.
    #[must_use]
    pub fn toggle_link(
        payload: &BannerSectionData,
        banner_id: &str,
        slot: BannerLinkSlot,
        product_id: &str,
    ) -> BannerSectionData {
        Self::modify(payload, banner_id, |banner| match slot {
            BannerLinkSlot::Banner => {
                banner.linked_product_ids = toggle_link(&banner.linked_product_ids, product_id);
            }
            BannerLinkSlot::Landing => {
                let landing = banner.landing_banner.get_or_insert_with(LandingBanner::default);
                landing.linked_product_ids = toggle_link(&landing.linked_product_ids, product_id);
            }
        })
    }

    /// Set or clear the landing banner image
    #[must_use]
    pub fn set_landing_image(
        payload: &BannerSectionData,
        banner_id: &str,
        image: Option<String>,
    ) -> BannerSectionData {
        Self::modify(payload, banner_id, |banner| match image {
            Some(image) => {
                banner
                    .landing_banner
                    .get_or_insert_with(LandingBanner::default)
                    .image = image;
            }
            None => banner.landing_banner = None,
        })
    }
}
