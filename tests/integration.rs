// SPDX-License-Identifier: MPL-2.0
use midway_mews::catalog;
use midway_mews::config::{self, Config};
use midway_mews::domain::catalog::{filter, GalleryFilter};
use midway_mews::i18n::fluent::I18n;
use midway_mews::ui::gallery;
use midway_mews::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn all_filter_returns_the_catalog_in_order() {
    let visible = filter::visible_items(catalog::gallery_items(), &GalleryFilter::All);
    let ids: Vec<_> = visible.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["g1", "g2", "g3", "g4", "g5", "g6", "g7", "g8"]);
}

#[test]
fn tag_filter_returns_exactly_the_tagged_subsequence() {
    for option in filter::tag_options(catalog::gallery_items()) {
        let visible = filter::visible_items(catalog::gallery_items(), &option);

        if let Some(tag) = option.tag() {
            assert!(visible.iter().all(|item| item.tag == tag));

            let expected: Vec<_> = catalog::gallery_items()
                .iter()
                .filter(|item| item.tag == tag)
                .map(|item| item.id)
                .collect();
            let actual: Vec<_> = visible.iter().map(|item| item.id).collect();
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn tag_options_lead_with_the_sentinel_and_have_no_duplicates() {
    let options = filter::tag_options(catalog::gallery_items());
    assert_eq!(options.first(), Some(&GalleryFilter::All));

    for option in &options {
        assert_eq!(options.iter().filter(|o| *o == option).count(), 1);
    }

    // The shipped catalog has six distinct tags plus the sentinel.
    assert_eq!(options.len(), 7);
}

#[test]
fn braiding_filter_selects_g1_then_g7() {
    let mut state = gallery::State::new();
    gallery::update(
        &mut state,
        gallery::Message::FilterSelected(GalleryFilter::Tag("Braiding".to_string())),
    );

    let ids: Vec<_> = state.visible_items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["g1", "g7"]);
}

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: Some(ThemeMode::System),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: Some(ThemeMode::System),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_chrome_key_exists_in_both_locales() {
    let mut i18n = I18n::default();
    let keys = [
        "window-title",
        "nav-home",
        "nav-services",
        "nav-portfolio",
        "nav-contact",
        "navbar-call-to-book",
        "home-explore-button",
        "services-title",
        "gallery-filter-all",
        "gallery-empty",
        "contact-form-submit",
        "footer-copyright",
    ];

    for locale in ["en-US", "fr"] {
        i18n.set_locale(locale.parse().unwrap());
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING:"),
                "missing {key} in {locale}"
            );
        }
    }
}
