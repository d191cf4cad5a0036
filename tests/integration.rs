// SPDX-License-Identifier: MPL-2.0
use std::rc::Rc;

use crown_storefront::application::port::IntersectionEntry;
use crown_storefront::config::{self, Config};
use crown_storefront::domain::gallery::ImageSet;
use crown_storefront::events::EventSource;
use crown_storefront::i18n::I18n;
use crown_storefront::infrastructure::memory::{
    ManualScheduler, MemoryShowcasePage, RecordingObserver,
};
use crown_storefront::showcase::{self, Key, ShowcaseController, ShowcaseEvent, ShowcaseSettings};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("status-no-images"), "No images found.");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("status-no-images"), "Aucune image trouvée.");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_config_file_drives_slideshow() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[slideshow]\ncount = 3\nbasename = \"card\"\nfull_folder = \"full/\"\nthumb_folder = \"thumbs/\"\ninterval_ms = 1000\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let images = ImageSet::generate(&config.slideshow.image_set_spec());
    assert_eq!(images.len(), 3);
    let last = images.get(2).expect("third image");
    assert_eq!(last.full(), "full/card3.jpg");
    assert_eq!(last.thumb_or_full(), "thumbs/card3.jpg");

    let mut controller = ShowcaseController::new(
        MemoryShowcasePage::complete(),
        ManualScheduler::new(),
        RecordingObserver::new(),
        images,
        ShowcaseSettings::from_config(&config),
        Rc::new(I18n::new(Some("en-US".to_string()), &config)),
    );
    controller.init();

    let timer = controller.autoplay_timer().expect("autoplay running");
    assert_eq!(
        controller.scheduler().period_of(timer),
        Some(std::time::Duration::from_millis(1000))
    );
}

#[test]
fn test_broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[slideshow\ncount = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_WARNING));
}

#[test]
fn test_full_showcase_session() {
    let config = Config::default();
    let controller = ShowcaseController::new(
        MemoryShowcasePage::complete(),
        ManualScheduler::new(),
        RecordingObserver::new(),
        ImageSet::generate(&config.slideshow.image_set_spec()),
        ShowcaseSettings::from_config(&config),
        Rc::new(I18n::new(Some("en-US".to_string()), &config)),
    );
    let mut events = EventSource::new();
    let (showcase, _subscription) = showcase::mount(controller, &mut events);

    // Thumbnails 0 and 1 scroll near the viewport.
    events.emit(&ShowcaseEvent::Intersections(vec![
        IntersectionEntry { index: 0, is_intersecting: true },
        IntersectionEntry { index: 1, is_intersecting: true },
        IntersectionEntry { index: 5, is_intersecting: false },
    ]));
    {
        let showcase = showcase.borrow();
        let gallery = showcase.page().gallery_grid().expect("gallery");
        assert!(gallery.thumbnail(0).expect("thumb 0").loaded_src.is_some());
        assert!(gallery.thumbnail(5).expect("thumb 5").loaded_src.is_none());
        assert!(!showcase.observer().observed().contains(&0));
        assert!(showcase.observer().observed().contains(&5));
    }

    // Autoplay advances twice.
    let timer = showcase.borrow().autoplay_timer().expect("autoplay running");
    events.emit(&ShowcaseEvent::Tick(timer));
    events.emit(&ShowcaseEvent::Tick(timer));
    assert_eq!(showcase.borrow().status_text(), "3 / 12");

    // Opening a thumbnail pauses autoplay.
    events.emit(&ShowcaseEvent::ThumbnailActivated(3));
    {
        let showcase = showcase.borrow();
        assert!(!showcase.is_autoplaying());
        let lightbox = showcase.page().lightbox_view().expect("lightbox");
        assert!(lightbox.visible);
        assert_eq!(lightbox.caption, "Image 4 / 12");
        assert_eq!(lightbox.image.as_deref(), Some("images/portfolio/work4.jpg"));
    }

    // Escape closes it and autoplay resumes on a fresh timer.
    events.emit(&ShowcaseEvent::KeyDown(Key::from_dom("Escape")));
    {
        let showcase = showcase.borrow();
        assert!(showcase.is_autoplaying());
        assert_ne!(showcase.autoplay_timer(), Some(timer));
        assert_eq!(showcase.scheduler().active_timers().len(), 1);
        let lightbox = showcase.page().lightbox_view().expect("lightbox");
        assert!(!lightbox.visible);
        assert!(lightbox.image.is_none());
    }

    // The cancelled timer no longer moves the slideshow.
    events.emit(&ShowcaseEvent::Tick(timer));
    assert_eq!(showcase.borrow().status_text(), "3 / 12");
}

#[test]
fn test_empty_image_set_shows_message_only() {
    let mut config = Config::default();
    config.slideshow.count = 0;
    let controller = ShowcaseController::new(
        MemoryShowcasePage::complete(),
        ManualScheduler::new(),
        RecordingObserver::new(),
        ImageSet::generate(&config.slideshow.image_set_spec()),
        ShowcaseSettings::from_config(&config),
        Rc::new(I18n::new(Some("en-US".to_string()), &config)),
    );
    let mut events = EventSource::new();
    let (showcase, _subscription) = showcase::mount(controller, &mut events);

    events.emit(&ShowcaseEvent::VisibilityChanged { hidden: true });
    events.emit(&ShowcaseEvent::VisibilityChanged { hidden: false });

    let showcase = showcase.borrow();
    assert_eq!(showcase.page().status_text(), Some("No images found."));
    assert!(showcase.page().track().expect("track").slide().is_none());
    assert_eq!(showcase.page().gallery_grid().expect("gallery").len(), 0);
    assert_eq!(showcase.scheduler().started_count(), 0);
}
