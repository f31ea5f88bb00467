use std::rc::Rc;

use theme::memory::{ManualColorScheme, ManualStorageEvents, MemoryStore, RecordingSurface};
use theme::ResolvedTheme;

use super::*;

struct Fixture {
    scheme: Rc<ManualColorScheme>,
    events: Rc<ManualStorageEvents>,
    surface: Rc<RecordingSurface>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            scheme: Rc::new(ManualColorScheme::new(Some(false))),
            events: Rc::new(ManualStorageEvents::new()),
            surface: Rc::new(RecordingSurface::new()),
        }
    }

    fn env(&self) -> ThemeEnv {
        ThemeEnv {
            store: Rc::new(MemoryStore::new()),
            color_scheme: self.scheme.clone(),
            storage_events: self.events.clone(),
            surface: self.surface.clone(),
        }
    }
}

#[test]
fn bound_theme_mounts_immediately() {
    let fixture = Fixture::new();
    Owner::new().with(|| {
        let theme = provide_theme();
        bind_theme(theme, fixture.env());

        assert!(theme.is_attached());
        assert_eq!(theme.resolved(), ResolvedTheme::Light);
        assert_eq!(fixture.surface.theme_attribute().as_deref(), Some("light"));
        assert_eq!(fixture.scheme.listener_count(), 1);
        assert_eq!(fixture.events.listener_count(), 1);
    });
}

#[test]
fn owner_cleanup_releases_listeners() {
    let fixture = Fixture::new();
    Owner::new().with(|| {
        let theme = provide_theme();
        let scope = Owner::new();
        scope.with(|| bind_theme(theme, fixture.env()));
        assert_eq!(fixture.scheme.listener_count(), 1);

        scope.cleanup();

        assert!(!theme.is_attached());
        assert_eq!(fixture.scheme.listener_count(), 0);
        assert_eq!(fixture.events.listener_count(), 0);
        fixture.scheme.set_prefers_dark(Some(true));
        assert_eq!(theme.resolved(), ResolvedTheme::Light);
    });
}
