use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::FutureExt;

use crate::i18n::Text;
use crate::tests::common::mocks::RecordingPage;
use crate::tests::common::{ returning_visitor, setup };
use crate::utils::{
    apply_language,
    apply_theme,
    load_preference,
    save_preference,
    Language,
    LanguageState,
    MemoryStore,
    Theme,
    ThemeState,
};

#[test]
fn test_language_toggle_persists_across_reload() {
    setup();
    let store = MemoryStore::new();
    let mut state = LanguageState { language: load_preference(&store) };
    assert_eq!(state.t(Text::CopiedHint), "Скопировано в буфер обмена!");

    state.language = state.language.toggled();
    save_preference(&store, state.language);

    let reloaded = LanguageState { language: load_preference(&store) };
    assert_eq!(reloaded.language, Language::En);
    assert_eq!(reloaded.t(Text::CopiedHint), "Copied to clipboard!");
}

#[test]
fn test_every_theme_survives_reload() {
    setup();
    let store = MemoryStore::new();
    for theme in Theme::ALL {
        save_preference(&store, theme);
        let state = ThemeState::new(load_preference(&store));
        assert!(state.is(theme));
        assert!(!state.is_changing);
    }
}

#[test]
fn test_returning_visitor_gets_saved_choices() {
    setup();
    let store = returning_visitor("cosmos", "en");
    assert_eq!(load_preference::<Theme>(&store), Theme::Cosmos);
    assert_eq!(load_preference::<Language>(&store), Language::En);
}

#[test]
fn test_tampered_storage_starts_fresh() {
    setup();
    let store = returning_visitor("matrix", "fr");
    assert_eq!(load_preference::<Theme>(&store), Theme::Default);
    assert_eq!(load_preference::<Language>(&store), Language::Ru);
}

type Seen<T> = Rc<RefCell<Vec<T>>>;

/// Switches to the theme found in context once mounted, recording each render.
#[component]
fn ThemeSwitcher() -> Element {
    let page = use_context::<RecordingPage>();
    let store = use_context::<Rc<MemoryStore>>();
    let target = use_context::<Theme>();
    let seen = use_context::<Seen<ThemeState>>();
    let state = use_signal(|| ThemeState::new(load_preference(&*store)));
    use_hook(move || {
        spawn(async move { apply_theme(state, &*store, page, target) });
    });
    seen.borrow_mut().push(state());
    rsx! {}
}

#[component]
fn LanguageSwitcher() -> Element {
    let page = use_context::<RecordingPage>();
    let store = use_context::<Rc<MemoryStore>>();
    let seen = use_context::<Seen<LanguageState>>();
    let state = use_signal(|| LanguageState { language: load_preference(&*store) });
    use_hook(move || {
        spawn(async move {
            let next = state.peek().language.toggled();
            apply_language(state, &*store, &page, next);
        });
    });
    seen.borrow_mut().push(state());
    rsx! {}
}

fn theme_dom(store: MemoryStore, target: Theme) -> (VirtualDom, RecordingPage, Rc<MemoryStore>, Seen<ThemeState>) {
    let page = RecordingPage::new();
    let store = Rc::new(store);
    let seen: Seen<ThemeState> = Rc::default();
    let mut dom = VirtualDom::new(ThemeSwitcher)
        .with_root_context(page.clone())
        .with_root_context(store.clone())
        .with_root_context(target)
        .with_root_context(seen.clone());
    dom.rebuild_in_place();
    (dom, page, store, seen)
}

/// Runs queued tasks once. True when that left a component to re-render.
fn settle(dom: &mut VirtualDom) -> bool {
    let dirty = dom.wait_for_work().now_or_never().is_some();
    if dirty {
        dom.render_immediate_to_vec();
    }
    dirty
}

#[test]
fn test_theme_switch_blanks_effects_then_restores() {
    setup();
    let (mut dom, page, store, seen) = theme_dom(MemoryStore::new(), Theme::Cosmos);
    assert_eq!(seen.borrow().last(), Some(&ThemeState::new(Theme::Default)));

    assert!(settle(&mut dom));
    assert_eq!(seen.borrow().last(), Some(&ThemeState { theme: Theme::Cosmos, is_changing: true }));
    assert_eq!(store.get("selectedTheme").as_deref(), Some("cosmos"));
    assert_eq!(page.log()[..5], [
        "+changing-theme",
        "-theme-default",
        "-theme-cosmos",
        "-theme-underwater",
        "+theme-cosmos",
    ]);

    page.elapse();
    assert!(settle(&mut dom));
    assert_eq!(seen.borrow().last(), Some(&ThemeState::new(Theme::Cosmos)));
    assert_eq!(page.log()[5..], ["sleep 150", "-changing-theme"]);
}

#[test]
fn test_switching_to_current_theme_does_nothing() {
    setup();
    let (mut dom, page, store, seen) = theme_dom(returning_visitor("underwater", "ru"), Theme::Underwater);

    assert!(!settle(&mut dom));
    assert_eq!(seen.borrow().as_slice(), &[ThemeState::new(Theme::Underwater)]);
    assert!(page.log().is_empty());
    assert_eq!(store.get("selectedTheme").as_deref(), Some("underwater"));
}

#[test]
fn test_language_toggle_updates_page_and_storage() {
    setup();
    let page = RecordingPage::new();
    let store = Rc::new(MemoryStore::new());
    let seen: Seen<LanguageState> = Rc::default();
    let mut dom = VirtualDom::new(LanguageSwitcher)
        .with_root_context(page.clone())
        .with_root_context(store.clone())
        .with_root_context(seen.clone());
    dom.rebuild_in_place();

    assert!(settle(&mut dom));
    let last = seen.borrow().last().copied();
    assert_eq!(last.map(|s| s.language), Some(Language::En));
    assert_eq!(last.map(|s| s.t(Text::CopiedHint)), Some("Copied to clipboard!"));
    assert_eq!(store.get("selectedLanguage").as_deref(), Some("en"));
    assert_eq!(page.log(), ["lang=en"]);
}
