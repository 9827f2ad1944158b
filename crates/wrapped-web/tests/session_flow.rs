use serde_json::json;
use std::time::Duration;
use wrapped_core::PageDirection;
use wrapped_domain::{CardInstanceId, CardKind, Deck};
use wrapped_web::carousel::{NavKey, SwipeDirection};
use wrapped_web::{
    CarouselConfig, ClickEvent, ClickOutcome, ElementRef, IgnoreReason, MemorySurface,
    NavigationInput, PageRequest, PageVisibility, SequentialIdSource, Session, SessionOptions,
    VirtualCarousel,
};

type TestSession = Session<MemorySurface, VirtualCarousel>;

fn ranked_items(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| json!({"label": format!("Player {}", i + 1), "value": format!("{} pts", 100 - i)}))
        .collect()
}

fn scenario_deck() -> Deck {
    Deck::from_value(json!([
        {"type": "intro", "title": "2025", "subtitle": "Kali Teeri Wrapped", "theme": "theme-intro"},
        {"type": "ranked_list", "title": "The Boldest Bidders", "items": ranked_items(10), "theme": "theme-2"},
        {
            "type": "big_highlight",
            "title": "Top Scorer",
            "name": "Samir",
            "stat": "4200 pts",
            "description": "Consistent all year.",
            "extraPlayers": [
                {"name": "Rajen", "stat": "4100 pts"},
                {"name": "Jesal", "value": "3900 pts"}
            ],
            "theme": "3"
        },
        {"type": "intro", "title": "Thanks for Playing", "subtitle": "See you next year!", "theme": "theme-5"}
    ]))
    .unwrap()
}

fn start(deck: Deck) -> TestSession {
    let slides = deck.len();
    Session::start(
        deck,
        MemorySurface::new(),
        VirtualCarousel::new(CarouselConfig::default(), slides),
        SessionOptions::default(),
        &mut SequentialIdSource::new(),
    )
    .unwrap()
}

fn ranked_id() -> CardInstanceId {
    CardInstanceId::from("ranked-1")
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_scenario_renders_four_slides_in_order() {
    let session = start(scenario_deck());
    let kinds: Vec<CardKind> = session.surface().slides().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CardKind::Intro,
            CardKind::RankedList,
            CardKind::BigHighlight,
            CardKind::Intro
        ]
    );

    let indices: Vec<usize> = session.slides().iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(session.slides()[2].theme_class, "theme-3");
}

#[test]
fn test_scenario_ranked_list_has_two_pages_with_controls() {
    let session = start(scenario_deck());
    let state = session.render_state(&ranked_id()).unwrap();
    assert_eq!(state.total_pages(), 2);
    assert_eq!(state.current_page(), 0);
    assert_eq!(state.slide_index, 1);

    let markup = &session.slides()[1].markup;
    assert!(markup.contains("pagination-controls"));
    let second_page = markup.find(r#"data-page="1""#).unwrap();
    assert_eq!(markup[..second_page].matches(r#"class="ranked-item""#).count(), 5);
    assert_eq!(markup[second_page..].matches(r#"class="ranked-item""#).count(), 5);

    let controls = session.surface().controls(&ranked_id()).unwrap();
    assert!(!controls.prev_visible);
    assert!(controls.next_visible);
    assert_eq!(controls.indicator, "1 / 2");
}

#[test]
fn test_scenario_podium_ranks() {
    let session = start(scenario_deck());
    let markup = &session.slides()[2].markup;
    assert_eq!(markup.matches(r#"class="podium-player""#).count(), 2);
    assert!(markup.contains(r#"data-rank="2""#));
    assert!(markup.contains(r#"data-rank="3""#));
}

#[test]
fn test_scenario_return_to_start_only_on_final_slide() {
    let mut session = start(scenario_deck());
    let mut seen = Vec::new();
    seen.push((session.current_slide_index(), session.surface().return_to_start_visible()));

    for _ in 0..3 {
        session.navigate(NavigationInput::Swipe(SwipeDirection::Up));
        seen.push((session.current_slide_index(), session.surface().return_to_start_visible()));
    }
    assert_eq!(seen, vec![(0, false), (1, false), (2, false), (3, true)]);

    let outcome = session.handle_click(&ClickEvent::return_to_start());
    assert_eq!(outcome, ClickOutcome::ReturnToStart { moved: true });
    assert_eq!(session.current_slide_index(), 0);
    assert!(!session.surface().return_to_start_visible());
}

#[test]
fn test_next_click_updates_indicator_after_settle_delay() {
    let mut session = start(scenario_deck());
    let id = ranked_id();

    let outcome = session.handle_click(&ClickEvent::pagination(&id, PageDirection::Next));
    assert_eq!(outcome, ClickOutcome::Page(PageRequest::Accepted { from: 0, to: 1 }));

    // Fading out, nothing swapped yet.
    assert_eq!(
        session.surface().pages(&id).unwrap(),
        &[PageVisibility::FadingOut, PageVisibility::Hidden]
    );
    assert_eq!(session.surface().controls(&id).unwrap().indicator, "1 / 2");
    session.advance(ms(299));
    assert_eq!(session.render_state(&id).unwrap().current_page(), 0);
    assert_eq!(session.surface().controls(&id).unwrap().indicator, "1 / 2");

    session.advance(ms(1));
    assert_eq!(session.render_state(&id).unwrap().current_page(), 1);
    assert_eq!(
        session.surface().pages(&id).unwrap(),
        &[PageVisibility::Hidden, PageVisibility::FadingIn]
    );
    let controls = session.surface().controls(&id).unwrap();
    assert_eq!(controls.indicator, "2 / 2");
    assert!(controls.prev_visible);
    assert!(!controls.next_visible);
    assert_eq!(session.carousel().widget().layout_updates(), 1);

    let again = session.handle_click(&ClickEvent::pagination(&id, PageDirection::Next));
    assert_eq!(again, ClickOutcome::Page(PageRequest::Ignored(IgnoreReason::OutOfRange)));
    session.settle();
    assert_eq!(session.render_state(&id).unwrap().current_page(), 1);
    assert_eq!(session.surface().controls(&id).unwrap().indicator, "2 / 2");
}

#[test]
fn test_exactly_one_page_displayed_throughout() {
    let deck = Deck::from_value(json!([
        {"type": "ranked_list", "title": "Long", "items": ranked_items(23), "theme": "theme-1"},
        {"type": "intro", "title": "end", "subtitle": "", "theme": "theme-2"}
    ]))
    .unwrap();
    let mut session = start(deck);
    let id = ranked_id();
    assert_eq!(session.render_state(&id).unwrap().total_pages(), 5);

    let script = [
        PageDirection::Next,
        PageDirection::Next,
        PageDirection::Prev,
        PageDirection::Next,
        PageDirection::Next,
        PageDirection::Next,
        PageDirection::Next,
    ];
    for direction in script {
        session.request_page(&id, direction);
        assert_eq!(session.surface().displayed_pages(&id).len(), 1);
        session.advance(ms(150));
        assert_eq!(session.surface().displayed_pages(&id).len(), 1);
        session.advance(ms(150));
        let displayed = session.surface().displayed_pages(&id);
        assert_eq!(displayed, vec![session.render_state(&id).unwrap().current_page()]);
    }
    assert_eq!(session.render_state(&id).unwrap().current_page(), 4);
    assert_eq!(session.surface().controls(&id).unwrap().indicator, "5 / 5");
}

#[test]
fn test_repeated_prev_at_first_page_is_noop() {
    let mut session = start(scenario_deck());
    let id = ranked_id();
    for _ in 0..10 {
        assert_eq!(
            session.handle_click(&ClickEvent::pagination(&id, PageDirection::Prev)),
            ClickOutcome::Page(PageRequest::Ignored(IgnoreReason::OutOfRange))
        );
    }
    session.settle();
    assert_eq!(session.render_state(&id).unwrap().current_page(), 0);
    assert_eq!(session.surface().displayed_pages(&id), vec![0]);
}

#[test]
fn test_double_click_during_fade_is_single_transition() {
    let mut session = start(scenario_deck());
    let id = ranked_id();
    let click = ClickEvent::pagination(&id, PageDirection::Next);

    session.handle_click(&click);
    session.advance(ms(100));
    assert_eq!(
        session.handle_click(&click),
        ClickOutcome::Page(PageRequest::Ignored(IgnoreReason::InFlight))
    );
    session.settle();
    assert_eq!(session.render_state(&id).unwrap().current_page(), 1);
    assert_eq!(session.carousel().widget().layout_updates(), 1);
}

#[test]
fn test_clicks_without_matching_target_are_unhandled() {
    let mut session = start(scenario_deck());

    let plain = ClickEvent::new(vec![ElementRef::new().with_class("title")]);
    assert_eq!(session.handle_click(&plain), ClickOutcome::Unhandled);

    let stray = ClickEvent::pagination(&CardInstanceId::from("ranked-404"), PageDirection::Next);
    assert_eq!(
        session.handle_click(&stray),
        ClickOutcome::Page(PageRequest::Ignored(IgnoreReason::UnknownCard))
    );

    let no_direction = ClickEvent::new(vec![ElementRef::new()
        .with_class("pagination-button")
        .with_data("card-id", "ranked-1")]);
    assert_eq!(session.handle_click(&no_direction), ClickOutcome::Unhandled);

    assert_eq!(
        session.handle_click(&ClickEvent::return_to_start()),
        ClickOutcome::ReturnToStart { moved: false }
    );
}

#[test]
fn test_scroll_hint_attached_after_delay() {
    let mut session = start(scenario_deck());
    assert!(!session.surface().scroll_hint_attached());
    session.advance(ms(99));
    assert!(!session.surface().scroll_hint_attached());
    session.advance(ms(1));
    assert!(session.surface().scroll_hint_visible());

    session.navigate(NavigationInput::Key(NavKey::ArrowDown));
    assert!(!session.surface().scroll_hint_visible());

    session.navigate(NavigationInput::Key(NavKey::Home));
    assert_eq!(session.current_slide_index(), 0);
    assert!(!session.surface().scroll_hint_visible());
}

#[test]
fn test_scroll_hint_skipped_when_user_already_moved() {
    let mut session = start(scenario_deck());
    session.navigate(NavigationInput::Wheel { delta_y: 120.0 });
    session.settle();
    assert!(!session.surface().scroll_hint_attached());
}

#[test]
fn test_empty_list_card_has_one_page_and_no_controls() {
    let deck = Deck::from_value(json!([
        {"type": "comparison", "title": "Nobody", "items": [], "theme": "theme-5"}
    ]))
    .unwrap();
    let mut session = start(deck);
    let id = CardInstanceId::from("comparison-1");

    assert_eq!(session.render_state(&id).unwrap().total_pages(), 1);
    assert!(session.surface().controls(&id).is_none());
    assert_eq!(session.surface().displayed_pages(&id), vec![0]);
    assert_eq!(
        session.request_page(&id, PageDirection::Next),
        PageRequest::Ignored(IgnoreReason::OutOfRange)
    );
    // A one-slide deck starts on its last slide.
    assert!(session.surface().return_to_start_visible());
}

#[test]
fn test_hostile_labels_render_as_text() {
    let deck = Deck::from_value(json!([
        {
            "type": "ranked_list",
            "title": "<script>alert(1)</script>",
            "items": [{"label": "\"><img src=x onerror=alert(1)>", "value": "a & b"}],
            "theme": "theme-1"
        }
    ]))
    .unwrap();
    let session = start(deck);
    let markup = &session.slides()[0].markup;
    assert!(!markup.contains("<script>"));
    assert!(!markup.contains("<img"));
    assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(markup.contains("&quot;&gt;&lt;img src=x onerror=alert(1)&gt;"));
    assert!(markup.contains("a &amp; b"));
}

#[test]
fn test_slide_change_notifications_from_external_widget() {
    let mut session = start(scenario_deck());
    session.on_slide_change(3);
    assert!(session.surface().return_to_start_visible());
    session.on_slide_change(2);
    assert!(!session.surface().return_to_start_visible());
    assert_eq!(session.current_slide_index(), 2);
}

#[test]
fn test_fade_delay_follows_options() {
    let deck = scenario_deck();
    let slides = deck.len();
    let mut session = Session::start(
        deck,
        MemorySurface::new(),
        VirtualCarousel::new(CarouselConfig::default(), slides),
        SessionOptions {
            fade_delay: ms(50),
            scroll_hint_delay: ms(0),
        },
        &mut SequentialIdSource::new(),
    )
    .unwrap();
    let id = ranked_id();
    session.request_page(&id, PageDirection::Next);
    session.advance(ms(50));
    assert_eq!(session.render_state(&id).unwrap().current_page(), 1);
}
