use super::parse_pair;
use cucumber_tests::features::BizdeskWorld;
use bizdesk_core::guard::{Can, Html, PageGuard, ProtectedPage, Tier, TieredContent};
use cucumber::{then, when};

#[when(expr = "the page guard for {word} {word} runs")]
fn when_page_guard(world: &mut BizdeskWorld, action: String, subject: String) {
    let (action, subject) = parse_pair(&action, &subject);
    let guard = PageGuard::with_config(action, subject, &world.config);
    world.last_guard_passed = Some(guard.check(&world.caps(), &world.navigator));
}

#[then(expr = "the guard lets the page through")]
fn then_guard_passed(world: &mut BizdeskWorld) {
    assert_eq!(world.last_guard_passed, Some(true));
}

#[then(expr = "the browser is sent to {string}")]
fn then_navigated(world: &mut BizdeskWorld, location: String) {
    assert_eq!(world.navigator.take(), Some(location));
}

#[then(expr = "no navigation happens")]
fn then_no_navigation(world: &mut BizdeskWorld) {
    assert_eq!(world.navigator.take(), None);
}

#[when(expr = "the protected page for {word} {word} renders")]
fn when_protected_page(world: &mut BizdeskWorld, action: String, subject: String) {
    let (action, subject) = parse_pair(&action, &subject);
    let page = ProtectedPage::with_config(action, subject, &world.config)
        .render(&world.caps(), || Html::from_trusted("<h1>Protected content</h1>"));
    world.last_page = Some(page);
}

#[then(expr = "the page shows {string}")]
fn then_page_shows(world: &mut BizdeskWorld, text: String) {
    let page = world.last_page.as_ref().expect("no page rendered");
    assert!(page.as_str().contains(&text), "page was: {}", page);
}

#[then(expr = "the page does not show {string}")]
fn then_page_hides(world: &mut BizdeskWorld, text: String) {
    let page = world.last_page.as_ref().expect("no page rendered");
    assert!(!page.as_str().contains(&text), "page was: {}", page);
}

#[then(expr = "the page is the loading view")]
fn then_page_loading(world: &mut BizdeskWorld) {
    assert_eq!(world.last_page, Some(Html::loading()));
}

#[when(expr = "the {word} {word} section renders with fallback {string}")]
fn when_section(world: &mut BizdeskWorld, action: String, subject: String, fallback: String) {
    let (action, subject) = parse_pair(&action, &subject);
    let rendered = Can::new(action, subject)
        .render_or(&world.caps(), || "section".to_string(), || fallback);
    world.last_section = Some(rendered);
}

#[then(expr = "the section shows {string}")]
fn then_section_shows(world: &mut BizdeskWorld, text: String) {
    assert_eq!(world.last_section, Some(Some(text)));
}

#[then(expr = "the section shows nothing")]
fn then_section_empty(world: &mut BizdeskWorld) {
    assert_eq!(world.last_section, Some(None));
}

#[then(expr = "the tiered content shows the {word} branch")]
fn then_tier(world: &mut BizdeskWorld, branch: String) {
    let rendered = TieredContent::new(|| "default".to_string())
        .admin(|| "admin".to_string())
        .editor(|| "editor".to_string())
        .user(|| "user".to_string())
        .guest(|| "guest".to_string())
        .render(&world.caps());

    let expected = match branch.as_str() {
        "admin" => Tier::Admin,
        "editor" => Tier::Editor,
        "user" => Tier::User,
        "guest" => Tier::Guest,
        other => panic!("unknown tier in scenario: {}", other),
    };
    assert_eq!(rendered, Some((expected, branch)));
}

#[then(expr = "the tiered content shows nothing")]
fn then_tier_empty(world: &mut BizdeskWorld) {
    let rendered = TieredContent::new(|| "default".to_string()).render(&world.caps());
    assert_eq!(rendered, None);
}
