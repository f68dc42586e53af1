use cucumber_tests::features::BizdeskWorld;
use bizdesk_core::routing::{GuestOnly, RequireSession, RouteDecision, SessionStatus};
use cucumber::{then, when};

#[when(expr = "the user opens the members-only page {string}")]
fn when_members_only(world: &mut BizdeskWorld, path: String) {
    let status = SessionStatus::from(&world.auth);
    let decision = RequireSession::new(&world.config).decide(&status, &path, || path.clone());
    world.last_route = Some(decision);
}

#[when(expr = "the user opens the guest-only page {string}")]
fn when_guest_only(world: &mut BizdeskWorld, path: String) {
    let status = SessionStatus::from(&world.auth);
    let decision = GuestOnly::new(&world.config).decide(&status, || path.clone());
    world.last_route = Some(decision);
}

#[then(expr = "the route redirects to {string}")]
fn then_route_redirect(world: &mut BizdeskWorld, location: String) {
    assert_eq!(world.last_route, Some(RouteDecision::Redirect(location)));
}

#[then(expr = "the route shows a spinner")]
fn then_route_spinner(world: &mut BizdeskWorld) {
    assert_eq!(world.last_route, Some(RouteDecision::Spinner));
}

#[then(expr = "the route renders {string}")]
fn then_route_renders(world: &mut BizdeskWorld, path: String) {
    assert_eq!(world.last_route, Some(RouteDecision::Render(path)));
}
