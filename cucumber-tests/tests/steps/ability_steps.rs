use super::parse_pair;
use cucumber_tests::features::BizdeskWorld;
use bizdesk_core::session::AuthState;
use cucumber::{given, then, when};

#[given(expr = "a user with permissions {string}")]
fn given_permissions(world: &mut BizdeskWorld, permissions: String) {
    let list: Vec<String> = permissions.split(',').map(|p| p.trim().to_string()).collect();
    let user = world.user_mut().clone().with_permissions(list);
    world.user = Some(user);
}

#[given(expr = "a user with no permissions")]
fn given_empty_permissions(world: &mut BizdeskWorld) {
    let user = world.user_mut().clone().with_permissions(Vec::<String>::new());
    world.user = Some(user);
}

#[given(expr = "a user with role {string}")]
fn given_role(world: &mut BizdeskWorld, role: String) {
    let user = world.user_mut().clone().with_role(role);
    world.user = Some(user);
}

#[given(expr = "no signed-in user")]
fn given_no_user(world: &mut BizdeskWorld) {
    world.user = None;
}

#[given(expr = "the session is still loading")]
fn given_loading(world: &mut BizdeskWorld) {
    world.sync(AuthState::loading());
}

#[when(expr = "the session resolves")]
fn when_resolves(world: &mut BizdeskWorld) {
    world.resolve();
}

#[then(expr = "the user can {word} {word}")]
fn then_can(world: &mut BizdeskWorld, action: String, subject: String) {
    let (action, subject) = parse_pair(&action, &subject);
    assert!(world.caps().can(action, subject), "expected can {} {}", action, subject);
}

#[then(expr = "the user cannot {word} {word}")]
fn then_cannot(world: &mut BizdeskWorld, action: String, subject: String) {
    let (action, subject) = parse_pair(&action, &subject);
    assert!(world.caps().cannot(action, subject), "expected cannot {} {}", action, subject);
}

#[then(expr = "the user is an admin")]
fn then_admin(world: &mut BizdeskWorld) {
    assert!(world.caps().is_admin());
}

#[then(expr = "the user is not an admin")]
fn then_not_admin(world: &mut BizdeskWorld) {
    assert!(!world.caps().is_admin());
}

#[then(expr = "the ability has {int} rules")]
fn then_rule_count(world: &mut BizdeskWorld, count: usize) {
    assert_eq!(world.caps().ability().rules().len(), count, "{:?}", world.caps().rules_debug());
}
