//! End-to-end access flow: request -> session -> ability -> guards -> response

use bizdesk_core::ability::{compile_from_role, Action, Subject};
use bizdesk_core::config::{AccessConfig, SessionsConfig};
use bizdesk_core::guard::{
    Can, Html, PageGuard, PageVisibility, ProtectedPage, RecordingNavigator, Tier, TieredContent,
};
use bizdesk_core::query::Capabilities;
use bizdesk_core::routing::{
    GuestOnly, RequireSession, RouteDecision, RouteGuard, RouteTable, SessionStatus,
};
use bizdesk_core::session::{
    AuthState, MemorySessionStore, Session, SessionResolver, SessionStore, SessionUser,
};
use bizdesk_core::store::{AbilityContext, AbilityProvider, StoreState};
use chrono::Duration;
use hyper::{Method, Request, StatusCode};
use std::sync::Arc;

async fn signed_in_store(user: SessionUser) -> (Arc<MemorySessionStore>, String) {
    let store = Arc::new(MemorySessionStore::new());
    let session = Session::issue(user, Duration::hours(1));
    let token = session.id.clone();
    store.set(session).await.unwrap();
    (store, token)
}

fn request(path: &str, token: Option<&str>) -> Request<()> {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(token) = token {
        builder = builder.header("cookie", format!("bizdesk_session={}", token));
    }
    builder.body(()).unwrap()
}

#[tokio::test]
async fn permission_user_through_every_guard() {
    let user = SessionUser::new("42")
        .with_role("super_admin")
        .with_permissions(["companies.view", "companies.create"]);
    let (store, token) = signed_in_store(user).await;
    let resolver = SessionResolver::new(store, &SessionsConfig::default());
    let mut provider = AbilityProvider::new();

    let mut req = request("/companies", Some(&token));
    provider.context().install(req.extensions_mut());
    let auth = resolver.resolve_into(&req, &mut provider).await.unwrap();

    // Permissions win over the role
    let context = AbilityContext::from_extensions(req.extensions()).unwrap();
    let caps = Capabilities::from_context(&context);
    assert_eq!(caps.state(), StoreState::Resolved);
    assert!(caps.can(Action::View, Subject::Companies));
    assert!(caps.can(Action::Create, Subject::Companies));
    assert!(!caps.can(Action::Delete, Subject::Companies));
    assert!(!caps.is_admin());

    let table = RouteTable::new()
        .route("/auth/*", RouteGuard::GuestOnly(GuestOnly::new(&AccessConfig::default())))
        .route("/*", RouteGuard::RequireSession(RequireSession::new(&AccessConfig::default())));
    let status = SessionStatus::from(&auth);
    assert_eq!(
        table.decide(&Method::GET, req.uri(), &status, || "page"),
        RouteDecision::Render("page")
    );
    let sign_in = request("/auth/signin?callbackUrl=%2Fcompanies", Some(&token));
    assert_eq!(
        table.decide(&Method::GET, sign_in.uri(), &status, || "form"),
        RouteDecision::Redirect("/dashboard".to_string())
    );

    let navigator = RecordingNavigator::new();
    assert!(PageGuard::new(Action::View, Subject::Companies).check(&caps, &navigator));
    assert!(!PageGuard::new(Action::Delete, Subject::Companies).check(&caps, &navigator));
    assert_eq!(navigator.take().as_deref(), Some("/unauthorized"));

    let delete_button = Can::new(Action::Delete, Subject::Companies).render(&caps, || "delete");
    assert_eq!(delete_button, None);
}

#[tokio::test]
async fn anonymous_request_is_sent_to_sign_in() {
    let resolver =
        SessionResolver::new(Arc::new(MemorySessionStore::new()), &SessionsConfig::default());
    let mut provider = AbilityProvider::new();

    let req = request("/companies?tab=all", None);
    let auth = resolver.resolve_into(&req, &mut provider).await.unwrap();
    let caps = Capabilities::new(provider.snapshot());

    let table = RouteTable::new()
        .route("/*", RouteGuard::RequireSession(RequireSession::new(&AccessConfig::default())));
    let decision = table.decide(&Method::GET, req.uri(), &SessionStatus::from(&auth), || {
        Html::from_trusted("<p>companies</p>")
    });
    let resp = decision.into_response().unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()["location"], "/auth/signin?callbackUrl=%2Fcompanies%3Ftab%3Dall");

    let page = ProtectedPage::new(Action::View, Subject::Companies)
        .render(&caps, || Html::from_trusted("<p>companies</p>"));
    assert!(page.as_str().contains("Access Denied"));
    assert!(page.as_str().contains(r#"href="/dashboard""#));
}

#[test]
fn loading_never_denies() {
    let mut provider = AbilityProvider::new();
    let caps = Capabilities::new(provider.sync(&AuthState::loading()));
    let navigator = RecordingNavigator::new();

    assert!(!PageGuard::new(Action::View, Subject::Dashboard).check(&caps, &navigator));
    assert_eq!(navigator.location(), None);

    let page = ProtectedPage::with_config(
        Action::View,
        Subject::Dashboard,
        &AccessConfig::default(),
    )
    .render(&caps, || Html::from_trusted("<p>dash</p>"));
    assert_eq!(page, Html::loading());

    assert!(TieredContent::new(|| "default").guest(|| "guest").render(&caps).is_none());
    let loading = SessionStatus::from(&AuthState::loading());
    assert_eq!(
        RequireSession::new(&AccessConfig::default()).decide(&loading, "/", || ()),
        RouteDecision::Spinner
    );
}

#[test]
fn role_only_user_gets_legacy_grants() {
    let mut provider = AbilityProvider::new();
    let admin = SessionUser::new("7").with_role("admin");
    let caps = Capabilities::new(provider.sync(&AuthState::authenticated(admin)));

    assert_eq!(*caps.ability(), compile_from_role("admin"));
    assert!(caps.can(Action::Delete, Subject::Vendors));
    assert!(!caps.can(Action::Delete, Subject::Users));

    let flags = PageVisibility::from_capabilities(&caps);
    assert!(!flags.is_admin);

    let rendered = TieredContent::new(|| "default").admin(|| "admin").render(&caps);
    assert_eq!(rendered, Some((Tier::Guest, "default")));
}

#[test]
fn user_change_replaces_ability() {
    let mut provider = AbilityProvider::new();
    let context = provider.context();

    provider.sync(&AuthState::authenticated(SessionUser::new("1").with_role("super_admin")));
    assert!(Capabilities::from_context(&context).is_admin());

    let vendor_viewer = SessionUser::new("2").with_permissions(["vendors.view"]);
    provider.sync(&AuthState::authenticated(vendor_viewer));
    let caps = Capabilities::from_context(&context);
    assert!(!caps.is_admin());
    assert!(caps.can(Action::View, Subject::Vendors));

    provider.sync(&AuthState::anonymous());
    assert!(Capabilities::from_context(&context).ability().is_empty());
}
