//! Integration tests for RESTful address resolution and dispatch.

use std::sync::Arc;

use rstest::{fixture, rstest};

use switchyard_naming::{Convention, Namer};
use switchyard_outcome::codes;
use switchyard_routes::{Action, Api, Area, Instantiation, Registry, Routes, Verb};

struct SampleRest;

struct AppContext {
    user: &'static str,
}

const CTX: AppContext = AppContext { user: "kishore" };

const REST_ACTIONS: [(&str, Verb); 8] = [
    ("getAll", Verb::Get),
    ("getById", Verb::Get),
    ("create", Verb::Post),
    ("update", Verb::Put),
    ("patch", Verb::Patch),
    ("delete", Verb::Delete),
    ("deleteById", Verb::Delete),
    ("activateById", Verb::Post),
];

/// Builds `app.SampleREST` with the REST action set, optionally renaming
/// every key through `namer` the way a registration collaborator would.
fn rest_routes(namer: Option<Arc<dyn Namer>>) -> Routes<AppContext> {
    let rename = |raw: &str| namer.as_ref().map_or_else(|| raw.to_owned(), |n| n.rename(raw));

    let actions = Registry::from_items(REST_ACTIONS.map(|(name, verb)| {
        Action::new(
            rename(name),
            Convention::LowerUnderscore.rename(name),
            verb,
        )
    }))
    .expect("unique action names");

    let api = Api::new(
        rename("SampleREST"),
        "SampleRest",
        Instantiation::fresh_with_context(|_ctx: &AppContext| Ok(Arc::new(SampleRest))),
        actions,
    );

    let mut apis = Registry::new();
    apis.register(api).expect("unique api names");
    let mut areas = Registry::new();
    areas.register(Area::new("app", apis)).expect("unique area names");

    let routes = Routes::new(areas);
    match namer {
        Some(n) => routes.with_namer(n),
        None => routes,
    }
}

#[fixture]
fn routes() -> Routes<AppContext> {
    rest_routes(None)
}

#[rstest]
fn every_rest_action_is_contained_and_resolvable(routes: Routes<AppContext>) {
    for (name, _verb) in REST_ACTIONS {
        assert!(
            routes.contains_action("app", "SampleREST", name),
            "expected app.SampleREST.{name}"
        );
        let outcome = routes.resolve("app", "SampleREST", name, &CTX);
        assert!(outcome.is_success(), "expected app.SampleREST.{name}");
    }
}

#[rstest]
fn get_by_id_resolves_to_the_named_action(routes: Routes<AppContext>) {
    let outcome = routes.resolve("app", "SampleREST", "getById", &CTX);
    let resolved = outcome.value().expect("resolved reference");
    assert_eq!(resolved.api().name(), "SampleREST");
    assert_eq!(resolved.action().name(), "getById");
    assert_eq!(resolved.action().handler_ref(), "get_by_id");
    assert_eq!(resolved.action().verb(), Verb::Get);
    assert!(resolved.instance().downcast_ref::<SampleRest>().is_some());
}

#[rstest]
fn missing_action_reports_not_found_with_the_full_triple(routes: Routes<AppContext>) {
    let outcome = routes.resolve("app", "SampleREST", "missingAction", &CTX);
    assert_eq!(outcome.code(), codes::NOT_FOUND);
    let msg = outcome.msg();
    assert!(msg.contains("app"));
    assert!(msg.contains("SampleREST"));
    assert!(msg.contains("missingAction"));
}

#[rstest]
#[case::api_path("app.SampleREST", true)]
#[case::action_path("app.SampleREST.create", true)]
#[case::unknown_action("app.SampleREST.truncate", false)]
fn check_accepts_registered_paths(
    routes: Routes<AppContext>,
    #[case] path: &str,
    #[case] expected: bool,
) {
    assert_eq!(routes.check(path), expected);
}

#[rstest]
fn per_request_instances_are_distinct(routes: Routes<AppContext>) {
    let first = routes
        .resolve("app", "SampleREST", "getAll", &CTX)
        .into_result()
        .expect("resolve")
        .into_instance();
    let second = routes
        .resolve("app", "SampleREST", "getAll", &CTX)
        .into_result()
        .expect("resolve")
        .into_instance();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn renamed_registration_resolves_by_the_renamed_keys() {
    let routes = rest_routes(Some(Arc::new(Convention::LowerHyphen)));
    assert_eq!(routes.namer().expect("namer").label(), "lower-hyphen");

    assert!(routes.check("app.sample-rest.get-by-id"));
    let outcome = routes.resolve("app", "sample-rest", "get-by-id", &CTX);
    let resolved = outcome.value().expect("resolved reference");
    assert_eq!(resolved.action().handler_ref(), "get_by_id");

    // the raw spelling was never inserted, so it does not match
    assert!(!routes.contains_action("app", "SampleREST", "getById"));
}

#[test]
fn context_reaches_the_handler_factory() {
    struct Audited {
        user: String,
    }

    let actions =
        Registry::from_items([Action::new("getAll", "get_all", Verb::Get)]).expect("unique names");
    let api = Api::new(
        "audited",
        "Audited",
        Instantiation::fresh_with_context(|ctx: &AppContext| {
            Ok(Arc::new(Audited {
                user: ctx.user.to_owned(),
            }))
        }),
        actions,
    );
    let mut apis = Registry::new();
    apis.register(api).expect("unique api names");
    let mut areas = Registry::new();
    areas.register(Area::new("app", apis)).expect("unique area names");
    let routes = Routes::new(areas);

    let outcome = routes.resolve("app", "audited", "getAll", &CTX);
    let resolved = outcome.value().expect("resolved reference");
    let handler = resolved
        .instance()
        .downcast_ref::<Audited>()
        .expect("handler type");
    assert_eq!(handler.user, "kishore");
}
