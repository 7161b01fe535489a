//! Tests proving every convenience spelling normalizes to the canonical call
//!
//! Each adapter must be behaviorally identical to `resolve_service` invoked
//! with the identity from the normalization table and the empty parameter
//! set.

use std::sync::Arc;

use uuid::Uuid;

use resolvent_application::ResolutionContext;
use resolvent_domain::error::Error;
use resolvent_domain::value_objects::{
    ComponentInstance, ParameterSet, Registration, ServiceIdentity, TypeKey,
};

use crate::support::{CountingActivator, SpyRegistry, shared_registration};

trait Greeting: Send + Sync {
    fn greet(&self) -> String;
}

struct Greeter;

impl Greeting for Greeter {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

fn trait_registration(identity: ServiceIdentity) -> Registration {
    let shared: Arc<Arc<dyn Greeting>> = Arc::new(Arc::new(Greeter));
    Registration::new(
        identity,
        Arc::new(move |_params| Ok(shared.clone() as ComponentInstance)),
    )
}

fn context(registrations: impl IntoIterator<Item = Registration>) -> ResolutionContext {
    ResolutionContext::new(
        Arc::new(SpyRegistry::with(registrations)),
        Arc::new(CountingActivator::default()),
    )
}

#[test]
fn test_static_type_form_equals_typed_identity_form() {
    let context = context([shared_registration(ServiceIdentity::of::<u32>(), 42u32)]);

    let sugared = context.resolve::<u32>().unwrap();
    let canonical = context
        .resolve_service(&ServiceIdentity::of::<u32>(), &ParameterSet::empty())
        .unwrap()
        .downcast::<u32>()
        .unwrap();

    assert!(Arc::ptr_eq(&sugared, &canonical));
}

#[test]
fn test_runtime_type_form_equals_typed_identity_form() {
    let context = context([shared_registration(ServiceIdentity::of::<u32>(), 7u32)]);

    let by_type = context
        .resolve_by_type(TypeKey::of::<u32>(), &ParameterSet::empty())
        .unwrap();
    assert_eq!(*by_type.downcast::<u32>().unwrap(), 7);
}

#[test]
fn test_bare_string_form_equals_named_identity_form() {
    let context = context([shared_registration(
        ServiceIdentity::named("formal"),
        "Good evening".to_string(),
    )]);

    let sugared = context
        .resolve_by_name("formal", &ParameterSet::empty())
        .unwrap()
        .downcast::<String>()
        .unwrap();
    let canonical = context
        .resolve_service(&ServiceIdentity::named("formal"), &ParameterSet::empty())
        .unwrap()
        .downcast::<String>()
        .unwrap();

    assert!(Arc::ptr_eq(&sugared, &canonical));

    // typed sugar over the same name
    let named = context.resolve_named::<String>("formal").unwrap();
    assert!(Arc::ptr_eq(&named, &canonical));
}

#[test]
fn test_keyed_forms_reduce_to_keyed_identity() {
    let key = Uuid::new_v4();
    let other = Uuid::new_v4();
    let context = context([shared_registration(ServiceIdentity::keyed(key), 9u8)]);

    let sugared = context.resolve_keyed::<u8>(key).unwrap();
    let canonical = context
        .resolve_service(&ServiceIdentity::keyed(key), &ParameterSet::empty())
        .unwrap()
        .downcast::<u8>()
        .unwrap();
    assert!(Arc::ptr_eq(&sugared, &canonical));

    let err = context.resolve_keyed::<u8>(other).unwrap_err();
    assert!(matches!(err, Error::NotRegistered { .. }));
}

#[test]
fn test_flagged_and_optional_sugar_agree_with_canonical_absence() {
    let context = context([]);

    assert!(context.try_resolve::<u32>().unwrap().is_none());
    assert!(context.try_resolve_named::<u32>("formal").unwrap().is_none());
    assert!(context.try_resolve_keyed::<u32>(Uuid::new_v4()).unwrap().is_none());
    assert!(context.resolve_optional::<u32>().unwrap().is_none());
    assert!(context.resolve_optional_named::<u32>("formal").unwrap().is_none());
    assert!(!context.is_registered::<u32>().unwrap());
    assert!(!context.is_registered_named("formal").unwrap());
    assert!(!context.is_registered_keyed(Uuid::new_v4()).unwrap());
}

#[test]
fn test_trait_service_resolves_by_interface_type() {
    let context = context([trait_registration(ServiceIdentity::of::<dyn Greeting>())]);

    let greeting = context.resolve_trait::<dyn Greeting>().unwrap();
    assert_eq!(greeting.greet(), "hello");

    assert!(context.is_registered::<dyn Greeting>().unwrap());
    assert!(context.try_resolve_trait::<dyn Greeting>().unwrap().is_some());
    assert!(context.resolve_optional_trait::<dyn Greeting>().unwrap().is_some());
}

#[test]
fn test_trait_service_resolves_by_name_and_key() {
    let key = Uuid::new_v4();
    let context = context([
        trait_registration(ServiceIdentity::named("formal")),
        trait_registration(ServiceIdentity::keyed(key)),
    ]);

    let by_name = context.resolve_named_trait::<dyn Greeting>("formal").unwrap();
    let by_key = context.resolve_keyed_trait::<dyn Greeting>(key).unwrap();
    assert_eq!(by_name.greet(), "hello");
    assert_eq!(by_key.greet(), "hello");
}

#[test]
fn test_wrong_requested_type_is_a_mismatch_not_absence() {
    let context = context([shared_registration(
        ServiceIdentity::named("formal"),
        "Good evening".to_string(),
    )]);

    let err = context.resolve_named::<u32>("formal").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected, .. } if expected == "u32"));
}
