//! Tests for the resolution facade's failure policies and precondition gate
//!
//! Covers the contract shared by the three resolution families: how absence
//! is reported, how activation failures propagate, and the proof that
//! argument validation runs before any collaborator is consulted.

use std::sync::Arc;

use resolvent_application::ResolutionContext;
use resolvent_domain::error::Error;
use resolvent_domain::value_objects::{
    ComponentInstance, Parameter, ParameterSet, Registration, ServiceIdentity,
};

use crate::support::{
    CountingActivator, FailingActivator, SpyRegistry, factory_registration, shared_registration,
};

fn context(registry: SpyRegistry) -> (ResolutionContext, Arc<SpyRegistry>, Arc<CountingActivator>) {
    let registry = Arc::new(registry);
    let activator = Arc::new(CountingActivator::default());
    let context = ResolutionContext::new(registry.clone(), activator.clone());
    (context, registry, activator)
}

#[test]
fn test_unregistered_identity_reports_per_policy() {
    let (context, _, _) = context(SpyRegistry::empty());
    let identity = ServiceIdentity::named("missing");
    let params = ParameterSet::empty();

    let err = context.resolve_service(&identity, &params).err().unwrap();
    assert!(matches!(err, Error::NotRegistered { identity: i } if i == identity));

    assert!(context.try_resolve_service(&identity, &params).unwrap().is_none());
    assert!(context.resolve_optional_service(&identity, &params).unwrap().is_none());
    assert!(!context.is_registered_service(&identity).unwrap());
}

#[test]
fn test_registered_identity_resolves_through_all_three_forms() {
    let identity = ServiceIdentity::named("greeter");
    let (context, _, activator) = context(SpyRegistry::with([shared_registration(
        identity.clone(),
        "hello".to_string(),
    )]));
    let params = ParameterSet::empty();

    let resolved = context.resolve_service(&identity, &params).unwrap();
    let tried = context.try_resolve_service(&identity, &params).unwrap().unwrap();
    let optional = context.resolve_optional_service(&identity, &params).unwrap().unwrap();

    // one activation per call, same shared instance each time
    assert_eq!(activator.activation_count(), 3);
    let resolved = resolved.downcast::<String>().unwrap();
    let tried = tried.downcast::<String>().unwrap();
    let optional = optional.downcast::<String>().unwrap();
    assert!(Arc::ptr_eq(&resolved, &tried));
    assert!(Arc::ptr_eq(&resolved, &optional));
    assert_eq!(*resolved, "hello");

    assert!(context.is_registered_service(&identity).unwrap());
}

#[test]
fn test_activation_failure_propagates_through_every_form() {
    let identity = ServiceIdentity::named("broken");
    let registry = Arc::new(SpyRegistry::with([factory_registration(
        identity.clone(),
        || 0u8,
    )]));
    let context = ResolutionContext::new(registry, Arc::new(FailingActivator));
    let params = ParameterSet::empty();

    // absence is recoverable for two of three forms, activation failure never is
    for result in [
        context.resolve_service(&identity, &params).map(Some),
        context.try_resolve_service(&identity, &params),
        context.resolve_optional_service(&identity, &params),
    ] {
        let err = result.err().unwrap();
        assert!(matches!(err, Error::Activation { ref message, .. } if message == "boom"));
    }
}

#[test]
fn test_invalid_identity_fails_before_registry_is_touched() {
    let (context, registry, activator) = context(SpyRegistry::empty());
    let invalid = ServiceIdentity::named("");
    let params = ParameterSet::empty();

    assert!(matches!(
        context.resolve_service(&invalid, &params),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        context.try_resolve_service(&invalid, &params),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        context.resolve_optional_service(&invalid, &params),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        context.is_registered_service(&invalid),
        Err(Error::InvalidArgument { .. })
    ));

    assert_eq!(registry.lookup_count(), 0);
    assert_eq!(activator.activation_count(), 0);
}

#[test]
fn test_invalid_parameter_name_fails_before_registry_is_touched() {
    let identity = ServiceIdentity::named("greeter");
    let (context, registry, activator) = context(SpyRegistry::with([factory_registration(
        identity.clone(),
        || 1u32,
    )]));
    let params = ParameterSet::empty().with(Parameter::named("", 1u32));

    assert!(matches!(
        context.resolve_service(&identity, &params),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(registry.lookup_count(), 0);
    assert_eq!(activator.activation_count(), 0);
}

#[test]
fn test_is_registered_never_activates() {
    let identity = ServiceIdentity::named("greeter");
    let (context, _, activator) = context(SpyRegistry::with([factory_registration(
        identity.clone(),
        || 1u32,
    )]));

    for _ in 0..5 {
        assert!(context.is_registered_service(&identity).unwrap());
    }
    assert_eq!(activator.activation_count(), 0);

    // repeated existence checks do not disturb later resolution
    assert!(context.resolve_service(&identity, &ParameterSet::empty()).is_ok());
}

#[test]
fn test_parameters_reach_the_activator_in_order() {
    let identity = ServiceIdentity::named("salutation");
    let registration = Registration::new(
        identity.clone(),
        Arc::new(|params: &ParameterSet| {
            let who = params
                .named("who")
                .and_then(|p| p.value_as::<String>())
                .ok_or_else(|| Error::activation("missing 'who' parameter"))?;
            Ok(Arc::new(format!("hello {who}")) as ComponentInstance)
        }),
    );
    let (context, _, _) = context(SpyRegistry::with([registration]));

    let params = ParameterSet::empty().with(Parameter::named("who", "world".to_string()));
    let instance = context.resolve_service(&identity, &params).unwrap();
    assert_eq!(*instance.downcast::<String>().unwrap(), "hello world");

    // the same factory without its parameter fails as an activation error
    let err = context.resolve_service(&identity, &ParameterSet::empty()).err().unwrap();
    assert!(matches!(err, Error::Activation { .. }));
}
