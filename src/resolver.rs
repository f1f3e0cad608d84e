//! Dependency resolution.
//!
//! Runs at the start of [`Core::init`]( crate::Core::init ) over every plugin
//! that hasn't been initialised yet. With automatic loading enabled, missing
//! dependencies are loaded breadth-first until the closure of the pending set
//! is in the registry. Afterwards, and in strict mode instead, every plugin
//! whose dependencies still aren't met is dropped, along with everything that
//! transitively relied on it.

use std::collections::VecDeque ;
use itertools::Itertools ;
use tracing::{ debug, info, warn };

use crate::{ CapabilityId, CoreConfig, PluginCatalog, PluginDescriptor, PluginId, InitError };
use crate::registry::Registry ;



/// Loads what is missing, then drops what still can't be satisfied.
///
/// Returns the ids of dropped plugins, in the order they were dropped.
pub(crate) fn resolve(
    registry: &mut Registry,
    catalog: &PluginCatalog,
    config: CoreConfig,
) -> Result<Vec<PluginId>, InitError> {

    match config.auto_load_dependencies {
        true => load_missing( registry, catalog, config.allow_unsatisfied )?,
        false => debug!( "automatic dependency loading disabled" ),
    }

    Ok( drop_unsatisfied( registry ))

}

fn load_missing(
    registry: &mut Registry,
    catalog: &PluginCatalog,
    allow_unsatisfied: bool,
) -> Result<(), InitError> {

    let mut queue = registry.pending().iter().cloned().collect::<VecDeque<_>>();

    while let Some( id ) = queue.pop_front() {

        let Some( dependencies ) = registry.get( id.as_str() ).map(| descriptor | descriptor.dependencies().clone() ) else {
            continue
        };

        for dependency in dependencies.plugins() {
            if registry.contains( dependency.as_str() ) { continue }
            debug!( plugin = %id, dependency = %dependency, "loading missing plugin dependency" );
            if let Some( loaded ) = load_default( registry, catalog, dependency, allow_unsatisfied )? {
                queue.push_back( loaded );
            }
        }

        for dependency in dependencies.capabilities() {

            let capability = dependency.capability();
            if registry.has_provider( capability.as_str() ) { continue }

            if dependency.is_expected_already_satisfied() {
                warn!( plugin = %id, %capability, "capability expected to be provided already, falling back on defaults" );
            }
            info!(
                plugin = %id,
                %capability,
                defaults = %dependency.defaults().iter().join( ", " ),
                "no provider for capability, loading defaults"
            );

            for default in dependency.defaults() {
                if registry.contains( default.as_str() ) { continue }
                if let Some( loaded ) = load_default( registry, catalog, default, allow_unsatisfied )? {
                    queue.push_back( loaded );
                }
            }

            if !registry.has_provider( capability.as_str() ) {
                match allow_unsatisfied {
                    true => warn!( plugin = %id, %capability, "defaults do not provide capability" ),
                    false => return Err( InitError::UnsatisfiedDependency { plugin: id.clone(), capability: capability.clone() }),
                }
            }

        }

    }

    Ok(())

}

/// Loads a dependency on behalf of another plugin. When unsatisfied
/// dependencies are tolerated, a failed load is logged and skipped; the
/// dependent is dropped later.
#[inline] fn load_default(
    registry: &mut Registry,
    catalog: &PluginCatalog,
    id: &PluginId,
    allow_unsatisfied: bool,
) -> Result<Option<PluginId>, InitError> {
    match registry.load( catalog, id, false ) {
        Ok( descriptor ) => Ok( Some( descriptor.id().clone() )),
        Err( err ) if allow_unsatisfied => {
            warn!( plugin = %id, error = %err, "failed to load dependency" );
            Ok( None )
        },
        Err( err ) => Err( err.into() ),
    }
}

/// A dependency the registry can't currently satisfy.
enum Unmet<'a> {
    Plugin( &'a PluginId ),
    Capability( &'a CapabilityId ),
}

impl std::fmt::Display for Unmet<'_> {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        match self {
            Self::Plugin( id ) => write!( f, "plugin '{}'", id ),
            Self::Capability( capability ) => write!( f, "capability '{}'", capability ),
        }
    }
}

fn unmet_dependency<'a>( registry: &Registry, descriptor: &'a PluginDescriptor ) -> Option<Unmet<'a>> {
    let dependencies = descriptor.dependencies();
    dependencies.plugins().iter()
        .find(| dependency | !registry.contains( dependency.as_str() ))
        .map( Unmet::Plugin )
        .or_else(|| dependencies.capabilities().iter()
            .map(| dependency | dependency.capability() )
            .find(| capability | !registry.has_provider( capability.as_str() ))
            .map( Unmet::Capability )
        )
}

/// Drops pending plugins with unmet dependencies until none are left.
///
/// Dropping a plugin retracts what it provided, which may leave other pending
/// plugins unsatisfied in turn, hence the loop.
pub(crate) fn drop_unsatisfied( registry: &mut Registry ) -> Vec<PluginId> {

    let mut dropped = Vec::new();

    loop {

        let unsatisfied = registry.pending().iter()
            .filter_map(| id | registry.get( id.as_str() ))
            .filter_map(| descriptor | unmet_dependency( registry, descriptor )
                .map(| unmet | ( descriptor.id().clone(), unmet.to_string() )))
            .collect::<Vec<_>>();

        if unsatisfied.is_empty() { break dropped }

        for ( id, unmet ) in unsatisfied {
            warn!( plugin = %id, missing = %unmet, "dropping plugin with unsatisfied dependency" );
            registry.remove( &id );
            dropped.push( id );
        }

    }

}
